use anyhow::Result;
use mini_metronome::domain::model::{RequestEnvelope, ResponseEnvelope};
use mini_metronome::{Skill, SkillSettings};
use serde_json::{json, Value};

fn intent_envelope(name: &str, slots: Value) -> Result<RequestEnvelope> {
    Ok(serde_json::from_value(json!({
        "version": "1.0",
        "session": {
            "sessionId": "amzn1.echo-api.session.test",
            "new": true,
            "application": { "applicationId": "amzn1.ask.skill.test" }
        },
        "request": {
            "type": "IntentRequest",
            "requestId": "amzn1.echo-api.request.test",
            "timestamp": "2019-03-02T10:00:00Z",
            "locale": "en-US",
            "intent": {
                "name": name,
                "confirmationStatus": "NONE",
                "slots": slots
            }
        }
    }))?)
}

fn request_envelope(request: Value) -> Result<RequestEnvelope> {
    Ok(serde_json::from_value(json!({
        "version": "1.0",
        "request": request
    }))?)
}

fn invoke(envelope: &RequestEnvelope) -> Result<Value> {
    let skill = Skill::new(SkillSettings::default());
    let response: ResponseEnvelope = skill.invoke(envelope);
    Ok(serde_json::to_value(response)?)
}

fn play_slots(tempo: Option<&str>, duration: Option<&str>) -> Value {
    let mut tempo_slot = json!({ "name": "tempo" });
    if let Some(tempo) = tempo {
        tempo_slot["value"] = json!(tempo);
    }
    let mut duration_slot = json!({ "name": "duration" });
    if let Some(duration) = duration {
        duration_slot["value"] = json!(duration);
    }
    json!({ "tempo": tempo_slot, "duration": duration_slot })
}

#[test]
fn test_play_metronome_with_default_duration() -> Result<()> {
    let envelope = intent_envelope("PlayMetronomeIntent", play_slots(Some("80"), None))?;
    let value = invoke(&envelope)?;
    let url = "https://metronomer.com/download.php?mp3=/Click_80_1_4_401_rdm.mp3&pan=";
    let icon = "https://mini-metronome.s3-eu-west-1.amazonaws.com/mini_metronome.png";

    assert_eq!(value["version"], "1.0");
    let response = &value["response"];
    assert_eq!(
        response["outputSpeech"],
        json!({
            "type": "SSML",
            "ssml": "<speak>Playing metronome with tempo 80 beats per minute for <say-as interpret-as=\"time\">5'0\"</say-as>.</speak>"
        })
    );
    assert_eq!(
        response["card"],
        json!({
            "type": "Standard",
            "title": "Mini Metronome",
            "text": "80 beats per minute",
            "image": { "smallImageUrl": icon, "largeImageUrl": icon }
        })
    );
    assert_eq!(
        response["directives"],
        json!([{
            "type": "AudioPlayer.Play",
            "playBehavior": "REPLACE_ALL",
            "audioItem": {
                "stream": {
                    "token": url,
                    "url": url,
                    "offsetInMilliseconds": 0
                },
                "metadata": {
                    "title": "Mini Metronome",
                    "subtitle": "80 beats per minute",
                    "art": {
                        "contentDescription": "Mini Metronome",
                        "sources": [{ "url": icon }]
                    },
                    "backgroundImage": {
                        "contentDescription": "Mini Metronome",
                        "sources": [{ "url": icon }]
                    }
                }
            }
        }])
    );
    assert_eq!(response["shouldEndSession"], true);
    Ok(())
}

#[test]
fn test_play_metronome_with_explicit_duration() -> Result<()> {
    let envelope =
        intent_envelope("PlayMetronomeIntent", play_slots(Some("120"), Some("PT10S")))?;
    let value = invoke(&envelope)?;

    let stream = &value["response"]["directives"][0]["audioItem"]["stream"];
    assert_eq!(
        stream["url"],
        "https://metronomer.com/download.php?mp3=/Click_120_1_4_21_rdm.mp3&pan="
    );
    assert!(value["response"]["outputSpeech"]["ssml"]
        .as_str()
        .unwrap()
        .contains("0'10\""));
    Ok(())
}

#[test]
fn test_tempo_out_of_range() -> Result<()> {
    for tempo in [
        "19",
        "241",
        "-80",
        "99999999999999999999",
        "-99999999999999999999",
    ] {
        let envelope = intent_envelope("PlayMetronomeIntent", play_slots(Some(tempo), None))?;
        let value = invoke(&envelope)?;
        let response = &value["response"];

        assert_eq!(
            response["outputSpeech"]["ssml"],
            "<speak>Tempo must be between 20 and 240 beats per minute.</speak>"
        );
        assert!(response.get("directives").is_none());
        assert!(response.get("card").is_none());
    }
    Ok(())
}

#[test]
fn test_duration_out_of_range() -> Result<()> {
    for duration in ["PT9S", "PT11M", "P1D"] {
        let envelope =
            intent_envelope("PlayMetronomeIntent", play_slots(Some("80"), Some(duration)))?;
        let value = invoke(&envelope)?;

        assert_eq!(
            value["response"]["outputSpeech"]["ssml"],
            "<speak>Duration must be between 10 seconds and 10 minutes.</speak>"
        );
        assert!(value["response"].get("directives").is_none());
    }
    Ok(())
}

#[test]
fn test_bad_slots_fall_through_to_apology() -> Result<()> {
    let cases = [
        play_slots(Some("80"), Some("five minutes")),
        play_slots(Some("fast"), None),
        play_slots(None, Some("PT1M")),
    ];

    for slots in cases {
        let envelope = intent_envelope("PlayMetronomeIntent", slots)?;
        let value = invoke(&envelope)?;
        let response = &value["response"];

        assert_eq!(
            response["outputSpeech"]["ssml"],
            "<speak>Sorry. I cannot help you with that.</speak>"
        );
        assert_eq!(
            response["reprompt"]["outputSpeech"]["ssml"],
            "<speak>What can I help you with?</speak>"
        );
        assert_eq!(response["shouldEndSession"], false);
    }
    Ok(())
}

#[test]
fn test_launch_request() -> Result<()> {
    let envelope = request_envelope(json!({
        "type": "LaunchRequest",
        "requestId": "r-launch",
        "timestamp": "2019-03-02T10:00:00Z",
        "locale": "en-GB"
    }))?;
    let value = invoke(&envelope)?;
    let response = &value["response"];

    assert_eq!(
        response["outputSpeech"]["ssml"],
        "<speak>Welcome to Mini Metronome. You can ask me to play a tempo like 80 bpm.</speak>"
    );
    assert_eq!(
        response["card"],
        json!({
            "type": "Simple",
            "title": "Mini Metronome",
            "content": "You can start a new tempo for example by saying play 80 bpm."
        })
    );
    assert_eq!(response["shouldEndSession"], false);
    Ok(())
}

#[test]
fn test_help_intent() -> Result<()> {
    let envelope = intent_envelope("AMAZON.HelpIntent", json!({}))?;
    let value = invoke(&envelope)?;

    assert_eq!(
        value["response"]["outputSpeech"]["ssml"],
        "<speak>You can start a new tempo for example by saying play 80 bpm.</speak>"
    );
    assert_eq!(value["response"]["card"]["type"], "Simple");
    Ok(())
}

#[test]
fn test_stop_cancel_and_pause_stop_playback() -> Result<()> {
    for intent in ["AMAZON.StopIntent", "AMAZON.CancelIntent", "AMAZON.PauseIntent"] {
        let envelope = intent_envelope(intent, json!({}))?;
        let value = invoke(&envelope)?;

        assert_eq!(value["response"]["outputSpeech"]["ssml"], "<speak>Goodbye!</speak>");
        assert_eq!(
            value["response"]["directives"],
            json!([{ "type": "AudioPlayer.Stop" }])
        );
    }
    Ok(())
}

#[test]
fn test_fallback_intent() -> Result<()> {
    let envelope = intent_envelope("AMAZON.FallbackIntent", json!({}))?;
    let value = invoke(&envelope)?;

    assert_eq!(
        value["response"]["outputSpeech"]["ssml"],
        "<speak>Mini Metronome can't help you with that. Try saying play 80 bpm.</speak>"
    );
    assert_eq!(value["response"]["shouldEndSession"], false);
    Ok(())
}

#[test]
fn test_session_ended_returns_empty_response() -> Result<()> {
    let envelope = request_envelope(json!({
        "type": "SessionEndedRequest",
        "requestId": "r-end",
        "reason": "USER_INITIATED"
    }))?;
    let value = invoke(&envelope)?;

    assert_eq!(value, json!({ "version": "1.0", "response": {} }));
    Ok(())
}

#[test]
fn test_unknown_intent_gets_apology() -> Result<()> {
    let envelope = intent_envelope("AMAZON.ShuffleOnIntent", json!({}))?;
    let value = invoke(&envelope)?;

    assert_eq!(
        value["response"]["outputSpeech"]["ssml"],
        "<speak>Sorry. I cannot help you with that.</speak>"
    );
    Ok(())
}

#[test]
fn test_audio_player_event_gets_apology() -> Result<()> {
    let envelope = request_envelope(json!({
        "type": "AudioPlayer.PlaybackStarted",
        "requestId": "r-audio",
        "token": "t",
        "offsetInMilliseconds": 0
    }))?;
    let value = invoke(&envelope)?;

    assert!(value["response"]["outputSpeech"]["ssml"]
        .as_str()
        .unwrap()
        .contains("Sorry"));
    Ok(())
}
