use anyhow::Result;
use mini_metronome::core::playback::{plan_playback, PlaybackPlan};
use mini_metronome::domain::model::RequestEnvelope;
use mini_metronome::utils::validation::Validate;
use mini_metronome::{Skill, TomlConfig};
use serde_json::json;
use tempfile::TempDir;

const CONFIG: &str = r#"
[skill]
name = "Studio Click"
icon_url = "https://cdn.example.com/click.png"

[metronome]
track_base_url = "https://tracks.example.com/download.php"
min_tempo = 40
max_tempo = 200

[duration]
min_seconds = 30
max_seconds = 120
default = "PT1M"
"#;

#[tokio::test]
async fn test_skill_uses_file_configuration() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("skill.toml");
    tokio::fs::write(&config_path, CONFIG).await?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;
    let skill = Skill::new(config.settings());

    let envelope: RequestEnvelope = serde_json::from_value(json!({
        "version": "1.0",
        "request": {
            "type": "IntentRequest",
            "requestId": "r-1",
            "intent": {
                "name": "PlayMetronomeIntent",
                "slots": { "tempo": { "name": "tempo", "value": "100" } }
            }
        }
    }))?;

    let value = serde_json::to_value(skill.invoke(&envelope))?;
    let response = &value["response"];

    // 60s at 100 bpm
    assert_eq!(
        response["directives"][0]["audioItem"]["stream"]["url"],
        "https://tracks.example.com/download.php?mp3=/Click_100_1_4_101_rdm.mp3&pan="
    );
    assert_eq!(response["card"]["title"], "Studio Click");
    assert_eq!(
        response["card"]["image"]["smallImageUrl"],
        "https://cdn.example.com/click.png"
    );
    Ok(())
}

#[test]
fn test_configured_limits_drive_range_messages() -> Result<()> {
    let settings = TomlConfig::from_toml_str(CONFIG)?.settings();

    assert_eq!(
        plan_playback(&settings, 30, None)?,
        PlaybackPlan::TempoOutOfRange { min: 40, max: 200 }
    );
    assert_eq!(
        plan_playback(&settings, 100, Some("PT5M"))?,
        PlaybackPlan::DurationOutOfRange { min: 30, max: 120 }
    );

    let envelope: RequestEnvelope = serde_json::from_value(json!({
        "version": "1.0",
        "request": {
            "type": "IntentRequest",
            "requestId": "r-2",
            "intent": {
                "name": "PlayMetronomeIntent",
                "slots": {
                    "tempo": { "name": "tempo", "value": "100" },
                    "duration": { "name": "duration", "value": "PT5M" }
                }
            }
        }
    }))?;
    let value = serde_json::to_value(Skill::new(settings).invoke(&envelope))?;
    assert_eq!(
        value["response"]["outputSpeech"]["ssml"],
        "<speak>Duration must be between 30 seconds and 2 minutes.</speak>"
    );
    Ok(())
}
