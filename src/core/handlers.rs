use crate::core::playback::{plan_playback, PlaybackPlan};
use crate::core::response::ResponseBuilder;
use crate::core::speech;
use crate::domain::model::{
    AudioItem, AudioItemMetadata, Card, CardImage, Directive, DisplayImage, PlayBehavior,
    Request, Response, Stream,
};
use crate::domain::ports::{HandlerInput, RequestHandler};
use crate::utils::error::{Result, SkillError};
use std::num::IntErrorKind;

pub const PLAY_METRONOME_INTENT: &str = "PlayMetronomeIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const PAUSE_INTENT: &str = "AMAZON.PauseIntent";
pub const FALLBACK_INTENT: &str = "AMAZON.FallbackIntent";

pub const TEMPO_SLOT: &str = "tempo";
pub const DURATION_SLOT: &str = "duration";

pub struct PlayMetronomeHandler;

impl PlayMetronomeHandler {
    fn tempo(input: &HandlerInput<'_>) -> Result<i64> {
        let value = input
            .slot_value(TEMPO_SLOT)
            .ok_or_else(|| SkillError::MissingSlotError {
                slot: TEMPO_SLOT.to_string(),
            })?;

        // Numbers too large for i64 are still numbers: saturate so the
        // range check reports them.
        match value.trim().parse::<i64>() {
            Ok(tempo) => Ok(tempo),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(SkillError::InvalidSlotError {
                    slot: TEMPO_SLOT.to_string(),
                    value: value.to_string(),
                    reason: e.to_string(),
                }),
            },
        }
    }
}

impl RequestHandler for PlayMetronomeHandler {
    fn name(&self) -> &'static str {
        "PlayMetronomeHandler"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.is_intent(PLAY_METRONOME_INTENT)
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        tracing::info!("In PlayMetronomeHandler");
        let config = input.config;

        let tempo = Self::tempo(input)?;
        let track = match plan_playback(config, tempo, input.slot_value(DURATION_SLOT))? {
            PlaybackPlan::Play(track) => track,
            PlaybackPlan::TempoOutOfRange { min, max } => {
                return Ok(ResponseBuilder::new()
                    .speak(&speech::tempo_not_in_range(min, max))
                    .build());
            }
            PlaybackPlan::DurationOutOfRange { min, max } => {
                return Ok(ResponseBuilder::new()
                    .speak(&speech::duration_not_in_range(min, max))
                    .build());
            }
        };

        let title = config.skill_name();
        let text = speech::card_text(track.tempo);
        let icon_url = config.icon_url();

        let card = Card::Standard {
            title: title.to_string(),
            text: text.clone(),
            image: CardImage {
                small_image_url: icon_url.to_string(),
                large_image_url: icon_url.to_string(),
            },
        };

        let directive = Directive::AudioPlayerPlay {
            play_behavior: PlayBehavior::ReplaceAll,
            audio_item: AudioItem {
                stream: Stream {
                    token: track.url.clone(),
                    url: track.url,
                    offset_in_milliseconds: 0,
                    expected_previous_token: None,
                },
                metadata: Some(AudioItemMetadata {
                    title: title.to_string(),
                    subtitle: text,
                    art: DisplayImage::single(title, icon_url),
                    background_image: DisplayImage::single(title, icon_url),
                }),
            },
        };

        Ok(ResponseBuilder::new()
            .speak(&speech::playing(track.tempo, track.seconds))
            .card(card)
            .directive(directive)
            .should_end_session(true)
            .build())
    }
}

pub struct LaunchRequestHandler;

impl RequestHandler for LaunchRequestHandler {
    fn name(&self) -> &'static str {
        "LaunchRequestHandler"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        matches!(input.request(), Request::LaunchRequest(_))
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        tracing::info!("In LaunchRequestHandler");
        let skill_name = input.config.skill_name();

        Ok(ResponseBuilder::new()
            .speak(&speech::welcome_message(skill_name))
            .ask(speech::HELP_REPROMPT)
            .card(Card::Simple {
                title: skill_name.to_string(),
                content: speech::HELP_MESSAGE.to_string(),
            })
            .build())
    }
}

pub struct HelpIntentHandler;

impl RequestHandler for HelpIntentHandler {
    fn name(&self) -> &'static str {
        "HelpIntentHandler"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.is_intent(HELP_INTENT)
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        tracing::info!("In HelpIntentHandler");

        Ok(ResponseBuilder::new()
            .speak(speech::HELP_MESSAGE)
            .ask(speech::HELP_REPROMPT)
            .card(Card::Simple {
                title: input.config.skill_name().to_string(),
                content: speech::HELP_MESSAGE.to_string(),
            })
            .build())
    }
}

/// Cancel, stop and pause all stop playback.
pub struct AudioStopIntentHandler;

impl RequestHandler for AudioStopIntentHandler {
    fn name(&self) -> &'static str {
        "AudioStopIntentHandler"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        [CANCEL_INTENT, STOP_INTENT, PAUSE_INTENT]
            .iter()
            .any(|name| input.is_intent(name))
    }

    fn handle(&self, _input: &HandlerInput<'_>) -> Result<Response> {
        tracing::info!("In AudioStopIntentHandler");

        Ok(ResponseBuilder::new()
            .speak(speech::STOP_MESSAGE)
            .directive(Directive::AudioPlayerStop)
            .build())
    }
}

pub struct FallbackIntentHandler;

impl RequestHandler for FallbackIntentHandler {
    fn name(&self) -> &'static str {
        "FallbackIntentHandler"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.is_intent(FALLBACK_INTENT)
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        tracing::info!("In FallbackIntentHandler");

        Ok(ResponseBuilder::new()
            .speak(&speech::fallback_message(input.config.skill_name()))
            .ask(speech::FALLBACK_REPROMPT)
            .build())
    }
}

pub struct SessionEndedRequestHandler;

impl RequestHandler for SessionEndedRequestHandler {
    fn name(&self) -> &'static str {
        "SessionEndedRequestHandler"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        matches!(input.request(), Request::SessionEndedRequest(_))
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        tracing::info!("In SessionEndedRequestHandler");

        if let Request::SessionEndedRequest(request) = input.request() {
            tracing::info!(
                "Session ended reason: {}",
                request.reason.as_deref().unwrap_or("UNKNOWN")
            );
            if let Some(error) = &request.error {
                tracing::warn!("Session ended with error {}: {}", error.error_type, error.message);
            }
        }

        Ok(ResponseBuilder::new().build())
    }
}

/// Handlers in dispatch order.
pub fn default_handlers() -> Vec<Box<dyn RequestHandler>> {
    vec![
        Box::new(PlayMetronomeHandler),
        Box::new(LaunchRequestHandler),
        Box::new(HelpIntentHandler),
        Box::new(AudioStopIntentHandler),
        Box::new(FallbackIntentHandler),
        Box::new(SessionEndedRequestHandler),
    ]
}
