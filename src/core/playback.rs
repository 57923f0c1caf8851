use crate::core::duration::parse_duration;
use crate::core::metronome::{beat_count, MetronomeUrlBuilder};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub tempo: u32,
    pub seconds: u64,
    pub beats: u128,
    pub url: String,
}

/// Outcome of checking a play request against the configured limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackPlan {
    Play(Track),
    TempoOutOfRange { min: u32, max: u32 },
    DurationOutOfRange { min: u64, max: u64 },
}

/// Checks tempo first, then the duration (the configured default when
/// absent), and only then builds the track link.
///
/// A malformed duration is an error; out-of-range values are not.
pub fn plan_playback(
    config: &dyn ConfigProvider,
    tempo: i64,
    duration: Option<&str>,
) -> Result<PlaybackPlan> {
    let tempo_range = config.tempo_range();
    let tempo = match u32::try_from(tempo) {
        Ok(tempo) if tempo_range.contains(&tempo) => tempo,
        _ => {
            return Ok(PlaybackPlan::TempoOutOfRange {
                min: *tempo_range.start(),
                max: *tempo_range.end(),
            })
        }
    };

    let duration = duration.unwrap_or_else(|| config.default_duration());
    let seconds = parse_duration(duration)?;

    let duration_range = config.duration_range();
    if !duration_range.contains(&seconds) {
        return Ok(PlaybackPlan::DurationOutOfRange {
            min: *duration_range.start(),
            max: *duration_range.end(),
        });
    }

    tracing::info!(tempo, duration, seconds, "Resolved metronome track");

    Ok(PlaybackPlan::Play(Track {
        tempo,
        seconds,
        beats: beat_count(tempo, seconds),
        url: MetronomeUrlBuilder::new(config.track_base_url()).build(tempo, seconds),
    }))
}
