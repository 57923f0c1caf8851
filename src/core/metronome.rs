pub const DEFAULT_TRACK_BASE_URL: &str = "https://metronomer.com/download.php";

/// Beats that fall inside `seconds` at `tempo_bpm`, rounded down.
///
/// Widened to `u128` so any `u64` duration at any `u32` tempo fits.
pub fn beat_count(tempo_bpm: u32, seconds: u64) -> u128 {
    u128::from(seconds) * u128::from(tempo_bpm) / 60
}

/// Builds download links for pre-rendered click tracks.
///
/// Track files are named after the tempo and a one-based beat count, since
/// the first click sounds at beat zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetronomeUrlBuilder {
    base_url: String,
}

impl MetronomeUrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Callers validate tempo and seconds before building a link.
    pub fn build(&self, tempo_bpm: u32, seconds: u64) -> String {
        let beats = beat_count(tempo_bpm, seconds);
        format!(
            "{}?mp3=/Click_{}_1_4_{}_rdm.mp3&pan=",
            self.base_url,
            tempo_bpm,
            beats.saturating_add(1)
        )
    }
}

impl Default for MetronomeUrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_TRACK_BASE_URL)
    }
}

/// Download link for the default track host.
pub fn metronome_url(tempo_bpm: u32, seconds: u64) -> String {
    MetronomeUrlBuilder::default().build(tempo_bpm, seconds)
}
