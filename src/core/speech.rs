//! Everything the skill says or shows.

pub const DEFAULT_SKILL_NAME: &str = "Mini Metronome";
pub const DEFAULT_ICON_URL: &str =
    "https://mini-metronome.s3-eu-west-1.amazonaws.com/mini_metronome.png";

pub const HELP_MESSAGE: &str = "You can start a new tempo for example by saying play 80 bpm.";
pub const HELP_REPROMPT: &str = "What can I help you with?";
pub const STOP_MESSAGE: &str = "Goodbye!";
pub const FALLBACK_REPROMPT: &str = "What can I help you with?";
pub const EXCEPTION_MESSAGE: &str = "Sorry. I cannot help you with that.";

pub fn welcome_message(skill_name: &str) -> String {
    format!(
        "Welcome to {}. You can ask me to play a tempo like 80 bpm.",
        skill_name
    )
}

pub fn fallback_message(skill_name: &str) -> String {
    format!("{} can't help you with that. Try saying play 80 bpm.", skill_name)
}

pub fn tempo_not_in_range(min: u32, max: u32) -> String {
    format!("Tempo must be between {} and {} beats per minute.", min, max)
}

pub fn duration_not_in_range(min_seconds: u64, max_seconds: u64) -> String {
    format!(
        "Duration must be between {} and {}.",
        spoken_length(min_seconds),
        spoken_length(max_seconds)
    )
}

pub fn playing(tempo: u32, seconds: u64) -> String {
    format!(
        "Playing metronome with tempo {} beats per minute for <say-as interpret-as=\"time\">{}</say-as>.",
        tempo,
        clock(seconds)
    )
}

pub fn card_text(tempo: u32) -> String {
    format!("{} beats per minute", tempo)
}

/// Minutes and seconds as `5'0"`.
pub fn clock(seconds: u64) -> String {
    format!("{}'{}\"", seconds / 60, seconds % 60)
}

// "10 seconds", "10 minutes", "1 minute 30 seconds"
fn spoken_length(seconds: u64) -> String {
    let plural = |n: u64, unit: &str| {
        if n == 1 {
            format!("{} {}", n, unit)
        } else {
            format!("{} {}s", n, unit)
        }
    };

    match (seconds / 60, seconds % 60) {
        (0, s) => plural(s, "second"),
        (m, 0) => plural(m, "minute"),
        (m, s) => format!("{} {}", plural(m, "minute"), plural(s, "second")),
    }
}
