use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "mini-metronome")]
#[command(about = "Build metronome track links and replay skill requests locally")]
pub struct CliConfig {
    /// Tempo in beats per minute
    #[arg(long, allow_negative_numbers = true, conflicts_with = "request")]
    pub tempo: Option<i64>,

    /// ISO-8601 duration, e.g. PT1M30S (defaults to the configured duration)
    #[arg(long, requires = "tempo")]
    pub duration: Option<String>,

    /// Path to a request envelope JSON file to dispatch through the skill
    #[arg(long)]
    pub request: Option<String>,

    /// Path to a TOML configuration file (environment variables otherwise)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_arguments() {
        let config =
            CliConfig::try_parse_from(["mini-metronome", "--tempo", "80", "--duration", "PT1M"])
                .unwrap();
        assert_eq!(config.tempo, Some(80));
        assert_eq!(config.duration.as_deref(), Some("PT1M"));
        assert!(config.request.is_none());
    }

    #[test]
    fn test_tempo_conflicts_with_request() {
        let result = CliConfig::try_parse_from([
            "mini-metronome",
            "--tempo",
            "80",
            "--request",
            "launch.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_duration_requires_tempo() {
        assert!(CliConfig::try_parse_from(["mini-metronome", "--duration", "PT1M"]).is_err());
    }
}
