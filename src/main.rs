use clap::Parser;
use mini_metronome::core::playback::{plan_playback, PlaybackPlan};
use mini_metronome::core::speech;
use mini_metronome::domain::model::RequestEnvelope;
use mini_metronome::utils::error::{ErrorSeverity, Result, SkillError};
use mini_metronome::utils::{logger, validation::Validate};
use mini_metronome::{CliConfig, Skill, SkillSettings, TomlConfig};

const EXIT_OK: i32 = 0;
const EXIT_OUT_OF_RANGE: i32 = 2;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mini-metronome CLI");
    tracing::debug!("CLI config: {:?}", config);

    match run(&config).await {
        Ok(EXIT_OK) => {}
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            report_failure(&e);
            let exit_code = match e.severity() {
                ErrorSeverity::Low | ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn report_failure(e: &SkillError) {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

/// Returns the process exit code for a run that produced an answer.
async fn run(config: &CliConfig) -> Result<i32> {
    let settings = load_settings(config)?;

    // 驗證配置
    settings.validate()?;
    tracing::debug!("✅ Configuration loaded and validated");

    if let Some(path) = &config.request {
        replay_request(settings, path, config.pretty).await?;
        return Ok(EXIT_OK);
    }

    match config.tempo {
        Some(tempo) => play(&settings, tempo, config.duration.as_deref(), config.pretty),
        None => {
            println!("{}", speech::welcome_message(&settings.skill_name));
            println!("💡 Try: mini-metronome --tempo 80 --duration PT1M");
            Ok(EXIT_OK)
        }
    }
}

fn load_settings(config: &CliConfig) -> Result<SkillSettings> {
    match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            Ok(TomlConfig::from_file(path)?.settings())
        }
        None => SkillSettings::from_env(),
    }
}

async fn replay_request(settings: SkillSettings, path: &str, pretty: bool) -> Result<()> {
    tracing::info!("📨 Replaying request from: {}", path);
    let content = tokio::fs::read_to_string(path).await?;
    let envelope: RequestEnvelope = serde_json::from_str(&content)?;

    let skill = Skill::new(settings);
    let response = skill.invoke(&envelope);

    let output = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);
    Ok(())
}

fn play(settings: &SkillSettings, tempo: i64, duration: Option<&str>, pretty: bool) -> Result<i32> {
    match plan_playback(settings, tempo, duration)? {
        PlaybackPlan::Play(track) => {
            if pretty {
                println!("🎵 {}", speech::card_text(track.tempo));
                println!("⏱  {} seconds, {} beats", track.seconds, track.beats);
                println!("🔗 {}", track.url);
            } else {
                println!("{}", track.url);
            }
            Ok(EXIT_OK)
        }
        PlaybackPlan::TempoOutOfRange { min, max } => {
            eprintln!("❌ {}", speech::tempo_not_in_range(min, max));
            Ok(EXIT_OUT_OF_RANGE)
        }
        PlaybackPlan::DurationOutOfRange { min, max } => {
            eprintln!("❌ {}", speech::duration_not_in_range(min, max));
            Ok(EXIT_OUT_OF_RANGE)
        }
    }
}
