pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{toml_config::TomlConfig, SkillSettings};
pub use crate::core::duration::{parse_duration, IsoDuration};
pub use crate::core::metronome::{metronome_url, MetronomeUrlBuilder};
pub use crate::core::skill::Skill;
pub use crate::utils::error::{Result, SkillError};
