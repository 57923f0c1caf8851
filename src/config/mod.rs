#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

use crate::core::duration::parse_duration;
use crate::core::metronome::DEFAULT_TRACK_BASE_URL;
use crate::core::speech::{DEFAULT_ICON_URL, DEFAULT_SKILL_NAME};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SkillError};
use crate::utils::validation::{
    validate_base_url, validate_bounds, validate_non_empty_string, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const DEFAULT_MIN_TEMPO: u32 = 20;
pub const DEFAULT_MAX_TEMPO: u32 = 240;
pub const DEFAULT_MIN_DURATION_SECONDS: u64 = 10;
pub const DEFAULT_MAX_DURATION_SECONDS: u64 = 600;
pub const DEFAULT_DURATION: &str = "PT5M";

/// Resolved skill settings, whatever the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSettings {
    pub skill_name: String,
    pub icon_url: String,
    pub track_base_url: String,
    pub min_tempo: u32,
    pub max_tempo: u32,
    pub min_duration_seconds: u64,
    pub max_duration_seconds: u64,
    pub default_duration: String,
}

impl Default for SkillSettings {
    fn default() -> Self {
        Self {
            skill_name: DEFAULT_SKILL_NAME.to_string(),
            icon_url: DEFAULT_ICON_URL.to_string(),
            track_base_url: DEFAULT_TRACK_BASE_URL.to_string(),
            min_tempo: DEFAULT_MIN_TEMPO,
            max_tempo: DEFAULT_MAX_TEMPO,
            min_duration_seconds: DEFAULT_MIN_DURATION_SECONDS,
            max_duration_seconds: DEFAULT_MAX_DURATION_SECONDS,
            default_duration: DEFAULT_DURATION.to_string(),
        }
    }
}

impl ConfigProvider for SkillSettings {
    fn skill_name(&self) -> &str {
        &self.skill_name
    }

    fn icon_url(&self) -> &str {
        &self.icon_url
    }

    fn track_base_url(&self) -> &str {
        &self.track_base_url
    }

    fn tempo_range(&self) -> RangeInclusive<u32> {
        self.min_tempo..=self.max_tempo
    }

    fn duration_range(&self) -> RangeInclusive<u64> {
        self.min_duration_seconds..=self.max_duration_seconds
    }

    fn default_duration(&self) -> &str {
        &self.default_duration
    }
}

impl Validate for SkillSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("skill_name", &self.skill_name)?;
        validate_url("icon_url", &self.icon_url)?;
        validate_base_url("track_base_url", &self.track_base_url)?;
        validate_bounds("tempo_range", &self.tempo_range())?;
        validate_bounds("duration_range", &self.duration_range())?;

        // 預設長度必須可解析且在範圍內
        let seconds = parse_duration(&self.default_duration).map_err(|e| {
            SkillError::ConfigValidationError {
                field: "default_duration".to_string(),
                message: e.to_string(),
            }
        })?;
        if !self.duration_range().contains(&seconds) {
            return Err(SkillError::InvalidConfigValueError {
                field: "default_duration".to_string(),
                value: self.default_duration.clone(),
                reason: format!(
                    "Default duration of {}s is outside {}..={}",
                    seconds, self.min_duration_seconds, self.max_duration_seconds
                ),
            });
        }

        tracing::debug!("✅ Skill settings validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = SkillSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.tempo_range(), 20..=240);
        assert_eq!(settings.duration_range(), 10..=600);
        assert_eq!(settings.default_duration(), "PT5M");
    }

    #[test]
    fn test_default_duration_must_parse() {
        let settings = SkillSettings {
            default_duration: "5 minutes".to_string(),
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, SkillError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_default_duration_must_fit_range() {
        let settings = SkillSettings {
            default_duration: "PT1H".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_inverted_tempo_range_is_rejected() {
        let settings = SkillSettings {
            min_tempo: 300,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
