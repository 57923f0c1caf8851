use crate::config::SkillSettings;
use crate::utils::error::{Result, SkillError};
use std::env;
use std::str::FromStr;

pub const SKILL_NAME_VAR: &str = "SKILL_NAME";
pub const ICON_URL_VAR: &str = "ICON_URL";
pub const TRACK_BASE_URL_VAR: &str = "TRACK_BASE_URL";
pub const MIN_TEMPO_VAR: &str = "MIN_TEMPO";
pub const MAX_TEMPO_VAR: &str = "MAX_TEMPO";
pub const MIN_DURATION_VAR: &str = "MIN_DURATION_SECONDS";
pub const MAX_DURATION_VAR: &str = "MAX_DURATION_SECONDS";
pub const DEFAULT_DURATION_VAR: &str = "DEFAULT_DURATION";

impl SkillSettings {
    /// 從環境變數載入 Lambda 配置，未設定的欄位使用預設值
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SkillSettings::default();

        Ok(Self {
            skill_name: lookup(SKILL_NAME_VAR).unwrap_or(defaults.skill_name),
            icon_url: lookup(ICON_URL_VAR).unwrap_or(defaults.icon_url),
            track_base_url: lookup(TRACK_BASE_URL_VAR).unwrap_or(defaults.track_base_url),
            min_tempo: parse_var(&lookup, MIN_TEMPO_VAR, defaults.min_tempo)?,
            max_tempo: parse_var(&lookup, MAX_TEMPO_VAR, defaults.max_tempo)?,
            min_duration_seconds: parse_var(
                &lookup,
                MIN_DURATION_VAR,
                defaults.min_duration_seconds,
            )?,
            max_duration_seconds: parse_var(
                &lookup,
                MAX_DURATION_VAR,
                defaults.max_duration_seconds,
            )?,
            default_duration: lookup(DEFAULT_DURATION_VAR).unwrap_or(defaults.default_duration),
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| SkillError::InvalidConfigValueError {
                field: name.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}
