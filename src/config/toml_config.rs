use crate::config::SkillSettings;
use crate::utils::error::{Result, SkillError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub skill: Option<SkillSection>,
    pub metronome: Option<MetronomeSection>,
    pub duration: Option<DurationSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillSection {
    pub name: Option<String>,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetronomeSection {
    pub track_base_url: Option<String>,
    pub min_tempo: Option<u32>,
    pub max_tempo: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DurationSection {
    pub min_seconds: Option<u64>,
    pub max_seconds: Option<u64>,
    pub default: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SkillError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${TRACK_BASE_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SkillError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 合併預設值，得到完整設定
    pub fn settings(&self) -> SkillSettings {
        let mut settings = SkillSettings::default();

        if let Some(skill) = &self.skill {
            if let Some(name) = &skill.name {
                settings.skill_name = name.clone();
            }
            if let Some(icon_url) = &skill.icon_url {
                settings.icon_url = icon_url.clone();
            }
        }

        if let Some(metronome) = &self.metronome {
            if let Some(url) = &metronome.track_base_url {
                settings.track_base_url = url.clone();
            }
            settings.min_tempo = metronome.min_tempo.unwrap_or(settings.min_tempo);
            settings.max_tempo = metronome.max_tempo.unwrap_or(settings.max_tempo);
        }

        if let Some(duration) = &self.duration {
            settings.min_duration_seconds =
                duration.min_seconds.unwrap_or(settings.min_duration_seconds);
            settings.max_duration_seconds =
                duration.max_seconds.unwrap_or(settings.max_duration_seconds);
            if let Some(default) = &duration.default {
                settings.default_duration = default.clone();
            }
        }

        settings
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.settings().validate()
    }
}
