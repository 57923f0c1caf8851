use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillError {
    #[error("Malformed duration '{input}': {reason}")]
    MalformedDuration { input: String, reason: String },

    #[error("Missing slot: {slot}")]
    MissingSlotError { slot: String },

    #[error("Invalid value '{value}' for slot {slot}: {reason}")]
    InvalidSlotError {
        slot: String,
        value: String,
        reason: String,
    },

    #[error("No handler can process request type {request_type}")]
    NoHandlerError { request_type: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SkillError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Request,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SkillError {
    pub fn malformed_duration(input: &str, reason: impl Into<String>) -> Self {
        SkillError::MalformedDuration {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SkillError::MalformedDuration { .. }
            | SkillError::MissingSlotError { .. }
            | SkillError::InvalidSlotError { .. } => ErrorCategory::Input,
            SkillError::NoHandlerError { .. } | SkillError::SerializationError(_) => {
                ErrorCategory::Request
            }
            SkillError::ConfigError { .. }
            | SkillError::InvalidConfigValueError { .. }
            | SkillError::ConfigValidationError { .. }
            | SkillError::TomlError(_) => ErrorCategory::Configuration,
            SkillError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Request => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SkillError::MalformedDuration { .. } => {
                "Use an ISO-8601 duration such as PT5M or PT1M30S".to_string()
            }
            SkillError::MissingSlotError { slot } => {
                format!("Provide a value for the '{}' slot", slot)
            }
            SkillError::InvalidSlotError { slot, .. } => {
                format!("Check the value supplied for the '{}' slot", slot)
            }
            SkillError::NoHandlerError { .. } => {
                "Check the interaction model for intents the skill does not handle".to_string()
            }
            SkillError::SerializationError(_) => {
                "Make sure the request file is a valid request envelope".to_string()
            }
            SkillError::IoError(_) => "Check that the file exists and is readable".to_string(),
            SkillError::TomlError(_) => "Make sure the configuration file is valid TOML".to_string(),
            SkillError::ConfigError { .. }
            | SkillError::InvalidConfigValueError { .. }
            | SkillError::ConfigValidationError { .. } => {
                "Review the configuration file and environment variables".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Request => format!("Could not process the request: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}
