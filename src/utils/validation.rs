use crate::utils::error::{Result, SkillError};
use std::ops::RangeInclusive;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SkillError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// The track endpoint gets a query string appended, so it must not carry one.
pub fn validate_base_url(field_name: &str, url_str: &str) -> Result<()> {
    validate_url(field_name, url_str)?;

    if url_str.contains('?') || url_str.contains('#') {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "Base URL must not contain a query or fragment".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A configured bound pair: both ends at least 1 and `start <= end`.
pub fn validate_bounds<T>(field_name: &str, bounds: &RangeInclusive<T>) -> Result<()>
where
    T: PartialOrd + std::fmt::Display + Copy + Into<u64>,
{
    validate_positive_number(field_name, (*bounds.start()).into(), 1)?;
    if bounds.start() > bounds.end() {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..={}", bounds.start(), bounds.end()),
            reason: "Lower bound must not exceed upper bound".to_string(),
        });
    }
    Ok(())
}
