use crate::domain::ports::{ConfigProvider, DEFAULT_HOUR};
use crate::utils::error::{BaziError, Result};
use crate::utils::validation::{validate_range, Validate};
use std::env;

pub const DEFAULT_HOUR_VAR: &str = "BAZI_DEFAULT_HOUR";
pub const STRICT_RANGES_VAR: &str = "BAZI_STRICT_RANGES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaConfig {
    pub default_hour: i64,
    pub strict_ranges: bool,
}

impl Default for LambdaConfig {
    fn default() -> Self {
        Self {
            default_hour: DEFAULT_HOUR,
            strict_ranges: false,
        }
    }
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(DEFAULT_HOUR_VAR) {
            config.default_hour =
                raw.trim()
                    .parse()
                    .map_err(|_| BaziError::InvalidConfigValueError {
                        field: DEFAULT_HOUR_VAR.to_string(),
                        value: raw.clone(),
                        reason: "expected an integer hour".to_string(),
                    })?;
        }

        if let Some(raw) = lookup(STRICT_RANGES_VAR) {
            config.strict_ranges = parse_flag(STRICT_RANGES_VAR, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_flag(field: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(BaziError::InvalidConfigValueError {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "expected true/false".to_string(),
        }),
    }
}

impl ConfigProvider for LambdaConfig {
    fn default_hour(&self) -> i64 {
        self.default_hour
    }

    fn strict_ranges(&self) -> bool {
        self.strict_ranges
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_range(DEFAULT_HOUR_VAR, self.default_hour, 0, 23)?;
        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
