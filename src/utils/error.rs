use thiserror::Error;

#[derive(Error, Debug)]
pub enum BaziError {
    #[error("Missing required field: '{field}'")]
    MissingField { field: String },

    #[error("Field '{field}' cannot be converted to an integer: {value}")]
    TypeConversion { field: String, value: String },

    #[error("Invalid date: {year}-{month}-{day} is not a valid Gregorian calendar date")]
    InvalidDate { year: i64, month: i64, day: i64 },

    #[error("Method not allowed: {method}")]
    MethodNotAllowed { method: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Field '{field}' out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl BaziError {
    /// HTTP status the request handler answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            BaziError::MethodNotAllowed { .. } => 405,
            BaziError::MissingField { .. }
            | BaziError::TypeConversion { .. }
            | BaziError::InvalidDate { .. }
            | BaziError::InvalidRequest { .. }
            | BaziError::OutOfRange { .. } => 400,
            BaziError::SerializationError(_)
            | BaziError::IoError(_)
            | BaziError::TomlError(_)
            | BaziError::ConfigError { .. }
            | BaziError::InvalidConfigValueError { .. } => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            BaziError::IoError(_)
                | BaziError::TomlError(_)
                | BaziError::ConfigError { .. }
                | BaziError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BaziError>;
