use thiserror::Error;

#[derive(Error, Debug)]
pub enum NationalityError {
    #[error("Request for name '{name}' failed: {source}")]
    Network {
        name: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected HTTP status {status} for name '{name}'")]
    Status { name: String, status: u16 },

    #[error("Could not decode response for name '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl NationalityError {
    /// Whether the error came from talking to the nationality service
    /// rather than from local configuration or I/O.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Status { .. } | Self::Decode { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Network { name, .. } => {
                format!("Could not reach the nationality service while looking up '{}'", name)
            }
            Self::Status { name, status } if *status == 429 => {
                format!("Request limit reached while looking up '{}'", name)
            }
            Self::Status { name, status } => {
                format!("The nationality service answered {} for '{}'", status, name)
            }
            Self::Decode { name, .. } => {
                format!("The nationality service sent an unreadable answer for '{}'", name)
            }
            Self::IoError(e) => format!("File or terminal error: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value {} is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NationalityError>;
