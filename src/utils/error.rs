use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("HTTP request to {url} failed with status {status}")]
    HttpError { status: StatusCode, url: String },

    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl EndpointError {
    pub fn is_http_error(&self) -> bool {
        matches!(self, EndpointError::HttpError { .. })
    }

    /// Status code of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            EndpointError::HttpError { status, .. } => Some(*status),
            EndpointError::TransportError(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            EndpointError::ConfigError { .. }
                | EndpointError::InvalidConfigValueError { .. }
                | EndpointError::TomlError(_)
                | EndpointError::IoError(_)
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EndpointError::HttpError { status, .. } => {
                format!("The endpoint rejected the request ({})", status)
            }
            EndpointError::TransportError(e) if e.is_connect() => {
                "Could not connect to the endpoint on localhost".to_string()
            }
            EndpointError::TransportError(_) => "The HTTP exchange with the endpoint failed".to_string(),
            EndpointError::UrlError(e) => format!("Could not build the endpoint URL: {}", e),
            EndpointError::SerializationError(_) => {
                "The endpoint returned a body that is not valid JSON".to_string()
            }
            EndpointError::IoError(_) | EndpointError::TomlError(_) => {
                "The configuration file could not be read".to_string()
            }
            EndpointError::ConfigError { message } => message.clone(),
            EndpointError::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            1
        } else if self.is_http_error() {
            2
        } else {
            3
        }
    }
}

pub type Result<T> = std::result::Result<T, EndpointError>;
