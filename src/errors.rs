use crate::service_configuration::ServiceConfigurationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Configuration(#[from] ServiceConfigurationError),
    #[error("Unable to decode response from crt.sh: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Failed to get response from crt.sh: {0}")]
    Request(#[from] reqwest::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 1,
            _ => 2,
        }
    }
}
