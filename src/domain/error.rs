use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    #[error("Unsupported locale: '{locale}'. Supported locales are: {}", supported.join(", "))]
    UnsupportedLocale {
        locale: String,
        supported: Vec<String>,
    },

    #[error("Rate limit exceeded. Try again in {retry_after_secs} seconds.")]
    TooManyRequests { retry_after_secs: u64 },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Raw key store failure; never rendered to callers as-is
    #[error("Store error: {message}")]
    Store { message: String },
}

impl DomainError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    pub fn unsupported_locale(
        locale: impl Into<String>,
        supported: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::UnsupportedLocale {
            locale: locale.into(),
            supported: supported.into_iter().map(Into::into).collect(),
        }
    }

    pub fn too_many_requests(retry_after_secs: u64) -> Self {
        Self::TooManyRequests { retry_after_secs }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Message safe to show to API callers
    pub fn public_message(&self) -> String {
        match self {
            Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::InvalidParameter { message }
            | Self::Configuration { message }
            | Self::Internal { message } => message.clone(),
            Self::UnsupportedLocale { .. } | Self::TooManyRequests { .. } => self.to_string(),
            Self::Store { .. } => "An unexpected error occurred.".to_string(),
        }
    }
}
