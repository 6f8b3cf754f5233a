use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("{0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Request failed with status code {status}")]
    HttpStatusError {
        status: u16,
        body: serde_json::Value,
    },

    #[error("Invalid JSON in response body: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Http,
    Decode,
    Io,
    Configuration,
}

impl SmokeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SmokeError::RequestError(_) => ErrorCategory::Network,
            SmokeError::HttpStatusError { .. } => ErrorCategory::Http,
            SmokeError::DecodeError(_) => ErrorCategory::Decode,
            SmokeError::IoError(_) => ErrorCategory::Io,
            SmokeError::ConfigError { .. } | SmokeError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SmokeError::HttpStatusError { status, .. } => Some(*status),
            SmokeError::RequestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn response_body(&self) -> Option<&serde_json::Value> {
        match self {
            SmokeError::HttpStatusError { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the API: {}", self),
            ErrorCategory::Http => format!("The API answered with an error: {}", self),
            ErrorCategory::Decode => format!("The API returned an unreadable body: {}", self),
            ErrorCategory::Io => format!("Could not write output: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the backend server is running and the base URL is correct",
            ErrorCategory::Http => "Inspect the backend logs for the failing endpoint",
            ErrorCategory::Decode => "Verify the endpoint returns a JSON body",
            ErrorCategory::Io => "Check that stdout/stderr are writable",
            ErrorCategory::Configuration => "Fix the command line flags or the TOML config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, SmokeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_status_error_exposes_response() {
        let err = SmokeError::HttpStatusError {
            status: 503,
            body: json!({"error": "maintenance"}),
        };

        assert_eq!(err.to_string(), "Request failed with status code 503");
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.response_body(), Some(&json!({"error": "maintenance"})));
        assert_eq!(err.category(), ErrorCategory::Http);
    }

    #[test]
    fn test_config_errors_have_no_response() {
        let err = SmokeError::InvalidConfigValueError {
            field: "target.base_url".to_string(),
            value: " ".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };

        assert!(err.status().is_none());
        assert!(err.response_body().is_none());
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().contains("target.base_url"));
    }
}
