use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Missing required parameter: {field}")]
    MissingParameter { field: String },

    #[error("Invalid parameter '{field}' = '{value}': {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Request failed: {0}")]
    RequestFailed(#[from] RequestFailure),

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Configuration error in '{field}': {message}")]
    Config { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The original failure detail carried by `ClientError::RequestFailed`.
#[derive(Error, Debug)]
pub enum RequestFailure {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Remote,
    Transport,
    Response,
    Configuration,
}

impl ClientError {
    pub fn missing(field: &str) -> Self {
        ClientError::MissingParameter {
            field: field.to_string(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        ClientError::MalformedResponse {
            message: message.into(),
        }
    }

    /// HTTP status of a failed request, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::RequestFailed(RequestFailure::Status { status, .. }) => Some(*status),
            ClientError::RequestFailed(RequestFailure::Transport(e)) => {
                e.status().map(|s| s.as_u16())
            }
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::MissingParameter { .. } | ClientError::InvalidParameter { .. } => {
                ErrorCategory::Input
            }
            ClientError::RequestFailed(RequestFailure::Status { .. }) => ErrorCategory::Remote,
            ClientError::RequestFailed(RequestFailure::Transport(_)) => ErrorCategory::Transport,
            ClientError::MalformedResponse { .. } => ErrorCategory::Response,
            ClientError::Config { .. } | ClientError::Io(_) => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::MissingParameter { field } => {
                format!("The '{}' field is required", field)
            }
            ClientError::InvalidParameter { field, reason, .. } => {
                format!("The '{}' field is invalid: {}", field, reason)
            }
            ClientError::RequestFailed(RequestFailure::Status { status: 404, .. }) => {
                "The requested customer was not found".to_string()
            }
            ClientError::RequestFailed(RequestFailure::Status { status, .. }) => {
                format!("The customer API rejected the request (HTTP {})", status)
            }
            ClientError::RequestFailed(RequestFailure::Transport(_)) => {
                "Could not reach the customer API".to_string()
            }
            ClientError::MalformedResponse { .. } => {
                "The customer API returned a response that could not be read".to_string()
            }
            ClientError::Config { field, .. } => {
                format!("The configuration value '{}' is invalid", field)
            }
            ClientError::Io(e) => format!("Could not read a file: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the command arguments and supply every required field",
            ErrorCategory::Remote => "Check the customer id or email and your API credentials",
            ErrorCategory::Transport => "Check the base URL and your network connection",
            ErrorCategory::Response => "Check that the base URL points at the customer API",
            ErrorCategory::Configuration => "Check the configuration file and CLI flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
