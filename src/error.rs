use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to access Krisinformation API with status code {status}")]
    ApiError { status: StatusCode },

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Response body is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("JSON error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Data error: {0}")]
    DataError(#[from] DataError),

    #[error("Invalid coordinate '{input}': {reason}")]
    InvalidCoordinate { input: String, reason: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Session is closed")]
    SessionClosed,
}

impl ClientError {
    pub fn api_error(status: StatusCode) -> Self {
        Self::ApiError { status }
    }

    pub fn invalid_coordinate(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Status code carried by an [`ClientError::ApiError`].
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::ApiError { status } => Some(*status),
            Self::RequestError(err) => err.status(),
            _ => None,
        }
    }

    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::DataError(DataError::MissingField { .. }))
    }
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Missing required field '{field}'")]
    MissingField { field: String },

    #[error("Invalid type for field '{field}': expected {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Failed to parse {entity}: {reason}")]
    ParseError {
        entity: &'static str,
        reason: String,
    },
}

impl DataError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid_type(field: &'static str, expected: &'static str) -> Self {
        Self::InvalidType { field, expected }
    }

    pub fn parse_error(entity: &'static str, reason: impl Into<String>) -> Self {
        Self::ParseError {
            entity,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_carries_status_code() {
        let err = ClientError::api_error(StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_string(),
            "Failed to access Krisinformation API with status code 404 Not Found"
        );
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn missing_field_is_a_data_error() {
        let err: ClientError = DataError::missing_field("SourceID").into();
        assert!(err.is_missing_field());
        assert_eq!(err.to_string(), "Data error: Missing required field 'SourceID'");
    }
}
