use serde::{Deserialize, Serialize};

/// Wire envelope shared by every API endpoint.
///
/// `status` and `is_error` always agree; handlers build one through the
/// constructors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub status: ResponseStatus,
    pub message: String,
    pub is_error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            status: ResponseStatus::Success,
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            status: ResponseStatus::Error,
            message: message.into(),
            is_error: true,
        }
    }
}
