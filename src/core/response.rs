use serde::{Deserialize, Serialize};

/// Envelope for single-result endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultResponse<T> {
    pub data: T,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ResultResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: Some(message.into()),
        }
    }
}

/// Envelope for list endpoints
///
/// `total_counts` is the size of the whole collection, not of `data`'s page.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingResponse<T> {
    pub data: Vec<T>,
    pub total_counts: u64,
}

impl<T> PagingResponse<T> {
    pub fn new(data: Vec<T>, total_counts: u64) -> Self {
        Self { data, total_counts }
    }
}
