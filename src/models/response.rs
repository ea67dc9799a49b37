use serde::Serialize;

/// Tagged envelope returned by every `/api/v1` endpoint, always at HTTP 200.
/// The error variant carries a fallback `data` value so the dashboard can
/// still render its sections.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data,
        }
    }

    pub fn error(message: impl Into<String>, fallback: T) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
            data: fallback,
        }
    }
}
