use serde::{Deserialize, Serialize};

/// Error/acknowledgement body returned by mutating endpoints.
///
/// The backend is not consistent about the key it uses for the human-readable
/// text, so both `message` and `error` are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiMessage {
    /// First non-blank text carried by the body
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .or_else(|| self.error.as_deref().filter(|m| !m.trim().is_empty()))
    }
}
