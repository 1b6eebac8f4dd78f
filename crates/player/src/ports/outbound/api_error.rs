//! Errors crossing the backend boundary.

use serde_json::Value;

/// Failure of a single backend call.
///
/// The backend has no error code scheme; `Rejected` carries the status and
/// whatever message its `{erro: ...}` body held.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Build a rejection from a non-2xx response body.
    ///
    /// Understands `{erro: {message}}` and `{erro: {issues: [{message}]}}`;
    /// anything else falls back to the raw body text.
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| error_message(&value))
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body.trim().to_string()
                }
            });
        Self::Rejected { status, message }
    }
}

fn error_message(body: &Value) -> Option<String> {
    let erro = body.get("erro")?;
    if let Some(message) = erro.get("message").and_then(Value::as_str) {
        return Some(message.to_string());
    }
    if let Some(issues) = erro.get("issues").and_then(Value::as_array) {
        let messages: Vec<&str> = issues
            .iter()
            .filter_map(|issue| issue.get("message").and_then(Value::as_str))
            .collect();
        if !messages.is_empty() {
            return Some(messages.join("; "));
        }
    }
    match erro {
        Value::String(text) => Some(text.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
