use crate::model::identity::IdKind;
use serde::{Deserialize, Serialize};

/// A registry answer for one identifier.
///
/// `display_name` is the assembled person name for a DNI or the business name
/// for a RUC. `result` keeps the raw upstream object so callers can reach
/// fields this struct does not name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupRecord {
    pub kind: IdKind,
    pub id: String,
    pub display_name: String,
    pub address: String,
    pub status: String,
    pub condition: String,
    pub result: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Success,
    Info,
    Warning,
}

/// Short feedback line shown next to a form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMessage {
    pub level: MessageLevel,
    pub text: String,
}

impl UserMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { level: MessageLevel::Success, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { level: MessageLevel::Info, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: MessageLevel::Warning, text: text.into() }
    }
}

/// Result of typing an identifier into a form: an optional name to fill in and
/// an optional message for the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Autocomplete {
    pub kind: Option<IdKind>,
    pub suggestion: Option<String>,
    pub message: Option<UserMessage>,
}
