//! User-facing reply produced for one query.

use serde::Serialize;

/// A labeled external link shown as a button under the reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionLink {
    pub label: String,
    pub url: String,
}

impl ActionLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Display text plus optional action links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedResponse {
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionLink>,
}

impl RenderedResponse {
    /// A plain text reply without actions.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            actions: Vec::new(),
        }
    }

    /// A reply with action links.
    pub fn with_actions(text: impl Into<String>, actions: Vec<ActionLink>) -> Self {
        Self {
            text: text.into(),
            actions,
        }
    }
}
