//! Bot API wire types (only the fields the bot reads or sends).

use crate::models::{ActionLink, RenderedResponse};
use serde::{Deserialize, Serialize};

/// Envelope wrapping every Bot API answer.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub ok: bool,

    #[serde(default)]
    pub description: Option<String>,

    pub result: Option<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,

    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,

    /// Absent for stickers, photos and other non-text messages
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub url: String,
}

impl From<&ActionLink> for InlineKeyboardButton {
    fn from(link: &ActionLink) -> Self {
        Self {
            text: link.label.clone(),
            url: link.url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    /// One button per row, in link order. `None` when there are no links.
    pub fn from_actions(actions: &[ActionLink]) -> Option<Self> {
        if actions.is_empty() {
            return None;
        }

        Some(Self {
            inline_keyboard: actions
                .iter()
                .map(|link| vec![InlineKeyboardButton::from(link)])
                .collect(),
        })
    }
}

/// Body of a `sendMessage` call.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: i64,
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendMessageRequest {
    pub fn reply(chat_id: i64, reply_to: Option<i64>, response: &RenderedResponse) -> Self {
        Self {
            chat_id,
            text: response.text.clone(),
            reply_to_message_id: reply_to,
            reply_markup: InlineKeyboardMarkup::from_actions(&response.actions),
        }
    }
}
