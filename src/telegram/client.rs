//! Blocking Bot API client.

use super::types::{ApiEnvelope, SendMessageRequest, Update};
use crate::config::Config;
use crate::error::{TelegramError, TelegramResult};
use crate::models::RenderedResponse;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Slack added on top of the long-poll duration before the HTTP call gives up.
const POLL_GRACE: Duration = Duration::from_secs(10);

/// Client for the Telegram Bot API.
///
/// Uses `ureq`; call it from async code through `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct TelegramClient {
    base_url: String,
    token: String,
    agent: Arc<ureq::Agent>,
}

impl TelegramClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `TelegramError::Rejected` when no bot token is configured.
    pub fn new(config: &Config) -> TelegramResult<Self> {
        let token = config
            .bot_token
            .clone()
            .ok_or_else(|| TelegramError::Rejected("BOT_TOKEN is not configured".to_string()))?;

        Ok(Self::with_base_url(
            config.telegram_api_url.clone(),
            token,
            Duration::from_secs(config.poll_timeout),
        ))
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, token: String, poll_timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(poll_timeout + POLL_GRACE)
            .build();

        Self {
            base_url,
            token,
            agent: Arc::new(agent),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.base_url.trim_end_matches('/'),
            self.token,
            method
        )
    }

    /// POST a JSON body to a Bot API method and unwrap the envelope.
    fn call<B: Serialize, T: DeserializeOwned>(&self, method: &str, body: &B) -> TelegramResult<T> {
        let response = self
            .agent
            .post(&self.method_url(method))
            .send_json(body)
            .map_err(map_error)?;

        let text = response
            .into_string()
            .map_err(|e| TelegramError::HttpError(e.to_string()))?;

        let envelope: ApiEnvelope<T> = serde_json::from_str(&text)?;
        if !envelope.ok {
            return Err(TelegramError::Rejected(
                envelope.description.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        envelope
            .result
            .ok_or_else(|| TelegramError::Rejected(format!("{} returned no result", method)))
    }

    /// Long-poll for new updates.
    ///
    /// `offset` acknowledges every update below it.
    pub fn get_updates(&self, offset: Option<i64>, timeout_secs: u64) -> TelegramResult<Vec<Update>> {
        let body = serde_json::json!({
            "offset": offset,
            "timeout": timeout_secs,
            "allowed_updates": ["message"],
        });
        self.call("getUpdates", &body)
    }

    /// Send a rendered reply, attaching its action links as an inline keyboard.
    pub fn send_message(
        &self,
        chat_id: i64,
        reply_to: Option<i64>,
        response: &RenderedResponse,
    ) -> TelegramResult<()> {
        let request = SendMessageRequest::reply(chat_id, reply_to, response);
        let _sent: serde_json::Value = self.call("sendMessage", &request)?;
        Ok(())
    }
}

/// Map a ureq error to a TelegramError, keeping the Bot API's description if any.
fn map_error(error: ureq::Error) -> TelegramError {
    match error {
        ureq::Error::Status(status, response) => {
            let body = response
                .into_string()
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.description)
                .unwrap_or(body);
            TelegramError::ApiError { status, message }
        }
        ureq::Error::Transport(transport) => TelegramError::HttpError(transport.to_string()),
    }
}
