//! Long-polling loop.

use super::client::TelegramClient;
use crate::dispatcher::QueryDispatcher;
use crate::formatter;
use crate::models::RenderedResponse;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Pause after a failed poll before asking again.
const POLL_ERROR_PAUSE: Duration = Duration::from_secs(3);

/// True for `/start` and `/start@SomeBot`, with or without a payload.
pub fn is_start_command(text: &str) -> bool {
    match text.split_whitespace().next() {
        Some(command) => command == "/start" || command.starts_with("/start@"),
        None => false,
    }
}

/// Build the reply for one incoming text message.
pub async fn reply_for(dispatcher: &QueryDispatcher, text: &str) -> RenderedResponse {
    if is_start_command(text) {
        formatter::render_welcome()
    } else {
        dispatcher.handle(text).await
    }
}

async fn handle_message(
    client: Arc<TelegramClient>,
    dispatcher: QueryDispatcher,
    chat_id: i64,
    message_id: i64,
    text: String,
) {
    let response = reply_for(&dispatcher, &text).await;

    let sent = tokio::task::spawn_blocking(move || {
        client.send_message(chat_id, Some(message_id), &response)
    })
    .await;

    match sent {
        Ok(Ok(())) => debug!(chat_id, "Reply sent"),
        Ok(Err(e)) => error!(chat_id, error = %e, "Failed to send reply"),
        Err(e) => error!(chat_id, error = %e, "Reply task panicked"),
    }
}

/// Run one `getUpdates` round and spawn a reply task for each text message.
///
/// Returns the offset acknowledging every update received, or `offset`
/// unchanged when nothing arrived. Fails when the poll itself failed; reply
/// tasks are not awaited.
pub async fn poll_once(
    client: &Arc<TelegramClient>,
    dispatcher: &QueryDispatcher,
    offset: Option<i64>,
    poll_timeout: u64,
) -> anyhow::Result<Option<i64>> {
    let poller = client.clone();
    let updates =
        tokio::task::spawn_blocking(move || poller.get_updates(offset, poll_timeout)).await??;

    let mut next = offset;
    for update in updates {
        next = Some(update.update_id + 1);

        let Some(message) = update.message else {
            continue;
        };
        let Some(text) = message.text else {
            debug!(chat_id = message.chat.id, "Skipping non-text message");
            continue;
        };

        tokio::spawn(handle_message(
            client.clone(),
            dispatcher.clone(),
            message.chat.id,
            message.message_id,
            text,
        ));
    }

    Ok(next)
}

/// Poll for messages forever, answering each text message in its own task.
pub async fn run_polling(
    client: TelegramClient,
    dispatcher: QueryDispatcher,
    poll_timeout: u64,
) -> anyhow::Result<()> {
    let client = Arc::new(client);
    let mut offset: Option<i64> = None;

    info!("Polling Telegram for updates");

    loop {
        match poll_once(&client, &dispatcher, offset, poll_timeout).await {
            Ok(next) => offset = next,
            Err(e) => {
                warn!(error = %e, "getUpdates failed");
                tokio::time::sleep(POLL_ERROR_PAUSE).await;
            }
        }
    }
}
