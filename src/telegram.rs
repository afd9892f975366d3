use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Config, PollError, PollResult};

/// Sends plain text to the single configured chat.
#[async_trait]
pub trait Notifier {
    async fn send_message(&self, text: &str) -> PollResult<()>;
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize, Debug)]
struct TelegramResponse {
    ok: bool,
    description: Option<String>,
}

pub struct TelegramNotifier {
    http: reqwest::Client,
    url: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &Config) -> PollResult<Self> {
        let url = format!(
            "{}/bot{}/sendMessage",
            config.telegram_api_url.trim_end_matches('/'),
            config.telegram_token
        );

        Ok(Self {
            http: reqwest::Client::builder()
                .build()
                .map_err(PollError::Transport)?,
            url,
            chat_id: config.telegram_chat_id.clone(),
        })
    }

    async fn post(&self, text: &str) -> PollResult<()> {
        let resp = self
            .http
            .post(&self.url)
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            // without_url keeps the bot token out of the error text
            .map_err(|e| PollError::Notify(e.without_url().to_string()))?;

        let status = resp.status();
        let reply = resp.json::<TelegramResponse>().await.ok();

        match reply {
            Some(TelegramResponse { ok: true, .. }) if status.is_success() => Ok(()),
            Some(TelegramResponse {
                description: Some(description),
                ..
            }) => Err(PollError::Notify(description)),
            _ => Err(PollError::Notify(format!("код ответа Telegram {status}"))),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_message(&self, text: &str) -> PollResult<()> {
        match self.post(text).await {
            Ok(()) => {
                tracing::debug!("Sent Telegram message: {text}");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Telegram message was not sent: {e}");
                Err(e)
            }
        }
    }
}
