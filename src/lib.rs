use std::convert::Infallible;

use chrono::{DateTime, Local};

use jobs::{homework::HomeworkJob, JobRunner};
use practicum::client::PracticumClient;
use reqwest::header::InvalidHeaderValue;
use telegram::{Notifier, TelegramNotifier};
use thiserror::Error;

pub mod config;
pub mod homework;
pub mod jobs;
pub mod logging;
pub mod practicum;
pub mod telegram;

pub use config::{Config, ConfigError};
pub use homework::ValidationError;

#[derive(Error, Debug)]
pub enum PollError {
    #[error("Ошибка запроса к API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Ошибка ответа API: эндпоинт {endpoint} недоступен, код ответа {status}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    #[error("Некорректный ответ API: {0}")]
    Decode(String),

    #[error("Ошибка в данных API: {0}")]
    Validation(#[from] ValidationError),

    #[error("Сообщение в Telegram не отправлено: {0}")]
    Notify(String),

    #[error("Сбой в работе программы: {0}")]
    Unclassified(String),
}

impl From<InvalidHeaderValue> for PollError {
    fn from(e: InvalidHeaderValue) -> Self {
        Self::Unclassified(format!("недопустимый заголовок запроса: {e}"))
    }
}

pub type PollResult<T> = Result<T, PollError>;

pub fn startup_message(now: DateTime<Local>) -> String {
    format!("Я начал свою работу: {}", now.format("%d-%m-%Y %H:%M"))
}

/// Best effort: a chat that cannot be reached must not keep the bot from polling.
pub async fn announce_startup<N: Notifier + Sync>(notifier: &N, now: DateTime<Local>) -> bool {
    match notifier.send_message(&startup_message(now)).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Failed to announce startup: {e}");
            false
        }
    }
}

pub async fn start(config: &Config) -> PollResult<Infallible> {
    let practicum = PracticumClient::new(config)?;
    let notifier = TelegramNotifier::new(config)?;

    announce_startup(&notifier, Local::now()).await;

    let mut job = HomeworkJob::new(practicum, notifier);
    let runner = JobRunner::new(config.retry_period);

    Ok(runner.run(&mut job).await)
}
