use reqwest::{
    header::{HeaderMap, AUTHORIZATION, USER_AGENT},
    Url,
};
use serde::de::DeserializeOwned;

use crate::{Config, PollError, PollResult};

const BOT_USER_AGENT: &str = concat!("homework-bot/", env!("CARGO_PKG_VERSION"));

pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(config: &Config) -> PollResult<Self> {
        Url::parse(&config.endpoint)
            .map_err(|e| PollError::Unclassified(format!("некорректный адрес API: {e}")))?;

        Ok(Self {
            http: reqwest::Client::builder()
                .build()
                .map_err(PollError::Transport)?,
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
        })
    }

    /// Authenticated GET against the endpoint. A non-2xx reply or a body that
    /// does not decode into `T` comes back as its own error kind.
    pub async fn request<T: DeserializeOwned>(&self, query: &[(&str, String)]) -> PollResult<T> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, format!("OAuth {}", self.token).parse()?);
        headers.insert(USER_AGENT, BOT_USER_AGENT.parse()?);

        tracing::debug!("GET {} {:?}", self.endpoint, query);

        let resp = self
            .http
            .get(&self.endpoint)
            .headers(headers)
            .query(query)
            .send()
            .await
            .map_err(PollError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PollError::UnexpectedStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(PollError::Transport)?;

        serde_json::from_str(&body).map_err(|e| PollError::Decode(e.to_string()))
    }
}
