use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Number, Value};

use crate::{
    practicum::{client::PracticumClient, HomeworkSource},
    PollResult,
};

#[derive(Deserialize, Debug)]
pub struct HomeworkStatusesResponse {
    pub homeworks: Vec<Value>,
    pub current_date: Option<Number>,
}

impl HomeworkStatusesResponse {
    pub fn into_latest(self) -> Option<Value> {
        self.homeworks.into_iter().next()
    }
}

impl PracticumClient {
    pub async fn fetch_homework_statuses(
        &self,
        from_date: i64,
    ) -> PollResult<HomeworkStatusesResponse> {
        self.request(&[("from_date", from_date.to_string())]).await
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn latest_homework(&self, from_date: i64) -> PollResult<Option<Value>> {
        let response = self.fetch_homework_statuses(from_date).await?;
        tracing::debug!(
            "API returned {} homeworks (current_date: {:?})",
            response.homeworks.len(),
            response.current_date
        );
        Ok(response.into_latest())
    }
}
