use async_trait::async_trait;
use serde_json::Value;

use crate::PollResult;

pub mod client;
pub mod handlers;

/// Where the poll loop gets the latest homework entry from.
#[async_trait]
pub trait HomeworkSource {
    // from_date is in Unix seconds
    async fn latest_homework(&self, from_date: i64) -> PollResult<Option<Value>>;
}
