use std::{convert::Infallible, fmt::Debug, time::Duration};

use async_trait::async_trait;

use crate::{PollError, PollResult};

pub mod homework;

#[async_trait]
pub trait Job {
    type Output: Debug + Send;

    fn name(&self) -> &'static str;

    async fn run_cycle(&mut self) -> PollResult<Self::Output>;

    async fn report_failure(&mut self, error: &PollError);
}

pub struct JobRunner {
    period: Duration,
}

impl JobRunner {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub async fn run_once<J: Job + Send>(&self, job: &mut J) -> Option<J::Output> {
        let name = job.name();
        tracing::info!("Running job {name}");

        match job.run_cycle().await {
            Ok(output) => {
                tracing::debug!("Job {name} finished: {output:?}");
                Some(output)
            }
            Err(e) => {
                tracing::error!("An error has occurred while running job {name}: {e}");
                job.report_failure(&e).await;
                None
            }
        }
    }

    pub async fn run<J: Job + Send>(&self, job: &mut J) -> Infallible {
        loop {
            self.run_once(job).await;
            tracing::info!("Job {} sleeping for {:?}", job.name(), self.period);
            tokio::time::sleep(self.period).await;
        }
    }
}
