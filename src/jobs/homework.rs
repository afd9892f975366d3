use async_trait::async_trait;

use crate::{
    homework::{check_homework, parse_status, HomeworkStatus},
    practicum::HomeworkSource,
    telegram::Notifier,
    PollError, PollResult,
};

use super::Job;

/// What the loop remembers between cycles. Lives only in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PollState {
    pub last_known_status: Option<HomeworkStatus>,
    pub last_poll_timestamp: Option<i64>,
    /// Last failure text sent to the chat, so a persisting failure is only
    /// reported once.
    pub last_error: Option<String>,
}

impl PollState {
    pub fn status_changed(&self, status: HomeworkStatus) -> bool {
        self.last_known_status != Some(status)
    }

    pub fn record_notified(&mut self, status: HomeworkStatus) {
        self.last_known_status = Some(status);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    NoUpdates,
    Unchanged(HomeworkStatus),
    Notified(HomeworkStatus),
}

pub struct HomeworkJob<S, N> {
    source: S,
    notifier: N,
    state: PollState,
}

impl<S, N> HomeworkJob<S, N>
where
    S: HomeworkSource + Send + Sync,
    N: Notifier + Send + Sync,
{
    pub fn new(source: S, notifier: N) -> Self {
        Self {
            source,
            notifier,
            state: PollState::default(),
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub async fn poll(&mut self, now: i64) -> PollResult<CycleOutcome> {
        let homework = self.source.latest_homework(now).await?;
        let Some(record) = check_homework(homework.as_ref())? else {
            tracing::info!("No homework updates since {now}");
            self.state.last_poll_timestamp = Some(now);
            return Ok(CycleOutcome::NoUpdates);
        };

        if !self.state.status_changed(record.status) {
            tracing::info!(
                "Status of \"{}\" is still {}, nothing to send",
                record.name,
                record.status
            );
            self.state.last_poll_timestamp = Some(now);
            return Ok(CycleOutcome::Unchanged(record.status));
        }

        let message = parse_status(&record);
        self.notifier.send_message(&message).await?;
        self.state.record_notified(record.status);
        self.state.last_poll_timestamp = Some(now);
        tracing::info!("Status of \"{}\" changed to {}", record.name, record.status);

        Ok(CycleOutcome::Notified(record.status))
    }
}

#[async_trait]
impl<S, N> Job for HomeworkJob<S, N>
where
    S: HomeworkSource + Send + Sync,
    N: Notifier + Send + Sync,
{
    type Output = CycleOutcome;

    fn name(&self) -> &'static str {
        "homework_status"
    }

    async fn run_cycle(&mut self) -> PollResult<CycleOutcome> {
        let outcome = self.poll(chrono::Utc::now().timestamp()).await?;
        self.state.last_error = None;
        Ok(outcome)
    }

    async fn report_failure(&mut self, error: &PollError) {
        // The chat is unreachable; the next cycle retries the send.
        if matches!(error, PollError::Notify(_)) {
            return;
        }

        let message = error.to_string();
        if self.state.last_error.as_deref() == Some(message.as_str()) {
            tracing::debug!("Failure already reported, not sending it again");
            return;
        }

        if self.notifier.send_message(&message).await.is_ok() {
            self.state.last_error = Some(message);
        }
    }
}
