use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::database::store::DataStore;
use crate::dto::dashboard_dto::{ClosureHistory, DashboardStats};
use crate::error::Result;
use crate::models::process::{CompanyFilter, Process, ProcessCount, ProcessStatus};
use crate::utils::time;

const QUARTER_MONTHS: u32 = 3;

#[derive(Clone)]
pub struct StatsService {
    store: Arc<dyn DataStore>,
}

impl StatsService {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    /// Builds the dashboard counters and closure histogram as of `now`.
    /// Any store failure aborts the whole computation.
    pub async fn compute_stats(
        &self,
        filter: CompanyFilter,
        now: DateTime<Utc>,
    ) -> Result<DashboardStats> {
        let quarter_start = time::sub_months(now, QUARTER_MONTHS)?;

        let active_query = ProcessCount::with_status(ProcessStatus::Active, filter);
        let closed_query = ProcessCount::with_status(ProcessStatus::Closed, filter).closed_at_set();
        let quarter_query =
            ProcessCount::with_status(ProcessStatus::Closed, filter).closed_since(quarter_start);

        let (active_count, closed_count, closed_last_quarter_count, active_candidate_count) = tokio::try_join!(
            self.store.count_processes(&active_query),
            self.store.count_processes(&closed_query),
            self.store.count_processes(&quarter_query),
            self.store.count_active_candidates(filter),
        )?;

        let closed = self.store.list_closed_processes(filter, now).await?;
        let (closure_history, average_closure_days) = closure_history(&closed);

        let days_since_last_active_process = self
            .store
            .latest_active_process(filter)
            .await?
            .and_then(|process| process.opened_at)
            .map(|opened_at| time::floor_days_between(opened_at, now))
            .unwrap_or(0);

        Ok(DashboardStats {
            active_count,
            closed_count,
            closed_last_quarter_count,
            active_candidate_count,
            closure_history,
            days_since_last_active_process,
            average_closure_days,
        })
    }
}

/// Days a process took to close, never less than one.
pub fn closure_days(process: &Process) -> Option<i64> {
    let (opened_at, closed_at) = (process.opened_at?, process.closed_at?);
    if closed_at < opened_at {
        tracing::warn!(
            process_id = process.id,
            %opened_at,
            %closed_at,
            "Process closed before it was opened; counting as 1 day"
        );
    }
    Some(time::round_days_between(opened_at, closed_at).max(1))
}

/// Turns processes ordered newest closure first into an oldest-first
/// histogram plus the rounded mean duration (0 when empty).
pub fn closure_history(newest_first: &[Process]) -> (ClosureHistory, i64) {
    let mut history = ClosureHistory::default();
    let mut total_days: i64 = 0;

    for process in newest_first.iter().rev() {
        let Some(days) = closure_days(process) else {
            continue;
        };
        history.labels.push(process.job_offer.clone());
        history.values.push(days);
        total_days += days;
    }

    let average = if history.values.is_empty() {
        0
    } else {
        (total_days as f64 / history.values.len() as f64).round() as i64
    };

    (history, average)
}
