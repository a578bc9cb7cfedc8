use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::pre_invoice::{NewPreInvoice, PreInvoice};
use crate::models::process::{CompanyFilter, Process, ProcessCount};

/// Query surface the handlers need from the database. `PgStore` is the
/// production implementation; tests substitute fakes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataStore: Send + Sync {
    async fn count_processes(&self, query: &ProcessCount) -> Result<i64>;

    /// Candidates with at least one active candidate-management link whose
    /// management belongs to the filtered company.
    async fn count_active_candidates(&self, filter: CompanyFilter) -> Result<i64>;

    /// Closed processes with both timestamps set and `closed_at <= until`,
    /// newest closure first.
    async fn list_closed_processes(
        &self,
        filter: CompanyFilter,
        until: DateTime<Utc>,
    ) -> Result<Vec<Process>>;

    /// The first active process by `opened_at` descending. Rows without an
    /// `opened_at` sort first, as in Postgres' default `DESC` ordering.
    async fn latest_active_process(&self, filter: CompanyFilter) -> Result<Option<Process>>;

    async fn list_pre_invoices(&self) -> Result<Vec<PreInvoice>>;

    async fn insert_pre_invoice(&self, new: &NewPreInvoice) -> Result<PreInvoice>;
}
