use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::database::store::DataStore;
use crate::error::Result;
use crate::models::pre_invoice::{NewPreInvoice, PreInvoice};
use crate::models::process::{CompanyFilter, Process, ProcessCount, ProcessStatus};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DataStore for PgStore {
    async fn count_processes(&self, query: &ProcessCount) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM process p
            LEFT JOIN management m ON m.id = p.management_id
            WHERE LOWER(p.status) = $1
              AND ($2::bool = FALSE OR p.closed_at IS NOT NULL)
              AND ($3::timestamptz IS NULL OR p.closed_at >= $3)
              AND ($4::int IS NULL OR m.company_id = $4)
            "#,
        )
        .bind(query.status.as_str())
        .bind(query.require_closed_at)
        .bind(query.closed_since)
        .bind(query.filter.company_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn count_active_candidates(&self, filter: CompanyFilter) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM candidates c
            WHERE EXISTS (
                SELECT 1
                FROM candidate_management cm
                LEFT JOIN management m ON m.id = cm.management_id
                WHERE cm.candidate_id = c.id
                  AND LOWER(cm.status) = $1
                  AND ($2::int IS NULL OR m.company_id = $2)
            )
            "#,
        )
        .bind(ProcessStatus::Active.as_str())
        .bind(filter.company_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn list_closed_processes(
        &self,
        filter: CompanyFilter,
        until: DateTime<Utc>,
    ) -> Result<Vec<Process>> {
        let processes = sqlx::query_as::<_, Process>(
            r#"
            SELECT p.id, p.status, p.job_offer, p.opened_at, p.closed_at, p.management_id
            FROM process p
            LEFT JOIN management m ON m.id = p.management_id
            WHERE LOWER(p.status) = $1
              AND p.opened_at IS NOT NULL
              AND p.closed_at IS NOT NULL
              AND p.closed_at <= $2
              AND ($3::int IS NULL OR m.company_id = $3)
            ORDER BY p.closed_at DESC
            "#,
        )
        .bind(ProcessStatus::Closed.as_str())
        .bind(until)
        .bind(filter.company_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(processes)
    }

    async fn latest_active_process(&self, filter: CompanyFilter) -> Result<Option<Process>> {
        let process = sqlx::query_as::<_, Process>(
            r#"
            SELECT p.id, p.status, p.job_offer, p.opened_at, p.closed_at, p.management_id
            FROM process p
            LEFT JOIN management m ON m.id = p.management_id
            WHERE LOWER(p.status) = $1
              AND ($2::int IS NULL OR m.company_id = $2)
            ORDER BY p.opened_at DESC
            LIMIT 1
            "#,
        )
        .bind(ProcessStatus::Active.as_str())
        .bind(filter.company_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(process)
    }

    async fn list_pre_invoices(&self) -> Result<Vec<PreInvoice>> {
        let invoices = sqlx::query_as::<_, PreInvoice>(
            r#"
            SELECT id, estimated_date, expiration_date, total_value, description, status
            FROM pre_invoices
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(invoices)
    }

    async fn insert_pre_invoice(&self, new: &NewPreInvoice) -> Result<PreInvoice> {
        let invoice = sqlx::query_as::<_, PreInvoice>(
            r#"
            INSERT INTO pre_invoices (estimated_date, expiration_date, total_value, description, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, estimated_date, expiration_date, total_value, description, status
            "#,
        )
        .bind(new.estimated_date)
        .bind(new.expiration_date)
        .bind(new.total_value)
        .bind(&new.description)
        .bind(&new.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(invoice)
    }
}
