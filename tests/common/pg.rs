use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use gipit_backend::{database::postgres::PgStore, models::process::Process};
use sqlx::{postgres::PgPoolOptions, Executor, PgPool};

use super::MemoryStore;

/// Tables the store reads and writes. Mirrors the externally managed schema.
const SCHEMA: &str = r#"
CREATE TABLE management (
    id INT PRIMARY KEY,
    company_id INT NOT NULL
);
CREATE TABLE process (
    id SERIAL PRIMARY KEY,
    status TEXT NOT NULL,
    job_offer TEXT,
    opened_at TIMESTAMPTZ,
    closed_at TIMESTAMPTZ,
    management_id INT REFERENCES management (id)
);
CREATE TABLE candidates (
    id INT PRIMARY KEY
);
CREATE TABLE candidate_management (
    id SERIAL PRIMARY KEY,
    candidate_id INT NOT NULL REFERENCES candidates (id),
    management_id INT REFERENCES management (id),
    status TEXT NOT NULL
);
CREATE TABLE pre_invoices (
    id SERIAL PRIMARY KEY,
    estimated_date TIMESTAMPTZ NOT NULL,
    expiration_date TIMESTAMPTZ NOT NULL,
    total_value NUMERIC,
    description TEXT,
    status TEXT
);
"#;

static SCHEMA_SEQ: AtomicUsize = AtomicUsize::new(0);

/// A throwaway Postgres schema holding the tables above.
pub struct TestDb {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl TestDb {
    /// Connects to `DATABASE_URL`. Returns `None` (and the calling test
    /// passes vacuously) when no database is configured.
    pub async fn setup() -> Option<Self> {
        dotenvy::dotenv().ok();
        let Ok(url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL not set; skipping Postgres-backed test");
            return None;
        };

        let schema = format!(
            "gipit_test_{}_{}_{}",
            std::process::id(),
            Utc::now().timestamp_micros(),
            SCHEMA_SEQ.fetch_add(1, Ordering::SeqCst)
        );

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .expect("connect admin pool");
        admin
            .execute(format!("CREATE SCHEMA {}", schema).as_str())
            .await
            .expect("create schema");

        let search_path = format!("SET search_path TO {}", schema);
        let pool = PgPoolOptions::new()
            .max_connections(4)
            .after_connect(move |conn, _meta| {
                let sql = search_path.clone();
                Box::pin(async move {
                    conn.execute(sql.as_str()).await?;
                    Ok(())
                })
            })
            .connect(&url)
            .await
            .expect("connect test pool");
        pool.execute(SCHEMA).await.expect("create tables");

        Some(Self {
            pool,
            admin,
            schema,
        })
    }

    pub fn store(&self) -> PgStore {
        PgStore::new(self.pool.clone())
    }

    /// Copies the rows of an in-memory store into the tables.
    pub async fn seed_from(&self, memory: &MemoryStore) {
        for (id, company_id) in &memory.management {
            sqlx::query("INSERT INTO management (id, company_id) VALUES ($1, $2)")
                .bind(id)
                .bind(company_id)
                .execute(&self.pool)
                .await
                .expect("seed management");
        }

        let candidates: BTreeSet<i32> = memory
            .candidate_links
            .iter()
            .map(|l| l.candidate_id)
            .collect();
        for id in candidates {
            sqlx::query("INSERT INTO candidates (id) VALUES ($1)")
                .bind(id)
                .execute(&self.pool)
                .await
                .expect("seed candidate");
        }

        for link in &memory.candidate_links {
            sqlx::query(
                "INSERT INTO candidate_management (candidate_id, management_id, status) VALUES ($1, $2, $3)",
            )
            .bind(link.candidate_id)
            .bind(link.management_id)
            .bind(&link.status)
            .execute(&self.pool)
            .await
            .expect("seed candidate_management");
        }

        for process in &memory.processes {
            self.insert_process(process).await;
        }
    }

    pub async fn insert_process(&self, process: &Process) {
        sqlx::query(
            r#"
            INSERT INTO process (id, status, job_offer, opened_at, closed_at, management_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(process.id)
        .bind(&process.status)
        .bind(&process.job_offer)
        .bind(process.opened_at)
        .bind(process.closed_at)
        .bind(process.management_id)
        .execute(&self.pool)
        .await
        .expect("seed process");
    }

    pub async fn teardown(self) {
        self.pool.close().await;
        self.admin
            .execute(format!("DROP SCHEMA {} CASCADE", self.schema).as_str())
            .await
            .expect("drop schema");
    }
}
