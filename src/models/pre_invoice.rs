use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PreInvoice {
    pub id: i32,
    pub estimated_date: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
    pub total_value: Option<Decimal>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Row to insert; both dates are computed server-side.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPreInvoice {
    pub estimated_date: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
    pub total_value: Option<Decimal>,
    pub description: Option<String>,
    pub status: Option<String>,
}
