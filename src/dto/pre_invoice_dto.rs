use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Caller-supplied fields are stored as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePreInvoicePayload {
    pub total_value: Option<Decimal>,
    pub description: Option<String>,
    pub status: Option<String>,
}
