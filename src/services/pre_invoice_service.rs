use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::database::store::DataStore;
use crate::dto::pre_invoice_dto::CreatePreInvoicePayload;
use crate::error::Result;
use crate::models::pre_invoice::{NewPreInvoice, PreInvoice};
use crate::utils::time;

const VALIDITY_MONTHS: u32 = 1;

#[derive(Clone)]
pub struct PreInvoiceService {
    store: Arc<dyn DataStore>,
}

impl PreInvoiceService {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<PreInvoice>> {
        self.store.list_pre_invoices().await
    }

    /// Stores a pre-invoice estimated at `now` that expires one calendar
    /// month later.
    pub async fn create(
        &self,
        payload: CreatePreInvoicePayload,
        now: DateTime<Utc>,
    ) -> Result<PreInvoice> {
        let new = NewPreInvoice {
            estimated_date: now,
            expiration_date: time::add_months(now, VALIDITY_MONTHS)?,
            total_value: payload.total_value,
            description: payload.description,
            status: payload.status,
        };
        self.store.insert_pre_invoice(&new).await
    }
}
