pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::database::store::DataStore;
use crate::middleware::auth::TokenVerifier;
use crate::services::{pre_invoice_service::PreInvoiceService, stats_service::StatsService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub token_verifier: Arc<dyn TokenVerifier>,
    pub stats_service: StatsService,
    pub pre_invoice_service: PreInvoiceService,
}

impl AppState {
    pub fn new(store: Arc<dyn DataStore>, token_verifier: Arc<dyn TokenVerifier>) -> Self {
        let stats_service = StatsService::new(store.clone());
        let pre_invoice_service = PreInvoiceService::new(store);

        Self {
            token_verifier,
            stats_service,
            pre_invoice_service,
        }
    }
}
