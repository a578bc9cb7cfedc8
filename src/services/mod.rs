pub mod pre_invoice_service;
pub mod stats_service;
