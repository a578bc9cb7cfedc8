pub mod dashboard_dto;
pub mod pre_invoice_dto;
