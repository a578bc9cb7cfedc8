pub mod dashboard;
pub mod health;
pub mod pre_invoice;
