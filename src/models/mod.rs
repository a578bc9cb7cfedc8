pub mod pre_invoice;
pub mod process;
