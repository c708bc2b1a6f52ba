pub mod bill_form;

pub use bill_form::BillForm;
