pub mod dto;
pub mod history;
pub mod ports;
pub mod services;

// Re-export key types for convenience
pub use dto::BillForm;
pub use history::{ExportStatus, HistoryLedger};
pub use ports::{BillDocument, FixedSavePath, SavePrompt, StatementRenderer};
pub use services::{ActionOutcome, BillingSession, GeneratedBill};
