pub mod ledger;

pub use ledger::{ExportStatus, HistoryLedger, DEFAULT_CURRENCY};
