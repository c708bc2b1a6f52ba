pub mod outbound;

pub use outbound::{BillDocument, FixedSavePath, SavePrompt, StatementRenderer};
