//! Built-in statement renderers
//!
//! A PDF renderer lives outside this crate and implements the same
//! [`StatementRenderer`](crate::application::ports::StatementRenderer) port.

pub mod json;
pub mod text;

pub use json::JsonStatementRenderer;
pub use text::TextStatementRenderer;
