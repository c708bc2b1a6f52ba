//! Infrastructure layer - external concerns

pub mod export;
pub mod render;

pub use render::{JsonStatementRenderer, TextStatementRenderer};
