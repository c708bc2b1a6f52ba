//! Plain-text statement file

use std::fs;
use std::path::Path;

use tracing::info;

use crate::application::ports::{BillDocument, StatementRenderer};
use crate::application::services::statement::render_statement;
use crate::support::errors::RenderError;

/// Writes the on-screen statement to a UTF-8 text file
#[derive(Debug, Clone)]
pub struct TextStatementRenderer {
    currency: String,
}

impl TextStatementRenderer {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}

impl StatementRenderer for TextStatementRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, document: &BillDocument, destination: &Path) -> Result<(), RenderError> {
        let text = render_statement(document, &self.currency);
        fs::write(destination, text).map_err(|source| RenderError::Io {
            path: destination.to_path_buf(),
            source,
        })?;
        info!(path = %destination.display(), account = %document.account, "Statement written");
        Ok(())
    }
}
