use std::fs;
use std::path::Path;

use crate::ast::Document;
use crate::error::OmflError;
use crate::parser;

mod access;
mod conversion;
mod helpers;
mod validation;

/// Typed convenience layer over a parsed OMFL document.
///
/// Unlike the core [`parser::parse`] entry point, the constructors here
/// return `Result`: a document that fails validation becomes an
/// [`OmflError::SyntaxError`] carrying the line the parser halted on. The
/// raw source text is retained so type and validation errors can point back
/// at the declaring line.
pub struct OmflConfig {
    document: Document,
    raw_content: String,
}

impl OmflConfig {
    /// Parse an OMFL config from a string.
    pub fn from_str(content: &str) -> Result<Self, OmflError> {
        let document = parser::parse(content);
        if !document.valid() {
            return Err(syntax_error_for(&document, content));
        }

        Ok(Self {
            document,
            raw_content: content.to_string(),
        })
    }

    /// Load an OMFL config file. `~/` is expanded against the home
    /// directory; relative paths are taken as-is.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, OmflError> {
        let resolved = helpers::resolve_config_path(path.as_ref());

        let content = fs::read_to_string(&resolved).map_err(|e| {
            OmflError::file_error(
                format!("Failed to read file: {}", e),
                resolved.display().to_string(),
            )
        })?;

        Self::from_str(&content)
    }

    /// Load with fallback support: try the primary path first and, if it is
    /// missing or unreadable, the fallback path.
    pub fn from_file_with_fallback<P: AsRef<Path>>(
        primary: P,
        fallback: P,
    ) -> Result<Self, OmflError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(OmflError::FileError { .. }) => {
                Self::from_file(&fallback).map_err(|e| match e {
                    OmflError::FileError { message, .. } => OmflError::FileError {
                        message: format!(
                            "Failed to load config from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    /// The underlying document. Always valid by construction.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn syntax_error_for(document: &Document, content: &str) -> OmflError {
    let line = document.error_line().unwrap_or(0);
    let snippet = line
        .checked_sub(1)
        .and_then(|idx| content.lines().nth(idx))
        .map(|l| l.trim().to_string());

    OmflError::SyntaxError {
        message: "Document failed validation".into(),
        line,
        hint: snippet.map(|s| format!("Offending line: {}", s)),
    }
}

#[cfg(test)]
mod tests;
