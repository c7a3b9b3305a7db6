//! The OMFL document builder.
//!
//! Parsing is one pass over the normalized lines: each non-blank line is
//! either a section header, a key-value pair, or a rejection. The first
//! rejection marks the whole document invalid and stops the pass; there is
//! no recovery and no multi-error accumulation.

use std::fs;
use std::path::Path;

use crate::ast::Document;
use crate::lexer;

mod document;
mod value;

/// Parse OMFL source text into a [`Document`].
///
/// This never fails in the `Result` sense: validation problems are recorded
/// on the document itself, and every lookup against an invalid document
/// returns the `Invalid` sentinel.
pub fn parse(input: &str) -> Document {
    Parser::new(input).parse_document()
}

/// Parse an OMFL file. An unreadable file yields an invalid document, the
/// same single outcome as any parse failure; use [`crate::OmflConfig`] for
/// an error-carrying file API.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Document {
    match fs::read_to_string(path) {
        Ok(content) => parse(&content),
        Err(_) => {
            let mut doc = Document::new();
            doc.mark_unreadable();
            doc
        }
    }
}

/// Line-driven parser state: the input text plus the dotted path of the
/// section that subsequent key-value lines land in.
pub struct Parser<'a> {
    input: &'a str,
    section_path: Vec<String>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            input,
            section_path: Vec::new(),
        }
    }

    pub fn parse_document(&mut self) -> Document {
        let mut doc = Document::new();
        self.section_path.clear();

        for (idx, raw_line) in lexer::split_lines(self.input).enumerate() {
            let line = lexer::normalize(raw_line);
            if line.is_empty() {
                continue;
            }

            let outcome = if document::is_section_line(line) {
                document::apply_section_header(&mut doc, &mut self.section_path, line)
            } else if document::is_key_value_line(line) {
                document::apply_key_value(&mut doc, &self.section_path, line)
            } else {
                Err(document::Rejection::UnrecognizedLine)
            };

            if outcome.is_err() {
                doc.mark_invalid(idx + 1);
                return doc;
            }
        }

        doc
    }
}
