use once_cell::sync::Lazy;
use regex::Regex;

use super::value;
use crate::ast::Document;
use crate::lexer;

/// Section segments and keys share one character class.
static KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("key pattern is valid"));

/// Why a line was rejected. The document only records *that* parsing halted
/// and where; the kind is internal control flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Rejection {
    BadSectionName,
    BadKey,
    KeyCollision,
    BadValue,
    UnrecognizedLine,
}

pub(super) fn is_section_line(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('[') && line.ends_with(']')
}

pub(super) fn is_key_value_line(line: &str) -> bool {
    line.contains('=')
}

/// Handle a `[a.b.c]` header: validate every segment, descend from the root
/// creating sections as needed, and make the path current. Reopening an
/// existing section is allowed and extends it; a scalar or array already
/// occupying any segment is a collision.
pub(super) fn apply_section_header(
    doc: &mut Document,
    section_path: &mut Vec<String>,
    line: &str,
) -> Result<(), Rejection> {
    let name = &line[1..line.len() - 1];
    if name.is_empty() || name.starts_with('.') || name.ends_with('.') {
        return Err(Rejection::BadSectionName);
    }

    let parts: Vec<&str> = name.split('.').collect();
    if parts.iter().any(|part| !KEY_RE.is_match(part)) {
        return Err(Rejection::BadSectionName);
    }

    let mut current = doc.root_mut();
    for part in &parts {
        if let Some(existing) = current.get_ref(part) {
            if !existing.is_section() {
                return Err(Rejection::KeyCollision);
            }
        }
        current = current.get_or_create_section(part);
    }

    *section_path = parts.iter().map(|part| part.to_string()).collect();
    Ok(())
}

/// Handle a `key = value` line: split on the first `=`, validate the key,
/// resolve the current section, and insert the classified literal. Any key
/// already present in the section is a collision, whether it names a scalar
/// or a previously declared section.
pub(super) fn apply_key_value(
    doc: &mut Document,
    section_path: &[String],
    line: &str,
) -> Result<(), Rejection> {
    let (raw_key, raw_value) = line.split_once('=').ok_or(Rejection::UnrecognizedLine)?;
    let key = lexer::trim_spaces(raw_key);
    let token = lexer::trim_spaces(raw_value);

    if !KEY_RE.is_match(key) {
        return Err(Rejection::BadKey);
    }

    // The walk is uniform even though the sections are guaranteed to exist
    // from the header that set this path.
    let mut target = doc.root_mut();
    for part in section_path {
        target = target.get_or_create_section(part);
    }

    if target.get_ref(key).is_some() {
        return Err(Rejection::KeyCollision);
    }

    let parsed = value::classify(token);
    if parsed.is_invalid() {
        return Err(Rejection::BadValue);
    }

    target.set_key_value(key, parsed);
    Ok(())
}
