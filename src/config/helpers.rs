use std::path::{Path, PathBuf};

use crate::error::OmflError;
use crate::lexer;

/// Expand `~/` against the home directory; other paths pass through.
pub(super) fn resolve_config_path(path: &Path) -> PathBuf {
    if let Some(rest) = path.to_str().and_then(|p| p.strip_prefix("~/")) {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    path.to_path_buf()
}

/// Locate the source line that declares a dotted path, tracking `[section]`
/// scope while scanning. Used only to decorate errors; returns line 0 and a
/// placeholder when nothing matches.
pub(super) fn find_config_line(key: &str, raw_content: &str) -> (usize, String) {
    let key_parts: Vec<&str> = key.split('.').collect();
    let mut scope: Vec<String> = Vec::new();

    for (idx, line) in raw_content.lines().enumerate() {
        let trimmed = lexer::normalize(line);

        if trimmed.is_empty() {
            continue;
        }

        if trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
            scope = lexer::split_path(&trimmed[1..trimmed.len() - 1])
                .into_iter()
                .map(|part| part.to_string())
                .collect();
            continue;
        }

        let Some((line_key, _)) = trimmed.split_once('=') else {
            continue;
        };
        let line_key = lexer::trim_spaces(line_key);

        let full_path = {
            let mut path = scope.clone();
            path.push(line_key.to_string());
            path.join(".")
        };

        if full_path == key {
            return (idx + 1, trimmed.to_string());
        }

        // Fall back to a bare-key match so mistyped section prefixes still
        // get a pointer at the likely line.
        let simple_key = key_parts.last().unwrap_or(&key);
        if line_key == *simple_key {
            return (idx + 1, trimmed.to_string());
        }
    }

    (0, "<key not found>".into())
}

/// Attach line number and snippet info from the config source to type and
/// validation errors.
pub(super) fn enhance_error_with_line_info(
    e: OmflError,
    path: &str,
    raw_content: &str,
) -> OmflError {
    match e {
        OmflError::TypeError { message, hint, .. } => {
            let (line, snippet) = find_config_line(path, raw_content);
            if line > 0 {
                OmflError::TypeError {
                    message: format!("{}\n  -> {}", message, snippet),
                    line,
                    hint,
                }
            } else {
                OmflError::TypeError {
                    message,
                    line: 0,
                    hint,
                }
            }
        }
        OmflError::ValidationError { message, hint, .. } => {
            let (line, snippet) = find_config_line(path, raw_content);
            if line > 0 {
                OmflError::ValidationError {
                    message: format!("{}\n  -> {}", message, snippet),
                    line,
                    hint,
                }
            } else {
                OmflError::ValidationError {
                    message,
                    line: 0,
                    hint,
                }
            }
        }
        other => other,
    }
}
