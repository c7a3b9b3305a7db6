use std::fmt;

/// The error type for the typed `OmflConfig` layer.
///
/// The core parser never produces these: parse failures are recorded on the
/// [`crate::Document`] itself as a validity flag. This enum exists so the
/// convenience layer can surface file problems, syntax halts, and type
/// mismatches as ordinary `Result`s.
#[derive(Debug, Clone, PartialEq)]
pub enum OmflError {
    /// The document failed to parse; carries the 1-based line the parser
    /// halted on, when known.
    SyntaxError {
        message: String,
        line: usize,
        hint: Option<String>,
    },
    /// A value exists but cannot be converted to the requested type.
    TypeError {
        message: String,
        line: usize,
        hint: Option<String>,
    },
    /// A dotted path resolved to nothing.
    KeyNotFound {
        path: String,
        hint: Option<String>,
    },
    /// A value was readable but outside the caller's allowed set.
    ValidationError {
        message: String,
        line: usize,
        hint: Option<String>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
    },
}

impl fmt::Display for OmflError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OmflError::SyntaxError { message, line, hint } => write!(
                f,
                "[OMFL] Syntax Error at line {}: {}{}",
                line,
                message,
                hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
            ),
            OmflError::TypeError { message, line, hint } => write!(
                f,
                "[OMFL] Type Error at line {}: {}{}",
                line,
                message,
                hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
            ),
            OmflError::KeyNotFound { path, hint } => write!(
                f,
                "[OMFL] Key '{}' not found{}",
                path,
                hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
            ),
            OmflError::ValidationError { message, line, hint } => write!(
                f,
                "[OMFL] Validation Error at line {}: {}{}",
                line,
                message,
                hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
            ),
            OmflError::FileError { message, path, hint } => write!(
                f,
                "[OMFL] File Error '{}': {}{}",
                path,
                message,
                hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
            ),
        }
    }
}

impl std::error::Error for OmflError {}

impl OmflError {
    /// Helper for file-related errors when loading configs.
    pub fn file_error(message: String, path: String) -> Self {
        OmflError::FileError {
            message,
            path,
            hint: Some("Check file path and permissions".into()),
        }
    }
}
