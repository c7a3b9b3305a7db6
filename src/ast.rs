use indexmap::IndexMap;

use crate::lexer;

/// A single parsed OMFL value.
///
/// `Invalid` doubles as the sentinel for failed parses and missed lookups:
/// lookups are total functions that return `Value::Invalid` instead of
/// erroring, so chained access never panics.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Invalid,
    Int(i32),
    Float(f32),
    Bool(bool),
    String(String),
    Array(Vec<Value>),
    Section(IndexMap<String, Value>),
}

/// Shared sentinel so lookups can hand out a reference without allocating.
static INVALID: Value = Value::Invalid;

impl Default for Value {
    fn default() -> Self {
        Value::Invalid
    }
}

impl Value {
    /// Create an empty section.
    pub fn section() -> Self {
        Value::Section(IndexMap::new())
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Value::Invalid)
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_section(&self) -> bool {
        matches!(self, Value::Section(_))
    }

    /// The held integer, or 0 for any other variant.
    ///
    /// Callers that need to distinguish "absent" from an actual zero should
    /// check `is_int` first or use [`Value::as_int_or`].
    pub fn as_int(&self) -> i32 {
        match self {
            Value::Int(n) => *n,
            _ => 0,
        }
    }

    /// The held float, or 0.0 for any other variant.
    pub fn as_float(&self) -> f32 {
        match self {
            Value::Float(n) => *n,
            _ => 0.0,
        }
    }

    /// The held boolean, or false for any other variant.
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            _ => false,
        }
    }

    /// The held string, or "" for any other variant.
    pub fn as_str(&self) -> &str {
        match self {
            Value::String(s) => s,
            _ => "",
        }
    }

    /// The held array, or an empty slice for any other variant.
    pub fn as_array(&self) -> &[Value] {
        match self {
            Value::Array(items) => items,
            _ => &[],
        }
    }

    pub fn as_int_or(&self, default: i32) -> i32 {
        match self {
            Value::Int(n) => *n,
            _ => default,
        }
    }

    pub fn as_float_or(&self, default: f32) -> f32 {
        match self {
            Value::Float(n) => *n,
            _ => default,
        }
    }

    pub fn as_bool_or(&self, default: bool) -> bool {
        match self {
            Value::Bool(b) => *b,
            _ => default,
        }
    }

    pub fn as_str_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self {
            Value::String(s) => s,
            _ => default,
        }
    }

    /// Array element by position. Out-of-bounds indexes and non-array
    /// receivers yield the `Invalid` sentinel.
    pub fn at(&self, index: usize) -> &Value {
        match self {
            Value::Array(items) => items.get(index).unwrap_or(&INVALID),
            _ => &INVALID,
        }
    }

    /// Child lookup by key. Missing keys and non-section receivers yield the
    /// `Invalid` sentinel.
    pub fn get(&self, key: &str) -> &Value {
        self.get_ref(key).unwrap_or(&INVALID)
    }

    pub(crate) fn get_ref(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Section(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Keys of a section, in declaration order. Empty for non-sections.
    pub fn keys(&self) -> Vec<String> {
        match self {
            Value::Section(entries) => entries.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Insert or replace a child. A non-section receiver becomes an empty
    /// section first; the document builder guards against that path ever
    /// clobbering parsed data.
    pub fn set_key_value(&mut self, key: &str, value: Value) {
        if !self.is_section() {
            *self = Value::section();
        }
        if let Value::Section(entries) = self {
            entries.insert(key.to_string(), value);
        }
    }

    /// Descend into the section under `key`, creating an empty one if the
    /// key is absent. An existing section child is reused untouched, which is
    /// what lets a section header be reopened later in the file.
    pub fn get_or_create_section(&mut self, key: &str) -> &mut Value {
        if !self.is_section() {
            *self = Value::section();
        }
        match self {
            Value::Section(entries) => entries
                .entry(key.to_string())
                .or_insert_with(Value::section),
            _ => unreachable!("receiver was just made a section"),
        }
    }
}

impl std::ops::Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.at(index)
    }
}

impl std::ops::Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key)
    }
}

/// One parsed OMFL document: the root section plus an aggregate validity
/// flag. The first validation failure flips the flag, halts the parse, and
/// taints every subsequent lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
    valid: bool,
    error_line: Option<usize>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Document {
            root: Value::section(),
            valid: true,
            error_line: None,
        }
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    /// 1-based physical line at which parsing halted, if it did.
    pub fn error_line(&self) -> Option<usize> {
        self.error_line
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Value {
        &mut self.root
    }

    pub(crate) fn mark_invalid(&mut self, line: usize) {
        self.valid = false;
        self.error_line = Some(line);
    }

    /// Invalidate without a line, for inputs that never reached the parser
    /// (an unreadable file).
    pub(crate) fn mark_unreadable(&mut self) {
        self.valid = false;
        self.error_line = None;
    }

    /// Resolve a dotted path from the root.
    ///
    /// Empty path segments are dropped silently, so `a..b` and `.a.b` look up
    /// the same node as `a.b` (declaration-time rules are stricter). Every
    /// intermediate segment must name a section. On an invalid document every
    /// path resolves to the `Invalid` sentinel, including paths that were
    /// populated before the failing line.
    pub fn get(&self, path: &str) -> &Value {
        if !self.valid {
            return &INVALID;
        }

        let parts = lexer::split_path(path);
        let Some((last, init)) = parts.split_last() else {
            return &INVALID;
        };

        let mut current = &self.root;
        for part in init {
            match current.get_ref(part) {
                Some(child) if child.is_section() => current = child,
                _ => return &INVALID,
            }
        }

        current.get(last)
    }
}
