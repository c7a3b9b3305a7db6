//! Line-level normalization for OMFL source text.
//!
//! OMFL is strictly line-oriented, so instead of a token stream the lexer
//! hands the parser one cleaned line at a time: comments stripped (with
//! quote tracking, so a `#` inside a string survives) and surrounding ASCII
//! spaces trimmed. Everything borrows from the original source text.

/// Split raw source into physical lines on `\n`.
///
/// A trailing newline produces one empty final line, which the parser then
/// skips as blank.
pub fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    input.split('\n')
}

/// Truncate a line at the first `#` that is not inside a double-quoted
/// string. Quote state toggles on every `"`; a `#` between quotes is
/// literal.
pub fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Trim leading and trailing ASCII space characters only. Tabs and carriage
/// returns are ordinary characters in OMFL.
pub fn trim_spaces(line: &str) -> &str {
    line.trim_matches(' ')
}

/// Full per-line normalization: comment removal, then trimming.
pub fn normalize(raw: &str) -> &str {
    trim_spaces(strip_comment(raw))
}

/// Split a dotted lookup path, dropping empty segments.
///
/// This is the lenient splitter used at query time: `a..b`, `.a.b` and
/// `a.b.` all yield `["a", "b"]`. Declaration-time section names are
/// validated with stricter rules in the parser.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('.').filter(|part| !part.is_empty()).collect()
}

#[cfg(test)]
mod tests;
