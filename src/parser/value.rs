use crate::ast::Value;
use crate::lexer;

/// Classify a trimmed value token.
///
/// Precedence is fixed: string, bool, array, float, int. First match wins,
/// which is what makes `"true"` a string rather than a boolean. Anything
/// that matches no rule is `Value::Invalid`.
pub(crate) fn classify(token: &str) -> Value {
    if is_string_literal(token) {
        return Value::String(token[1..token.len() - 1].to_string());
    }

    if token == "true" || token == "false" {
        return Value::Bool(token == "true");
    }

    if token.len() >= 2 && token.starts_with('[') && token.ends_with(']') {
        return classify_array(token);
    }

    if is_float_literal(token) {
        return match token.parse::<f32>() {
            Ok(n) => Value::Float(n),
            Err(_) => Value::Invalid,
        };
    }

    if is_int_literal(token) {
        // Literals outside i32 range fail to parse and are rejected, never
        // wrapped or widened.
        return match token.parse::<i32>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Invalid,
        };
    }

    Value::Invalid
}

/// `"…"` with exactly one opening and one closing quote. No escapes: an
/// interior `"` disqualifies the token entirely.
fn is_string_literal(token: &str) -> bool {
    token.len() >= 2
        && token.starts_with('"')
        && token.ends_with('"')
        && token.matches('"').count() == 2
}

/// Optional sign, digits, `.`, digits. No exponent, no digit-less side.
fn is_float_literal(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    let Some((whole, frac)) = digits.split_once('.') else {
        return false;
    };
    !whole.is_empty()
        && !frac.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && frac.bytes().all(|b| b.is_ascii_digit())
}

/// Optional sign, then digits only.
fn is_int_literal(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Recursively classify a bracketed token.
///
/// The body is split on top-level commas only: a comma inside a quoted
/// string or inside a nested bracket pair does not separate elements. An
/// empty body is an empty array; an empty segment (stray or trailing comma)
/// classifies as Invalid and poisons the whole array, as does unbalanced
/// bracket or quote nesting.
fn classify_array(token: &str) -> Value {
    let body = lexer::trim_spaces(&token[1..token.len() - 1]);
    if body.is_empty() {
        return Value::Array(Vec::new());
    }

    let Some(segments) = split_top_level(body) else {
        return Value::Invalid;
    };

    let mut elements = Vec::with_capacity(segments.len());
    for segment in segments {
        let element = classify(lexer::trim_spaces(segment));
        if element.is_invalid() {
            return Value::Invalid;
        }
        elements.push(element);
    }

    Value::Array(elements)
}

/// Split an array body on depth-0, unquoted commas. `None` when the quote
/// or bracket nesting never balances.
fn split_top_level(body: &str) -> Option<Vec<&str>> {
    let mut segments = Vec::new();
    let mut in_string = false;
    let mut depth: i32 = 0;
    let mut start = 0;

    for (i, c) in body.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '[' if !in_string => depth += 1,
            ']' if !in_string => depth -= 1,
            ',' if !in_string && depth == 0 => {
                segments.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 || in_string {
        return None;
    }

    segments.push(&body[start..]);
    Some(segments)
}
