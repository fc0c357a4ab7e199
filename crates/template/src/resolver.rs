//! Variable resolution and `{{token}}` interpolation
//!
//! Resolution never fails: missing paths, nulls and type mismatches all
//! degrade to fallback text so a half-configured template still renders.

use serde_json::Value;

use crate::context::DataContext;

/// Walk a dotted path inside a nested value
///
/// Returns `None` when any segment is missing, empty, or traverses a
/// non-record value.
pub fn resolve_path<'a>(path: &str, root: &'a Value) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        if segment.is_empty() {
            return None;
        }
        current = match current {
            Value::Object(map) => map.get(segment)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Convert a context value to display text
///
/// Strings pass through, numbers and booleans format naturally, null shows
/// nothing. A terminal record falls back to its conventional `name` field,
/// since paths often under-specify nesting; records without one, and
/// arrays, show nothing.
pub fn value_to_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Object(map) => match map.get("name") {
            Some(name) if !name.is_null() => value_to_display(name),
            _ => String::new(),
        },
        Value::Array(_) => String::new(),
    }
}

/// Resolve a variable path to display text, empty on a miss
pub fn resolve(path: &str, ctx: &DataContext) -> String {
    resolve_with_placeholder(path, ctx, None)
}

/// Resolve a variable path with a fallback for misses
///
/// The placeholder applies only when the path misses or lands on null; a
/// path that resolves to an empty string stays empty.
pub fn resolve_with_placeholder(
    path: &str,
    ctx: &DataContext,
    placeholder: Option<&str>,
) -> String {
    match resolve_path(path, ctx.root()) {
        None | Some(Value::Null) => placeholder.unwrap_or_default().to_string(),
        Some(value) => value_to_display(value),
    }
}

/// Replace `{{path}}` tokens in a literal with resolved context values
///
/// Tokens whose path misses stay verbatim, so a half-bound template shows
/// exactly which bindings are missing. Unterminated braces pass through
/// untouched.
pub fn interpolate(text: &str, ctx: &DataContext) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let token = after[..end].trim();
                match resolve_path(token, ctx.root()) {
                    Some(value) if !value.is_null() => out.push_str(&value_to_display(value)),
                    _ => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
