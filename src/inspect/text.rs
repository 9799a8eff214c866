//! Textual signature declaration parser
//!
//! Accepts declarations of the shape `name(a, b: int = 5, *, c)`, the
//! form signature reprs take in dynamic languages. A trailing return
//! annotation (`-> T`) is accepted and ignored.

use crate::error::{Result, SigcardError};
use crate::models::{Callable, Parameter};

/// Parse a textual signature declaration into a callable descriptor
///
/// Bare `*` and `/` entries are parameter-kind separators, not
/// parameters; `*args`/`**kwargs` are reported under their plain names.
pub fn parse(decl: &str) -> Result<Callable> {
    let decl = decl.trim();

    let open = decl
        .find('(')
        .ok_or_else(|| SigcardError::Signature(format!("no parameter list in '{}'", decl)))?;

    let close = matching_paren(decl, open).ok_or_else(|| {
        SigcardError::Signature(format!("unterminated parameter list in '{}'", decl))
    })?;

    let trailing = decl[close + 1..].trim();
    if !trailing.is_empty() && !trailing.starts_with("->") {
        return Err(SigcardError::Signature(format!(
            "unexpected trailing text '{}' in '{}'",
            trailing, decl
        )));
    }

    // Declared name if present, otherwise the whole declaration stands
    // in as the textual representation.
    let name = match decl[..open].trim() {
        "" => decl.to_string(),
        declared => declared.to_string(),
    };

    let mut callable = Callable::new(name);

    for item in split_top_level(&decl[open + 1..close]) {
        let item = item.trim();
        if item.is_empty() || item == "*" || item == "/" {
            continue;
        }
        callable.parameters.push(parse_parameter(item)?);
    }

    Ok(callable)
}

/// Parse a single parameter entry: `name[: annotation][ = default]`
fn parse_parameter(item: &str) -> Result<Parameter> {
    let entry = item.trim_start_matches('*').trim();

    let (head, default) = match find_top_level(entry, '=') {
        Some(pos) => (&entry[..pos], Some(entry[pos + 1..].trim())),
        None => (entry, None),
    };

    if let Some("") = default {
        return Err(SigcardError::Signature(format!(
            "empty default value in '{}'",
            item
        )));
    }

    let (name, annotation) = match find_top_level(head, ':') {
        Some(pos) => (head[..pos].trim(), Some(head[pos + 1..].trim())),
        None => (head.trim(), None),
    };

    if let Some("") = annotation {
        return Err(SigcardError::Signature(format!(
            "empty annotation in '{}'",
            item
        )));
    }

    if !is_identifier(name) {
        return Err(SigcardError::Signature(format!(
            "invalid parameter name in '{}'",
            item
        )));
    }

    Ok(Parameter {
        name: name.to_string(),
        annotation: annotation.map(str::to_string),
        default: default.map(str::to_string),
    })
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Byte offset of the `)` matching the `(` at `open`
///
/// Skips over string literals, where an unbalanced paren is legitimate
/// (e.g. a default of `"("`).
fn matching_paren(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for (i, c) in s[open..].char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(open + i);
                    }
                }
                _ => {}
            },
        }
    }

    None
}

/// Split on commas that are not nested inside brackets or string
/// literals, so `dict[str, int]` annotations and `"a, b"` defaults
/// survive intact
fn split_top_level(list: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in list.char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    items.push(&list[start..i]);
                    start = i + 1;
                }
                _ => {}
            },
        }
    }

    if start < list.len() || !items.is_empty() {
        items.push(&list[start..]);
    }

    items
}

/// Byte offset of the first `target` not nested inside brackets or
/// string literals
fn find_top_level(s: &str, target: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for (i, c) in s.char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' => depth = depth.saturating_sub(1),
                c if c == target && depth == 0 => return Some(i),
                _ => {}
            },
        }
    }

    None
}
