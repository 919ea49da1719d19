//! Template variable substitution and token inspection.
//!
//! Substitution is textual. Content is scanned once for `{{namespace.field}}`
//! tokens; a token is replaced only when it is in the variable catalog and
//! the context has a value for it. Everything else, including tokens with
//! unknown fields or stray whitespace, is left exactly as written. Values are
//! inserted verbatim and never re-scanned, so a value that itself looks like
//! a token survives one pass untouched (and a second pass would expand it:
//! `substitute` is not idempotent in that case).

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::context::VariableContext;
use crate::error::CoreError;
use crate::variables::{self, VariableDef};

/// Regex pattern matching `{{namespace.field}}` shaped tokens.
pub const TOKEN_PATTERN: &str = r"\{\{([A-Za-z_][A-Za-z0-9_]*)\.([A-Za-z_][A-Za-z0-9_]*)\}\}";

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Replace every recognized token that `context` has a value for.
pub fn substitute(content: &str, context: &VariableContext) -> String {
    TOKEN_RE
        .replace_all(content, |caps: &Captures| {
            resolve(&caps[1], &caps[2], context)
                .map(str::to_string)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn resolve<'a>(namespace: &str, field: &str, context: &'a VariableContext) -> Option<&'a str> {
    if !variables::is_known(namespace, field) {
        return None;
    }
    context.get(namespace, field)
}

// ---------------------------------------------------------------------------
// Token inspection
// ---------------------------------------------------------------------------

/// All token keys (`namespace.field`) in `content`, recognized or not.
///
/// Returns a de-duplicated, sorted list.
pub fn extract_tokens(content: &str) -> Vec<String> {
    collect_keys(content, |_, _| true)
}

/// Token keys in `content` that are not in the variable catalog.
pub fn unrecognized_tokens(content: &str) -> Vec<String> {
    collect_keys(content, |ns, field| !variables::is_known(ns, field))
}

/// Token keys that [`substitute`] would leave literal with `context`.
pub fn unresolved_tokens(content: &str, context: &VariableContext) -> Vec<String> {
    collect_keys(content, |ns, field| resolve(ns, field, context).is_none())
}

fn collect_keys(content: &str, keep: impl Fn(&str, &str) -> bool) -> Vec<String> {
    let mut keys: Vec<String> = TOKEN_RE
        .captures_iter(content)
        .filter(|caps| keep(&caps[1], &caps[2]))
        .map(|caps| format!("{}.{}", &caps[1], &caps[2]))
        .collect();
    keys.sort();
    keys.dedup();
    keys
}

// ---------------------------------------------------------------------------
// Token insertion
// ---------------------------------------------------------------------------

/// Insert the token for `def` at byte offset `position`.
///
/// Offsets past the end append. An offset inside a multi-byte character is
/// rejected.
pub fn insert_token(content: &str, position: usize, def: &VariableDef) -> Result<String, CoreError> {
    let position = position.min(content.len());
    if !content.is_char_boundary(position) {
        return Err(CoreError::Validation(format!(
            "Insert position {position} is not on a character boundary"
        )));
    }
    let token = def.token();
    let mut out = String::with_capacity(content.len() + token.len());
    out.push_str(&content[..position]);
    out.push_str(&token);
    out.push_str(&content[position..]);
    Ok(out)
}
