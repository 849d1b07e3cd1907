//! Keyword constants and vocabulary lookup
//!
//! `initial` and `inherit` apply to every whole property value; everything
//! else belongs to per-property vocabularies declared next to each engine.

pub const INITIAL: &str = "initial";
pub const INHERIT: &str = "inherit";
pub const AUTO: &str = "auto";
pub const NONE: &str = "none";
pub const MEDIUM: &str = "medium";
pub const THIN: &str = "thin";
pub const THICK: &str = "thick";

/// The keywords every property accepts for its whole value
pub const GLOBALS: &[&str] = &[INITIAL, INHERIT];

/// Canonical spelling for a token found in a vocabulary (case-insensitive)
pub fn lookup(vocab: &'static [&'static str], token: &str) -> Option<&'static str> {
    let token = token.trim();
    vocab.iter().find(|k| token.eq_ignore_ascii_case(k)).copied()
}

/// Canonical spelling when the token is `initial` or `inherit`
pub fn global_of(token: &str) -> Option<&'static str> {
    lookup(GLOBALS, token)
}
