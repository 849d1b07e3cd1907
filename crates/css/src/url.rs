//! URL value entries
//!
//! One `url(...)` reference as it appears in list-valued properties.
//! The stored path is unquoted; serialization always double-quotes, so
//! `url(a.png)`, `url('a.png')` and `url("a.png")` all read back as
//! `url("a.png")`. Cursor-style hotspot hints ride along as integers.

use std::fmt;

use serde::Serialize;

/// A single URL reference with optional x/y hotspot hints
#[derive(Debug, Clone, Serialize)]
pub struct UrlValue {
    path: String,
    x: Option<i32>,
    y: Option<i32>,
    attached: bool,
}

impl UrlValue {
    /// Wrap a raw path; no parsing is applied
    pub fn from_path(path: impl Into<String>) -> Self {
        Self { path: path.into(), x: None, y: None, attached: false }
    }

    /// Parse one entry: `url(p)`, `url('p')`, `url("p")`, optional `x` / `x y`
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let rest = strip_prefix_ignore_case(text, "url(")?;

        let close = find_close(rest)?;
        let inner = rest[..close].trim();
        let path = unquote(inner)?;
        if path.is_empty() {
            return None;
        }

        let mut hints = rest[close + 1..].split_whitespace();
        let x = match hints.next() {
            Some(token) => Some(token.parse::<i32>().ok()?),
            None => None,
        };
        let y = match hints.next() {
            Some(token) => Some(token.parse::<i32>().ok()?),
            None => None,
        };
        if hints.next().is_some() {
            return None;
        }

        Some(Self { path: path.to_string(), x, y, attached: false })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn x(&self) -> Option<i32> {
        self.x
    }

    pub fn y(&self) -> Option<i32> {
        self.y
    }

    pub fn set_x(&mut self, x: Option<i32>) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: Option<i32>) {
        self.y = y;
    }

    /// True while this entry is part of a list-valued property
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Flip the attachment flag; list containers maintain this
    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }
}

// The attachment flag is bookkeeping, not part of the value
impl PartialEq for UrlValue {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.x == other.x && self.y == other.y
    }
}

impl fmt::Display for UrlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "url(\"{}\")", self.path)?;
        if let Some(x) = self.x {
            write!(f, " {}", x)?;
        }
        if let Some(y) = self.y {
            write!(f, " {}", y)?;
        }
        Ok(())
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    // get() also rejects a cut inside a multi-byte char
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        text.get(prefix.len()..)
    } else {
        None
    }
}

/// Position of the `)` closing the url body, honoring quotes
fn find_close(rest: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in rest.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' => quote = Some(c),
                ')' => return Some(i),
                _ => {}
            },
        }
    }
    None
}

fn unquote(inner: &str) -> Option<&str> {
    for q in ['"', '\''] {
        if let Some(stripped) = inner.strip_prefix(q) {
            return stripped.strip_suffix(q);
        }
    }
    Some(inner)
}
