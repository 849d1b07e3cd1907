//! Cursor values
//!
//! `cursor` is a closed vocabulary of pointer shapes, optionally preceded by
//! custom `url()` images. A list form must end with a shape so there is
//! always something to fall back to when no image loads.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashSet;

use sepal_css::{split_list, CssError, CssResult, UrlValue};

use crate::keyword;
use crate::shorthand::{claim_urls, render_urls};
use crate::CssProperty;

const NAME: &str = "cursor";
const EXPECTED: &str = "a cursor type, optionally preceded by url() entries";

/// Every pointer shape the property accepts
pub const CURSOR_TYPES: &[&str] = &[
    "alias",
    "all-scroll",
    "auto",
    "cell",
    "context-menu",
    "col-resize",
    "copy",
    "crosshair",
    "default",
    "e-resize",
    "ew-resize",
    "grab",
    "grabbing",
    "help",
    "move",
    "n-resize",
    "ne-resize",
    "nesw-resize",
    "ns-resize",
    "nw-resize",
    "nwse-resize",
    "no-drop",
    "none",
    "not-allowed",
    "pointer",
    "progress",
    "row-resize",
    "s-resize",
    "se-resize",
    "sw-resize",
    "text",
    "vertical-text",
    "w-resize",
    "wait",
    "zoom-in",
    "zoom-out",
];

static TYPES: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| CURSOR_TYPES.iter().copied().collect());

#[derive(Debug, Clone)]
enum CursorState {
    Keyword(&'static str),
    List {
        urls: Vec<UrlValue>,
        fallback: &'static str,
    },
}

/// The cursor property value
#[derive(Debug, Clone)]
pub struct Cursor {
    state: CursorState,
}

impl Cursor {
    /// Fresh value in the `default` state
    pub fn new() -> Self {
        Self { state: CursorState::Keyword("default") }
    }

    pub fn parse(text: &str) -> CssResult<Self> {
        let mut value = Self::new();
        value.set_css_text(text)?;
        Ok(value)
    }

    /// Build a list from already-constructed entries plus the fallback shape
    pub fn from_values(values: Vec<UrlValue>, fallback: &str) -> CssResult<Self> {
        let fallback = cursor_type_of(fallback)?;
        let urls = claim_urls(values, NAME, EXPECTED)?;
        Ok(Self { state: CursorState::List { urls, fallback } })
    }

    pub fn is_valid(text: &str) -> bool {
        Self::parse(text).is_ok()
    }

    pub fn set_css_text(&mut self, text: &str) -> CssResult<()> {
        let entries = split_list(NAME, text)?;

        if let [token] = entries.as_slice() {
            return self.set_keyword(token);
        }
        let (last, heads) = match entries.split_last() {
            Some(split) => split,
            None => return Err(CssError::invalid_grammar(NAME, text, EXPECTED)),
        };

        let fallback = cursor_type_of(last)?;
        let mut urls = Vec::with_capacity(heads.len());
        for entry in heads {
            match UrlValue::parse(entry) {
                Some(mut url) => {
                    url.set_attached(true);
                    urls.push(url);
                }
                None => return Err(CssError::invalid_grammar(NAME, entry.clone(), EXPECTED)),
            }
        }
        self.state = CursorState::List { urls, fallback };
        Ok(())
    }

    /// Replace the URL list and fallback shape, gating every incoming entry
    pub fn set_cursor_urls(&mut self, fallback: &str, values: Vec<UrlValue>) -> CssResult<()> {
        let fallback = cursor_type_of(fallback)?;
        let urls = claim_urls(values, NAME, EXPECTED)?;
        self.state = CursorState::List { urls, fallback };
        Ok(())
    }

    pub fn set_keyword(&mut self, token: &str) -> CssResult<()> {
        let k = match keyword::global_of(token) {
            Some(k) => k,
            None => cursor_type_of(token)?,
        };
        self.state = CursorState::Keyword(k);
        Ok(())
    }

    pub fn keyword(&self) -> Option<&'static str> {
        match self.state {
            CursorState::Keyword(k) => Some(k),
            _ => None,
        }
    }

    /// Fallback shape of a list value
    pub fn fallback(&self) -> Option<&'static str> {
        match self.state {
            CursorState::List { fallback, .. } => Some(fallback),
            _ => None,
        }
    }

    pub fn urls(&self) -> Option<&[UrlValue]> {
        match &self.state {
            CursorState::List { urls, .. } => Some(urls),
            _ => None,
        }
    }

    pub fn css_text(&self) -> String {
        match &self.state {
            CursorState::Keyword(k) => (*k).to_string(),
            CursorState::List { urls, fallback } => {
                format!("{}, {}", render_urls(urls), fallback)
            }
        }
    }
}

fn cursor_type_of(token: &str) -> CssResult<&'static str> {
    TYPES
        .get(token.trim().to_ascii_lowercase().as_str())
        .copied()
        .ok_or_else(|| CssError::invalid_grammar(NAME, token, EXPECTED))
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl CssProperty for Cursor {
    fn name(&self) -> &'static str {
        NAME
    }

    fn css_text(&self) -> String {
        Cursor::css_text(self)
    }

    fn set_css_text(&mut self, text: &str) -> CssResult<()> {
        Cursor::set_css_text(self, text)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", NAME, self.css_text())
    }
}
