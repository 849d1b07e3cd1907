//! Background image lists
//!
//! `background-image` is either a keyword or an ordered list of `url()`
//! entries. Entries are owned by the list; already-owned instances are
//! refused, and replacement validates the whole batch before touching the
//! stored one.

use std::fmt;

use sepal_css::{split_list, CssError, CssResult, UrlValue};

use crate::keyword;
use crate::shorthand::{claim_urls, render_urls};
use crate::CssProperty;

const NAME: &str = "background-image";
const KEYWORDS: &[&str] = &[keyword::NONE];
const EXPECTED: &str = "a comma-separated list of url() entries, or none";

#[derive(Debug, Clone)]
enum ImageState {
    Keyword(&'static str),
    List(Vec<UrlValue>),
}

/// The background-image property value
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    state: ImageState,
}

impl BackgroundImage {
    /// Fresh value in the `none` state
    pub fn new() -> Self {
        Self { state: ImageState::Keyword(keyword::NONE) }
    }

    pub fn parse(text: &str) -> CssResult<Self> {
        let mut value = Self::new();
        value.set_css_text(text)?;
        Ok(value)
    }

    /// Build a list from raw paths, each wrapped in a quoted `url()`
    pub fn from_paths(paths: &[&str]) -> CssResult<Self> {
        if paths.is_empty() {
            return Err(CssError::invalid_grammar(NAME, "", EXPECTED));
        }
        let mut urls = Vec::with_capacity(paths.len());
        for path in paths {
            let mut url = UrlValue::from_path(*path);
            url.set_attached(true);
            urls.push(url);
        }
        Ok(Self { state: ImageState::List(urls) })
    }

    /// Build a list from already-constructed entries, taking ownership
    pub fn from_values(values: Vec<UrlValue>) -> CssResult<Self> {
        let urls = claim_urls(values, NAME, EXPECTED)?;
        Ok(Self { state: ImageState::List(urls) })
    }

    pub fn is_valid(text: &str) -> bool {
        Self::parse(text).is_ok()
    }

    pub fn set_css_text(&mut self, text: &str) -> CssResult<()> {
        let trimmed = text.trim();
        if let Some(k) =
            keyword::global_of(trimmed).or_else(|| keyword::lookup(KEYWORDS, trimmed))
        {
            self.state = ImageState::Keyword(k);
            return Ok(());
        }

        let entries = split_list(NAME, text)?;
        if entries.is_empty() {
            return Err(CssError::invalid_grammar(NAME, text, EXPECTED));
        }
        let mut urls = Vec::with_capacity(entries.len());
        for entry in &entries {
            match UrlValue::parse(entry) {
                Some(mut url) => {
                    url.set_attached(true);
                    urls.push(url);
                }
                None => return Err(CssError::invalid_grammar(NAME, entry.clone(), EXPECTED)),
            }
        }
        self.state = ImageState::List(urls);
        Ok(())
    }

    /// Replace the whole list, gating every incoming entry first
    pub fn set_urls(&mut self, values: Vec<UrlValue>) -> CssResult<()> {
        let urls = claim_urls(values, NAME, EXPECTED)?;
        self.state = ImageState::List(urls);
        Ok(())
    }

    pub fn set_keyword(&mut self, token: &str) -> CssResult<()> {
        match keyword::global_of(token).or_else(|| keyword::lookup(KEYWORDS, token)) {
            Some(k) => {
                self.state = ImageState::Keyword(k);
                Ok(())
            }
            None => Err(CssError::invalid_grammar(NAME, token, EXPECTED)),
        }
    }

    pub fn keyword(&self) -> Option<&'static str> {
        match self.state {
            ImageState::Keyword(k) => Some(k),
            _ => None,
        }
    }

    pub fn urls(&self) -> Option<&[UrlValue]> {
        match &self.state {
            ImageState::List(urls) => Some(urls),
            _ => None,
        }
    }

    pub fn css_text(&self) -> String {
        match &self.state {
            ImageState::Keyword(k) => (*k).to_string(),
            ImageState::List(urls) => render_urls(urls),
        }
    }
}

impl Default for BackgroundImage {
    fn default() -> Self {
        Self::new()
    }
}

impl CssProperty for BackgroundImage {
    fn name(&self) -> &'static str {
        NAME
    }

    fn css_text(&self) -> String {
        BackgroundImage::css_text(self)
    }

    fn set_css_text(&mut self, text: &str) -> CssResult<()> {
        BackgroundImage::set_css_text(self, text)
    }
}

impl fmt::Display for BackgroundImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", NAME, self.css_text())
    }
}
