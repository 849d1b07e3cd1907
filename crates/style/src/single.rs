//! Single-component property values
//!
//! One `SingleValue` holds a keyword, a numeric value, or a color,
//! whichever its grammar admits, and never more than one at a time.
//! These are the longhand properties and the sub-values shorthands own.

use std::fmt;

use sepal_css::{
    CssColor, CssError, CssNumber, CssResult, LengthUnit, NumberPattern, NumericValue,
    TokenMatch, TokenRule, ValueGrammar,
};

use crate::keyword;
use crate::CssProperty;

/// Static descriptor for a single-component property
#[derive(Debug)]
pub struct SingleDef {
    pub grammar: ValueGrammar,
    /// Text a fresh value starts from
    pub initial: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
enum SingleState {
    Keyword(&'static str),
    Numeric(NumericValue),
    Color(CssColor),
}

/// A keyword-or-numeric-or-color property value
#[derive(Debug, Clone)]
pub struct SingleValue {
    def: &'static SingleDef,
    state: SingleState,
    attached: bool,
}

impl SingleValue {
    /// Fresh value carrying the descriptor's initial text
    pub fn new(def: &'static SingleDef) -> Self {
        let state = parse_state(def, def.initial)
            .unwrap_or(SingleState::Keyword(keyword::INITIAL));
        Self { def, state, attached: false }
    }

    /// Parse a whole-value text
    pub fn parse(def: &'static SingleDef, text: &str) -> CssResult<Self> {
        let state = parse_state(def, text)?;
        Ok(Self { def, state, attached: false })
    }

    /// Build from a magnitude and unit, e.g. `35.0` + `px`
    pub fn from_length(def: &'static SingleDef, value: f32, unit: LengthUnit) -> CssResult<Self> {
        let state = numeric_state(def, NumericValue::length(value, unit))?;
        Ok(Self { def, state, attached: false })
    }

    /// Build from a unit-less float argument; renders in decimal spelling
    pub fn from_f32(def: &'static SingleDef, value: f32) -> CssResult<Self> {
        let state = numeric_state(def, NumericValue::unitless(CssNumber::from_f32(value)))?;
        Ok(Self { def, state, attached: false })
    }

    /// Build from a unit-less integer argument; renders without a fraction
    pub fn from_i32(def: &'static SingleDef, value: i32) -> CssResult<Self> {
        let state = numeric_state(def, NumericValue::unitless(CssNumber::from_i32(value)))?;
        Ok(Self { def, state, attached: false })
    }

    /// Build from a vocabulary or global keyword
    pub fn from_keyword(def: &'static SingleDef, token: &str) -> CssResult<Self> {
        let mut value = Self::new(def);
        value.set_keyword(token)?;
        Ok(value)
    }

    /// Validity pre-check matching `parse`
    pub fn is_valid(def: &'static SingleDef, text: &str) -> bool {
        parse_state(def, text).is_ok()
    }

    pub fn keyword(&self) -> Option<&'static str> {
        match self.state {
            SingleState::Keyword(k) => Some(k),
            _ => None,
        }
    }

    pub fn numeric(&self) -> Option<&NumericValue> {
        match &self.state {
            SingleState::Numeric(v) => Some(v),
            _ => None,
        }
    }

    pub fn color(&self) -> Option<&CssColor> {
        match &self.state {
            SingleState::Color(c) => Some(c),
            _ => None,
        }
    }

    /// True while this value is owned by a shorthand
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub(crate) fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    pub(crate) fn def(&self) -> &'static SingleDef {
        self.def
    }

    /// Parse one shorthand component; global keywords are not components
    pub(crate) fn from_component(def: &'static SingleDef, token: &str) -> Option<Self> {
        let state = match def.grammar.match_token(token)? {
            TokenMatch::Keyword(k) => SingleState::Keyword(k),
            TokenMatch::Numeric(v) => SingleState::Numeric(v),
            TokenMatch::Color(c) => SingleState::Color(c),
        };
        Some(Self { def, state, attached: false })
    }

    pub fn set_css_text(&mut self, text: &str) -> CssResult<()> {
        self.state = parse_state(self.def, text)?;
        Ok(())
    }

    pub fn set_length(&mut self, value: f32, unit: LengthUnit) -> CssResult<()> {
        self.state = numeric_state(self.def, NumericValue::length(value, unit))?;
        Ok(())
    }

    pub fn set_f32(&mut self, value: f32) -> CssResult<()> {
        self.state =
            numeric_state(self.def, NumericValue::unitless(CssNumber::from_f32(value)))?;
        Ok(())
    }

    pub fn set_i32(&mut self, value: i32) -> CssResult<()> {
        self.state =
            numeric_state(self.def, NumericValue::unitless(CssNumber::from_i32(value)))?;
        Ok(())
    }

    pub fn set_keyword(&mut self, token: &str) -> CssResult<()> {
        let found = keyword::global_of(token).or_else(|| self.def.grammar.keyword_of(token));
        match found {
            Some(k) => {
                self.state = SingleState::Keyword(k);
                Ok(())
            }
            None => Err(CssError::invalid_grammar(
                self.def.grammar.property,
                token,
                self.def.grammar.expected,
            )),
        }
    }

    /// Canonical value text
    pub fn css_text(&self) -> String {
        match &self.state {
            SingleState::Keyword(k) => (*k).to_string(),
            SingleState::Color(c) => c.to_string(),
            SingleState::Numeric(v) => self.rendered(v),
        }
    }

    /// Unit-less float kinds always render decimal; everything else keeps
    /// its spelling
    fn rendered(&self, value: &NumericValue) -> String {
        match (self.def.grammar.token, value.unit()) {
            (TokenRule::Number(pattern, _), None)
                if pattern != NumberPattern::NonNegativeInteger =>
            {
                value.as_decimal().to_string()
            }
            _ => value.to_string(),
        }
    }
}

impl CssProperty for SingleValue {
    fn name(&self) -> &'static str {
        self.def.grammar.property
    }

    fn css_text(&self) -> String {
        SingleValue::css_text(self)
    }

    fn set_css_text(&mut self, text: &str) -> CssResult<()> {
        SingleValue::set_css_text(self, text)
    }
}

impl fmt::Display for SingleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.def.grammar.property, self.css_text())
    }
}

fn parse_state(def: &'static SingleDef, text: &str) -> CssResult<SingleState> {
    let trimmed = text.trim();
    if let Some(k) = keyword::global_of(trimmed) {
        return Ok(SingleState::Keyword(k));
    }
    match def.grammar.match_token(trimmed) {
        Some(TokenMatch::Keyword(k)) => Ok(SingleState::Keyword(k)),
        Some(TokenMatch::Numeric(v)) => Ok(SingleState::Numeric(v)),
        Some(TokenMatch::Color(c)) => Ok(SingleState::Color(c)),
        None => Err(CssError::invalid_grammar(def.grammar.property, text, def.grammar.expected)),
    }
}

fn numeric_state(def: &'static SingleDef, value: NumericValue) -> CssResult<SingleState> {
    if let TokenRule::Number(pattern, units) = def.grammar.token {
        let number = value.number();
        if pattern.accepts(number.value(), number.form()) && units.accepts(value.unit()) {
            return Ok(SingleState::Numeric(value));
        }
    }
    Err(CssError::invalid_grammar(def.grammar.property, value.to_string(), def.grammar.expected))
}
