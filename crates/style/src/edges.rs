//! Four-edge box values
//!
//! `margin` and `padding` style values: either a whole-value keyword or
//! all four edges, nothing in between. Serialization always emits the
//! minimal form, derived fresh on every read.

use std::fmt;

use sepal_css::{
    split_components, CssError, CssResult, LengthUnit, NumberForm, NumberPattern, NumericValue,
    TokenMatch, TokenRule, UnitRule, ValueGrammar,
};

use crate::keyword;
use crate::CssProperty;

/// Static descriptor for a four-edge property
#[derive(Debug)]
pub struct EdgeDef {
    pub name: &'static str,
    /// Whole-value keywords beyond the globals
    pub keywords: &'static [&'static str],
    /// Grammar each edge token must satisfy
    pub token: ValueGrammar,
}

pub static MARGIN: EdgeDef = EdgeDef {
    name: "margin",
    keywords: &[keyword::AUTO],
    token: ValueGrammar {
        property: "margin",
        token: TokenRule::Number(NumberPattern::Float, UnitRule::LengthOrPercent),
        keywords: &[],
        expected: "1 to 4 lengths or percentages, or auto/initial/inherit",
    },
};

pub static PADDING: EdgeDef = EdgeDef {
    name: "padding",
    keywords: &[],
    token: ValueGrammar {
        property: "padding",
        token: TokenRule::Number(NumberPattern::NonNegativeFloat, UnitRule::LengthOrPercent),
        keywords: &[],
        expected: "1 to 4 non-negative lengths or percentages, or initial/inherit",
    },
};

const EXPECTED_EDGE_STATE: &str = "a fully determined value before setting a single edge";

#[derive(Debug, Clone, PartialEq)]
enum EdgeState {
    Keyword(&'static str),
    Edges {
        top: NumericValue,
        right: NumericValue,
        bottom: NumericValue,
        left: NumericValue,
    },
}

/// A top/right/bottom/left box value
#[derive(Debug, Clone)]
pub struct EdgeQuad {
    def: &'static EdgeDef,
    state: EdgeState,
}

impl EdgeQuad {
    /// Fresh value in the `initial` keyword state
    pub fn new(def: &'static EdgeDef) -> Self {
        Self { def, state: EdgeState::Keyword(keyword::INITIAL) }
    }

    /// Parse 1 to 4 edge tokens or a whole-value keyword
    pub fn parse(def: &'static EdgeDef, text: &str) -> CssResult<Self> {
        let mut value = Self::new(def);
        value.set_css_text(text)?;
        Ok(value)
    }

    pub fn is_valid(def: &'static EdgeDef, text: &str) -> bool {
        Self::parse(def, text).is_ok()
    }

    pub fn set_css_text(&mut self, text: &str) -> CssResult<()> {
        self.state = self.parse_state(text)?;
        Ok(())
    }

    fn parse_state(&self, text: &str) -> CssResult<EdgeState> {
        let parts = split_components(self.def.name, text)?;

        if parts.len() == 1 {
            let token = parts[0].as_str();
            if let Some(k) =
                keyword::global_of(token).or_else(|| keyword::lookup(self.def.keywords, token))
            {
                return Ok(EdgeState::Keyword(k));
            }
        }

        let mut edges: Vec<NumericValue> = Vec::with_capacity(parts.len());
        for part in &parts {
            match self.def.token.match_token(part) {
                Some(TokenMatch::Numeric(v)) => edges.push(v),
                _ => return Err(self.grammar_error(text)),
            }
        }

        // Broadcast short forms: top, then right, then bottom, then left
        let (top, right, bottom, left) = match edges.as_slice() {
            [a] => (*a, *a, *a, *a),
            [a, b] => (*a, *b, *a, *b),
            [a, b, c] => (*a, *b, *c, *b),
            [a, b, c, d] => (*a, *b, *c, *d),
            _ => return Err(self.grammar_error(text)),
        };
        Ok(EdgeState::Edges { top, right, bottom, left })
    }

    pub fn set_keyword(&mut self, token: &str) -> CssResult<()> {
        match keyword::global_of(token).or_else(|| keyword::lookup(self.def.keywords, token)) {
            Some(k) => {
                self.state = EdgeState::Keyword(k);
                Ok(())
            }
            None => Err(self.grammar_error(token)),
        }
    }

    pub fn keyword(&self) -> Option<&'static str> {
        match self.state {
            EdgeState::Keyword(k) => Some(k),
            _ => None,
        }
    }

    pub fn top(&self) -> Option<&NumericValue> {
        match &self.state {
            EdgeState::Edges { top, .. } => Some(top),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<&NumericValue> {
        match &self.state {
            EdgeState::Edges { right, .. } => Some(right),
            _ => None,
        }
    }

    pub fn bottom(&self) -> Option<&NumericValue> {
        match &self.state {
            EdgeState::Edges { bottom, .. } => Some(bottom),
            _ => None,
        }
    }

    pub fn left(&self) -> Option<&NumericValue> {
        match &self.state {
            EdgeState::Edges { left, .. } => Some(left),
            _ => None,
        }
    }

    pub fn set_top(&mut self, value: f32, unit: LengthUnit) -> CssResult<()> {
        let v = self.edge_value(value, unit)?;
        match &mut self.state {
            EdgeState::Edges { top, .. } => {
                *top = v;
                Ok(())
            }
            EdgeState::Keyword(_) => Err(self.keyword_state_error(v)),
        }
    }

    pub fn set_right(&mut self, value: f32, unit: LengthUnit) -> CssResult<()> {
        let v = self.edge_value(value, unit)?;
        match &mut self.state {
            EdgeState::Edges { right, .. } => {
                *right = v;
                Ok(())
            }
            EdgeState::Keyword(_) => Err(self.keyword_state_error(v)),
        }
    }

    pub fn set_bottom(&mut self, value: f32, unit: LengthUnit) -> CssResult<()> {
        let v = self.edge_value(value, unit)?;
        match &mut self.state {
            EdgeState::Edges { bottom, .. } => {
                *bottom = v;
                Ok(())
            }
            EdgeState::Keyword(_) => Err(self.keyword_state_error(v)),
        }
    }

    pub fn set_left(&mut self, value: f32, unit: LengthUnit) -> CssResult<()> {
        let v = self.edge_value(value, unit)?;
        match &mut self.state {
            EdgeState::Edges { left, .. } => {
                *left = v;
                Ok(())
            }
            EdgeState::Keyword(_) => Err(self.keyword_state_error(v)),
        }
    }

    /// Set all four edges to one percentage
    pub fn set_percent(&mut self, value: f32) -> CssResult<()> {
        let v = self.edge_value(value, LengthUnit::Percent)?;
        self.state = EdgeState::Edges { top: v, right: v, bottom: v, left: v };
        Ok(())
    }

    /// Set all four edges at once from float arguments
    pub fn set_edges(
        &mut self,
        top: (f32, LengthUnit),
        right: (f32, LengthUnit),
        bottom: (f32, LengthUnit),
        left: (f32, LengthUnit),
    ) -> CssResult<()> {
        let state = EdgeState::Edges {
            top: self.edge_value(top.0, top.1)?,
            right: self.edge_value(right.0, right.1)?,
            bottom: self.edge_value(bottom.0, bottom.1)?,
            left: self.edge_value(left.0, left.1)?,
        };
        self.state = state;
        Ok(())
    }

    fn edge_value(&self, value: f32, unit: LengthUnit) -> CssResult<NumericValue> {
        let v = NumericValue::length(value, unit);
        if let TokenRule::Number(pattern, units) = self.def.token.token {
            if pattern.accepts(value, NumberForm::Decimal) && units.accepts(Some(unit)) {
                return Ok(v);
            }
        }
        Err(CssError::invalid_grammar(
            self.def.name,
            v.to_string(),
            self.def.token.expected,
        ))
    }

    fn grammar_error(&self, value: impl Into<String>) -> CssError {
        CssError::invalid_grammar(self.def.name, value, self.def.token.expected)
    }

    fn keyword_state_error(&self, v: NumericValue) -> CssError {
        CssError::invalid_grammar(self.def.name, v.to_string(), EXPECTED_EDGE_STATE)
    }

    /// Minimal-form value text, derived on every read
    pub fn css_text(&self) -> String {
        match &self.state {
            EdgeState::Keyword(k) => (*k).to_string(),
            EdgeState::Edges { top, right, bottom, left } => {
                if top == bottom && right == left {
                    if top == right {
                        top.to_string()
                    } else {
                        format!("{} {}", top, right)
                    }
                } else if right == left {
                    format!("{} {} {}", top, right, bottom)
                } else {
                    format!("{} {} {} {}", top, right, bottom, left)
                }
            }
        }
    }
}

impl CssProperty for EdgeQuad {
    fn name(&self) -> &'static str {
        self.def.name
    }

    fn css_text(&self) -> String {
        EdgeQuad::css_text(self)
    }

    fn set_css_text(&mut self, text: &str) -> CssResult<()> {
        EdgeQuad::set_css_text(self, text)
    }
}

impl fmt::Display for EdgeQuad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.def.name, self.css_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_is_initial() {
        let margin = EdgeQuad::new(&MARGIN);
        assert_eq!(margin.css_text(), "initial");
        assert!(margin.top().is_none());
    }

    #[test]
    fn test_broadcast_one() {
        let margin = EdgeQuad::parse(&MARGIN, "25px").unwrap();
        assert_eq!(margin.top().unwrap().to_string(), "25px");
        assert_eq!(margin.left().unwrap().to_string(), "25px");
        assert_eq!(margin.css_text(), "25px");
    }

    #[test]
    fn test_broadcast_two() {
        let margin = EdgeQuad::parse(&MARGIN, "10px 5px").unwrap();
        assert_eq!(margin.top().unwrap().to_string(), "10px");
        assert_eq!(margin.bottom().unwrap().to_string(), "10px");
        assert_eq!(margin.right().unwrap().to_string(), "5px");
        assert_eq!(margin.left().unwrap().to_string(), "5px");
    }

    #[test]
    fn test_broadcast_three() {
        let margin = EdgeQuad::parse(&MARGIN, "1px 2px 3px").unwrap();
        assert_eq!(margin.top().unwrap().to_string(), "1px");
        assert_eq!(margin.right().unwrap().to_string(), "2px");
        assert_eq!(margin.left().unwrap().to_string(), "2px");
        assert_eq!(margin.bottom().unwrap().to_string(), "3px");
    }

    #[test]
    fn test_collapse_to_minimal_forms() {
        assert_eq!(EdgeQuad::parse(&MARGIN, "10px 10px 10px 10px").unwrap().css_text(), "10px");
        assert_eq!(EdgeQuad::parse(&MARGIN, "10px 5px 10px 5px").unwrap().css_text(), "10px 5px");
        assert_eq!(
            EdgeQuad::parse(&MARGIN, "10px 5px 3px 5px").unwrap().css_text(),
            "10px 5px 3px"
        );
        assert_eq!(
            EdgeQuad::parse(&MARGIN, "1px 2px 3px 4px").unwrap().css_text(),
            "1px 2px 3px 4px"
        );
    }

    #[test]
    fn test_collapse_needs_matching_units() {
        let margin = EdgeQuad::parse(&MARGIN, "10px 10em 10px 10em").unwrap();
        assert_eq!(margin.css_text(), "10px 10em");
        let margin = EdgeQuad::parse(&MARGIN, "10px 10%").unwrap();
        assert_eq!(margin.css_text(), "10px 10%");
    }

    #[test]
    fn test_per_edge_setters() {
        let mut margin = EdgeQuad::parse(&MARGIN, "1px").unwrap();
        margin.set_top(35.0, LengthUnit::Px).unwrap();
        margin.set_right(25.0, LengthUnit::Px).unwrap();
        margin.set_bottom(45.0, LengthUnit::Px).unwrap();
        margin.set_left(25.0, LengthUnit::Px).unwrap();
        assert_eq!(margin.css_text(), "35.0px 25.0px 45.0px");

        margin.set_bottom(35.0, LengthUnit::Px).unwrap();
        assert_eq!(margin.css_text(), "35.0px 25.0px");
    }

    #[test]
    fn test_set_edges() {
        let mut margin = EdgeQuad::new(&MARGIN);
        margin
            .set_edges(
                (35.0, LengthUnit::Px),
                (25.0, LengthUnit::Px),
                (45.0, LengthUnit::Px),
                (25.0, LengthUnit::Px),
            )
            .unwrap();
        assert_eq!(margin.css_text(), "35.0px 25.0px 45.0px");
    }

    #[test]
    fn test_per_edge_setter_requires_edge_state() {
        let mut margin = EdgeQuad::new(&MARGIN);
        let err = margin.set_top(5.0, LengthUnit::Px).unwrap_err();
        assert!(matches!(err, CssError::InvalidGrammar { property: "margin", .. }));
        assert_eq!(margin.css_text(), "initial");
    }

    #[test]
    fn test_set_percent() {
        let mut margin = EdgeQuad::new(&MARGIN);
        margin.set_percent(50.0).unwrap();
        assert_eq!(margin.css_text(), "50.0%");
    }

    #[test]
    fn test_keywords() {
        let margin = EdgeQuad::parse(&MARGIN, "auto").unwrap();
        assert_eq!(margin.keyword(), Some("auto"));
        assert!(margin.top().is_none());

        assert!(EdgeQuad::parse(&PADDING, "auto").is_err());
        assert!(EdgeQuad::parse(&PADDING, "inherit").is_ok());
    }

    #[test]
    fn test_rejects_keyword_tokens_in_multi() {
        assert!(EdgeQuad::parse(&MARGIN, "10px auto").is_err());
        assert!(EdgeQuad::parse(&MARGIN, "10px inherit").is_err());
    }

    #[test]
    fn test_rejects_bad_input_and_keeps_prior() {
        let mut margin = EdgeQuad::parse(&MARGIN, "25px").unwrap();
        assert!(margin.set_css_text("1px 2px 3px 4px 5px").is_err());
        assert!(margin.set_css_text("10uq").is_err());
        assert!(margin.set_css_text("10").is_err());
        assert!(margin.set_css_text("").is_err());
        assert_eq!(margin.css_text(), "25px");
    }

    #[test]
    fn test_padding_rejects_negative() {
        assert!(EdgeQuad::parse(&MARGIN, "-5px").is_ok());
        assert!(EdgeQuad::parse(&PADDING, "-5px").is_err());
        let mut padding = EdgeQuad::parse(&PADDING, "5px").unwrap();
        assert!(padding.set_top(-1.0, LengthUnit::Px).is_err());
        assert!(padding.set_percent(-10.0).is_err());
    }

    #[test]
    fn test_round_trip() {
        for text in ["25px", "10px 5px", "10px 5px 3px", "1px 2px 3px 4px", "auto", "50.0%"] {
            let margin = EdgeQuad::parse(&MARGIN, text).unwrap();
            let again = EdgeQuad::parse(&MARGIN, &margin.css_text()).unwrap();
            assert_eq!(margin.css_text(), again.css_text());
        }
    }
}
