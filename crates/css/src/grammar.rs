//! Declarative value grammars
//!
//! Every property carries a `ValueGrammar` describing the single tokens it
//! accepts: a numeric pattern with a unit rule, an opaque color, or nothing
//! but keywords. Multi-component splitting lives here too, so `rgb(0, 1, 2)`
//! stays one component no matter what it contains.

use log::trace;
use smallvec::SmallVec;

use crate::color::CssColor;
use crate::error::{CssError, CssResult};
use crate::value::{LengthUnit, NumberForm, NumericValue};

/// Numeric pattern kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberPattern {
    /// Any float, sign allowed
    Float,
    /// Float greater than or equal to zero
    NonNegativeFloat,
    /// Float in [0, 1]
    UnitInterval,
    /// Integer greater than or equal to zero; decimal spellings rejected
    NonNegativeInteger,
}

impl NumberPattern {
    pub fn accepts(&self, value: f32, form: NumberForm) -> bool {
        match self {
            NumberPattern::Float => true,
            NumberPattern::NonNegativeFloat => value >= 0.0,
            NumberPattern::UnitInterval => (0.0..=1.0).contains(&value),
            NumberPattern::NonNegativeInteger => value >= 0.0 && form == NumberForm::Integer,
        }
    }
}

/// Which unit a numeric token may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRule {
    /// Unit-less numbers only
    Forbidden,
    /// Any length unit, percentage excluded
    Length,
    /// Any length unit or percentage
    LengthOrPercent,
}

impl UnitRule {
    pub fn accepts(&self, unit: Option<LengthUnit>) -> bool {
        match (self, unit) {
            (UnitRule::Forbidden, None) => true,
            (UnitRule::Forbidden, Some(_)) => false,
            (_, None) => false,
            (UnitRule::Length, Some(unit)) => unit != LengthUnit::Percent,
            (UnitRule::LengthOrPercent, Some(_)) => true,
        }
    }
}

/// Non-keyword token form a grammar accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRule {
    /// Keywords only
    None,
    /// A number constrained by pattern and unit rule
    Number(NumberPattern, UnitRule),
    /// An opaque color token
    Color,
}

/// A token matched against a grammar
#[derive(Debug, Clone, PartialEq)]
pub enum TokenMatch {
    Keyword(&'static str),
    Numeric(NumericValue),
    Color(CssColor),
}

/// Declarative grammar for one property component
#[derive(Debug, Clone, Copy)]
pub struct ValueGrammar {
    /// Declared property name, used in error reports
    pub property: &'static str,
    /// Accepted non-keyword token form
    pub token: TokenRule,
    /// Closed keyword vocabulary in canonical spelling
    pub keywords: &'static [&'static str],
    /// Plain-language description of the accepted forms
    pub expected: &'static str,
}

impl ValueGrammar {
    /// Canonical vocabulary spelling for a token, if it is a keyword
    pub fn keyword_of(&self, token: &str) -> Option<&'static str> {
        let token = token.trim();
        self.keywords
            .iter()
            .find(|k| token.eq_ignore_ascii_case(k))
            .copied()
    }

    /// Match one component token against this grammar
    pub fn match_token(&self, token: &str) -> Option<TokenMatch> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        if let Some(keyword) = self.keyword_of(token) {
            return Some(TokenMatch::Keyword(keyword));
        }
        match self.token {
            TokenRule::None => None,
            TokenRule::Number(pattern, units) => {
                let value = NumericValue::parse(token)?;
                let number = value.number();
                if pattern.accepts(number.value(), number.form()) && units.accepts(value.unit()) {
                    Some(TokenMatch::Numeric(value))
                } else {
                    None
                }
            }
            TokenRule::Color => CssColor::parse(token).map(TokenMatch::Color),
        }
    }

    /// Non-throwing validity pre-check; agrees with `validate` on every input
    pub fn is_valid(&self, token: &str) -> bool {
        self.match_token(token).is_some()
    }

    /// Same decision as `is_valid`, with error context on rejection
    pub fn validate(&self, token: &str) -> CssResult<()> {
        if self.is_valid(token) {
            Ok(())
        } else {
            trace!("rejected '{}' for {}", token, self.property);
            Err(CssError::invalid_grammar(self.property, token, self.expected))
        }
    }
}

const EXPECTED_SEPARATED: &str = "whitespace between components";
const EXPECTED_BALANCED: &str = "balanced parentheses and quotes";
const EXPECTED_NO_EMPTY: &str = "no empty list entries";

/// Split a value into whitespace-separated components
///
/// Function bodies such as `rgb(0, 1, 2)` and `url(a b.png)` count as one
/// component. A function that runs into the next component without
/// whitespace is rejected rather than guessed at.
pub fn split_components(property: &'static str, text: &str) -> CssResult<SmallVec<[String; 4]>> {
    let mut parts: SmallVec<[String; 4]> = SmallVec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut needs_gap = false;

    for c in text.trim().chars() {
        if let Some(q) = quote {
            current.push(c);
            if c == q {
                quote = None;
            }
            continue;
        }
        if needs_gap && !c.is_whitespace() {
            return Err(CssError::invalid_grammar(property, text, EXPECTED_SEPARATED));
        }
        match c {
            '\'' | '"' => {
                quote = Some(c);
                current.push(c);
            }
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                if depth == 0 {
                    return Err(CssError::invalid_grammar(property, text, EXPECTED_BALANCED));
                }
                depth -= 1;
                current.push(c);
                if depth == 0 {
                    needs_gap = true;
                }
            }
            c if c.is_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
                needs_gap = false;
            }
            c => current.push(c),
        }
    }

    if depth != 0 || quote.is_some() {
        return Err(CssError::invalid_grammar(property, text, EXPECTED_BALANCED));
    }
    if !current.is_empty() {
        parts.push(current);
    }
    Ok(parts)
}

/// Split a comma-separated list into trimmed entries
///
/// Commas inside quotes or function bodies do not separate entries; an
/// empty entry is an error, and blank input yields no entries.
pub fn split_list(property: &'static str, text: &str) -> CssResult<SmallVec<[String; 4]>> {
    let text = text.trim();
    let mut entries: SmallVec<[String; 4]> = SmallVec::new();
    if text.is_empty() {
        return Ok(entries);
    }

    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for c in text.chars() {
        if let Some(q) = quote {
            current.push(c);
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => {
                quote = Some(c);
                current.push(c);
            }
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                if depth == 0 {
                    return Err(CssError::invalid_grammar(property, text, EXPECTED_BALANCED));
                }
                depth -= 1;
                current.push(c);
            }
            ',' if depth == 0 => {
                let entry = current.trim().to_string();
                if entry.is_empty() {
                    return Err(CssError::invalid_grammar(property, text, EXPECTED_NO_EMPTY));
                }
                entries.push(entry);
                current.clear();
            }
            c => current.push(c),
        }
    }

    if depth != 0 || quote.is_some() {
        return Err(CssError::invalid_grammar(property, text, EXPECTED_BALANCED));
    }
    let entry = current.trim().to_string();
    if entry.is_empty() {
        return Err(CssError::invalid_grammar(property, text, EXPECTED_NO_EMPTY));
    }
    entries.push(entry);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: ValueGrammar = ValueGrammar {
        property: "test-width",
        token: TokenRule::Number(NumberPattern::NonNegativeFloat, UnitRule::Length),
        keywords: &["medium", "thin", "thick"],
        expected: "a length or one of medium/thin/thick",
    };

    const COUNT: ValueGrammar = ValueGrammar {
        property: "test-count",
        token: TokenRule::Number(NumberPattern::NonNegativeInteger, UnitRule::Forbidden),
        keywords: &["auto"],
        expected: "a whole number or auto",
    };

    #[test]
    fn test_number_patterns() {
        assert!(NumberPattern::Float.accepts(-2.5, NumberForm::Decimal));
        assert!(!NumberPattern::NonNegativeFloat.accepts(-0.1, NumberForm::Decimal));
        assert!(NumberPattern::UnitInterval.accepts(1.0, NumberForm::Integer));
        assert!(!NumberPattern::UnitInterval.accepts(1.5, NumberForm::Decimal));
        assert!(NumberPattern::NonNegativeInteger.accepts(3.0, NumberForm::Integer));
        assert!(!NumberPattern::NonNegativeInteger.accepts(3.0, NumberForm::Decimal));
    }

    #[test]
    fn test_unit_rules() {
        assert!(UnitRule::Forbidden.accepts(None));
        assert!(!UnitRule::Forbidden.accepts(Some(LengthUnit::Px)));
        assert!(UnitRule::Length.accepts(Some(LengthUnit::Em)));
        assert!(!UnitRule::Length.accepts(Some(LengthUnit::Percent)));
        assert!(!UnitRule::Length.accepts(None));
        assert!(UnitRule::LengthOrPercent.accepts(Some(LengthUnit::Percent)));
    }

    #[test]
    fn test_keyword_canonical_spelling() {
        assert_eq!(WIDTH.keyword_of("Medium"), Some("medium"));
        assert_eq!(WIDTH.keyword_of(" THIN "), Some("thin"));
        assert_eq!(WIDTH.keyword_of("med"), None);
    }

    #[test]
    fn test_match_token() {
        assert!(matches!(WIDTH.match_token("2px"), Some(TokenMatch::Numeric(_))));
        assert!(matches!(WIDTH.match_token("thick"), Some(TokenMatch::Keyword("thick"))));
        assert!(WIDTH.match_token("50%").is_none());
        assert!(WIDTH.match_token("-1px").is_none());
        assert!(WIDTH.match_token("2").is_none());
    }

    #[test]
    fn test_integer_kind_rejects_decimals() {
        assert!(COUNT.is_valid("3"));
        assert!(COUNT.is_valid("auto"));
        assert!(!COUNT.is_valid("3.0"));
        assert!(!COUNT.is_valid("-3"));
        assert!(!COUNT.is_valid("3px"));
    }

    #[test]
    fn test_validate_agrees_with_is_valid() {
        for token in ["2px", "thick", "50%", "-1px", "", "3pc"] {
            assert_eq!(WIDTH.is_valid(token), WIDTH.validate(token).is_ok());
        }
        let err = WIDTH.validate("50%").unwrap_err();
        assert!(matches!(err, CssError::InvalidGrammar { property: "test-width", .. }));
    }

    #[test]
    fn test_split_components_plain() {
        let parts = split_components("margin", "10px  5px\t3px").unwrap();
        assert_eq!(parts.as_slice(), ["10px", "5px", "3px"]);
    }

    #[test]
    fn test_split_components_keeps_functions_whole() {
        let parts = split_components("border", "thin solid rgb(11, 234, 44)").unwrap();
        assert_eq!(parts.as_slice(), ["thin", "solid", "rgb(11, 234, 44)"]);
    }

    #[test]
    fn test_split_components_requires_gap_after_function() {
        assert!(split_components("border", "rgb(1, 2, 3)solid").is_err());
        assert!(split_components("border", "rgb(1, 2, 3) solid").is_ok());
    }

    #[test]
    fn test_split_components_rejects_unbalanced() {
        assert!(split_components("border", "rgb(1, 2").is_err());
        assert!(split_components("border", "url(\"a.png)").is_err());
        assert!(split_components("border", "1) solid").is_err());
    }

    #[test]
    fn test_split_components_blank() {
        assert!(split_components("margin", "   ").unwrap().is_empty());
    }

    #[test]
    fn test_split_list() {
        let entries = split_list("cursor", "url(a.png) 2 3, url(\"b,c.png\"), pointer").unwrap();
        assert_eq!(
            entries.as_slice(),
            ["url(a.png) 2 3", "url(\"b,c.png\")", "pointer"]
        );
    }

    #[test]
    fn test_split_list_rejects_empty_entries() {
        assert!(split_list("cursor", "pointer,").is_err());
        assert!(split_list("cursor", "a,,b").is_err());
        assert!(split_list("cursor", ",a").is_err());
    }
}
