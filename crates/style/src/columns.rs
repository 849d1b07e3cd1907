//! The columns shorthand
//!
//! `columns` pairs a column width with a column count. Both slots must be
//! determined by a parsed value; the components may arrive in either order
//! since a count never carries a unit and a width always does.

use std::fmt;

use sepal_css::{
    split_components, CssError, CssResult, NumberPattern, TokenRule, UnitRule, ValueGrammar,
};

use crate::keyword;
use crate::shorthand::{attach_incoming, claim_all, displace, match_components};
use crate::single::{SingleDef, SingleValue};
use crate::CssProperty;

pub static COLUMN_WIDTH: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "column-width",
        token: TokenRule::Number(NumberPattern::NonNegativeFloat, UnitRule::Length),
        keywords: &[keyword::AUTO],
        expected: "a non-negative length or auto",
    },
    initial: "auto",
};

pub static COLUMN_COUNT: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "column-count",
        token: TokenRule::Number(NumberPattern::NonNegativeInteger, UnitRule::Forbidden),
        keywords: &[keyword::AUTO],
        expected: "a whole number or auto",
    },
    initial: "auto",
};

/// Static descriptor for a columns shorthand
#[derive(Debug)]
pub struct ColumnsDef {
    pub name: &'static str,
    pub width: &'static SingleDef,
    pub count: &'static SingleDef,
    pub initial: &'static str,
    pub expected: &'static str,
}

pub static COLUMNS: ColumnsDef = ColumnsDef {
    name: "columns",
    width: &COLUMN_WIDTH,
    count: &COLUMN_COUNT,
    initial: "auto auto",
    expected: "a column width and a column count, or a global keyword",
};

/// Names one of the two columns slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnsSlot {
    Width,
    Count,
}

#[derive(Debug, Clone)]
enum ColumnsState {
    Keyword(&'static str),
    Slots {
        width: Option<SingleValue>,
        count: Option<SingleValue>,
    },
}

/// A column width/count composite value
#[derive(Debug, Clone)]
pub struct ColumnsShorthand {
    def: &'static ColumnsDef,
    state: ColumnsState,
}

impl ColumnsShorthand {
    /// Fresh value holding `auto auto`
    pub fn new(def: &'static ColumnsDef) -> Self {
        let mut value = Self { def, state: ColumnsState::Keyword(keyword::INITIAL) };
        if let Ok(state) = value.parse_state(def.initial) {
            value.state = state;
        }
        value
    }

    pub fn parse(def: &'static ColumnsDef, text: &str) -> CssResult<Self> {
        let mut value = Self { def, state: ColumnsState::Keyword(keyword::INITIAL) };
        value.set_css_text(text)?;
        Ok(value)
    }

    /// Build from already-constructed sub-values, taking ownership of each
    pub fn from_values(
        def: &'static ColumnsDef,
        width: SingleValue,
        count: SingleValue,
    ) -> CssResult<Self> {
        let width = attach_incoming(width, def.width)?;
        let count = attach_incoming(count, def.count)?;
        Ok(Self {
            def,
            state: ColumnsState::Slots { width: Some(width), count: Some(count) },
        })
    }

    pub fn is_valid(def: &'static ColumnsDef, text: &str) -> bool {
        Self::parse(def, text).is_ok()
    }

    pub fn set_css_text(&mut self, text: &str) -> CssResult<()> {
        self.state = self.parse_state(text)?;
        Ok(())
    }

    fn parse_state(&self, text: &str) -> CssResult<ColumnsState> {
        let parts = split_components(self.def.name, text)?;

        if parts.len() == 1 {
            if let Some(k) = keyword::global_of(&parts[0]) {
                return Ok(ColumnsState::Keyword(k));
            }
        }

        let defs: [&'static SingleDef; 2] = [self.def.width, self.def.count];
        let mut slots = match_components(self.def.name, self.def.expected, &parts, &defs)?;
        if slots.iter().any(Option::is_none) {
            return Err(CssError::invalid_grammar(self.def.name, text, self.def.expected));
        }
        claim_all(&mut slots);

        let mut taken = slots.into_iter();
        Ok(ColumnsState::Slots {
            width: taken.next().flatten(),
            count: taken.next().flatten(),
        })
    }

    pub fn set_keyword(&mut self, token: &str) -> CssResult<()> {
        match keyword::global_of(token) {
            Some(k) => {
                self.state = ColumnsState::Keyword(k);
                Ok(())
            }
            None => Err(CssError::invalid_grammar(self.def.name, token, self.def.expected)),
        }
    }

    pub fn width(&self) -> Option<&SingleValue> {
        match &self.state {
            ColumnsState::Slots { width, .. } => width.as_ref(),
            ColumnsState::Keyword(_) => None,
        }
    }

    pub fn count(&self) -> Option<&SingleValue> {
        match &self.state {
            ColumnsState::Slots { count, .. } => count.as_ref(),
            ColumnsState::Keyword(_) => None,
        }
    }

    /// Replace or clear the width slot, returning any displaced sub-value
    pub fn set_width(&mut self, value: Option<SingleValue>) -> CssResult<Option<SingleValue>> {
        self.set_slot(ColumnsSlot::Width, value)
    }

    /// Replace or clear the count slot, returning any displaced sub-value
    pub fn set_count(&mut self, value: Option<SingleValue>) -> CssResult<Option<SingleValue>> {
        self.set_slot(ColumnsSlot::Count, value)
    }

    fn set_slot(
        &mut self,
        slot: ColumnsSlot,
        value: Option<SingleValue>,
    ) -> CssResult<Option<SingleValue>> {
        let incoming = match value {
            Some(v) => attach_incoming(v, self.slot_def(slot))?,
            None => return Ok(self.detach(slot)),
        };

        let (mut width, mut count) = self.take_slots();
        let target = match slot {
            ColumnsSlot::Width => &mut width,
            ColumnsSlot::Count => &mut count,
        };
        let displaced = displace(target, self.def.name);
        *target = Some(incoming);
        self.state = ColumnsState::Slots { width, count };
        Ok(displaced)
    }

    /// Take one sub-value out and discard the other
    ///
    /// The composite drops to the `inherit` state; the returned instance is
    /// detached and free to join another shorthand.
    pub fn detach(&mut self, slot: ColumnsSlot) -> Option<SingleValue> {
        let (width, count) = self.take_slots();
        self.state = ColumnsState::Keyword(keyword::INHERIT);
        let taken = match slot {
            ColumnsSlot::Width => width,
            ColumnsSlot::Count => count,
        };
        taken.map(|mut v| {
            v.set_attached(false);
            v
        })
    }

    fn take_slots(&mut self) -> (Option<SingleValue>, Option<SingleValue>) {
        let state = std::mem::replace(&mut self.state, ColumnsState::Keyword(keyword::INHERIT));
        match state {
            ColumnsState::Slots { width, count } => (width, count),
            ColumnsState::Keyword(_) => (None, None),
        }
    }

    fn slot_def(&self, slot: ColumnsSlot) -> &'static SingleDef {
        match slot {
            ColumnsSlot::Width => self.def.width,
            ColumnsSlot::Count => self.def.count,
        }
    }

    /// Value text, or `inherit` while either slot is missing
    pub fn css_text(&self) -> String {
        match &self.state {
            ColumnsState::Keyword(k) => (*k).to_string(),
            ColumnsState::Slots { width: Some(w), count: Some(c) } => {
                format!("{} {}", w.css_text(), c.css_text())
            }
            ColumnsState::Slots { .. } => keyword::INHERIT.to_string(),
        }
    }
}

impl CssProperty for ColumnsShorthand {
    fn name(&self) -> &'static str {
        self.def.name
    }

    fn css_text(&self) -> String {
        ColumnsShorthand::css_text(self)
    }

    fn set_css_text(&mut self, text: &str) -> CssResult<()> {
        ColumnsShorthand::set_css_text(self, text)
    }
}

impl fmt::Display for ColumnsShorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.def.name, self.css_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_is_auto_auto() {
        let columns = ColumnsShorthand::new(&COLUMNS);
        assert_eq!(columns.css_text(), "auto auto");
        assert_eq!(columns.width().unwrap().css_text(), "auto");
    }

    #[test]
    fn test_parse_any_order() {
        let columns = ColumnsShorthand::parse(&COLUMNS, "10em 2").unwrap();
        assert_eq!(columns.css_text(), "10em 2");

        let columns = ColumnsShorthand::parse(&COLUMNS, "2 10em").unwrap();
        assert_eq!(columns.css_text(), "10em 2");
        assert_eq!(columns.count().unwrap().css_text(), "2");
    }

    #[test]
    fn test_requires_both_components() {
        assert!(ColumnsShorthand::parse(&COLUMNS, "2").is_err());
        assert!(ColumnsShorthand::parse(&COLUMNS, "10em").is_err());
        assert!(ColumnsShorthand::parse(&COLUMNS, "").is_err());
    }

    #[test]
    fn test_count_must_be_whole() {
        assert!(ColumnsShorthand::parse(&COLUMNS, "10em 2.5").is_err());
        assert!(ColumnsShorthand::parse(&COLUMNS, "10em -2").is_err());
    }

    #[test]
    fn test_auto_fills_either_slot() {
        let columns = ColumnsShorthand::parse(&COLUMNS, "auto 3").unwrap();
        assert_eq!(columns.css_text(), "auto 3");

        let columns = ColumnsShorthand::parse(&COLUMNS, "auto auto").unwrap();
        assert_eq!(columns.css_text(), "auto auto");
    }

    #[test]
    fn test_global_keywords() {
        let columns = ColumnsShorthand::parse(&COLUMNS, "inherit").unwrap();
        assert_eq!(columns.css_text(), "inherit");
        assert!(columns.width().is_none());
    }

    #[test]
    fn test_set_count_displaces() {
        let mut columns = ColumnsShorthand::parse(&COLUMNS, "10em 2").unwrap();
        let more = SingleValue::from_i32(&COLUMN_COUNT, 4).unwrap();

        let old = columns.set_count(Some(more)).unwrap().unwrap();
        assert_eq!(old.css_text(), "2");
        assert!(!old.is_attached());
        assert_eq!(columns.css_text(), "10em 4");
    }

    #[test]
    fn test_clear_slot_falls_back_to_inherit() {
        let mut columns = ColumnsShorthand::parse(&COLUMNS, "10em 2").unwrap();
        let width = columns.set_width(None).unwrap().unwrap();
        assert_eq!(width.css_text(), "10em");
        assert_eq!(columns.css_text(), "inherit");
        assert!(columns.count().is_none());
    }

    #[test]
    fn test_ownership_conflict() {
        let columns = ColumnsShorthand::parse(&COLUMNS, "10em 2").unwrap();
        let in_use = columns.count().unwrap().clone();

        let mut other = ColumnsShorthand::new(&COLUMNS);
        let err = other.set_count(Some(in_use)).unwrap_err();
        assert!(matches!(err, CssError::OwnershipConflict { slot: "column-count" }));
        assert_eq!(other.css_text(), "auto auto");
    }

    #[test]
    fn test_invalid_input_keeps_prior_state() {
        let mut columns = ColumnsShorthand::parse(&COLUMNS, "10em 2").unwrap();
        assert!(columns.set_css_text("10em two").is_err());
        assert_eq!(columns.css_text(), "10em 2");
    }
}
