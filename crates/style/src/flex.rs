//! The flex shorthand
//!
//! `flex` and its vendor-prefixed forms hold grow, shrink and basis. Unlike
//! the rule shorthands, a flex value may be written with one, two or three
//! components; whatever is missing is filled in at parse time (grow 1,
//! shrink 1, basis 0%).

use std::fmt;

use sepal_css::{
    split_components, CssError, CssResult, NumberPattern, TokenRule, UnitRule, ValueGrammar,
};

use crate::keyword;
use crate::shorthand::{attach_incoming, claim_all, displace, match_components};
use crate::single::{SingleDef, SingleValue};
use crate::CssProperty;

pub static FLEX_GROW: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "flex-grow",
        token: TokenRule::Number(NumberPattern::NonNegativeFloat, UnitRule::Forbidden),
        keywords: &[],
        expected: "a non-negative number",
    },
    initial: "0",
};

pub static FLEX_SHRINK: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "flex-shrink",
        token: TokenRule::Number(NumberPattern::NonNegativeFloat, UnitRule::Forbidden),
        keywords: &[],
        expected: "a non-negative number",
    },
    initial: "1",
};

pub static FLEX_BASIS: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "flex-basis",
        token: TokenRule::Number(NumberPattern::NonNegativeFloat, UnitRule::LengthOrPercent),
        keywords: &[keyword::AUTO],
        expected: "a non-negative length, a percentage or auto",
    },
    initial: "auto",
};

/// Static descriptor for a flex shorthand
#[derive(Debug)]
pub struct FlexDef {
    pub name: &'static str,
    pub grow: &'static SingleDef,
    pub shrink: &'static SingleDef,
    pub basis: &'static SingleDef,
    pub initial: &'static str,
    pub expected: &'static str,
}

const FLEX_EXPECTED: &str = "up to three of grow, shrink and basis, or a global keyword";
const FLEX_INITIAL: &str = "0 1 auto";

const DEFAULT_GROW: &str = "1";
const DEFAULT_SHRINK: &str = "1";
const DEFAULT_BASIS: &str = "0%";

pub static FLEX: FlexDef = FlexDef {
    name: "flex",
    grow: &FLEX_GROW,
    shrink: &FLEX_SHRINK,
    basis: &FLEX_BASIS,
    initial: FLEX_INITIAL,
    expected: FLEX_EXPECTED,
};

pub static WEBKIT_FLEX: FlexDef = FlexDef {
    name: "-webkit-flex",
    grow: &FLEX_GROW,
    shrink: &FLEX_SHRINK,
    basis: &FLEX_BASIS,
    initial: FLEX_INITIAL,
    expected: FLEX_EXPECTED,
};

pub static MOZ_FLEX: FlexDef = FlexDef {
    name: "-moz-flex",
    grow: &FLEX_GROW,
    shrink: &FLEX_SHRINK,
    basis: &FLEX_BASIS,
    initial: FLEX_INITIAL,
    expected: FLEX_EXPECTED,
};

pub static MS_FLEX: FlexDef = FlexDef {
    name: "-ms-flex",
    grow: &FLEX_GROW,
    shrink: &FLEX_SHRINK,
    basis: &FLEX_BASIS,
    initial: FLEX_INITIAL,
    expected: FLEX_EXPECTED,
};

/// Names one of the three flex slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexSlot {
    Grow,
    Shrink,
    Basis,
}

#[derive(Debug, Clone)]
enum FlexState {
    Keyword(&'static str),
    Slots {
        grow: Option<SingleValue>,
        shrink: Option<SingleValue>,
        basis: Option<SingleValue>,
    },
}

/// A grow/shrink/basis composite value
#[derive(Debug, Clone)]
pub struct FlexShorthand {
    def: &'static FlexDef,
    state: FlexState,
}

impl FlexShorthand {
    /// Fresh value holding `0 1 auto`
    pub fn new(def: &'static FlexDef) -> Self {
        let mut value = Self { def, state: FlexState::Keyword(keyword::INITIAL) };
        if let Ok(state) = value.parse_state(def.initial) {
            value.state = state;
        }
        value
    }

    pub fn parse(def: &'static FlexDef, text: &str) -> CssResult<Self> {
        let mut value = Self { def, state: FlexState::Keyword(keyword::INITIAL) };
        value.set_css_text(text)?;
        Ok(value)
    }

    /// Build from already-constructed sub-values, taking ownership of each
    pub fn from_values(
        def: &'static FlexDef,
        grow: SingleValue,
        shrink: SingleValue,
        basis: SingleValue,
    ) -> CssResult<Self> {
        let grow = attach_incoming(grow, def.grow)?;
        let shrink = attach_incoming(shrink, def.shrink)?;
        let basis = attach_incoming(basis, def.basis)?;
        Ok(Self {
            def,
            state: FlexState::Slots {
                grow: Some(grow),
                shrink: Some(shrink),
                basis: Some(basis),
            },
        })
    }

    pub fn is_valid(def: &'static FlexDef, text: &str) -> bool {
        Self::parse(def, text).is_ok()
    }

    pub fn set_css_text(&mut self, text: &str) -> CssResult<()> {
        self.state = self.parse_state(text)?;
        Ok(())
    }

    fn parse_state(&self, text: &str) -> CssResult<FlexState> {
        let parts = split_components(self.def.name, text)?;

        if parts.len() == 1 {
            if let Some(k) = keyword::global_of(&parts[0]) {
                return Ok(FlexState::Keyword(k));
            }
        }
        if parts.is_empty() {
            return Err(CssError::invalid_grammar(self.def.name, text, self.def.expected));
        }

        let defs: [&'static SingleDef; 3] = [self.def.grow, self.def.shrink, self.def.basis];
        let mut slots = match_components(self.def.name, self.def.expected, &parts, &defs)?;

        if slots[0].is_none() {
            slots[0] = SingleValue::from_component(self.def.grow, DEFAULT_GROW);
        }
        if slots[1].is_none() {
            slots[1] = SingleValue::from_component(self.def.shrink, DEFAULT_SHRINK);
        }
        if slots[2].is_none() {
            slots[2] = SingleValue::from_component(self.def.basis, DEFAULT_BASIS);
        }
        if slots.iter().any(Option::is_none) {
            return Err(CssError::invalid_grammar(self.def.name, text, self.def.expected));
        }
        claim_all(&mut slots);

        let mut taken = slots.into_iter();
        Ok(FlexState::Slots {
            grow: taken.next().flatten(),
            shrink: taken.next().flatten(),
            basis: taken.next().flatten(),
        })
    }

    pub fn set_keyword(&mut self, token: &str) -> CssResult<()> {
        match keyword::global_of(token) {
            Some(k) => {
                self.state = FlexState::Keyword(k);
                Ok(())
            }
            None => Err(CssError::invalid_grammar(self.def.name, token, self.def.expected)),
        }
    }

    pub fn grow(&self) -> Option<&SingleValue> {
        match &self.state {
            FlexState::Slots { grow, .. } => grow.as_ref(),
            FlexState::Keyword(_) => None,
        }
    }

    pub fn shrink(&self) -> Option<&SingleValue> {
        match &self.state {
            FlexState::Slots { shrink, .. } => shrink.as_ref(),
            FlexState::Keyword(_) => None,
        }
    }

    pub fn basis(&self) -> Option<&SingleValue> {
        match &self.state {
            FlexState::Slots { basis, .. } => basis.as_ref(),
            FlexState::Keyword(_) => None,
        }
    }

    /// Replace or clear the grow slot, returning any displaced sub-value
    pub fn set_grow(&mut self, value: Option<SingleValue>) -> CssResult<Option<SingleValue>> {
        self.set_slot(FlexSlot::Grow, value)
    }

    /// Replace or clear the shrink slot, returning any displaced sub-value
    pub fn set_shrink(&mut self, value: Option<SingleValue>) -> CssResult<Option<SingleValue>> {
        self.set_slot(FlexSlot::Shrink, value)
    }

    /// Replace or clear the basis slot, returning any displaced sub-value
    pub fn set_basis(&mut self, value: Option<SingleValue>) -> CssResult<Option<SingleValue>> {
        self.set_slot(FlexSlot::Basis, value)
    }

    fn set_slot(
        &mut self,
        slot: FlexSlot,
        value: Option<SingleValue>,
    ) -> CssResult<Option<SingleValue>> {
        let incoming = match value {
            Some(v) => attach_incoming(v, self.slot_def(slot))?,
            None => return Ok(self.detach(slot)),
        };

        let (mut grow, mut shrink, mut basis) = self.take_slots();
        let target = match slot {
            FlexSlot::Grow => &mut grow,
            FlexSlot::Shrink => &mut shrink,
            FlexSlot::Basis => &mut basis,
        };
        let displaced = displace(target, self.def.name);
        *target = Some(incoming);
        self.state = FlexState::Slots { grow, shrink, basis };
        Ok(displaced)
    }

    /// Take one sub-value out and discard the rest
    ///
    /// The composite drops to the `inherit` state; the returned instance is
    /// detached and free to join another shorthand.
    pub fn detach(&mut self, slot: FlexSlot) -> Option<SingleValue> {
        let (grow, shrink, basis) = self.take_slots();
        self.state = FlexState::Keyword(keyword::INHERIT);
        let taken = match slot {
            FlexSlot::Grow => grow,
            FlexSlot::Shrink => shrink,
            FlexSlot::Basis => basis,
        };
        taken.map(|mut v| {
            v.set_attached(false);
            v
        })
    }

    fn take_slots(
        &mut self,
    ) -> (Option<SingleValue>, Option<SingleValue>, Option<SingleValue>) {
        let state = std::mem::replace(&mut self.state, FlexState::Keyword(keyword::INHERIT));
        match state {
            FlexState::Slots { grow, shrink, basis } => (grow, shrink, basis),
            FlexState::Keyword(_) => (None, None, None),
        }
    }

    fn slot_def(&self, slot: FlexSlot) -> &'static SingleDef {
        match slot {
            FlexSlot::Grow => self.def.grow,
            FlexSlot::Shrink => self.def.shrink,
            FlexSlot::Basis => self.def.basis,
        }
    }

    /// Value text, or `inherit` while any slot is missing
    pub fn css_text(&self) -> String {
        match &self.state {
            FlexState::Keyword(k) => (*k).to_string(),
            FlexState::Slots { grow: Some(g), shrink: Some(s), basis: Some(b) } => {
                format!("{} {} {}", g.css_text(), s.css_text(), b.css_text())
            }
            FlexState::Slots { .. } => keyword::INHERIT.to_string(),
        }
    }
}

impl CssProperty for FlexShorthand {
    fn name(&self) -> &'static str {
        self.def.name
    }

    fn css_text(&self) -> String {
        FlexShorthand::css_text(self)
    }

    fn set_css_text(&mut self, text: &str) -> CssResult<()> {
        FlexShorthand::set_css_text(self, text)
    }
}

impl fmt::Display for FlexShorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.def.name, self.css_text())
    }
}
