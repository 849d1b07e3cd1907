//! Rule-line shorthands
//!
//! `border`, its four per-side forms, `outline` and `column-rule` all share
//! one shape: a width, a line style and a color, written in any order. A
//! shorthand either holds all three sub-values or reports `inherit`; it
//! never serializes a partial rule.

use std::fmt;

use sepal_css::{
    split_components, CssError, CssResult, NumberPattern, TokenRule, UnitRule, ValueGrammar,
};

use crate::keyword;
use crate::shorthand::{attach_incoming, claim_all, displace, match_components};
use crate::single::{SingleDef, SingleValue};
use crate::CssProperty;

/// Line style vocabulary shared by every rule slot
pub const LINE_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

pub static BORDER_WIDTH: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "border-width",
        token: TokenRule::Number(NumberPattern::NonNegativeFloat, UnitRule::Length),
        keywords: &[keyword::MEDIUM, keyword::THIN, keyword::THICK],
        expected: "a non-negative length or medium/thin/thick",
    },
    initial: "medium",
};

pub static BORDER_STYLE: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "border-style",
        token: TokenRule::None,
        keywords: LINE_STYLES,
        expected: "a line style keyword",
    },
    initial: "none",
};

pub static BORDER_COLOR: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "border-color",
        token: TokenRule::Color,
        keywords: &[],
        expected: "a color name, hex code or color function",
    },
    initial: "#000000",
};

pub static OUTLINE_WIDTH: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "outline-width",
        token: TokenRule::Number(NumberPattern::NonNegativeFloat, UnitRule::Length),
        keywords: &[keyword::MEDIUM, keyword::THIN, keyword::THICK],
        expected: "a non-negative length or medium/thin/thick",
    },
    initial: "medium",
};

pub static OUTLINE_STYLE: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "outline-style",
        token: TokenRule::None,
        keywords: LINE_STYLES,
        expected: "a line style keyword",
    },
    initial: "none",
};

pub static OUTLINE_COLOR: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "outline-color",
        token: TokenRule::Color,
        keywords: &["invert"],
        expected: "a color or invert",
    },
    initial: "black",
};

pub static COLUMN_RULE_WIDTH: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "column-rule-width",
        token: TokenRule::Number(NumberPattern::NonNegativeFloat, UnitRule::Length),
        keywords: &[keyword::MEDIUM, keyword::THIN, keyword::THICK],
        expected: "a non-negative length or medium/thin/thick",
    },
    initial: "medium",
};

pub static COLUMN_RULE_STYLE: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "column-rule-style",
        token: TokenRule::None,
        keywords: LINE_STYLES,
        expected: "a line style keyword",
    },
    initial: "none",
};

pub static COLUMN_RULE_COLOR: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "column-rule-color",
        token: TokenRule::Color,
        keywords: &[],
        expected: "a color name, hex code or color function",
    },
    initial: "white",
};

/// Static descriptor for a width/style/color shorthand
#[derive(Debug)]
pub struct RuleDef {
    pub name: &'static str,
    pub width: &'static SingleDef,
    pub style: &'static SingleDef,
    pub color: &'static SingleDef,
    pub initial: &'static str,
    pub expected: &'static str,
}

const RULE_EXPECTED: &str = "width, style and color components, or a global keyword";

pub static BORDER: RuleDef = RuleDef {
    name: "border",
    width: &BORDER_WIDTH,
    style: &BORDER_STYLE,
    color: &BORDER_COLOR,
    initial: "medium none #000000",
    expected: RULE_EXPECTED,
};

pub static BORDER_TOP: RuleDef = RuleDef {
    name: "border-top",
    width: &BORDER_WIDTH,
    style: &BORDER_STYLE,
    color: &BORDER_COLOR,
    initial: "medium none #000000",
    expected: RULE_EXPECTED,
};

pub static BORDER_RIGHT: RuleDef = RuleDef {
    name: "border-right",
    width: &BORDER_WIDTH,
    style: &BORDER_STYLE,
    color: &BORDER_COLOR,
    initial: "medium none #000000",
    expected: RULE_EXPECTED,
};

pub static BORDER_BOTTOM: RuleDef = RuleDef {
    name: "border-bottom",
    width: &BORDER_WIDTH,
    style: &BORDER_STYLE,
    color: &BORDER_COLOR,
    initial: "medium none #000000",
    expected: RULE_EXPECTED,
};

pub static BORDER_LEFT: RuleDef = RuleDef {
    name: "border-left",
    width: &BORDER_WIDTH,
    style: &BORDER_STYLE,
    color: &BORDER_COLOR,
    initial: "medium none #000000",
    expected: RULE_EXPECTED,
};

pub static OUTLINE: RuleDef = RuleDef {
    name: "outline",
    width: &OUTLINE_WIDTH,
    style: &OUTLINE_STYLE,
    color: &OUTLINE_COLOR,
    initial: "medium none black",
    expected: RULE_EXPECTED,
};

pub static COLUMN_RULE: RuleDef = RuleDef {
    name: "column-rule",
    width: &COLUMN_RULE_WIDTH,
    style: &COLUMN_RULE_STYLE,
    color: &COLUMN_RULE_COLOR,
    initial: "medium none white",
    expected: RULE_EXPECTED,
};

pub static WEBKIT_COLUMN_RULE: RuleDef = RuleDef {
    name: "-webkit-column-rule",
    width: &COLUMN_RULE_WIDTH,
    style: &COLUMN_RULE_STYLE,
    color: &COLUMN_RULE_COLOR,
    initial: "medium none white",
    expected: RULE_EXPECTED,
};

pub static MOZ_COLUMN_RULE: RuleDef = RuleDef {
    name: "-moz-column-rule",
    width: &COLUMN_RULE_WIDTH,
    style: &COLUMN_RULE_STYLE,
    color: &COLUMN_RULE_COLOR,
    initial: "medium none white",
    expected: RULE_EXPECTED,
};

/// Names one of the three rule slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSlot {
    Width,
    Style,
    Color,
}

#[derive(Debug, Clone)]
enum RuleState {
    Keyword(&'static str),
    Slots {
        width: Option<SingleValue>,
        style: Option<SingleValue>,
        color: Option<SingleValue>,
    },
}

/// A width/style/color composite value
#[derive(Debug, Clone)]
pub struct RuleShorthand {
    def: &'static RuleDef,
    state: RuleState,
}

impl RuleShorthand {
    /// Fresh value holding the property's default rule
    pub fn new(def: &'static RuleDef) -> Self {
        let mut value = Self { def, state: RuleState::Keyword(keyword::INITIAL) };
        if let Ok(state) = value.parse_state(def.initial) {
            value.state = state;
        }
        value
    }

    /// Parse all three components or a global keyword
    pub fn parse(def: &'static RuleDef, text: &str) -> CssResult<Self> {
        let mut value = Self { def, state: RuleState::Keyword(keyword::INITIAL) };
        value.set_css_text(text)?;
        Ok(value)
    }

    /// Build from already-constructed sub-values, taking ownership of each
    pub fn from_values(
        def: &'static RuleDef,
        width: SingleValue,
        style: SingleValue,
        color: SingleValue,
    ) -> CssResult<Self> {
        let width = attach_incoming(width, def.width)?;
        let style = attach_incoming(style, def.style)?;
        let color = attach_incoming(color, def.color)?;
        Ok(Self {
            def,
            state: RuleState::Slots {
                width: Some(width),
                style: Some(style),
                color: Some(color),
            },
        })
    }

    pub fn is_valid(def: &'static RuleDef, text: &str) -> bool {
        Self::parse(def, text).is_ok()
    }

    pub fn set_css_text(&mut self, text: &str) -> CssResult<()> {
        self.state = self.parse_state(text)?;
        Ok(())
    }

    fn parse_state(&self, text: &str) -> CssResult<RuleState> {
        let parts = split_components(self.def.name, text)?;

        if parts.len() == 1 {
            if let Some(k) = keyword::global_of(&parts[0]) {
                return Ok(RuleState::Keyword(k));
            }
        }

        let defs: [&'static SingleDef; 3] = [self.def.width, self.def.style, self.def.color];
        let mut slots = match_components(self.def.name, self.def.expected, &parts, &defs)?;
        if slots.iter().any(Option::is_none) {
            return Err(CssError::invalid_grammar(self.def.name, text, self.def.expected));
        }
        claim_all(&mut slots);

        let mut taken = slots.into_iter();
        Ok(RuleState::Slots {
            width: taken.next().flatten(),
            style: taken.next().flatten(),
            color: taken.next().flatten(),
        })
    }

    pub fn set_keyword(&mut self, token: &str) -> CssResult<()> {
        match keyword::global_of(token) {
            Some(k) => {
                self.state = RuleState::Keyword(k);
                Ok(())
            }
            None => Err(CssError::invalid_grammar(self.def.name, token, self.def.expected)),
        }
    }

    pub fn width(&self) -> Option<&SingleValue> {
        match &self.state {
            RuleState::Slots { width, .. } => width.as_ref(),
            RuleState::Keyword(_) => None,
        }
    }

    pub fn style(&self) -> Option<&SingleValue> {
        match &self.state {
            RuleState::Slots { style, .. } => style.as_ref(),
            RuleState::Keyword(_) => None,
        }
    }

    pub fn color(&self) -> Option<&SingleValue> {
        match &self.state {
            RuleState::Slots { color, .. } => color.as_ref(),
            RuleState::Keyword(_) => None,
        }
    }

    /// Replace or clear the width slot, returning any displaced sub-value
    pub fn set_width(&mut self, value: Option<SingleValue>) -> CssResult<Option<SingleValue>> {
        self.set_slot(RuleSlot::Width, value)
    }

    /// Replace or clear the style slot, returning any displaced sub-value
    pub fn set_style(&mut self, value: Option<SingleValue>) -> CssResult<Option<SingleValue>> {
        self.set_slot(RuleSlot::Style, value)
    }

    /// Replace or clear the color slot, returning any displaced sub-value
    pub fn set_color(&mut self, value: Option<SingleValue>) -> CssResult<Option<SingleValue>> {
        self.set_slot(RuleSlot::Color, value)
    }

    fn set_slot(
        &mut self,
        slot: RuleSlot,
        value: Option<SingleValue>,
    ) -> CssResult<Option<SingleValue>> {
        let incoming = match value {
            Some(v) => attach_incoming(v, self.slot_def(slot))?,
            None => return Ok(self.detach(slot)),
        };

        let (mut width, mut style, mut color) = self.take_slots();
        let target = match slot {
            RuleSlot::Width => &mut width,
            RuleSlot::Style => &mut style,
            RuleSlot::Color => &mut color,
        };
        let displaced = displace(target, self.def.name);
        *target = Some(incoming);
        self.state = RuleState::Slots { width, style, color };
        Ok(displaced)
    }

    /// Take one sub-value out and discard the rest
    ///
    /// The composite drops to the `inherit` state; the returned instance is
    /// detached and free to join another shorthand.
    pub fn detach(&mut self, slot: RuleSlot) -> Option<SingleValue> {
        let (width, style, color) = self.take_slots();
        self.state = RuleState::Keyword(keyword::INHERIT);
        let taken = match slot {
            RuleSlot::Width => width,
            RuleSlot::Style => style,
            RuleSlot::Color => color,
        };
        taken.map(|mut v| {
            v.set_attached(false);
            v
        })
    }

    fn take_slots(
        &mut self,
    ) -> (Option<SingleValue>, Option<SingleValue>, Option<SingleValue>) {
        let state = std::mem::replace(&mut self.state, RuleState::Keyword(keyword::INHERIT));
        match state {
            RuleState::Slots { width, style, color } => (width, style, color),
            RuleState::Keyword(_) => (None, None, None),
        }
    }

    fn slot_def(&self, slot: RuleSlot) -> &'static SingleDef {
        match slot {
            RuleSlot::Width => self.def.width,
            RuleSlot::Style => self.def.style,
            RuleSlot::Color => self.def.color,
        }
    }

    /// Value text, or `inherit` while any slot is missing
    pub fn css_text(&self) -> String {
        match &self.state {
            RuleState::Keyword(k) => (*k).to_string(),
            RuleState::Slots { width: Some(w), style: Some(s), color: Some(c) } => {
                format!("{} {} {}", w.css_text(), s.css_text(), c.css_text())
            }
            RuleState::Slots { .. } => keyword::INHERIT.to_string(),
        }
    }
}

impl CssProperty for RuleShorthand {
    fn name(&self) -> &'static str {
        self.def.name
    }

    fn css_text(&self) -> String {
        RuleShorthand::css_text(self)
    }

    fn set_css_text(&mut self, text: &str) -> CssResult<()> {
        RuleShorthand::set_css_text(self, text)
    }
}

impl fmt::Display for RuleShorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.def.name, self.css_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_defaults() {
        assert_eq!(RuleShorthand::new(&BORDER).css_text(), "medium none #000000");
        assert_eq!(RuleShorthand::new(&OUTLINE).css_text(), "medium none black");
        assert_eq!(RuleShorthand::new(&COLUMN_RULE).css_text(), "medium none white");
        assert_eq!(RuleShorthand::new(&WEBKIT_COLUMN_RULE).css_text(), "medium none white");
    }

    #[test]
    fn test_parse_any_order_canonical_output() {
        let border = RuleShorthand::parse(&BORDER, "solid 2px red").unwrap();
        assert_eq!(border.css_text(), "2px solid red");
        assert_eq!(border.width().unwrap().css_text(), "2px");
        assert_eq!(border.style().unwrap().css_text(), "solid");
        assert_eq!(border.color().unwrap().css_text(), "red");
    }

    #[test]
    fn test_parse_canonicalizes_case() {
        let border = RuleShorthand::parse(&BORDER, "MEDIUM None RED").unwrap();
        assert_eq!(border.css_text(), "medium none red");
    }

    #[test]
    fn test_requires_all_three_components() {
        assert!(RuleShorthand::parse(&BORDER, "solid").is_err());
        assert!(RuleShorthand::parse(&BORDER, "2px solid").is_err());
        assert!(RuleShorthand::parse(&BORDER, "").is_err());
        assert!(RuleShorthand::parse(&BORDER, "2px solid red extra").is_err());
    }

    #[test]
    fn test_global_keywords() {
        let border = RuleShorthand::parse(&BORDER, "inherit").unwrap();
        assert_eq!(border.css_text(), "inherit");
        assert!(border.width().is_none());

        let border = RuleShorthand::parse(&BORDER, " Initial ").unwrap();
        assert_eq!(border.css_text(), "initial");
    }

    #[test]
    fn test_outline_accepts_invert() {
        let outline = RuleShorthand::parse(&OUTLINE, "thin solid invert").unwrap();
        assert_eq!(outline.css_text(), "thin solid invert");
    }

    #[test]
    fn test_set_slot_displaces_old_value() {
        let mut border = RuleShorthand::parse(&BORDER, "thin dotted red").unwrap();
        let wide = SingleValue::parse(&BORDER_WIDTH, "5px").unwrap();

        let old = border.set_width(Some(wide)).unwrap().unwrap();
        assert_eq!(old.css_text(), "thin");
        assert!(!old.is_attached());
        assert_eq!(border.css_text(), "5px dotted red");
    }

    #[test]
    fn test_clear_slot_falls_back_to_inherit() {
        let mut border = RuleShorthand::parse(&BORDER, "thin dotted red").unwrap();
        let style = border.set_style(None).unwrap().unwrap();
        assert_eq!(style.css_text(), "dotted");
        assert!(!style.is_attached());

        assert_eq!(border.css_text(), "inherit");
        assert!(border.width().is_none());
        assert!(border.style().is_none());
        assert!(border.color().is_none());
    }

    #[test]
    fn test_attached_value_rejected_elsewhere() {
        let mut border = RuleShorthand::parse(&BORDER, "medium none red").unwrap();
        border.set_width(Some(SingleValue::parse(&BORDER_WIDTH, "2px").unwrap())).unwrap();

        let in_use = border.width().unwrap().clone();
        assert!(in_use.is_attached());

        let mut top = RuleShorthand::new(&BORDER_TOP);
        let err = top.set_width(Some(in_use)).unwrap_err();
        assert!(matches!(err, CssError::OwnershipConflict { slot: "border-width" }));
        assert_eq!(top.css_text(), "medium none #000000");
    }

    #[test]
    fn test_detach_enables_reuse() {
        let mut border = RuleShorthand::parse(&BORDER, "2px solid red").unwrap();
        let width = border.detach(RuleSlot::Width).unwrap();
        assert!(!width.is_attached());
        assert_eq!(border.css_text(), "inherit");

        let mut left = RuleShorthand::parse(&BORDER_LEFT, "thin dotted blue").unwrap();
        left.set_width(Some(width)).unwrap();
        assert_eq!(left.css_text(), "2px dotted blue");
    }

    #[test]
    fn test_wrong_descriptor_rejected() {
        let mut border = RuleShorthand::new(&BORDER);
        let style = SingleValue::parse(&BORDER_STYLE, "solid").unwrap();
        let err = border.set_width(Some(style)).unwrap_err();
        assert!(matches!(err, CssError::InvalidGrammar { property: "border-width", .. }));
        assert_eq!(border.css_text(), "medium none #000000");
    }

    #[test]
    fn test_build_up_from_keyword_state() {
        let mut rule = RuleShorthand::parse(&COLUMN_RULE, "inherit").unwrap();
        rule.set_width(Some(SingleValue::parse(&COLUMN_RULE_WIDTH, "1px").unwrap())).unwrap();
        assert_eq!(rule.css_text(), "inherit");

        rule.set_style(Some(SingleValue::parse(&COLUMN_RULE_STYLE, "solid").unwrap())).unwrap();
        rule.set_color(Some(SingleValue::parse(&COLUMN_RULE_COLOR, "teal").unwrap())).unwrap();
        assert_eq!(rule.css_text(), "1px solid teal");
    }

    #[test]
    fn test_from_values() {
        let border = RuleShorthand::from_values(
            &BORDER,
            SingleValue::parse(&BORDER_WIDTH, "thick").unwrap(),
            SingleValue::parse(&BORDER_STYLE, "double").unwrap(),
            SingleValue::parse(&BORDER_COLOR, "#aabbcc").unwrap(),
        )
        .unwrap();
        assert_eq!(border.css_text(), "thick double #aabbcc");
        assert!(border.width().unwrap().is_attached());
    }

    #[test]
    fn test_invalid_input_keeps_prior_state() {
        let mut border = RuleShorthand::parse(&BORDER, "2px solid red").unwrap();
        assert!(border.set_css_text("2px solid notacolor").is_err());
        assert!(border.set_css_text("-1px solid red").is_err());
        assert_eq!(border.css_text(), "2px solid red");
    }
}
