//! Property registry
//!
//! Maps property names to their value engines. Every registered name can be
//! parsed into a typed `StyleValue` or materialized with its default, and
//! the resulting value serializes back through one shared trait.

use std::fmt;
use std::sync::LazyLock;

use log::trace;
use rustc_hash::FxHashSet;

use sepal_css::{CssResult, NumberPattern, TokenRule, UnitRule, ValueGrammar};

use crate::columns::{self, ColumnsShorthand};
use crate::cursor::Cursor;
use crate::edges::{self, EdgeQuad};
use crate::flex::{self, FlexShorthand};
use crate::image::BackgroundImage;
use crate::keyword;
use crate::names;
use crate::rule::{self, RuleShorthand};
use crate::single::{SingleDef, SingleValue};
use crate::CssProperty;

pub static MARGIN_TOP: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "margin-top",
        token: TokenRule::Number(NumberPattern::Float, UnitRule::LengthOrPercent),
        keywords: &[keyword::AUTO],
        expected: "a length, a percentage or auto",
    },
    initial: "0px",
};

pub static MARGIN_RIGHT: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "margin-right",
        token: TokenRule::Number(NumberPattern::Float, UnitRule::LengthOrPercent),
        keywords: &[keyword::AUTO],
        expected: "a length, a percentage or auto",
    },
    initial: "0px",
};

pub static MARGIN_BOTTOM: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "margin-bottom",
        token: TokenRule::Number(NumberPattern::Float, UnitRule::LengthOrPercent),
        keywords: &[keyword::AUTO],
        expected: "a length, a percentage or auto",
    },
    initial: "0px",
};

pub static MARGIN_LEFT: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "margin-left",
        token: TokenRule::Number(NumberPattern::Float, UnitRule::LengthOrPercent),
        keywords: &[keyword::AUTO],
        expected: "a length, a percentage or auto",
    },
    initial: "0px",
};

pub static PADDING_TOP: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "padding-top",
        token: TokenRule::Number(NumberPattern::NonNegativeFloat, UnitRule::LengthOrPercent),
        keywords: &[],
        expected: "a non-negative length or percentage",
    },
    initial: "0px",
};

pub static PADDING_RIGHT: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "padding-right",
        token: TokenRule::Number(NumberPattern::NonNegativeFloat, UnitRule::LengthOrPercent),
        keywords: &[],
        expected: "a non-negative length or percentage",
    },
    initial: "0px",
};

pub static PADDING_BOTTOM: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "padding-bottom",
        token: TokenRule::Number(NumberPattern::NonNegativeFloat, UnitRule::LengthOrPercent),
        keywords: &[],
        expected: "a non-negative length or percentage",
    },
    initial: "0px",
};

pub static PADDING_LEFT: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "padding-left",
        token: TokenRule::Number(NumberPattern::NonNegativeFloat, UnitRule::LengthOrPercent),
        keywords: &[],
        expected: "a non-negative length or percentage",
    },
    initial: "0px",
};

pub static OPACITY: SingleDef = SingleDef {
    grammar: ValueGrammar {
        property: "opacity",
        token: TokenRule::Number(NumberPattern::UnitInterval, UnitRule::Forbidden),
        keywords: &[],
        expected: "a number between 0 and 1",
    },
    initial: "1.0",
};

/// Every property name the registry recognizes
pub const PROPERTY_NAMES: &[&str] = &[
    // box edges
    names::MARGIN,
    names::PADDING,
    names::MARGIN_TOP,
    names::MARGIN_RIGHT,
    names::MARGIN_BOTTOM,
    names::MARGIN_LEFT,
    names::PADDING_TOP,
    names::PADDING_RIGHT,
    names::PADDING_BOTTOM,
    names::PADDING_LEFT,
    // rule shorthands and their slots
    names::BORDER,
    names::BORDER_TOP,
    names::BORDER_RIGHT,
    names::BORDER_BOTTOM,
    names::BORDER_LEFT,
    names::OUTLINE,
    names::COLUMN_RULE,
    names::WEBKIT_COLUMN_RULE,
    names::MOZ_COLUMN_RULE,
    names::BORDER_WIDTH,
    names::BORDER_STYLE,
    names::BORDER_COLOR,
    names::OUTLINE_WIDTH,
    names::OUTLINE_STYLE,
    names::OUTLINE_COLOR,
    names::COLUMN_RULE_WIDTH,
    names::COLUMN_RULE_STYLE,
    names::COLUMN_RULE_COLOR,
    // flex
    names::FLEX,
    names::WEBKIT_FLEX,
    names::MOZ_FLEX,
    names::MS_FLEX,
    names::FLEX_GROW,
    names::FLEX_SHRINK,
    names::FLEX_BASIS,
    // columns
    names::COLUMNS,
    names::COLUMN_WIDTH,
    names::COLUMN_COUNT,
    // lists and leftovers
    names::BACKGROUND_IMAGE,
    names::CURSOR,
    names::OPACITY,
];

static REGISTERED: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| PROPERTY_NAMES.iter().copied().collect());

/// Whether a name resolves to a registered property
pub fn is_registered(name: &str) -> bool {
    REGISTERED.contains(name.trim().to_ascii_lowercase().as_str())
}

/// Engine family behind a registered property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Single,
    Edges,
    Rule,
    Flex,
    Columns,
    Image,
    Cursor,
}

/// Engine family for a name; `None` when the name is unregistered
pub fn lookup(name: &str) -> Option<PropertyKind> {
    let name = name.trim().to_ascii_lowercase();
    let kind = match name.as_str() {
        names::MARGIN | names::PADDING => PropertyKind::Edges,
        names::BORDER | names::BORDER_TOP | names::BORDER_RIGHT | names::BORDER_BOTTOM
        | names::BORDER_LEFT | names::OUTLINE | names::COLUMN_RULE
        | names::WEBKIT_COLUMN_RULE | names::MOZ_COLUMN_RULE => PropertyKind::Rule,
        names::FLEX | names::WEBKIT_FLEX | names::MOZ_FLEX | names::MS_FLEX => PropertyKind::Flex,
        names::COLUMNS => PropertyKind::Columns,
        names::BACKGROUND_IMAGE => PropertyKind::Image,
        names::CURSOR => PropertyKind::Cursor,
        other if REGISTERED.contains(other) => PropertyKind::Single,
        _ => return None,
    };
    Some(kind)
}

/// A parsed value for any registered property
#[derive(Debug, Clone)]
pub enum StyleValue {
    Single(SingleValue),
    Edges(EdgeQuad),
    Rule(RuleShorthand),
    Flex(FlexShorthand),
    Columns(ColumnsShorthand),
    Image(BackgroundImage),
    Cursor(Cursor),
}

/// Parse a property value by name; `None` when the name is unregistered
pub fn parse_value(name: &str, text: &str) -> Option<CssResult<StyleValue>> {
    let name = name.trim().to_ascii_lowercase();
    let result = match name.as_str() {
        // box edges
        "margin" => EdgeQuad::parse(&edges::MARGIN, text).map(StyleValue::Edges),
        "padding" => EdgeQuad::parse(&edges::PADDING, text).map(StyleValue::Edges),
        "margin-top" => SingleValue::parse(&MARGIN_TOP, text).map(StyleValue::Single),
        "margin-right" => SingleValue::parse(&MARGIN_RIGHT, text).map(StyleValue::Single),
        "margin-bottom" => SingleValue::parse(&MARGIN_BOTTOM, text).map(StyleValue::Single),
        "margin-left" => SingleValue::parse(&MARGIN_LEFT, text).map(StyleValue::Single),
        "padding-top" => SingleValue::parse(&PADDING_TOP, text).map(StyleValue::Single),
        "padding-right" => SingleValue::parse(&PADDING_RIGHT, text).map(StyleValue::Single),
        "padding-bottom" => SingleValue::parse(&PADDING_BOTTOM, text).map(StyleValue::Single),
        "padding-left" => SingleValue::parse(&PADDING_LEFT, text).map(StyleValue::Single),

        // rule shorthands and their slots
        "border" => RuleShorthand::parse(&rule::BORDER, text).map(StyleValue::Rule),
        "border-top" => RuleShorthand::parse(&rule::BORDER_TOP, text).map(StyleValue::Rule),
        "border-right" => RuleShorthand::parse(&rule::BORDER_RIGHT, text).map(StyleValue::Rule),
        "border-bottom" => RuleShorthand::parse(&rule::BORDER_BOTTOM, text).map(StyleValue::Rule),
        "border-left" => RuleShorthand::parse(&rule::BORDER_LEFT, text).map(StyleValue::Rule),
        "outline" => RuleShorthand::parse(&rule::OUTLINE, text).map(StyleValue::Rule),
        "column-rule" => RuleShorthand::parse(&rule::COLUMN_RULE, text).map(StyleValue::Rule),
        "-webkit-column-rule" => {
            RuleShorthand::parse(&rule::WEBKIT_COLUMN_RULE, text).map(StyleValue::Rule)
        }
        "-moz-column-rule" => {
            RuleShorthand::parse(&rule::MOZ_COLUMN_RULE, text).map(StyleValue::Rule)
        }
        "border-width" => SingleValue::parse(&rule::BORDER_WIDTH, text).map(StyleValue::Single),
        "border-style" => SingleValue::parse(&rule::BORDER_STYLE, text).map(StyleValue::Single),
        "border-color" => SingleValue::parse(&rule::BORDER_COLOR, text).map(StyleValue::Single),
        "outline-width" => SingleValue::parse(&rule::OUTLINE_WIDTH, text).map(StyleValue::Single),
        "outline-style" => SingleValue::parse(&rule::OUTLINE_STYLE, text).map(StyleValue::Single),
        "outline-color" => SingleValue::parse(&rule::OUTLINE_COLOR, text).map(StyleValue::Single),
        "column-rule-width" => {
            SingleValue::parse(&rule::COLUMN_RULE_WIDTH, text).map(StyleValue::Single)
        }
        "column-rule-style" => {
            SingleValue::parse(&rule::COLUMN_RULE_STYLE, text).map(StyleValue::Single)
        }
        "column-rule-color" => {
            SingleValue::parse(&rule::COLUMN_RULE_COLOR, text).map(StyleValue::Single)
        }

        // flex
        "flex" => FlexShorthand::parse(&flex::FLEX, text).map(StyleValue::Flex),
        "-webkit-flex" => FlexShorthand::parse(&flex::WEBKIT_FLEX, text).map(StyleValue::Flex),
        "-moz-flex" => FlexShorthand::parse(&flex::MOZ_FLEX, text).map(StyleValue::Flex),
        "-ms-flex" => FlexShorthand::parse(&flex::MS_FLEX, text).map(StyleValue::Flex),
        "flex-grow" => SingleValue::parse(&flex::FLEX_GROW, text).map(StyleValue::Single),
        "flex-shrink" => SingleValue::parse(&flex::FLEX_SHRINK, text).map(StyleValue::Single),
        "flex-basis" => SingleValue::parse(&flex::FLEX_BASIS, text).map(StyleValue::Single),

        // columns
        "columns" => ColumnsShorthand::parse(&columns::COLUMNS, text).map(StyleValue::Columns),
        "column-width" => SingleValue::parse(&columns::COLUMN_WIDTH, text).map(StyleValue::Single),
        "column-count" => SingleValue::parse(&columns::COLUMN_COUNT, text).map(StyleValue::Single),

        // lists and leftovers
        "background-image" => BackgroundImage::parse(text).map(StyleValue::Image),
        "cursor" => Cursor::parse(text).map(StyleValue::Cursor),
        "opacity" => SingleValue::parse(&OPACITY, text).map(StyleValue::Single),

        _ => {
            trace!("unregistered property '{}'", name);
            return None;
        }
    };
    Some(result)
}

/// Default value for a registered property; `None` when unregistered
pub fn initial_value(name: &str) -> Option<StyleValue> {
    let name = name.trim().to_ascii_lowercase();
    let value = match name.as_str() {
        "margin" => StyleValue::Edges(EdgeQuad::new(&edges::MARGIN)),
        "padding" => StyleValue::Edges(EdgeQuad::new(&edges::PADDING)),
        "margin-top" => StyleValue::Single(SingleValue::new(&MARGIN_TOP)),
        "margin-right" => StyleValue::Single(SingleValue::new(&MARGIN_RIGHT)),
        "margin-bottom" => StyleValue::Single(SingleValue::new(&MARGIN_BOTTOM)),
        "margin-left" => StyleValue::Single(SingleValue::new(&MARGIN_LEFT)),
        "padding-top" => StyleValue::Single(SingleValue::new(&PADDING_TOP)),
        "padding-right" => StyleValue::Single(SingleValue::new(&PADDING_RIGHT)),
        "padding-bottom" => StyleValue::Single(SingleValue::new(&PADDING_BOTTOM)),
        "padding-left" => StyleValue::Single(SingleValue::new(&PADDING_LEFT)),

        "border" => StyleValue::Rule(RuleShorthand::new(&rule::BORDER)),
        "border-top" => StyleValue::Rule(RuleShorthand::new(&rule::BORDER_TOP)),
        "border-right" => StyleValue::Rule(RuleShorthand::new(&rule::BORDER_RIGHT)),
        "border-bottom" => StyleValue::Rule(RuleShorthand::new(&rule::BORDER_BOTTOM)),
        "border-left" => StyleValue::Rule(RuleShorthand::new(&rule::BORDER_LEFT)),
        "outline" => StyleValue::Rule(RuleShorthand::new(&rule::OUTLINE)),
        "column-rule" => StyleValue::Rule(RuleShorthand::new(&rule::COLUMN_RULE)),
        "-webkit-column-rule" => StyleValue::Rule(RuleShorthand::new(&rule::WEBKIT_COLUMN_RULE)),
        "-moz-column-rule" => StyleValue::Rule(RuleShorthand::new(&rule::MOZ_COLUMN_RULE)),
        "border-width" => StyleValue::Single(SingleValue::new(&rule::BORDER_WIDTH)),
        "border-style" => StyleValue::Single(SingleValue::new(&rule::BORDER_STYLE)),
        "border-color" => StyleValue::Single(SingleValue::new(&rule::BORDER_COLOR)),
        "outline-width" => StyleValue::Single(SingleValue::new(&rule::OUTLINE_WIDTH)),
        "outline-style" => StyleValue::Single(SingleValue::new(&rule::OUTLINE_STYLE)),
        "outline-color" => StyleValue::Single(SingleValue::new(&rule::OUTLINE_COLOR)),
        "column-rule-width" => StyleValue::Single(SingleValue::new(&rule::COLUMN_RULE_WIDTH)),
        "column-rule-style" => StyleValue::Single(SingleValue::new(&rule::COLUMN_RULE_STYLE)),
        "column-rule-color" => StyleValue::Single(SingleValue::new(&rule::COLUMN_RULE_COLOR)),

        "flex" => StyleValue::Flex(FlexShorthand::new(&flex::FLEX)),
        "-webkit-flex" => StyleValue::Flex(FlexShorthand::new(&flex::WEBKIT_FLEX)),
        "-moz-flex" => StyleValue::Flex(FlexShorthand::new(&flex::MOZ_FLEX)),
        "-ms-flex" => StyleValue::Flex(FlexShorthand::new(&flex::MS_FLEX)),
        "flex-grow" => StyleValue::Single(SingleValue::new(&flex::FLEX_GROW)),
        "flex-shrink" => StyleValue::Single(SingleValue::new(&flex::FLEX_SHRINK)),
        "flex-basis" => StyleValue::Single(SingleValue::new(&flex::FLEX_BASIS)),

        "columns" => StyleValue::Columns(ColumnsShorthand::new(&columns::COLUMNS)),
        "column-width" => StyleValue::Single(SingleValue::new(&columns::COLUMN_WIDTH)),
        "column-count" => StyleValue::Single(SingleValue::new(&columns::COLUMN_COUNT)),

        "background-image" => StyleValue::Image(BackgroundImage::new()),
        "cursor" => StyleValue::Cursor(Cursor::new()),
        "opacity" => StyleValue::Single(SingleValue::new(&OPACITY)),

        _ => return None,
    };
    Some(value)
}

impl CssProperty for StyleValue {
    fn name(&self) -> &'static str {
        match self {
            StyleValue::Single(v) => v.name(),
            StyleValue::Edges(v) => v.name(),
            StyleValue::Rule(v) => v.name(),
            StyleValue::Flex(v) => v.name(),
            StyleValue::Columns(v) => v.name(),
            StyleValue::Image(v) => v.name(),
            StyleValue::Cursor(v) => v.name(),
        }
    }

    fn css_text(&self) -> String {
        match self {
            StyleValue::Single(v) => v.css_text(),
            StyleValue::Edges(v) => v.css_text(),
            StyleValue::Rule(v) => v.css_text(),
            StyleValue::Flex(v) => v.css_text(),
            StyleValue::Columns(v) => v.css_text(),
            StyleValue::Image(v) => v.css_text(),
            StyleValue::Cursor(v) => v.css_text(),
        }
    }

    fn set_css_text(&mut self, text: &str) -> CssResult<()> {
        match self {
            StyleValue::Single(v) => v.set_css_text(text),
            StyleValue::Edges(v) => v.set_css_text(text),
            StyleValue::Rule(v) => v.set_css_text(text),
            StyleValue::Flex(v) => v.set_css_text(text),
            StyleValue::Columns(v) => v.set_css_text(text),
            StyleValue::Image(v) => v.set_css_text(text),
            StyleValue::Cursor(v) => v.set_css_text(text),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.css_text())
    }
}
