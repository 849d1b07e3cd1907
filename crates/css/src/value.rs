//! CSS numeric values
//!
//! Numbers keep their written spelling (integer or decimal) alongside the
//! parsed magnitude, so `25px` can round-trip as `25px` while values built
//! from float arguments render as `35.0px`. Equality ignores spelling.

use std::fmt;

use serde::Serialize;

/// How a number was spelled in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberForm {
    /// No fractional part written (e.g. `25`)
    Integer,
    /// Fractional part or exponent written (e.g. `25.0`, `2.5e1`)
    Decimal,
}

/// A CSS number: magnitude plus spelling form
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CssNumber {
    value: f32,
    form: NumberForm,
}

impl CssNumber {
    pub fn new(value: f32, form: NumberForm) -> Self {
        Self { value, form }
    }

    /// Build from a float argument; renders with a fractional digit
    pub fn from_f32(value: f32) -> Self {
        Self { value, form: NumberForm::Decimal }
    }

    /// Build from an integer argument; renders without a fractional digit
    pub fn from_i32(value: i32) -> Self {
        Self { value: value as f32, form: NumberForm::Integer }
    }

    /// Parse a CSS number: optional sign, integer/decimal body, optional exponent
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let mut chars = text.chars().peekable();
        let mut decimal = false;
        let mut digits = false;

        if matches!(chars.peek(), Some('+') | Some('-')) {
            chars.next();
        }
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
            digits = true;
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            decimal = true;
            let mut fraction = false;
            while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
                chars.next();
                fraction = true;
            }
            if !fraction {
                return None;
            }
            digits = true;
        }
        if !digits {
            return None;
        }
        if matches!(chars.peek(), Some('e') | Some('E')) {
            chars.next();
            decimal = true;
            if matches!(chars.peek(), Some('+') | Some('-')) {
                chars.next();
            }
            let mut exponent = false;
            while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
                chars.next();
                exponent = true;
            }
            if !exponent {
                return None;
            }
        }
        if chars.next().is_some() {
            return None;
        }

        let value: f32 = text.parse().ok()?;
        let form = if decimal { NumberForm::Decimal } else { NumberForm::Integer };
        Some(Self { value, form })
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn form(&self) -> NumberForm {
        self.form
    }

    /// Copy of this number that renders in decimal spelling
    pub fn as_decimal(&self) -> Self {
        Self { value: self.value, form: NumberForm::Decimal }
    }

    /// True when the magnitude has no fractional part
    pub fn is_whole(&self) -> bool {
        self.value.fract() == 0.0
    }
}

// Spelling never takes part in comparison
impl PartialEq for CssNumber {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for CssNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.form {
            NumberForm::Integer => write!(f, "{}", self.value as i64),
            NumberForm::Decimal => {
                if self.is_whole() {
                    write!(f, "{:.1}", self.value)
                } else {
                    write!(f, "{}", self.value)
                }
            }
        }
    }
}

/// Length units (percentage included)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Pixels
    Px,
    /// Em units (relative to font-size)
    Em,
    /// x-height
    Ex,
    /// Character width
    Ch,
    /// Rem units (relative to root font-size)
    Rem,
    /// Viewport width percentage
    Vw,
    /// Viewport height percentage
    Vh,
    /// Viewport minimum
    Vmin,
    /// Viewport maximum
    Vmax,
    /// Centimeters
    Cm,
    /// Millimeters
    Mm,
    /// Inches
    In,
    /// Points (1/72 inch)
    Pt,
    /// Picas (12 points)
    Pc,
    /// Percentage of the containing value
    Percent,
}

impl LengthUnit {
    /// Parse a unit string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "px" => Some(LengthUnit::Px),
            "em" => Some(LengthUnit::Em),
            "ex" => Some(LengthUnit::Ex),
            "ch" => Some(LengthUnit::Ch),
            "rem" => Some(LengthUnit::Rem),
            "vw" => Some(LengthUnit::Vw),
            "vh" => Some(LengthUnit::Vh),
            "vmin" => Some(LengthUnit::Vmin),
            "vmax" => Some(LengthUnit::Vmax),
            "cm" => Some(LengthUnit::Cm),
            "mm" => Some(LengthUnit::Mm),
            "in" => Some(LengthUnit::In),
            "pt" => Some(LengthUnit::Pt),
            "pc" => Some(LengthUnit::Pc),
            "%" => Some(LengthUnit::Percent),
            _ => None,
        }
    }

    /// Canonical lowercase spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Em => "em",
            LengthUnit::Ex => "ex",
            LengthUnit::Ch => "ch",
            LengthUnit::Rem => "rem",
            LengthUnit::Vw => "vw",
            LengthUnit::Vh => "vh",
            LengthUnit::Vmin => "vmin",
            LengthUnit::Vmax => "vmax",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::In => "in",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
            LengthUnit::Percent => "%",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A magnitude with an optional unit tag
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericValue {
    number: CssNumber,
    unit: Option<LengthUnit>,
}

impl NumericValue {
    pub fn new(number: CssNumber, unit: Option<LengthUnit>) -> Self {
        Self { number, unit }
    }

    /// A unit-less number
    pub fn unitless(number: CssNumber) -> Self {
        Self { number, unit: None }
    }

    /// A length from a float argument, e.g. `35.0px`
    pub fn length(value: f32, unit: LengthUnit) -> Self {
        Self { number: CssNumber::from_f32(value), unit: Some(unit) }
    }

    /// A percentage from a float argument, e.g. `50.0%`
    pub fn percent(value: f32) -> Self {
        Self::length(value, LengthUnit::Percent)
    }

    /// Parse a number with an optional trailing unit
    ///
    /// Returns `None` for malformed numbers and for unrecognized unit
    /// suffixes; the caller decides whether a bare number is acceptable.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let suffix_start = text
            .rfind(|c: char| !c.is_ascii_alphabetic() && c != '%')
            .map(|i| i + text[i..].chars().next().map_or(1, char::len_utf8))
            .unwrap_or(0);
        let (body, suffix) = text.split_at(suffix_start);

        if suffix.is_empty() {
            return CssNumber::parse(text).map(Self::unitless);
        }
        // A gap between number and unit is two tokens, not a dimension
        if body.chars().any(char::is_whitespace) {
            return None;
        }
        let unit = LengthUnit::from_str(suffix)?;
        let number = CssNumber::parse(body)?;
        Some(Self { number, unit: Some(unit) })
    }

    pub fn number(&self) -> CssNumber {
        self.number
    }

    pub fn magnitude(&self) -> f32 {
        self.number.value()
    }

    pub fn unit(&self) -> Option<LengthUnit> {
        self.unit
    }

    /// Copy of this value that renders its number in decimal spelling
    pub fn as_decimal(&self) -> Self {
        Self { number: self.number.as_decimal(), unit: self.unit }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(unit) => write!(f, "{}{}", self.number, unit),
            None => write!(f, "{}", self.number),
        }
    }
}
