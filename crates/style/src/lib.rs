//! Sepal Style Values
//!
//! Typed property values: parsing, canonical serialization, and
//! shorthand/longhand coordination.

pub mod keyword;
pub mod names;
pub mod single;
mod shorthand;
pub mod edges;
pub mod rule;
pub mod flex;
pub mod columns;
pub mod image;
pub mod cursor;
pub mod registry;

use sepal_css::CssResult;

pub use columns::{ColumnsShorthand, ColumnsSlot};
pub use cursor::Cursor;
pub use edges::EdgeQuad;
pub use flex::{FlexShorthand, FlexSlot};
pub use image::BackgroundImage;
pub use registry::{
    initial_value, is_registered, lookup, parse_value, PropertyKind, StyleValue, PROPERTY_NAMES,
};
pub use rule::{RuleShorthand, RuleSlot};
pub use single::{SingleDef, SingleValue};

/// Shared surface of every property value
///
/// A value always holds something serializable; reading never fails, and a
/// failed write leaves the previous state in place.
pub trait CssProperty {
    /// Canonical property name
    fn name(&self) -> &'static str;

    /// Current value text in canonical minimal form
    fn css_text(&self) -> String;

    /// Replace the whole value from text, validating before any change
    fn set_css_text(&mut self, text: &str) -> CssResult<()>;
}
