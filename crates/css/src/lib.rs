//! Sepal CSS Value Grammar
//!
//! Numbers, units, colors, URL references, and the declarative grammars
//! properties use to validate their text. Everything here is about one
//! token at a time; the property layer composes these into full values.

pub mod color;
pub mod error;
pub mod grammar;
pub mod url;
pub mod value;

pub use color::CssColor;
pub use error::{CssError, CssResult};
pub use grammar::{
    split_components, split_list, NumberPattern, TokenMatch, TokenRule, UnitRule, ValueGrammar,
};
pub use url::UrlValue;
pub use value::{CssNumber, LengthUnit, NumberForm, NumericValue};
