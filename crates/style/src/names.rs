//! Property name constants
//!
//! The declared spelling of every registered property, for callers that
//! address properties by name.

pub const MARGIN: &str = "margin";
pub const PADDING: &str = "padding";
pub const MARGIN_TOP: &str = "margin-top";
pub const MARGIN_RIGHT: &str = "margin-right";
pub const MARGIN_BOTTOM: &str = "margin-bottom";
pub const MARGIN_LEFT: &str = "margin-left";
pub const PADDING_TOP: &str = "padding-top";
pub const PADDING_RIGHT: &str = "padding-right";
pub const PADDING_BOTTOM: &str = "padding-bottom";
pub const PADDING_LEFT: &str = "padding-left";

pub const BORDER: &str = "border";
pub const BORDER_TOP: &str = "border-top";
pub const BORDER_RIGHT: &str = "border-right";
pub const BORDER_BOTTOM: &str = "border-bottom";
pub const BORDER_LEFT: &str = "border-left";
pub const OUTLINE: &str = "outline";
pub const COLUMN_RULE: &str = "column-rule";
pub const WEBKIT_COLUMN_RULE: &str = "-webkit-column-rule";
pub const MOZ_COLUMN_RULE: &str = "-moz-column-rule";
pub const BORDER_WIDTH: &str = "border-width";
pub const BORDER_STYLE: &str = "border-style";
pub const BORDER_COLOR: &str = "border-color";
pub const OUTLINE_WIDTH: &str = "outline-width";
pub const OUTLINE_STYLE: &str = "outline-style";
pub const OUTLINE_COLOR: &str = "outline-color";
pub const COLUMN_RULE_WIDTH: &str = "column-rule-width";
pub const COLUMN_RULE_STYLE: &str = "column-rule-style";
pub const COLUMN_RULE_COLOR: &str = "column-rule-color";

pub const FLEX: &str = "flex";
pub const WEBKIT_FLEX: &str = "-webkit-flex";
pub const MOZ_FLEX: &str = "-moz-flex";
pub const MS_FLEX: &str = "-ms-flex";
pub const FLEX_GROW: &str = "flex-grow";
pub const FLEX_SHRINK: &str = "flex-shrink";
pub const FLEX_BASIS: &str = "flex-basis";

pub const COLUMNS: &str = "columns";
pub const COLUMN_WIDTH: &str = "column-width";
pub const COLUMN_COUNT: &str = "column-count";

pub const BACKGROUND_IMAGE: &str = "background-image";
pub const CURSOR: &str = "cursor";
pub const OPACITY: &str = "opacity";
