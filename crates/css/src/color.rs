//! Opaque color tokens
//!
//! Colors stay textual here: a `CssColor` is a validated spelling, not a
//! numeric model. Names and hex forms are canonicalized to lowercase;
//! function bodies keep whatever the author wrote.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashSet;
use serde::Serialize;

/// CSS named colors, plus `transparent` and `currentcolor`
const NAMED_COLORS: &[&str] = &[
    "black", "white", "red", "green", "blue", "yellow", "cyan", "aqua",
    "magenta", "fuchsia", "gray", "grey", "silver", "gainsboro", "darkgray",
    "darkgrey", "lightgray", "lightgrey", "dimgray", "dimgrey", "maroon",
    "darkred", "firebrick", "crimson", "indianred", "lightcoral", "salmon",
    "darksalmon", "lightsalmon", "tomato", "orangered", "coral", "orange",
    "darkorange", "gold", "goldenrod", "darkgoldenrod", "palegoldenrod",
    "lightgoldenrodyellow", "lightyellow", "lemonchiffon", "khaki",
    "darkkhaki", "lime", "limegreen", "lightgreen", "palegreen",
    "darkgreen", "forestgreen", "seagreen", "lightseagreen", "olive",
    "olivedrab", "darkolivegreen", "mediumseagreen", "springgreen",
    "mediumspringgreen", "darkseagreen", "mediumaquamarine", "yellowgreen",
    "lawngreen", "chartreuse", "greenyellow", "navy", "midnightblue",
    "darkblue", "mediumblue", "royalblue", "steelblue", "dodgerblue",
    "deepskyblue", "cornflowerblue", "skyblue", "lightskyblue",
    "lightblue", "powderblue", "lightsteelblue", "cadetblue", "slateblue",
    "darkslateblue", "mediumslateblue", "teal", "darkcyan", "lightcyan",
    "aquamarine", "turquoise", "mediumturquoise", "darkturquoise",
    "paleturquoise", "purple", "rebeccapurple", "darkmagenta",
    "darkviolet", "darkorchid", "mediumorchid", "orchid", "violet",
    "plum", "thistle", "lavender", "indigo", "mediumpurple", "blueviolet",
    "pink", "lightpink", "hotpink", "deeppink", "mediumvioletred",
    "palevioletred", "brown", "saddlebrown", "sienna", "chocolate",
    "peru", "sandybrown", "burlywood", "tan", "rosybrown", "snow",
    "honeydew", "mintcream", "azure", "aliceblue", "ghostwhite",
    "whitesmoke", "seashell", "beige", "oldlace", "floralwhite", "ivory",
    "antiquewhite", "linen", "lavenderblush", "mistyrose", "papayawhip",
    "blanchedalmond", "bisque", "moccasin", "navajowhite", "peachpuff",
    "wheat", "cornsilk", "slategray", "slategrey", "lightslategray",
    "lightslategrey", "darkslategray", "darkslategrey", "transparent",
    "currentcolor",
];

static NAMED: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| NAMED_COLORS.iter().copied().collect());

/// A validated color spelling
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssColor {
    text: String,
}

impl CssColor {
    /// Parse a color token: a name, `#hex`, or `rgb()/rgba()/hsl()/hsla()`
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Some(hex) = text.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if text.ends_with(')') {
            return Self::parse_function(text);
        }

        let lower = text.to_ascii_lowercase();
        if NAMED.contains(lower.as_str()) {
            Some(Self { text: lower })
        } else {
            None
        }
    }

    pub fn is_valid(text: &str) -> bool {
        Self::parse(text).is_some()
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !matches!(hex.len(), 3 | 4 | 6 | 8) {
            return None;
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self { text: format!("#{}", hex.to_ascii_lowercase()) })
    }

    fn parse_function(text: &str) -> Option<Self> {
        let open = text.find('(')?;
        let name = text[..open].trim().to_ascii_lowercase();
        let args_expected = match name.as_str() {
            "rgb" | "hsl" => 3,
            "rgba" | "hsla" => 4,
            _ => return None,
        };

        let body = text[open + 1..text.len() - 1].trim();
        let args: Vec<&str> = body.split(',').map(str::trim).collect();
        if args.len() != args_expected || args.iter().any(|a| a.is_empty()) {
            return None;
        }
        Some(Self { text: format!("{}({})", name, body) })
    }

    /// Canonical spelling
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
