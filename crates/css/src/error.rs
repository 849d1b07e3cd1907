//! CSS value error types

use thiserror::Error;

/// CSS value result type
pub type CssResult<T> = Result<T, CssError>;

/// Errors produced while parsing or mutating CSS property values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CssError {
    #[error("Invalid value '{value}' for property '{property}': expected {expected}")]
    InvalidGrammar {
        property: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("The '{slot}' value is already attached to another shorthand")]
    OwnershipConflict {
        slot: &'static str,
    },
}

impl CssError {
    /// Get the property or slot name this error refers to
    pub fn subject(&self) -> &'static str {
        match self {
            Self::InvalidGrammar { property, .. } => property,
            Self::OwnershipConflict { slot } => slot,
        }
    }

    pub fn invalid_grammar(
        property: &'static str,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidGrammar { property, value: value.into(), expected }
    }

    pub fn ownership_conflict(slot: &'static str) -> Self {
        Self::OwnershipConflict { slot }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_grammar_display() {
        let err = CssError::invalid_grammar("margin-top", "12qx", "a length such as '4px'");
        assert_eq!(
            format!("{}", err),
            "Invalid value '12qx' for property 'margin-top': expected a length such as '4px'"
        );
    }

    #[test]
    fn test_ownership_conflict_display() {
        let err = CssError::ownership_conflict("flex-grow");
        assert_eq!(
            format!("{}", err),
            "The 'flex-grow' value is already attached to another shorthand"
        );
    }

    #[test]
    fn test_subject() {
        let err = CssError::invalid_grammar("opacity", "2", "a number between 0 and 1");
        assert_eq!(err.subject(), "opacity");
        assert_eq!(CssError::ownership_conflict("width").subject(), "width");
    }
}
