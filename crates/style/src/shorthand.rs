//! Shared shorthand slot machinery
//!
//! Every composite property works the same way underneath: components are
//! matched in any order against the first still-empty slot whose grammar
//! accepts them, incoming sub-values pass an ownership gate, and displaced
//! sub-values come back to the caller detached.

use log::debug;
use smallvec::SmallVec;

use sepal_css::{CssError, CssResult, UrlValue};

use crate::keyword;
use crate::single::{SingleDef, SingleValue};
use crate::CssProperty;

pub(crate) type SlotBuffer = SmallVec<[Option<SingleValue>; 3]>;

/// Match whitespace components against named slots, any order
///
/// Each component must claim a distinct slot; `initial`/`inherit` are
/// whole-value keywords and never legal inside a multi-component value.
/// Slots nothing claimed come back `None`; arity is the caller's rule.
pub(crate) fn match_components(
    property: &'static str,
    expected: &'static str,
    parts: &[String],
    defs: &[&'static SingleDef],
) -> CssResult<SlotBuffer> {
    let mut slots: SlotBuffer = defs.iter().map(|_| None).collect();

    for part in parts {
        if keyword::global_of(part).is_some() {
            return Err(CssError::invalid_grammar(property, part.clone(), expected));
        }
        let claimed = defs.iter().enumerate().find_map(|(i, def)| {
            if slots[i].is_some() {
                return None;
            }
            SingleValue::from_component(def, part).map(|value| (i, value))
        });
        match claimed {
            Some((i, value)) => slots[i] = Some(value),
            None => return Err(CssError::invalid_grammar(property, part.clone(), expected)),
        }
    }
    Ok(slots)
}

/// Gate an incoming sub-value: right descriptor, not already owned
pub(crate) fn attach_incoming(
    mut value: SingleValue,
    expect: &'static SingleDef,
) -> CssResult<SingleValue> {
    if !std::ptr::eq(value.def(), expect) {
        return Err(CssError::invalid_grammar(
            expect.grammar.property,
            value.css_text(),
            expect.grammar.expected,
        ));
    }
    if value.is_attached() {
        return Err(CssError::ownership_conflict(expect.grammar.property));
    }
    value.set_attached(true);
    Ok(value)
}

/// Mark every filled slot owned
pub(crate) fn claim_all(slots: &mut SlotBuffer) {
    for slot in slots.iter_mut().flatten() {
        slot.set_attached(true);
    }
}

/// Take a slot's value, detached, logging the displacement
pub(crate) fn displace(slot: &mut Option<SingleValue>, property: &'static str) -> Option<SingleValue> {
    slot.take().map(|mut old| {
        debug!("replacing {} value of {}", old.name(), property);
        old.set_attached(false);
        old
    })
}

/// Gate a batch of incoming URL entries: non-empty, none already owned
///
/// Every flag is inspected before any entry is claimed, so a conflict
/// leaves the whole batch untouched.
pub(crate) fn claim_urls(
    mut values: Vec<UrlValue>,
    property: &'static str,
    expected: &'static str,
) -> CssResult<Vec<UrlValue>> {
    if values.is_empty() {
        return Err(CssError::invalid_grammar(property, "", expected));
    }
    if values.iter().any(UrlValue::is_attached) {
        return Err(CssError::ownership_conflict(property));
    }
    for value in &mut values {
        value.set_attached(true);
    }
    Ok(values)
}

/// Canonical comma-separated rendering of a URL list
pub(crate) fn render_urls(urls: &[UrlValue]) -> String {
    urls.iter()
        .map(UrlValue::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sepal_css::{NumberPattern, TokenRule, UnitRule, ValueGrammar};

    static WIDTH: SingleDef = SingleDef {
        grammar: ValueGrammar {
            property: "test-width",
            token: TokenRule::Number(NumberPattern::NonNegativeFloat, UnitRule::Length),
            keywords: &["medium", "thin", "thick"],
            expected: "a width",
        },
        initial: "medium",
    };

    static STYLE: SingleDef = SingleDef {
        grammar: ValueGrammar {
            property: "test-style",
            token: TokenRule::None,
            keywords: &["none", "solid", "dotted"],
            expected: "a line style",
        },
        initial: "none",
    };

    fn parts(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_any_order_matching() {
        let defs: &[&'static SingleDef] = &[&WIDTH, &STYLE];
        let slots = match_components("test", "width and style", &parts(&["solid", "2px"]), defs)
            .unwrap();
        assert_eq!(slots[0].as_ref().unwrap().css_text(), "2px");
        assert_eq!(slots[1].as_ref().unwrap().css_text(), "solid");
    }

    #[test]
    fn test_unmatched_token_rejected() {
        let defs: &[&'static SingleDef] = &[&WIDTH, &STYLE];
        assert!(match_components("test", "x", &parts(&["2px", "4px"]), defs).is_err());
        assert!(match_components("test", "x", &parts(&["purple"]), defs).is_err());
    }

    #[test]
    fn test_globals_rejected_in_components() {
        let defs: &[&'static SingleDef] = &[&WIDTH, &STYLE];
        let err = match_components("test", "x", &parts(&["solid", "inherit"]), defs).unwrap_err();
        assert!(matches!(err, CssError::InvalidGrammar { .. }));
    }

    #[test]
    fn test_attach_gate() {
        let value = SingleValue::parse(&WIDTH, "2px").unwrap();
        let attached = attach_incoming(value, &WIDTH).unwrap();
        assert!(attached.is_attached());

        let clone = attached.clone();
        let err = attach_incoming(clone, &WIDTH).unwrap_err();
        assert!(matches!(err, CssError::OwnershipConflict { slot: "test-width" }));
    }

    #[test]
    fn test_attach_wrong_descriptor() {
        let value = SingleValue::parse(&STYLE, "solid").unwrap();
        assert!(attach_incoming(value, &WIDTH).is_err());
    }

    #[test]
    fn test_displace_detaches() {
        let mut slot = Some(attach_incoming(SingleValue::parse(&WIDTH, "2px").unwrap(), &WIDTH).unwrap());
        let old = displace(&mut slot, "test").unwrap();
        assert!(!old.is_attached());
        assert!(slot.is_none());
        assert!(displace(&mut slot, "test").is_none());
    }

    #[test]
    fn test_claim_urls_gate() {
        let batch = vec![UrlValue::from_path("a.png"), UrlValue::from_path("b.png")];
        let claimed = claim_urls(batch, "test", "urls").unwrap();
        assert!(claimed.iter().all(UrlValue::is_attached));
        assert_eq!(render_urls(&claimed), "url(\"a.png\"), url(\"b.png\")");

        let err = claim_urls(claimed, "test", "urls").unwrap_err();
        assert!(matches!(err, CssError::OwnershipConflict { slot: "test" }));

        assert!(claim_urls(Vec::new(), "test", "urls").is_err());
    }
}
