//! Integration tests for complex selector construction and combinator
//! algebra.

use std::collections::HashSet;

use cascara_selector::{
    Combinator, ComplexSelector, ComplexSelectorComponent, CompoundSelector, SelectorError,
    SimpleSelector,
};

fn complex(text: &str) -> ComplexSelector {
    ComplexSelector::parse(text, None, None, true).unwrap()
}

fn class_component(name: &str, combinators: Vec<Combinator>) -> ComplexSelectorComponent {
    ComplexSelectorComponent::new(CompoundSelector::from(SimpleSelector::class(name)), combinators)
}

#[test]
fn test_empty_construction_fails() {
    assert_eq!(
        ComplexSelector::new(Vec::new(), Vec::new(), false),
        Err(SelectorError::InvalidConstruction)
    );
}

#[test]
fn test_construction_with_only_leading_combinators() {
    let selector = ComplexSelector::new(vec![Combinator::Child], Vec::new(), false).unwrap();
    assert_eq!(selector.leading_combinators(), &[Combinator::Child]);
    assert!(selector.components().is_empty());
    assert_eq!(selector.to_string(), ">");
}

#[test]
fn test_construction_keeps_line_break() {
    let selector = ComplexSelector::new(Vec::new(), vec![class_component("a", Vec::new())], true).unwrap();
    assert!(selector.line_break());
}

#[test]
fn test_last_component_out_of_range() {
    let selector = ComplexSelector::new(vec![Combinator::NextSibling], Vec::new(), false).unwrap();
    assert_eq!(
        selector.last_component(),
        Err(SelectorError::OutOfRange {
            selector: "+".to_string()
        })
    );
}

#[test]
fn test_last_component() {
    let selector = complex(".a > .b");
    let last = selector.last_component().unwrap();
    assert_eq!(last.selector().to_string(), ".b");
    assert!(last.combinators().is_empty());
}

#[test]
fn test_single_compound() {
    assert_eq!(
        complex(".a.b").single_compound().map(ToString::to_string),
        Some(".a.b".to_string())
    );
    assert!(complex(".a .b").single_compound().is_none());
    assert!(complex("> .a").single_compound().is_none());
    assert!(complex(".a >").single_compound().is_none());
}

#[test]
fn test_with_additional_combinators_empty_is_identity() {
    for text in [".a", ".a > .b", "> .a", ".a ~", "+"] {
        let selector = complex(text);
        assert_eq!(selector.with_additional_combinators(&[], false), selector);
        assert_eq!(selector.with_additional_combinators(&[], true).line_break(), selector.line_break());
    }
}

#[test]
fn test_with_additional_combinators_goes_to_last_component() {
    let selector = complex(".a .b").with_additional_combinators(&[Combinator::Child], false);
    assert_eq!(selector.to_string(), ".a .b >");
    assert!(selector.components()[0].combinators().is_empty());
    assert_eq!(selector.components()[1].combinators(), &[Combinator::Child]);
}

#[test]
fn test_with_additional_combinators_without_components() {
    let selector = complex(">").with_additional_combinators(&[Combinator::FollowingSibling], false);
    assert_eq!(
        selector.leading_combinators(),
        &[Combinator::Child, Combinator::FollowingSibling]
    );
    assert!(selector.components().is_empty());
}

#[test]
fn test_with_additional_combinators_forces_line_break() {
    let selector = complex(".a").with_additional_combinators(&[Combinator::Child], true);
    assert!(selector.line_break());
}

#[test]
fn test_with_additional_component() {
    let selector = complex("> .a").with_additional_component(class_component("b", Vec::new()), false);
    assert_eq!(selector.to_string(), "> .a .b");
    assert!(!selector.line_break());

    let forced = complex(".a").with_additional_component(class_component("b", Vec::new()), true);
    assert!(forced.line_break());
}

#[test]
fn test_concatenate_child_without_leading_combinators() {
    let result = complex("> .a .b").concatenate(&complex(".c > .d"), false);
    assert_eq!(result.to_string(), "> .a .b .c > .d");
}

#[test]
fn test_concatenate_parent_without_components() {
    let result = complex("~").concatenate(&complex("> .b"), false);
    assert_eq!(
        result.leading_combinators(),
        &[Combinator::FollowingSibling, Combinator::Child]
    );
    assert_eq!(result.to_string(), "~ > .b");
}

#[test]
fn test_concatenate_attaches_leading_combinators() {
    let result = complex(".a").concatenate(&complex("> .b"), false);
    assert_eq!(result.to_string(), ".a > .b");
    assert_eq!(result, complex(".a > .b"));
}

#[test]
fn test_concatenate_appends_to_trailing_combinators() {
    let result = complex(".a >").concatenate(&complex("+ .b"), false);
    assert_eq!(result.components()[0].combinators(), &[Combinator::Child, Combinator::NextSibling]);
}

#[test]
fn test_concatenate_line_break_is_or() {
    let plain = complex(".a");
    let broken = ComplexSelector::new(Vec::new(), vec![class_component("b", Vec::new())], true).unwrap();

    assert!(!plain.concatenate(&plain, false).line_break());
    assert!(plain.concatenate(&plain, true).line_break());
    assert!(plain.concatenate(&broken, false).line_break());
    assert!(broken.concatenate(&plain, false).line_break());
}

#[test]
fn test_concatenate_is_associative() {
    let pieces = [".a", "> .b", ".c +", "~", "+ .d .e", ".f > .g"];
    for a in pieces {
        for b in pieces {
            for c in pieces {
                let (a, b, c) = (complex(a), complex(b), complex(c));
                assert_eq!(
                    a.concatenate(&b, false).concatenate(&c, false),
                    a.concatenate(&b.concatenate(&c, false), false),
                    "({a} . {b}) . {c}"
                );
            }
        }
    }
}

#[test]
fn test_equality_and_hash_ignore_line_break() {
    let a = ComplexSelector::new(Vec::new(), vec![class_component("a", Vec::new())], true).unwrap();
    let b = complex(".a");
    assert_eq!(a, b);

    let mut set = HashSet::new();
    assert!(set.insert(a));
    assert!(!set.insert(b));
}

#[test]
fn test_equality_is_structural() {
    assert_ne!(complex(".a .b"), complex(".a > .b"));
    assert_ne!(complex(".a.b"), complex(".b.a"));
    assert_ne!(complex("> .a"), complex(".a"));
    assert_eq!(complex(".a   >  .b"), complex(".a>.b"));
}

#[test]
fn test_is_bogus() {
    assert!(!complex(".a > .b").is_bogus());
    assert!(complex("> .a").is_bogus());
    assert!(complex(".a >").is_bogus());
    assert!(complex(".a > + .b").is_bogus());
    assert!(complex(".a > + .b").has_multiple_combinators());
}

#[test]
fn test_serializes_to_json_without_cache() {
    let selector = complex(".a > b");
    let _ = selector.specificity();
    let json = serde_json::to_value(&selector).unwrap();
    assert!(json.get("specificity").is_none());
    assert_eq!(json["leading_combinators"], serde_json::json!([]));
    assert_eq!(json["components"].as_array().map(Vec::len), Some(2));
}
