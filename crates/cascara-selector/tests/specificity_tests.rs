//! Integration tests for specificity ranges and their memoization.

use std::sync::Arc;
use std::thread;

use cascara_selector::{
    ComplexSelector, ComplexSelectorComponent, CompoundSelector, SelectorList, SelectorParser,
    SimpleSelector, Specificity,
};

fn complex(text: &str) -> ComplexSelector {
    ComplexSelector::parse(text, None, None, true).unwrap()
}

fn specificity(text: &str) -> Specificity {
    complex(text).specificity()
}

#[test]
fn test_weights() {
    assert_eq!(specificity("a"), Specificity::exact(1));
    assert_eq!(specificity(".a"), Specificity::exact(10));
    assert_eq!(specificity("#a"), Specificity::exact(100));
    assert_eq!(specificity("[href]"), Specificity::exact(10));
    assert_eq!(specificity("%ph"), Specificity::exact(10));
    assert_eq!(specificity("*"), Specificity::ZERO);
    assert_eq!(specificity("&"), Specificity::ZERO);
}

#[test]
fn test_compound_sums() {
    assert_eq!(specificity(".a.b"), Specificity::exact(20));
    assert_eq!(complex(".a.b").min_specificity(), 20);
    assert_eq!(complex(".a.b").max_specificity(), 20);
    assert_eq!(specificity("#x .a div"), Specificity::exact(111));
    assert_eq!(specificity("ul > li + li.active"), Specificity::exact(13));
}

#[test]
fn test_pseudo_weights() {
    assert_eq!(specificity(":hover"), Specificity::exact(10));
    assert_eq!(specificity("a::before"), Specificity::exact(2));
    // Legacy single-colon pseudo-elements still count as elements.
    assert_eq!(specificity("a:before"), Specificity::exact(2));
    assert_eq!(specificity(":nth-child(2n+1)"), Specificity::exact(10));
}

#[test]
fn test_selector_pseudo_ranges() {
    assert_eq!(specificity(":is(.a, #b)"), Specificity::new(10, 100));
    assert_eq!(specificity(":matches(a, .b.c)"), Specificity::new(1, 20));
    assert_eq!(specificity(":not(.a, #b)"), Specificity::exact(100));
    assert_eq!(specificity(":where(#a, .b)"), Specificity::ZERO);
    assert_eq!(specificity(":nth-child(2n of #a, .b)"), Specificity::new(20, 110));
    assert_eq!(specificity("div:is(.a, #b)"), Specificity::new(11, 101));
}

#[test]
fn test_selector_pseudo_ranges_above_one_thousand() {
    let ids = "#a#b#c#d#e#f#g#h#i#j#k";
    assert_eq!(specificity(ids), Specificity::exact(1100));
    assert_eq!(specificity(&format!(":is({ids})")), Specificity::exact(1100));
    assert_eq!(
        specificity(&format!(":matches({ids}, {ids}#l)")),
        Specificity::new(1100, 1200)
    );
    assert_eq!(
        specificity(&format!(":nth-child(2n of {ids})")),
        Specificity::exact(1110)
    );
}

#[test]
fn test_list_specificity_spans_members() {
    let list = SelectorList::parse("a, .b, #c", None, None, false, true).unwrap();
    assert_eq!(list.specificity(), Specificity::new(1, 100));
}

#[test]
fn test_adding_components_never_lowers_specificity() {
    let extra = [
        SimpleSelector::universal(),
        SimpleSelector::type_selector("p"),
        SimpleSelector::class("x"),
        SimpleSelector::id("y"),
    ];
    for text in ["*", ".a", "a > b", ":where(#a)", ":is(.a, #b) c"] {
        let selector = complex(text);
        for simple in &extra {
            let larger = selector.with_additional_component(
                ComplexSelectorComponent::from(CompoundSelector::from(simple.clone())),
                false,
            );
            assert!(larger.min_specificity() >= selector.min_specificity(), "{larger}");
            assert!(larger.max_specificity() >= selector.max_specificity(), "{larger}");
        }
    }
}

fn simple(text: &str) -> SimpleSelector {
    SelectorParser::new(text).parse_simple_selector().unwrap()
}

#[test]
fn test_adding_simple_selectors_never_lowers_specificity() {
    let extra: Vec<SimpleSelector> = [
        "*",
        "ns|*",
        "p",
        ".x",
        "#y",
        "[href]",
        "[lang|=en]",
        "%ph",
        "&",
        ":hover",
        "::before",
        ":before",
        ":nth-child(2n)",
        ":is(.a, #b)",
        ":where(#a, .b)",
        ":not(.a, #b)",
        ":has(> img)",
        ":nth-last-child(odd of .a, #b)",
        "::slotted(span)",
    ]
    .into_iter()
    .map(simple)
    .collect();

    for text in ["*", ".a", "a#b", ":where(#a)", ":is(.a, #b)", ":not(p)", "a::after"] {
        let compound = SelectorParser::new(text).parse_compound_selector().unwrap();
        for simple in &extra {
            let larger = compound.with_simple(simple.clone());
            assert!(larger.min_specificity() >= compound.min_specificity(), "{larger}");
            assert!(larger.max_specificity() >= compound.max_specificity(), "{larger}");
        }
    }
}

#[test]
fn test_concurrent_first_use_agrees() {
    let selector = Arc::new(complex("#a :is(.b, #c) > d::after"));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let selector = Arc::clone(&selector);
            thread::spawn(move || selector.specificity())
        })
        .collect();

    let results: Vec<Specificity> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert!(results.iter().all(|result| *result == Specificity::new(112, 202)));
}
