//! Integration tests for parsing selector text and serializing it back.

use cascara_common::CollectingLogger;
use cascara_selector::{
    AttributeOperator, Combinator, ComplexSelector, SelectorError, SelectorList, SelectorParser,
    SimpleSelector,
};

fn list(text: &str) -> SelectorList {
    SelectorList::parse(text, None, None, true, true).unwrap()
}

fn syntax_error(result: Result<SelectorList, SelectorError>) -> String {
    match result {
        Err(SelectorError::Syntax { message, .. }) => message,
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn test_round_trips() {
    for text in [
        "a",
        ".a.b#c",
        "a > .b ~ c + d",
        "> .a",
        ".a >",
        ".a > + .b",
        "*",
        "ns|a",
        "*|*",
        "|a",
        "ns|*",
        "[href]",
        "[href^=http]",
        "[data-x=\"a b\" i]",
        "[xlink|href]",
        ":hover",
        "::before",
        ":before",
        ":not(.a, .b)",
        ":is(a > b)",
        "::slotted(span)",
        ":nth-child(2n+1)",
        ":nth-child(2n+1 of .item)",
        ":lang(en)",
        "&",
        "&-suffix",
        "&.b > .c",
        "%placeholder",
        ".a, .b",
    ] {
        assert_eq!(list(text).to_string(), text);
    }
}

#[test]
fn test_whitespace_and_comments_are_normalized() {
    assert_eq!(list("a>b").to_string(), "a > b");
    assert_eq!(list("  a  /* c */ >   b  ").to_string(), "a > b");
    assert_eq!(list("a,b ,  c").to_string(), "a, b, c");
    assert_eq!(list("[ href = 'x' ]").to_string(), "[href=x]");
    assert_eq!(list(":nth-child( 2n + 1 )").to_string(), ":nth-child(2n + 1)");
}

#[test]
fn test_line_breaks_are_kept() {
    let parsed = list("a,\nb, c");
    assert!(!parsed.components()[0].line_break());
    assert!(parsed.components()[1].line_break());
    assert!(!parsed.components()[2].line_break());
    assert_eq!(parsed.to_string(), "a,\nb, c");
}

#[test]
fn test_structure() {
    let parsed = list("div.a > #b");
    let complex = &parsed.components()[0];
    assert_eq!(complex.components().len(), 2);
    assert_eq!(complex.components()[0].combinators(), &[Combinator::Child]);
    assert_eq!(
        complex.components()[0].selector().simples(),
        &[SimpleSelector::type_selector("div"), SimpleSelector::class("a")]
    );
    assert_eq!(complex.components()[1].selector().simples(), &[SimpleSelector::id("b")]);
}

#[test]
fn test_attribute_operators() {
    for (text, op) in [
        ("[a=b]", AttributeOperator::Equal),
        ("[a~=b]", AttributeOperator::Include),
        ("[a|=b]", AttributeOperator::Dash),
        ("[a^=b]", AttributeOperator::Prefix),
        ("[a$=b]", AttributeOperator::Suffix),
        ("[a*=b]", AttributeOperator::Substring),
    ] {
        let simple = SelectorParser::new(text).parse_simple_selector().unwrap();
        let SimpleSelector::Attribute(attribute) = simple else {
            panic!("{text} is not an attribute selector");
        };
        assert_eq!(attribute.op, Some(op));
        assert_eq!(attribute.value.as_deref(), Some("b"));
    }
}

#[test]
fn test_attribute_string_values() {
    let simple = SelectorParser::new(r#"[title="say \"hi\""]"#)
        .parse_simple_selector()
        .unwrap();
    let SimpleSelector::Attribute(attribute) = simple else {
        panic!("not an attribute selector");
    };
    assert_eq!(attribute.value.as_deref(), Some(r#"say "hi""#));
    assert_eq!(
        SimpleSelector::Attribute(attribute).to_string(),
        r#"[title="say \"hi\""]"#
    );
}

#[test]
fn test_escaped_identifier_values_match_quoted_values() {
    let escaped = list(r"[a=b\ c]");
    assert_eq!(escaped, list(r#"[a="b c"]"#));
    assert_eq!(escaped.to_string(), r#"[a="b c"]"#);
    assert_eq!(list(r"[a=\31 0]").to_string(), r#"[a="10"]"#);
    assert_eq!(list(r"[a=x\-y]").to_string(), "[a=x-y]");
}

#[test]
fn test_pseudo_kinds() {
    let parsed = list(":before::after:hover");
    let simples = parsed.components()[0].components()[0].selector().simples();
    let kinds: Vec<(bool, bool)> = simples
        .iter()
        .map(|simple| {
            let pseudo = simple.as_pseudo().unwrap();
            (pseudo.is_element(), pseudo.is_syntactic_class())
        })
        .collect();
    assert_eq!(kinds, vec![(true, true), (true, false), (false, true)]);
}

#[test]
fn test_nth_child_argument_and_selector() {
    let parsed = list(":nth-last-child(odd of li.item)");
    let pseudo = parsed.components()[0].components()[0].selector().simples()[0]
        .as_pseudo()
        .unwrap();
    assert_eq!(pseudo.argument(), Some("odd"));
    assert_eq!(pseudo.selector().map(ToString::to_string), Some("li.item".to_string()));
}

#[test]
fn test_unknown_pseudo_argument_is_raw() {
    let parsed = list(":custom(foo (bar) \"baz)\")");
    let pseudo = parsed.components()[0].components()[0].selector().simples()[0]
        .as_pseudo()
        .unwrap();
    assert_eq!(pseudo.argument(), Some("foo (bar) \"baz)\""));
    assert!(pseudo.selector().is_none());
}

#[test]
fn test_parent_suffix() {
    let parsed = list("&__element");
    assert_eq!(
        parsed.components()[0].components()[0].selector().simples(),
        &[SimpleSelector::parent(Some("__element".to_string()))]
    );
}

#[test]
fn test_syntax_errors() {
    assert_eq!(syntax_error(SelectorList::parse("", None, None, true, true)), "expected selector.");
    assert_eq!(syntax_error(SelectorList::parse("a,", None, None, true, true)), "expected selector.");
    assert_eq!(syntax_error(SelectorList::parse("a )", None, None, true, true)), "unexpected \")\".");
    assert_eq!(syntax_error(SelectorList::parse("[a", None, None, true, true)), "Expected \"]\".");
    assert_eq!(syntax_error(SelectorList::parse(":not(.a", None, None, true, true)), "Expected \")\".");
    assert_eq!(syntax_error(SelectorList::parse(".", None, None, true, true)), "Expected identifier.");
    assert_eq!(
        syntax_error(SelectorList::parse(":nth-child()", None, None, true, true)),
        "Expected An+B expression."
    );
}

#[test]
fn test_compounds_need_a_separator() {
    assert_eq!(syntax_error(SelectorList::parse("[x]div", None, None, true, true)), "unexpected \"d\".");
    assert_eq!(syntax_error(SelectorList::parse(".a*", None, None, true, true)), "unexpected \"*\".");
    assert_eq!(syntax_error(SelectorList::parse("a*", None, None, true, true)), "unexpected \"*\".");
    assert_eq!(syntax_error(SelectorList::parse(":is([x]div)", None, None, true, true)), "Expected \")\".");

    assert_eq!(list("[x] div").to_string(), "[x] div");
    assert_eq!(list("[x]>div").to_string(), "[x] > div");
    assert_eq!(list("a/**/b").to_string(), "a b");
}

#[test]
fn test_parent_and_placeholder_restrictions() {
    assert_eq!(
        syntax_error(SelectorList::parse("&", None, None, false, true)),
        "Parent selectors aren't allowed here."
    );
    assert_eq!(
        syntax_error(SelectorList::parse(".a&", None, None, true, true)),
        "\"&\" may only used at the beginning of a compound selector."
    );
    assert_eq!(
        syntax_error(SelectorList::parse("%p", None, None, true, false)),
        "Placeholder selectors aren't allowed here."
    );
}

#[test]
fn test_error_location() {
    let err = SelectorList::parse("a,\n  b )", None, Some("styles/main.scss"), false, true).unwrap_err();
    let span = err.span().unwrap();
    assert_eq!(span.url.as_deref(), Some("styles/main.scss"));
    assert_eq!(span.start.line, 1);
    assert_eq!(span.start.column, 4);
    assert!(err.to_string().ends_with("styles/main.scss:2:5"));
}

#[test]
fn test_complex_parse_rejects_lists() {
    assert!(ComplexSelector::parse("a, b", None, None, false).is_err());
    assert!(ComplexSelector::parse("a b", None, None, false).is_ok());
}

#[test]
fn test_multiple_combinators_warn() {
    let logger = CollectingLogger::new();
    let parsed = SelectorList::parse(".a > + .b, .c > .d", Some(&logger), None, false, true).unwrap();
    assert_eq!(parsed.components().len(), 2);

    let warnings = logger.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].deprecation);
    assert!(warnings[0].message.contains(".a > + .b"));
    assert_eq!(warnings[0].span.as_ref().map(|span| span.start.offset), Some(0));
}

#[test]
fn test_leading_combinators_do_not_warn() {
    let logger = CollectingLogger::new();
    let _ = SelectorList::parse("> .a", Some(&logger), None, false, true).unwrap();
    assert!(logger.warnings().is_empty());
}
