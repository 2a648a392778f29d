//! [§ 3 Selector syntax](https://www.w3.org/TR/selectors-4/#syntax)
//!
//! A recursive-descent parser over selector text. It works directly on the
//! characters rather than on CSS tokens, since selectors in a stylesheet
//! language may contain things the CSS tokenizer has no token for (`&-suffix`,
//! `%placeholder`).
//!
//! Positions are byte offsets into the input so errors and warnings can carry
//! a [`SourceSpan`].

use std::str::FromStr;

use cascara_common::{Logger, SourceSpan};

use crate::combinator::Combinator;
use crate::complex::{ComplexSelector, ComplexSelectorComponent};
use crate::compound::CompoundSelector;
use crate::error::SelectorError;
use crate::list::SelectorList;
use crate::pseudo::{self, PseudoSelector};
use crate::simple::{AttributeOperator, AttributeSelector, QualifiedName, SimpleSelector};

/// Parses selector text.
///
/// ```
/// use cascara_selector::SelectorParser;
///
/// let list = SelectorParser::new("a > .b, &:hover")
///     .parse_selector_list()
///     .unwrap();
/// assert_eq!(list.components().len(), 2);
/// ```
pub struct SelectorParser<'a> {
    /// The text being parsed.
    text: &'a str,
    /// Where the text came from, for spans.
    url: Option<&'a str>,
    /// Where deprecation warnings go.
    logger: Option<&'a dyn Logger>,
    /// Whether `&` is legal.
    allow_parent: bool,
    /// Whether `%placeholder` is legal.
    allow_placeholder: bool,
    /// Current byte offset.
    position: usize,
}

impl<'a> SelectorParser<'a> {
    /// A parser over `text` that allows both `&` and placeholders.
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            url: None,
            logger: None,
            allow_parent: true,
            allow_placeholder: true,
            position: 0,
        }
    }

    /// Report deprecation warnings to `logger`.
    #[must_use]
    pub fn logger(mut self, logger: Option<&'a dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Tag spans with `url`.
    #[must_use]
    pub fn url(mut self, url: Option<&'a str>) -> Self {
        self.url = url;
        self
    }

    /// Whether `&` is legal.
    #[must_use]
    pub fn allow_parent(mut self, allow: bool) -> Self {
        self.allow_parent = allow;
        self
    }

    /// Whether `%placeholder` is legal.
    #[must_use]
    pub fn allow_placeholder(mut self, allow: bool) -> Self {
        self.allow_placeholder = allow;
        self
    }

    /// Parse the whole text as a selector list.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Syntax`] on malformed input.
    pub fn parse_selector_list(mut self) -> Result<SelectorList, SelectorError> {
        let list = self.selector_list()?;
        self.expect_done()?;
        Ok(list)
    }

    /// Parse the whole text as one complex selector.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Syntax`] on malformed input, including a
    /// comma-separated list.
    pub fn parse_complex_selector(mut self) -> Result<ComplexSelector, SelectorError> {
        let _ = self.whitespace();
        let complex = self.complex_selector(false)?;
        self.expect_done()?;
        Ok(complex)
    }

    /// Parse the whole text as one compound selector.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Syntax`] on malformed input.
    pub fn parse_compound_selector(mut self) -> Result<CompoundSelector, SelectorError> {
        let _ = self.whitespace();
        let compound = self.compound_selector()?;
        self.expect_done()?;
        Ok(compound)
    }

    /// Parse the whole text as one simple selector.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Syntax`] on malformed input.
    pub fn parse_simple_selector(mut self) -> Result<SimpleSelector, SelectorError> {
        let _ = self.whitespace();
        let simple = self.simple_selector(true)?;
        self.expect_done()?;
        Ok(simple)
    }

    /// [§ 4.1 Selector lists](https://www.w3.org/TR/selectors-4/#grouping)
    ///
    /// A newline after a comma is remembered on the following member so it
    /// can be reproduced in the output.
    fn selector_list(&mut self) -> Result<SelectorList, SelectorError> {
        let mut components = Vec::new();
        let mut line_break = false;
        let _ = self.whitespace();
        loop {
            components.push(self.complex_selector(line_break)?);
            let _ = self.whitespace();
            if !self.scan_char(',') {
                break;
            }
            line_break = self.whitespace();
        }
        Ok(SelectorList::new(components))
    }

    /// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
    fn complex_selector(&mut self, line_break: bool) -> Result<ComplexSelector, SelectorError> {
        let start = self.position;
        let mut leading_combinators = Vec::new();
        let mut components = Vec::new();
        let mut last: Option<CompoundSelector> = None;
        let mut combinators = Vec::new();

        loop {
            let before = self.position;
            let _ = self.whitespace();
            // A new compound needs whitespace or a combinator before it.
            let separated = self.position > before || !combinators.is_empty();
            match self.peek() {
                Some(c @ ('>' | '+' | '~')) => {
                    self.bump();
                    let combinator = match c {
                        '>' => Combinator::Child,
                        '+' => Combinator::NextSibling,
                        _ => Combinator::FollowingSibling,
                    };
                    if last.is_some() {
                        combinators.push(combinator);
                    } else {
                        leading_combinators.push(combinator);
                    }
                }
                Some(c)
                    if (last.is_none() || separated)
                        && (is_simple_selector_start(c) || self.looking_at_identifier()) =>
                {
                    if let Some(compound) = last.take() {
                        components.push(ComplexSelectorComponent::new(
                            compound,
                            std::mem::take(&mut combinators),
                        ));
                    }
                    last = Some(self.compound_selector()?);
                }
                _ => break,
            }
        }
        if let Some(compound) = last {
            components.push(ComplexSelectorComponent::new(compound, combinators));
        }

        if leading_combinators.is_empty() && components.is_empty() {
            return Err(self.error("expected selector.", start));
        }

        let complex = ComplexSelector::from_parts(leading_combinators, components, line_break);
        if let Some(logger) = self.logger.filter(|_| complex.has_multiple_combinators()) {
            let span = self.span(start, self.position);
            logger.warn(
                &format!(
                    "The selector \"{}\" is invalid CSS: it has more than one combinator in a row. \
                     This will be an error in a future version.",
                    span.text.trim_end()
                ),
                Some(&span),
                true,
            );
        }
        Ok(complex)
    }

    /// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
    fn compound_selector(&mut self) -> Result<CompoundSelector, SelectorError> {
        let mut simples = vec![self.simple_selector(true)?];
        while self.peek().is_some_and(is_subsequent_selector_start) {
            simples.push(self.simple_selector(false)?);
        }
        Ok(CompoundSelector::new(simples))
    }

    /// One simple selector. `first` is whether it starts a compound, the only
    /// place `&` may appear.
    fn simple_selector(&mut self, first: bool) -> Result<SimpleSelector, SelectorError> {
        let start = self.position;
        match self.peek() {
            Some('[') => self.attribute_selector().map(SimpleSelector::Attribute),
            Some('.') => {
                self.bump();
                Ok(SimpleSelector::Class(self.identifier()?))
            }
            Some('#') => {
                self.bump();
                Ok(SimpleSelector::Id(self.identifier()?))
            }
            Some('%') => {
                if !self.allow_placeholder {
                    return Err(self.error("Placeholder selectors aren't allowed here.", start));
                }
                self.bump();
                Ok(SimpleSelector::Placeholder(self.identifier()?))
            }
            Some(':') => self.pseudo_selector().map(SimpleSelector::Pseudo),
            Some('&') => self.parent_selector(first),
            Some(c) if c == '*' || c == '|' || self.looking_at_identifier() => self.type_or_universal(),
            _ => Err(self.error("expected selector.", start)),
        }
    }

    /// `&` or `&-suffix`.
    fn parent_selector(&mut self, first: bool) -> Result<SimpleSelector, SelectorError> {
        let start = self.position;
        if !self.allow_parent {
            return Err(self.error("Parent selectors aren't allowed here.", start));
        }
        if !first {
            return Err(self.error(
                "\"&\" may only used at the beginning of a compound selector.",
                start,
            ));
        }
        self.bump();

        let suffix_start = self.position;
        self.name_code_points()?;
        let suffix = (self.position > suffix_start).then(|| self.text[suffix_start..self.position].to_owned());
        Ok(SimpleSelector::Parent { suffix })
    }

    /// [§ 5.1 Type selectors](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// and [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector),
    /// with their [namespace prefixes](https://www.w3.org/TR/selectors-4/#type-nmsp).
    fn type_or_universal(&mut self) -> Result<SimpleSelector, SelectorError> {
        if self.scan_char('*') {
            if !self.scan_char('|') {
                return Ok(SimpleSelector::Universal { namespace: None });
            }
            return self.namespaced("*".to_owned());
        }
        if self.scan_char('|') {
            return self.namespaced(String::new());
        }

        let name = self.identifier()?;
        if self.peek() == Some('|') && self.peek_at(1) != Some('=') {
            self.bump();
            return self.namespaced(name);
        }
        Ok(SimpleSelector::Type(QualifiedName::new(name)))
    }

    /// The part after `namespace|`.
    fn namespaced(&mut self, namespace: String) -> Result<SimpleSelector, SelectorError> {
        if self.scan_char('*') {
            return Ok(SimpleSelector::Universal {
                namespace: Some(namespace),
            });
        }
        Ok(SimpleSelector::Type(QualifiedName::with_namespace(
            self.identifier()?,
            namespace,
        )))
    }

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    fn attribute_selector(&mut self) -> Result<AttributeSelector, SelectorError> {
        self.bump(); // [
        let _ = self.whitespace();

        let name = self.attribute_name()?;
        let _ = self.whitespace();
        if self.scan_char(']') {
            return Ok(AttributeSelector::exists(name));
        }

        let op_start = self.position;
        let op_len = if self.peek() == Some('=') { 1 } else { 2 };
        let op_text = self.text.get(op_start..op_start + op_len).unwrap_or_default();
        let op = AttributeOperator::from_str(op_text)
            .map_err(|_| self.error("Expected \"]\".", op_start))?;
        self.position += op_len;
        let _ = self.whitespace();

        // Both forms are stored unescaped so `[a=b\ c]` and `[a="b c"]`
        // compare equal.
        let value = match self.peek() {
            Some(quote @ ('"' | '\'')) => self.string(quote)?,
            _ => unescape(&self.identifier()?),
        };
        let _ = self.whitespace();

        let mut attribute = AttributeSelector::with_value(name, op, value);
        if let Some(c) = self.peek().filter(char::is_ascii_alphabetic) {
            self.bump();
            attribute.modifier = Some(c);
            let _ = self.whitespace();
        }

        if !self.scan_char(']') {
            return Err(self.error("Expected \"]\".", self.position));
        }
        Ok(attribute)
    }

    /// [§ 6.4 Attribute selectors and namespaces](https://www.w3.org/TR/selectors-4/#attrnmsp)
    fn attribute_name(&mut self) -> Result<QualifiedName, SelectorError> {
        if self.scan_char('*') {
            if !self.scan_char('|') {
                return Err(self.error("Expected \"|\".", self.position));
            }
            return Ok(QualifiedName::with_namespace(self.identifier()?, "*"));
        }
        if self.peek() == Some('|') && self.peek_at(1) != Some('=') {
            self.bump();
            return Ok(QualifiedName::with_namespace(self.identifier()?, ""));
        }

        let name = self.identifier()?;
        if self.peek() == Some('|') && self.peek_at(1) != Some('=') {
            self.bump();
            return Ok(QualifiedName::with_namespace(self.identifier()?, name));
        }
        Ok(QualifiedName::new(name))
    }

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// and [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    fn pseudo_selector(&mut self) -> Result<PseudoSelector, SelectorError> {
        self.bump(); // :
        let element = self.scan_char(':');
        let name = self.identifier()?;
        if !self.scan_char('(') {
            return Ok(PseudoSelector::new(name, element, None, None));
        }
        let _ = self.whitespace();

        let normalized = pseudo::unvendor(&name).to_ascii_lowercase();
        let (argument, selector) = if !pseudo::takes_selector(&normalized, element) {
            (Some(self.raw_argument()?), None)
        } else if matches!(normalized.as_str(), "nth-child" | "nth-last-child") {
            self.nth_argument()?
        } else {
            (None, Some(self.selector_list()?))
        };

        let _ = self.whitespace();
        if !self.scan_char(')') {
            return Err(self.error("Expected \")\".", self.position));
        }
        Ok(PseudoSelector::new(name, element, argument, selector))
    }

    /// [§ 14.4.1 `:nth-child()`](https://www.w3.org/TR/selectors-4/#the-nth-child-pseudo)
    ///
    /// `An+B` optionally followed by `of <selector-list>`.
    fn nth_argument(&mut self) -> Result<(Option<String>, Option<SelectorList>), SelectorError> {
        let start = self.position;
        let mut end = start;
        loop {
            match self.peek() {
                None | Some(')') => break,
                Some(c) if is_whitespace(c) => {
                    let _ = self.whitespace();
                    if self.looking_at_keyword("of") {
                        self.position += 2;
                        let _ = self.whitespace();
                        let argument = self.nonempty_argument(start, end)?;
                        return Ok((Some(argument), Some(self.selector_list()?)));
                    }
                }
                Some(_) => {
                    self.bump();
                    end = self.position;
                }
            }
        }
        Ok((Some(self.nonempty_argument(start, end)?), None))
    }

    fn nonempty_argument(&self, start: usize, end: usize) -> Result<String, SelectorError> {
        let argument = self.text[start..end].trim();
        if argument.is_empty() {
            return Err(self.error("Expected An+B expression.", start));
        }
        Ok(argument.to_owned())
    }

    /// An argument that is not a selector, kept as written up to the
    /// matching `)`.
    fn raw_argument(&mut self) -> Result<String, SelectorError> {
        let start = self.position;
        let mut depth = 0_usize;
        loop {
            match self.peek() {
                None => return Err(self.error("Expected \")\".", self.position)),
                Some(')') if depth == 0 => break,
                Some(')') => {
                    depth -= 1;
                    self.bump();
                }
                Some('(') => {
                    depth += 1;
                    self.bump();
                }
                Some(quote @ ('"' | '\'')) => {
                    let _ = self.string(quote)?;
                }
                Some('\\') => self.escape()?,
                Some(_) => self.bump(),
            }
        }
        Ok(self.text[start..self.position].trim_end().to_owned())
    }

    /// [§ 4.3.4 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    ///
    /// Returns the contents with escapes of the quote and backslash removed.
    fn string(&mut self, quote: char) -> Result<String, SelectorError> {
        let start = self.position;
        self.bump();
        let mut value = String::new();
        loop {
            match self.consume() {
                Some(c) if c == quote => return Ok(value),
                None | Some('\n') => return Err(self.error("Expected string.", start)),
                Some('\\') => match self.consume() {
                    Some('\n') => {}
                    Some(c) => value.push(c),
                    None => return Err(self.error("Expected string.", start)),
                },
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    ///
    /// The identifier is returned as written, escapes included, so that
    /// serializing it reproduces the input.
    fn identifier(&mut self) -> Result<String, SelectorError> {
        let start = self.position;
        if !self.looking_at_identifier() {
            return Err(self.error("Expected identifier.", start));
        }
        self.name_code_points()?;
        Ok(self.text[start..self.position].to_owned())
    }

    /// Consume ident code points and escapes.
    fn name_code_points(&mut self) -> Result<(), SelectorError> {
        loop {
            match self.peek() {
                Some(c) if is_ident_code_point(c) => self.bump(),
                Some('\\') if self.peek_at(1) != Some('\n') => self.escape()?,
                _ => return Ok(()),
            }
        }
    }

    /// [§ 4.3.7 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
    fn escape(&mut self) -> Result<(), SelectorError> {
        let start = self.position;
        self.bump(); // \
        match self.consume() {
            Some(c) if c.is_ascii_hexdigit() => {
                // "Consume as many hex digits as possible, but no more than 5."
                for _ in 0..5 {
                    if !self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                        break;
                    }
                    self.bump();
                }
                // "If the next input code point is whitespace, consume it."
                if self.peek().is_some_and(is_whitespace) {
                    self.bump();
                }
                Ok(())
            }
            Some(_) => Ok(()),
            None => Err(self.error("Expected escape sequence.", start)),
        }
    }

    /// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
    fn looking_at_identifier(&self) -> bool {
        let is_escape = |c: Option<char>, next: Option<char>| c == Some('\\') && next != Some('\n') && next.is_some();
        match self.peek() {
            Some('-') => {
                let second = self.peek_at(1);
                second.is_some_and(|c| is_ident_start_code_point(c) || c == '-')
                    || is_escape(second, self.peek_at(2))
            }
            Some(c) if is_ident_start_code_point(c) => true,
            first @ Some('\\') => is_escape(first, self.peek_at(1)),
            _ => false,
        }
    }

    /// Whether `keyword` (ASCII, case-insensitive) is next and is a whole
    /// word.
    fn looking_at_keyword(&self, keyword: &str) -> bool {
        let rest = &self.text[self.position..];
        rest.get(..keyword.len())
            .is_some_and(|word| word.eq_ignore_ascii_case(keyword))
            && !rest[keyword.len()..]
                .chars()
                .next()
                .is_some_and(is_ident_code_point)
    }

    /// Skip whitespace and `/* */` comments. Returns whether a newline was
    /// skipped.
    fn whitespace(&mut self) -> bool {
        let mut newline = false;
        loop {
            match self.peek() {
                Some(c) if is_whitespace(c) => {
                    newline |= c == '\n';
                    self.bump();
                }
                Some('/') if self.peek_at(1) == Some('*') => {
                    self.position += 2;
                    match self.text[self.position..].find("*/") {
                        Some(i) => self.position += i + 2,
                        None => self.position = self.text.len(),
                    }
                }
                _ => return newline,
            }
        }
    }

    fn expect_done(&mut self) -> Result<(), SelectorError> {
        let _ = self.whitespace();
        match self.peek() {
            None => Ok(()),
            Some(c) => Err(self.error(&format!("unexpected \"{c}\"."), self.position)),
        }
    }

    fn scan_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume and return the next character.
    fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Skip the next character.
    fn bump(&mut self) {
        let _ = self.consume();
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.text[self.position..].chars().next()
    }

    /// Peek at the character `offset` characters ahead.
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.text[self.position..].chars().nth(offset)
    }

    fn span(&self, start: usize, end: usize) -> SourceSpan {
        SourceSpan::new(self.text, self.url, start, end)
    }

    /// A syntax error covering `start` up to the current position (or the
    /// next character, if nothing was consumed since `start`).
    fn error(&self, message: &str, start: usize) -> SelectorError {
        let end = if self.position > start {
            self.position
        } else {
            start + self.text[start..].chars().next().map_or(0, char::len_utf8)
        };
        SelectorError::Syntax {
            message: message.to_owned(),
            span: self.span(start, end),
        }
    }
}

/// [§ 4.3.7 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
///
/// Resolve every escape in an identifier the parser has already validated.
fn unescape(text: &str) -> String {
    let mut value = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        let mut hex = String::new();
        while hex.len() < 6 {
            match chars.peek() {
                Some(&digit) if digit.is_ascii_hexdigit() => {
                    hex.push(digit);
                    let _ = chars.next();
                }
                _ => break,
            }
        }
        if hex.is_empty() {
            value.extend(chars.next());
            continue;
        }
        // "If the next input code point is whitespace, consume it."
        if chars.peek().copied().is_some_and(is_whitespace) {
            let _ = chars.next();
        }
        // "If this number is zero, or is for a surrogate, or is greater than
        // the maximum allowed code point, return U+FFFD."
        let code_point = u32::from_str_radix(&hex, 16).unwrap_or_default();
        value.push(
            char::from_u32(code_point)
                .filter(|&c| c != '\0')
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        );
    }
    value
}

/// Characters that can start a compound selector other than an identifier.
const fn is_simple_selector_start(c: char) -> bool {
    matches!(c, '*' | '[' | '.' | '#' | '%' | ':' | '&' | '|')
}

/// Characters that can start a simple selector after the first one in a
/// compound. Type and universal selectors may only come first.
const fn is_subsequent_selector_start(c: char) -> bool {
    matches!(c, '[' | '.' | '#' | '%' | ':' | '&')
}

/// [§ 4.2 Definitions - whitespace](https://www.w3.org/TR/css-syntax-3/#whitespace)
const fn is_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\t' | ' ' | '\r' | '\x0C')
}

/// [§ 4.2 Definitions - ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
///
/// "A letter, a non-ASCII code point, or U+005F LOW LINE (_)."
const fn is_ident_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// [§ 4.2 Definitions - ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
///
/// "An ident-start code point, a digit, or U+002D HYPHEN-MINUS (-)."
const fn is_ident_code_point(c: char) -> bool {
    is_ident_start_code_point(c) || c.is_ascii_digit() || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_keeps_escapes() {
        let simple = SelectorParser::new(r".a\:b").parse_simple_selector().unwrap();
        assert_eq!(simple, SimpleSelector::class(r"a\:b"));

        let simple = SelectorParser::new(r".\31 0").parse_simple_selector().unwrap();
        assert_eq!(simple, SimpleSelector::class(r"\31 0"));
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r"b\ c"), "b c");
        assert_eq!(unescape(r"\31 0"), "10");
        assert_eq!(unescape(r"a\:b"), "a:b");
        assert_eq!(unescape(r"\0 x"), "\u{FFFD}x");
        assert_eq!(unescape(r"\110000"), "\u{FFFD}");
        assert_eq!(unescape("plain"), "plain");
    }

    #[test]
    fn test_whitespace_reports_newlines() {
        let mut parser = SelectorParser::new(" /* c */\n  a");
        assert!(parser.whitespace());
        assert_eq!(parser.peek(), Some('a'));

        let mut parser = SelectorParser::new("  a");
        assert!(!parser.whitespace());
    }

    #[test]
    fn test_keyword_is_whole_word() {
        let parser = SelectorParser::new("of .a");
        assert!(parser.looking_at_keyword("of"));
        let parser = SelectorParser::new("OF .a");
        assert!(parser.looking_at_keyword("of"));
        let parser = SelectorParser::new("often");
        assert!(!parser.looking_at_keyword("of"));
    }

    #[test]
    fn test_error_span_covers_offending_character() {
        let err = SelectorParser::new("a ) b").parse_selector_list().unwrap_err();
        let span = err.span().unwrap();
        assert_eq!(span.start.offset, 2);
        assert_eq!(span.text, ")");
    }

    #[test]
    fn test_unterminated_comment_ends_input() {
        let list = SelectorParser::new("a /* trailing").parse_selector_list().unwrap();
        assert_eq!(list.components().len(), 1);
    }
}
