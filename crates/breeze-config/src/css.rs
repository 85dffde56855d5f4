//! CSS token checks for selectors, property names and values.
//!
//! Overrides are spliced verbatim into the rules the generator emits, so a
//! selector or value that smuggles in a block or a `;` would corrupt the
//! output. The checks here run the text through `cssparser`'s tokenizer and
//! reject anything that cannot stand on its own inside a single rule.
//!
//! This is a tokenizer-level check, not a full selector grammar: `:where(..)`,
//! attribute selectors and leading combinators (`> ul > li`) are all fine.

use cssparser::{Parser, ParserInput, Token};

/// A CSS selector key from a theme override tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Selector(String);

impl Selector {
    /// Parses and checks a selector.
    ///
    /// Returns a message describing the problem when the selector is empty or
    /// contains tokens that do not belong in a selector.
    pub fn parse(text: &str) -> Result<Self, String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err("selector is empty".to_string());
        }

        let mut input = ParserInput::new(trimmed);
        let mut parser = Parser::new(&mut input);
        while let Ok(token) = parser.next_including_whitespace() {
            if let Some(problem) = forbidden(token) {
                return Err(format!("selector '{}' contains {}", trimmed, problem));
            }
        }

        Ok(Selector(trimmed.to_string()))
    }

    /// The selector text, trimmed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the pseudo-element name if the selector targets one.
    ///
    /// Only the CSS3 double-colon form is recognized, plus the legacy
    /// single-colon `:before`/`:after`.
    ///
    /// ```rust
    /// use breeze_config::Selector;
    ///
    /// let sel = Selector::parse("code::before").unwrap();
    /// assert_eq!(sel.pseudo_element().as_deref(), Some("before"));
    /// assert_eq!(Selector::parse("pre code").unwrap().pseudo_element(), None);
    /// ```
    pub fn pseudo_element(&self) -> Option<String> {
        let mut input = ParserInput::new(&self.0);
        let mut parser = Parser::new(&mut input);
        let mut colons = 0;
        let mut found = None;

        while let Ok(token) = parser.next_including_whitespace() {
            match token {
                Token::Colon => colons += 1,
                Token::Ident(name) if colons == 2 => {
                    found = Some(name.as_ref().to_ascii_lowercase());
                    colons = 0;
                }
                Token::Ident(name)
                    if colons == 1
                        && (name.eq_ignore_ascii_case("before")
                            || name.eq_ignore_ascii_case("after")) =>
                {
                    found = Some(name.as_ref().to_ascii_lowercase());
                    colons = 0;
                }
                _ => colons = 0,
            }
        }

        found
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for Selector {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Selector {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Selector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Normalizes a property name to its kebab-case CSS form.
///
/// `whiteSpace` becomes `white-space`. Names that are already kebab-case and
/// custom properties (`--tw-prose-body`) are returned unchanged.
pub fn normalize_property(name: &str) -> Result<String, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("property name is empty".to_string());
    }
    if name.starts_with("--") {
        return Ok(name.to_string());
    }

    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            out.push(ch);
        } else {
            return Err(format!("property name '{}' contains '{}'", name, ch));
        }
    }
    Ok(out)
}

/// Checks that a property value can sit inside a single declaration.
pub fn check_value(value: &str) -> Result<(), String> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    while let Ok(token) = parser.next_including_whitespace() {
        if let Some(problem) = forbidden(token) {
            return Err(format!("value '{}' contains {}", value, problem));
        }
    }
    Ok(())
}

fn forbidden(token: &Token<'_>) -> Option<&'static str> {
    match token {
        Token::CurlyBracketBlock => Some("a '{' block"),
        Token::Semicolon => Some("';'"),
        Token::CloseCurlyBracket | Token::CloseParenthesis | Token::CloseSquareBracket => {
            Some("an unbalanced closing bracket")
        }
        Token::BadString(_) => Some("an unterminated string"),
        Token::BadUrl(_) => Some("a malformed url()"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Selector
    // =========================================================================

    #[test]
    fn test_selector_simple() {
        let sel = Selector::parse("strong").unwrap();
        assert_eq!(sel.as_str(), "strong");
    }

    #[test]
    fn test_selector_trims() {
        let sel = Selector::parse("  pre code ").unwrap();
        assert_eq!(sel.as_str(), "pre code");
    }

    #[test]
    fn test_selector_complex_forms_accepted() {
        for text in [
            "ol[type=\"A\"]",
            "ul > li::marker",
            "> ul > li > *:first-child",
            "thead th:first-child",
            ":where(code):not(pre code)",
            "a, a:hover",
        ] {
            assert!(Selector::parse(text).is_ok(), "{text} should parse");
        }
    }

    #[test]
    fn test_selector_empty_rejected() {
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse("   ").is_err());
    }

    #[test]
    fn test_selector_with_block_rejected() {
        let err = Selector::parse("a { color: red }").unwrap_err();
        assert!(err.contains("block"));
    }

    #[test]
    fn test_selector_with_semicolon_rejected() {
        assert!(Selector::parse("a; b").is_err());
    }

    #[test]
    fn test_selector_unbalanced_rejected() {
        assert!(Selector::parse("a)").is_err());
    }

    #[test]
    fn test_pseudo_element_double_colon() {
        let sel = Selector::parse("code::after").unwrap();
        assert_eq!(sel.pseudo_element().as_deref(), Some("after"));
    }

    #[test]
    fn test_pseudo_element_legacy_single_colon() {
        let sel = Selector::parse("q:before").unwrap();
        assert_eq!(sel.pseudo_element().as_deref(), Some("before"));
    }

    #[test]
    fn test_pseudo_class_is_not_pseudo_element() {
        let sel = Selector::parse("a:hover").unwrap();
        assert_eq!(sel.pseudo_element(), None);
    }

    #[test]
    fn test_pseudo_element_marker() {
        let sel = Selector::parse("ol > li::marker").unwrap();
        assert_eq!(sel.pseudo_element().as_deref(), Some("marker"));
    }

    // =========================================================================
    // Properties and values
    // =========================================================================

    #[test]
    fn test_normalize_camel_case() {
        assert_eq!(normalize_property("whiteSpace").unwrap(), "white-space");
        assert_eq!(
            normalize_property("borderTopLeftRadius").unwrap(),
            "border-top-left-radius"
        );
    }

    #[test]
    fn test_normalize_keeps_kebab_and_custom() {
        assert_eq!(normalize_property("white-space").unwrap(), "white-space");
        assert_eq!(
            normalize_property("--tw-prose-body").unwrap(),
            "--tw-prose-body"
        );
    }

    #[test]
    fn test_normalize_rejects_junk() {
        assert!(normalize_property("").is_err());
        assert!(normalize_property("color:red").is_err());
    }

    #[test]
    fn test_check_value_accepts_common_values() {
        for value in ["none", "pre-wrap", "\"`\"", "var(--tw-prose-code)", "0.875em", "1px solid"] {
            assert!(check_value(value).is_ok(), "{value} should pass");
        }
    }

    #[test]
    fn test_check_value_rejects_declaration_breakout() {
        assert!(check_value("red; background: blue").is_err());
        assert!(check_value("red } a { color: blue").is_err());
    }

    #[test]
    fn test_check_value_rejects_unterminated_string() {
        assert!(check_value("\"abc\ndef").is_err());
    }
}
