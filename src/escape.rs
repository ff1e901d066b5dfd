//! Escaping rules for identifiers and string literals.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// A letter followed by letters, digits or underscores.
static IDENTIFIER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{L}[\p{L}\d_]*$").unwrap());

/// Dotted function names such as `apoc.coll.sum`.
static FUNCTION_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}[\p{L}\d_]*(\.\p{L}[\p{L}\d_]*)*$").unwrap());

pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_RE.is_match(name)
}

pub fn is_valid_function_name(name: &str) -> bool {
    FUNCTION_NAME_RE.is_match(name)
}

/// Renders a variable, property key or map key.
///
/// Valid identifiers are emitted bare; anything else is wrapped in
/// backticks with embedded backticks doubled.
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    if is_valid_identifier(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("`{}`", name.replace('`', "``")))
    }
}

/// Renders the body of a string literal quoted with `quote`.
pub fn escape_string(value: &str, quote: char) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push(quote);
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\u{8}' => escaped.push_str("\\b"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{c}' => escaped.push_str("\\f"),
            c if c == quote => {
                escaped.push('\\');
                escaped.push(c);
            }
            c => escaped.push(c),
        }
    }
    escaped.push(quote);
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("n", "n" ; "single letter")]
    #[test_case("person_1", "person_1" ; "letters digits underscore")]
    #[test_case("Größe", "Größe" ; "unicode letters")]
    #[test_case("1abc", "`1abc`" ; "leading digit")]
    #[test_case("_private", "`_private`" ; "leading underscore")]
    #[test_case("first name", "`first name`" ; "space")]
    #[test_case("a`b", "`a``b`" ; "embedded backtick")]
    #[test_case("", "``" ; "empty")]
    fn test_escape_identifier(input: &str, expected: &str) {
        assert_eq!(escape_identifier(input), expected);
    }

    #[test_case("hello", '\'', "'hello'" ; "plain")]
    #[test_case("it's", '\'', r"'it\'s'" ; "single quote")]
    #[test_case("say \"hi\"", '\'', r#"'say "hi"'"# ; "double quote kept in single quoted")]
    #[test_case("say \"hi\"", '"', r#""say \"hi\"""# ; "double quote escaped")]
    #[test_case("a\\b", '\'', r"'a\\b'" ; "backslash")]
    #[test_case("line\nbreak\ttab", '\'', r"'line\nbreak\ttab'" ; "control characters")]
    #[test_case("\u{8}\u{c}\r", '\'', r"'\b\f\r'" ; "backspace form feed return")]
    fn test_escape_string(input: &str, quote: char, expected: &str) {
        assert_eq!(escape_string(input, quote), expected);
    }

    #[test]
    fn test_function_names() {
        assert!(is_valid_function_name("count"));
        assert!(is_valid_function_name("apoc.coll.sum"));
        assert!(!is_valid_function_name("apoc..sum"));
        assert!(!is_valid_function_name("drop(x)"));
        assert!(!is_valid_function_name("%s"));
    }
}
