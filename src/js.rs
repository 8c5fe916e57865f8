//! JavaScript source rendering helpers
//!
//! Everything the generator splices into test code passes through here, so
//! quoting rules live in one place.

use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;

static PATTERN_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(?:[^/*\\\n]|\\.)(?:[^/\\\n]|\\.)*/[dgimsuvy]*$").unwrap()
});

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// True when `s` is written as a regular-expression literal (`/body/flags`)
///
/// # Examples
/// ```
/// use evgen::js::is_pattern;
/// assert!(is_pattern("/^t-/"));
/// assert!(is_pattern("/foo\\/bar/gi"));
/// assert!(!is_pattern("foo"));
/// assert!(!is_pattern("//"));
/// assert!(!is_pattern("/*a/"));
/// ```
pub fn is_pattern(s: &str) -> bool {
    PATTERN_LITERAL.is_match(s)
}

/// A regular-expression literal, emitted verbatim into generated code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsPattern(String);

impl JsPattern {
    /// Wrap `source` if it is a regular-expression literal
    pub fn parse(source: &str) -> Option<Self> {
        is_pattern(source).then(|| JsPattern(source.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<pattern>.test(<subject>)`
    pub fn test(&self, subject: &str) -> String {
        format!("{}.test({})", self.0, subject)
    }
}

impl fmt::Display for JsPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Single-quoted JS string literal
///
/// # Examples
/// ```
/// use evgen::js::quote;
/// assert_eq!(quote("it's"), r"'it\'s'");
/// ```
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// True for a bare JS identifier
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

/// Member access suffix: `.name` or `['name']`
pub fn property_access(name: &str) -> String {
    if is_identifier(name) {
        format!(".{}", name)
    } else {
        format!("[{}]", quote(name))
    }
}

/// Render a JSON value as JS source
///
/// Strings that are regular-expression literals are emitted unquoted.
pub fn literal(value: &Value) -> String {
    render(value, true)
}

/// Render a JSON value as JS data: every string is quoted
///
/// Used for expected values compared by equality, where a pattern-shaped
/// string can only ever equal the same string.
pub fn data_literal(value: &Value) -> String {
    render(value, false)
}

fn render(value: &Value, patterns: bool) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if patterns && is_pattern(s) => s.clone(),
        Value::String(s) => quote(s),
        Value::Array(items) => format!(
            "[{}]",
            items
                .iter()
                .map(|item| render(item, patterns))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Value::Object(map) if map.is_empty() => "{}".into(),
        Value::Object(map) => {
            let fields: Vec<String> = map
                .iter()
                .map(|(k, v)| {
                    let key = if is_identifier(k) { k.clone() } else { quote(k) };
                    format!("{}: {}", key, render(v, patterns))
                })
                .collect();
            format!("{{ {} }}", fields.join(", "))
        }
    }
}

/// True for values that need deep equality (`toEqual`) rather than `toBe`
pub fn is_composite(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pattern_detection() {
        assert!(is_pattern("/a/"));
        assert!(is_pattern("/^\\d+$/"));
        assert!(is_pattern("/t-is-active/g"));
        assert!(!is_pattern("/a/x"));
        assert!(!is_pattern("a/b/"));
        assert!(!is_pattern("/a/b/"));
        assert!(!is_pattern(""));
        assert!(!is_pattern("/*a/"));
        assert!(!is_pattern("/*/"));
        assert!(is_pattern("/a*/"));
        assert!(is_pattern("/\\*a/"));
    }

    #[test]
    fn test_pattern_test_call() {
        let p = JsPattern::parse("/foo/i").unwrap();
        assert_eq!(p.test("x"), "/foo/i.test(x)");
        assert!(JsPattern::parse("foo").is_none());
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a"), "'a'");
        assert_eq!(quote("a\\b"), r"'a\\b'");
        assert_eq!(quote("line\nbreak"), r"'line\nbreak'");
    }

    #[test]
    fn test_property_access() {
        assert_eq!(property_access("visible"), ".visible");
        assert_eq!(property_access("data-id"), "['data-id']");
    }

    #[test]
    fn test_literal() {
        assert_eq!(literal(&json!(1)), "1");
        assert_eq!(literal(&json!(false)), "false");
        assert_eq!(literal(&json!("x")), "'x'");
        assert_eq!(literal(&json!(["a", 2])), "['a', 2]");
        assert_eq!(
            literal(&json!({"value": 1, "e-key": "/x/"})),
            "{ value: 1, 'e-key': /x/ }"
        );
        assert_eq!(literal(&json!({})), "{}");
    }

    #[test]
    fn test_data_literal_quotes_pattern_strings() {
        assert_eq!(data_literal(&json!(["/a/", "b"])), "['/a/', 'b']");
        assert_eq!(
            data_literal(&json!({"re": "/x/", "n": [1]})),
            "{ re: '/x/', n: [1] }"
        );
    }
}
