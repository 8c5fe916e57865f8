//! Shared utility functions
//!
//! Case conversion for event names. Event names arrive in whatever shape the
//! component API author wrote (`mouseEnter`, `mouse-enter`, `update:value`);
//! punctuation is treated as a word break before converting.

use convert_case::{Case, Casing};

/// Any character that cannot appear in an identifier becomes a word break
fn separate(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect()
}

/// Convert to PascalCase
///
/// # Examples
/// ```
/// use evgen::util::to_pascal_case;
/// assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(to_pascal_case("mouseEnter"), "MouseEnter");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    separate(s).to_case(Case::Pascal)
}

/// Convert to camelCase
///
/// # Examples
/// ```
/// use evgen::util::to_camel_case;
/// assert_eq!(to_camel_case("mouse-enter"), "mouseEnter");
/// assert_eq!(to_camel_case("click"), "click");
/// ```
pub fn to_camel_case(s: &str) -> String {
    separate(s).to_case(Case::Camel)
}

/// Convert to kebab-case
///
/// # Examples
/// ```
/// use evgen::util::to_kebab_case;
/// assert_eq!(to_kebab_case("visibleChange"), "visible-change");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    separate(s).to_case(Case::Kebab)
}

/// Indent every non-empty line of `text` by `width` spaces
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
