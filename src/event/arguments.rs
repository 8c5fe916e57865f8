//! Argument matching - assertions on a mock's recorded call arguments
//!
//! Only the first recorded call (`calls[0]`) is ever inspected.

use crate::js::{data_literal, is_composite, property_access, quote, JsPattern};
use crate::model::{ArgumentDescriptor, PropertyMatcher};
use serde_json::Value;

/// `<handler>.mock.calls[0][<index>]`
fn recorded_argument(handler: &str, index: usize) -> String {
    format!("{}.mock.calls[0][{}]", handler, index)
}

fn truthy(actual: &str) -> String {
    format!("expect({}).toBeTruthy();", actual)
}

fn pattern_match(pattern: &JsPattern, actual: &str) -> String {
    format!("expect({}).toBeTruthy();", pattern.test(actual))
}

fn equality(actual: &str, expected: &Value) -> String {
    match expected {
        Value::String(s) => format!("expect({}).toBe({});", actual, quote(s)),
        v if is_composite(v) => format!("expect({}).toEqual({});", actual, data_literal(v)),
        v => format!("expect({}).toBe({});", actual, data_literal(v)),
    }
}

/// Assertion for one declared argument; `None` for [`ArgumentDescriptor::Absent`]
/// and for partial objects with no properties
pub fn match_argument(expected: &ArgumentDescriptor, index: usize, handler: &str) -> Option<String> {
    let actual = recorded_argument(handler, index);
    match expected {
        ArgumentDescriptor::Absent => None,
        ArgumentDescriptor::Literal(value) => Some(equality(&actual, value)),
        ArgumentDescriptor::Pattern(pattern) => Some(pattern_match(pattern, &actual)),
        ArgumentDescriptor::PartialObject(props) if props.is_empty() => None,
        ArgumentDescriptor::PartialObject(props) => Some(
            props
                .iter()
                .map(|(name, matcher)| {
                    let actual = format!("{}{}", actual, property_access(name));
                    match matcher {
                        PropertyMatcher::Truthy => truthy(&actual),
                        PropertyMatcher::Pattern(pattern) => pattern_match(pattern, &actual),
                        PropertyMatcher::Equals(value) => equality(&actual, value),
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
        ),
    }
}

/// Assertions for every declared argument, by position
pub fn match_arguments(arguments: &[ArgumentDescriptor], handler: &str) -> Vec<String> {
    arguments
        .iter()
        .enumerate()
        .filter_map(|(index, expected)| match_argument(expected, index, handler))
        .collect()
}
