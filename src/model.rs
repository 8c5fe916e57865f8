//! Event test specification types - the core data model
//!
//! An [`EventTestSpec`] describes how one component field's events should be
//! exercised. It comes in two shapes, decided by the `event` key:
//!
//! ## Bound-event form
//!
//! ```yaml
//! event:
//!   click:
//!     arguments: ['foo', { visible: true }]
//! ```
//!
//! ## Declared-list form
//!
//! ```yaml
//! event:
//!   - props: { loading: false }
//!     description: shows the icon after click
//!     expect:
//!       - trigger: click
//!         triggerDom: .t-button
//!         exist: ['.t-icon', { '.t-tag': 2 }]
//!         event:
//!           change: ['/^t-/', ~]
//!         clearElementAtEnd: .t-popup
//! ```
//!
//! Raw documents are read into `serde_json::Value` (key order preserved) and
//! then classified. Classification never fails: shapes the generator cannot
//! use become [`EventShape::Unrecognized`] or empty collections.

use crate::error::{Error, Result};
use crate::js::JsPattern;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Trigger target meaning "the mounted component's root element"
pub const ROOT_DOM: &str = "self";

/// Metadata for the API field that owns an event test
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldMeta {
    /// Prop or event name as declared in the component API
    pub field_name: String,

    /// Declared type names; the first entry decides boolean-ness
    #[serde(default)]
    pub field_type_text: Vec<String>,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_desc: Option<String>,
}

impl FieldMeta {
    pub fn new(field_name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            field_type_text: vec![field_type.into()],
            field_desc: None,
        }
    }

    /// Boolean fields get enabled by default in declared-list cases
    pub fn is_boolean(&self) -> bool {
        self.field_type_text
            .first()
            .is_some_and(|t| t == "Boolean")
    }
}

/// One event test for one component field
#[derive(Debug, Clone, PartialEq)]
pub struct EventTestSpec {
    pub event: EventShape,
    /// JSX children placed inside the mounted component
    pub content: Option<String>,
    /// Tag of an element wrapped around the mounted component
    pub wrapper: Option<String>,
}

/// Which form the `event` key takes
#[derive(Debug, Clone, PartialEq)]
pub enum EventShape {
    /// Event name → expected arguments, in source order
    Bound(IndexMap<String, BoundEvent>),
    /// Ordered test cases
    Declared(Vec<EventCase>),
    /// Anything else; generates nothing
    Unrecognized,
}

/// Expected arguments for a bound event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundEvent {
    pub arguments: Vec<ArgumentDescriptor>,
}

/// One row of the declared-list form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventCase {
    /// Extra mount-time props
    pub props: IndexMap<String, Value>,
    pub expect: Vec<ExpectationStep>,
    pub description: Option<String>,
}

/// One trigger-and-assert unit inside a case
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpectationStep {
    pub trigger: Option<String>,
    pub trigger_dom: Option<String>,
    pub exist: Vec<ExistAssertion>,
    /// Event name → expected call arguments
    pub event: IndexMap<String, Vec<ArgumentDescriptor>>,
    /// Selectors removed from the document after the step
    pub clear_element_at_end: Vec<String>,
}

/// Post-trigger DOM assertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExistAssertion {
    /// Selector matches something
    Present(String),
    /// Selector matches exactly `count` elements
    Count { selector: String, count: u64 },
}

/// Expected value of one positional call argument
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentDescriptor {
    /// Position is not asserted
    Absent,
    /// String, number, boolean or array compared by equality
    Literal(Value),
    /// Regular-expression literal tested against the argument
    Pattern(JsPattern),
    /// Only the listed properties are asserted
    PartialObject(IndexMap<String, PropertyMatcher>),
}

/// Expectation for one property of a partial-object argument
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyMatcher {
    /// Written as literal `true`: the property must be truthy
    Truthy,
    Pattern(JsPattern),
    Equals(Value),
}

impl EventTestSpec {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: Value =
            serde_norway::from_str(yaml).map_err(|e| Error::SpecParse(e.to_string()))?;
        Ok(Self::from_value(&value))
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| Error::SpecParse(e.to_string()))?;
        Ok(Self::from_value(&value))
    }

    /// Classify a raw test object
    pub fn from_value(value: &Value) -> Self {
        let event = match value.get("event") {
            Some(Value::Object(map)) => EventShape::Bound(
                map.iter()
                    .map(|(name, v)| (name.clone(), BoundEvent::from_value(v)))
                    .collect(),
            ),
            Some(Value::Array(cases)) => {
                EventShape::Declared(cases.iter().map(EventCase::from_value).collect())
            }
            _ => EventShape::Unrecognized,
        };

        Self {
            event,
            content: string_field(value, "content"),
            wrapper: string_field(value, "wrapper"),
        }
    }
}

impl<'de> Deserialize<'de> for EventTestSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl JsonSchema for EventTestSpec {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "EventTestSpec".into()
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "object",
            "description": "Event test: `event` is either a map of event name to { arguments } or a list of cases",
            "properties": {
                "event": {
                    "oneOf": [
                        {
                            "type": "object",
                            "additionalProperties": {
                                "type": "object",
                                "properties": { "arguments": { "type": "array" } }
                            }
                        },
                        {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "props": { "type": "object" },
                                    "description": { "type": "string" },
                                    "expect": {
                                        "type": "array",
                                        "items": {
                                            "type": "object",
                                            "properties": {
                                                "trigger": { "type": "string" },
                                                "triggerDom": { "type": "string" },
                                                "exist": {},
                                                "event": { "type": "object" },
                                                "clearElementAtEnd": {}
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    ]
                },
                "content": { "type": "string" },
                "wrapper": { "type": "string" }
            }
        })
    }
}

impl BoundEvent {
    fn from_value(value: &Value) -> Self {
        let arguments = match value {
            Value::Array(_) => argument_list(Some(value)),
            _ => argument_list(value.get("arguments")),
        };
        Self { arguments }
    }
}

impl EventCase {
    fn from_value(value: &Value) -> Self {
        let props = value
            .get("props")
            .and_then(Value::as_object)
            .map(|map| map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default();

        let expect = match value.get("expect") {
            Some(Value::Array(steps)) => steps.iter().map(ExpectationStep::from_value).collect(),
            Some(step @ Value::Object(_)) => vec![ExpectationStep::from_value(step)],
            _ => Vec::new(),
        };

        Self {
            props,
            expect,
            description: string_field(value, "description"),
        }
    }
}

impl ExpectationStep {
    fn from_value(value: &Value) -> Self {
        let event = value
            .get("event")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .map(|(name, args)| (name.clone(), argument_list(Some(args))))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            trigger: string_field(value, "trigger"),
            trigger_dom: string_field(value, "triggerDom"),
            exist: value.get("exist").map(parse_exist).unwrap_or_default(),
            event,
            clear_element_at_end: value
                .get("clearElementAtEnd")
                .map(parse_selectors)
                .unwrap_or_default(),
        }
    }

    /// Where the trigger fires; the component root unless overridden
    pub fn trigger_target(&self) -> &str {
        self.trigger_dom.as_deref().unwrap_or(ROOT_DOM)
    }

    /// True when the step asserts or does nothing at all
    pub fn is_empty(&self) -> bool {
        self.trigger.is_none()
            && self.exist.is_empty()
            && self.event.is_empty()
            && self.clear_element_at_end.is_empty()
    }
}

impl ArgumentDescriptor {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => ArgumentDescriptor::Absent,
            Value::String(s) => JsPattern::parse(s)
                .map(ArgumentDescriptor::Pattern)
                .unwrap_or_else(|| ArgumentDescriptor::Literal(value.clone())),
            Value::Object(map) => ArgumentDescriptor::PartialObject(
                map.iter()
                    .map(|(k, v)| (k.clone(), PropertyMatcher::from_value(v)))
                    .collect(),
            ),
            _ => ArgumentDescriptor::Literal(value.clone()),
        }
    }
}

impl PropertyMatcher {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(true) => PropertyMatcher::Truthy,
            Value::String(s) => JsPattern::parse(s)
                .map(PropertyMatcher::Pattern)
                .unwrap_or_else(|| PropertyMatcher::Equals(value.clone())),
            _ => PropertyMatcher::Equals(value.clone()),
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(String::from)
}

fn argument_list(value: Option<&Value>) -> Vec<ArgumentDescriptor> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(ArgumentDescriptor::from_value).collect(),
        Some(single) => vec![ArgumentDescriptor::from_value(single)],
    }
}

fn parse_exist(value: &Value) -> Vec<ExistAssertion> {
    match value {
        Value::String(selector) => vec![ExistAssertion::Present(selector.clone())],
        Value::Object(counts) => counts
            .iter()
            .filter_map(|(selector, count)| {
                count.as_u64().map(|count| ExistAssertion::Count {
                    selector: selector.clone(),
                    count,
                })
            })
            .collect(),
        Value::Array(items) => items.iter().flat_map(parse_exist).collect(),
        _ => Vec::new(),
    }
}

fn parse_selectors(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bound_form_keeps_key_order() {
        let spec = EventTestSpec::from_value(&json!({
            "event": { "focus": {}, "blur": { "arguments": ["x"] } }
        }));
        match spec.event {
            EventShape::Bound(events) => {
                let names: Vec<_> = events.keys().cloned().collect();
                assert_eq!(names, vec!["focus", "blur"]);
                assert!(events["focus"].arguments.is_empty());
                assert_eq!(events["blur"].arguments.len(), 1);
            }
            other => panic!("expected bound form, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_shape() {
        let spec = EventTestSpec::from_value(&json!({ "event": "click" }));
        assert_eq!(spec.event, EventShape::Unrecognized);
        let spec = EventTestSpec::from_value(&json!({}));
        assert_eq!(spec.event, EventShape::Unrecognized);
    }

    #[test]
    fn test_argument_classification() {
        assert_eq!(
            ArgumentDescriptor::from_value(&json!(null)),
            ArgumentDescriptor::Absent
        );
        assert!(matches!(
            ArgumentDescriptor::from_value(&json!("/^t-/")),
            ArgumentDescriptor::Pattern(_)
        ));
        assert_eq!(
            ArgumentDescriptor::from_value(&json!("foo")),
            ArgumentDescriptor::Literal(json!("foo"))
        );
        assert_eq!(
            ArgumentDescriptor::from_value(&json!([1, 2])),
            ArgumentDescriptor::Literal(json!([1, 2]))
        );
        match ArgumentDescriptor::from_value(&json!({ "visible": true, "value": "/a/", "n": 1 })) {
            ArgumentDescriptor::PartialObject(props) => {
                assert_eq!(props["visible"], PropertyMatcher::Truthy);
                assert!(matches!(props["value"], PropertyMatcher::Pattern(_)));
                assert_eq!(props["n"], PropertyMatcher::Equals(json!(1)));
            }
            other => panic!("expected partial object, got {:?}", other),
        }
    }

    #[test]
    fn test_exist_normalization() {
        let step = ExpectationStep::from_value(&json!({
            "trigger": "click",
            "exist": [".a", { ".b": 2, ".c": "x" }]
        }));
        assert_eq!(
            step.exist,
            vec![
                ExistAssertion::Present(".a".into()),
                ExistAssertion::Count {
                    selector: ".b".into(),
                    count: 2
                },
            ]
        );
        assert_eq!(step.trigger_target(), ROOT_DOM);

        let scalar = ExpectationStep::from_value(&json!({ "exist": ".only" }));
        assert_eq!(scalar.exist, vec![ExistAssertion::Present(".only".into())]);
    }

    #[test]
    fn test_declared_case_fields() {
        let spec = EventTestSpec::from_yaml(
            r#"
event:
  - props: { loading: true }
    description: shows spinner
    expect:
      - trigger: click
        triggerDom: .t-button
        event:
          click: ~
        clearElementAtEnd: [.t-popup, .t-tooltip]
"#,
        )
        .unwrap();
        let EventShape::Declared(cases) = spec.event else {
            panic!("expected declared form");
        };
        assert_eq!(cases.len(), 1);
        let case = &cases[0];
        assert_eq!(case.props["loading"], json!(true));
        assert_eq!(case.description.as_deref(), Some("shows spinner"));
        let step = &case.expect[0];
        assert_eq!(step.trigger_target(), ".t-button");
        assert!(step.event["click"].is_empty());
        assert_eq!(step.clear_element_at_end.len(), 2);
    }

    #[test]
    fn test_boolean_field() {
        assert!(FieldMeta::new("disabled", "Boolean").is_boolean());
        assert!(!FieldMeta::new("value", "String").is_boolean());
        assert!(!FieldMeta::default().is_boolean());
    }
}
