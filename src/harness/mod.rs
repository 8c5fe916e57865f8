//! Test-harness statements - the building blocks around event assertions
//!
//! The event-case generator decides *what* to assert; a [`Harness`] decides
//! how a mount, a DOM event or a DOM query is spelled for a given framework.
//! [`VitestHarness`] is the stock implementation:
//! - Vue 2 / Vue 3: `@vue/test-utils` (`mount`, `trigger`, `find`)
//! - React: `@testing-library/react` (`render`, `fireEvent`)

mod react;
mod vue;

use crate::framework::{Framework, TestRunner};
use crate::js::{is_pattern, literal, quote};
use crate::model::FieldMeta;
use indexmap::IndexMap;
use serde_json::Value;

/// Props handed to the mount builder
#[derive(Debug, Clone, Default)]
pub struct MountProps {
    pub props: IndexMap<String, Value>,
    /// Handler-binding fragment, appended after the props
    pub events: Option<String>,
}

/// Markup placed around or inside the mounted component
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtraCode<'a> {
    pub content: Option<&'a str>,
    pub wrapper: Option<&'a str>,
}

/// A DOM event to dispatch
#[derive(Debug, Clone, Copy)]
pub struct FireEvent<'a> {
    /// Selector, `self`, `document` or `body`
    pub dom: &'a str,
    pub event: &'a str,
    pub component: &'a str,
}

/// Statement builders used by the event-case generator
pub trait Harness {
    /// Expression creating a mock handler
    fn mock_fn(&self) -> &str;

    /// Component markup with props and handlers attached
    fn mount_code(
        &self,
        framework: Framework,
        component: &str,
        props: &MountProps,
        extra: &ExtraCode<'_>,
    ) -> String;

    /// Statement rendering `mount_code` into a queryable wrapper
    fn wrapper_code(&self, framework: Framework, mount_code: &str) -> String;

    fn fire_event_code(&self, framework: Framework, fire: &FireEvent<'_>) -> String;

    /// Assert `selector` matches something
    fn dom_truthy(&self, framework: Framework, selector: &str) -> String;

    /// Assert `selector` matches exactly `count` elements
    fn dom_count(&self, framework: Framework, selector: &str, count: u64) -> String;

    /// Remove leftover elements (popups, overlays) from the document
    fn cleanup_code(&self, selectors: &[String]) -> String;

    /// Test title when a case has no description
    fn default_title(&self, field: &FieldMeta) -> String;
}

/// Vitest (or Jest) with the usual testing libraries for each framework
#[derive(Debug, Clone, Copy, Default)]
pub struct VitestHarness {
    pub runner: TestRunner,
}

impl VitestHarness {
    pub fn new(runner: TestRunner) -> Self {
        Self { runner }
    }
}

impl Harness for VitestHarness {
    fn mock_fn(&self) -> &str {
        self.runner.mock_fn()
    }

    fn mount_code(
        &self,
        _framework: Framework,
        component: &str,
        props: &MountProps,
        extra: &ExtraCode<'_>,
    ) -> String {
        jsx_element(component, props, extra)
    }

    fn wrapper_code(&self, framework: Framework, mount_code: &str) -> String {
        match framework {
            Framework::Vue2 | Framework::Vue3 => vue::wrapper(framework, mount_code),
            Framework::React => react::wrapper(mount_code),
        }
    }

    fn fire_event_code(&self, framework: Framework, fire: &FireEvent<'_>) -> String {
        if framework.is_vue() {
            vue::fire_event(fire)
        } else {
            react::fire_event(fire)
        }
    }

    fn dom_truthy(&self, framework: Framework, selector: &str) -> String {
        if framework.is_vue() {
            vue::dom_truthy(selector)
        } else {
            react::dom_truthy(selector)
        }
    }

    fn dom_count(&self, framework: Framework, selector: &str, count: u64) -> String {
        if framework.is_vue() {
            vue::dom_count(selector, count)
        } else {
            react::dom_count(selector, count)
        }
    }

    fn cleanup_code(&self, selectors: &[String]) -> String {
        selectors
            .iter()
            .map(|s| {
                format!(
                    "document.querySelectorAll({}).forEach((node) => node.remove());",
                    quote(s)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn default_title(&self, field: &FieldMeta) -> String {
        quote(&format!("props.{} works fine", field.field_name))
    }
}

/// `<Component a="x" b={1} ...>` with optional children and wrapper element
pub fn jsx_element(component: &str, props: &MountProps, extra: &ExtraCode<'_>) -> String {
    let mut attrs: Vec<String> = props
        .props
        .iter()
        .map(|(name, value)| jsx_attribute(name, value))
        .collect();
    if let Some(events) = &props.events {
        attrs.push(events.clone());
    }

    let open = if attrs.is_empty() {
        component.to_string()
    } else {
        format!("{} {}", component, attrs.join(" "))
    };
    let element = match extra.content {
        Some(content) => format!("<{}>{}</{}>", open, content, component),
        None => format!("<{} />", open),
    };

    match extra.wrapper {
        Some(wrapper) => {
            let tag = wrapper.split_whitespace().next().unwrap_or(wrapper);
            format!("<{}>{}</{}>", wrapper, element, tag)
        }
        None => element,
    }
}

fn jsx_attribute(name: &str, value: &Value) -> String {
    match value {
        Value::String(s) if !s.contains('"') && !is_pattern(s) => format!("{}=\"{}\"", name, s),
        _ => format!("{}={{{}}}", name, literal(value)),
    }
}
