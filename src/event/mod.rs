//! Event-case generation - turn an [`EventTestSpec`] into test statements
//!
//! Output is an ordered list of non-empty source fragments for one component
//! field. Joined with newlines they form a run of `it(...)` blocks that the
//! caller drops into a `describe` (see [`crate::suite`]).
//!
//! - Bound-event form: one test for the *first* declared event, bound to a
//!   single mock named `fn`.
//! - Declared-list form: one test per case, one mock per `(event, step)` pair
//!   (`onClickFn`, `onClickFn1`, ...).

mod arguments;
mod assertions;
mod binder;
mod naming;

pub use arguments::{match_argument, match_arguments};
pub use assertions::compose;
pub use binder::bind;
pub use naming::{event_prop_name, handler_name, listener_key, BOUND_HANDLER};

use crate::framework::{Framework, FrameworkIdiom, TestRunner};
use crate::harness::{ExtraCode, FireEvent, Harness, MountProps, VitestHarness};
use crate::js::quote;
use crate::model::{BoundEvent, EventCase, EventShape, EventTestSpec, FieldMeta, ROOT_DOM};
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashSet;

/// Generate event test statements with the stock Vitest harness
pub fn generate(
    spec: &EventTestSpec,
    field: &FieldMeta,
    framework: Framework,
    component: &str,
) -> Vec<String> {
    EventCaseGenerator::new(TestRunner::Vitest).generate(spec, field, framework, component)
}

/// Event-case generator over a [`Harness`]
#[derive(Debug, Clone)]
pub struct EventCaseGenerator<H = VitestHarness> {
    harness: H,
}

impl EventCaseGenerator<VitestHarness> {
    pub fn new(runner: TestRunner) -> Self {
        Self {
            harness: VitestHarness::new(runner),
        }
    }
}

impl<H: Harness> EventCaseGenerator<H> {
    pub fn with_harness(harness: H) -> Self {
        Self { harness }
    }

    pub fn harness(&self) -> &H {
        &self.harness
    }

    /// Statements for one spec; empty when the `event` shape is unusable
    pub fn generate(
        &self,
        spec: &EventTestSpec,
        field: &FieldMeta,
        framework: Framework,
        component: &str,
    ) -> Vec<String> {
        let idiom = framework.idiom();
        let extra = ExtraCode {
            content: spec.content.as_deref(),
            wrapper: spec.wrapper.as_deref(),
        };

        let lines = match &spec.event {
            EventShape::Bound(events) => match events.first() {
                Some((event, bound)) => {
                    self.bound_case(event, bound, idiom, framework, component, &extra)
                }
                None => Vec::new(),
            },
            EventShape::Declared(cases) => cases
                .iter()
                .flat_map(|case| self.declared_case(case, field, idiom, framework, component, &extra))
                .collect(),
            EventShape::Unrecognized => Vec::new(),
        };

        lines.into_iter().filter(|l| !l.trim().is_empty()).collect()
    }

    fn bound_case(
        &self,
        event: &str,
        bound: &BoundEvent,
        idiom: FrameworkIdiom,
        framework: Framework,
        component: &str,
        extra: &ExtraCode<'_>,
    ) -> Vec<String> {
        let props = MountProps {
            props: IndexMap::new(),
            events: bind(idiom, &[(event.to_string(), BOUND_HANDLER.to_string())]),
        };
        let mount = self.harness.mount_code(framework, component, &props, extra);
        let title = quote(&format!("{} Event: {}", component, event));

        let mut lines = vec![
            test_declaration(&title, framework),
            format!("const {} = {};", BOUND_HANDLER, self.harness.mock_fn()),
            self.harness.wrapper_code(framework, &mount),
            self.harness.fire_event_code(
                framework,
                &FireEvent {
                    dom: ROOT_DOM,
                    event,
                    component,
                },
            ),
            format!("expect({}).toHaveBeenCalled();", BOUND_HANDLER),
        ];
        lines.extend(match_arguments(&bound.arguments, BOUND_HANDLER));
        lines.push("});".into());
        lines
    }

    fn declared_case(
        &self,
        case: &EventCase,
        field: &FieldMeta,
        idiom: FrameworkIdiom,
        framework: Framework,
        component: &str,
        extra: &ExtraCode<'_>,
    ) -> Vec<String> {
        let mut declared = HashSet::new();
        let handlers: Vec<(String, String)> = case
            .expect
            .iter()
            .enumerate()
            .flat_map(|(index, step)| {
                step.event
                    .keys()
                    .map(move |event| (event.clone(), handler_name(event, index)))
            })
            .filter(|(_, handler)| declared.insert(handler.clone()))
            .collect();

        let mut props = case.props.clone();
        if field.is_boolean() && !props.contains_key(&field.field_name) {
            props.insert(field.field_name.clone(), Value::Bool(true));
        }
        let mount_props = MountProps {
            props,
            events: bind(idiom, &handlers),
        };
        let mount = self
            .harness
            .mount_code(framework, component, &mount_props, extra);

        let title = match &case.description {
            Some(description) => quote(&format!("props.{}: {}", field.field_name, description)),
            None => self.harness.default_title(field),
        };

        let mocks = handlers
            .iter()
            .map(|(_, handler)| format!("const {} = {};", handler, self.harness.mock_fn()))
            .collect::<Vec<_>>()
            .join("\n");

        let steps = case
            .expect
            .iter()
            .enumerate()
            .map(|(index, step)| compose(step, index, framework, component, &self.harness))
            .filter(|code| !code.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        vec![
            test_declaration(&title, framework),
            mocks,
            self.harness.wrapper_code(framework, &mount),
            steps,
            "});".into(),
        ]
    }
}

/// `it('<title>', () => {`, async for Vue
fn test_declaration(title: &str, framework: Framework) -> String {
    if framework.is_vue() {
        format!("it({}, async () => {{", title)
    } else {
        format!("it({}, () => {{", title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn field() -> FieldMeta {
        FieldMeta::new("disabled", "Boolean")
    }

    #[test]
    fn test_bound_event_react() {
        let spec = EventTestSpec::from_yaml("event:\n  click:\n    arguments: ['foo']\n").unwrap();
        let lines = generate(&spec, &field(), Framework::React, "Button");
        assert_eq!(
            lines,
            vec![
                "it('Button Event: click', () => {",
                "const fn = vi.fn();",
                "const { container } = render(<Button onClick={fn} />);",
                "fireEvent.click(container.firstChild);",
                "expect(fn).toHaveBeenCalled();",
                "expect(fn.mock.calls[0][0]).toBe('foo');",
                "});",
            ]
        );
    }

    #[test]
    fn test_bound_event_vue2_uses_event_map() {
        let spec = EventTestSpec::from_yaml("event:\n  mouseEnter: {}\n").unwrap();
        let lines = generate(&spec, &field(), Framework::Vue2, "Button");
        assert_eq!(lines[0], "it('Button Event: mouseEnter', async () => {");
        assert!(lines[2].contains("<Button on={{ 'mouse-enter': fn }} />"));
        assert!(lines[3].contains("trigger('mouseenter')"));
    }

    #[test]
    fn test_bound_event_only_first_key() {
        let spec = EventTestSpec::from_yaml("event:\n  focus: {}\n  blur: {}\n").unwrap();
        let code = generate(&spec, &field(), Framework::Vue3, "Input").join("\n");
        assert!(code.contains("onFocus={fn}"));
        assert!(!code.contains("blur"));
    }

    #[test]
    fn test_declared_case_defaults_boolean_field() {
        let spec = EventTestSpec::from_yaml(
            r#"
event:
  - expect:
      - trigger: click
        event:
          click: ~
"#,
        )
        .unwrap();
        let lines = generate(&spec, &field(), Framework::React, "Button");
        assert_eq!(
            lines,
            vec![
                "it('props.disabled works fine', () => {",
                "const onClickFn = vi.fn();",
                "const { container } = render(<Button disabled={true} onClick={onClickFn} />);",
                "fireEvent.click(container.firstChild);\nexpect(onClickFn).toHaveBeenCalled();",
                "});",
            ]
        );
    }

    #[test]
    fn test_declared_case_keeps_explicit_prop() {
        let spec = EventTestSpec::from_yaml(
            "event:\n  - props: { disabled: false }\n    description: stays off\n    expect: []\n",
        )
        .unwrap();
        let lines = generate(&spec, &field(), Framework::React, "Button");
        assert_eq!(lines[0], "it('props.disabled: stays off', () => {");
        assert!(lines[1].contains("disabled={false}"));
    }

    #[test]
    fn test_unrecognized_generates_nothing() {
        let spec = EventTestSpec::from_yaml("event: click\n").unwrap();
        assert!(generate(&spec, &field(), Framework::React, "Button").is_empty());
        let spec = EventTestSpec::from_yaml("event: {}\n").unwrap();
        assert!(generate(&spec, &field(), Framework::React, "Button").is_empty());
    }

    /// Sinon spies and a bare `mountAndFire` helper
    struct SpyHarness;

    impl Harness for SpyHarness {
        fn mock_fn(&self) -> &str {
            "sinon.spy()"
        }

        fn mount_code(
            &self,
            _framework: Framework,
            component: &str,
            props: &MountProps,
            _extra: &ExtraCode<'_>,
        ) -> String {
            format!("h({}, {})", component, props.events.as_deref().unwrap_or("{}"))
        }

        fn wrapper_code(&self, _framework: Framework, mount_code: &str) -> String {
            format!("const root = mountAndFire({});", mount_code)
        }

        fn fire_event_code(&self, _framework: Framework, fire: &FireEvent<'_>) -> String {
            format!("root.emit({}, {});", quote(fire.dom), quote(fire.event))
        }

        fn dom_truthy(&self, _framework: Framework, selector: &str) -> String {
            format!("assert(root.has({}));", quote(selector))
        }

        fn dom_count(&self, _framework: Framework, selector: &str, count: u64) -> String {
            format!("assert(root.count({}) === {});", quote(selector), count)
        }

        fn cleanup_code(&self, _selectors: &[String]) -> String {
            "root.reset();".into()
        }

        fn default_title(&self, field: &FieldMeta) -> String {
            quote(&field.field_name)
        }
    }

    #[test]
    fn test_custom_harness() {
        let spec = EventTestSpec::from_yaml(
            r#"
event:
  - expect:
      - trigger: click
        exist: ['.a', { '.b': 2 }]
        event: { click: ~ }
        clearElementAtEnd: .t-popup
"#,
        )
        .unwrap();
        let generator = EventCaseGenerator::with_harness(SpyHarness);
        assert_eq!(generator.harness().mock_fn(), "sinon.spy()");

        let lines = generator.generate(&spec, &field(), Framework::React, "Button");
        assert_eq!(
            lines,
            vec![
                "it('disabled', () => {",
                "const onClickFn = sinon.spy();",
                "const root = mountAndFire(h(Button, onClick={onClickFn}));",
                "root.emit('self', 'click');\nassert(root.has('.a'));\nassert(root.count('.b') === 2);\nexpect(onClickFn).toHaveBeenCalled();\nroot.reset();",
                "});",
            ]
        );
    }

    #[test]
    fn test_colliding_event_names_declare_one_handler() {
        let spec = EventTestSpec::from_yaml(
            "event:\n  - expect:\n      - trigger: click\n        event: { visible-change: ~, visibleChange: ['x'] }\n",
        )
        .unwrap();
        let lines = generate(&spec, &field(), Framework::React, "Popup");
        assert_eq!(lines[1], "const onVisibleChangeFn = vi.fn();");
        assert_eq!(
            lines[2],
            "const { container } = render(<Popup disabled={true} onVisibleChange={onVisibleChangeFn} />);"
        );
        assert_eq!(
            lines[3],
            "fireEvent.click(container.firstChild);\nexpect(onVisibleChangeFn).toHaveBeenCalled();"
        );
    }

    #[test]
    fn test_jest_runner() {
        let spec = EventTestSpec::from_yaml("event:\n  click: {}\n").unwrap();
        let lines = EventCaseGenerator::new(TestRunner::Jest).generate(
            &spec,
            &field(),
            Framework::React,
            "Button",
        );
        assert_eq!(lines[1], "const fn = jest.fn();");
    }
}
