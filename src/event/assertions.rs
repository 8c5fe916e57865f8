//! Assertion composition for one expectation step

use super::arguments::match_arguments;
use super::naming::handler_name;
use crate::framework::Framework;
use crate::harness::{FireEvent, Harness};
use crate::model::{ExistAssertion, ExpectationStep};
use std::collections::HashSet;

/// Trigger, DOM checks, handler checks and cleanup for step `index`
///
/// Returns an empty string when the step declares nothing. Events whose
/// names map to the same handler are asserted once, for the first of them.
pub fn compose<H: Harness + ?Sized>(
    step: &ExpectationStep,
    index: usize,
    framework: Framework,
    component: &str,
    harness: &H,
) -> String {
    let mut parts = Vec::new();

    if let Some(trigger) = &step.trigger {
        parts.push(harness.fire_event_code(
            framework,
            &FireEvent {
                dom: step.trigger_target(),
                event: trigger,
                component,
            },
        ));
    }

    for exist in &step.exist {
        parts.push(match exist {
            ExistAssertion::Present(selector) => harness.dom_truthy(framework, selector),
            ExistAssertion::Count { selector, count } => {
                harness.dom_count(framework, selector, *count)
            }
        });
    }

    let mut asserted = HashSet::new();
    for (event, arguments) in &step.event {
        let handler = handler_name(event, index);
        if !asserted.insert(handler.clone()) {
            continue;
        }
        parts.push(format!("expect({}).toHaveBeenCalled();", handler));
        parts.extend(match_arguments(arguments, &handler));
    }

    if !step.clear_element_at_end.is_empty() {
        parts.push(harness.cleanup_code(&step.clear_element_at_end));
    }

    parts.retain(|p| !p.is_empty());
    parts.join("\n")
}
