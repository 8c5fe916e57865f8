//! Component API validation
//!
//! Generation is best-effort and never rejects input. This module reports the
//! shapes that generate less than the author probably meant, for callers that
//! want stricter feedback.

use crate::event::handler_name;
use crate::model::{EventShape, EventTestSpec};
use crate::suite::ComponentApi;
use std::collections::HashMap;

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A validation issue found in a component API document
#[derive(Debug, Clone)]
pub struct Issue {
    pub severity: Severity,
    pub code: String,
    pub message: String,
    /// Owning field, if any
    pub field: Option<String>,
}

impl Issue {
    pub fn error(code: &str, message: &str, field: Option<&str>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.to_string(),
            message: message.to_string(),
            field: field.map(String::from),
        }
    }

    pub fn warning(code: &str, message: &str, field: Option<&str>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.to_string(),
            message: message.to_string(),
            field: field.map(String::from),
        }
    }
}

/// Result of validation
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }
}

/// Validate every event test in a component API document
pub fn validate(api: &ComponentApi) -> ValidationReport {
    let mut report = ValidationReport::default();

    if api.component.trim().is_empty() {
        report
            .issues
            .push(Issue::error("E001", "Component name is empty", None));
    }

    for field in &api.fields {
        for test in &field.tests {
            validate_test(test, &field.meta.field_name, &mut report);
        }
    }

    report
}

/// Validate one event test, attributing issues to `field`
pub fn validate_test(test: &EventTestSpec, field: &str, report: &mut ValidationReport) {
    let field = Some(field);
    match &test.event {
        EventShape::Unrecognized => report.issues.push(Issue::warning(
            "W001",
            "`event` is neither a mapping nor a list; nothing will be generated",
            field,
        )),
        EventShape::Bound(events) if events.len() > 1 => {
            let dropped: Vec<&str> = events.keys().skip(1).map(String::as_str).collect();
            report.issues.push(Issue::warning(
                "W002",
                &format!(
                    "Only the first bound event is tested; ignoring: {}",
                    dropped.join(", ")
                ),
                field,
            ));
        }
        EventShape::Bound(_) => {}
        EventShape::Declared(cases) => {
            for (case_index, case) in cases.iter().enumerate() {
                if case.expect.is_empty() {
                    report.issues.push(Issue::warning(
                        "W005",
                        &format!("Case {} has no expectation steps", case_index),
                        field,
                    ));
                }

                let mut bound_in: HashMap<&str, usize> = HashMap::new();
                for (step_index, step) in case.expect.iter().enumerate() {
                    if step.is_empty() {
                        report.issues.push(Issue::warning(
                            "W003",
                            &format!(
                                "Case {} step {} has no trigger, exist or event",
                                case_index, step_index
                            ),
                            field,
                        ));
                    }
                    let mut handlers: HashMap<String, &str> = HashMap::new();
                    for event in step.event.keys() {
                        let handler = handler_name(event, step_index);
                        if let Some(earlier) = handlers.get(&handler) {
                            report.issues.push(Issue::warning(
                                "W006",
                                &format!(
                                    "Case {} step {}: `{}` and `{}` both map to `{}`; only `{}` is tested",
                                    case_index, step_index, earlier, event, handler, earlier
                                ),
                                field,
                            ));
                            continue;
                        }
                        handlers.insert(handler, event.as_str());

                        if let Some(first) = bound_in.insert(event.as_str(), step_index) {
                            report.issues.push(Issue::warning(
                                "W004",
                                &format!(
                                    "Case {}: `{}` is expected in steps {} and {}; only the later handler stays bound",
                                    case_index, event, first, step_index
                                ),
                                field,
                            ));
                        }
                    }
                }
            }
        }
    }
}
