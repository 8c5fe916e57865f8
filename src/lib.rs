// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # evgen - event-case test generation
//!
//! Turns a declarative description of a UI component's events into unit-test
//! source code for Vue 2, Vue 3 and React.
//!
//! ## Core Concept
//!
//! A component API document declares, per field, which events the component
//! emits and what should happen when they fire. evgen translates each
//! declaration into `it(...)` blocks:
//!
//! - **Mount** the component with a mock bound to each event, using the
//!   framework's listener idiom (`on={{ 'event-name': fn }}` for Vue 2,
//!   `onEventName={fn}` otherwise)
//! - **Fire** the trigger event on the component root or a selector
//! - **Assert** DOM presence/counts, that handlers were called, and what
//!   their first call received
//!
//! ## Quick Start
//!
//! ```rust
//! use evgen::{generate, EventTestSpec, FieldMeta, Framework};
//!
//! let spec = EventTestSpec::from_yaml(r#"
//! event:
//!   click:
//!     arguments: ['foo']
//! "#)?;
//!
//! let lines = generate(&spec, &FieldMeta::new("onClick", "Function"), Framework::React, "Button");
//! assert!(lines.contains(&"expect(fn.mock.calls[0][0]).toBe('foo');".to_string()));
//! # Ok::<(), evgen::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! EventTestSpec ──► event::generate ──► Vec<String> ──► suite::render_test_file
//!                     │
//!                     ├── binder      (handler binding per framework idiom)
//!                     ├── assertions  (trigger, DOM, handler, cleanup)
//!                     ├── arguments   (calls[0] argument matching)
//!                     └── naming      (onClickFn, onClickFn1, kebab keys)
//!
//! harness::Harness supplies mount / fireEvent / DOM statement builders
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod framework;
pub mod harness;
pub mod js;
pub mod model;
pub mod suite;
pub mod util;
pub mod validate;

// Re-exports
pub use config::{GenConfig, NamingConfig};
pub use error::{Error, Result};
pub use event::{generate, handler_name, listener_key, EventCaseGenerator};
pub use framework::{Framework, FrameworkIdiom, TestRunner};
pub use harness::{Harness, VitestHarness};
pub use model::{
    ArgumentDescriptor, BoundEvent, EventCase, EventShape, EventTestSpec, ExistAssertion,
    ExpectationStep, FieldMeta, PropertyMatcher,
};
pub use suite::{generate_cases, render_test_file, ApiField, ComponentApi};
pub use validate::{validate, Issue, Severity, ValidationReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
