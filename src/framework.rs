//! Target UI frameworks and test runners

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// UI framework the generated tests mount components with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Framework {
    /// Vue 2 (`@vue/test-utils` v1, listeners passed through `on`)
    #[serde(rename = "Vue(PC)", alias = "vue2", alias = "vue")]
    Vue2,
    /// Vue 3 (`@vue/test-utils` v2)
    #[serde(
        rename = "VueNext(PC)",
        alias = "vue3",
        alias = "vue-next",
        alias = "Vue(Mobile)",
        alias = "VueNext(Mobile)"
    )]
    Vue3,
    /// React (`@testing-library/react`)
    #[serde(rename = "React(PC)", alias = "react", alias = "React(Mobile)")]
    React,
}

/// How a framework binds event listeners at mount time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameworkIdiom {
    /// One `on` prop holding an object of kebab-cased listeners
    EventMap,
    /// One `on<PascalCase>` prop per event
    PropPerEvent,
}

impl Framework {
    pub const ALL: [Framework; 3] = [Framework::Vue2, Framework::Vue3, Framework::React];

    /// Canonical marker name
    pub fn name(&self) -> &'static str {
        match self {
            Framework::Vue2 => "Vue(PC)",
            Framework::Vue3 => "VueNext(PC)",
            Framework::React => "React(PC)",
        }
    }

    /// Vue variants mount asynchronously, so their tests are `async`
    pub fn is_vue(&self) -> bool {
        matches!(self, Framework::Vue2 | Framework::Vue3)
    }

    pub fn idiom(&self) -> FrameworkIdiom {
        match self {
            Framework::Vue2 => FrameworkIdiom::EventMap,
            Framework::Vue3 | Framework::React => FrameworkIdiom::PropPerEvent,
        }
    }

    pub fn file_extension(&self) -> &'static str {
        if self.is_vue() {
            "jsx"
        } else {
            "tsx"
        }
    }

    /// Lowercase short name for file naming
    pub fn slug(&self) -> &'static str {
        match self {
            Framework::Vue2 => "vue",
            Framework::Vue3 => "vue-next",
            Framework::React => "react",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Framework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Vue(PC)" => return Ok(Framework::Vue2),
            "VueNext(PC)" | "VueNext(Mobile)" | "Vue(Mobile)" => return Ok(Framework::Vue3),
            "React(PC)" | "React(Mobile)" => return Ok(Framework::React),
            _ => {}
        }
        match s.trim().to_lowercase().as_str() {
            "vue" | "vue2" => Ok(Framework::Vue2),
            "vue3" | "vue-next" | "vuenext" => Ok(Framework::Vue3),
            "react" => Ok(Framework::React),
            _ => Err(Error::UnknownFramework(s.to_string())),
        }
    }
}

/// Test runner the generated file targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TestRunner {
    #[default]
    Vitest,
    Jest,
}

impl TestRunner {
    /// Expression creating a fresh mock function
    pub fn mock_fn(&self) -> &'static str {
        match self {
            TestRunner::Vitest => "vi.fn()",
            TestRunner::Jest => "jest.fn()",
        }
    }

    /// Import line for the runner's globals, if it needs one
    pub fn import_line(&self) -> Option<&'static str> {
        match self {
            TestRunner::Vitest => Some("import { describe, it, expect, vi } from 'vitest';"),
            TestRunner::Jest => None,
        }
    }
}

impl FromStr for TestRunner {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "vitest" | "vi" => Ok(TestRunner::Vitest),
            "jest" => Ok(TestRunner::Jest),
            _ => Err(Error::UnknownRunner(s.to_string())),
        }
    }
}
