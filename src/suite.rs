//! Test-file assembly - wrap generated event cases in a runnable file
//!
//! A component API document lists the component's fields, each optionally
//! carrying event tests:
//!
//! ```yaml
//! component: Button
//! import_from: '..'
//! fields:
//!   - field_name: disabled
//!     field_type_text: [Boolean]
//!     tests:
//!       - event:
//!           - expect:
//!               - trigger: click
//!                 event: { click: ~ }
//! ```

use crate::config::GenConfig;
use crate::error::{Error, Result};
use crate::event::EventCaseGenerator;
use crate::framework::Framework;
use crate::model::{EventTestSpec, FieldMeta};
use crate::util::indent;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// A component and its testable fields
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[schemars(title = "Component API", description = "Component fields with event tests")]
pub struct ComponentApi {
    /// Component identifier as imported in tests
    pub component: String,

    /// Module the component is imported from; overrides config
    #[serde(default)]
    pub import_from: Option<String>,

    #[serde(default)]
    pub fields: Vec<ApiField>,

    /// Hash of the source document, set by the loaders
    #[serde(skip)]
    pub source_hash: String,
}

/// One API field
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ApiField {
    #[serde(flatten)]
    pub meta: FieldMeta,

    #[serde(default)]
    pub tests: Vec<EventTestSpec>,
}

impl ComponentApi {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: Value =
            serde_norway::from_str(yaml).map_err(|e| Error::SpecParse(e.to_string()))?;
        Self::from_value(value)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| Error::SpecParse(e.to_string()))?;
        Self::from_value(value)
    }

    /// Load a `.json`, `.yaml` or `.yml` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    fn from_value(value: Value) -> Result<Self> {
        let source_hash = hash_value(&value);
        let mut api: ComponentApi =
            serde_json::from_value(value).map_err(|e| Error::SpecParse(e.to_string()))?;
        api.source_hash = source_hash;
        Ok(api)
    }
}

/// `sha256:<16 hex>` over the canonical JSON of the document
fn hash_value(value: &Value) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(value.to_string().as_bytes());
    format!("sha256:{}", hex::encode(&hasher.finalize()[..8]))
}

/// All event-case fragments for a component, field by field
pub fn generate_cases(api: &ComponentApi, framework: Framework, config: &GenConfig) -> Vec<String> {
    let generator = EventCaseGenerator::new(config.runner);
    api.fields
        .iter()
        .flat_map(|field| {
            field
                .tests
                .iter()
                .flat_map(|test| generator.generate(test, &field.meta, framework, &api.component))
        })
        .collect()
}

fn framework_import(framework: Framework) -> &'static str {
    match framework {
        Framework::Vue2 | Framework::Vue3 => "import { mount } from '@vue/test-utils';",
        Framework::React => "import { render, fireEvent } from '@testing-library/react';",
    }
}

/// Complete test file for one framework
pub fn render_test_file(api: &ComponentApi, framework: Framework, config: &GenConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("// GENERATED EVENT TESTS FOR: {}\n", api.component));
    out.push_str(&format!("// FRAMEWORK: {}\n", framework));
    out.push_str(&format!("// SOURCE HASH: {}\n", api.source_hash));
    out.push_str("// DO NOT EDIT — regenerate from component API\n\n");

    if let Some(line) = config.runner.import_line() {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(framework_import(framework));
    out.push('\n');
    let import_from = api.import_from.as_deref().unwrap_or(&config.import_from);
    out.push_str(&format!(
        "import {{ {} }} from '{}';\n\n",
        api.component, import_from
    ));

    out.push_str(&format!("describe('{} Event', () => {{\n", api.component));
    let body = generate_cases(api, framework, config).join("\n");
    if !body.is_empty() {
        out.push_str(&indent(&body, 2));
        out.push('\n');
    }
    out.push_str("});\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::TestRunner;

    const BUTTON: &str = r#"
component: Button
fields:
  - field_name: disabled
    field_type_text: [Boolean]
    tests:
      - event:
          click:
            arguments: ['foo']
  - field_name: theme
    field_type_text: [String]
"#;

    #[test]
    fn test_load_yaml() {
        let api = ComponentApi::from_yaml(BUTTON).unwrap();
        assert_eq!(api.component, "Button");
        assert_eq!(api.fields.len(), 2);
        assert!(api.fields[0].meta.is_boolean());
        assert_eq!(api.fields[0].tests.len(), 1);
        assert!(api.fields[1].tests.is_empty());
        assert!(api.source_hash.starts_with("sha256:"));
    }

    #[test]
    fn test_render_file_structure() {
        let api = ComponentApi::from_yaml(BUTTON).unwrap();
        let file = render_test_file(&api, Framework::React, &GenConfig::default());

        assert!(file.contains("import { describe, it, expect, vi } from 'vitest';"));
        assert!(file.contains("import { render, fireEvent } from '@testing-library/react';"));
        assert!(file.contains("import { Button } from '..';"));
        assert!(file.contains("describe('Button Event', () => {\n  it('Button Event: click', () => {"));
        assert!(file.ends_with("});\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let api = ComponentApi::from_yaml(BUTTON).unwrap();
        let config = GenConfig::default();
        assert_eq!(
            render_test_file(&api, Framework::Vue2, &config),
            render_test_file(&api, Framework::Vue2, &config)
        );
    }

    #[test]
    fn test_jest_has_no_runner_import() {
        let api = ComponentApi::from_yaml(BUTTON).unwrap();
        let config = GenConfig {
            runner: TestRunner::Jest,
            ..Default::default()
        };
        let file = render_test_file(&api, Framework::Vue3, &config);
        assert!(!file.contains("from 'vitest'"));
        assert!(file.contains("const fn = jest.fn();"));
    }

    #[test]
    fn test_import_from_override() {
        let api = ComponentApi::from_json(r#"{"component": "Input", "import_from": "../input"}"#)
            .unwrap();
        let file = render_test_file(&api, Framework::Vue3, &GenConfig::default());
        assert!(file.contains("import { Input } from '../input';"));
        assert!(file.contains("describe('Input Event', () => {\n});"));
    }
}
