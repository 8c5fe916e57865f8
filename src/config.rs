//! evgen project configuration
//!
//! Loaded from a `.evgen.yaml` file in the working directory or any parent.
//! Every key is optional:
//!
//! ```yaml
//! version: 1
//! runner: vitest
//! frameworks: ['Vue(PC)', 'VueNext(PC)', 'React(PC)']
//! import_from: '..'
//! naming:
//!   tests: '{component}.events.test.{ext}'
//! ```

use crate::error::{Error, Result};
use crate::framework::{Framework, TestRunner};
use crate::util::to_kebab_case;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up by [`GenConfig::discover`]
pub const CONFIG_FILE: &str = ".evgen.yaml";

/// Generation settings
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GenConfig {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// Test runner the generated files use
    #[serde(default)]
    pub runner: TestRunner,

    /// Frameworks to generate for when none is given on the command line
    #[serde(default = "default_frameworks")]
    pub frameworks: Vec<Framework>,

    /// Module components are imported from
    #[serde(default = "default_import_from")]
    pub import_from: String,

    /// File naming conventions
    #[serde(default)]
    pub naming: NamingConfig,
}

fn default_version() -> u32 {
    1
}

fn default_frameworks() -> Vec<Framework> {
    Framework::ALL.to_vec()
}

fn default_import_from() -> String {
    "..".to_string()
}

/// Naming convention for generated files
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NamingConfig {
    /// Test file pattern: {component}, {framework}, {ext}
    #[serde(default = "default_test_naming")]
    pub tests: String,
}

fn default_test_naming() -> String {
    "{component}.events.test.{ext}".to_string()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            tests: default_test_naming(),
        }
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            runner: TestRunner::default(),
            frameworks: default_frameworks(),
            import_from: default_import_from(),
            naming: NamingConfig::default(),
        }
    }
}

impl GenConfig {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: GenConfig = serde_norway::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;

        if config.version != 1 {
            return Err(Error::Config(format!(
                "Unsupported {} version: {}",
                CONFIG_FILE, config.version
            )));
        }
        Ok(config)
    }

    /// Load `.evgen.yaml` from a directory
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_file = dir.join(CONFIG_FILE);
        if !config_file.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_file).map_err(Error::Io)?;
        Self::from_yaml(&content).map(Some)
    }

    /// Nearest config at or above `start`, or defaults
    pub fn discover(start: &Path) -> Result<Self> {
        for dir in start.ancestors() {
            if let Some(config) = Self::load_from_dir(dir)? {
                return Ok(config);
            }
        }
        Ok(Self::default())
    }

    /// Apply naming pattern to generate the test file name
    pub fn apply_naming(&self, component: &str, framework: Framework) -> String {
        self.naming
            .tests
            .replace("{component}", &to_kebab_case(component))
            .replace("{framework}", framework.slug())
            .replace("{ext}", framework.file_extension())
    }
}
