//! Project configuration and the data context handed to templates.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::naming::{lower, pluralize, title_case};

/// Go toolchain version written into generated projects.
pub const TOOL_VERSION: &str = "1.23";

/// Input for a single generation run, as collected by the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    pub app_name: String,
    pub module_name: String,
    pub domain: String,
    pub description: String,
    pub author: String,
    pub features: Vec<String>,
}

fn app_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("valid regex"))
}

fn domain_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z]+$").expect("valid regex"))
}

impl ProjectConfig {
    /// Checks the invariants the generator relies on.
    ///
    /// # Errors
    /// * `Error::ConfigError` if app name, module name or domain is empty,
    ///   the app name is not usable as a directory name, or the domain is
    ///   not a single word
    pub fn validate(&self) -> Result<()> {
        if self.app_name.is_empty() {
            return Err(Error::ConfigError("app name is required".to_string()));
        }
        if self.module_name.is_empty() {
            return Err(Error::ConfigError("module name is required".to_string()));
        }
        if self.domain.is_empty() {
            return Err(Error::ConfigError("domain is required".to_string()));
        }
        if !app_name_pattern().is_match(&self.app_name) {
            return Err(Error::ConfigError(format!(
                "app name '{}' must start with a letter and contain only letters, digits, '-' or '_'",
                self.app_name
            )));
        }
        if !domain_pattern().is_match(&self.domain) {
            return Err(Error::ConfigError(format!(
                "domain '{}' must be a single word",
                self.domain
            )));
        }
        Ok(())
    }
}

/// Feature flags selected for a run. Order and duplicates are irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeatureSet(BTreeSet<String>);

impl FeatureSet {
    /// Case-sensitive membership test.
    pub fn contains(&self, feature: &str) -> bool {
        self.0.contains(feature)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Values available to every template, built once per generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateData {
    pub app_name: String,
    pub module_name: String,
    pub domain: String,
    pub domain_title: String,
    pub domain_plural: String,
    pub domain_plural_lower: String,
    pub domain_lower: String,
    pub description: String,
    pub author: String,
    pub package_import_path: String,
    pub go_version: String,
    pub features: FeatureSet,
}

impl TemplateData {
    pub fn from_config(config: &ProjectConfig) -> Self {
        let domain_plural = pluralize(&config.domain);
        Self {
            app_name: config.app_name.clone(),
            module_name: config.module_name.clone(),
            domain: config.domain.clone(),
            domain_title: title_case(&config.domain),
            domain_plural_lower: lower(&domain_plural),
            domain_plural,
            domain_lower: lower(&config.domain),
            description: config.description.clone(),
            author: config.author.clone(),
            package_import_path: config.module_name.clone(),
            go_version: TOOL_VERSION.to_string(),
            features: config.features.iter().cloned().collect(),
        }
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }
}
