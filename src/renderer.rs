//! Template rendering for go-app-gen.
//! Template contents are rendered with MiniJinja against the per-run
//! [`TemplateData`]; file paths are handled separately by [`crate::path`].
use crate::error::{Error, Result};
use crate::project::TemplateData;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given data.
    ///
    /// # Arguments
    /// * `name` - Template name used in error messages
    /// * `template` - Template source to render
    /// * `data` - Values available to the template
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, name: &str, template: &str, data: &TemplateData) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that rejects undefined variables, never escapes
    /// output and keeps trailing newlines.
    ///
    /// Escaping is disabled for every template name: generated files are
    /// source and config text, whatever their extension.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// Besides the fields of [`TemplateData`] the template can call
    /// `has_feature("name")`.
    ///
    /// # Errors
    /// * `Error::ParseError` if the template syntax is invalid
    /// * `Error::RenderError` if the template references an undefined value
    ///   or calls a function with the wrong arguments
    fn render(&self, name: &str, template: &str, data: &TemplateData) -> Result<String> {
        let mut env = self.env.clone();

        let features = data.features.clone();
        env.add_function("has_feature", move |feature: &str| features.contains(feature));

        env.add_template(name, template).map_err(|e| Error::ParseError {
            template: name.to_string(),
            reason: e.to_string(),
        })?;

        let tmpl = env.get_template(name).map_err(|e| Error::ParseError {
            template: name.to_string(),
            reason: e.to_string(),
        })?;

        tmpl.render(data).map_err(|e| Error::RenderError {
            template: name.to_string(),
            reason: e.to_string(),
        })
    }
}
