//! User input and interaction handling.

use std::path::PathBuf;

use dialoguer::{Confirm, Input};

use crate::cli::{
    default_description, default_module, output_dir, CreateArgs, DEFAULT_AUTHOR, DEFAULT_DOMAIN,
};
use crate::error::{Error, Result};
use crate::project::ProjectConfig;
use crate::settings::Settings;

/// Project name offered when none was given on the command line.
pub const DEFAULT_APP_NAME: &str = "myapp";

/// Source of interactive answers.
pub trait Prompter {
    /// Asks for a line of text, returning `default` on empty input.
    fn input(&self, prompt: &str, default: &str) -> Result<String>;

    /// Asks a yes/no question. Returns `true` without asking when `skip` is set.
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;
}

/// Terminal prompts backed by dialoguer.
#[derive(Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))?;
        Ok(answer.trim().to_string())
    }

    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Asks for every project value, using flags and settings as the offered defaults.
///
/// # Returns
/// * `Result<(ProjectConfig, PathBuf)>` - The configuration and the output directory
pub fn prompt_project_config(
    prompt: &dyn Prompter,
    args: &CreateArgs,
    settings: &Settings,
) -> Result<(ProjectConfig, PathBuf)> {
    let app_name =
        prompt.input("Project name", args.name.as_deref().unwrap_or(DEFAULT_APP_NAME))?;

    let module_default =
        args.module.clone().unwrap_or_else(|| default_module(&app_name, settings));
    let module_name = prompt.input("Go module name", &module_default)?;

    let domain_default = args
        .domain
        .as_deref()
        .or(settings.domain.as_deref())
        .unwrap_or(DEFAULT_DOMAIN);
    let domain =
        prompt.input("Primary domain entity (e.g., user, product, order)", domain_default)?;

    let description_default =
        args.description.clone().unwrap_or_else(|| default_description(&domain));
    let description = prompt.input("Project description", &description_default)?;

    let author_default =
        args.author.as_deref().or(settings.author.as_deref()).unwrap_or(DEFAULT_AUTHOR);
    let author = prompt.input("Author name", author_default)?;

    let output_default = output_dir(args, settings);
    let output = prompt.input("Output directory", &output_default.display().to_string())?;

    let features =
        if args.features.is_empty() { settings.features.clone() } else { args.features.clone() };

    Ok((
        ProjectConfig { app_name, module_name, domain, description, author, features },
        PathBuf::from(output),
    ))
}
