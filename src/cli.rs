//! Command-line interface implementation for go-app-gen.
//! Provides argument parsing and turns arguments into a [`ProjectConfig`].

use clap::{error::ErrorKind, Args as ClapArgs, CommandFactory, Parser, Subcommand};
use log::debug;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::project::ProjectConfig;
use crate::prompt::Prompter;
use crate::settings::Settings;

/// Domain used when none is given.
pub const DEFAULT_DOMAIN: &str = "item";
/// Author used when none is given.
pub const DEFAULT_AUTHOR: &str = "Developer";
/// Module prefix used when neither a module nor a prefix is given.
pub const DEFAULT_MODULE_PREFIX: &str = "github.com/user";

/// Command-line arguments structure for go-app-gen.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "go-app-gen: generate Go services with clean architecture, database integration and tooling",
    long_about = None
)]
pub struct Args {
    /// Enable verbose logging and show output of post-generation commands
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Go application
    Create(CreateArgs),
    /// Display version, commit and build date
    Version,
}

/// Version, commit and build date of this binary.
///
/// Commit and build date come from the `GO_APP_GEN_COMMIT` and
/// `GO_APP_GEN_BUILD_DATE` environment variables at compile time.
pub fn version_info() -> String {
    format!(
        "go-app-gen version {}\ncommit: {}\nbuilt on: {}",
        env!("CARGO_PKG_VERSION"),
        option_env!("GO_APP_GEN_COMMIT").unwrap_or("none"),
        option_env!("GO_APP_GEN_BUILD_DATE").unwrap_or("unknown"),
    )
}

/// Arguments of the `create` command.
#[derive(ClapArgs, Debug, Default)]
pub struct CreateArgs {
    /// Project name, also the name of the created directory
    #[arg(value_name = "PROJECT_NAME", required_unless_present = "interactive")]
    pub name: Option<String>,

    /// Go module name (e.g., github.com/user/project)
    #[arg(short, long)]
    pub module: Option<String>,

    /// Primary domain entity (e.g., user, product, order)
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Project description
    #[arg(long)]
    pub description: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// Directory in which the project directory is created
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Additional features to include, comma separated
    #[arg(long, value_delimiter = ',')]
    pub features: Vec<String>,

    /// Ask for every value interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// Overwrite an existing, non-empty project directory
    #[arg(short, long)]
    pub force: bool,

    /// Use templates from this directory instead of the bundled ones
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Only write the files, do not run the Go toolchain afterwards
    #[arg(long)]
    pub skip_post_process: bool,
}

/// Default module name for `app_name`.
pub fn default_module(app_name: &str, settings: &Settings) -> String {
    let prefix = settings.module_prefix.as_deref().unwrap_or(DEFAULT_MODULE_PREFIX);
    format!("{}/{app_name}", prefix.trim_end_matches('/'))
}

/// Default description for `domain`.
pub fn default_description(domain: &str) -> String {
    format!("A {domain} management API")
}

/// Directory in which the project directory is created.
pub fn output_dir(args: &CreateArgs, settings: &Settings) -> PathBuf {
    args.output
        .clone()
        .or_else(|| settings.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Builds the project configuration from flags, settings and defaults,
/// in that order of precedence.
///
/// # Errors
/// * `Error::ConfigError` if no project name was given
pub fn project_config(args: &CreateArgs, settings: &Settings) -> Result<ProjectConfig> {
    let app_name = args
        .name
        .clone()
        .ok_or_else(|| Error::ConfigError("project name is required".to_string()))?;

    let module_name = args.module.clone().unwrap_or_else(|| default_module(&app_name, settings));
    let domain = args
        .domain
        .clone()
        .or_else(|| settings.domain.clone())
        .unwrap_or_else(|| DEFAULT_DOMAIN.to_string());
    let description = args.description.clone().unwrap_or_else(|| default_description(&domain));
    let author = args
        .author
        .clone()
        .or_else(|| settings.author.clone())
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());
    let features =
        if args.features.is_empty() { settings.features.clone() } else { args.features.clone() };

    Ok(ProjectConfig { app_name, module_name, domain, description, author, features })
}

fn is_dir_empty(dir: &Path) -> Result<bool> {
    let mut entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    Ok(entries.next().is_none())
}

/// Makes sure the generator may write to `<output_dir>/<app_name>`.
///
/// A non-empty project directory is removed when `force` is set or when
/// the user confirms through `prompt`.
///
/// # Errors
/// * `Error::ConfigError` if `output_dir` does not exist or the user declines
/// * `Error::OutputDirectoryExistsError` if the directory is not empty and
///   neither `force` nor a prompter is given
pub fn prepare_project_dir(
    output_dir: &Path,
    app_name: &str,
    force: bool,
    prompt: Option<&dyn Prompter>,
) -> Result<PathBuf> {
    if !output_dir.is_dir() {
        return Err(Error::ConfigError(format!(
            "output directory does not exist: {}",
            output_dir.display()
        )));
    }

    let project_dir = output_dir.join(app_name);
    if !project_dir.exists() || is_dir_empty(&project_dir)? {
        return Ok(project_dir);
    }

    let overwrite = match prompt {
        Some(prompt) => prompt.confirm(
            force,
            format!(
                "Directory '{}' already exists and contains files. Recreate it?",
                project_dir.display()
            ),
        )?,
        None if force => true,
        None => {
            return Err(Error::OutputDirectoryExistsError {
                output_dir: project_dir.display().to_string(),
            })
        }
    };

    if !overwrite {
        return Err(Error::ConfigError("operation cancelled".to_string()));
    }

    debug!("Removing existing directory {}", project_dir.display());
    std::fs::remove_dir_all(&project_dir).map_err(|e| Error::io(&project_dir, e))?;
    Ok(project_dir)
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                eprintln!("{e}");
                let _ = Args::command().print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
