//! Error handling for go-app-gen.
//! Defines the error type and result alias used throughout the generator.

use std::io;
use thiserror::Error;

/// Errors that can occur while generating a project.
///
/// Template, path and step names are carried in every variant so that a
/// failure can be traced back to the resource or command that caused it.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested template is not part of the template store
    #[error("Template '{path}' not found in the template store.")]
    ResourceNotFound { path: String },

    /// The template source could not be compiled
    #[error("Failed to parse template '{template}': {reason}.")]
    ParseError { template: String, reason: String },

    /// The template compiled but could not be rendered with the given data
    #[error("Failed to render template '{template}': {reason}.")]
    RenderError { template: String, reason: String },

    /// Directory creation, file read or file write failed
    #[error("IO error at '{path}': {source}.")]
    IoError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// An external command ran but exited unsuccessfully
    #[error("'{command}' exited with {status}")]
    CommandFailed { command: String, status: String },

    /// A fatal post-processing command failed
    #[error("Post-processing step '{step}' failed: {source}.")]
    PostProcessStepError {
        step: String,
        #[source]
        source: Box<Error>,
    },

    /// Invalid project configuration or settings file
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Interactive input failed
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// The project directory exists, is not empty and overwrite was not confirmed
    #[error("Output directory '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },
}

impl Error {
    /// Wraps an `io::Error` with the path it happened at.
    pub fn io<P: AsRef<std::path::Path>>(path: P, source: io::Error) -> Self {
        Error::IoError { path: path.as_ref().display().to_string(), source }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
