//! go-app-gen generates Go service projects from a bundled set of templates.
//! It renders every template into a new project directory and then runs the
//! Go toolchain against the result to bootstrap and validate it.

/// Command-line interface module for the go-app-gen application
pub mod cli;

/// Error types and handling for the go-app-gen application
pub mod error;

/// Generation facade: data context, writing and post-processing
pub mod generator;

/// Logger setup for the binary
pub mod logger;

/// Naming variants derived from the domain word
pub mod naming;

/// Output path resolution for template resources
pub mod path;

/// Post-generation commands with fatal and best-effort steps
pub mod post_process;

/// Project configuration and the template data context
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;

/// Optional settings file with command defaults
pub mod settings;

/// Bundled, read-only template resources
pub mod store;

/// Writes rendered templates to disk
pub mod writer;
