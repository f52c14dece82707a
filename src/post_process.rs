//! Post-generation commands run inside the new project.
//!
//! The pipeline is a fixed, ordered list of [`PostStep`]s. Each step is
//! either fatal (its failure stops the pipeline and is returned) or
//! best-effort (its failure is recorded as a [`StepWarning`] and the next
//! step runs anyway). Steps run sequentially: later steps depend on files
//! produced by earlier ones.

use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::project::TemplateData;

/// What happens when a step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPolicy {
    /// Abort the pipeline and report the error
    Fatal,
    /// Record a warning and continue with the next step
    BestEffort,
}

/// One external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostStep {
    pub name: &'static str,
    pub program: String,
    pub args: Vec<String>,
    pub policy: StepPolicy,
    /// Shown to the user when a best-effort step fails
    pub hint: Option<&'static str>,
}

impl PostStep {
    fn new(
        name: &'static str,
        program: &str,
        args: &[&str],
        policy: StepPolicy,
        hint: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            policy,
            hint,
        }
    }

    /// The command as it would be typed in a shell.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The Go toolchain steps run after a project is written.
pub fn default_steps(data: &TemplateData) -> Vec<PostStep> {
    use StepPolicy::{BestEffort, Fatal};

    vec![
        PostStep::new("module-init", "go", &["mod", "init", data.module_name.as_str()], Fatal, None),
        PostStep::new(
            "sqlc-generate",
            "sqlc",
            &["generate"],
            BestEffort,
            Some(
                "Install sqlc with 'go install github.com/sqlc-dev/sqlc/cmd/sqlc@latest' \
                 or run 'make sqlc' in the project directory after setup",
            ),
        ),
        PostStep::new("mod-tidy", "go", &["mod", "tidy"], Fatal, None),
        PostStep::new("format", "go", &["fmt", "./..."], Fatal, None),
        PostStep::new(
            "goimports",
            "goimports",
            &["-w", "."],
            BestEffort,
            Some("Install goimports with 'go install golang.org/x/tools/cmd/goimports@latest'"),
        ),
        PostStep::new(
            "build",
            "go",
            &["build", "./..."],
            BestEffort,
            Some(
                "The build may need a running database. Run 'make up' in the project \
                 directory to start it and complete setup",
            ),
        ),
    ]
}

/// Executes a single command in a working directory.
pub trait CommandRunner {
    /// Runs `program` with `args` in `dir` and waits for it to finish.
    ///
    /// # Errors
    /// Returns an error if the program cannot be started or exits unsuccessfully.
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> Result<()>;
}

/// Runs commands as child processes of the current process.
pub struct SystemRunner {
    /// Child output goes to the terminal when set, otherwise it is discarded
    verbose: bool,
}

impl SystemRunner {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn output(&self) -> Stdio {
        if self.verbose {
            Stdio::inherit()
        } else {
            Stdio::null()
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> Result<()> {
        debug!("Executing '{program} {}' in {}", args.join(" "), dir.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(self.output())
            .stderr(self.output())
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Error::io(
                    program,
                    io::Error::new(io::ErrorKind::NotFound, "executable not found in PATH"),
                ),
                _ => Error::io(program, e),
            })?;

        if !status.success() {
            return Err(Error::CommandFailed {
                command: format!("{program} {}", args.join(" ")).trim_end().to_string(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

/// A best-effort step that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepWarning {
    pub step: String,
    pub command: String,
    pub reason: String,
    pub hint: Option<String>,
}

impl fmt::Display for StepWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' failed: {}", self.command, self.reason)
    }
}

/// Outcome of a pipeline run that did not hit a fatal failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostProcessReport {
    /// Names of the steps that succeeded, in run order
    pub completed: Vec<String>,
    pub warnings: Vec<StepWarning>,
}

/// Runs `steps` in order inside `project_root`.
///
/// # Errors
/// * `Error::PostProcessStepError` naming the first fatal step that failed;
///   no later step is run
pub fn run_steps(
    steps: &[PostStep],
    runner: &dyn CommandRunner,
    project_root: &Path,
) -> Result<PostProcessReport> {
    let mut report = PostProcessReport::default();

    for step in steps {
        info!("Running '{}'", step.command_line());

        match runner.run(project_root, &step.program, &step.args) {
            Ok(()) => {
                debug!("Step '{}' succeeded", step.name);
                report.completed.push(step.name.to_string());
            }
            Err(e) => match step.policy {
                StepPolicy::Fatal => {
                    return Err(Error::PostProcessStepError {
                        step: step.name.to_string(),
                        source: Box::new(e),
                    });
                }
                StepPolicy::BestEffort => {
                    let warning = StepWarning {
                        step: step.name.to_string(),
                        command: step.command_line(),
                        reason: e.to_string(),
                        hint: step.hint.map(str::to_string),
                    };
                    warn!("{warning}");
                    report.warnings.push(warning);
                }
            },
        }
    }

    Ok(report)
}
