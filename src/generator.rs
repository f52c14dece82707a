//! Entry point tying the writer and the post-processing pipeline together.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Error, Result};
use crate::post_process::{default_steps, run_steps, CommandRunner, PostProcessReport};
use crate::project::{ProjectConfig, TemplateData};
use crate::renderer::TemplateRenderer;
use crate::store::TemplateStore;
use crate::writer::write_project;

/// Result of a successful generation run.
#[derive(Debug)]
pub struct GenerationReport {
    /// `<output_dir>/<AppName>`
    pub project_dir: PathBuf,
    /// Every file rendered from a template
    pub files: Vec<PathBuf>,
    /// `None` when post-processing was skipped
    pub post_process: Option<PostProcessReport>,
}

/// Generates projects below a fixed output directory.
pub struct Generator<'a> {
    output_dir: PathBuf,
    store: &'a TemplateStore,
    renderer: &'a dyn TemplateRenderer,
    runner: &'a dyn CommandRunner,
    post_process: bool,
}

impl<'a> Generator<'a> {
    pub fn new<P: AsRef<Path>>(
        output_dir: P,
        store: &'a TemplateStore,
        renderer: &'a dyn TemplateRenderer,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            store,
            renderer,
            runner,
            post_process: true,
        }
    }

    /// Enables or disables the post-processing pipeline.
    pub fn with_post_processing(mut self, enabled: bool) -> Self {
        self.post_process = enabled;
        self
    }

    /// Writes the project described by `config` and bootstraps it.
    ///
    /// # Flow
    /// 1. Derives the template data from `config`
    /// 2. Creates `<output_dir>/<AppName>`
    /// 3. Renders and writes every template
    /// 4. Runs the post-processing steps
    ///
    /// # Errors
    /// * Any writer error; files already written are kept
    /// * `Error::PostProcessStepError` if a fatal step fails
    pub fn generate(&self, config: &ProjectConfig) -> Result<GenerationReport> {
        let data = TemplateData::from_config(config);

        let project_dir = self.output_dir.join(&data.app_name);
        fs::create_dir_all(&project_dir).map_err(|e| Error::io(&project_dir, e))?;
        info!("Generating '{}' in {}", data.app_name, project_dir.display());

        let files = write_project(self.store, self.renderer, &data, &project_dir)?;
        info!("Wrote {} files", files.len());

        let post_process = if self.post_process {
            Some(run_steps(&default_steps(&data), self.runner, &project_dir)?)
        } else {
            None
        };

        Ok(GenerationReport { project_dir, files, post_process })
    }
}
