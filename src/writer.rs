//! Materializes the template store into a project directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::path::resolve_output_path;
use crate::project::TemplateData;
use crate::renderer::TemplateRenderer;
use crate::store::TemplateStore;

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| Error::io(path, e))
}

/// Renders every template in `store` and writes it below `project_root`.
///
/// Templates are processed in store order. Existing files are overwritten.
/// Processing stops at the first failure; files written before it are left
/// on disk.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Absolute paths of the written files, in write order
///
/// # Errors
/// * `Error::ResourceNotFound`, `Error::ParseError` or `Error::RenderError`
///   from reading and rendering a template
/// * `Error::IoError` if a directory or file cannot be created
pub fn write_project(
    store: &TemplateStore,
    renderer: &dyn TemplateRenderer,
    data: &TemplateData,
    project_root: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(store.len());

    for template_path in store.list_all() {
        debug!("Processing template: {template_path}");

        let raw = store.read(template_path)?;
        let source = std::str::from_utf8(raw).map_err(|e| Error::ParseError {
            template: template_path.to_string(),
            reason: format!("template is not valid UTF-8: {e}"),
        })?;
        let content = renderer.render(template_path, source, data)?;

        let target = project_root.join(resolve_output_path(template_path, data));
        debug!("Writing file: {}", target.display());
        write_file(&target, &content)?;

        written.push(target);
    }

    Ok(written)
}
