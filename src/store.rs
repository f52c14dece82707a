//! Read-only set of template resources.
//!
//! The default store is compiled into the binary from the crate's
//! `templates/` directory. A store can also be loaded from a directory on
//! disk; either way resources are addressed by a virtual, forward-slash
//! separated path starting with [`TEMPLATE_ROOT`].

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use log::debug;
use rust_embed::RustEmbed;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Prefix shared by every virtual template path.
pub const TEMPLATE_ROOT: &str = "templates/";

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Bundle;

/// Immutable, ordered collection of template resources.
#[derive(Debug, Default)]
pub struct TemplateStore {
    resources: BTreeMap<String, Cow<'static, [u8]>>,
}

impl TemplateStore {
    /// Returns the templates bundled with this build.
    ///
    /// The store is loaded on first use and shared by the whole process.
    pub fn embedded() -> &'static TemplateStore {
        static STORE: OnceLock<TemplateStore> = OnceLock::new();
        STORE.get_or_init(|| {
            let resources = Bundle::iter()
                .filter_map(|name| {
                    Bundle::get(&name)
                        .map(|file| (format!("{TEMPLATE_ROOT}{name}"), file.data))
                })
                .collect::<BTreeMap<_, _>>();
            debug!("Loaded {} bundled templates", resources.len());
            TemplateStore { resources }
        })
    }

    /// Loads every file below `dir` as a template resource.
    ///
    /// # Errors
    /// * `Error::IoError` if the directory cannot be walked or a file cannot be read
    /// * `Error::ConfigError` if a file name is not valid UTF-8
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut resources = BTreeMap::new();

        for entry in WalkDir::new(dir).follow_links(true) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                Error::io(&path, e.into())
            })?;
            if entry.file_type().is_dir() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(dir)
                .map_err(|e| Error::ConfigError(e.to_string()))?;
            let relative = relative.to_str().ok_or_else(|| {
                Error::ConfigError(format!(
                    "template path '{}' is not valid UTF-8",
                    relative.display()
                ))
            })?;
            let virtual_path =
                format!("{TEMPLATE_ROOT}{}", relative.replace(std::path::MAIN_SEPARATOR, "/"));
            let content = std::fs::read(entry.path()).map_err(|e| Error::io(entry.path(), e))?;

            debug!("Loaded template '{virtual_path}' from {}", entry.path().display());
            resources.insert(virtual_path, Cow::Owned(content));
        }

        Ok(Self { resources })
    }

    /// Builds a store from `(virtual path, content)` pairs.
    pub fn from_resources<I, P, C>(resources: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<Vec<u8>>,
    {
        let resources = resources
            .into_iter()
            .map(|(path, content)| (path.into(), Cow::Owned(content.into())))
            .collect();
        Self { resources }
    }

    /// Every resource path in lexicographic order.
    pub fn list_all(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// Raw content of the resource at `path`.
    ///
    /// # Errors
    /// * `Error::ResourceNotFound` if no such resource exists
    pub fn read(&self, path: &str) -> Result<&[u8]> {
        self.resources
            .get(path)
            .map(|content| content.as_ref())
            .ok_or_else(|| Error::ResourceNotFound { path: path.to_string() })
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
