//! Output path resolution for template resources.
//!
//! Paths are not run through the template engine. The template root and
//! the `.tmpl` suffix are stripped first, then a fixed list of literal
//! tokens is replaced. Anything else, including unknown `{{...}}` tokens,
//! is kept verbatim, so resolution cannot fail.

use std::path::PathBuf;

use crate::project::TemplateData;
use crate::store::TEMPLATE_ROOT;

/// Suffix marking a template file.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

fn app_name(data: &TemplateData) -> &str {
    &data.app_name
}

fn domain(data: &TemplateData) -> &str {
    &data.domain
}

fn domain_lower(data: &TemplateData) -> &str {
    &data.domain_lower
}

fn domain_plural(data: &TemplateData) -> &str {
    &data.domain_plural
}

/// Path tokens and the field each one is replaced with, in substitution order.
pub const PATH_TOKENS: [(&str, fn(&TemplateData) -> &str); 4] = [
    ("{{AppName}}", app_name),
    ("{{Domain}}", domain),
    ("{{domain}}", domain_lower),
    ("{{domain_plural}}", domain_plural),
];

/// Resolves a virtual template path to a path relative to the project root.
pub fn resolve_output_path(virtual_path: &str, data: &TemplateData) -> PathBuf {
    let path = virtual_path.strip_prefix(TEMPLATE_ROOT).unwrap_or(virtual_path);
    let path = path.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(path);

    let resolved = PATH_TOKENS
        .iter()
        .fold(path.to_string(), |acc, (token, field)| acc.replace(token, field(data)));

    resolved.split('/').filter(|segment| !segment.is_empty()).collect()
}
