mod common;

use std::path::PathBuf;

use go_app_gen::path::resolve_output_path;
use go_app_gen::project::TemplateData;

fn data(app_name: &str, domain: &str) -> TemplateData {
    TemplateData::from_config(&common::config(app_name, domain, &[]))
}

#[test]
fn test_resolve_strips_prefix_suffix_and_substitutes() {
    let path = resolve_output_path("templates/{{AppName}}/{{Domain}}.go.tmpl", &data("shop", "order"));
    assert_eq!(path, PathBuf::from("shop/order.go"));
}

#[test]
fn test_resolve_all_tokens() {
    let data = data("shop", "Category");
    assert_eq!(
        resolve_output_path("templates/internal/{{domain}}/{{Domain}}.go.tmpl", &data),
        PathBuf::from("internal/category/Category.go")
    );
    assert_eq!(
        resolve_output_path("templates/db/001_create_{{domain_plural}}.sql.tmpl", &data),
        PathBuf::from("db/001_create_Categories.sql")
    );
}

#[test]
fn test_suffix_is_stripped_before_substitution() {
    let mut data = data("shop", "order");
    data.domain = "report.tmpl".to_string();

    assert_eq!(resolve_output_path("templates/{{Domain}}", &data), PathBuf::from("report.tmpl"));
}

#[test]
fn test_non_template_files_keep_their_name() {
    assert_eq!(
        resolve_output_path("templates/static/logo.png", &data("shop", "order")),
        PathBuf::from("static/logo.png")
    );
}

#[test]
fn test_unknown_tokens_are_kept() {
    assert_eq!(
        resolve_output_path("templates/{{Unknown}}/{{ AppName }}.txt.tmpl", &data("shop", "order")),
        PathBuf::from("{{Unknown}}/{{ AppName }}.txt")
    );
}
