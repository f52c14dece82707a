mod common;

use go_app_gen::error::Error;
use go_app_gen::project::TemplateData;
use go_app_gen::renderer::{MiniJinjaRenderer, TemplateRenderer};

fn data(features: &[&str]) -> TemplateData {
    TemplateData::from_config(&common::config("shop", "order", features))
}

#[test]
fn test_minijinja_renderer() {
    let engine = MiniJinjaRenderer::new();
    let result = engine
        .render("greeting", "type {{ DomainTitle }} in {{ AppName }}/{{ DomainPluralLower }}", &data(&[]))
        .unwrap();
    assert_eq!(result, "type Order in shop/orders");
}

#[test]
fn test_trailing_newline_is_kept() {
    let engine = MiniJinjaRenderer::new();
    let result = engine.render("main.go", "package {{ DomainLower }}\n", &data(&[])).unwrap();
    assert_eq!(result, "package order\n");
}

#[test]
fn test_has_feature_in_conditionals() {
    let engine = MiniJinjaRenderer::new();
    let template = "{% if has_feature(\"cors\") %}cors{% else %}plain{% endif %}";

    assert_eq!(engine.render("t", template, &data(&["cors"])).unwrap(), "cors");
    assert_eq!(engine.render("t", template, &data(&["auth"])).unwrap(), "plain");
}

#[test]
fn test_iteration_over_features() {
    let engine = MiniJinjaRenderer::new();
    let result = engine
        .render("t", "{% for f in Features %}{{ f }};{% endfor %}", &data(&["b", "a", "b"]))
        .unwrap();
    assert_eq!(result, "a;b;");
}

#[test]
fn test_rendering_is_deterministic() {
    let engine = MiniJinjaRenderer::new();
    let template = "{% for f in Features %}{{ f }}{% endfor %} {{ ModuleName }}";
    let first = engine.render("t", template, &data(&["x", "y", "z"])).unwrap();
    let second = engine.render("t", template, &data(&["z", "y", "x"])).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_syntax_error_is_parse_error() {
    let engine = MiniJinjaRenderer::new();
    match engine.render("broken.go.tmpl", "{% if AppName %}never closed", &data(&[])) {
        Err(Error::ParseError { template, .. }) => assert_eq!(template, "broken.go.tmpl"),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_undefined_field_is_render_error() {
    let engine = MiniJinjaRenderer::new();
    match engine.render("missing.tmpl", "{{ NoSuchField }}", &data(&[])) {
        Err(Error::RenderError { template, .. }) => assert_eq!(template, "missing.tmpl"),
        other => panic!("Expected RenderError, got {other:?}"),
    }
}

#[test]
fn test_has_feature_without_argument_is_render_error() {
    let engine = MiniJinjaRenderer::new();
    assert!(matches!(
        engine.render("t", "{{ has_feature() }}", &data(&[])),
        Err(Error::RenderError { .. })
    ));
}
