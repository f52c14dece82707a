mod common;

use go_app_gen::error::Error;
use go_app_gen::project::{FeatureSet, ProjectConfig, TemplateData, TOOL_VERSION};

#[test]
fn test_template_data_derivation() {
    let data = TemplateData::from_config(&common::config("shop", "Category", &[]));

    assert_eq!(data.app_name, "shop");
    assert_eq!(data.module_name, "example.com/shop");
    assert_eq!(data.package_import_path, "example.com/shop");
    assert_eq!(data.domain, "Category");
    assert_eq!(data.domain_title, "Category");
    assert_eq!(data.domain_plural, "Categories");
    assert_eq!(data.domain_plural_lower, "categories");
    assert_eq!(data.domain_lower, "category");
    assert_eq!(data.go_version, TOOL_VERSION);
}

#[test]
fn test_has_feature() {
    let data = TemplateData::from_config(&common::config("shop", "order", &["cors", "auth", "cors"]));

    assert!(data.has_feature("cors"));
    assert!(data.has_feature("auth"));
    assert!(!data.has_feature("CORS"));
    assert!(!data.has_feature("metrics"));
    assert_eq!(data.features.len(), 2);
}

#[test]
fn test_feature_set_ignores_order() {
    let a: FeatureSet = ["b", "a"].into_iter().collect();
    let b: FeatureSet = ["a", "b", "a"].into_iter().collect();
    assert_eq!(a, b);
    assert_eq!(a.iter().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_template_data_serializes_pascal_case() {
    let data = TemplateData::from_config(&common::config("shop", "order", &["cors"]));
    let value = serde_json::to_value(&data).unwrap();

    assert_eq!(value["AppName"], "shop");
    assert_eq!(value["DomainPluralLower"], "orders");
    assert_eq!(value["GoVersion"], "1.23");
    assert_eq!(value["Features"], serde_json::json!(["cors"]));
}

#[test]
fn test_validate() {
    assert!(common::config("shop", "order", &[]).validate().is_ok());

    let missing_name = ProjectConfig { app_name: String::new(), ..common::config("x", "order", &[]) };
    let missing_module =
        ProjectConfig { module_name: String::new(), ..common::config("shop", "order", &[]) };
    let bad_name = common::config("my shop", "order", &[]);
    let bad_domain = common::config("shop", "sales order", &[]);

    for config in [missing_name, missing_module, bad_name, bad_domain] {
        match config.validate() {
            Err(Error::ConfigError(_)) => (),
            other => panic!("Expected ConfigError, got {other:?}"),
        }
    }
}
