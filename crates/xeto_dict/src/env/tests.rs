use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_config_fallback() {
    let config = DictConfig::from_lookup(|_| None);
    assert_eq!(config.default_schema, FALLBACK_SCHEMA);
    assert_eq!(config, DictConfig::default());
}

#[test]
fn test_config_from_variable() {
    let config = DictConfig::from_lookup(|key| {
        (key == DEFAULT_SCHEMA_VAR).then(|| " ph::Entity ".to_owned())
    });
    assert_eq!(config.default_schema, "ph::Entity");
}

#[test]
fn test_config_blank_variable() {
    let config = DictConfig::from_lookup(|_| Some("   ".to_owned()));
    assert_eq!(config.default_schema, FALLBACK_SCHEMA);
}

#[test]
fn test_default_schema_is_cached() {
    let first = default_schema();
    let second = default_schema();
    assert!(first.ptr_eq(second));
}
