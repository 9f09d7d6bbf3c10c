//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        max_operations = 14
        enumeration = "product"
        preferred_order = ["intellect", "strength", "agility", "focus"]
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.max_operations, 14);
    assert_eq!(config.enumeration, Enumeration::Product);
    assert_eq!(
        config.preferred_order,
        Some(vec![
            Attribute::Intellect,
            Attribute::Strength,
            Attribute::Agility,
            Attribute::Focus,
        ])
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_defaults() {
    let config = SolverConfig::from_toml_str("max_operations = 12").unwrap();
    assert_eq!(config.enumeration, Enumeration::Multiset);
    assert_eq!(config.preferred_order, None);
}

#[test]
fn test_cap_is_required() {
    let result = SolverConfig::from_toml_str(r#"enumeration = "product""#);
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_unknown_attribute_rejected() {
    let result = SolverConfig::from_toml_str(
        r#"
        max_operations = 12
        preferred_order = ["luck"]
    "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        max_operations: 20
        enumeration: multiset
        preferred_order:
          - focus
          - agility
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.max_operations, 20);
    assert_eq!(config.enumeration, Enumeration::Multiset);
    assert_eq!(
        config.preferred_order,
        Some(vec![Attribute::Focus, Attribute::Agility])
    );
}

#[test]
fn test_builder() {
    let config = SolverConfig::new(12)
        .with_max_operations(18)
        .with_enumeration(Enumeration::Product)
        .with_preferred_order([Attribute::Strength, Attribute::Focus]);

    assert_eq!(config.max_operations, 18);
    assert_eq!(config.enumeration, Enumeration::Product);
    assert_eq!(config.preferred_order.as_deref().map(<[_]>::len), Some(2));
}

#[test]
fn test_validate_zero_cap() {
    let config = SolverConfig::new(0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_duplicate_order() {
    let config = SolverConfig::new(12).with_preferred_order(vec![
        Attribute::Focus,
        Attribute::Agility,
        Attribute::Focus,
    ]);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("focus"));
}

#[test]
fn test_toml_round_trip() {
    let config = SolverConfig::new(16).with_preferred_order([Attribute::Intellect]);
    let text = config.to_toml_string().unwrap();
    assert_eq!(SolverConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_load_missing_file() {
    let result = SolverConfig::load("/nonexistent/trainforge.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_enumeration_display() {
    assert_eq!(format!("{}", Enumeration::Multiset), "Multiset");
    assert_eq!(format!("{}", Enumeration::Product), "Product");
}

#[test]
fn test_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solver.yaml");
    std::fs::write(
        &path,
        "max_operations: 14\nenumeration: product\npreferred_order: [strength, agility]\n",
    )
    .unwrap();

    let config = SolverConfig::from_yaml_file(&path).unwrap();
    assert_eq!(
        config,
        SolverConfig::new(14)
            .with_enumeration(Enumeration::Product)
            .with_preferred_order([Attribute::Strength, Attribute::Agility])
    );
}

#[test]
fn test_yaml_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = SolverConfig::from_yaml_file(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_validates_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solver.toml");

    std::fs::write(&path, "max_operations = 12\n").unwrap();
    assert_eq!(SolverConfig::load(&path).unwrap(), SolverConfig::new(12));

    std::fs::write(&path, "max_operations = 0\n").unwrap();
    assert!(matches!(
        SolverConfig::load(&path),
        Err(ConfigError::Invalid(_))
    ));
}
