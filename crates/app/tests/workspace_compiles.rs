//! Integration test to verify the workspace crates link together.

#![allow(clippy::no_effect_underscore_binding)]

#[test]
fn domain_crate_compiles() {
    // Verify domain types are accessible
    let _value = shelltpl_domain::Value::from("text");
    let _position = shelltpl_domain::Position::new(1, 1);
    let _options = shelltpl_domain::TemplateOptions::default();
}

#[test]
fn application_crate_compiles() {
    // Verify application ports are accessible
    use shelltpl_application::ports::DocumentValidator;
    assert!(shelltpl_application::NoValidation.validate("").is_ok());
}

#[test]
fn infrastructure_crate_compiles() {
    // Verify infrastructure adapters are accessible
    use shelltpl_application::ports::DocumentValidator;
    let validator = shelltpl_infrastructure::adapters::YamlChunkValidator::new();
    assert!(validator.validate("a: 1\n").is_ok());
}
