mod common;

use common::{Car, Engine, Point};
use fibre_resolver::{Manifest, ManifestError, Resolver, ResolverConfig, ResolveError};
use pretty_assertions::assert_eq;
use std::io::Write;

const GARAGE: &str = r#"
config:
  max_rebinding_hops: 4
  detect_cycles: false
bindings:
  Vehicle: Car
  Automobile: Vehicle
singletons:
  Motto: "drive safe"
dependencies:
  Car:
    - type: Engine
    - value: 3
  Point:
    - value: 7
"#;

fn garage() -> Resolver {
  let manifest = Manifest::from_yaml_str(GARAGE).unwrap();
  let resolver = Resolver::from_manifest(&manifest);
  resolver.register::<Engine>();
  resolver.register::<Car>();
  resolver.register::<Point>();
  resolver
}

#[test]
fn test_manifest_config_is_applied() {
  let resolver = garage();

  assert_eq!(
    resolver.config(),
    &ResolverConfig {
      max_rebinding_hops: 4,
      max_depth: 128,
      detect_cycles: false,
    }
  );
}

#[test]
fn test_manifest_bindings_and_overrides() {
  let resolver = garage();

  let car = resolver.provide_as::<Car>("Automobile").unwrap();

  assert_eq!(car.wheels, 3);
  assert_eq!(car.model, "roadster");
}

#[test]
fn test_manifest_singletons() {
  let resolver = garage();

  assert_eq!(*resolver.provide_as::<String>("Motto").unwrap(), "drive safe");
}

#[test]
fn test_manifest_partial_overrides_still_fail_on_missing_parameters() {
  let resolver = garage();

  // Point's second parameter has no override and no default.
  match resolver.provide("Point") {
    Err(ResolveError::MissingDependency { position, .. }) => assert_eq!(position, 1),
    other => panic!("expected MissingDependency, got {:?}", other),
  }
}

#[test]
fn test_apply_manifest_keeps_existing_config() {
  let resolver = Resolver::with_config(ResolverConfig::new().max_depth(3));
  let manifest = Manifest::from_yaml_str(GARAGE).unwrap();

  resolver.apply_manifest(&manifest);

  assert_eq!(resolver.config().max_depth, 3);
  assert!(resolver.config().detect_cycles);
  assert_eq!(resolver.final_name("Automobile").unwrap(), "Car");
}

#[test]
fn test_manifest_from_path() {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  file.write_all(GARAGE.as_bytes()).unwrap();

  let manifest = Manifest::from_path(file.path()).unwrap();

  assert_eq!(manifest.bindings.len(), 2);
  assert_eq!(manifest.singletons.len(), 1);
  assert_eq!(manifest.dependencies.len(), 2);
}

#[test]
fn test_manifest_from_missing_path() {
  let dir = tempfile::tempdir().unwrap();

  let err = Manifest::from_path(dir.path().join("absent.yaml")).unwrap_err();

  assert!(matches!(err, ManifestError::Io(_)));
}

#[test]
fn test_manifest_rejects_unknown_sections() {
  let err = Manifest::from_yaml_str("bindings: {}\nlifecycle: {}").unwrap_err();

  assert!(matches!(err, ManifestError::Parse(_)));
}
