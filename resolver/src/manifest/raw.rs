// src/manifest/raw.rs
// Structs mapping directly onto the YAML manifest.

use crate::config::ResolverConfig;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct ManifestRaw {
  #[serde(default)]
  pub config: Option<ResolverConfig>,
  #[serde(default)]
  pub bindings: HashMap<String, String>,
  #[serde(default)]
  pub singletons: HashMap<String, serde_yaml::Value>,
  // Entries are single-key maps (`type: X`), not YAML tags (`!type X`).
  #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
  pub dependencies: HashMap<String, Vec<DependencyRaw>>,
}

/// `- type: Name` or `- value: <scalar>`
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub(crate) enum DependencyRaw {
  Type(String),
  Value(serde_yaml::Value),
}
