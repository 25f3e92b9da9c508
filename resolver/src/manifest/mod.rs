//! Declarative resolver setup from a YAML manifest.
//!
//! ```yaml
//! config:
//!   max_rebinding_hops: 16
//! bindings:
//!   Logger: ConsoleLogger
//! singletons:
//!   AppName: "billing"
//! dependencies:
//!   Mailer:
//!     - type: SmtpTransport
//!     - value: 25
//!     - value: "smtp.local"
//! ```
//!
//! Literal values become `i64`, `u64` (above `i64::MAX`), `f64`, `bool`,
//! `String` or `()` instances. Sequences and maps are rejected.

mod raw;

use crate::config::ResolverConfig;
use crate::core::{Dependency, Instance};
use crate::error::ManifestError;
use crate::resolver::Resolver;
use raw::{DependencyRaw, ManifestRaw};
use serde_yaml::Value;
use std::path::Path;

/// A validated manifest, ready to apply to a `Resolver`.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
  pub config: Option<ResolverConfig>,
  pub bindings: Vec<(String, String)>,
  pub singletons: Vec<(String, Instance)>,
  pub dependencies: Vec<(String, Vec<Dependency>)>,
}

impl Manifest {
  pub fn from_yaml_str(source: &str) -> Result<Self, ManifestError> {
    let raw: ManifestRaw = serde_yaml::from_str(source)?;
    Self::process(raw)
  }

  pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
    let source = std::fs::read_to_string(path)?;
    Self::from_yaml_str(&source)
  }

  fn process(raw: ManifestRaw) -> Result<Self, ManifestError> {
    let mut bindings: Vec<_> = raw.bindings.into_iter().collect();
    bindings.sort();

    let mut singletons = Vec::with_capacity(raw.singletons.len());
    for (type_name, value) in raw.singletons {
      let instance = literal(value).map_err(|message| ManifestError::InvalidSingleton {
        type_name: type_name.clone(),
        message: message.to_owned(),
      })?;
      singletons.push((type_name, instance));
    }
    singletons.sort_by(|a, b| a.0.cmp(&b.0));

    let mut dependencies = Vec::with_capacity(raw.dependencies.len());
    for (type_name, entries) in raw.dependencies {
      let resolved = entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| match entry {
          DependencyRaw::Type(name) => Ok(Dependency::Type(name)),
          DependencyRaw::Value(value) => literal(value)
            .map(Dependency::Value)
            .map_err(|message| ManifestError::InvalidValue {
              type_name: type_name.clone(),
              position,
              message: message.to_owned(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;
      dependencies.push((type_name, resolved));
    }
    dependencies.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(Self {
      config: raw.config,
      bindings,
      singletons,
      dependencies,
    })
  }
}

fn literal(value: Value) -> Result<Instance, &'static str> {
  match value {
    Value::Null => Ok(Instance::new(())),
    Value::Bool(b) => Ok(Instance::new(b)),
    Value::String(s) => Ok(Instance::new(s)),
    Value::Number(n) => {
      if let Some(i) = n.as_i64() {
        Ok(Instance::new(i))
      } else if let Some(u) = n.as_u64() {
        Ok(Instance::new(u))
      } else if let Some(f) = n.as_f64() {
        Ok(Instance::new(f))
      } else {
        Err("unsupported number")
      }
    }
    Value::Sequence(_) => Err("sequences cannot be used as literal values"),
    Value::Mapping(_) => Err("maps cannot be used as literal values"),
    Value::Tagged(_) => Err("tagged values cannot be used as literal values"),
  }
}

impl Resolver {
  /// Builds a resolver configured by `manifest`.
  pub fn from_manifest(manifest: &Manifest) -> Self {
    let resolver = Self::with_config(manifest.config.clone().unwrap_or_default());
    resolver.apply_manifest(manifest);
    resolver
  }

  /// Registers every binding, singleton and dependency override of
  /// `manifest`. The manifest's `config` section is ignored here since limits
  /// are fixed at construction.
  pub fn apply_manifest(&self, manifest: &Manifest) {
    for (type_name, replacement) in &manifest.bindings {
      self.bind(type_name.as_str(), replacement.as_str());
    }
    for (type_name, instance) in &manifest.singletons {
      self.register_singleton(type_name.as_str(), instance.clone());
    }
    for (type_name, dependencies) in &manifest.dependencies {
      self.set_dependencies(type_name.as_str(), dependencies.iter().cloned());
    }
  }
}
