//! Tunables for a `Resolver`.

use serde::Deserialize;

fn default_max_rebinding_hops() -> usize {
  64
}

fn default_max_depth() -> usize {
  128
}

fn default_detect_cycles() -> bool {
  true
}

/// Limits applied while a `Resolver` walks bindings and constructor graphs.
///
/// Every field has a default, so a partial YAML/JSON document deserializes into
/// a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
  /// Maximum number of rebinding hops followed before giving up with
  /// `RebindingCycle`.
  #[serde(default = "default_max_rebinding_hops")]
  pub max_rebinding_hops: usize,
  /// Maximum nesting of constructions within a single `provide` call. Only
  /// enforced while `detect_cycles` is off; with detection on, an acyclic
  /// chain is already bounded by the number of registered types.
  #[serde(default = "default_max_depth")]
  pub max_depth: usize,
  /// Fail with `CircularDependency` as soon as a type appears in its own
  /// construction chain. When disabled, only `max_depth` bounds recursion.
  #[serde(default = "default_detect_cycles")]
  pub detect_cycles: bool,
}

impl Default for ResolverConfig {
  fn default() -> Self {
    Self {
      max_rebinding_hops: default_max_rebinding_hops(),
      max_depth: default_max_depth(),
      detect_cycles: default_detect_cycles(),
    }
  }
}

impl ResolverConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn max_rebinding_hops(mut self, hops: usize) -> Self {
    self.max_rebinding_hops = hops;
    self
  }

  pub fn max_depth(mut self, depth: usize) -> Self {
    self.max_depth = depth;
    self
  }

  pub fn detect_cycles(mut self, enabled: bool) -> Self {
    self.detect_cycles = enabled;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_are_bounded() {
    let config = ResolverConfig::default();
    assert_eq!(config.max_rebinding_hops, 64);
    assert_eq!(config.max_depth, 128);
    assert!(config.detect_cycles);
  }

  #[test]
  fn builder_overrides_fields() {
    let config = ResolverConfig::new()
      .max_rebinding_hops(4)
      .max_depth(8)
      .detect_cycles(false);
    assert_eq!(
      config,
      ResolverConfig {
        max_rebinding_hops: 4,
        max_depth: 8,
        detect_cycles: false,
      }
    );
  }
}
