//! The main `Resolver` struct and its associated methods.

use crate::config::ResolverConfig;
use crate::core::{Dependency, Instance, ResolutionContext};
use crate::descriptor::{Arguments, Injectable, TypeDescriptor};
use crate::error::{ResolveError, Result};
use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// The dependency resolver.
///
/// Holds four registries, all keyed by type name:
///
/// - rebindings (`bind`), followed transitively before anything else,
/// - singletons (`register_singleton`), returned verbatim,
/// - explicit constructor overrides (`set_dependencies`), one per parameter
///   position,
/// - type descriptors (`register_type`), the constructor signatures used to
///   build everything else.
///
/// All registries are concurrent maps, so a `Resolver` can be shared between
/// threads and registered into at any time.
pub struct Resolver {
  config: ResolverConfig,
  bindings: DashMap<String, String>,
  singletons: DashMap<String, Instance>,
  dependencies: DashMap<String, Arc<[Dependency]>>,
  types: DashMap<String, Arc<TypeDescriptor>>,
}

impl Default for Resolver {
  fn default() -> Self {
    Self::with_config(ResolverConfig::default())
  }
}

impl Resolver {
  /// Creates a new, empty `Resolver` with the default limits.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: ResolverConfig) -> Self {
    Self {
      config,
      bindings: DashMap::new(),
      singletons: DashMap::new(),
      dependencies: DashMap::new(),
      types: DashMap::new(),
    }
  }

  pub fn config(&self) -> &ResolverConfig {
    &self.config
  }

  // --- Registration ---

  /// Resolves `type_name` as `replacement` from now on. The replacement is not
  /// checked and may itself be rebound.
  pub fn bind(&self, type_name: impl Into<String>, replacement: impl Into<String>) {
    self.bindings.insert(type_name.into(), replacement.into());
  }

  /// Returns `instance` for every later resolution of `type_name`.
  pub fn register_singleton(&self, type_name: impl Into<String>, instance: Instance) {
    self.singletons.insert(type_name.into(), instance);
  }

  /// Wraps `value` and registers it as the singleton for `type_name`.
  pub fn add_instance<T: Any + Send + Sync>(&self, type_name: impl Into<String>, value: T) {
    self.register_singleton(type_name, Instance::new(value));
  }

  /// Sets explicit arguments for the constructor of `type_name`, by position.
  /// Entries past the constructor's last parameter are ignored.
  pub fn set_dependencies<I>(&self, type_name: impl Into<String>, dependencies: I)
  where
    I: IntoIterator,
    I::Item: Into<Dependency>,
  {
    let dependencies: Arc<[Dependency]> = dependencies.into_iter().map(Into::into).collect();
    self.dependencies.insert(type_name.into(), dependencies);
  }

  /// Makes a type constructible under its descriptor's name.
  pub fn register_type(&self, descriptor: TypeDescriptor) {
    self
      .types
      .insert(descriptor.name().to_owned(), Arc::new(descriptor));
  }

  /// Registers the injectable `T` under `T::type_name()`.
  pub fn register<T: Injectable>(&self) {
    self.register_type(TypeDescriptor::of::<T>());
  }

  // --- Introspection ---

  /// Whether a constructor descriptor exists for exactly `type_name`.
  pub fn is_registered(&self, type_name: &str) -> bool {
    self.types.contains_key(type_name)
  }

  pub fn has_singleton(&self, type_name: &str) -> bool {
    self.singletons.contains_key(type_name)
  }

  /// Follows the rebinding table from `type_name` to its final name.
  ///
  /// A name bound to itself is a fixed point. A chain that revisits a name or
  /// exceeds `max_rebinding_hops` fails with `RebindingCycle`.
  pub fn final_name(&self, type_name: &str) -> Result<String> {
    let mut current = type_name.to_owned();
    let mut chain = vec![current.clone()];
    while let Some(next) = self.next_binding(&current) {
      let looped = chain.contains(&next);
      chain.push(next.clone());
      let hops = chain.len() - 1;
      if looped || hops > self.config.max_rebinding_hops {
        warn!(type_name, chain = ?chain, "rebinding chain does not terminate");
        return Err(ResolveError::RebindingCycle {
          type_name: type_name.to_owned(),
          chain,
        });
      }
      trace!(from = %current, to = %next, "rebinding");
      current = next;
    }
    Ok(current)
  }

  fn next_binding(&self, type_name: &str) -> Option<String> {
    self
      .bindings
      .get(type_name)
      .map(|entry| entry.value().clone())
      .filter(|next| next != type_name)
  }

  // --- Resolution ---

  /// Resolves and constructs an instance of `type_name`.
  ///
  /// Rebindings are followed first; a singleton registered for the final name
  /// is returned as-is. Otherwise every constructor parameter is resolved in
  /// order, from an explicit override, a nested `provide` of its declared type,
  /// or its default value, and a fresh instance is built.
  pub fn provide(&self, type_name: &str) -> Result<Instance> {
    let mut ctx = ResolutionContext::new(&self.config);
    self.provide_in(type_name, &mut ctx)
  }

  /// Resolves `type_name` and downcasts the result to `T`.
  pub fn provide_as<T: Any + Send + Sync>(&self, type_name: &str) -> Result<Arc<T>> {
    let instance = self.provide(type_name)?;
    instance
      .downcast::<T>()
      .ok_or_else(|| ResolveError::TypeMismatch {
        type_name: type_name.to_owned(),
        expected: std::any::type_name::<T>(),
        found: instance.type_name(),
      })
  }

  /// Resolves the injectable `T` by its registered name.
  pub fn provide_type<T: Injectable>(&self) -> Result<Arc<T>> {
    self.provide_as::<T>(T::type_name())
  }

  fn provide_in(&self, type_name: &str, ctx: &mut ResolutionContext) -> Result<Instance> {
    let target = self.final_name(type_name)?;

    if let Some(singleton) = self.singletons.get(target.as_str()) {
      trace!(type_name, target = %target, "singleton hit");
      return Ok(singleton.value().clone());
    }

    // Clone the descriptor out so no map guard is held while recursing.
    let descriptor = self
      .types
      .get(target.as_str())
      .map(|entry| Arc::clone(entry.value()))
      .ok_or_else(|| ResolveError::UnresolvableType {
        type_name: target.clone(),
      })?;

    if let Err(err) = ctx.enter(&target) {
      if let ResolveError::CircularDependency { chain, .. } = &err {
        warn!(type_name = %target, chain = ?chain, "circular dependency");
      }
      return Err(err);
    }
    let result = self.construct(&descriptor, ctx);
    ctx.leave();
    result
  }

  fn construct(&self, descriptor: &TypeDescriptor, ctx: &mut ResolutionContext) -> Result<Instance> {
    let overrides = self
      .dependencies
      .get(descriptor.name())
      .map(|entry| Arc::clone(entry.value()));

    let mut values = Vec::with_capacity(descriptor.parameters().len());
    for (position, parameter) in descriptor.parameters().iter().enumerate() {
      let explicit = overrides.as_deref().and_then(|deps| deps.get(position));
      let value = match (explicit, parameter.kind(), parameter.default()) {
        (Some(Dependency::Type(name)), _, _) => self.provide_in(name, ctx)?,
        (Some(Dependency::Value(value)), _, _) => value.clone(),
        (None, Some(kind), _) => self.provide_in(kind, ctx)?,
        (None, None, Some(default)) => default.clone(),
        (None, None, None) => {
          return Err(ResolveError::MissingDependency {
            type_name: descriptor.name().to_owned(),
            position,
            parameter: Some(parameter.name().to_owned()),
          })
        }
      };
      values.push(value);
    }

    debug!(
      type_name = descriptor.name(),
      arguments = values.len(),
      depth = ctx.depth(),
      "constructing"
    );
    descriptor.construct(&Arguments::new(descriptor.name(), values))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::descriptor::Parameter;

  fn unit(resolver: &Resolver, name: &'static str) {
    resolver.register_type(TypeDescriptor::new(name, move |_| Ok(name)));
  }

  #[test]
  fn final_name_follows_chains() {
    let resolver = Resolver::new();
    resolver.bind("A", "B");
    resolver.bind("B", "C");
    assert_eq!(resolver.final_name("A").unwrap(), "C");
    assert_eq!(resolver.final_name("C").unwrap(), "C");
  }

  #[test]
  fn self_binding_is_a_fixed_point() {
    let resolver = Resolver::new();
    resolver.bind("A", "A");
    assert_eq!(resolver.final_name("A").unwrap(), "A");
  }

  #[test]
  fn rebinding_loop_is_reported() {
    let resolver = Resolver::new();
    resolver.bind("A", "B");
    resolver.bind("B", "A");
    match resolver.final_name("A") {
      Err(ResolveError::RebindingCycle { type_name, chain }) => {
        assert_eq!(type_name, "A");
        assert_eq!(chain, vec!["A", "B", "A"]);
      }
      other => panic!("unexpected result: {:?}", other),
    }
  }

  #[test]
  fn rebinding_hops_are_bounded() {
    let resolver = Resolver::with_config(ResolverConfig::new().max_rebinding_hops(2));
    resolver.bind("A", "B");
    resolver.bind("B", "C");
    assert_eq!(resolver.final_name("A").unwrap(), "C");
    resolver.bind("C", "D");
    assert!(matches!(
      resolver.final_name("A"),
      Err(ResolveError::RebindingCycle { .. })
    ));
  }

  #[test]
  fn unbounded_hop_limit_does_not_overflow() {
    let resolver = Resolver::with_config(ResolverConfig::new().max_rebinding_hops(usize::MAX));
    resolver.register_type(TypeDescriptor::new("B", |_| Ok(7_i64)));
    resolver.bind("A", "B");
    assert_eq!(resolver.final_name("A").unwrap(), "B");
    assert_eq!(*resolver.provide_as::<i64>("A").unwrap(), 7);
  }

  #[test]
  fn zero_hop_limit_rejects_any_binding() {
    let resolver = Resolver::with_config(ResolverConfig::new().max_rebinding_hops(0));
    assert_eq!(resolver.final_name("A").unwrap(), "A");
    resolver.bind("A", "B");
    assert!(matches!(
      resolver.final_name("A"),
      Err(ResolveError::RebindingCycle { .. })
    ));
  }

  #[test]
  fn singleton_is_keyed_by_final_name() {
    let resolver = Resolver::new();
    unit(&resolver, "Impl");
    resolver.bind("Api", "Impl");
    resolver.add_instance("Api", "registered under the requested name");
    assert!(resolver.has_singleton("Api"));
    assert!(resolver.is_registered("Impl"));
    assert!(!resolver.is_registered("Api"));

    // The rebinding wins; the singleton registered under "Api" is never seen.
    let instance = resolver.provide("Api").unwrap();
    assert_eq!(instance.downcast_ref::<&str>(), Some(&"Impl"));

    resolver.add_instance("Impl", "singleton");
    let instance = resolver.provide("Api").unwrap();
    assert_eq!(instance.downcast_ref::<&str>(), Some(&"singleton"));
  }

  #[test]
  fn missing_dependency_names_the_parameter() {
    let resolver = Resolver::new();
    resolver.register_type(
      TypeDescriptor::new("Needy", |_| Ok(()))
        .with_parameter(Parameter::new("first").with_default(1_i64))
        .with_parameter(Parameter::new("second")),
    );
    match resolver.provide("Needy") {
      Err(ResolveError::MissingDependency {
        type_name,
        position,
        parameter,
      }) => {
        assert_eq!(type_name, "Needy");
        assert_eq!(position, 1);
        assert_eq!(parameter.as_deref(), Some("second"));
      }
      other => panic!("unexpected result: {:?}", other),
    }
  }

  #[test]
  fn provide_as_reports_mismatched_type() {
    let resolver = Resolver::new();
    resolver.add_instance("Port", 8080_u16);
    assert_eq!(*resolver.provide_as::<u16>("Port").unwrap(), 8080);
    assert!(matches!(
      resolver.provide_as::<String>("Port"),
      Err(ResolveError::TypeMismatch { found: "u16", .. })
    ));
  }
}
