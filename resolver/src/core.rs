//! Core data structures shared by the resolver: instance handles, dependency
//! specifiers and the per-call resolution context.

use crate::config::ResolverConfig;
use crate::error::{ResolveError, Result};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A type-erased, shareable handle to a constructed value.
///
/// Singletons, literal overrides, parameter defaults and the results of
/// `provide` are all carried as `Instance`s. Cloning an `Instance` clones the
/// handle, never the value.
#[derive(Clone)]
pub struct Instance {
  type_name: &'static str,
  value: Arc<dyn Any + Send + Sync>,
}

impl Instance {
  pub fn new<T: Any + Send + Sync>(value: T) -> Self {
    Self::from_arc(Arc::new(value))
  }

  /// Wraps an already shared value without reallocating it.
  pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
    Self {
      type_name: std::any::type_name::<T>(),
      value,
    }
  }

  /// The Rust type name of the wrapped value.
  pub fn type_name(&self) -> &'static str {
    self.type_name
  }

  pub fn is<T: Any>(&self) -> bool {
    self.value.is::<T>()
  }

  pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
    self.value.downcast_ref::<T>()
  }

  /// Returns a shared pointer to the value if it is a `T`.
  pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
    Arc::clone(&self.value).downcast::<T>().ok()
  }

  /// Whether both handles point at the very same value.
  pub fn ptr_eq(a: &Instance, b: &Instance) -> bool {
    std::ptr::eq(
      Arc::as_ptr(&a.value) as *const (),
      Arc::as_ptr(&b.value) as *const (),
    )
  }
}

impl fmt::Debug for Instance {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Instance({})", self.type_name)
  }
}

/// One entry of an explicit dependency override list.
#[derive(Clone, Debug)]
pub enum Dependency {
  /// Resolve the named type with a nested `provide`.
  Type(String),
  /// Pass the value as-is.
  Value(Instance),
}

impl Dependency {
  pub fn of_type(type_name: impl Into<String>) -> Self {
    Dependency::Type(type_name.into())
  }

  pub fn value<T: Any + Send + Sync>(value: T) -> Self {
    Dependency::Value(Instance::new(value))
  }
}

impl From<Instance> for Dependency {
  fn from(instance: Instance) -> Self {
    Dependency::Value(instance)
  }
}

/// State owned by one top-level `provide` call and threaded through its
/// recursive tree.
///
/// It tracks the chain of types currently under construction, so a type that
/// reappears in its own ancestry is reported instead of recursing forever.
pub(crate) struct ResolutionContext {
  chain: Vec<String>,
  max_depth: usize,
  detect_cycles: bool,
}

impl ResolutionContext {
  pub(crate) fn new(config: &ResolverConfig) -> Self {
    Self {
      chain: Vec::new(),
      max_depth: config.max_depth,
      detect_cycles: config.detect_cycles,
    }
  }

  /// Pushes `type_name` onto the construction chain.
  pub(crate) fn enter(&mut self, type_name: &str) -> Result<()> {
    if self.detect_cycles && self.chain.iter().any(|t| t == type_name) {
      let mut chain = self.chain.clone();
      chain.push(type_name.to_owned());
      return Err(ResolveError::CircularDependency {
        type_name: type_name.to_owned(),
        chain,
      });
    }
    if !self.detect_cycles && self.chain.len() >= self.max_depth {
      return Err(ResolveError::DepthExceeded {
        type_name: type_name.to_owned(),
        limit: self.max_depth,
      });
    }
    self.chain.push(type_name.to_owned());
    Ok(())
  }

  pub(crate) fn leave(&mut self) {
    self.chain.pop();
  }

  pub(crate) fn depth(&self) -> usize {
    self.chain.len()
  }
}
