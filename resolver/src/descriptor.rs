//! Constructor descriptions: the resolver's stand-in for runtime reflection.
//!
//! A `TypeDescriptor` tells the resolver, for one type name, which parameters
//! its constructor takes (in order) and how to build the value once the
//! arguments are known. Descriptors are registered up front, either by hand or
//! through the `Injectable` trait.

use crate::core::Instance;
use crate::error::{ResolveError, Result};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

type Constructor = dyn Fn(&Arguments) -> Result<Instance> + Send + Sync;

/// One constructor parameter.
#[derive(Clone, Debug)]
pub struct Parameter {
  name: String,
  kind: Option<String>,
  default: Option<Instance>,
}

impl Parameter {
  /// A parameter of a non-constructible type (a primitive, a string, ...).
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      kind: None,
      default: None,
    }
  }

  /// A parameter whose type is resolved by name.
  pub fn typed(name: impl Into<String>, type_name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      kind: Some(type_name.into()),
      default: None,
    }
  }

  /// A parameter whose type is the injectable `T`.
  pub fn of<T: Injectable>(name: impl Into<String>) -> Self {
    Self::typed(name, T::type_name())
  }

  pub fn with_default<T: Any + Send + Sync>(self, value: T) -> Self {
    self.with_default_instance(Instance::new(value))
  }

  pub fn with_default_instance(mut self, value: Instance) -> Self {
    self.default = Some(value);
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// The constructible type of the parameter, if any.
  pub fn kind(&self) -> Option<&str> {
    self.kind.as_deref()
  }

  pub fn default(&self) -> Option<&Instance> {
    self.default.as_ref()
  }
}

/// The constructor signature and factory for one type name.
pub struct TypeDescriptor {
  name: String,
  parameters: Vec<Parameter>,
  constructor: Box<Constructor>,
}

impl TypeDescriptor {
  /// Describes `name` as built by `constructor`. The returned value is
  /// wrapped in a fresh `Instance`; see [`from_instance`](Self::from_instance)
  /// to return an existing one. Parameters are added with
  /// [`with_parameter`](Self::with_parameter); none means a no-argument
  /// constructor.
  pub fn new<T, F>(name: impl Into<String>, constructor: F) -> Self
  where
    T: Any + Send + Sync,
    F: Fn(&Arguments) -> Result<T> + Send + Sync + 'static,
  {
    Self {
      name: name.into(),
      parameters: Vec::new(),
      constructor: Box::new(move |args: &Arguments| constructor(args).map(Instance::new)),
    }
  }

  /// Like [`new`](Self::new), for constructors that already produce an
  /// `Instance`. The instance is returned as-is, so a constructor may hand
  /// back an argument and keep its identity.
  pub fn from_instance<F>(name: impl Into<String>, constructor: F) -> Self
  where
    F: Fn(&Arguments) -> Result<Instance> + Send + Sync + 'static,
  {
    Self {
      name: name.into(),
      parameters: Vec::new(),
      constructor: Box::new(constructor),
    }
  }

  /// Describes the injectable `T`.
  pub fn of<T: Injectable>() -> Self {
    Self {
      name: T::type_name().to_owned(),
      parameters: T::parameters(),
      constructor: Box::new(|args: &Arguments| T::construct(args).map(Instance::new)),
    }
  }

  pub fn with_parameter(mut self, parameter: Parameter) -> Self {
    self.parameters.push(parameter);
    self
  }

  pub fn with_parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
    self.parameters.extend(parameters);
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn parameters(&self) -> &[Parameter] {
    &self.parameters
  }

  pub(crate) fn construct(&self, args: &Arguments) -> Result<Instance> {
    (self.constructor)(args)
  }
}

impl fmt::Debug for TypeDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TypeDescriptor")
      .field("name", &self.name)
      .field("parameters", &self.parameters)
      .finish_non_exhaustive()
  }
}

/// The resolved, ordered argument list handed to a constructor.
#[derive(Debug)]
pub struct Arguments {
  type_name: String,
  values: Vec<Instance>,
}

impl Arguments {
  pub(crate) fn new(type_name: impl Into<String>, values: Vec<Instance>) -> Self {
    Self {
      type_name: type_name.into(),
      values,
    }
  }

  /// The type being constructed.
  pub fn type_name(&self) -> &str {
    &self.type_name
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub fn get(&self, position: usize) -> Option<&Instance> {
    self.values.get(position)
  }

  pub fn iter(&self) -> impl Iterator<Item = &Instance> {
    self.values.iter()
  }

  /// The argument at `position` as a shared `T`.
  pub fn resolve<T: Any + Send + Sync>(&self, position: usize) -> Result<Arc<T>> {
    let instance = self.instance(position)?;
    instance
      .downcast::<T>()
      .ok_or_else(|| self.mismatch::<T>(position, instance))
  }

  /// The argument at `position`, cloned out as a `T`.
  pub fn value<T: Any + Clone>(&self, position: usize) -> Result<T> {
    let instance = self.instance(position)?;
    instance
      .downcast_ref::<T>()
      .cloned()
      .ok_or_else(|| self.mismatch::<T>(position, instance))
  }

  fn instance(&self, position: usize) -> Result<&Instance> {
    self
      .values
      .get(position)
      .ok_or_else(|| ResolveError::MissingDependency {
        type_name: self.type_name.clone(),
        position,
        parameter: None,
      })
  }

  fn mismatch<T: ?Sized>(&self, position: usize, found: &Instance) -> ResolveError {
    ResolveError::ArgumentType {
      type_name: self.type_name.clone(),
      position,
      expected: std::any::type_name::<T>(),
      found: found.type_name(),
    }
  }
}

/// A type that describes its own constructor.
///
/// ```
/// use fibre_resolver::{Arguments, Injectable, Parameter, Resolver, Result};
///
/// struct Pool {
///   size: i64,
/// }
///
/// impl Injectable for Pool {
///   fn type_name() -> &'static str {
///     "Pool"
///   }
///
///   fn parameters() -> Vec<Parameter> {
///     vec![Parameter::new("size").with_default(4_i64)]
///   }
///
///   fn construct(args: &Arguments) -> Result<Self> {
///     Ok(Pool { size: args.value(0)? })
///   }
/// }
///
/// let resolver = Resolver::new();
/// resolver.register::<Pool>();
/// assert_eq!(resolver.provide_type::<Pool>().unwrap().size, 4);
/// ```
pub trait Injectable: Any + Send + Sync + Sized {
  /// The name the type is registered and resolved under.
  fn type_name() -> &'static str {
    std::any::type_name::<Self>()
  }

  /// Constructor parameters in declaration order.
  fn parameters() -> Vec<Parameter> {
    Vec::new()
  }

  fn construct(args: &Arguments) -> Result<Self>;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parameter_builders() {
    let plain = Parameter::new("count").with_default(10_i64);
    assert_eq!(plain.name(), "count");
    assert_eq!(plain.kind(), None);
    assert_eq!(plain.default().and_then(|d| d.downcast_ref::<i64>()), Some(&10));

    let typed = Parameter::typed("db", "Database");
    assert_eq!(typed.kind(), Some("Database"));
    assert!(typed.default().is_none());
  }

  #[test]
  fn arguments_report_wrong_types() {
    let args = Arguments::new("Widget", vec![Instance::new(1_i64)]);
    assert_eq!(args.value::<i64>(0).unwrap(), 1);
    match args.value::<String>(0) {
      Err(ResolveError::ArgumentType {
        type_name,
        position,
        found,
        ..
      }) => {
        assert_eq!(type_name, "Widget");
        assert_eq!(position, 0);
        assert_eq!(found, "i64");
      }
      other => panic!("unexpected result: {:?}", other),
    }
  }

  #[test]
  fn arguments_report_missing_positions() {
    let args = Arguments::new("Widget", Vec::new());
    assert!(args.is_empty());
    assert!(matches!(
      args.resolve::<i64>(3),
      Err(ResolveError::MissingDependency { position: 3, .. })
    ));
  }

  #[test]
  fn descriptor_constructs_through_closure() {
    let descriptor = TypeDescriptor::new("Pair", |args: &Arguments| {
      Ok((args.value::<i64>(0)?, args.value::<i64>(1)?))
    })
    .with_parameter(Parameter::new("left"))
    .with_parameter(Parameter::new("right"));

    assert_eq!(descriptor.parameters().len(), 2);
    let args = Arguments::new("Pair", vec![Instance::new(1_i64), Instance::new(2_i64)]);
    let pair = descriptor.construct(&args).unwrap();
    assert_eq!(pair.downcast_ref::<(i64, i64)>(), Some(&(1, 2)));
  }

  #[test]
  fn instance_constructor_keeps_identity() {
    let descriptor = TypeDescriptor::from_instance("Alias", |args: &Arguments| {
      args.get(0).cloned().ok_or_else(|| ResolveError::construction("Alias", "no argument"))
    })
    .with_parameter(Parameter::typed("target", "Target"));

    let target = Instance::new(String::from("shared"));
    let built = descriptor
      .construct(&Arguments::new("Alias", vec![target.clone()]))
      .unwrap();
    assert!(Instance::ptr_eq(&built, &target));
    assert_eq!(built.type_name(), target.type_name());
  }
}
