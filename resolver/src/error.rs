use thiserror::Error;

/// Boxed error reported by a user-supplied constructor.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type returned when a type cannot be provided.
///
/// Errors raised while resolving a nested dependency propagate unchanged to the
/// caller of the outermost `provide`.
#[derive(Debug, Error)]
pub enum ResolveError {
  #[error("type '{type_name}' is not registered and cannot be resolved")]
  UnresolvableType { type_name: String },

  #[error("cannot satisfy parameter {position} ({}) of '{type_name}': no override, constructible type or default", .parameter.as_deref().unwrap_or("unnamed"))]
  MissingDependency {
    type_name: String,
    position: usize,
    parameter: Option<String>,
  },

  #[error("rebinding of '{type_name}' does not terminate: {}", .chain.join(" -> "))]
  RebindingCycle { type_name: String, chain: Vec<String> },

  #[error("circular dependency while constructing '{type_name}': {}", .chain.join(" -> "))]
  CircularDependency { type_name: String, chain: Vec<String> },

  #[error("resolution of '{type_name}' exceeded the maximum depth of {limit}")]
  DepthExceeded { type_name: String, limit: usize },

  #[error("argument {position} of '{type_name}' has type '{found}', expected '{expected}'")]
  ArgumentType {
    type_name: String,
    position: usize,
    expected: &'static str,
    found: &'static str,
  },

  #[error("'{type_name}' resolved to an instance of '{found}', expected '{expected}'")]
  TypeMismatch {
    type_name: String,
    expected: &'static str,
    found: &'static str,
  },

  #[error("constructor of '{type_name}' failed: {source}")]
  Construction {
    type_name: String,
    #[source]
    source: BoxError,
  },
}

impl ResolveError {
  /// Wraps an error reported by the constructor of `type_name`.
  pub fn construction(type_name: impl Into<String>, source: impl Into<BoxError>) -> Self {
    ResolveError::Construction {
      type_name: type_name.into(),
      source: source.into(),
    }
  }

  /// The type name the error was raised for.
  pub fn type_name(&self) -> &str {
    match self {
      ResolveError::UnresolvableType { type_name }
      | ResolveError::MissingDependency { type_name, .. }
      | ResolveError::RebindingCycle { type_name, .. }
      | ResolveError::CircularDependency { type_name, .. }
      | ResolveError::DepthExceeded { type_name, .. }
      | ResolveError::ArgumentType { type_name, .. }
      | ResolveError::TypeMismatch { type_name, .. }
      | ResolveError::Construction { type_name, .. } => type_name,
    }
  }
}

/// Errors raised while loading a resolver manifest.
#[cfg(feature = "manifest")]
#[derive(Debug, Error)]
pub enum ManifestError {
  #[error("Failed to read manifest file: {0}")]
  Io(#[from] std::io::Error),

  #[error("Failed to parse manifest: {0}")]
  Parse(#[from] serde_yaml::Error),

  #[error("Invalid value for dependency {position} of '{type_name}': {message}")]
  InvalidValue {
    type_name: String,
    position: usize,
    message: String,
  },

  #[error("Invalid value for singleton '{type_name}': {message}")]
  InvalidSingleton { type_name: String, message: String },
}

/// A specialized `Result` type for resolver operations.
pub type Result<T, E = ResolveError> = std::result::Result<T, E>;
