//! # Fibre Resolver
//!
//! A dependency resolver that builds values from their constructor signatures.
//!
//! Ask a `Resolver` for a type name and it constructs an instance, resolving
//! every constructor parameter recursively. Three override layers sit on top
//! of that walk:
//!
//! - **Rebinding**: `bind("Api", "Impl")` makes every request for `Api`
//!   construct `Impl`. Chains are followed to a fixed point.
//! - **Singletons**: `register_singleton` stores an instance that is returned
//!   verbatim, with no further construction.
//! - **Explicit dependencies**: `set_dependencies` overrides constructor
//!   arguments by position, with either a type to resolve or a literal value.
//!
//! Parameters without an override are resolved from their declared type when
//! it is constructible, or from their default value. Anything else is a
//! `MissingDependency` error.
//!
//! Rust has no runtime reflection, so constructors are described once through
//! a [`TypeDescriptor`] or the [`Injectable`] trait.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_resolver::{Arguments, Injectable, Parameter, Resolver, Result};
//! use std::sync::Arc;
//!
//! struct Database {
//!   url: String,
//! }
//!
//! impl Injectable for Database {
//!   fn type_name() -> &'static str {
//!     "Database"
//!   }
//!
//!   fn parameters() -> Vec<Parameter> {
//!     vec![Parameter::new("url").with_default(String::from("sqlite::memory:"))]
//!   }
//!
//!   fn construct(args: &Arguments) -> Result<Self> {
//!     Ok(Database { url: args.value(0)? })
//!   }
//! }
//!
//! struct UserService {
//!   db: Arc<Database>,
//! }
//!
//! impl Injectable for UserService {
//!   fn type_name() -> &'static str {
//!     "UserService"
//!   }
//!
//!   fn parameters() -> Vec<Parameter> {
//!     vec![Parameter::of::<Database>("db")]
//!   }
//!
//!   fn construct(args: &Arguments) -> Result<Self> {
//!     Ok(UserService { db: args.resolve(0)? })
//!   }
//! }
//!
//! let resolver = Resolver::new();
//! resolver.register::<Database>();
//! resolver.register::<UserService>();
//!
//! let service = resolver.provide_type::<UserService>().unwrap();
//! assert_eq!(service.db.url, "sqlite::memory:");
//! ```

mod config;
mod core;
mod descriptor;
mod error;
mod global;
mod macros;
#[cfg(feature = "manifest")]
mod manifest;
mod resolver;

pub use crate::config::ResolverConfig;
pub use crate::core::{Dependency, Instance};
pub use crate::descriptor::{Arguments, Injectable, Parameter, TypeDescriptor};
#[cfg(feature = "manifest")]
pub use crate::error::ManifestError;
pub use crate::error::{BoxError, ResolveError, Result};
pub use crate::global::global;
#[cfg(feature = "manifest")]
pub use crate::manifest::Manifest;
pub use crate::resolver::Resolver;
