//! The global resolver instance and access functions.

use crate::resolver::Resolver;
use once_cell::sync::Lazy;

// The process-wide resolver. Created empty on first access and never torn down.
static GLOBAL_RESOLVER: Lazy<Resolver> = Lazy::new(Resolver::default);

/// Provides a reference to the global resolver.
///
/// Registrations made here are visible to every later `provide` through
/// `global()` or the `provide!` macro, from any thread.
///
/// # Examples
///
/// ```
/// use fibre_resolver::global;
///
/// fn register_services() {
///   global().bind("Greeter", "EnglishGreeter");
///   global().add_instance("Greeting", String::from("Hello from global!"));
/// }
/// # register_services();
/// ```
pub fn global() -> &'static Resolver {
  &GLOBAL_RESOLVER
}
