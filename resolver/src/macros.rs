//! Public macros for ergonomic resolution.

/// Provides an instance from the global resolver, panicking on failure.
///
/// - `provide!("Name")` returns the type-erased [`Instance`](crate::Instance).
/// - `provide!(Type)` resolves an [`Injectable`](crate::Injectable) by its
///   registered name and returns `Arc<Type>`.
/// - `provide!(Type, "Name")` resolves `"Name"` and downcasts to `Arc<Type>`.
///
/// # Panics
///
/// Panics with the underlying [`ResolveError`](crate::ResolveError) message if
/// resolution fails. For a non-panicking version, use `try_provide!` or
/// `global().provide(...)` directly.
///
/// # Examples
///
/// ```
/// use fibre_resolver::{global, provide};
///
/// global().add_instance("Motd", String::from("hello"));
///
/// let message = provide!(String, "Motd");
/// assert_eq!(*message, "hello");
/// ```
#[macro_export]
macro_rules! provide {
  ($name:literal) => {
    $crate::provide_from!($crate::global(), $name)
  };
  ($type:ty) => {
    $crate::provide_from!($crate::global(), $type)
  };
  ($type:ty, $name:expr) => {
    $crate::provide_from!($crate::global(), $type, $name)
  };
}

/// Like `provide!`, but returns a `Result` instead of panicking.
#[macro_export]
macro_rules! try_provide {
  ($name:literal) => {
    $crate::try_provide_from!($crate::global(), $name)
  };
  ($type:ty) => {
    $crate::try_provide_from!($crate::global(), $type)
  };
  ($type:ty, $name:expr) => {
    $crate::try_provide_from!($crate::global(), $type, $name)
  };
}

/// Provides an instance from a specific resolver, panicking on failure.
///
/// ```
/// use fibre_resolver::{provide_from, Resolver};
///
/// let resolver = Resolver::new();
/// resolver.add_instance("Port", 8080_u16);
/// assert_eq!(*provide_from!(resolver, u16, "Port"), 8080);
/// ```
#[macro_export]
macro_rules! provide_from {
  ($resolver:expr, $name:literal) => {
    $resolver
      .provide($name)
      .unwrap_or_else(|err| panic!("Failed to provide '{}': {}", $name, err))
  };
  ($resolver:expr, $type:ty) => {
    $resolver.provide_type::<$type>().unwrap_or_else(|err| {
      panic!(
        "Failed to provide required type {}: {}",
        std::any::type_name::<$type>(),
        err
      )
    })
  };
  ($resolver:expr, $type:ty, $name:expr) => {
    $resolver.provide_as::<$type>($name).unwrap_or_else(|err| {
      panic!(
        "Failed to provide '{}' as {}: {}",
        $name,
        std::any::type_name::<$type>(),
        err
      )
    })
  };
}

/// Like `provide_from!`, but returns a `Result` instead of panicking.
#[macro_export]
macro_rules! try_provide_from {
  ($resolver:expr, $name:literal) => {
    $resolver.provide($name)
  };
  ($resolver:expr, $type:ty) => {
    $resolver.provide_type::<$type>()
  };
  ($resolver:expr, $type:ty, $name:expr) => {
    $resolver.provide_as::<$type>($name)
  };
}
