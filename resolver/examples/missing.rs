use fibre_resolver::{global, provide, ResolveError};
use std::panic;

fn main() {
  // --- Using the panicking `provide!` macro ---
  println!("Attempting to provide a type that was never registered...");

  let result = panic::catch_unwind(|| {
    // This line will panic!
    let _service = provide!("UnregisteredService");
  });

  assert!(result.is_err(), "provide! should have panicked.");
  println!("Successfully caught the expected panic from provide!.");

  // --- Using the fallible `provide()` method ---
  println!("\nNow, attempting to resolve using the fallible `provide()` method...");

  match global().provide("UnregisteredService") {
    Ok(_) => panic!("Should not have found the type!"),
    Err(ResolveError::UnresolvableType { type_name }) => {
      println!("Correctly received UnresolvableType for '{}'.", type_name)
    }
    Err(other) => panic!("Unexpected error: {}", other),
  }
}
