use fibre_resolver::{global, Resolver};

// A function that configures dependencies and runs some logic.
// By accepting a `&Resolver`, it can be run against a controlled environment.
fn process_data(resolver: &Resolver) -> String {
  // Register a data source ONLY within this resolver.
  resolver.add_instance("Data", "test data".to_string());

  let data = resolver
    .provide_as::<String>("Data")
    .expect("Data not found in resolver");
  format!("Processed: {}", data.to_uppercase())
}

fn main() {
  println!("--- Running with a local resolver ---");
  let local = Resolver::new();
  let result = process_data(&local);

  println!("Result: {}", result);
  assert_eq!(result, "Processed: TEST DATA");

  // The instance registered in `local` does not exist in the global resolver.
  assert!(
    global().provide("Data").is_err(),
    "Global resolver should not see local registrations"
  );
  println!("Global resolver is unaffected, as expected.");
}
