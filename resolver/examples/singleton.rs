use fibre_resolver::{Arguments, Instance, Resolver, TypeDescriptor};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

// A global, thread-safe counter to generate unique IDs.
static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn main() {
  let resolver = Resolver::new();

  // Every `provide` of a registered type runs its constructor.
  resolver.register_type(TypeDescriptor::new("RequestTracker", |_: &Arguments| {
    println!("Creating RequestTracker...");
    Ok(RequestTracker {
      id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
    })
  }));

  println!("--- Resolving without a singleton ---");
  let t1 = resolver.provide_as::<RequestTracker>("RequestTracker").unwrap();
  let t2 = resolver.provide_as::<RequestTracker>("RequestTracker").unwrap();
  println!("Tracker 1 ID: {}, Tracker 2 ID: {}", t1.id, t2.id);
  assert!(!Arc::ptr_eq(&t1, &t2), "Instances should be different");

  // Register a precomputed instance. The constructor is never called again.
  println!("\n--- Registering a singleton ---");
  resolver.register_singleton("RequestTracker", Instance::from_arc(Arc::clone(&t1)));

  let s1 = resolver.provide_as::<RequestTracker>("RequestTracker").unwrap();
  let s2 = resolver.provide_as::<RequestTracker>("RequestTracker").unwrap();
  println!("Singleton 1 ID: {}, Singleton 2 ID: {}", s1.id, s2.id);
  assert!(Arc::ptr_eq(&s1, &s2), "Singleton instances should be identical");
  assert!(Arc::ptr_eq(&s1, &t1), "The registered instance is returned verbatim");
  assert_eq!(ID_COUNTER.load(Ordering::SeqCst), 2);
  println!("Singleton instances are the same pointer, as expected.");
}
