use fibre_resolver::{Arguments, Parameter, Resolver, TypeDescriptor};
use std::sync::Arc;

// 1. Define the abstraction (the trait)
trait Logger: Send + Sync {
  fn log(&self, message: &str);
}

// 2. Two concrete implementations
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

struct PrefixedLogger {
  prefix: String,
}
impl Logger for PrefixedLogger {
  fn log(&self, message: &str) {
    println!("[{}]: {}", self.prefix, message);
  }
}

// 3. A service that depends on the abstraction, by name
struct ReportService {
  logger: Arc<dyn Logger>,
}

impl ReportService {
  fn generate_report(&self) {
    self.logger.log("Starting report generation.");
    self.logger.log("Finished report generation.");
  }
}

fn main() {
  let resolver = Resolver::new();

  // Implementations produce `Arc<dyn Logger>` so consumers can hold the trait object.
  resolver.register_type(TypeDescriptor::new("ConsoleLogger", |_| {
    Ok(Arc::new(ConsoleLogger) as Arc<dyn Logger>)
  }));
  resolver.register_type(
    TypeDescriptor::new("PrefixedLogger", |args: &Arguments| {
      let prefix: String = args.value(0)?;
      Ok(Arc::new(PrefixedLogger { prefix }) as Arc<dyn Logger>)
    })
    .with_parameter(Parameter::new("prefix").with_default(String::from("REPORT"))),
  );

  resolver.register_type(
    TypeDescriptor::new("ReportService", |args: &Arguments| {
      Ok(ReportService {
        logger: args.value::<Arc<dyn Logger>>(0)?,
      })
    })
    .with_parameter(Parameter::typed("logger", "Logger")),
  );

  // --- The abstraction is bound to one implementation ---
  resolver.bind("Logger", "ConsoleLogger");
  let service = resolver
    .provide_as::<ReportService>("ReportService")
    .expect("ReportService should resolve");
  service.generate_report();

  // --- Rebinding swaps the implementation for every later resolution ---
  resolver.bind("Logger", "PrefixedLogger");
  let service = resolver
    .provide_as::<ReportService>("ReportService")
    .expect("ReportService should resolve");
  service.generate_report();
}
