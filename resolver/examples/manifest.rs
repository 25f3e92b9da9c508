use fibre_resolver::{Arguments, Manifest, Parameter, Resolver, TypeDescriptor};

struct Mailer {
  transport: String,
  port: i64,
  host: String,
}

const MANIFEST: &str = r#"
config:
  max_rebinding_hops: 8
bindings:
  Transport: SmtpTransport
dependencies:
  Mailer:
    - type: Transport
    - value: 2525
    - value: "smtp.example.org"
"#;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  let manifest = Manifest::from_yaml_str(MANIFEST).expect("manifest should parse");
  let resolver = Resolver::from_manifest(&manifest);

  resolver.register_type(TypeDescriptor::new("SmtpTransport", |_: &Arguments| {
    Ok(String::from("smtp"))
  }));
  resolver.register_type(
    TypeDescriptor::new("Mailer", |args: &Arguments| {
      Ok(Mailer {
        transport: args.value(0)?,
        port: args.value(1)?,
        host: args.value(2)?,
      })
    })
    .with_parameter(Parameter::typed("transport", "Transport"))
    .with_parameter(Parameter::new("port").with_default(25_i64))
    .with_parameter(Parameter::new("host")),
  );

  let mailer = resolver.provide_as::<Mailer>("Mailer").expect("Mailer should resolve");
  println!(
    "Mailer via {} to {}:{}",
    mailer.transport, mailer.host, mailer.port
  );
  assert_eq!(mailer.port, 2525);
}
