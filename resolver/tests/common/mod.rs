#![allow(dead_code)]

use fibre_resolver::{Arguments, Injectable, Parameter, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// --- Test Fixtures ---

/// A leaf service with no constructor parameters.
#[derive(Debug)]
pub struct Engine {
  pub serial: usize,
}

static ENGINE_SERIALS: AtomicUsize = AtomicUsize::new(0);

impl Injectable for Engine {
  fn type_name() -> &'static str {
    "Engine"
  }

  fn construct(_args: &Arguments) -> Result<Self> {
    Ok(Engine {
      serial: ENGINE_SERIALS.fetch_add(1, Ordering::SeqCst),
    })
  }
}

/// Depends on `Engine` and carries two primitives, one with a default.
#[derive(Debug)]
pub struct Car {
  pub engine: Arc<Engine>,
  pub wheels: i64,
  pub model: String,
}

impl Injectable for Car {
  fn type_name() -> &'static str {
    "Car"
  }

  fn parameters() -> Vec<Parameter> {
    vec![
      Parameter::of::<Engine>("engine"),
      Parameter::new("wheels").with_default(4_i64),
      Parameter::new("model").with_default(String::from("roadster")),
    ]
  }

  fn construct(args: &Arguments) -> Result<Self> {
    Ok(Car {
      engine: args.resolve(0)?,
      wheels: args.value(1)?,
      model: args.value(2)?,
    })
  }
}

/// Two primitive parameters without defaults.
#[derive(Debug)]
pub struct Point {
  pub x: i64,
  pub label: &'static str,
}

impl Injectable for Point {
  fn type_name() -> &'static str {
    "Point"
  }

  fn parameters() -> Vec<Parameter> {
    vec![Parameter::new("x"), Parameter::new("label")]
  }

  fn construct(args: &Arguments) -> Result<Self> {
    Ok(Point {
      x: args.value(0)?,
      label: args.value(1)?,
    })
  }
}
