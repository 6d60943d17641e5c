//! Decorator Pattern
//!
//! Run with: cargo run --bin decorator

use crate::error::Result;
use crate::transcript::Transcript;

pub trait Coffee {
    fn cost(&self) -> f64;
    fn ingredients(&self) -> String;
}

pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn cost(&self) -> f64 {
        2.0
    }

    fn ingredients(&self) -> String {
        "Coffee".to_string()
    }
}

pub struct MilkDecorator {
    wrapped: Box<dyn Coffee>,
}

impl MilkDecorator {
    pub fn new(wrapped: Box<dyn Coffee>) -> Self {
        Self { wrapped }
    }
}

impl Coffee for MilkDecorator {
    fn cost(&self) -> f64 {
        self.wrapped.cost() + 0.5
    }

    fn ingredients(&self) -> String {
        format!("{}, Milk", self.wrapped.ingredients())
    }
}

pub struct SugarDecorator {
    wrapped: Box<dyn Coffee>,
}

impl SugarDecorator {
    pub fn new(wrapped: Box<dyn Coffee>) -> Self {
        Self { wrapped }
    }
}

impl Coffee for SugarDecorator {
    fn cost(&self) -> f64 {
        self.wrapped.cost() + 0.2
    }

    fn ingredients(&self) -> String {
        format!("{}, Sugar", self.wrapped.ingredients())
    }
}

/// `{:?}` keeps the trailing `.0` on whole prices.
pub fn describe(coffee: &dyn Coffee) -> String {
    format!(
        "Cost: {:?}; Ingredients: {}",
        coffee.cost(),
        coffee.ingredients()
    )
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    out.line(describe(coffee.as_ref()));

    coffee = Box::new(MilkDecorator::new(coffee));
    out.line(describe(coffee.as_ref()));

    coffee = Box::new(SugarDecorator::new(coffee));
    out.line(describe(coffee.as_ref()));
    Ok(out)
}
