//! Prototype Pattern
//!
//! New objects are made by copying an existing one and tweaking the copy.
//! `Clone` already gives Rust deep copies of owned data.
//!
//! Run with: cargo run --bin prototype

use std::fmt;

use crate::error::Result;
use crate::transcript::Transcript;

pub trait Prototype: Clone {
    /// An independent copy; changing it never affects `self`.
    fn clone_prototype(&self) -> Self {
        self.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub make: String,
    pub model: String,
    pub color: String,
}

impl Car {
    pub fn new(make: impl Into<String>, model: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            color: color.into(),
        }
    }
}

impl Prototype for Car {}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.color, self.make, self.model)
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let original_car = Car::new("Tesla", "Model S", "Red");
    out.line(format!("Original: {}", original_car));

    let mut cloned_car = original_car.clone_prototype();
    cloned_car.color = "Blue".to_string();
    out.line(format!("Cloned: {}", cloned_car));
    Ok(out)
}
