//! Builder Pattern
//!
//! Constructs a complex object step by step. A director drives the steps in a
//! fixed order, while interchangeable builders decide what each step produces.
//!
//! Run with: cargo run --bin builder

use std::fmt;

use crate::error::Result;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct House {
    pub foundation: String,
    pub structure: String,
    pub roof: String,
    pub interior: String,
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "House with {} foundation {} structure {} roof and {} interior",
            self.foundation, self.structure, self.roof, self.interior
        )
    }
}

pub trait HouseBuilder {
    fn build_foundation(&mut self);
    fn build_structure(&mut self);
    fn build_roof(&mut self);
    fn build_interior(&mut self);
    fn get_result(&self) -> House;
}

// ============================================================================
// Concrete builders
// ============================================================================

#[derive(Debug, Default)]
pub struct StoneHouseBuilder {
    house: House,
}

impl StoneHouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HouseBuilder for StoneHouseBuilder {
    fn build_foundation(&mut self) {
        self.house.foundation = "stone".to_string();
    }

    fn build_structure(&mut self) {
        self.house.structure = "stone walls".to_string();
    }

    fn build_roof(&mut self) {
        self.house.roof = "slate".to_string();
    }

    fn build_interior(&mut self) {
        self.house.interior = "stone and wood".to_string();
    }

    fn get_result(&self) -> House {
        self.house.clone()
    }
}

#[derive(Debug, Default)]
pub struct WoodHouseBuilder {
    house: House,
}

impl WoodHouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HouseBuilder for WoodHouseBuilder {
    fn build_foundation(&mut self) {
        self.house.foundation = "wood".to_string();
    }

    fn build_structure(&mut self) {
        self.house.structure = "wooden beams".to_string();
    }

    fn build_roof(&mut self) {
        self.house.roof = "wooden shingles".to_string();
    }

    fn build_interior(&mut self) {
        self.house.interior = "wood panels".to_string();
    }

    fn get_result(&self) -> House {
        self.house.clone()
    }
}

// ============================================================================
// Director
// ============================================================================

pub struct ConstructionEngineer<B: HouseBuilder> {
    builder: B,
}

impl<B: HouseBuilder> ConstructionEngineer<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    pub fn construct_house(&mut self) {
        self.builder.build_foundation();
        self.builder.build_structure();
        self.builder.build_roof();
        self.builder.build_interior();
    }

    pub fn get_house(&self) -> House {
        self.builder.get_result()
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let mut engineer = ConstructionEngineer::new(StoneHouseBuilder::new());
    engineer.construct_house();
    out.line(engineer.get_house().to_string());

    let mut engineer = ConstructionEngineer::new(WoodHouseBuilder::new());
    engineer.construct_house();
    out.line(engineer.get_house().to_string());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbuilt_house_is_empty() {
        let engineer = ConstructionEngineer::new(StoneHouseBuilder::new());
        assert_eq!(engineer.get_house(), House::default());
    }

    #[test]
    fn test_partial_build() {
        let mut builder = WoodHouseBuilder::new();
        builder.build_foundation();
        builder.build_roof();
        let house = builder.get_result();
        assert_eq!(house.foundation, "wood");
        assert_eq!(house.roof, "wooden shingles");
        assert!(house.structure.is_empty());
    }

    #[test]
    fn test_demo_transcript() {
        assert_eq!(
            demo().unwrap().lines(),
            [
                "House with stone foundation stone walls structure slate roof and stone and wood interior",
                "House with wood foundation wooden beams structure wooden shingles roof and wood panels interior",
            ]
        );
    }
}
