//! Abstract Factory Pattern
//!
//! One interface for creating a whole family of related products. Picking a
//! factory picks the family; client code only sees the product traits.
//!
//! Run with: cargo run --bin abstract_factory

use crate::error::Result;
use crate::transcript::Transcript;

// ============================================================================
// Products
// ============================================================================

pub trait Car {
    fn drive(&self) -> String;
}

pub trait Bike {
    fn ride(&self) -> String;
}

pub struct ElectricCar;
impl Car for ElectricCar {
    fn drive(&self) -> String {
        "Driving an electric car".to_string()
    }
}

pub struct GasolineCar;
impl Car for GasolineCar {
    fn drive(&self) -> String {
        "Driving a gasoline car".to_string()
    }
}

pub struct ElectricBike;
impl Bike for ElectricBike {
    fn ride(&self) -> String {
        "Riding an electric bike".to_string()
    }
}

pub struct GasolineBike;
impl Bike for GasolineBike {
    fn ride(&self) -> String {
        "Riding a gasoline bike".to_string()
    }
}

// ============================================================================
// Factories
// ============================================================================

pub trait VehicleFactory {
    fn create_car(&self) -> Box<dyn Car>;
    fn create_bike(&self) -> Box<dyn Bike>;
}

pub struct ElectricVehicleFactory;
impl VehicleFactory for ElectricVehicleFactory {
    fn create_car(&self) -> Box<dyn Car> {
        Box::new(ElectricCar)
    }

    fn create_bike(&self) -> Box<dyn Bike> {
        Box::new(ElectricBike)
    }
}

pub struct GasolineVehicleFactory;
impl VehicleFactory for GasolineVehicleFactory {
    fn create_car(&self) -> Box<dyn Car> {
        Box::new(GasolineCar)
    }

    fn create_bike(&self) -> Box<dyn Bike> {
        Box::new(GasolineBike)
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let electric_factory: Box<dyn VehicleFactory> = Box::new(ElectricVehicleFactory);
    let gasoline_factory: Box<dyn VehicleFactory> = Box::new(GasolineVehicleFactory);

    out.line(electric_factory.create_car().drive());
    out.line(gasoline_factory.create_bike().ride());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(factory: &dyn VehicleFactory) -> (String, String) {
        (factory.create_car().drive(), factory.create_bike().ride())
    }

    #[test]
    fn test_factories_produce_matching_families() {
        let (car, bike) = family(&ElectricVehicleFactory);
        assert!(car.contains("electric") && bike.contains("electric"));

        let (car, bike) = family(&GasolineVehicleFactory);
        assert!(car.contains("gasoline") && bike.contains("gasoline"));
    }

    #[test]
    fn test_demo_transcript() {
        assert_eq!(
            demo().unwrap().lines(),
            ["Driving an electric car", "Riding a gasoline bike"]
        );
    }
}
