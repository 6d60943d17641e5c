//! Factory Method Pattern
//!
//! Callers ask for a product by kind and get back a trait object; which concrete
//! type gets built is decided in one place.
//!
//! Run with: cargo run --bin factory

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::Result;
use crate::transcript::Transcript;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VehicleError {
    #[error("Unknown vehicle type: '{0}'")]
    UnknownVehicleType(String),
}

pub trait Vehicle {
    fn drive(&self) -> String;
}

pub struct Car;
impl Vehicle for Car {
    fn drive(&self) -> String {
        "Driving a car".to_string()
    }
}

pub struct Truck;
impl Vehicle for Truck {
    fn drive(&self) -> String {
        "Driving a truck".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Truck,
}

impl FromStr for VehicleKind {
    type Err = VehicleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "car" => Ok(VehicleKind::Car),
            "truck" => Ok(VehicleKind::Truck),
            other => Err(VehicleError::UnknownVehicleType(other.to_string())),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleKind::Car => write!(f, "car"),
            VehicleKind::Truck => write!(f, "truck"),
        }
    }
}

pub struct VehicleFactory;

impl VehicleFactory {
    pub fn create(kind: VehicleKind) -> Box<dyn Vehicle> {
        tracing::debug!(%kind, "creating vehicle");
        match kind {
            VehicleKind::Car => Box::new(Car),
            VehicleKind::Truck => Box::new(Truck),
        }
    }

    pub fn get_vehicle(vehicle_type: &str) -> std::result::Result<Box<dyn Vehicle>, VehicleError> {
        let kind = vehicle_type.parse()?;
        Ok(Self::create(kind))
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let vehicle = VehicleFactory::get_vehicle("car")?;
    out.line(vehicle.drive());
    Ok(out)
}
