//! Pattern 2: Factory
//!
//! A creation function maps a type tag to a freshly constructed vehicle
//! behind the shared `Vehicle` trait. Callers never name the concrete
//! type; they only say what kind they want. An unrecognized tag is the
//! catalog's only defined error path.
//!
//! Advantages:
//! - Construction knowledge lives in one place
//! - New variants only touch the factory, not its callers
//!
//! Trade-offs:
//! - Tags are checked at runtime, not by the type system
//! - One more indirection for what may be a plain constructor call
//!
//! Run with: cargo run --bin p2_factory

use anyhow::Result;
use thiserror::Error;

#[derive(Error, Debug)]
enum VehicleError {
    #[error("unknown vehicle kind: {0}")]
    UnknownKind(String),
}

trait Vehicle: std::fmt::Debug {
    fn drive(&self) -> String;
}

#[derive(Debug)]
struct Car;

impl Vehicle for Car {
    fn drive(&self) -> String {
        "Driving a car on four wheels".to_string()
    }
}

#[derive(Debug)]
struct Motorcycle;

impl Vehicle for Motorcycle {
    fn drive(&self) -> String {
        "Riding a motorcycle on two wheels".to_string()
    }
}

/// Builds a new vehicle for a recognized kind tag.
fn create_vehicle(kind: &str) -> Result<Box<dyn Vehicle>, VehicleError> {
    match kind {
        "car" => Ok(Box::new(Car)),
        "motorcycle" => Ok(Box::new(Motorcycle)),
        other => Err(VehicleError::UnknownKind(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_tag_builds_a_car() {
        let vehicle = create_vehicle("car").unwrap();
        assert_eq!(vehicle.drive(), "Driving a car on four wheels");
    }

    #[test]
    fn motorcycle_tag_builds_a_motorcycle() {
        let vehicle = create_vehicle("motorcycle").unwrap();
        assert_eq!(vehicle.drive(), "Riding a motorcycle on two wheels");
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = create_vehicle("bicycle").unwrap_err();
        assert!(matches!(err, VehicleError::UnknownKind(_)));
        assert_eq!(err.to_string(), "unknown vehicle kind: bicycle");
    }

}

fn main() -> Result<()> {
    println!("=== Factory Pattern ===");

    let car = create_vehicle("car")?;
    println!("{}", car.drive());

    let motorcycle = create_vehicle("motorcycle")?;
    println!("{}", motorcycle.drive());

    println!("\n=== Unknown Kind ===");
    match create_vehicle("bicycle") {
        Ok(vehicle) => println!("{}", vehicle.drive()),
        Err(err) => println!("Error: {}", err),
    }

    Ok(())
}
