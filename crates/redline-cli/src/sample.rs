//! The sample records the `demo` command compares.

use redline_compare::structural;
use redline_diff::{RedactionRegistry, RedactionRule};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Driver {
    pub name: String,
    pub age: i8,
    pub vehicle: Vehicle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub color: String,
    pub year: String,
    pub license_plate: LicensePlate,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LicensePlate {
    pub number: String,
    pub exp_month: String,
}

structural!(Driver as "Driver" {
    name => "Name",
    age => "Age",
    vehicle => "Vehicle",
});

structural!(Vehicle as "Vehicle" {
    make => "Make",
    model => "Model",
    color => "Color",
    year => "Year",
    license_plate => "LicensePlate",
});

structural!(LicensePlate as "LicensePlate" {
    number => "Number",
    exp_month => "ExpMonth",
});

pub fn driver1() -> Driver {
    Driver {
        name: "John Smith".into(),
        age: 29,
        vehicle: Vehicle {
            make: "Ford".into(),
            model: "Ranger".into(),
            color: "White".into(),
            year: "2006".into(),
            license_plate: LicensePlate {
                number: "1AAA001".into(),
                exp_month: "March".into(),
            },
        },
    }
}

pub fn driver2() -> Driver {
    Driver {
        name: "Jane Smith".into(),
        age: 29,
        vehicle: Vehicle {
            make: "Toyta".into(),
            model: "Sienna".into(),
            color: "Grey".into(),
            year: "2011".into(),
            license_plate: LicensePlate {
                number: "1AAA000".into(),
                exp_month: "March".into(),
            },
        },
    }
}

/// Plate numbers and driver names are never shown.
pub fn builtin_rules() -> RedactionRegistry {
    RedactionRegistry::new()
        .with_rule(RedactionRule::for_type::<LicensePlate, _, _>(["Number"]))
        .with_rule(RedactionRule::for_type::<Driver, _, _>(["Name"]))
}
