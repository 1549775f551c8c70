mod display;
mod explicit_unit_values;

pub use uom::si::f64::{Length, Pressure};

pub use uom::si::{
    length::{centimeter, foot, inch, meter, millimeter},
    pressure::{bar, kilopascal, pascal, psi},
};

pub use display::{
    DisplayDisplacement, DisplayLength, DisplayLineLoad, DisplayShearStrength,
};
pub use explicit_unit_values::{LengthValue, PressureValue, UnitError, WithUnit};
