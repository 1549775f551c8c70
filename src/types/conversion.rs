use uom::si::{
    f64::{Length, Pressure},
    length::meter,
    pressure::kilopascal,
};

/// Convert UOM Length to engine geometry units (metres)
#[inline]
pub fn to_meters(length: Length) -> f64 {
    length.get::<meter>()
}

/// Convert UOM Pressure to engine strength units (kPa)
#[inline]
pub fn to_kilopascals(pressure: Pressure) -> f64 {
    pressure.get::<kilopascal>()
}

/// Convert an engine length (metres) back to a UOM Length
#[inline]
pub fn from_meters(value: f64) -> Length {
    Length::new::<meter>(value)
}

/// Displacement tables are worked in millimetres
#[inline]
pub fn meters_to_millimeters(value: f64) -> f64 {
    value * 1000.0
}
