use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use uom::si::{
    f64::{Length, Pressure},
    length::{centimeter, foot, inch, meter, millimeter},
    pressure::{bar, kilopascal, pascal, psi},
};

/// A raw value tagged with the unit it was written in (case files, tables)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WithUnit<T> {
    pub value: f64,
    pub unit: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

pub type LengthValue = WithUnit<Length>;
pub type PressureValue = WithUnit<Pressure>;

impl<T> WithUnit<T> {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            _marker: PhantomData,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown length unit: {0}")]
    UnknownLengthUnit(String),

    #[error("Unknown pressure unit: {0}")]
    UnknownPressureUnit(String),
}

enum LengthUnit {
    Meter,
    Centimeter,
    Millimeter,
    Inch,
    Foot,
}

fn length_unit(unit: &str) -> Option<LengthUnit> {
    match unit {
        "m" | "M"
        | "meter" | "Meter" | "METER"
        | "metre" | "Metre" | "METRE"
        | "meters" | "Meters" | "METERS"
        | "metres" | "Metres" | "METRES" => Some(LengthUnit::Meter),
        "cm" | "CM"
        | "centimeter" | "centimetre"
        | "centimeters" | "centimetres" => Some(LengthUnit::Centimeter),
        "mm" | "MM"
        | "millimeter" | "Millimeter" | "MILLIMETER"
        | "millimetre" | "Millimetre" | "MILLIMETRE"
        | "millimeters" | "Millimeters" | "MILLIMETERS"
        | "millimetres" | "Millimetres" | "MILLIMETRES" => Some(LengthUnit::Millimeter),
        "in" | "IN"
        | "inch" | "Inch"
        | "inches" | "Inches" => Some(LengthUnit::Inch),
        "ft" | "FT"
        | "foot" | "Foot"
        | "feet" | "Feet" => Some(LengthUnit::Foot),
        _ => None,
    }
}

enum PressureUnit {
    Kilopascal,
    Pascal,
    Psi,
    Bar,
}

fn pressure_unit(unit: &str) -> Option<PressureUnit> {
    match unit {
        "kPa" | "KPa" | "kPA" | "KPA" | "kpa"
        | "kilopascal" | "Kilopascal"
        | "kilopascals" | "Kilopascals" => Some(PressureUnit::Kilopascal),
        "Pa" | "pa" | "PA"
        | "pascal" | "Pascal"
        | "pascals" | "Pascals"
        | "N/m²" | "N/m^2" => Some(PressureUnit::Pascal),
        "psi" | "PSI"
        | "lbf/in^2" | "lbf/in²" => Some(PressureUnit::Psi),
        "bar" | "Bar" | "BAR" => Some(PressureUnit::Bar),
        _ => None,
    }
}

impl WithUnit<Length> {
    pub fn to_length(&self) -> Result<Length, UnitError> {
        let unit = length_unit(&self.unit)
            .ok_or_else(|| UnitError::UnknownLengthUnit(self.unit.clone()))?;
        Ok(match unit {
            LengthUnit::Meter => Length::new::<meter>(self.value),
            LengthUnit::Centimeter => Length::new::<centimeter>(self.value),
            LengthUnit::Millimeter => Length::new::<millimeter>(self.value),
            LengthUnit::Inch => Length::new::<inch>(self.value),
            LengthUnit::Foot => Length::new::<foot>(self.value),
        })
    }

    pub fn from_length(length: Length, unit: &str) -> Result<Self, UnitError> {
        let value = match length_unit(unit) {
            Some(LengthUnit::Meter) => length.get::<meter>(),
            Some(LengthUnit::Centimeter) => length.get::<centimeter>(),
            Some(LengthUnit::Millimeter) => length.get::<millimeter>(),
            Some(LengthUnit::Inch) => length.get::<inch>(),
            Some(LengthUnit::Foot) => length.get::<foot>(),
            None => return Err(UnitError::UnknownLengthUnit(unit.to_string())),
        };

        Ok(Self::new(value, unit))
    }
}

impl WithUnit<Pressure> {
    pub fn to_pressure(&self) -> Result<Pressure, UnitError> {
        let unit = pressure_unit(&self.unit)
            .ok_or_else(|| UnitError::UnknownPressureUnit(self.unit.clone()))?;
        Ok(match unit {
            PressureUnit::Kilopascal => Pressure::new::<kilopascal>(self.value),
            PressureUnit::Pascal => Pressure::new::<pascal>(self.value),
            PressureUnit::Psi => Pressure::new::<psi>(self.value),
            PressureUnit::Bar => Pressure::new::<bar>(self.value),
        })
    }

    pub fn from_pressure(pressure: Pressure, unit: &str) -> Result<Self, UnitError> {
        let value = match pressure_unit(unit) {
            Some(PressureUnit::Kilopascal) => pressure.get::<kilopascal>(),
            Some(PressureUnit::Pascal) => pressure.get::<pascal>(),
            Some(PressureUnit::Psi) => pressure.get::<psi>(),
            Some(PressureUnit::Bar) => pressure.get::<bar>(),
            None => return Err(UnitError::UnknownPressureUnit(unit.to_string())),
        };

        Ok(Self::new(value, unit))
    }
}
