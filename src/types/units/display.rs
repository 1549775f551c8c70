use std::fmt;

use crate::types::units::*;

/// Force per metre of pipe, in kN/m
#[derive(Debug, Clone, Copy)]
pub struct DisplayLineLoad(pub f64);
/// Displacement in mm
#[derive(Debug, Clone, Copy)]
pub struct DisplayDisplacement(pub f64);
#[derive(Debug, Clone, Copy)]
pub struct DisplayLength(pub Length);
#[derive(Debug, Clone, Copy)]
pub struct DisplayShearStrength(pub Pressure);

impl fmt::Display for DisplayLineLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kN/m", self.0)
    }
}

impl fmt::Display for DisplayDisplacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} mm", self.0)
    }
}

impl fmt::Display for DisplayLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meters = self.0.get::<meter>();
        let millimeters = self.0.get::<millimeter>();
        write!(f, "{:.3} m ({:.0} mm)", meters, millimeters)
    }
}

impl fmt::Display for DisplayShearStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kPa", self.0.get::<kilopascal>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_load_two_decimals() {
        assert_eq!(DisplayLineLoad(2.426954).to_string(), "2.43 kN/m");
    }

    #[test]
    fn test_displacement_two_decimals() {
        assert_eq!(DisplayDisplacement(33.0).to_string(), "33.00 mm");
        assert_eq!(DisplayDisplacement(1.256).to_string(), "1.26 mm");
    }

    #[test]
    fn test_length_shows_both_units() {
        let od = Length::new::<millimeter>(406.4);
        assert_eq!(DisplayLength(od).to_string(), "0.406 m (406 mm)");
    }

    #[test]
    fn test_shear_strength() {
        let su = Pressure::new::<kilopascal>(5.0);
        assert_eq!(DisplayShearStrength(su).to_string(), "5.00 kPa");
    }
}
