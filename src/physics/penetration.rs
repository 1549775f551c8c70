//! Penetration geometry and vertical bearing capacity.

use std::f64::consts::PI;

use crate::model::*;

/// Penetrated cross-sectional area Abm (m²).
///
/// Circular segment while the pipe is less than half embedded, half circle
/// plus a rectangular extension below that.
pub fn penetration_area(outer_diameter: f64, embedment: f64) -> f64 {
    let dop = outer_diameter;
    let z = embedment;

    if z < dop / 2.0 {
        let chord = 2.0 * (dop * z - z.powi(2)).max(0.0).sqrt();
        let theta = (chord / dop).clamp(-1.0, 1.0).asin();
        theta * dop.powi(2) / 4.0 - chord * (dop / 4.0) * theta.cos()
    } else {
        PI * dop.powi(2) / 8.0 + dop * (z - dop / 2.0)
    }
}

/// Bearing capacity factor, the lesser of the two empirical curves
pub fn bearing_factor(embedment_ratio: f64) -> f64 {
    let quarter_power = 6.0 * embedment_ratio.powf(0.25);
    let square_root = 3.4 * (10.0 * embedment_ratio).powf(0.5);
    quarter_power.min(square_root)
}

/// Soil buoyancy contribution, normalised by Dop·Su
pub fn buoyancy_factor(
    effective_unit_weight: f64,
    penetration_area: f64,
    outer_diameter: f64,
    shear_strength: f64,
) -> f64 {
    1.5 * effective_unit_weight * penetration_area / (outer_diameter * shear_strength)
}

/// Vertical bearing capacity Qv (kN/m)
pub fn vertical_capacity(geometry: &PipeGeometry, soil: &SoilProperties, penetration_area: f64) -> f64 {
    let bearing = bearing_factor(geometry.embedment_ratio());
    let buoyancy = buoyancy_factor(
        soil.effective_unit_weight(),
        penetration_area,
        geometry.outer_diameter,
        soil.shear_strength,
    );
    (bearing + buoyancy) * geometry.outer_diameter * soil.shear_strength
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::inputs::fixtures::scenario_a;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_area() {
        // Z = Dop / 4 gives a 60 degree half-angle
        let abm = penetration_area(0.4, 0.1);
        let expected = (PI / 3.0) * 0.04 - (2.0 * 0.03_f64.sqrt()) * 0.1 * 0.5;
        assert_relative_eq!(abm, expected, epsilon = 1e-12);
        assert_relative_eq!(abm, 0.024567, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_embedment_has_no_area() {
        assert_eq!(penetration_area(0.4, 0.0), 0.0);
        assert_eq!(bearing_factor(0.0), 0.0);
    }

    #[test]
    fn test_half_embedment_uses_deep_branch() {
        let dop = 0.4;
        let abm = penetration_area(dop, dop / 2.0);
        assert_relative_eq!(abm, PI * dop * dop / 8.0, epsilon = 1e-15);
    }

    #[test]
    fn test_area_continuous_at_half_embedment() {
        let dop = 0.4;
        let below = penetration_area(dop, dop / 2.0 - 1e-9);
        let at = penetration_area(dop, dop / 2.0);
        assert_relative_eq!(below, at, epsilon = 1e-6);
    }

    #[test]
    fn test_deep_embedment_adds_rectangle() {
        let dop = 0.4;
        let abm = penetration_area(dop, 0.5);
        assert_relative_eq!(abm, PI * 0.16 / 8.0 + 0.4 * 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_bearing_factor_takes_lesser_curve() {
        // Z/D = 0.25: 6 * 0.25^0.25 = 4.243, 3.4 * sqrt(2.5) = 5.376
        assert_relative_eq!(bearing_factor(0.25), 6.0 * 0.25_f64.powf(0.25), epsilon = 1e-12);
        // Shallow: the square-root curve governs
        let shallow = 0.001;
        assert_relative_eq!(bearing_factor(shallow), 3.4 * (10.0 * shallow).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_scenario_a_capacity() {
        let inputs = scenario_a();
        let abm = penetration_area(inputs.geometry.outer_diameter, inputs.geometry.embedment);
        let qv = vertical_capacity(&inputs.geometry, &inputs.soil, abm);
        assert_relative_eq!(qv, 8.78, epsilon = 0.02);
    }
}
