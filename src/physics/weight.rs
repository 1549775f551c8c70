//! Pipe weight per metre and the governing effective vertical force.

use std::f64::consts::PI;

use crate::model::*;

/// Pipe weights per metre of length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeWeights {
    /// Steel mass per length Wp (kg/m)
    pub steel: f64,

    /// Internal contents mass per length, water filled (kg/m)
    pub contents: f64,

    /// Displaced seawater mass per length (kg/m)
    pub buoyancy: f64,

    /// Flooded submerged weight Wpf (kN/m)
    pub flooded: f64,

    /// Steel-only submerged mass per length Wpins (kg/m)
    pub steel_submerged: f64,
}

/// Annulus area of the pipe wall (m²)
fn wall_area(outer_diameter: f64, inner_diameter: f64) -> f64 {
    PI * (outer_diameter.powi(2) - inner_diameter.powi(2)) / 4.0
}

/// Weights for a pipe section, assuming water fill and seawater buoyancy
pub fn pipe_weights(geometry: &PipeGeometry) -> PipeWeights {
    let dop = geometry.outer_diameter;
    let dip = geometry.inner_diameter();

    let steel = wall_area(dop, dip) * STEEL_DENSITY;
    let contents = PI * dip.powi(2) * CONTENT_DENSITY / 4.0;
    let buoyancy = PI * dop.powi(2) * SEAWATER_DENSITY / 4.0;
    let flooded = ((steel + contents - buoyancy) * GRAVITY) / 1000.0;
    let steel_submerged = wall_area(dop, dip) * (STEEL_DENSITY - SEAWATER_DENSITY);

    PipeWeights {
        steel,
        contents,
        buoyancy,
        flooded,
        steel_submerged,
    }
}

/// Governing effective force V (kN/m).
///
/// Envelope of the lay-factored steel-only weight and the flooded weight.
pub fn effective_force(weights: &PipeWeights) -> f64 {
    let lay = weights.steel_submerged * LAY_FACTOR * GRAVITY / 1000.0;
    lay.max(weights.flooded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::inputs::fixtures::scenario_a;
    use approx::assert_relative_eq;

    #[test]
    fn test_scenario_a_weights() {
        let weights = pipe_weights(&scenario_a().geometry);

        assert_relative_eq!(weights.steel, 142.42, epsilon = 0.01);
        assert_relative_eq!(weights.contents, 107.52, epsilon = 0.01);
        assert_relative_eq!(weights.buoyancy, 128.81, epsilon = 0.01);
        assert_relative_eq!(weights.flooded, 1.187, epsilon = 0.001);
        assert_relative_eq!(weights.steel_submerged, 123.82, epsilon = 0.01);
    }

    #[test]
    fn test_lay_factored_weight_governs() {
        let weights = pipe_weights(&scenario_a().geometry);
        let v = effective_force(&weights);

        assert_relative_eq!(v, 2.427, epsilon = 0.001);
        assert!(v > weights.flooded);
    }

    #[test]
    fn test_flooded_weight_governs_when_larger() {
        let weights = PipeWeights {
            steel: 0.0,
            contents: 0.0,
            buoyancy: 0.0,
            flooded: 5.0,
            steel_submerged: 100.0,
        };
        assert_relative_eq!(effective_force(&weights), 5.0);
    }
}
