//! Mobilisation displacements per estimate tier.
//!
//! Each estimate has its own row of rules. The low and mid axial rules cap
//! the diameter-scaled value, the high rule floors it.

use crate::model::Estimate;

/// Which way a [`ClampedRatio`] limit acts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Limit {
    /// `min(limit, ratio * D)`
    Cap(f64),
    /// `max(limit, ratio * D)`
    Floor(f64),
}

/// Diameter-scaled displacement with a fixed limit (mm)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedRatio {
    pub ratio: f64,
    pub limit: Limit,
}

impl ClampedRatio {
    const fn cap(limit: f64, ratio: f64) -> Self {
        Self { ratio, limit: Limit::Cap(limit) }
    }

    const fn floor(limit: f64, ratio: f64) -> Self {
        Self { ratio, limit: Limit::Floor(limit) }
    }

    pub fn eval(&self, dop_mm: f64) -> f64 {
        let scaled = self.ratio * dop_mm;
        match self.limit {
            Limit::Cap(limit) => f64::min(limit, scaled),
            Limit::Floor(limit) => f64::max(limit, scaled),
        }
    }
}

/// Displacement rules for one estimate tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplacementRule {
    /// Axial break displacement Xb
    pub axial_break: ClampedRatio,

    /// Axial residual displacement Xr
    pub axial_residual: ClampedRatio,

    /// Lateral break displacement Yb = (base + slope * Z/D) * D
    pub lateral_break_base: f64,
    pub lateral_break_slope: f64,

    /// Lateral residual displacement Yr = ratio * D
    pub lateral_residual_ratio: f64,
}

pub const DISPLACEMENT_RULES: [DisplacementRule; 3] = [
    // P5
    DisplacementRule {
        axial_break: ClampedRatio::cap(1.25, 0.0025),
        axial_residual: ClampedRatio::cap(7.5, 0.015),
        lateral_break_base: 0.004,
        lateral_break_slope: 0.02,
        lateral_residual_ratio: 0.6,
    },
    // P50
    DisplacementRule {
        axial_break: ClampedRatio::cap(5.0, 0.01),
        axial_residual: ClampedRatio::cap(30.0, 0.06),
        lateral_break_base: 0.02,
        lateral_break_slope: 0.25,
        lateral_residual_ratio: 1.5,
    },
    // P95
    DisplacementRule {
        axial_break: ClampedRatio::floor(50.0, 0.01),
        axial_residual: ClampedRatio::floor(250.0, 0.5),
        lateral_break_base: 0.1,
        lateral_break_slope: 0.7,
        lateral_residual_ratio: 2.8,
    },
];

/// Displacements for one estimate, all in mm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacements {
    pub axial_break: f64,
    pub axial_residual: f64,
    pub lateral_break: f64,
    pub lateral_residual: f64,
}

impl DisplacementRule {
    pub fn for_estimate(estimate: Estimate) -> &'static DisplacementRule {
        &DISPLACEMENT_RULES[estimate.index()]
    }

    /// # Arguments
    /// * `dop_mm` - Outer diameter in millimetres
    /// * `embedment_ratio` - Z / Dop
    pub fn displacements(&self, dop_mm: f64, embedment_ratio: f64) -> Displacements {
        Displacements {
            axial_break: self.axial_break.eval(dop_mm),
            axial_residual: self.axial_residual.eval(dop_mm),
            lateral_break: (self.lateral_break_base + self.lateral_break_slope * embedment_ratio)
                * dop_mm,
            lateral_residual: self.lateral_residual_ratio * dop_mm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn at(estimate: Estimate, dop_mm: f64, ratio: f64) -> Displacements {
        DisplacementRule::for_estimate(estimate).displacements(dop_mm, ratio)
    }

    #[test]
    fn test_p5_row() {
        let d = at(Estimate::P5, 400.0, 0.25);
        assert_relative_eq!(d.axial_break, 1.0, epsilon = 1e-12);
        assert_relative_eq!(d.axial_residual, 6.0, epsilon = 1e-12);
        assert_relative_eq!(d.lateral_break, 3.6, epsilon = 1e-12);
        assert_relative_eq!(d.lateral_residual, 240.0, epsilon = 1e-12);

        // Large pipe hits the caps
        let d = at(Estimate::P5, 1000.0, 0.25);
        assert_eq!(d.axial_break, 1.25);
        assert_eq!(d.axial_residual, 7.5);
    }

    #[test]
    fn test_p50_row() {
        let d = at(Estimate::P50, 400.0, 0.25);
        assert_relative_eq!(d.axial_break, 4.0, epsilon = 1e-12);
        assert_relative_eq!(d.axial_residual, 24.0, epsilon = 1e-12);
        assert_relative_eq!(d.lateral_break, 33.0, epsilon = 1e-12);
        assert_relative_eq!(d.lateral_residual, 600.0, epsilon = 1e-12);
    }

    #[test]
    fn test_p50_cap_exact_at_500mm() {
        let d = at(Estimate::P50, 500.0, 0.0);
        assert_relative_eq!(d.axial_break, 5.0, epsilon = 1e-12);
        assert_relative_eq!(d.axial_residual, 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_p95_floors_instead_of_caps() {
        let small = at(Estimate::P95, 400.0, 0.25);
        assert_eq!(small.axial_break, 50.0);
        assert_eq!(small.axial_residual, 250.0);
        assert_relative_eq!(small.lateral_break, 110.0, epsilon = 1e-12);
        assert_relative_eq!(small.lateral_residual, 1120.0, epsilon = 1e-12);

        let large = at(Estimate::P95, 6000.0, 0.25);
        assert_relative_eq!(large.axial_break, 60.0, epsilon = 1e-12);
        assert_relative_eq!(large.axial_residual, 3000.0, epsilon = 1e-12);
    }

    #[test]
    fn test_clamped_ratio() {
        assert_eq!(ClampedRatio::cap(5.0, 0.01).eval(1000.0), 5.0);
        assert_eq!(ClampedRatio::floor(50.0, 0.01).eval(1000.0), 50.0);
    }
}
