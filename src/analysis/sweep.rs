//! One-parameter sensitivity sweeps.
//!
//! Every point gets its own copy of the input record, so points are
//! independent and can be evaluated in any order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::PsiAnalysis;
use crate::model::*;

/// Input varied by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepParameter {
    /// Embedment depth Z (m)
    Embedment,
    /// Displacement rate factor
    Rate,
    /// Undrained shear strength Su (kPa)
    ShearStrength,
    /// Over-consolidation ratio
    Ocr,
    /// Sensitivity St
    Sensitivity,
}

impl SweepParameter {
    /// Copy of `inputs` with this parameter set to `value`
    pub fn apply(&self, inputs: &ModelInputs, value: f64) -> ModelInputs {
        let mut point = *inputs;
        match self {
            SweepParameter::Embedment => point.geometry.embedment = value,
            SweepParameter::Rate => point.interaction.rate = value,
            SweepParameter::ShearStrength => point.soil.shear_strength = value,
            SweepParameter::Ocr => point.soil.ocr = value,
            SweepParameter::Sensitivity => point.soil.sensitivity = value,
        }
        point
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub value: f64,
    pub analysis: PsiAnalysis,
}

/// Run the analysis once per value. Stops at the first invalid point.
pub fn sweep(
    inputs: &ModelInputs,
    parameter: SweepParameter,
    values: &[f64],
) -> Result<Vec<SweepPoint>, InputError> {
    debug!(?parameter, points = values.len(), "Starting sweep");

    values
        .iter()
        .map(|&value| {
            let analysis = PsiAnalysis::run(&parameter.apply(inputs, value))?;
            Ok(SweepPoint { value, analysis })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::inputs::fixtures::scenario_a;

    #[test]
    fn test_embedment_sweep_capacity_grows() {
        let depths = [0.02, 0.05, 0.1, 0.2, 0.3];
        let points = sweep(&scenario_a(), SweepParameter::Embedment, &depths).unwrap();

        assert_eq!(points.len(), depths.len());
        for pair in points.windows(2) {
            assert!(pair[1].analysis.intermediates.qv > pair[0].analysis.intermediates.qv);
        }
        // V does not depend on embedment
        let v0 = points[0].analysis.intermediates.v;
        assert!(points.iter().all(|p| p.analysis.intermediates.v == v0));
    }

    #[test]
    fn test_rate_sweep_monotonic_break_forces() {
        let rates = [0.5, 1.0, 1.5, 2.0];
        let points = sweep(&scenario_a(), SweepParameter::Rate, &rates).unwrap();

        for pair in points.windows(2) {
            for (a, b) in pair[0].analysis.profiles.iter().zip(pair[1].analysis.profiles.iter()) {
                assert!(b.axial.break_force >= a.axial.break_force);
                assert!(b.lateral.break_force >= a.lateral.break_force);
            }
        }
    }

    #[test]
    fn test_sweep_fails_on_invalid_point() {
        let result = sweep(&scenario_a(), SweepParameter::Sensitivity, &[3.0, 0.0, 2.0]);
        assert!(matches!(
            result,
            Err(InputError::InvalidSoilParameter { field: "sensitivity", .. })
        ));
    }

    #[test]
    fn test_apply_leaves_base_untouched() {
        let base = scenario_a();
        let point = SweepParameter::Ocr.apply(&base, 2.5);
        assert_eq!(point.soil.ocr, 2.5);
        assert_eq!(base.soil.ocr, 1.0);
    }
}
