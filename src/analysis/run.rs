//! End-to-end pipe-soil interaction run
//!
//! Validates the inputs, derives the intermediates, generates every
//! resistance profile and pairs V with Qv for the stability check.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::model::*;
use crate::physics::*;
use crate::profiles::*;
use crate::types::*;

/// Vertical stability check, V against Qv.
///
/// This is a consumer-side signal derived from two engine outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityCheck {
    /// Effective vertical force V (kN/m)
    pub v: f64,
    /// Vertical bearing capacity Qv (kN/m)
    pub qv: f64,
}

impl StabilityCheck {
    pub fn new(intermediates: &Intermediates) -> Self {
        Self {
            v: intermediates.v,
            qv: intermediates.qv,
        }
    }

    /// Pipe load reaches or exceeds the soil capacity
    pub fn is_unstable(&self) -> bool {
        self.v >= self.qv
    }

    pub fn is_stable(&self) -> bool {
        !self.is_unstable()
    }

    /// Spare capacity Qv - V (kN/m), negative when unstable
    pub fn margin(&self) -> f64 {
        self.qv - self.v
    }
}

/// Result of one complete run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsiAnalysis {
    pub inputs: ModelInputs,
    pub intermediates: Intermediates,
    pub profiles: Vec<ResistanceProfile>,
    pub stability: StabilityCheck,
}

impl PsiAnalysis {
    pub fn run(inputs: &ModelInputs) -> Result<Self, InputError> {
        let intermediates = IntermediateCalculator::compute(inputs)?;
        let profiles = ProfileTableGenerator::generate_unchecked(inputs, &intermediates);
        let stability = StabilityCheck::new(&intermediates);

        info!(
            v = intermediates.v,
            qv = intermediates.qv,
            profiles = profiles.len(),
            "PSI analysis complete"
        );
        if stability.is_unstable() {
            warn!(
                v = stability.v,
                qv = stability.qv,
                "Effective force meets or exceeds vertical capacity"
            );
        }

        Ok(Self {
            inputs: *inputs,
            intermediates,
            profiles,
            stability,
        })
    }

    /// Profile for one surface and estimate
    pub fn profile(&self, surface: SurfaceType, estimate: Estimate) -> Option<&ResistanceProfile> {
        self.profiles
            .iter()
            .find(|p| p.surface == surface && p.estimate == estimate)
    }

    pub fn table(&self) -> ProfileTable<'_> {
        ProfileTable::new(&self.profiles)
    }

    /// Format results for display
    pub fn summary(&self) -> String {
        let i = &self.intermediates;
        let geometry = &self.inputs.geometry;

        let mut s = String::new();
        s.push_str("Pipe-Soil Interaction (Undrained):\n");
        s.push_str(&format!(" Outer Diameter: {}\n",
            DisplayLength(geometry.outer_diameter_length())));
        s.push_str(&format!(" Embedment: {}\n",
            DisplayLength(geometry.embedment_length())));
        s.push_str(&format!(" Shear Strength (Su): {}\n",
            DisplayShearStrength(self.inputs.soil.shear_strength_pressure())));

        s.push_str("\nKey Metrics:\n");
        s.push_str(&format!(" Pipe Weight (Wp): {:.2} kg/m\n", i.wp));
        s.push_str(&format!(" Flooded Weight (Wpf): {}\n", DisplayLineLoad(i.wpf)));
        s.push_str(&format!(" Effective Force (V): {}\n", DisplayLineLoad(i.v)));
        s.push_str(&format!(" Contact Area (Abm): {:.4} m²\n", i.abm));
        s.push_str(&format!(" Vertical Capacity (Qv): {}\n", DisplayLineLoad(i.qv)));
        s.push_str(&format!(" Wedging Factor (zeta): {:.2}\n", i.zeta));
        s.push_str(&format!(" Passive Resistance (Fl_remain): {}\n", DisplayLineLoad(i.fl_remain)));

        if self.stability.is_unstable() {
            s.push_str(&format!("\nUNSTABLE: V ({}) >= Qv ({})\n",
                DisplayLineLoad(self.stability.v),
                DisplayLineLoad(self.stability.qv)));
        } else {
            s.push_str(&format!("\nSTABLE: V ({}) < Qv ({})\n",
                DisplayLineLoad(self.stability.v),
                DisplayLineLoad(self.stability.qv)));
        }

        if let Some(mid) = self.profile(SurfaceType::Concrete, Estimate::P50) {
            s.push_str(&format!(" P50 Break Displacement: axial {}, lateral {}\n",
                DisplayDisplacement(mid.axial.break_displacement),
                DisplayDisplacement(mid.lateral.break_displacement)));
        }

        s.push('\n');
        s.push_str(&self.table().to_string());
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::inputs::fixtures::scenario_a;
    use approx::assert_relative_eq;

    #[test]
    fn test_scenario_a_stable() {
        let analysis = PsiAnalysis::run(&scenario_a()).unwrap();

        assert!(analysis.stability.is_stable());
        assert_relative_eq!(analysis.stability.margin(), 8.78 - 2.43, epsilon = 0.03);
        assert_eq!(analysis.profiles.len(), 6);
    }

    #[test]
    fn test_unstable_when_force_reaches_capacity() {
        let check = StabilityCheck { v: 3.0, qv: 3.0 };
        assert!(check.is_unstable());

        // Very soft clay with a barely embedded pipe
        let mut inputs = scenario_a();
        inputs.geometry.embedment = 0.005;
        inputs.soil.shear_strength = 0.5;
        let analysis = PsiAnalysis::run(&inputs).unwrap();
        assert!(analysis.stability.is_unstable());
        assert!(analysis.summary().contains("UNSTABLE"));
    }

    #[test]
    fn test_profile_lookup() {
        let analysis = PsiAnalysis::run(&scenario_a()).unwrap();
        let p = analysis.profile(SurfaceType::Pet, Estimate::P95).unwrap();
        assert_eq!(p.surface, SurfaceType::Pet);
        assert_eq!(p.estimate, Estimate::P95);
    }

    #[test]
    fn test_summary_metrics() {
        let summary = PsiAnalysis::run(&scenario_a()).unwrap().summary();

        assert!(summary.contains("Effective Force (V): 2.43 kN/m"));
        assert!(summary.contains("Vertical Capacity (Qv): 8.78 kN/m"));
        assert!(summary.contains("Wedging Factor (zeta): 1.17"));
        assert!(summary.contains("STABLE"));
        assert!(summary.contains("Shear Strength (Su): 5.00 kPa"));
        assert!(summary.contains("P50 Break Displacement: axial 4.00 mm, lateral 33.00 mm"));
        assert!(summary.contains("PET SURFACE"));
    }

    #[test]
    fn test_invalid_inputs_produce_no_result() {
        let mut inputs = scenario_a();
        inputs.geometry.wall_thickness = 0.0;
        assert!(PsiAnalysis::run(&inputs).is_err());

        let mut inputs = scenario_a();
        inputs.interaction.rate = f64::NAN;
        assert!(matches!(
            PsiAnalysis::run(&inputs),
            Err(InputError::InvalidSoilParameter { field: "rate", .. })
        ));
    }

    #[test]
    fn test_repeat_runs_are_identical() {
        let inputs = scenario_a();
        let first = PsiAnalysis::run(&inputs).unwrap();
        let second = PsiAnalysis::run(&inputs).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.profiles, second.profiles);
    }

    #[test]
    fn test_serializes_to_json() {
        let analysis = PsiAnalysis::run(&scenario_a()).unwrap();
        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(json["profiles"].as_array().unwrap().len(), 6);
        assert_eq!(json["profiles"][0]["surface"], "concrete");
        assert_eq!(json["profiles"][0]["estimate"], "P5");
    }
}
