//! Axial and lateral resistance-displacement profiles.
//!
//! One profile per (surface, estimate). Forces are kN/m, displacements mm,
//! kept at full precision; round with [`ResistanceProfile::rounded`] for
//! display only.

use serde::{Deserialize, Serialize};

use crate::model::*;
use crate::physics::Intermediates;
use crate::profiles::DisplacementRule;
use crate::types::meters_to_millimeters;

/// Break and residual points of one force-displacement curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceDisplacement {
    /// Peak (break) resistance, kN/m
    pub break_force: f64,
    /// Displacement at break, mm
    pub break_displacement: f64,
    /// Residual resistance, kN/m
    pub residual_force: f64,
    /// Displacement to residual, mm
    pub residual_displacement: f64,
}

impl ForceDisplacement {
    fn rounded(&self) -> Self {
        Self {
            break_force: round2(self.break_force),
            break_displacement: round2(self.break_displacement),
            residual_force: round2(self.residual_force),
            residual_displacement: round2(self.residual_displacement),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResistanceProfile {
    pub surface: SurfaceType,
    pub estimate: Estimate,
    pub axial: ForceDisplacement,
    pub lateral: ForceDisplacement,
}

impl ResistanceProfile {
    /// Copy with every value rounded to two decimals
    pub fn rounded(&self) -> Self {
        Self {
            axial: self.axial.rounded(),
            lateral: self.lateral.rounded(),
            ..*self
        }
    }
}

/// Two-decimal text, the same digits [`ProfileTable`](crate::profiles::ProfileTable) prints
pub(crate) fn format2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Round to two decimals through the display formatter, so rounded values
/// and printed tables always agree
pub(crate) fn round2(value: f64) -> f64 {
    format2(value).parse().unwrap_or(value)
}

/// Lateral residual spread around the mid estimate
fn lateral_residual_force(estimate: Estimate, base: f64) -> f64 {
    match estimate {
        Estimate::P5 => base / 1.5,
        Estimate::P50 => base,
        Estimate::P95 => base * 1.5,
    }
}

/// Stateless generator for [`ResistanceProfile`] tables
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileTableGenerator;

impl ProfileTableGenerator {
    /// All six profiles, surface-major (concrete P5..P95, then PET P5..P95).
    ///
    /// Validates `inputs` first; `intermediates` must come from the same
    /// inputs.
    pub fn generate(
        inputs: &ModelInputs,
        intermediates: &Intermediates,
    ) -> Result<Vec<ResistanceProfile>, InputError> {
        inputs.validate()?;
        Ok(Self::generate_unchecked(inputs, intermediates))
    }

    /// Generate without validation.
    ///
    /// Callers must have validated `inputs`; out-of-domain values such as a
    /// zero sensitivity propagate as NaN or infinities.
    pub fn generate_unchecked(
        inputs: &ModelInputs,
        intermediates: &Intermediates,
    ) -> Vec<ResistanceProfile> {
        inputs
            .surfaces
            .iter()
            .flat_map(|(surface, set)| Self::profiles_for_surface(inputs, intermediates, surface, set))
            .collect()
    }

    /// The three profiles of one surface, low to high
    pub fn profiles_for_surface(
        inputs: &ModelInputs,
        intermediates: &Intermediates,
        surface: SurfaceType,
        set: &SurfaceCoefficientSet,
    ) -> Vec<ResistanceProfile> {
        set.iter()
            .map(|(estimate, pair)| Self::profile(inputs, intermediates, surface, estimate, pair))
            .collect()
    }

    /// Single profile, no validation (see [`Self::generate_unchecked`])
    pub fn profile(
        inputs: &ModelInputs,
        intermediates: &Intermediates,
        surface: SurfaceType,
        estimate: Estimate,
        pair: CoefficientPair,
    ) -> ResistanceProfile {
        let geometry = &inputs.geometry;
        let soil = &inputs.soil;
        let interaction = &inputs.interaction;
        let v = intermediates.v;

        // alpha * SSR * OCR^Prem, shared by axial and lateral break
        let interface = interaction.adhesion * pair.ssr * soil.ocr.powf(pair.prem);

        let axial_break = interface * intermediates.zeta * interaction.rate * v;
        let axial_residual = (1.0 / soil.sensitivity) * axial_break;
        let lateral_break = interface * interaction.rate * v + intermediates.fl_remain;

        let embedment_ratio = geometry.embedment_ratio();
        let lateral_base = (0.32 + 0.8 * embedment_ratio.powf(0.8)) * v;
        let lateral_residual = lateral_residual_force(estimate, lateral_base);

        let dop_mm = meters_to_millimeters(geometry.outer_diameter);
        let displacements =
            DisplacementRule::for_estimate(estimate).displacements(dop_mm, embedment_ratio);

        ResistanceProfile {
            surface,
            estimate,
            axial: ForceDisplacement {
                break_force: axial_break,
                break_displacement: displacements.axial_break,
                residual_force: axial_residual,
                residual_displacement: displacements.axial_residual,
            },
            lateral: ForceDisplacement {
                break_force: lateral_break,
                break_displacement: displacements.lateral_break,
                residual_force: lateral_residual,
                residual_displacement: displacements.lateral_residual,
            },
        }
    }
}
