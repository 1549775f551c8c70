//! Model input record for the pipe-soil interaction engine.
//!
//! All fields are plain `f64` in engine units (metres, kPa, kN/m³).
//! Constructors taking UOM quantities convert at the boundary.

use serde::{Deserialize, Serialize};

use crate::model::{InputError, SUBMERGED_WEIGHT_OFFSET, SurfaceCoefficients};
use crate::types::*;

/// Pipe cross-section and embedment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeGeometry {
    /// Outer diameter Dop (m)
    pub outer_diameter: f64,

    /// Wall thickness tp (m)
    pub wall_thickness: f64,

    /// Embedment depth Z (m)
    pub embedment: f64,
}

impl PipeGeometry {
    pub fn new(outer_diameter: Length, wall_thickness: Length, embedment: Length) -> Self {
        Self {
            outer_diameter: to_meters(outer_diameter),
            wall_thickness: to_meters(wall_thickness),
            embedment: to_meters(embedment),
        }
    }

    /// Inner diameter Dip = Dop - 2 tp (m)
    pub fn inner_diameter(&self) -> f64 {
        self.outer_diameter - 2.0 * self.wall_thickness
    }

    /// Normalised embedment Z / Dop
    pub fn embedment_ratio(&self) -> f64 {
        self.embedment / self.outer_diameter
    }

    pub fn outer_diameter_length(&self) -> Length {
        from_meters(self.outer_diameter)
    }

    pub fn embedment_length(&self) -> Length {
        from_meters(self.embedment)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        let invalid = |field, reason: &str| InputError::InvalidGeometry {
            field,
            reason: reason.to_string(),
        };

        for (field, value) in [
            ("outer_diameter", self.outer_diameter),
            ("wall_thickness", self.wall_thickness),
            ("embedment", self.embedment),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }

        if self.outer_diameter <= 0.0 {
            return Err(invalid("outer_diameter", "must be greater than zero"));
        }
        if self.wall_thickness <= 0.0 {
            return Err(invalid("wall_thickness", "must be greater than zero"));
        }
        if self.wall_thickness >= self.outer_diameter / 2.0 {
            return Err(invalid(
                "wall_thickness",
                "must be less than half the outer diameter",
            ));
        }
        if self.embedment < 0.0 {
            return Err(invalid("embedment", "must not be negative"));
        }
        Ok(())
    }
}

/// Undrained clay properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilProperties {
    /// Undrained shear strength Su (kPa), used for vertical bearing
    pub shear_strength: f64,

    /// Second shear strength parameter (kPa), used in the residual lateral
    /// passive term
    pub passive_shear_strength: f64,

    /// Over-consolidation ratio
    pub ocr: f64,

    /// Sensitivity St
    pub sensitivity: f64,

    /// Raw unit weight input (kN/m³) before the submerged correction
    pub bulk_unit_weight: f64,
}

impl SoilProperties {
    pub fn new(
        shear_strength: Pressure,
        passive_shear_strength: Pressure,
        ocr: f64,
        sensitivity: f64,
        bulk_unit_weight: f64,
    ) -> Self {
        Self {
            shear_strength: to_kilopascals(shear_strength),
            passive_shear_strength: to_kilopascals(passive_shear_strength),
            ocr,
            sensitivity,
            bulk_unit_weight,
        }
    }

    pub fn shear_strength_pressure(&self) -> Pressure {
        Pressure::new::<kilopascal>(self.shear_strength)
    }

    /// Effective submerged unit weight, raw input minus the fixed offset
    pub fn effective_unit_weight(&self) -> f64 {
        self.bulk_unit_weight - SUBMERGED_WEIGHT_OFFSET
    }

    pub fn validate(&self) -> Result<(), InputError> {
        let invalid = |field, reason: &str| InputError::InvalidSoilParameter {
            field,
            reason: reason.to_string(),
        };

        for (field, value) in [
            ("shear_strength", self.shear_strength),
            ("passive_shear_strength", self.passive_shear_strength),
            ("ocr", self.ocr),
            ("sensitivity", self.sensitivity),
            ("bulk_unit_weight", self.bulk_unit_weight),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }

        if self.shear_strength <= 0.0 {
            return Err(invalid("shear_strength", "must be greater than zero"));
        }
        if self.sensitivity <= 0.0 {
            return Err(invalid("sensitivity", "must be greater than zero"));
        }
        if self.ocr <= 0.0 {
            return Err(invalid("ocr", "must be greater than zero"));
        }
        Ok(())
    }
}

/// Pipe-soil interface factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionFactors {
    /// Adhesion factor alpha
    pub adhesion: f64,

    /// Displacement rate factor
    pub rate: f64,
}

impl InteractionFactors {
    pub fn validate(&self) -> Result<(), InputError> {
        for (field, value) in [("adhesion", self.adhesion), ("rate", self.rate)] {
            if !value.is_finite() {
                return Err(InputError::InvalidSoilParameter {
                    field,
                    reason: "must be finite".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Complete, caller-constructed input record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelInputs {
    pub geometry: PipeGeometry,
    pub soil: SoilProperties,
    pub interaction: InteractionFactors,
    pub surfaces: SurfaceCoefficients,
}

impl ModelInputs {
    /// Check numeric domain constraints. Fails on the first violation.
    pub fn validate(&self) -> Result<(), InputError> {
        self.geometry.validate()?;
        self.soil.validate()?;
        self.interaction.validate()?;
        self.surfaces.validate()
    }
}
