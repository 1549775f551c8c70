//! Case files: a complete input record written in TOML or JSON.
//!
//! ```toml
//! [geometry]
//! outer_diameter = { value = 400.0, unit = "mm" }
//! wall_thickness = { value = 15.0, unit = "mm" }
//! embedment = { value = 0.1, unit = "m" }
//!
//! [soil]
//! shear_strength = { value = 5.0, unit = "kPa" }
//! passive_shear_strength = { value = 5.0, unit = "kPa" }
//! ocr = 1.0
//! sensitivity = 3.0
//! bulk_unit_weight = 18.0
//!
//! [interaction]
//! adhesion = 1.0
//! rate = 1.0
//!
//! [surfaces.concrete]
//! ssr = [0.8, 1.0, 1.2]
//! prem = [0.2, 0.25, 0.3]
//!
//! [surfaces.pet]
//! ssr = [0.7, 0.9, 1.1]
//! prem = [0.15, 0.2, 0.25]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::config::ConfigError;
use crate::model::*;
use crate::types::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFile {
    /// Optional case title
    #[serde(default)]
    pub title: Option<String>,
    pub geometry: GeometrySection,
    pub soil: SoilSection,
    pub interaction: InteractionFactors,
    pub surfaces: SurfacesSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometrySection {
    pub outer_diameter: LengthValue,
    pub wall_thickness: LengthValue,
    pub embedment: LengthValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilSection {
    pub shear_strength: PressureValue,
    pub passive_shear_strength: PressureValue,
    pub ocr: f64,
    pub sensitivity: f64,
    /// Raw unit weight (kN/m³) before the submerged correction
    pub bulk_unit_weight: f64,
}

/// Coefficient columns as written, validated on conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoefficientColumns {
    pub ssr: Vec<f64>,
    pub prem: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfacesSection {
    pub concrete: CoefficientColumns,
    pub pet: CoefficientColumns,
}

impl CaseFile {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a case file, choosing the format from the extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loading case file");

        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Convert units and validate into an engine input record
    pub fn into_inputs(self) -> Result<ModelInputs, ConfigError> {
        let geometry = PipeGeometry::new(
            self.geometry.outer_diameter.to_length()?,
            self.geometry.wall_thickness.to_length()?,
            self.geometry.embedment.to_length()?,
        );

        let soil = SoilProperties::new(
            self.soil.shear_strength.to_pressure()?,
            self.soil.passive_shear_strength.to_pressure()?,
            self.soil.ocr,
            self.soil.sensitivity,
            self.soil.bulk_unit_weight,
        );

        let surfaces = SurfaceCoefficients {
            concrete: SurfaceCoefficientSet::from_columns(
                SurfaceType::Concrete,
                &self.surfaces.concrete.ssr,
                &self.surfaces.concrete.prem,
            )?,
            pet: SurfaceCoefficientSet::from_columns(
                SurfaceType::Pet,
                &self.surfaces.pet.ssr,
                &self.surfaces.pet.prem,
            )?,
        };

        let inputs = ModelInputs {
            geometry,
            soil,
            interaction: self.interaction,
            surfaces,
        };
        inputs.validate()?;
        Ok(inputs)
    }
}

/// Load and validate a case file in one step
pub fn load_case(path: impl AsRef<Path>) -> Result<ModelInputs, ConfigError> {
    CaseFile::from_path(path)?.into_inputs()
}
