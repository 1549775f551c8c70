//! Surface coefficient sets (SSR / Prem) for the two contact surfaces.
//!
//! Each surface carries exactly three ordered estimates, low/mid/high,
//! labelled P5/P50/P95. The labels are caller conventions; nothing here is
//! statistically derived.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::InputError;

/// Pipe contact surface type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceType {
    /// Concrete weight coating
    Concrete,
    /// PET (polyethylene terephthalate) coating
    Pet,
}

impl SurfaceType {
    /// Fixed processing order: concrete first, then PET
    pub const ALL: [SurfaceType; 2] = [SurfaceType::Concrete, SurfaceType::Pet];

    pub fn label(&self) -> &'static str {
        match self {
            SurfaceType::Concrete => "CONCRETE SURFACE",
            SurfaceType::Pet => "PET SURFACE",
        }
    }
}

impl fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered estimate tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Estimate {
    /// Low estimate (index 0)
    P5,
    /// Mid estimate (index 1)
    P50,
    /// High estimate (index 2)
    P95,
}

impl Estimate {
    pub const ALL: [Estimate; 3] = [Estimate::P5, Estimate::P50, Estimate::P95];

    pub fn index(&self) -> usize {
        match self {
            Estimate::P5 => 0,
            Estimate::P50 => 1,
            Estimate::P95 => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Estimate::P5 => "P5",
            Estimate::P50 => "P50",
            Estimate::P95 => "P95",
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Surface stress ratio and OCR exponent for one estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientPair {
    /// Shear stress ratio
    pub ssr: f64,
    /// Exponent applied to OCR
    pub prem: f64,
}

impl CoefficientPair {
    pub const fn new(ssr: f64, prem: f64) -> Self {
        Self { ssr, prem }
    }
}

/// Three ordered (SSR, Prem) pairs for one surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceCoefficientSet {
    pairs: [CoefficientPair; 3],
}

impl SurfaceCoefficientSet {
    pub const fn new(low: CoefficientPair, mid: CoefficientPair, high: CoefficientPair) -> Self {
        Self {
            pairs: [low, mid, high],
        }
    }

    /// Build from spreadsheet-style columns.
    ///
    /// Both columns must hold exactly three finite values ordered low/mid/high.
    pub fn from_columns(
        surface: SurfaceType,
        ssr: &[f64],
        prem: &[f64],
    ) -> Result<Self, InputError> {
        let column = |name: &str, values: &[f64]| -> Result<[f64; 3], InputError> {
            <[f64; 3]>::try_from(values).map_err(|_| InputError::InvalidCoefficientSet {
                surface,
                reason: format!("expected 3 {} values (P5, P50, P95), got {}", name, values.len()),
            })
        };

        let ssr = column("SSR", ssr)?;
        let prem = column("Prem", prem)?;

        let set = Self {
            pairs: [0, 1, 2].map(|i| CoefficientPair::new(ssr[i], prem[i])),
        };
        set.validate(surface)?;
        Ok(set)
    }

    /// Coefficients for one estimate tier
    pub fn get(&self, estimate: Estimate) -> CoefficientPair {
        self.pairs[estimate.index()]
    }

    /// Iterate estimates in low/mid/high order
    pub fn iter(&self) -> impl Iterator<Item = (Estimate, CoefficientPair)> + '_ {
        Estimate::ALL.into_iter().zip(self.pairs.iter().copied())
    }

    pub fn validate(&self, surface: SurfaceType) -> Result<(), InputError> {
        for (estimate, pair) in self.iter() {
            if !pair.ssr.is_finite() || !pair.prem.is_finite() {
                return Err(InputError::InvalidCoefficientSet {
                    surface,
                    reason: format!("{} coefficients must be finite", estimate),
                });
            }
        }
        Ok(())
    }
}

/// Coefficient sets for both surfaces
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceCoefficients {
    pub concrete: SurfaceCoefficientSet,
    pub pet: SurfaceCoefficientSet,
}

impl SurfaceCoefficients {
    pub fn get(&self, surface: SurfaceType) -> &SurfaceCoefficientSet {
        match surface {
            SurfaceType::Concrete => &self.concrete,
            SurfaceType::Pet => &self.pet,
        }
    }

    /// Iterate surfaces in processing order
    pub fn iter(&self) -> impl Iterator<Item = (SurfaceType, &SurfaceCoefficientSet)> + '_ {
        SurfaceType::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    pub fn validate(&self) -> Result<(), InputError> {
        for (surface, set) in self.iter() {
            set.validate(surface)?;
        }
        Ok(())
    }
}
