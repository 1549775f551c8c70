//! Surface coefficient tables in CSV form.
//!
//! One row per surface and estimate:
//!
//! ```text
//! surface,estimate,ssr,prem
//! concrete,P5,0.8,0.2
//! concrete,P50,1.0,0.25
//! ...
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::config::ConfigError;
use crate::model::*;

#[derive(Debug, Deserialize)]
struct CoefficientRow {
    surface: SurfaceType,
    estimate: Estimate,
    ssr: f64,
    prem: f64,
}

/// Read both surface coefficient sets from CSV.
///
/// Every (surface, estimate) combination must appear exactly once.
pub fn load_coefficient_table<R: Read>(reader: R) -> Result<SurfaceCoefficients, ConfigError> {
    let mut rows: HashMap<(SurfaceType, Estimate), CoefficientPair> = HashMap::new();

    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    for record in csv_reader.deserialize() {
        let row: CoefficientRow = record?;
        let pair = CoefficientPair::new(row.ssr, row.prem);
        if rows.insert((row.surface, row.estimate), pair).is_some() {
            return Err(InputError::InvalidCoefficientSet {
                surface: row.surface,
                reason: format!("duplicate {} row", row.estimate),
            }
            .into());
        }
    }

    let set = |surface: SurfaceType| -> Result<SurfaceCoefficientSet, InputError> {
        let pair = |estimate: Estimate| {
            rows.get(&(surface, estimate))
                .copied()
                .ok_or_else(|| InputError::InvalidCoefficientSet {
                    surface,
                    reason: format!("missing {} row", estimate),
                })
        };
        let set = SurfaceCoefficientSet::new(
            pair(Estimate::P5)?,
            pair(Estimate::P50)?,
            pair(Estimate::P95)?,
        );
        set.validate(surface)?;
        Ok(set)
    };

    let coefficients = SurfaceCoefficients {
        concrete: set(SurfaceType::Concrete)?,
        pet: set(SurfaceType::Pet)?,
    };
    debug!(rows = rows.len(), "Loaded coefficient table");
    Ok(coefficients)
}

pub fn load_coefficient_table_from_path(
    path: impl AsRef<Path>,
) -> Result<SurfaceCoefficients, ConfigError> {
    load_coefficient_table(File::open(path)?)
}
