//! Model constants carried over from the reference spreadsheet.
//!
//! The submerged weight offset and lay factor have no documented derivation;
//! they are kept as-is.

/// Subtracted from the raw (bulk) unit weight input to get the effective
/// submerged unit weight, kN/m³
pub const SUBMERGED_WEIGHT_OFFSET: f64 = 10.05;

/// Lay factor applied to the steel-only submerged weight
pub const LAY_FACTOR: f64 = 2.0;

/// Gravitational acceleration, m/s²
pub const GRAVITY: f64 = 9.8;

/// Steel density, kg/m³
pub const STEEL_DENSITY: f64 = 7850.0;

/// Pipe contents density (water filled), kg/m³
pub const CONTENT_DENSITY: f64 = 1000.0;

/// Seawater density, kg/m³
pub const SEAWATER_DENSITY: f64 = 1025.0;
