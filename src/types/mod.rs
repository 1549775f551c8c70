//! Units used across psi-core.
//!
//! # Internal units
//!
//! The engine works on plain `f64` values in a fixed unit set:
//! - geometry in **metres**
//! - shear strength in **kPa**
//! - unit weight in **kN/m³**
//! - line loads (forces per metre of pipe) in **kN/m**
//! - displacements in **mm**
//!
//! Public constructors accept UOM types and convert at boundaries.

pub mod conversion;
pub mod units;

pub use conversion::*;
pub use units::*;
