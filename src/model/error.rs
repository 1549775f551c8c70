use crate::model::SurfaceType;

/// Input validation failures, raised before any computation starts
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid geometry: {field} {reason}")]
    InvalidGeometry {
        field: &'static str,
        reason: String,
    },

    #[error("Invalid soil parameter: {field} {reason}")]
    InvalidSoilParameter {
        field: &'static str,
        reason: String,
    },

    #[error("Invalid coefficient set for {surface}: {reason}")]
    InvalidCoefficientSet {
        surface: SurfaceType,
        reason: String,
    },
}

impl InputError {
    /// Name of the field that violated its constraint (or the surface label)
    pub fn field(&self) -> &str {
        match self {
            InputError::InvalidGeometry { field, .. } => *field,
            InputError::InvalidSoilParameter { field, .. } => *field,
            InputError::InvalidCoefficientSet { surface, .. } => surface.label(),
        }
    }
}
