//! Intermediate quantities shared by every resistance profile.
//!
//! ```text
//! ModelInputs ──► weights ──► V
//!             ──► Abm ──► Qv
//!             ──► beta ──► zeta
//!             ──► Fl_remain
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::*;
use crate::physics::*;

/// Derived values for one run, recomputed fresh on every call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intermediates {
    /// Steel mass per length Wp (kg/m)
    pub wp: f64,

    /// Flooded weight per length Wpf (kN/m)
    pub wpf: f64,

    /// Governing effective vertical force V (kN/m)
    pub v: f64,

    /// Penetrated contact area Abm (m²)
    pub abm: f64,

    /// Vertical bearing capacity Qv (kN/m)
    pub qv: f64,

    /// Wedging factor zeta
    pub zeta: f64,

    /// Residual lateral passive resistance Fl_remain (kN/m)
    pub fl_remain: f64,
}

/// Stateless calculator for [`Intermediates`]
#[derive(Debug, Clone, Copy, Default)]
pub struct IntermediateCalculator;

impl IntermediateCalculator {
    /// Validate the inputs, then derive the intermediates
    pub fn compute(inputs: &ModelInputs) -> Result<Intermediates, InputError> {
        inputs.validate()?;
        Ok(Self::compute_unchecked(inputs))
    }

    /// Derive the intermediates without validation.
    ///
    /// Callers must have validated `inputs`; out-of-domain values propagate
    /// as NaN or infinities rather than failing.
    pub fn compute_unchecked(inputs: &ModelInputs) -> Intermediates {
        let geometry = &inputs.geometry;
        let soil = &inputs.soil;
        let dop = geometry.outer_diameter;
        let z = geometry.embedment;

        let weights = pipe_weights(geometry);
        let v = effective_force(&weights);

        let abm = penetration_area(dop, z);
        let qv = vertical_capacity(geometry, soil, abm);

        let zeta = wedging_factor(wedging_angle(dop, z));
        let fl_remain = residual_passive_resistance(
            z,
            inputs.interaction.rate,
            soil.passive_shear_strength,
            soil.effective_unit_weight(),
        );

        debug!(
            wp = weights.steel,
            wpf = weights.flooded,
            v,
            abm,
            qv,
            zeta,
            fl_remain,
            "Computed intermediates"
        );

        Intermediates {
            wp: weights.steel,
            wpf: weights.flooded,
            v,
            abm,
            qv,
            zeta,
            fl_remain,
        }
    }
}
