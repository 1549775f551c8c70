//! Wedging correction and residual lateral passive resistance.

/// Wedging half-angle beta (rad) for the embedded arc
pub fn wedging_angle(outer_diameter: f64, embedment: f64) -> f64 {
    let cos_beta = 1.0 - embedment / (outer_diameter / 2.0);
    cos_beta.clamp(-1.0, 1.0).acos()
}

/// Wedging factor zeta.
///
/// Exactly 1.0 for an unembedded pipe (beta = 0), where the general
/// expression is 0/0.
pub fn wedging_factor(beta: f64) -> f64 {
    if beta == 0.0 {
        return 1.0;
    }
    2.0 * beta.sin() / (beta + beta.sin() * beta.cos())
}

/// Residual lateral passive resistance Fl_remain (kN/m)
pub fn residual_passive_resistance(
    embedment: f64,
    rate: f64,
    passive_shear_strength: f64,
    effective_unit_weight: f64,
) -> f64 {
    embedment * rate * (2.0 * passive_shear_strength + 0.5 * effective_unit_weight * embedment)
}
