pub mod weight;
pub mod penetration;
pub mod wedging;
pub mod intermediates;

pub use weight::*;
pub use penetration::*;
pub use wedging::*;
pub use intermediates::*;
