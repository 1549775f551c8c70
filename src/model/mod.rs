pub mod constants;
pub mod coefficients;
pub mod error;
pub mod inputs;

pub use constants::*;
pub use coefficients::*;
pub use error::*;
pub use inputs::*;
