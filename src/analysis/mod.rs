pub mod run;
pub mod sweep;

pub use run::*;
pub use sweep::*;
