pub mod types;
pub mod model;
pub mod physics;
pub mod profiles;
pub mod analysis;
pub mod config;

pub use types::*;
