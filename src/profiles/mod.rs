pub mod displacement;
pub mod resistance;
pub mod table;

pub use displacement::*;
pub use resistance::*;
pub use table::*;
