pub mod camera;
pub mod constants;
pub mod field;
pub mod heart;
pub mod pulse;

pub use camera::*;
pub use constants::*;
pub use field::*;
pub use heart::*;
pub use pulse::*;
