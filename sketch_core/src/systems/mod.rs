pub mod frame;
pub mod movement;

pub use frame::*;
pub use movement::*;
