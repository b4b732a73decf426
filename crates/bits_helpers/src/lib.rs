mod bit;
pub use bit::*;

pub mod input;
pub mod restart;
