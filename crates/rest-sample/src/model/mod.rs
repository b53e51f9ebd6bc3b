//! Pure data structures returned by the sample resources.

pub mod greeting;
pub mod item;

pub use greeting::*;
pub use item::*;
