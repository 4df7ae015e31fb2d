//! Navigation state machine
//!
//! Split into modules to reduce complexity.

mod navigator;

pub use navigator::Navigator;
