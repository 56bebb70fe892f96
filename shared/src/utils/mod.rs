//! Common utility functions

pub mod slices;
pub mod validation;

pub use slices::*;
pub use validation::*;
