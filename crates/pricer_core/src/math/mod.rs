//! Numerical building blocks.
//!
//! - [`interpolators`]: piecewise linear interpolation, both as a validated
//!   interpolator type and as the clamped marker lookup used on sweep output
//! - [`grid`]: evenly spaced sample grids for scenario and surface generation

pub mod grid;
pub mod interpolators;
