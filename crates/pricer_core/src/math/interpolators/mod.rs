//! Interpolation methods for marker lookups on sampled curves.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: validated piecewise linear interpolation, clamped
//!   to the boundary samples outside its domain
//! - [`interpolate_clamped`]: one-shot lookup on raw sample slices that never
//!   fails and reports mismatched inputs as NaN
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::interpolators::LinearInterpolator;
//!
//! let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let interp = LinearInterpolator::new(&xs, &ys).unwrap();
//! assert_eq!(interp.domain(), (0.0, 3.0));
//!
//! // Interpolate at x = 1.5 (between y=1.0 and y=4.0)
//! let y = interp.interpolate(1.5);
//! assert!((y - 2.5).abs() < 1e-10);
//!
//! // Outside the domain the boundary sample is returned
//! assert_eq!(interp.interpolate(-1.0), 0.0);
//! assert_eq!(interp.interpolate(10.0), 9.0);
//! ```

mod linear;

pub use linear::{interpolate_clamped, LinearInterpolator};
