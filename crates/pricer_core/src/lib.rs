//! # pricer_core: Numeric Foundation for the Greeks Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Piecewise linear interpolation and evenly spaced grids (`math`)
//! - Scalar-or-vector parameter values used by the scenario generators (`types::param`)
//! - Trading/calendar day bases and percent conversions (`types::time`)
//! - Error types: `InterpolationError`, `ParamError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation of parameter values
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::interpolators::interpolate_clamped;
//! use pricer_core::types::{DayBasis, ParamValue};
//!
//! // Marker lookup between two samples
//! let y = interpolate_clamped::<f64>(1.5, &[1.0, 2.0], &[10.0, 20.0]);
//! assert!((y - 15.0).abs() < 1e-12);
//!
//! // Thirty calendar days as a year fraction
//! let t = DayBasis::Calendar.from_days(30.0);
//! assert!((DayBasis::Calendar.to_days(t) - 30.0).abs() < 1e-12);
//!
//! // A list-valued parameter is a comparison dimension
//! let vols = ParamValue::from(vec![0.1, 0.2, 0.3]);
//! assert_eq!(vols.as_scalar(), 0.1);
//! assert_eq!(vols.comparison_values(), Some(&[0.1, 0.2, 0.3][..]));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
