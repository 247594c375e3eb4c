//! Greeks result container and field selection.
//!
//! - [`GreeksResult`]: price, first/second/third-order Greeks and optional P&L
//! - [`GreekKind`]: names one field of a [`GreeksResult`], used to pick the
//!   output of a surface or a table column

mod kind;
mod result;

pub use kind::GreekKind;
pub use result::GreeksResult;
