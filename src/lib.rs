//! Sofips: seismic design response spectra according to the Peruvian NTE E.030 code
//!
//! The crate maps the classification of a structure (seismic zone, soil profile, usage
//! category, structural system and irregularities along two orthogonal directions) into
//! the elastic and design pseudo-acceleration spectra prescribed by the code.
//!
//! ```text
//! Sa = Z U C S / R      with  R = R0 Ia Ip
//! ```
//!
//! All ordinates are computed as fractions of the gravity acceleration (g).
//!
//! # Example
//!
//! ```
//! use sofips::prelude::*;
//!
//! # fn main() -> Result<(), SpectrumError> {
//! let mut params = SpectrumParameters::new();
//! params
//!     .set_zone(4)?
//!     .set_soil("S1")?
//!     .set_usage_category("C")?
//!     .set_reduction(Direction::X, 8.0)?
//!     .set_reduction_composed(Direction::Y, "rc-walls", "soft-story", "regular")?;
//!
//! let evaluator = SpectrumEvaluator::new(CodeRuleTable::e030());
//! let curve = evaluator.evaluate(&params)?;
//! assert_eq!(curve.samples().len(), 601);
//! assert_eq!(curve.summary().y.r, 4.5);
//! # Ok(())
//! # }
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod code;
pub mod prelude;
pub mod spectrum;
pub mod util;
