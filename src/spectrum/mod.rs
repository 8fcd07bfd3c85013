//! Implements the evaluation of elastic and design spectra

mod parameters;
mod period_axis;
mod resolved_factors;
mod shape;
mod spectrum_curve;
mod spectrum_evaluator;
pub use crate::spectrum::parameters::*;
pub use crate::spectrum::period_axis::*;
pub use crate::spectrum::resolved_factors::*;
pub use crate::spectrum::shape::*;
pub use crate::spectrum::spectrum_curve::*;
pub use crate::spectrum::spectrum_evaluator::*;
