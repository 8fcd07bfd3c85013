//! Makes available common structures needed to compute a spectrum
//!
//! You may write `use sofips::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{AccelUnit, Direction, SpectrumError, Table, DEFAULT_DT, DEFAULT_OUT_DIR, DEFAULT_T_MAX};
pub use crate::code::{CodeRuleTable, SoilFactor};
pub use crate::spectrum::{amplification_factor, AxisReduction, PeriodAxis, ResolvedFactors, SpectrumCurve};
pub use crate::spectrum::{SpectrumEvaluator, SpectrumParameters, SpectrumSample, SpectrumWarning, Usage};
pub use crate::StrError;
