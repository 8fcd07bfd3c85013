//! Implements the base structures shared by the rule tables and the spectrum evaluator

mod constants;
mod enums;
mod errors;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::errors::*;
