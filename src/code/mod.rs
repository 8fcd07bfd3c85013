//! Implements the normative rule tables of the seismic design code

mod code_rule_table;
mod e030;
mod soil_factor;
pub use crate::code::code_rule_table::*;
pub use crate::code::e030::*;
pub use crate::code::soil_factor::*;
