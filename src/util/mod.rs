//! Implements presentation utilities: tab-separated tables and plots

mod spectrum_plot;
mod tsv_export;
pub use crate::util::spectrum_plot::*;
pub use crate::util::tsv_export::*;
