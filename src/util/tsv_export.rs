use crate::base::{Direction, DEFAULT_PRECISION};
use crate::spectrum::SpectrumCurve;
use crate::StrError;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Holds options for the tab-separated tables
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TsvOptions {
    /// Number of decimal digits of every column
    pub precision: usize,

    /// Writes a header row with the column names
    ///
    /// Tables to be read by structural-analysis programs must not have a header.
    pub header: bool,
}

impl TsvOptions {
    /// Allocates a new instance (four decimal digits, no header)
    pub fn new() -> Self {
        TsvOptions {
            precision: DEFAULT_PRECISION,
            header: false,
        }
    }
}

impl Default for TsvOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats the full spectrum as a tab-separated table
///
/// Each row holds `T  Sa_elastic  Sa_X  Sa_Y`.
pub fn format_spectrum_table(curve: &SpectrumCurve, options: &TsvOptions) -> String {
    let n = options.precision;
    let mut buffer = String::new();
    if options.header {
        let unit = curve.unit().symbol();
        buffer.push_str(&format!(
            "T(s)\tSa_Elastic({})\tSa_X({})\tSa_Y({})\n",
            unit, unit, unit
        ));
    }
    for p in curve.samples() {
        buffer.push_str(&format!(
            "{:.n$}\t{:.n$}\t{:.n$}\t{:.n$}\n",
            p.period,
            p.elastic,
            p.design_x,
            p.design_y,
            n = n
        ));
    }
    buffer
}

/// Formats the design spectrum of one direction as a two-column table (no header)
///
/// The periods have four decimal digits and the ordinates six, as expected by
/// programs importing a response spectrum function from a text file.
pub fn format_direction_table(curve: &SpectrumCurve, direction: Direction) -> String {
    let mut buffer = String::new();
    for p in curve.samples() {
        buffer.push_str(&format!("{:.4}\t{:.6}\n", p.period, p.design(direction)));
    }
    buffer
}

/// Writes the full spectrum table to a file
///
/// # Input
///
/// * `full_path` -- may be a String, &str, or Path
pub fn write_spectrum_table<P>(curve: &SpectrumCurve, options: &TsvOptions, full_path: &P) -> Result<(), StrError>
where
    P: AsRef<OsStr> + ?Sized,
{
    write_text(&format_spectrum_table(curve, options), full_path)
}

/// Writes the design spectrum of one direction to a file
///
/// # Input
///
/// * `full_path` -- may be a String, &str, or Path
pub fn write_direction_table<P>(curve: &SpectrumCurve, direction: Direction, full_path: &P) -> Result<(), StrError>
where
    P: AsRef<OsStr> + ?Sized,
{
    write_text(&format_direction_table(curve, direction), full_path)
}

fn write_text<P>(text: &str, full_path: &P) -> Result<(), StrError>
where
    P: AsRef<OsStr> + ?Sized,
{
    let path = Path::new(full_path).to_path_buf();
    if let Some(p) = path.parent() {
        fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
    }
    let mut file = File::create(&path).map_err(|_| "cannot create file")?;
    file.write_all(text.as_bytes()).map_err(|_| "cannot write file")?;
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
