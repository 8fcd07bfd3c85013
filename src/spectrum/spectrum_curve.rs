use super::{ResolvedFactors, SpectrumWarning};
use crate::base::{AccelUnit, Direction};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds one point of the spectrum
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct SpectrumSample {
    /// Period T (s)
    pub period: f64,

    /// Elastic pseudo-acceleration Z U C S
    pub elastic: f64,

    /// Design pseudo-acceleration along X: elastic / RX
    pub design_x: f64,

    /// Design pseudo-acceleration along Y: elastic / RY
    pub design_y: f64,
}

impl SpectrumSample {
    /// Returns the design pseudo-acceleration along a direction
    pub fn design(&self, direction: Direction) -> f64 {
        match direction {
            Direction::X => self.design_x,
            Direction::Y => self.design_y,
        }
    }
}

/// Holds the result of a successful spectrum evaluation
///
/// The curve cannot be modified after being produced; [SpectrumCurve::to_units]
/// returns a converted copy.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SpectrumCurve {
    /// Unit of the ordinates
    unit: AccelUnit,

    /// Samples ordered by increasing period
    samples: Vec<SpectrumSample>,

    /// Factors used to compute the samples
    summary: ResolvedFactors,

    /// Non-fatal condition found during the evaluation
    warning: Option<SpectrumWarning>,
}

impl SpectrumCurve {
    /// Allocates a new instance with ordinates in fractions of g
    pub(crate) fn new(samples: Vec<SpectrumSample>, summary: ResolvedFactors, warning: Option<SpectrumWarning>) -> Self {
        SpectrumCurve {
            unit: AccelUnit::G,
            samples,
            summary,
            warning,
        }
    }

    /// Returns the unit of the ordinates
    pub fn unit(&self) -> AccelUnit {
        self.unit
    }

    /// Returns the samples
    pub fn samples(&self) -> &[SpectrumSample] {
        &self.samples
    }

    /// Returns the factors used to compute the samples
    pub fn summary(&self) -> &ResolvedFactors {
        &self.summary
    }

    /// Returns the warning raised during the evaluation, if any
    pub fn warning(&self) -> Option<&SpectrumWarning> {
        self.warning.as_ref()
    }

    /// Returns the number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Indicates whether there are no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the periods
    pub fn periods(&self) -> Vec<f64> {
        self.samples.iter().map(|p| p.period).collect()
    }

    /// Returns the elastic ordinates
    pub fn elastic(&self) -> Vec<f64> {
        self.samples.iter().map(|p| p.elastic).collect()
    }

    /// Returns the design ordinates along a direction
    pub fn design(&self, direction: Direction) -> Vec<f64> {
        self.samples.iter().map(|p| p.design(direction)).collect()
    }

    /// Returns the maximum design ordinate along a direction (the plateau value)
    pub fn max_design(&self, direction: Direction) -> f64 {
        self.samples.iter().fold(0.0, |acc, p| f64::max(acc, p.design(direction)))
    }

    /// Returns a copy of this curve with the ordinates converted to another unit
    ///
    /// The periods and the summary factors are not modified.
    pub fn to_units(&self, unit: AccelUnit) -> SpectrumCurve {
        let m = unit.factor() / self.unit.factor();
        let samples = self
            .samples
            .iter()
            .map(|p| SpectrumSample {
                period: p.period,
                elastic: p.elastic * m,
                design_x: p.design_x * m,
                design_y: p.design_y * m,
            })
            .collect();
        SpectrumCurve {
            unit,
            samples,
            summary: self.summary,
            warning: self.warning.clone(),
        }
    }

    /// Reads a JSON file containing a curve
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let data = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(data)
    }

    /// Writes a JSON file with the curve and its summary
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
