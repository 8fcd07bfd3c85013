use crate::base::{SpectrumError, DEFAULT_DT, DEFAULT_T_MAX, MAX_NPOINT};
use serde::{Deserialize, Serialize};

/// Holds the sampling of the period axis `0 ≤ T ≤ t_max` with a constant step `dt`
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct PeriodAxis {
    /// Maximum period, inclusive (s)
    pub t_max: f64,

    /// Period increment (s)
    pub dt: f64,
}

impl PeriodAxis {
    /// Allocates a new instance with the default range (0 to 6 s, step 0.01 s)
    pub fn new() -> Self {
        PeriodAxis {
            t_max: DEFAULT_T_MAX,
            dt: DEFAULT_DT,
        }
    }

    /// Sets the maximum period
    ///
    /// The axis is left unchanged if the new value is invalid or if it would require
    /// too many samples with the current step.
    pub fn set_t_max(&mut self, value: f64) -> Result<&mut Self, SpectrumError> {
        if !value.is_finite() || value < 0.0 {
            return Err(SpectrumError::InvalidAxis("t_max must be finite and ≥ 0.0"));
        }
        PeriodAxis { t_max: value, ..*self }.validate()?;
        self.t_max = value;
        Ok(self)
    }

    /// Sets the period increment
    ///
    /// The axis is left unchanged if the new value is invalid or if it would require
    /// too many samples with the current maximum period.
    pub fn set_dt(&mut self, value: f64) -> Result<&mut Self, SpectrumError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(SpectrumError::InvalidAxis("dt must be finite and > 0.0"));
        }
        PeriodAxis { dt: value, ..*self }.validate()?;
        self.dt = value;
        Ok(self)
    }

    /// Sets both the maximum period and the increment
    ///
    /// The pair is checked as a whole; thus, going from a short and fine axis to a long
    /// and coarse one does not depend on the order of the setters.
    pub fn set_range(&mut self, t_max: f64, dt: f64) -> Result<&mut Self, SpectrumError> {
        let axis = PeriodAxis { t_max, dt };
        axis.validate()?;
        *self = axis;
        Ok(self)
    }

    /// Checks the data (the fields are public and may have been set directly)
    pub fn validate(&self) -> Result<(), SpectrumError> {
        if !self.t_max.is_finite() || self.t_max < 0.0 {
            return Err(SpectrumError::InvalidAxis("t_max must be finite and ≥ 0.0"));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SpectrumError::InvalidAxis("dt must be finite and > 0.0"));
        }
        if self.t_max / self.dt >= MAX_NPOINT as f64 {
            return Err(SpectrumError::InvalidAxis("dt is too small for the requested t_max"));
        }
        Ok(())
    }

    /// Returns the number of samples, including both ends
    ///
    /// A small tolerance keeps the last period when `t_max/dt` is slightly truncated
    /// by round-off (e.g., 6.0/0.01).
    pub fn npoint(&self) -> Result<usize, SpectrumError> {
        self.validate()?;
        Ok((self.t_max / self.dt + 1e-9).floor() as usize + 1)
    }

    /// Returns the periods `T[i] = i dt` for `i = 0, …, npoint-1`
    ///
    /// The periods are computed by multiplication to avoid accumulating round-off errors.
    pub fn periods(&self) -> Result<Vec<f64>, SpectrumError> {
        let npoint = self.npoint()?;
        Ok((0..npoint).map(|i| (i as f64) * self.dt).collect())
    }
}

impl Default for PeriodAxis {
    fn default() -> Self {
        Self::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::PeriodAxis;
    use crate::base::SpectrumError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_axis_works() {
        let axis = PeriodAxis::new();
        assert_eq!(axis, PeriodAxis::default());
        assert_eq!(axis.npoint().unwrap(), 601);
        let tt = axis.periods().unwrap();
        assert_eq!(tt.len(), 601);
        assert_eq!(tt[0], 0.0);
        assert_abs_diff_eq!(tt[40], 0.4, epsilon = 1e-15);
        assert_abs_diff_eq!(tt[600], 6.0, epsilon = 1e-14);
    }

    #[test]
    fn last_period_is_kept() {
        let mut axis = PeriodAxis::new();
        axis.set_t_max(6.0).unwrap().set_dt(0.02).unwrap();
        assert_eq!(axis.npoint().unwrap(), 301);

        axis.set_t_max(1.0).unwrap().set_dt(0.1).unwrap();
        assert_eq!(axis.npoint().unwrap(), 11);
        assert_abs_diff_eq!(*axis.periods().unwrap().last().unwrap(), 1.0, epsilon = 1e-15);

        axis.set_t_max(0.3).unwrap().set_dt(0.1).unwrap();
        assert_eq!(axis.npoint().unwrap(), 4);

        axis.set_t_max(1.05).unwrap().set_dt(0.1).unwrap();
        assert_eq!(axis.npoint().unwrap(), 11);

        axis.set_t_max(0.0).unwrap();
        assert_eq!(axis.periods().unwrap(), &[0.0]);
    }

    #[test]
    fn catch_some_errors() {
        let mut axis = PeriodAxis::new();
        assert_eq!(
            axis.set_dt(0.0).err(),
            Some(SpectrumError::InvalidAxis("dt must be finite and > 0.0"))
        );
        assert_eq!(
            axis.set_dt(f64::NAN).err(),
            Some(SpectrumError::InvalidAxis("dt must be finite and > 0.0"))
        );
        assert_eq!(
            axis.set_t_max(-1.0).err(),
            Some(SpectrumError::InvalidAxis("t_max must be finite and ≥ 0.0"))
        );
        assert_eq!(
            axis.set_t_max(f64::INFINITY).err(),
            Some(SpectrumError::InvalidAxis("t_max must be finite and ≥ 0.0"))
        );
        assert_eq!(axis.validate(), Ok(()));

        axis.dt = -0.01;
        assert_eq!(
            axis.validate().err(),
            Some(SpectrumError::InvalidAxis("dt must be finite and > 0.0"))
        );
        axis.dt = 1e-9;
        assert_eq!(
            axis.validate().err(),
            Some(SpectrumError::InvalidAxis("dt is too small for the requested t_max"))
        );
        axis.dt = 0.01;
        axis.t_max = f64::NAN;
        assert_eq!(
            axis.validate().err(),
            Some(SpectrumError::InvalidAxis("t_max must be finite and ≥ 0.0"))
        );
        assert!(axis.npoint().is_err());
        assert!(axis.periods().is_err());
    }

    #[test]
    fn setters_reject_too_many_samples() {
        let too_small = Some(SpectrumError::InvalidAxis("dt is too small for the requested t_max"));
        let mut axis = PeriodAxis::new();
        assert_eq!(axis.set_dt(1e-12).err(), too_small);
        assert_eq!(axis, PeriodAxis::new());
        assert_eq!(axis.set_t_max(1e5).err(), too_small);
        assert_eq!(axis, PeriodAxis::new());
        assert_eq!(axis.set_range(6.0, 1e-12).err(), too_small);
        assert_eq!(axis, PeriodAxis::new());

        // a long and coarse axis is accepted when set as a whole
        axis.set_range(2e4, 1.0).unwrap();
        assert_eq!(axis.npoint().unwrap(), 20001);

        // the fields are public; the sampling is still guarded
        axis.dt = 1e-12;
        assert_eq!(axis.npoint().err(), too_small);
        assert_eq!(axis.periods().err(), too_small);
    }
}
