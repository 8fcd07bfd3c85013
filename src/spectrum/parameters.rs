use super::PeriodAxis;
use crate::base::{Direction, SpectrumError};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Defines how the usage factor U is obtained
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum Usage {
    /// Usage category key (e.g., "A2") looked up in the usage table
    Category(String),

    /// Usage factor supplied directly
    Factor(f64),
}

/// Defines how the reduction coefficient R of one direction is obtained
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum AxisReduction {
    /// Reduction coefficient R supplied directly
    Direct(f64),

    /// Reduction coefficient composed from the rule tables
    ///
    /// ```text
    /// R = R0 · Ia · Ip
    /// ```
    Composed {
        /// Structural system key (gives R0)
        system: String,

        /// Height irregularity key (gives Ia)
        height_irregularity: String,

        /// Plan irregularity key (gives Ip)
        plan_irregularity: String,
    },
}

/// Holds numeric overrides for the factors composing R along one direction
///
/// An override replaces the tabulated value; the corresponding key is not looked up.
/// Overrides only apply to [AxisReduction::Composed]; an evaluation with overrides on a
/// direction whose R is given directly is rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AxisOverrides {
    /// Basic reduction coefficient R0
    pub base_reduction: Option<f64>,

    /// Height irregularity factor Ia
    pub height_irregularity: Option<f64>,

    /// Plan irregularity factor Ip
    pub plan_irregularity: Option<f64>,
}

/// Holds numeric overrides for the tabulated factors
///
/// **Note:** Overriding S does not lift the special-study requirement: a soil and zone
/// combination without a standard factor is always rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Overrides {
    /// Zone factor Z
    pub zone_factor: Option<f64>,

    /// Soil factor S
    pub soil_factor: Option<f64>,

    /// Period TP
    pub tp: Option<f64>,

    /// Period TL
    pub tl: Option<f64>,

    /// Overrides along X
    #[serde(default)]
    pub x: AxisOverrides,

    /// Overrides along Y
    #[serde(default)]
    pub y: AxisOverrides,
}

/// Holds the parameters of one spectrum evaluation
///
/// A new instance should be created for each evaluation; the evaluator only borrows it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpectrumParameters {
    /// Seismic zone id (an unknown id falls back to the most severe zone)
    pub zone: u32,

    /// Soil profile key (e.g., "S1")
    pub soil: String,

    /// Usage category or factor
    pub usage: Usage,

    /// Reduction coefficient along X
    pub reduction_x: AxisReduction,

    /// Reduction coefficient along Y
    pub reduction_y: AxisReduction,

    /// Numeric overrides
    pub overrides: Overrides,

    /// Sampling of the period axis
    pub axis: PeriodAxis,
}

impl AxisOverrides {
    /// Returns true if no factor is overridden
    pub fn is_empty(&self) -> bool {
        self.base_reduction.is_none() && self.height_irregularity.is_none() && self.plan_irregularity.is_none()
    }
}

impl SpectrumParameters {
    /// Allocates a new instance
    ///
    /// The defaults are: zone 4, soil S1, usage category C, RX = RY = 8, and the
    /// period axis from 0 to 6 s with a step of 0.01 s.
    pub fn new() -> Self {
        SpectrumParameters {
            zone: 4,
            soil: "S1".to_string(),
            usage: Usage::Category("C".to_string()),
            reduction_x: AxisReduction::Direct(8.0),
            reduction_y: AxisReduction::Direct(8.0),
            overrides: Overrides::default(),
            axis: PeriodAxis::new(),
        }
    }

    /// Sets the seismic zone id
    ///
    /// The id is checked when the parameters are resolved (see [crate::spectrum::ResolvedFactors]).
    pub fn set_zone(&mut self, zone: u32) -> Result<&mut Self, SpectrumError> {
        self.zone = zone;
        Ok(self)
    }

    /// Sets the soil profile key
    pub fn set_soil(&mut self, soil: &str) -> Result<&mut Self, SpectrumError> {
        self.soil = soil.to_string();
        Ok(self)
    }

    /// Sets the usage category key
    pub fn set_usage_category(&mut self, category: &str) -> Result<&mut Self, SpectrumError> {
        self.usage = Usage::Category(category.to_string());
        Ok(self)
    }

    /// Sets the usage factor U directly
    pub fn set_usage_factor(&mut self, value: f64) -> Result<&mut Self, SpectrumError> {
        self.usage = Usage::Factor(check_positive("U", value)?);
        Ok(self)
    }

    /// Sets the reduction coefficient R of a direction directly
    pub fn set_reduction(&mut self, direction: Direction, value: f64) -> Result<&mut Self, SpectrumError> {
        let r = check_reduction(direction, value)?;
        *self.reduction_mut(direction) = AxisReduction::Direct(r);
        Ok(self)
    }

    /// Sets the reduction coefficient R of a direction as R0 · Ia · Ip
    ///
    /// # Input
    ///
    /// * `system` -- structural system key (R0)
    /// * `height_irregularity` -- height irregularity key (Ia); use "regular" for none
    /// * `plan_irregularity` -- plan irregularity key (Ip); use "regular" for none
    pub fn set_reduction_composed(
        &mut self,
        direction: Direction,
        system: &str,
        height_irregularity: &str,
        plan_irregularity: &str,
    ) -> Result<&mut Self, SpectrumError> {
        *self.reduction_mut(direction) = AxisReduction::Composed {
            system: system.to_string(),
            height_irregularity: height_irregularity.to_string(),
            plan_irregularity: plan_irregularity.to_string(),
        };
        Ok(self)
    }

    /// Overrides the zone factor Z
    pub fn set_zone_factor_override(&mut self, value: f64) -> Result<&mut Self, SpectrumError> {
        self.overrides.zone_factor = Some(check_positive("Z", value)?);
        Ok(self)
    }

    /// Overrides the soil factor S
    pub fn set_soil_factor_override(&mut self, value: f64) -> Result<&mut Self, SpectrumError> {
        self.overrides.soil_factor = Some(check_positive("S", value)?);
        Ok(self)
    }

    /// Overrides the period breakpoints TP and TL
    pub fn set_period_breakpoints_override(&mut self, tp: f64, tl: f64) -> Result<&mut Self, SpectrumError> {
        check_breakpoints(tp, tl)?;
        self.overrides.tp = Some(tp);
        self.overrides.tl = Some(tl);
        Ok(self)
    }

    /// Overrides the factors composing R along a direction
    pub fn set_axis_overrides(
        &mut self,
        direction: Direction,
        overrides: AxisOverrides,
    ) -> Result<&mut Self, SpectrumError> {
        if let Some(r0) = overrides.base_reduction {
            check_positive("R0", r0)?;
        }
        if let Some(ia) = overrides.height_irregularity {
            check_irregularity("Ia", ia)?;
        }
        if let Some(ip) = overrides.plan_irregularity {
            check_irregularity("Ip", ip)?;
        }
        if !overrides.is_empty() {
            if let AxisReduction::Direct(_) = self.reduction(direction) {
                return Err(SpectrumError::OverridesOnDirectReduction { direction });
            }
        }
        match direction {
            Direction::X => self.overrides.x = overrides,
            Direction::Y => self.overrides.y = overrides,
        }
        Ok(self)
    }

    /// Sets the sampling of the period axis
    pub fn set_period_axis(&mut self, t_max: f64, dt: f64) -> Result<&mut Self, SpectrumError> {
        self.axis.set_range(t_max, dt)?;
        Ok(self)
    }

    /// Returns the reduction specification of a direction
    pub fn reduction(&self, direction: Direction) -> &AxisReduction {
        match direction {
            Direction::X => &self.reduction_x,
            Direction::Y => &self.reduction_y,
        }
    }

    /// Returns the overrides of a direction
    pub fn axis_overrides(&self, direction: Direction) -> &AxisOverrides {
        match direction {
            Direction::X => &self.overrides.x,
            Direction::Y => &self.overrides.y,
        }
    }

    fn reduction_mut(&mut self, direction: Direction) -> &mut AxisReduction {
        match direction {
            Direction::X => &mut self.reduction_x,
            Direction::Y => &mut self.reduction_y,
        }
    }

    /// Reads a JSON file containing the parameters
    ///
    /// Missing fields take the default values of [SpectrumParameters::new].
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

    /// Writes a JSON file with the parameters
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

impl Default for SpectrumParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SpectrumParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Spectrum parameters\n")?;
        write!(f, "===================\n")?;
        write!(f, "zone = {:?}\n", self.zone)?;
        write!(f, "soil = {:?}\n", self.soil)?;
        write!(f, "usage = {:?}\n", self.usage)?;
        write!(f, "reduction_x = {:?}\n", self.reduction_x)?;
        write!(f, "reduction_y = {:?}\n", self.reduction_y)?;
        write!(f, "overrides = {:?}\n", self.overrides)?;
        write!(f, "axis = {:?}\n", self.axis)?;
        Ok(())
    }
}

/// Returns the value if it is positive and finite
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<f64, SpectrumError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SpectrumError::InvalidFactor {
            name,
            value,
            reason: "must be positive and finite",
        });
    }
    Ok(value)
}

/// Returns the value if it is an irregularity factor in (0, 1]
pub(crate) fn check_irregularity(name: &'static str, value: f64) -> Result<f64, SpectrumError> {
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(SpectrumError::InvalidFactor {
            name,
            value,
            reason: "must be in (0, 1]",
        });
    }
    Ok(value)
}

/// Returns the value if it is a valid reduction coefficient
pub(crate) fn check_reduction(direction: Direction, value: f64) -> Result<f64, SpectrumError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SpectrumError::NonPositiveReduction { direction, value });
    }
    Ok(value)
}

/// Checks that 0 < TP < TL
pub(crate) fn check_breakpoints(tp: f64, tl: f64) -> Result<(), SpectrumError> {
    if !tp.is_finite() || !tl.is_finite() || tp <= 0.0 || tp >= tl {
        return Err(SpectrumError::InvalidBreakpoints { tp, tl });
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
