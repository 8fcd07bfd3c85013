use super::{check_breakpoints, check_irregularity, check_positive, check_reduction};
use super::{AxisOverrides, AxisReduction, SpectrumParameters, Usage};
use crate::base::{Direction, SpectrumError};
use crate::code::{CodeRuleTable, SoilFactor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the reduction coefficient of one direction and its breakdown
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct AxisFactors {
    /// Effective reduction coefficient R
    pub r: f64,

    /// Basic reduction coefficient R0 (None if R was supplied directly)
    pub r0: Option<f64>,

    /// Height irregularity factor Ia (None if R was supplied directly)
    pub ia: Option<f64>,

    /// Plan irregularity factor Ip (None if R was supplied directly)
    pub ip: Option<f64>,
}

impl AxisFactors {
    /// Allocates a new instance with R supplied directly
    pub fn direct(r: f64) -> Self {
        AxisFactors {
            r,
            r0: None,
            ia: None,
            ip: None,
        }
    }

    /// Allocates a new instance with R = R0 · Ia · Ip
    pub fn composed(r0: f64, ia: f64, ip: f64) -> Self {
        AxisFactors {
            r: r0 * ia * ip,
            r0: Some(r0),
            ia: Some(ia),
            ip: Some(ip),
        }
    }
}

/// Defines non-fatal conditions found while resolving the parameters
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum SpectrumWarning {
    /// The requested zone is unknown and the most severe zone was used instead
    ZoneFallback { requested: u32, used: u32 },
}

impl fmt::Display for SpectrumWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpectrumWarning::ZoneFallback { requested, used } => {
                write!(f, "unknown seismic zone {}; the most severe zone ({}) was used", requested, used)
            }
        }
    }
}

/// Holds the numeric factors of a spectrum after table lookups and overrides
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ResolvedFactors {
    /// Zone id actually used
    pub zone: u32,

    /// Zone factor Z (fraction of g)
    pub z: f64,

    /// Usage factor U
    pub u: f64,

    /// Soil factor S
    pub s: f64,

    /// Period TP (s)
    pub tp: f64,

    /// Period TL (s)
    pub tl: f64,

    /// Reduction along X
    pub x: AxisFactors,

    /// Reduction along Y
    pub y: AxisFactors,
}

impl ResolvedFactors {
    /// Resolves the parameters into numeric factors
    ///
    /// The checks are performed in this order:
    ///
    /// 1. An unknown zone falls back to the most severe zone (reported as a warning)
    /// 2. The soil must exist and have a standard factor in the zone; otherwise the
    ///    evaluation is rejected even if other parameters are invalid or overridden
    /// 3. The remaining keys must exist; overrides replace the tabulated values
    /// 4. All factors must be positive; RX and RY are checked before any division
    pub fn resolve(
        table: &CodeRuleTable,
        params: &SpectrumParameters,
    ) -> Result<(Self, Option<SpectrumWarning>), SpectrumError> {
        // zone
        let (zone, warning) = match table.zone_factor(params.zone) {
            Some(_) => (params.zone, None),
            None => {
                let used = table.most_severe_zone();
                let warning = SpectrumWarning::ZoneFallback {
                    requested: params.zone,
                    used,
                };
                (used, Some(warning))
            }
        };
        let z = table.zone_factor(zone).ok_or(SpectrumError::UnknownZone(zone))?;

        // soil
        let s = match table.soil_factor(&params.soil, zone)? {
            SoilFactor::Value(s) => s,
            SoilFactor::SpecialStudyRequired => {
                return Err(SpectrumError::SpecialStudyRequired {
                    soil: params.soil.clone(),
                    zone,
                })
            }
        };
        let (tp, tl) = table.period_breakpoints(&params.soil)?;

        // usage
        let u = match &params.usage {
            Usage::Category(category) => table.usage_factor(category)?,
            Usage::Factor(value) => *value,
        };

        // overrides
        let ov = &params.overrides;
        let z = check_positive("Z", ov.zone_factor.unwrap_or(z))?;
        let s = check_positive("S", ov.soil_factor.unwrap_or(s))?;
        let u = check_positive("U", u)?;
        let tp = ov.tp.unwrap_or(tp);
        let tl = ov.tl.unwrap_or(tl);
        check_breakpoints(tp, tl)?;

        // reduction coefficients
        let x = resolve_axis(table, Direction::X, &params.reduction_x, &ov.x)?;
        let y = resolve_axis(table, Direction::Y, &params.reduction_y, &ov.y)?;

        let factors = ResolvedFactors {
            zone,
            z,
            u,
            s,
            tp,
            tl,
            x,
            y,
        };
        Ok((factors, warning))
    }

    /// Returns the reduction of a direction
    pub fn axis(&self, direction: Direction) -> &AxisFactors {
        match direction {
            Direction::X => &self.x,
            Direction::Y => &self.y,
        }
    }

    /// Checks the factors (the fields are public and may have been set directly)
    pub fn validate(&self) -> Result<(), SpectrumError> {
        check_positive("Z", self.z)?;
        check_positive("U", self.u)?;
        check_positive("S", self.s)?;
        check_breakpoints(self.tp, self.tl)?;
        check_reduction(Direction::X, self.x.r)?;
        check_reduction(Direction::Y, self.y.r)?;
        Ok(())
    }
}

fn resolve_axis(
    table: &CodeRuleTable,
    direction: Direction,
    reduction: &AxisReduction,
    overrides: &AxisOverrides,
) -> Result<AxisFactors, SpectrumError> {
    match reduction {
        AxisReduction::Direct(r) => {
            if !overrides.is_empty() {
                return Err(SpectrumError::OverridesOnDirectReduction { direction });
            }
            check_reduction(direction, *r)?;
            Ok(AxisFactors::direct(*r))
        }
        AxisReduction::Composed {
            system,
            height_irregularity,
            plan_irregularity,
        } => {
            let r0 = match overrides.base_reduction {
                Some(value) => value,
                None => table.base_reduction(system)?,
            };
            let ia = match overrides.height_irregularity {
                Some(value) => value,
                None => table.height_irregularity_factor(height_irregularity)?,
            };
            let ip = match overrides.plan_irregularity {
                Some(value) => value,
                None => table.plan_irregularity_factor(plan_irregularity)?,
            };
            check_positive("R0", r0)?;
            check_irregularity("Ia", ia)?;
            check_irregularity("Ip", ip)?;
            let factors = AxisFactors::composed(r0, ia, ip);
            check_reduction(direction, factors.r)?;
            Ok(factors)
        }
    }
}

impl fmt::Display for ResolvedFactors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z = {} g (zone {})\n", self.z, self.zone)?;
        write!(f, "U = {}\n", self.u)?;
        write!(f, "S = {}\n", self.s)?;
        write!(f, "TP = {} s\n", self.tp)?;
        write!(f, "TL = {} s\n", self.tl)?;
        for direction in Direction::all() {
            let axis = self.axis(direction);
            match (axis.r0, axis.ia, axis.ip) {
                (Some(r0), Some(ia), Some(ip)) => write!(
                    f,
                    "R{} = {} (R0 = {}, Ia = {}, Ip = {})\n",
                    direction, axis.r, r0, ia, ip
                )?,
                _ => write!(f, "R{} = {}\n", direction, axis.r)?,
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
