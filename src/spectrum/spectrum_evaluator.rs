use super::{amplification_factor, PeriodAxis, ResolvedFactors, SpectrumCurve, SpectrumParameters, SpectrumSample};
use crate::base::SpectrumError;
use crate::code::CodeRuleTable;

/// Computes elastic and design spectra
///
/// The evaluator only reads the rule table, thus the same instance (or many instances
/// sharing a table) may be used concurrently from several threads.
///
/// ```text
/// Sa_elastic(T) = Z U C(T) S
/// Sa_design(T)  = Sa_elastic(T) / R        (for each direction)
/// ```
///
/// The ordinates are fractions of g; see [SpectrumCurve::to_units] for other units.
pub struct SpectrumEvaluator<'a> {
    /// Normative tables
    table: &'a CodeRuleTable,
}

impl<'a> SpectrumEvaluator<'a> {
    /// Allocates a new instance
    pub fn new(table: &'a CodeRuleTable) -> Self {
        SpectrumEvaluator { table }
    }

    /// Returns the rule table
    pub fn table(&self) -> &'a CodeRuleTable {
        self.table
    }

    /// Evaluates the spectrum
    ///
    /// Returns the complete curve, or the reason for rejecting the evaluation.
    /// No partial curve is ever returned.
    pub fn evaluate(&self, params: &SpectrumParameters) -> Result<SpectrumCurve, SpectrumError> {
        let (factors, warning) = ResolvedFactors::resolve(self.table, params)?;
        let samples = calc_samples(&factors, &params.axis)?;
        Ok(SpectrumCurve::new(samples, factors, warning))
    }
}

/// Calculates the spectrum samples from resolved factors
///
/// The factors and the axis are validated before any computation; in particular,
/// non-positive reduction coefficients are rejected before any division.
pub fn calc_samples(factors: &ResolvedFactors, axis: &PeriodAxis) -> Result<Vec<SpectrumSample>, SpectrumError> {
    factors.validate()?;
    let periods = axis.periods()?;
    let (z, u, s) = (factors.z, factors.u, factors.s);
    let (rx, ry) = (factors.x.r, factors.y.r);
    let samples = periods
        .into_iter()
        .map(|t| {
            let c = amplification_factor(t, factors.tp, factors.tl);
            let elastic = z * u * c * s;
            SpectrumSample {
                period: t,
                elastic,
                design_x: elastic / rx,
                design_y: elastic / ry,
            }
        })
        .collect();
    Ok(samples)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
