use super::{Direction, Table};
use thiserror::Error;

/// Reasons for rejecting a spectrum evaluation
///
/// An evaluation either succeeds with a complete curve or fails with one of these
/// variants; no partial curve is ever produced. The `Display` text is meant to be shown
/// directly to the user.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SpectrumError {
    /// A key is not present in the corresponding rule table
    #[error("unknown {table} key: {key:?}")]
    UnknownKey { table: Table, key: String },

    /// A zone id is not present in a zone-indexed table
    #[error("unknown seismic zone: {0}")]
    UnknownZone(u32),

    /// The code gives no amplification factor for this soil and zone
    #[error(
        "soil profile {soil} in zone {zone} has no standard amplification factor: \
         a site-specific study is required and no standard spectrum can be given"
    )]
    SpecialStudyRequired { soil: String, zone: u32 },

    /// A resolved reduction coefficient is zero, negative or not finite
    #[error("the reduction coefficient R{direction} must be positive (got {value})")]
    NonPositiveReduction { direction: Direction, value: f64 },

    /// A supplied or resolved numeric factor is out of range
    #[error("invalid {name}: {value} ({reason})")]
    InvalidFactor {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Overrides of R0, Ia or Ip were given for a direction whose R is given directly
    #[error("R{direction} is given directly, thus R0, Ia and Ip cannot be overridden")]
    OverridesOnDirectReduction { direction: Direction },

    /// The period breakpoints are not ordered as TP < TL
    #[error("the period breakpoints must satisfy 0 < TP < TL (got TP = {tp}, TL = {tl})")]
    InvalidBreakpoints { tp: f64, tl: f64 },

    /// The period axis cannot be sampled
    #[error("invalid period axis: {0}")]
    InvalidAxis(&'static str),
}

impl SpectrumError {
    /// Returns an UnknownKey error for the given table
    pub(crate) fn unknown(table: Table, key: &str) -> Self {
        SpectrumError::UnknownKey {
            table,
            key: key.to_string(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SpectrumError;
    use crate::base::{Direction, Table};

    #[test]
    fn display_names_the_offending_input() {
        let err = SpectrumError::unknown(Table::System, "adobe");
        assert_eq!(format!("{}", err), "unknown structural system key: \"adobe\"");

        let err = SpectrumError::UnknownZone(7);
        assert_eq!(format!("{}", err), "unknown seismic zone: 7");

        let err = SpectrumError::NonPositiveReduction {
            direction: Direction::X,
            value: 0.0,
        };
        assert_eq!(format!("{}", err), "the reduction coefficient RX must be positive (got 0)");

        let err = SpectrumError::InvalidFactor {
            name: "U",
            value: -1.0,
            reason: "must be positive and finite",
        };
        assert_eq!(format!("{}", err), "invalid U: -1 (must be positive and finite)");

        let err = SpectrumError::InvalidBreakpoints { tp: 2.0, tl: 1.0 };
        assert_eq!(
            format!("{}", err),
            "the period breakpoints must satisfy 0 < TP < TL (got TP = 2, TL = 1)"
        );

        let err = SpectrumError::OverridesOnDirectReduction { direction: Direction::Y };
        assert_eq!(
            format!("{}", err),
            "RY is given directly, thus R0, Ia and Ip cannot be overridden"
        );

        let err = SpectrumError::InvalidAxis("dt must be > 0.0");
        assert_eq!(format!("{}", err), "invalid period axis: dt must be > 0.0");
    }

    #[test]
    fn special_study_message_is_not_empty() {
        let err = SpectrumError::SpecialStudyRequired {
            soil: "S4".to_string(),
            zone: 4,
        };
        let msg = format!("{}", err);
        assert!(msg.starts_with("soil profile S4 in zone 4"));
        assert!(msg.contains("site-specific study"));
    }

    #[test]
    fn clone_and_compare_work() {
        let err = SpectrumError::unknown(Table::Soil, "S9");
        assert_eq!(err.clone(), err);
        assert_ne!(err, SpectrumError::unknown(Table::Soil, "S8"));
    }
}
