use serde::{Deserialize, Serialize};

/// Holds the soil amplification factor S of a (soil, zone) cell
///
/// The code leaves some cells without a standard value; those cells require a
/// site-specific study and must never be replaced by a placeholder number.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum SoilFactor {
    /// Tabulated amplification factor
    Value(f64),

    /// No standard factor is defined for this cell
    SpecialStudyRequired,
}

impl SoilFactor {
    /// Returns the tabulated value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            SoilFactor::Value(s) => Some(*s),
            SoilFactor::SpecialStudyRequired => None,
        }
    }

    /// Indicates whether this cell requires a site-specific study
    pub fn requires_special_study(&self) -> bool {
        matches!(self, SoilFactor::SpecialStudyRequired)
    }
}

/// Holds the data of a soil profile
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SoilProfile {
    /// Key of the profile (e.g., "S1")
    pub key: &'static str,

    /// Short description
    pub description: &'static str,

    /// Amplification factor per zone id, as (zone, S) pairs
    pub factors: &'static [(u32, SoilFactor)],

    /// Period TP (s) at the end of the constant-acceleration plateau
    pub tp: f64,

    /// Period TL (s) at the beginning of the constant-displacement branch
    pub tl: f64,
}

impl SoilProfile {
    /// Returns the amplification factor for the given zone, if the zone is tabulated
    pub fn factor(&self, zone: u32) -> Option<SoilFactor> {
        self.factors.iter().find(|(z, _)| *z == zone).map(|(_, s)| *s)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{SoilFactor, SoilProfile};

    #[test]
    fn soil_factor_works() {
        let s = SoilFactor::Value(1.05);
        assert_eq!(s.value(), Some(1.05));
        assert!(!s.requires_special_study());

        let s = SoilFactor::SpecialStudyRequired;
        assert_eq!(s.value(), None);
        assert!(s.requires_special_study());

        let json = serde_json::to_string(&SoilFactor::Value(0.8)).unwrap();
        assert_eq!(json, "{\"Value\":0.8}");
        let json = serde_json::to_string(&SoilFactor::SpecialStudyRequired).unwrap();
        assert_eq!(json, "\"SpecialStudyRequired\"");
    }

    #[test]
    fn soil_profile_factor_works() {
        const FACTORS: [(u32, SoilFactor); 2] = [(2, SoilFactor::Value(1.2)), (1, SoilFactor::SpecialStudyRequired)];
        let soil = SoilProfile {
            key: "SX",
            description: "test soil",
            factors: &FACTORS,
            tp: 0.5,
            tl: 2.0,
        };
        assert_eq!(soil.factor(2), Some(SoilFactor::Value(1.2)));
        assert_eq!(soil.factor(1), Some(SoilFactor::SpecialStudyRequired));
        assert_eq!(soil.factor(3), None);
    }
}
