use super::{SoilFactor, SoilProfile, E030_2018};
use crate::base::{SpectrumError, Table};
use serde::Serialize;

/// Holds a tabulated factor (e.g., U, R0, Ia, Ip) and its key
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TableEntry {
    /// Key used to select the entry
    pub key: &'static str,

    /// Short description for selection lists and reports
    pub description: &'static str,

    /// Tabulated value
    pub value: f64,
}

/// Holds the zone factor Z of a seismic zone
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ZoneEntry {
    /// Zone id (the greatest id is the most severe zone)
    pub id: u32,

    /// Zone factor as a fraction of g
    pub z: f64,
}

/// Holds the normative constant tables of a seismic design code
///
/// The tables are process-wide constant data: they are never modified after
/// construction and can be read concurrently from any thread.
///
/// Lookups are plain table reads; the curve math lives in [crate::spectrum].
#[derive(Debug)]
pub struct CodeRuleTable {
    /// Name of the code
    pub(crate) name: &'static str,

    /// Edition of the code
    pub(crate) edition: &'static str,

    pub(crate) zones: &'static [ZoneEntry],
    pub(crate) soils: &'static [SoilProfile],
    pub(crate) usage: &'static [TableEntry],
    pub(crate) systems: &'static [TableEntry],
    pub(crate) height_irregularities: &'static [TableEntry],
    pub(crate) plan_irregularities: &'static [TableEntry],
}

impl CodeRuleTable {
    /// Returns the canonical table of NTE E.030 (2018)
    pub fn e030() -> &'static CodeRuleTable {
        &E030_2018
    }

    /// Returns the name and edition of the code (e.g., "NTE E.030 (2018)")
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.edition)
    }

    /// Returns the zone factor Z
    ///
    /// Returns `None` if the zone is unknown. This function does not apply any fallback;
    /// see [CodeRuleTable::most_severe_zone] for the policy default.
    pub fn zone_factor(&self, zone: u32) -> Option<f64> {
        self.zones.iter().find(|e| e.id == zone).map(|e| e.z)
    }

    /// Returns the id of the most severe zone (the one with the greatest factor)
    pub fn most_severe_zone(&self) -> u32 {
        let mut most_severe = &self.zones[0];
        for entry in self.zones {
            if entry.z > most_severe.z {
                most_severe = entry;
            }
        }
        most_severe.id
    }

    /// Returns the soil profile with the given key
    pub fn soil(&self, soil: &str) -> Result<&SoilProfile, SpectrumError> {
        self.soils
            .iter()
            .find(|p| p.key == soil)
            .ok_or_else(|| SpectrumError::unknown(Table::Soil, soil))
    }

    /// Returns the soil amplification factor S
    ///
    /// The result is either a tabulated value or [SoilFactor::SpecialStudyRequired].
    pub fn soil_factor(&self, soil: &str, zone: u32) -> Result<SoilFactor, SpectrumError> {
        self.soil(soil)?.factor(zone).ok_or(SpectrumError::UnknownZone(zone))
    }

    /// Returns the period breakpoints (TP, TL) of a soil profile
    pub fn period_breakpoints(&self, soil: &str) -> Result<(f64, f64), SpectrumError> {
        let profile = self.soil(soil)?;
        Ok((profile.tp, profile.tl))
    }

    /// Returns the usage (importance) factor U
    pub fn usage_factor(&self, category: &str) -> Result<f64, SpectrumError> {
        lookup(self.usage, Table::Usage, category)
    }

    /// Returns the basic reduction coefficient R0 of a structural system
    pub fn base_reduction(&self, system: &str) -> Result<f64, SpectrumError> {
        lookup(self.systems, Table::System, system)
    }

    /// Returns the height irregularity factor Ia
    pub fn height_irregularity_factor(&self, irregularity: &str) -> Result<f64, SpectrumError> {
        lookup(self.height_irregularities, Table::HeightIrregularity, irregularity)
    }

    /// Returns the plan irregularity factor Ip
    pub fn plan_irregularity_factor(&self, irregularity: &str) -> Result<f64, SpectrumError> {
        lookup(self.plan_irregularities, Table::PlanIrregularity, irregularity)
    }

    /// Returns the zone ids in canonical order
    pub fn zone_ids(&self) -> Vec<u32> {
        self.zones.iter().map(|e| e.id).collect()
    }

    /// Returns the soil keys in canonical order
    pub fn soil_keys(&self) -> Vec<&'static str> {
        self.soils.iter().map(|p| p.key).collect()
    }

    /// Returns the usage category keys in canonical order
    pub fn usage_keys(&self) -> Vec<&'static str> {
        keys(self.usage)
    }

    /// Returns the structural system keys in canonical order
    pub fn system_keys(&self) -> Vec<&'static str> {
        keys(self.systems)
    }

    /// Returns the height irregularity keys in canonical order
    pub fn height_irregularity_keys(&self) -> Vec<&'static str> {
        keys(self.height_irregularities)
    }

    /// Returns the plan irregularity keys in canonical order
    pub fn plan_irregularity_keys(&self) -> Vec<&'static str> {
        keys(self.plan_irregularities)
    }

    /// Returns all zone entries
    pub fn zones(&self) -> &'static [ZoneEntry] {
        self.zones
    }

    /// Returns all soil profiles
    pub fn soils(&self) -> &'static [SoilProfile] {
        self.soils
    }

    /// Returns the entries of a key-value table
    ///
    /// **Note:** The soil table holds profiles instead of single values; use [CodeRuleTable::soils].
    pub fn entries(&self, table: Table) -> &'static [TableEntry] {
        match table {
            Table::Soil => &[],
            Table::Usage => self.usage,
            Table::System => self.systems,
            Table::HeightIrregularity => self.height_irregularities,
            Table::PlanIrregularity => self.plan_irregularities,
        }
    }
}

fn lookup(entries: &[TableEntry], table: Table, key: &str) -> Result<f64, SpectrumError> {
    entries
        .iter()
        .find(|e| e.key == key)
        .map(|e| e.value)
        .ok_or_else(|| SpectrumError::unknown(table, key))
}

fn keys(entries: &[TableEntry]) -> Vec<&'static str> {
    entries.iter().map(|e| e.key).collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
