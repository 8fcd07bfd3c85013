//! Normative constants of the Peruvian seismic design code NTE E.030 (2018 edition)
//!
//! | Symbol | Description                      | Table   |
//! |--------|----------------------------------|---------|
//! | Z      | Zone factor                      | Table 1 |
//! | S      | Soil factor (per zone)           | Table 3 |
//! | TP, TL | Period breakpoints (per soil)    | Table 4 |
//! | U      | Usage (importance) factor        | Table 5 |
//! | R0     | Basic reduction coefficient      | Table 7 |
//! | Ia     | Height irregularity factor       | Table 8 |
//! | Ip     | Plan irregularity factor         | Table 9 |
//!
//! The rows of every table keep the order in which the code lists them; callers building
//! selection lists rely on this order (e.g., the first zone is the default one).

use super::SoilFactor::{SpecialStudyRequired, Value};
use super::{CodeRuleTable, SoilFactor, SoilProfile, TableEntry, ZoneEntry};

/// The canonical rule table of NTE E.030 (2018)
pub static E030_2018: CodeRuleTable = CodeRuleTable {
    name: "NTE E.030",
    edition: "2018",
    zones: &ZONES,
    soils: &SOILS,
    usage: &USAGE,
    systems: &SYSTEMS,
    height_irregularities: &HEIGHT_IRREGULARITIES,
    plan_irregularities: &PLAN_IRREGULARITIES,
};

const ZONES: [ZoneEntry; 4] = [
    ZoneEntry { id: 4, z: 0.45 },
    ZoneEntry { id: 3, z: 0.35 },
    ZoneEntry { id: 2, z: 0.25 },
    ZoneEntry { id: 1, z: 0.10 },
];

const S0_FACTORS: [(u32, SoilFactor); 4] = [(4, Value(0.80)), (3, Value(0.80)), (2, Value(0.80)), (1, Value(0.80))];
const S1_FACTORS: [(u32, SoilFactor); 4] = [(4, Value(1.00)), (3, Value(1.00)), (2, Value(1.00)), (1, Value(1.00))];
// Zone 1 cells of S2 (1.60) and S3 (2.00) follow Table 3 of the published 2018 edition;
// tabulations that repeat the zone 2 column there (1.20 and 1.40) are not normative
const S2_FACTORS: [(u32, SoilFactor); 4] = [(4, Value(1.05)), (3, Value(1.15)), (2, Value(1.20)), (1, Value(1.60))];
const S3_FACTORS: [(u32, SoilFactor); 4] = [(4, Value(1.10)), (3, Value(1.20)), (2, Value(1.40)), (1, Value(2.00))];

// exceptional conditions: only the most severe zone lacks a standard value
const S4_FACTORS: [(u32, SoilFactor); 4] = [
    (4, SpecialStudyRequired),
    (3, Value(1.20)),
    (2, Value(1.40)),
    (1, Value(2.00)),
];

const SOILS: [SoilProfile; 5] = [
    SoilProfile {
        key: "S0",
        description: "Hard rock",
        factors: &S0_FACTORS,
        tp: 0.3,
        tl: 3.0,
    },
    SoilProfile {
        key: "S1",
        description: "Rock or very stiff soil",
        factors: &S1_FACTORS,
        tp: 0.4,
        tl: 2.5,
    },
    SoilProfile {
        key: "S2",
        description: "Intermediate soil",
        factors: &S2_FACTORS,
        tp: 0.6,
        tl: 2.0,
    },
    SoilProfile {
        key: "S3",
        description: "Soft soil",
        factors: &S3_FACTORS,
        tp: 1.0,
        tl: 1.6,
    },
    SoilProfile {
        key: "S4",
        description: "Exceptional conditions",
        factors: &S4_FACTORS,
        tp: 1.0,
        tl: 1.6,
    },
];

const USAGE: [TableEntry; 4] = [
    TableEntry {
        key: "A1",
        description: "Essential buildings with base isolation",
        value: 1.0,
    },
    TableEntry {
        key: "A2",
        description: "Essential buildings",
        value: 1.5,
    },
    TableEntry {
        key: "B",
        description: "Important buildings",
        value: 1.3,
    },
    TableEntry {
        key: "C",
        description: "Common buildings",
        value: 1.0,
    },
];

#[rustfmt::skip]
const SYSTEMS: [TableEntry; 12] = [
    TableEntry { key: "steel-smf",  description: "Steel: special moment frames (SMF)",                    value: 8.0 },
    TableEntry { key: "steel-imf",  description: "Steel: intermediate moment frames (IMF)",               value: 5.0 },
    TableEntry { key: "steel-omf",  description: "Steel: ordinary moment frames (OMF)",                   value: 4.0 },
    TableEntry { key: "steel-scbf", description: "Steel: special concentrically braced frames (SCBF)",    value: 7.0 },
    TableEntry { key: "steel-ocbf", description: "Steel: ordinary concentrically braced frames (OCBF)",   value: 4.0 },
    TableEntry { key: "steel-ebf",  description: "Steel: eccentrically braced frames (EBF)",              value: 8.0 },
    TableEntry { key: "rc-frames",  description: "Reinforced concrete: moment frames",                    value: 8.0 },
    TableEntry { key: "rc-dual",    description: "Reinforced concrete: dual system",                      value: 7.0 },
    TableEntry { key: "rc-walls",   description: "Reinforced concrete: structural walls",                 value: 6.0 },
    TableEntry { key: "rc-limited-ductility-walls", description: "Reinforced concrete: limited ductility walls", value: 4.0 },
    TableEntry { key: "masonry",    description: "Reinforced or confined masonry",                        value: 3.0 },
    TableEntry { key: "wood",       description: "Wood",                                                  value: 7.0 },
];

#[rustfmt::skip]
const HEIGHT_IRREGULARITIES: [TableEntry; 9] = [
    TableEntry { key: "regular",               description: "Regular in height",                       value: 1.00 },
    TableEntry { key: "soft-story",            description: "Stiffness irregularity (soft story)",     value: 0.75 },
    TableEntry { key: "weak-story",            description: "Strength irregularity (weak story)",      value: 0.75 },
    TableEntry { key: "extreme-soft-story",    description: "Extreme stiffness irregularity",          value: 0.50 },
    TableEntry { key: "extreme-weak-story",    description: "Extreme strength irregularity",           value: 0.50 },
    TableEntry { key: "mass",                  description: "Mass or weight irregularity",             value: 0.90 },
    TableEntry { key: "vertical-geometry",     description: "Vertical geometric irregularity",         value: 0.90 },
    TableEntry { key: "discontinuity",         description: "Discontinuity in the resisting system",   value: 0.80 },
    TableEntry { key: "extreme-discontinuity", description: "Extreme discontinuity in the resisting system", value: 0.60 },
];

#[rustfmt::skip]
const PLAN_IRREGULARITIES: [TableEntry; 6] = [
    TableEntry { key: "regular",                 description: "Regular in plan",                   value: 1.00 },
    TableEntry { key: "torsional",               description: "Torsional irregularity",            value: 0.75 },
    TableEntry { key: "extreme-torsional",       description: "Extreme torsional irregularity",    value: 0.60 },
    TableEntry { key: "reentrant-corners",       description: "Re-entrant corners",                value: 0.90 },
    TableEntry { key: "diaphragm-discontinuity", description: "Diaphragm discontinuity",           value: 0.85 },
    TableEntry { key: "nonparallel-systems",     description: "Non-parallel systems",              value: 0.90 },
];

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
