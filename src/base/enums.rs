use super::GRAVITY;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the two orthogonal horizontal directions of analysis
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Direction {
    /// First horizontal direction
    X = 0,

    /// Second horizontal direction
    Y = 1,
}

impl Direction {
    /// Returns both directions in canonical order
    pub fn all() -> [Direction; 2] {
        [Direction::X, Direction::Y]
    }

    /// Returns the index of the direction (0 or 1)
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::X => write!(f, "X"),
            Direction::Y => write!(f, "Y"),
        }
    }
}

/// Defines the unit of the pseudo-acceleration ordinates
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum AccelUnit {
    /// Fraction of the gravity acceleration
    G,

    /// Meters per squared second
    MetersPerSecondSquared,
}

impl AccelUnit {
    /// Returns the multiplier converting fractions of g into this unit
    pub fn factor(&self) -> f64 {
        match self {
            AccelUnit::G => 1.0,
            AccelUnit::MetersPerSecondSquared => GRAVITY,
        }
    }

    /// Returns the symbol used in tables and plots
    pub fn symbol(&self) -> &'static str {
        match self {
            AccelUnit::G => "g",
            AccelUnit::MetersPerSecondSquared => "m/s²",
        }
    }
}

/// Identifies the rule tables (used to report unknown keys)
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Table {
    /// Soil profiles (S0 … S4)
    Soil,

    /// Usage (importance) categories
    Usage,

    /// Structural systems and their basic reduction coefficient R0
    System,

    /// Irregularities in height (Ia)
    HeightIrregularity,

    /// Irregularities in plan (Ip)
    PlanIrregularity,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Table::Soil => "soil profile",
            Table::Usage => "usage category",
            Table::System => "structural system",
            Table::HeightIrregularity => "height irregularity",
            Table::PlanIrregularity => "plan irregularity",
        };
        write!(f, "{}", name)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{AccelUnit, Direction, Table};
    use std::collections::HashSet;

    #[test]
    fn direction_derives_work() {
        let x = Direction::X;
        let x_clone = x.clone();
        assert_eq!(format!("{:?}", x), "X");
        assert_eq!(x, x_clone);
        assert!(Direction::X < Direction::Y);

        let mut set = HashSet::new();
        set.insert(Direction::Y);
        set.insert(Direction::X);
        set.insert(Direction::Y);
        assert_eq!(set.len(), 2);

        let json = serde_json::to_string(&Direction::Y).unwrap();
        let from_json: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(from_json, Direction::Y);
    }

    #[test]
    fn direction_index_and_display_work() {
        assert_eq!(Direction::all(), [Direction::X, Direction::Y]);
        assert_eq!(Direction::X.index(), 0);
        assert_eq!(Direction::Y.index(), 1);
        assert_eq!(format!("R{}", Direction::Y), "RY");
    }

    #[test]
    fn accel_unit_works() {
        assert_eq!(AccelUnit::G.factor(), 1.0);
        assert_eq!(AccelUnit::MetersPerSecondSquared.factor(), 9.81);
        assert_eq!(AccelUnit::G.symbol(), "g");
        assert_eq!(AccelUnit::MetersPerSecondSquared.symbol(), "m/s²");
    }

    #[test]
    fn table_display_works() {
        assert_eq!(format!("{}", Table::Soil), "soil profile");
        assert_eq!(format!("{}", Table::Usage), "usage category");
        assert_eq!(format!("{}", Table::System), "structural system");
        assert_eq!(format!("{}", Table::HeightIrregularity), "height irregularity");
        assert_eq!(format!("{}", Table::PlanIrregularity), "plan irregularity");
    }
}
