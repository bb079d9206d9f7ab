// ============================================================
// Layer 3 — Location Domain Type
// ============================================================
// A discrete physical location. The alphabet is closed and
// known before training, so it is an enum rather than a String.
//
// The derive order of the variants matters: Ord is used to
// sort the classes a model was trained on, and vote ties are
// resolved in favour of the variant that sorts first.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::LocalizationError;

/// One of the physical locations a CSI fingerprint can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Location {
    A,
    B,
    C,
    D,
}

impl Location {
    /// Every location, in alphabet order
    pub const ALL: [Location; 4] = [Location::A, Location::B, Location::C, Location::D];

    /// Mean subcarrier amplitude the synthetic source uses for this location.
    /// Strictly increasing along the alphabet.
    pub fn mean_offset(self) -> f64 {
        match self {
            Location::A => 10.0,
            Location::B => 15.0,
            Location::C => 20.0,
            Location::D => 25.0,
        }
    }

    /// Position of this location inside `Location::ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Location::A => "A",
            Location::B => "B",
            Location::C => "C",
            Location::D => "D",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing is case-sensitive: "a" is not a location.
impl FromStr for Location {
    type Err = LocalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .iter()
            .copied()
            .find(|loc| loc.as_str() == s)
            .ok_or_else(|| LocalizationError::InvalidInput(format!("unknown location '{s}'")))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_increase_along_alphabet() {
        let offsets: Vec<f64> = Location::ALL.iter().map(|l| l.mean_offset()).collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_index_matches_alphabet_position() {
        for (i, loc) in Location::ALL.iter().enumerate() {
            assert_eq!(loc.index(), i);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("C".parse::<Location>().unwrap(), Location::C);
        assert!("c".parse::<Location>().is_err());
        assert!("E".parse::<Location>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for loc in Location::ALL {
            assert_eq!(loc.to_string().parse::<Location>().unwrap(), loc);
        }
    }
}
