//! Common domain type definitions
//!
//! This module contains the enum types shared by the encounter model,
//! the filters and the aggregations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::text::fold_accents;

/// Lower bin edges of the age brackets, in years
pub const AGE_BIN_EDGES: [u32; 4] = [0, 12, 18, 60];

/// Age group derived from an encounter's age
///
/// Bins are half-open: `[0,12)`, `[12,18)`, `[18,60)`, `[60,∞)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum AgeBracket {
    /// Ages 0 to 11
    #[serde(rename = "Criança")]
    Child,
    /// Ages 12 to 17
    #[serde(rename = "Adolescente")]
    Adolescent,
    /// Ages 18 to 59
    #[serde(rename = "Adulto")]
    Adult,
    /// Ages 60 and above
    #[serde(rename = "Idoso")]
    Elderly,
}

impl AgeBracket {
    /// All brackets in bin order
    pub const ALL: [Self; 4] = [Self::Child, Self::Adolescent, Self::Adult, Self::Elderly];

    /// Bracket whose bin contains `age`
    #[must_use]
    pub const fn from_age(age: u32) -> Self {
        if age < AGE_BIN_EDGES[1] {
            Self::Child
        } else if age < AGE_BIN_EDGES[2] {
            Self::Adolescent
        } else if age < AGE_BIN_EDGES[3] {
            Self::Adult
        } else {
            Self::Elderly
        }
    }

    /// Display label used in the dashboard and in exports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Child => "Criança",
            Self::Adolescent => "Adolescente",
            Self::Adult => "Adulto",
            Self::Elderly => "Idoso",
        }
    }

    /// Inclusive lower bound and exclusive upper bound (`None` is unbounded)
    #[must_use]
    pub const fn bounds(self) -> (u32, Option<u32>) {
        match self {
            Self::Child => (AGE_BIN_EDGES[0], Some(AGE_BIN_EDGES[1])),
            Self::Adolescent => (AGE_BIN_EDGES[1], Some(AGE_BIN_EDGES[2])),
            Self::Adult => (AGE_BIN_EDGES[2], Some(AGE_BIN_EDGES[3])),
            Self::Elderly => (AGE_BIN_EDGES[3], None),
        }
    }

    /// Whether `age` falls inside this bracket's bin
    #[must_use]
    pub const fn contains(self, age: u32) -> bool {
        let (lower, upper) = self.bounds();
        match upper {
            Some(upper) => age >= lower && age < upper,
            None => age >= lower,
        }
    }

    /// Parse a label or variant name, ignoring case and accents
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match fold_accents(s.trim()).to_lowercase().as_str() {
            "crianca" | "child" => Some(Self::Child),
            "adolescente" | "adolescent" => Some(Self::Adolescent),
            "adulto" | "adult" => Some(Self::Adult),
            "idoso" | "elderly" => Some(Self::Elderly),
            _ => None,
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_are_half_open() {
        assert_eq!(AgeBracket::from_age(0), AgeBracket::Child);
        assert_eq!(AgeBracket::from_age(11), AgeBracket::Child);
        assert_eq!(AgeBracket::from_age(12), AgeBracket::Adolescent);
        assert_eq!(AgeBracket::from_age(17), AgeBracket::Adolescent);
        assert_eq!(AgeBracket::from_age(18), AgeBracket::Adult);
        assert_eq!(AgeBracket::from_age(59), AgeBracket::Adult);
        assert_eq!(AgeBracket::from_age(60), AgeBracket::Elderly);
        assert_eq!(AgeBracket::from_age(130), AgeBracket::Elderly);
    }

    #[test]
    fn from_age_agrees_with_contains() {
        for age in 0..120 {
            let bracket = AgeBracket::from_age(age);
            assert!(bracket.contains(age), "age {age} not in {bracket}");
            let others = AgeBracket::ALL.iter().filter(|b| **b != bracket);
            for other in others {
                assert!(!other.contains(age));
            }
        }
    }

    #[test]
    fn parse_accepts_labels_without_accents() {
        assert_eq!(AgeBracket::parse("Criança"), Some(AgeBracket::Child));
        assert_eq!(AgeBracket::parse("crianca"), Some(AgeBracket::Child));
        assert_eq!(AgeBracket::parse(" IDOSO "), Some(AgeBracket::Elderly));
        assert_eq!(AgeBracket::parse("adult"), Some(AgeBracket::Adult));
        assert_eq!(AgeBracket::parse("bebê"), None);
    }
}
