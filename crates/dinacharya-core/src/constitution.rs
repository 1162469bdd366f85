//! Constitution types (doshas).
//!
//! The set is closed: every table keyed by constitution is a `match`, so
//! adding or dropping a type is a compile error rather than a runtime
//! fallthrough.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the three constitution archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Constitution {
    Vata,
    Pitta,
    Kapha,
}

impl Constitution {
    /// Canonical order. Scoring ties resolve to the earliest entry.
    pub const ALL: [Constitution; 3] = [Constitution::Vata, Constitution::Pitta, Constitution::Kapha];

    /// Lowercase tag, as used in serialized data and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Constitution::Vata => "vata",
            Constitution::Pitta => "pitta",
            Constitution::Kapha => "kapha",
        }
    }

    /// Capitalized display name.
    pub fn label(self) -> &'static str {
        match self {
            Constitution::Vata => "Vata",
            Constitution::Pitta => "Pitta",
            Constitution::Kapha => "Kapha",
        }
    }

    /// Position in [`Constitution::ALL`].
    pub fn index(self) -> usize {
        match self {
            Constitution::Vata => 0,
            Constitution::Pitta => 1,
            Constitution::Kapha => 2,
        }
    }
}

impl fmt::Display for Constitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Constitution {
    type Err = ValidationError;

    /// Accepts exactly the lowercase tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vata" => Ok(Constitution::Vata),
            "pitta" => Ok(Constitution::Pitta),
            "kapha" => Ok(Constitution::Kapha),
            _ => Err(ValidationError::invalid(
                "constitution",
                format!("unknown constitution '{s}', expected vata, pitta or kapha"),
            )),
        }
    }
}
