// CupSize is the closed category set a cup may carry.
//
// Notes
// - The textual form is "Small", "Medium" or "Large" everywhere: Display, FromStr and serde.
// - Parsing also accepts the lowercase member names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CupSizeError {
    #[error("unknown cup size: {0:?}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CupSize {
    Small,
    Medium,
    Large,
}

impl CupSize {
    pub const ALL: [CupSize; 3] = [CupSize::Small, CupSize::Medium, CupSize::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            CupSize::Small => "Small",
            CupSize::Medium => "Medium",
            CupSize::Large => "Large",
        }
    }
}

impl fmt::Display for CupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CupSize {
    type Err = CupSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Small" | "small" => Ok(CupSize::Small),
            "Medium" | "medium" => Ok(CupSize::Medium),
            "Large" | "large" => Ok(CupSize::Large),
            other => Err(CupSizeError::Unknown(other.to_string())),
        }
    }
}
