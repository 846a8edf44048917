use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Country filter accepted by the search endpoint.
///
/// The set is closed: anything outside it is rejected by [`FromStr`] before
/// it can reach the query state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Us,
    Gb,
    Ca,
    Au,
    In,
}

/// Error returned when a region code is not one of the supported values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region code '{0}' (expected one of: us, gb, ca, au, in)")]
pub struct RegionParseError(pub String);

impl Region {
    /// Every region, in the order the selector cycles through them.
    pub const ALL: [Region; 5] = [Region::Us, Region::Gb, Region::Ca, Region::Au, Region::In];

    /// Wire code sent as the `country` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Gb => "gb",
            Region::Ca => "ca",
            Region::Au => "au",
            Region::In => "in",
        }
    }

    /// Human readable name for the selector.
    pub fn label(self) -> &'static str {
        match self {
            Region::Us => "United States",
            Region::Gb => "United Kingdom",
            Region::Ca => "Canada",
            Region::Au => "Australia",
            Region::In => "India",
        }
    }

    /// Next region in [`Region::ALL`], wrapping around.
    pub fn next(self) -> Region {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous region in [`Region::ALL`], wrapping around.
    pub fn previous(self) -> Region {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = RegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.code() == code)
            .ok_or_else(|| RegionParseError(s.to_string()))
    }
}
