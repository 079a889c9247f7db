//! Laundry lifecycle status.

use super::ParseLaundryStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stage of a laundry item in the washing workflow.
///
/// The variant order is the display order of the workflow. It is
/// informational only: any status may be set from any other status, which
/// lets users correct mistakes by hand.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LaundryStatus {
    /// Worn and waiting to be washed.
    #[default]
    Dirty,
    /// Currently in the washing machine.
    Washing,
    /// Currently drying.
    Drying,
    /// Washed and dry, not yet put away.
    Clean,
    /// Folded and put away.
    Folded,
}

impl LaundryStatus {
    /// Every status in workflow order.
    pub const ALL: [Self; 5] = [
        Self::Dirty,
        Self::Washing,
        Self::Drying,
        Self::Clean,
        Self::Folded,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dirty => "dirty",
            Self::Washing => "washing",
            Self::Drying => "drying",
            Self::Clean => "clean",
            Self::Folded => "folded",
        }
    }

    /// Returns the zero-based position of the status in workflow order.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Dirty => 0,
            Self::Washing => 1,
            Self::Drying => 2,
            Self::Clean => 3,
            Self::Folded => 4,
        }
    }
}

impl fmt::Display for LaundryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for LaundryStatus {
    type Error = ParseLaundryStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "dirty" => Ok(Self::Dirty),
            "washing" => Ok(Self::Washing),
            "drying" => Ok(Self::Drying),
            "clean" => Ok(Self::Clean),
            "folded" => Ok(Self::Folded),
            _ => Err(ParseLaundryStatusError(value.to_owned())),
        }
    }
}

impl FromStr for LaundryStatus {
    type Err = ParseLaundryStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}
