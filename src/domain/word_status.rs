use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::InvalidCodeError;

/// Approval state of a word in the ASD-STE100 dictionary.
///
/// Statuses order by their wire code, so `approved < rejected < unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    /// No status was recorded.
    #[default]
    Unknown,
    /// The word is approved for use in STE.
    Approved,
    /// The word is not approved; an alternative should be used.
    Rejected,
}

impl WordStatus {
    /// All statuses in declaration order.
    pub const ALL: [Self; 3] = [Self::Unknown, Self::Approved, Self::Rejected];

    /// The code used in vocabulary files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for WordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordStatus {
    type Err = InvalidCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidCodeError::new("status", s))
    }
}

impl PartialOrd for WordStatus {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordStatus {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}
