use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity used to normalize `since` / `till` when they are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Blank, // no normalization
    Day,
    Hour,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Blank, Timeframe::Day, Timeframe::Hour];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Blank => "blank",
            Timeframe::Day => "day",
            Timeframe::Hour => "hour",
        }
    }

    /// Exact match on the lowercase text form, `None` for anything else.
    pub fn from_code(s: &str) -> Option<Self> {
        Timeframe::ALL.into_iter().find(|tf| tf.as_str() == s)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timeframe::from_code(s).ok_or_else(|| AppError::InvalidTimeframe(s.to_string()))
    }
}

impl TryFrom<&str> for Timeframe {
    type Error = AppError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
