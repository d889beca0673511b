//! What to do when a completion handler is invoked after its promise settled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Policy applied to every settlement attempt after the first.
///
/// The first settlement always wins; no policy lets a later attempt change
/// the value a caller observes. The policies differ only in how loudly the
/// misbehaving collaborator is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DoubleSettlement {
    /// Drop the attempt; only visible at `trace` level.
    Ignore,
    /// Drop the attempt and emit a `warn` event naming the operation.
    #[default]
    Warn,
    /// Drop the attempt, then panic on the collaborator's thread.
    Panic,
}

impl DoubleSettlement {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Panic => "panic",
        }
    }
}

impl fmt::Display for DoubleSettlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown double-settlement policy `{0}` (expected ignore, warn or panic)")]
pub struct ParseDoubleSettlementError(String);

impl FromStr for DoubleSettlement {
    type Err = ParseDoubleSettlementError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "warn" => Ok(Self::Warn),
            "panic" => Ok(Self::Panic),
            _ => Err(ParseDoubleSettlementError(value.to_string())),
        }
    }
}

impl TryFrom<String> for DoubleSettlement {
    type Error = ParseDoubleSettlementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
