use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Requested summary length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Parses a client-supplied value, falling back to `Medium` for anything
    /// missing or unrecognized.
    pub fn coerce(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    pub fn prompt_instruction(&self) -> &'static str {
        match self {
            Self::Short => "in 1-2 sentences",
            Self::Medium => "in 3-5 sentences",
            Self::Long => "in 6-10 sentences",
        }
    }

    /// Number of leading fragments kept by the heuristic summarizer.
    pub fn fragment_budget(&self) -> usize {
        match self {
            Self::Short => 2,
            Self::Medium => 4,
            Self::Long => 8,
        }
    }
}

impl FromStr for SummaryLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(format!("unknown summary length: {}", other)),
        }
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
