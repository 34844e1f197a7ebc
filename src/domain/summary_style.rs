use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryStyle {
    #[default]
    Paragraph,
    Bullet,
    KeyPoints,
}

impl SummaryStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Bullet => "bullet",
            Self::KeyPoints => "key-points",
        }
    }

    /// Unknown or missing styles resolve to `Paragraph`.
    pub fn coerce(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    pub fn prompt_instruction(&self) -> &'static str {
        match self {
            Self::Paragraph => "as a coherent paragraph",
            Self::Bullet => "as bullet points",
            Self::KeyPoints => "as key points with brief explanations",
        }
    }
}

impl FromStr for SummaryStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paragraph" => Ok(Self::Paragraph),
            "bullet" => Ok(Self::Bullet),
            "key-points" => Ok(Self::KeyPoints),
            other => Err(format!("unknown summary style: {}", other)),
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
