use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Options controlling how matrix literals are read.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ParseOptions {
    pub mode: ParseMode,
    pub ragged: RaggedRows,
}

impl ParseOptions {
    /// Strict tokens and rectangular rows only.
    pub fn strict() -> Self {
        ParseOptions {
            mode: ParseMode::Strict,
            ragged: RaggedRows::Reject,
        }
    }
}

/// What to do with a token that is not a number.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Skip the token and keep going.
    #[default]
    Lenient,
    /// Fail on the first unparsable token, empty row or unterminated row.
    Strict,
}

/// What to do when rows of a literal have different lengths.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RaggedRows {
    /// Zero-pad short rows up to the widest row.
    #[default]
    Pad,
    /// Fail with a parse error.
    Reject,
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(ParseMode::Lenient),
            "strict" => Ok(ParseMode::Strict),
            _ => Err(format!("Unknown parse mode: {}", s)),
        }
    }
}

impl FromStr for RaggedRows {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pad" => Ok(RaggedRows::Pad),
            "reject" => Ok(RaggedRows::Reject),
            _ => Err(format!("Unknown ragged row policy: {}", s)),
        }
    }
}
