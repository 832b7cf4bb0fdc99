//! How a clipped note is written into the vault.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Write behavior for a clipped note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteBehavior {
    /// Create a new note (Obsidian picks a free name on conflict).
    #[default]
    Create,
    Append,
    Prepend,
    Overwrite,
    AppendDaily,
    PrependDaily,
}

/// Flag appended to the URL for a behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Append,
    Prepend,
    Overwrite,
}

impl WriteMode {
    pub fn query(self) -> &'static str {
        match self {
            WriteMode::Append => "&append=true",
            WriteMode::Prepend => "&prepend=true",
            WriteMode::Overwrite => "&overwrite=true",
        }
    }
}

impl NoteBehavior {
    pub fn as_str(self) -> &'static str {
        match self {
            NoteBehavior::Create => "create",
            NoteBehavior::Append => "append",
            NoteBehavior::Prepend => "prepend",
            NoteBehavior::Overwrite => "overwrite",
            NoteBehavior::AppendDaily => "append-daily",
            NoteBehavior::PrependDaily => "prepend-daily",
        }
    }

    /// Daily variants target today's daily note instead of a named file.
    pub fn is_daily(self) -> bool {
        matches!(self, NoteBehavior::AppendDaily | NoteBehavior::PrependDaily)
    }

    /// Daily variants share the flag of their non-daily counterpart.
    pub fn write_mode(self) -> Option<WriteMode> {
        match self {
            NoteBehavior::Create => None,
            NoteBehavior::Append | NoteBehavior::AppendDaily => Some(WriteMode::Append),
            NoteBehavior::Prepend | NoteBehavior::PrependDaily => Some(WriteMode::Prepend),
            NoteBehavior::Overwrite => Some(WriteMode::Overwrite),
        }
    }
}

impl fmt::Display for NoteBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown note behavior '{0}' (expected create, append, prepend, overwrite, append-daily or prepend-daily)")]
pub struct UnknownBehavior(pub String);

impl FromStr for NoteBehavior {
    type Err = UnknownBehavior;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(NoteBehavior::Create),
            "append" => Ok(NoteBehavior::Append),
            "prepend" => Ok(NoteBehavior::Prepend),
            "overwrite" => Ok(NoteBehavior::Overwrite),
            "append-daily" => Ok(NoteBehavior::AppendDaily),
            "prepend-daily" => Ok(NoteBehavior::PrependDaily),
            other => Err(UnknownBehavior(other.to_string())),
        }
    }
}
