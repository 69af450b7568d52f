//! Format legality

use super::record::RecordExt;
use crate::types::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Play format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Standard,
    Expanded,
    Unlimited,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Standard => "standard",
            Format::Expanded => "expanded",
            Format::Unlimited => "unlimited",
        })
    }
}

/// Legality per format; each value is `"Legal"`, `"Banned"` or empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legality {
    pub standard: String,
    pub expanded: String,
    pub unlimited: String,
}

impl Legality {
    /// Map an optional `legalities` object
    pub fn from_optional(record: Option<&Record>) -> Self {
        record.map_or_else(Self::default, |r| Self {
            standard: r.str_or_empty("standard"),
            expanded: r.str_or_empty("expanded"),
            unlimited: r.str_or_empty("unlimited"),
        })
    }

    /// Raw status for a format
    pub fn status(&self, format: Format) -> &str {
        match format {
            Format::Standard => &self.standard,
            Format::Expanded => &self.expanded,
            Format::Unlimited => &self.unlimited,
        }
    }

    /// True when the format status is `"Legal"`
    pub fn is_legal(&self, format: Format) -> bool {
        self.status(format) == "Legal"
    }

    /// True when at least one format carries a status
    pub fn any(&self) -> bool {
        !(self.standard.is_empty() && self.expanded.is_empty() && self.unlimited.is_empty())
    }
}
