//! Card set (expansion)

use super::legality::{Format, Legality};
use super::record::{FromRecord, RecordExt};
use crate::types::Record;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const RELEASE_DATE_FORMAT: &str = "%Y/%m/%d";
const UPDATED_AT_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Set logo and symbol URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetImages {
    pub symbol: String,
    pub logo: String,
}

/// A card set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSet {
    pub id: String,
    pub name: String,
    pub series: String,
    pub printed_total: i64,
    pub total: i64,
    pub legalities: Legality,
    pub ptcgo_code: String,
    pub release_date: String,
    pub updated_at: String,
    pub images: SetImages,
}

impl FromRecord for CardSet {
    fn from_record(record: &Record) -> Self {
        Self {
            id: record.str_or_empty("id"),
            name: record.str_or_empty("name"),
            series: record.str_or_empty("series"),
            printed_total: record.i64_or("printedTotal", 0),
            total: record.i64_or("total", 0),
            legalities: Legality::from_optional(record.object("legalities")),
            ptcgo_code: record.str_or_empty("ptcgoCode"),
            release_date: record.str_or_empty("releaseDate"),
            updated_at: record.str_or_empty("updatedAt"),
            images: record
                .object("images")
                .map(|i| SetImages {
                    symbol: i.str_or_empty("symbol"),
                    logo: i.str_or_empty("logo"),
                })
                .unwrap_or_default(),
        }
    }
}

impl CardSet {
    /// Map an optional nested `set` object
    pub fn from_optional(record: Option<&Record>) -> Self {
        record.map(Self::from_record).unwrap_or_default()
    }

    /// True when the set is legal in `format`
    pub fn is_legal(&self, format: Format) -> bool {
        self.legalities.is_legal(format)
    }

    /// Release date, if it parses as `YYYY/MM/DD`
    pub fn release_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.release_date, RELEASE_DATE_FORMAT).ok()
    }

    /// Last update time, if it parses as `YYYY/MM/DD HH:MM:SS`
    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.updated_at, UPDATED_AT_FORMAT).ok()
    }

    /// Symbol image URL
    pub fn symbol_url(&self) -> &str {
        &self.images.symbol
    }

    /// Logo image URL
    pub fn logo_url(&self) -> &str {
        &self.images.logo
    }
}
