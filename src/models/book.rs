use std::fmt;
use std::str::FromStr;

use anyhow;
use serde::{Deserialize, Serialize};

/// Availability of a book, spelled the way the API spells it on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    Available,
    #[serde(rename = "Checked Out")]
    CheckedOut,
}

impl Default for AvailabilityStatus {
    fn default() -> AvailabilityStatus {
        AvailabilityStatus::Available
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AvailabilityStatus::Available => "Available",
            AvailabilityStatus::CheckedOut => "Checked Out",
        };

        f.write_str(s)
    }
}

impl FromStr for AvailabilityStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<AvailabilityStatus, Self::Err> {
        match s.trim() {
            "Available" => Ok(AvailabilityStatus::Available),
            "Checked Out" => Ok(AvailabilityStatus::CheckedOut),
            unknown => Err(anyhow::Error::msg(format!(
                "Unknown availability status: {}",
                unknown
            ))),
        }
    }
}

/// A book record as returned by the API. `id` is always present here;
/// only the API assigns it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub availability_status: AvailabilityStatus,
}

/// Create/update payload. A missing `id` is left out of the body so the
/// server assigns one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub availability_status: AvailabilityStatus,
}

/// In-progress new-book form state. Values are raw input text; the id is
/// only parsed when the form is submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookDraft {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub availability_status: AvailabilityStatus,
}

impl BookDraft {
    pub fn to_new_book(&self, id: Option<i64>) -> NewBook {
        NewBook {
            id,
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            availability_status: self.availability_status,
        }
    }
}
