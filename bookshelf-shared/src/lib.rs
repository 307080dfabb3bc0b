//! Types and functions shared by the components, the app and the server

pub mod datetime;
pub mod pickup;
pub mod schedules;
pub mod search;
pub mod urls;

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

use urls::ApiOrigin;


/// Shown instead of an empty author list
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// The backend sends `null` for books without authors
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Pickup times the backend sends in an unreadable form become None instead of failing the list
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .as_deref()
        .and_then(datetime::parse_backend_datetime))
}

/// A book as returned by the subject search
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Book {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Authors", default, deserialize_with = "null_as_empty")]
    pub authors: Vec<String>,
    /// The handle used for borrowing. May be empty.
    #[serde(rename = "EditionNumber", default)]
    pub edition_number: String,
}
impl Book {
    /// All authors, comma separated
    pub fn authors_line(&self) -> String {
        if self.authors.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            self.authors.join(", ")
        }
    }

    /// Only books with an edition number can be borrowed
    pub fn has_edition(&self) -> bool {
        !self.edition_number.is_empty()
    }
}

/// The book attached to a pickup schedule
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ScheduledBook {
    #[serde(flatten)]
    pub book: Book,
    #[serde(rename = "IsAvailable", default)]
    pub is_available: bool,
}

/// A reservation of a book edition for pickup at a given time
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Schedule {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Book")]
    pub book: ScheduledBook,
    /// None when the backend sent something that is not a timestamp
    #[serde(
        rename = "DateTime",
        default,
        deserialize_with = "lenient_datetime",
        serialize_with = "time::serde::rfc3339::option::serialize"
    )]
    pub date_time: Option<OffsetDateTime>,
}

/// Body of the create-schedule request
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct CreateScheduleRequest {
    pub edition_number: String,
    /// Always sent in UTC
    #[serde(with = "time::serde::rfc3339")]
    pub datetime: OffsetDateTime,
}

/// Reply of the backend after a schedule was created
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct CreateScheduleResponse {
    #[serde(rename = "Message")]
    pub message: String,
}

/// What to do with books that have no edition number
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Copy, Clone, Default)]
pub enum EditionFilter {
    /// Show them, without the edition line and without a usable borrow button
    #[default]
    ShowAll,
    /// Leave them out of the result list
    HideMissing,
}
impl EditionFilter {
    pub fn admits(&self, book: &Book) -> bool {
        match self {
            Self::ShowAll => true,
            Self::HideMissing => book.has_edition(),
        }
    }
}

/// Settings the server hands to the browser on page load
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct ClientSettings {
    pub api_origin: ApiOrigin,
    pub edition_filter: EditionFilter,
}

/// Everything that can go wrong while talking to the library backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never got a response
    Network(String),
    /// The backend answered with a non-2xx status
    Status { status: u16, status_text: String },
    /// The response body was not what we expected
    Decode(String),
    /// The request body could not be serialized
    Encode(String),
}
impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Network(e) => {
                write!(f, "Unable to reach the library backend: {e}")
            }
            Self::Status {
                status,
                status_text,
            } => {
                write!(f, "Library backend answered with {status} {status_text}")
            }
            Self::Decode(e) => {
                write!(f, "Unable to decode the backend response: {e}")
            }
            Self::Encode(e) => {
                write!(f, "Unable to encode the request body: {e}")
            }
        }
    }
}
impl std::error::Error for ApiError {}
