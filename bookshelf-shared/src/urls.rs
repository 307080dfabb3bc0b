//! URLs of the library backend and of our own pages
//!
//! for consistency, all endpoint urls and routes in this module always start with a /

use serde::{Deserialize, Serialize};

/// Where the library backend lives unless configured otherwise
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8080";
/// Search books by subject, takes a `subject` query parameter
pub const BOOKS_API_ENDPOINT: &str = "/api/books";
/// List all pickup schedules
pub const PICKUP_SCHEDULE_API_ENDPOINT: &str = "/api/pickup-schedule";
/// Create a new pickup schedule with a POST request
pub const CREATE_PICKUP_SCHEDULE_API_ENDPOINT: &str = "/api/pickup-schedule/create";

/// Route of the book search page
pub const HOME_ROUTE: &str = "/";
/// Route of the pickup schedule listing
pub const PICKUP_SCHEDULE_ROUTE: &str = "/pickup-schedule";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidOrigin {
    Empty,
    /// Only http and https are supported
    Scheme(String),
    /// An origin has no path, query or fragment
    HasPath(String),
}
impl core::fmt::Display for InvalidOrigin {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Empty => write!(f, "The api origin is empty"),
            Self::Scheme(x) => {
                write!(f, "The api origin must start with http:// or https://, got {x}")
            }
            Self::HasPath(x) => {
                write!(f, "The api origin must not contain a path, query or fragment, got {x}")
            }
        }
    }
}
impl std::error::Error for InvalidOrigin {}

/// Scheme, host and port of the library backend, without a trailing slash
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ApiOrigin(String);
impl ApiOrigin {
    pub fn parse(value: &str) -> Result<Self, InvalidOrigin> {
        let trimmed = value.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(InvalidOrigin::Empty);
        }
        let Some(authority) = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
        else {
            return Err(InvalidOrigin::Scheme(trimmed.to_string()));
        };
        if authority.is_empty() || authority.contains(['/', '?', '#']) {
            return Err(InvalidOrigin::HasPath(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn books_url(&self, subject: &str) -> String {
        format!(
            "{}{BOOKS_API_ENDPOINT}?subject={}",
            self.0,
            urlencoding::encode(subject)
        )
    }

    pub fn pickup_schedules_url(&self) -> String {
        format!("{}{PICKUP_SCHEDULE_API_ENDPOINT}", self.0)
    }

    pub fn create_pickup_schedule_url(&self) -> String {
        format!("{}{CREATE_PICKUP_SCHEDULE_API_ENDPOINT}", self.0)
    }
}
impl Default for ApiOrigin {
    fn default() -> Self {
        Self(DEFAULT_API_ORIGIN.to_string())
    }
}
impl core::fmt::Display for ApiOrigin {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
