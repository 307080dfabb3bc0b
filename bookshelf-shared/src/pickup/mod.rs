//! State of the modal used to schedule a pickup for a book edition

use time::{OffsetDateTime, UtcOffset};

use crate::{ApiError, CreateScheduleRequest, CreateScheduleResponse};

#[cfg(test)]
mod test;

pub const MISSING_DATETIME_MESSAGE: &str = "Please select a date and time for pickup!";
pub const SUBMIT_FAILED_MESSAGE: &str = "An error occurred while scheduling the pickup.";

/// Why a schedule could not be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The user has not picked a date and time yet
    MissingDateTime,
    /// There is no edition being borrowed
    NotOpen,
}
impl core::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::MissingDateTime => write!(f, "{MISSING_DATETIME_MESSAGE}"),
            Self::NotOpen => write!(f, "Select a book to borrow first."),
        }
    }
}
impl std::error::Error for SubmitError {}

/// The text to show the user after a submit completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The message the backend sent back
    Scheduled(String),
    Failed,
}
impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Self::Scheduled(msg) => msg,
            Self::Failed => SUBMIT_FAILED_MESSAGE,
        }
    }
}

/// A request built from the modal, tagged with the borrow it was made for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmit {
    pub borrow: u64,
    pub request: CreateScheduleRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickupModal {
    open: bool,
    edition: Option<String>,
    /// Carries the browsers local offset, converted to UTC on submit
    datetime: Option<OffsetDateTime>,
    /// Number of borrows started so far, identifies the current one
    borrows: u64,
}
impl PickupModal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn edition(&self) -> Option<&str> {
        self.edition.as_deref()
    }

    pub fn datetime(&self) -> Option<OffsetDateTime> {
        self.datetime
    }

    /// Open the modal for this edition
    ///
    /// Any earlier selection belongs to another borrow and is dropped.
    pub fn borrow(&mut self, edition: impl Into<String>) {
        self.borrows += 1;
        self.open = true;
        self.edition = Some(edition.into());
        self.datetime = None;
    }

    pub fn select_datetime(&mut self, datetime: Option<OffsetDateTime>) {
        self.datetime = datetime;
    }

    /// Close the modal without scheduling anything
    pub fn cancel(&mut self) {
        self.open = false;
        self.edition = None;
        self.datetime = None;
    }

    /// Build the request to send, if everything the backend needs is there
    pub fn prepare_submit(&self) -> Result<PendingSubmit, SubmitError> {
        let Some(datetime) = self.datetime else {
            return Err(SubmitError::MissingDateTime);
        };
        let Some(edition) = self.edition.as_ref().filter(|_| self.open) else {
            return Err(SubmitError::NotOpen);
        };
        Ok(PendingSubmit {
            borrow: self.borrows,
            request: CreateScheduleRequest {
                edition_number: edition.clone(),
                datetime: datetime.to_offset(UtcOffset::UTC),
            },
        })
    }

    /// Feed the answer to a request submitted during `borrow` into the state
    ///
    /// The modal only closes on success, so the user can retry with their selection after a
    /// failure. Answers for an earlier borrow still produce a notice but leave the current
    /// dialog alone.
    pub fn finish_submit(
        &mut self,
        borrow: u64,
        result: Result<CreateScheduleResponse, ApiError>,
    ) -> Notice {
        match result {
            Ok(reply) => {
                if borrow == self.borrows {
                    self.cancel();
                }
                Notice::Scheduled(reply.message)
            }
            Err(_) => Notice::Failed,
        }
    }
}
