//! Booking requests service errors.

use std::fmt;

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::{
    ad_spaces::records::AdSpaceUuid,
    booking_requests::records::BookingRequestUuid,
};

/// The decision being applied to a pending booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingTransition {
    Approve,
    Reject,
}

impl fmt::Display for BookingTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Approve => "approved",
            Self::Reject => "rejected",
        })
    }
}

#[derive(Debug, Error)]
pub enum BookingRequestsServiceError {
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("Start date must be in the future")]
    StartDateNotInFuture,

    #[error("End date must be after start date. Minimum booking duration: 7 days")]
    DurationTooShort,

    #[error("Ad space with uuid {0} not found")]
    AdSpaceNotFound(AdSpaceUuid),

    #[error("Booking request with uuid {0} not found")]
    NotFound(BookingRequestUuid),

    #[error("Ad Space status must be AVAILABLE")]
    AdSpaceUnavailable,

    #[error("Cannot create overlapping bookings for the same space (for approved bookings)")]
    OverlappingBooking,

    #[error("Only pending bookings can be {0}")]
    NotPending(BookingTransition),

    #[error("booking request already exists")]
    AlreadyExists,

    #[error("booking request references an unknown ad space")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for BookingRequestsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
