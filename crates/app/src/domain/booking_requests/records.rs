//! Booking Request Records

use std::{fmt, str::FromStr};

use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;

use crate::{
    domain::{UnknownVariantError, ad_spaces::records::AdSpaceUuid},
    uuids::TypedUuid,
};

/// Booking Request UUID
pub type BookingRequestUuid = TypedUuid<BookingRequestRecord>;

/// Lifecycle state of a booking request.
///
/// Requests start out `Pending` and move exactly once to either `Approved` or `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

impl BookingStatus {
    /// Every booking status, in declaration order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    /// Stored and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Whether the request has already been decided.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariantError::new("booking status", s))
    }
}

/// Booking Request Record
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequestRecord {
    pub uuid: BookingRequestUuid,

    /// The ad space being booked.
    pub ad_space_uuid: AdSpaceUuid,

    /// Name of the booked ad space, denormalised for display.
    pub ad_space_name: String,

    pub advertiser_name: String,
    pub advertiser_email: String,

    /// First booked day, inclusive.
    pub start_date: Date,

    /// Last booked day, inclusive.
    pub end_date: Date,

    pub status: BookingStatus,

    /// Price per day multiplied by the booked day count, fixed at creation.
    pub total_cost: Decimal,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
