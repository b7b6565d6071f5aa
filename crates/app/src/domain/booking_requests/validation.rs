//! Booking rules that need no storage access.

use jiff::civil::Date;
use rust_decimal::Decimal;
use validator::ValidateEmail;

use crate::domain::{
    ad_spaces::records::AdSpaceRecord,
    booking_requests::{
        data::NewBookingRequest,
        errors::{BookingRequestsServiceError, BookingTransition},
        records::BookingStatus,
    },
};

/// Shortest bookable range, in days between start and end.
pub const MINIMUM_BOOKING_DAYS: i32 = 7;

/// Largest total cost the `NUMERIC(14, 2)` column holds.
pub const MAXIMUM_TOTAL_COST: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

/// Check the advertiser details and the requested date range.
///
/// `today` is the calendar date the request is evaluated against; the start date must fall
/// strictly after it.
///
/// # Errors
///
/// Returns [`BookingRequestsServiceError::InvalidInput`] for blank or malformed advertiser
/// details, [`BookingRequestsServiceError::StartDateNotInFuture`] when the booking would start
/// today or earlier, and [`BookingRequestsServiceError::DurationTooShort`] when the range is
/// shorter than [`MINIMUM_BOOKING_DAYS`].
pub fn validate_new_booking_request(
    booking: &NewBookingRequest,
    today: Date,
) -> Result<(), BookingRequestsServiceError> {
    if booking.advertiser_name.trim().is_empty() {
        return Err(BookingRequestsServiceError::InvalidInput(
            "advertiser_name cannot be empty.",
        ));
    }

    if booking.advertiser_email.trim().is_empty() {
        return Err(BookingRequestsServiceError::InvalidInput(
            "advertiser_email cannot be empty.",
        ));
    }

    if !booking.advertiser_email.validate_email() {
        return Err(BookingRequestsServiceError::InvalidInput(
            "advertiser_email must be a well-formed email address.",
        ));
    }

    if booking.start_date <= today {
        return Err(BookingRequestsServiceError::StartDateNotInFuture);
    }

    if days_between(booking.start_date, booking.end_date) < MINIMUM_BOOKING_DAYS {
        return Err(BookingRequestsServiceError::DurationTooShort);
    }

    Ok(())
}

/// Whole calendar days from `start` to `end`, negative when `end` comes first.
pub fn days_between(start: Date, end: Date) -> i32 {
    (end - start).get_days()
}

/// Price of booking a space from `start` to `end` at `price_per_day`.
///
/// # Errors
///
/// Returns [`BookingRequestsServiceError::InvalidData`] if the cost exceeds
/// [`MAXIMUM_TOTAL_COST`].
pub fn total_cost(
    price_per_day: Decimal,
    start: Date,
    end: Date,
) -> Result<Decimal, BookingRequestsServiceError> {
    price_per_day
        .checked_mul(Decimal::from(days_between(start, end)))
        .filter(|cost| *cost <= MAXIMUM_TOTAL_COST)
        .ok_or(BookingRequestsServiceError::InvalidData)
}

/// Require the ad space to be open for bookings.
///
/// # Errors
///
/// Returns [`BookingRequestsServiceError::AdSpaceUnavailable`] unless the space is `AVAILABLE`.
pub fn ensure_bookable(ad_space: &AdSpaceRecord) -> Result<(), BookingRequestsServiceError> {
    if ad_space.is_available() {
        Ok(())
    } else {
        Err(BookingRequestsServiceError::AdSpaceUnavailable)
    }
}

/// Require a booking to still be awaiting a decision.
///
/// # Errors
///
/// Returns [`BookingRequestsServiceError::NotPending`] for approved or rejected bookings.
pub fn ensure_pending(
    status: BookingStatus,
    transition: BookingTransition,
) -> Result<(), BookingRequestsServiceError> {
    if status.is_terminal() {
        Err(BookingRequestsServiceError::NotPending(transition))
    } else {
        Ok(())
    }
}
