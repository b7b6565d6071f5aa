//! Booking Request Errors

use salvo::http::StatusError;
use tracing::error;

use adbooking_app::domain::booking_requests::BookingRequestsServiceError;

pub(crate) fn into_status_error(error: BookingRequestsServiceError) -> StatusError {
    match error {
        BookingRequestsServiceError::InvalidInput(message) => {
            StatusError::bad_request().brief(message)
        }
        BookingRequestsServiceError::StartDateNotInFuture
        | BookingRequestsServiceError::DurationTooShort => {
            StatusError::bad_request().brief(error.to_string())
        }
        BookingRequestsServiceError::AdSpaceNotFound(_)
        | BookingRequestsServiceError::NotFound(_) => {
            StatusError::not_found().brief(error.to_string())
        }
        BookingRequestsServiceError::AdSpaceUnavailable
        | BookingRequestsServiceError::OverlappingBooking
        | BookingRequestsServiceError::NotPending(_) => {
            StatusError::conflict().brief(error.to_string())
        }
        BookingRequestsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Booking request already exists")
        }
        BookingRequestsServiceError::InvalidReference
        | BookingRequestsServiceError::MissingRequiredData
        | BookingRequestsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid booking request payload")
        }
        BookingRequestsServiceError::Sql(source) => {
            error!("booking request storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
