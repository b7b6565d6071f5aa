//! Get Booking Request Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    booking_requests::{errors::into_status_error, handlers::BookingRequestResponse},
    extensions::*,
    state::State,
};

/// Get Booking Request Handler
#[endpoint(
    tags("booking-requests"),
    summary = "Get Booking Request",
    responses(
        (status_code = StatusCode::OK, description = "Booking request found"),
        (status_code = StatusCode::NOT_FOUND, description = "Booking request not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    booking_request: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<BookingRequestResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let booking_request = state
        .app
        .booking_requests
        .get_booking_request(booking_request.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(booking_request.into()))
}
