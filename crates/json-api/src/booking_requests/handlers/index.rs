//! Booking Request Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    booking_requests::{errors::into_status_error, handlers::BookingRequestResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingRequestsResponse {
    /// Every booking request, oldest first
    pub booking_requests: Vec<BookingRequestResponse>,
}

/// Booking Request Index Handler
#[endpoint(
    tags("booking-requests"),
    summary = "List Booking Requests",
    responses(
        (status_code = StatusCode::OK, description = "All booking requests"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BookingRequestsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let booking_requests = state
        .app
        .booking_requests
        .list_booking_requests()
        .await
        .map_err(into_status_error)?;

    Ok(Json(BookingRequestsResponse {
        booking_requests: booking_requests.into_iter().map(Into::into).collect(),
    }))
}
