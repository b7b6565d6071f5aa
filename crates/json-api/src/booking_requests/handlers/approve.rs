//! Approve Booking Request Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    booking_requests::{errors::into_status_error, handlers::BookingRequestResponse},
    extensions::*,
    state::State,
};

/// Approve Booking Request Handler
///
/// Moves a `PENDING` booking request to `APPROVED` unless an approved booking for the same ad
/// space overlaps it.
#[endpoint(
    tags("booking-requests"),
    summary = "Approve Booking Request",
    responses(
        (status_code = StatusCode::OK, description = "Booking request approved"),
        (status_code = StatusCode::NOT_FOUND, description = "Booking request not found"),
        (status_code = StatusCode::CONFLICT, description = "Not pending or overlaps an approved booking"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "booking_requests.approve",
    skip(booking_request, depot),
    fields(booking_request_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    booking_request: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<BookingRequestResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let booking_request = booking_request.into_inner();

    tracing::Span::current().record(
        "booking_request_uuid",
        tracing::field::display(booking_request),
    );

    let approved = state
        .app
        .booking_requests
        .approve_booking_request(booking_request.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(approved.into()))
}
