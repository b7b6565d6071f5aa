//! Create Booking Request Handler

use std::sync::Arc;

use jiff::{Zoned, civil::Date};
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use adbooking_app::domain::booking_requests::{
    data::NewBookingRequest, records::BookingRequestUuid,
};

use crate::{
    booking_requests::{errors::into_status_error, handlers::BookingRequestResponse},
    extensions::*,
    state::State,
};

/// Create Booking Request Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateBookingRequestRequest {
    pub ad_space_uuid: Uuid,
    pub advertiser_name: String,
    pub advertiser_email: String,

    /// First booked day (YYYY-MM-DD)
    pub start_date: String,

    /// Last booked day (YYYY-MM-DD)
    pub end_date: String,
}

impl CreateBookingRequestRequest {
    fn into_new_booking_request(
        self,
        uuid: BookingRequestUuid,
    ) -> Result<NewBookingRequest, StatusError> {
        Ok(NewBookingRequest {
            uuid,
            ad_space_uuid: self.ad_space_uuid.into(),
            advertiser_name: self.advertiser_name,
            advertiser_email: self.advertiser_email,
            start_date: self
                .start_date
                .parse::<Date>()
                .or_400("start_date must be a YYYY-MM-DD date")?,
            end_date: self
                .end_date
                .parse::<Date>()
                .or_400("end_date must be a YYYY-MM-DD date")?,
        })
    }
}

/// Create Booking Request Handler
///
/// Stores a new `PENDING` booking request for an available ad space.
#[endpoint(
    tags("booking-requests"),
    summary = "Create Booking Request",
    responses(
        (status_code = StatusCode::CREATED, description = "Booking request created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid booking request"),
        (status_code = StatusCode::NOT_FOUND, description = "Ad space not found"),
        (status_code = StatusCode::CONFLICT, description = "Ad space unavailable or already booked"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "booking_requests.create",
    skip(json, depot, res),
    fields(
        booking_request_uuid = tracing::field::Empty,
        ad_space_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateBookingRequestRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BookingRequestResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let booking_request = json
        .into_inner()
        .into_new_booking_request(BookingRequestUuid::new())?;

    let span = tracing::Span::current();

    span.record(
        "booking_request_uuid",
        tracing::field::display(booking_request.uuid),
    );
    span.record(
        "ad_space_uuid",
        tracing::field::display(booking_request.ad_space_uuid),
    );

    let created = state
        .app
        .booking_requests
        .create_booking_request(booking_request, Zoned::now().date())
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!("/booking-requests/{}", created.uuid),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}
