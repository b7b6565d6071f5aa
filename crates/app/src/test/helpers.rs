//! Test Helpers

use jiff::civil::{Date, date};
use rust_decimal::dec;

use crate::{
    domain::{
        ad_spaces::{
            AdSpacesService, AdSpacesServiceError,
            data::NewAdSpace,
            records::{AdSpaceAvailabilityStatus, AdSpaceType, AdSpaceUuid},
        },
        booking_requests::{
            BookingRequestsService, BookingRequestsServiceError,
            data::NewBookingRequest,
            records::{BookingRequestRecord, BookingRequestUuid},
        },
    },
    test::TestContext,
};

/// Fixed "today" used by service tests.
pub(crate) const TODAY: Date = date(2026, 3, 10);

/// A valid ad space priced at 100.00 per day.
pub(crate) fn new_ad_space(uuid: AdSpaceUuid, status: AdSpaceAvailabilityStatus) -> NewAdSpace {
    NewAdSpace {
        uuid,
        name: "Billboard Central".to_string(),
        ad_space_type: AdSpaceType::Billboard,
        city: "Cluj".to_string(),
        address: "1 Main Street".to_string(),
        price_per_day: dec!(100.00),
        availability_status: status,
    }
}

pub(crate) fn new_booking_request(
    ad_space: AdSpaceUuid,
    start: Date,
    end: Date,
) -> NewBookingRequest {
    NewBookingRequest {
        uuid: BookingRequestUuid::new(),
        ad_space_uuid: ad_space,
        advertiser_name: "Acme Outdoor".to_string(),
        advertiser_email: "media@acme.example".to_string(),
        start_date: start,
        end_date: end,
    }
}

pub(crate) async fn create_ad_space(
    ctx: &TestContext,
    status: AdSpaceAvailabilityStatus,
) -> Result<AdSpaceUuid, AdSpacesServiceError> {
    let uuid = AdSpaceUuid::new();

    ctx.ad_spaces
        .create_ad_space(new_ad_space(uuid, status))
        .await?;

    Ok(uuid)
}

/// Create a booking request and approve it straight away.
pub(crate) async fn create_approved_booking(
    ctx: &TestContext,
    ad_space: AdSpaceUuid,
    start: Date,
    end: Date,
) -> Result<BookingRequestRecord, BookingRequestsServiceError> {
    let created = ctx
        .booking_requests
        .create_booking_request(new_booking_request(ad_space, start, end), TODAY)
        .await?;

    ctx.booking_requests
        .approve_booking_request(created.uuid)
        .await
}
