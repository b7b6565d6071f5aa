//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil::date};
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use adbooking_app::{
    context::AppContext,
    domain::{
        ad_spaces::{
            MockAdSpacesService,
            records::{AdSpaceAvailabilityStatus, AdSpaceRecord, AdSpaceType, AdSpaceUuid},
        },
        booking_requests::{
            MockBookingRequestsService,
            records::{BookingRequestRecord, BookingRequestUuid, BookingStatus},
        },
    },
};

use crate::state::State;

pub(crate) fn make_ad_space(uuid: AdSpaceUuid) -> AdSpaceRecord {
    AdSpaceRecord {
        uuid,
        name: "Billboard Central".to_string(),
        ad_space_type: AdSpaceType::Billboard,
        city: "Cluj".to_string(),
        address: "1 Main Street".to_string(),
        price_per_day: Decimal::new(100, 0),
        availability_status: AdSpaceAvailabilityStatus::Available,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_booking_request(
    uuid: BookingRequestUuid,
    ad_space: AdSpaceUuid,
    status: BookingStatus,
) -> BookingRequestRecord {
    BookingRequestRecord {
        uuid,
        ad_space_uuid: ad_space,
        ad_space_name: "Billboard Central".to_string(),
        advertiser_name: "Acme Outdoor".to_string(),
        advertiser_email: "media@acme.example".to_string(),
        start_date: date(2026, 3, 11),
        end_date: date(2026, 3, 18),
        status,
        total_cost: Decimal::new(70_000, 2),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_ad_spaces_mock() -> MockAdSpacesService {
    let mut ad_spaces = MockAdSpacesService::new();

    ad_spaces.expect_list_available_ad_spaces().never();
    ad_spaces.expect_get_ad_space().never();
    ad_spaces.expect_create_ad_space().never();

    ad_spaces
}

fn strict_booking_requests_mock() -> MockBookingRequestsService {
    let mut booking_requests = MockBookingRequestsService::new();

    booking_requests.expect_list_booking_requests().never();
    booking_requests.expect_get_booking_request().never();
    booking_requests.expect_create_booking_request().never();
    booking_requests.expect_approve_booking_request().never();
    booking_requests.expect_reject_booking_request().never();

    booking_requests
}

fn state(
    ad_spaces: MockAdSpacesService,
    booking_requests: MockBookingRequestsService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        ad_spaces: Arc::new(ad_spaces),
        booking_requests: Arc::new(booking_requests),
    })
}

/// Serve `route` with the given ad spaces mock; every booking request call fails the test.
pub(crate) fn ad_spaces_service(ad_spaces: MockAdSpacesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(ad_spaces, strict_booking_requests_mock())))
            .push(route),
    )
}

/// Serve `route` with the given booking requests mock; every ad space call fails the test.
pub(crate) fn booking_requests_service(
    booking_requests: MockBookingRequestsService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(strict_ad_spaces_mock(), booking_requests)))
            .push(route),
    )
}
