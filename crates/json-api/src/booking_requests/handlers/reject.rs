//! Reject Booking Request Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    booking_requests::{errors::into_status_error, handlers::BookingRequestResponse},
    extensions::*,
    state::State,
};

/// Reject Booking Request Handler
#[endpoint(
    tags("booking-requests"),
    summary = "Reject Booking Request",
    responses(
        (status_code = StatusCode::OK, description = "Booking request rejected"),
        (status_code = StatusCode::NOT_FOUND, description = "Booking request not found"),
        (status_code = StatusCode::CONFLICT, description = "Booking request is not pending"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "booking_requests.reject",
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

    let rejected = state
        .app
        .booking_requests
        .reject_booking_request(booking_request.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(rejected.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use adbooking_app::domain::{
        ad_spaces::records::AdSpaceUuid,
        booking_requests::{
            BookingRequestsServiceError, MockBookingRequestsService,
            errors::BookingTransition,
            records::{BookingRequestUuid, BookingStatus},
        },
    };

    use crate::test_helpers::{booking_requests_service, make_booking_request};

    use super::*;

    fn make_service(repo: MockBookingRequestsService) -> Service {
        booking_requests_service(
            repo,
            Router::with_path("booking-requests/{booking_request}/reject").patch(handler),
        )
    }

    fn strict(repo: &mut MockBookingRequestsService) {
        repo.expect_list_booking_requests().never();
        repo.expect_get_booking_request().never();
        repo.expect_create_booking_request().never();
        repo.expect_approve_booking_request().never();
    }

    #[tokio::test]
    async fn test_reject_returns_200() -> TestResult {
        let mut repo = MockBookingRequestsService::new();
        let uuid = BookingRequestUuid::new();
        let record = make_booking_request(uuid, AdSpaceUuid::new(), BookingStatus::Rejected);

        repo.expect_reject_booking_request()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(record));

        strict(&mut repo);

        let mut res =
            TestClient::patch(format!("http://example.com/booking-requests/{uuid}/reject"))
                .send(&make_service(repo))
                .await;

        let body: BookingRequestResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, "REJECTED");

        Ok(())
    }

    #[tokio::test]
    async fn test_reject_not_pending_returns_409() -> TestResult {
        let mut repo = MockBookingRequestsService::new();
        let uuid = BookingRequestUuid::new();

        repo.expect_reject_booking_request()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| {
                Err(BookingRequestsServiceError::NotPending(
                    BookingTransition::Reject,
                ))
            });

        strict(&mut repo);

        let res = TestClient::patch(format!("http://example.com/booking-requests/{uuid}/reject"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_reject_malformed_uuid_returns_400() -> TestResult {
        let mut repo = MockBookingRequestsService::new();

        repo.expect_reject_booking_request().never();
        strict(&mut repo);

        let res = TestClient::patch("http://example.com/booking-requests/nope/reject")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
