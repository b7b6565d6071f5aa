//! Booking requests service.

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        ad_spaces::PgAdSpacesRepository,
        booking_requests::{
            data::NewBookingRequest,
            errors::{BookingRequestsServiceError, BookingTransition},
            records::{BookingRequestRecord, BookingRequestUuid, BookingStatus},
            repository::PgBookingRequestsRepository,
            validation::{
                ensure_bookable, ensure_pending, total_cost, validate_new_booking_request,
            },
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgBookingRequestsService {
    db: Db,
    ad_spaces: PgAdSpacesRepository,
    repository: PgBookingRequestsRepository,
}

impl PgBookingRequestsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            ad_spaces: PgAdSpacesRepository::new(),
            repository: PgBookingRequestsRepository::new(),
        }
    }
}

#[async_trait]
impl BookingRequestsService for PgBookingRequestsService {
    async fn list_booking_requests(
        &self,
    ) -> Result<Vec<BookingRequestRecord>, BookingRequestsServiceError> {
        let mut tx = self.db.begin().await?;

        let booking_requests = self.repository.list_booking_requests(&mut tx).await?;

        tx.commit().await?;

        Ok(booking_requests)
    }

    async fn get_booking_request(
        &self,
        booking_request: BookingRequestUuid,
    ) -> Result<BookingRequestRecord, BookingRequestsServiceError> {
        let mut tx = self.db.begin().await?;

        let found = self
            .repository
            .find_booking_request(&mut tx, booking_request)
            .await?
            .ok_or(BookingRequestsServiceError::NotFound(booking_request))?;

        tx.commit().await?;

        Ok(found)
    }

    async fn create_booking_request(
        &self,
        booking_request: NewBookingRequest,
        today: Date,
    ) -> Result<BookingRequestRecord, BookingRequestsServiceError> {
        validate_new_booking_request(&booking_request, today)?;

        let mut tx = self.db.begin().await?;

        let ad_space = self
            .ad_spaces
            .find_ad_space(&mut tx, booking_request.ad_space_uuid)
            .await?
            .ok_or(BookingRequestsServiceError::AdSpaceNotFound(
                booking_request.ad_space_uuid,
            ))?;

        ensure_bookable(&ad_space)?;

        if self
            .repository
            .exists_approved_overlap(
                &mut tx,
                ad_space.uuid,
                booking_request.start_date,
                booking_request.end_date,
            )
            .await?
        {
            return Err(BookingRequestsServiceError::OverlappingBooking);
        }

        let cost = total_cost(
            ad_space.price_per_day,
            booking_request.start_date,
            booking_request.end_date,
        )?;

        let created = self
            .repository
            .create_booking_request(&mut tx, booking_request, cost)
            .await?;

        tx.commit().await?;

        info!(
            booking_request_uuid = %created.uuid,
            ad_space_uuid = %created.ad_space_uuid,
            total_cost = %created.total_cost,
            "created booking request"
        );

        Ok(created)
    }

    async fn approve_booking_request(
        &self,
        booking_request: BookingRequestUuid,
    ) -> Result<BookingRequestRecord, BookingRequestsServiceError> {
        let mut tx = self.db.begin().await?;

        let pending = self
            .repository
            .find_booking_request(&mut tx, booking_request)
            .await?
            .ok_or(BookingRequestsServiceError::NotFound(booking_request))?;

        ensure_pending(pending.status, BookingTransition::Approve)?;

        // Serializes approvals for the same ad space until commit.
        self.ad_spaces
            .lock_ad_space(&mut tx, pending.ad_space_uuid)
            .await?
            .ok_or(BookingRequestsServiceError::AdSpaceNotFound(
                pending.ad_space_uuid,
            ))?;

        if self
            .repository
            .exists_approved_overlap(
                &mut tx,
                pending.ad_space_uuid,
                pending.start_date,
                pending.end_date,
            )
            .await?
        {
            debug!(booking_request_uuid = %booking_request, "approval blocked by overlap");

            return Err(BookingRequestsServiceError::OverlappingBooking);
        }

        let approved = self
            .repository
            .update_status(
                &mut tx,
                booking_request,
                BookingStatus::Pending,
                BookingStatus::Approved,
            )
            .await?
            .ok_or(BookingRequestsServiceError::NotPending(
                BookingTransition::Approve,
            ))?;

        tx.commit().await?;

        info!(booking_request_uuid = %approved.uuid, "approved booking request");

        Ok(approved)
    }

    async fn reject_booking_request(
        &self,
        booking_request: BookingRequestUuid,
    ) -> Result<BookingRequestRecord, BookingRequestsServiceError> {
        let mut tx = self.db.begin().await?;

        let pending = self
            .repository
            .find_booking_request(&mut tx, booking_request)
            .await?
            .ok_or(BookingRequestsServiceError::NotFound(booking_request))?;

        ensure_pending(pending.status, BookingTransition::Reject)?;

        let rejected = self
            .repository
            .update_status(
                &mut tx,
                booking_request,
                BookingStatus::Pending,
                BookingStatus::Rejected,
            )
            .await?
            .ok_or(BookingRequestsServiceError::NotPending(
                BookingTransition::Reject,
            ))?;

        tx.commit().await?;

        info!(booking_request_uuid = %rejected.uuid, "rejected booking request");

        Ok(rejected)
    }
}

#[automock]
#[async_trait]
pub trait BookingRequestsService: Send + Sync {
    /// Every booking request, oldest first.
    async fn list_booking_requests(
        &self,
    ) -> Result<Vec<BookingRequestRecord>, BookingRequestsServiceError>;

    async fn get_booking_request(
        &self,
        booking_request: BookingRequestUuid,
    ) -> Result<BookingRequestRecord, BookingRequestsServiceError>;

    /// Validate and store a new `PENDING` booking request.
    ///
    /// `today` is the calendar date the start date must come after.
    async fn create_booking_request(
        &self,
        booking_request: NewBookingRequest,
        today: Date,
    ) -> Result<BookingRequestRecord, BookingRequestsServiceError>;

    /// Approve a pending booking request, provided no approved booking for the same ad space
    /// overlaps it.
    async fn approve_booking_request(
        &self,
        booking_request: BookingRequestUuid,
    ) -> Result<BookingRequestRecord, BookingRequestsServiceError>;

    /// Reject a pending booking request.
    async fn reject_booking_request(
        &self,
        booking_request: BookingRequestUuid,
    ) -> Result<BookingRequestRecord, BookingRequestsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal::dec;
    use testresult::TestResult;

    use crate::{
        domain::ad_spaces::records::{AdSpaceAvailabilityStatus, AdSpaceUuid},
        test::{
            TestContext,
            helpers::{TODAY, create_ad_space, create_approved_booking, new_booking_request},
        },
    };

    use super::*;

    #[tokio::test]
    async fn create_booking_request_computes_cost_and_starts_pending() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        let request = new_booking_request(ad_space, date(2026, 3, 11), date(2026, 3, 18));
        let uuid = request.uuid;

        let created = ctx
            .booking_requests
            .create_booking_request(request, TODAY)
            .await?;

        assert_eq!(created.uuid, uuid);
        assert_eq!(created.ad_space_uuid, ad_space);
        assert_eq!(created.ad_space_name, "Billboard Central");
        assert_eq!(created.status, BookingStatus::Pending);
        assert_eq!(created.total_cost, dec!(700.00));
        assert_eq!(created.start_date, date(2026, 3, 11));
        assert_eq!(created.end_date, date(2026, 3, 18));

        Ok(())
    }

    #[tokio::test]
    async fn create_booking_request_start_today_is_rejected_without_writing() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        let result = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, TODAY, date(2026, 3, 20)),
                TODAY,
            )
            .await;

        assert!(
            matches!(result, Err(BookingRequestsServiceError::StartDateNotInFuture)),
            "expected StartDateNotInFuture, got {result:?}"
        );
        assert!(ctx.booking_requests.list_booking_requests().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn create_booking_request_short_range_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        let result = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, date(2026, 3, 11), date(2026, 3, 14)),
                TODAY,
            )
            .await;

        assert!(
            matches!(result, Err(BookingRequestsServiceError::DurationTooShort)),
            "expected DurationTooShort, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_booking_request_unknown_ad_space_returns_not_found() {
        let ctx = TestContext::new().await;
        let ad_space = AdSpaceUuid::new();

        let result = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, date(2026, 3, 11), date(2026, 3, 18)),
                TODAY,
            )
            .await;

        assert!(
            matches!(result, Err(BookingRequestsServiceError::AdSpaceNotFound(u)) if u == ad_space),
            "expected AdSpaceNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_booking_request_for_booked_space_is_unavailable() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Booked).await?;

        let result = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, date(2026, 3, 11), date(2026, 3, 18)),
                TODAY,
            )
            .await;

        assert!(
            matches!(result, Err(BookingRequestsServiceError::AdSpaceUnavailable)),
            "expected AdSpaceUnavailable, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_booking_request_overlapping_approved_is_conflict() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        create_approved_booking(&ctx, ad_space, date(2026, 3, 11), date(2026, 3, 18)).await?;

        let result = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, date(2026, 3, 14), date(2026, 3, 21)),
                TODAY,
            )
            .await;

        assert!(
            matches!(result, Err(BookingRequestsServiceError::OverlappingBooking)),
            "expected OverlappingBooking, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_booking_request_containing_approved_is_conflict() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        create_approved_booking(&ctx, ad_space, date(2026, 3, 14), date(2026, 3, 21)).await?;

        let result = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, date(2026, 3, 11), date(2026, 3, 31)),
                TODAY,
            )
            .await;

        assert!(
            matches!(result, Err(BookingRequestsServiceError::OverlappingBooking)),
            "expected OverlappingBooking, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_booking_request_inside_approved_is_conflict() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        create_approved_booking(&ctx, ad_space, date(2026, 3, 11), date(2026, 3, 31)).await?;

        let result = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, date(2026, 3, 14), date(2026, 3, 21)),
                TODAY,
            )
            .await;

        assert!(
            matches!(result, Err(BookingRequestsServiceError::OverlappingBooking)),
            "expected OverlappingBooking, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_booking_request_touching_approved_endpoint_is_conflict() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        create_approved_booking(&ctx, ad_space, date(2026, 3, 11), date(2026, 3, 18)).await?;

        let result = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, date(2026, 3, 18), date(2026, 3, 25)),
                TODAY,
            )
            .await;

        assert!(matches!(
            result,
            Err(BookingRequestsServiceError::OverlappingBooking)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn create_booking_request_adjacent_to_approved_is_allowed() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        create_approved_booking(&ctx, ad_space, date(2026, 3, 11), date(2026, 3, 18)).await?;

        let created = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, date(2026, 3, 19), date(2026, 3, 26)),
                TODAY,
            )
            .await?;

        assert_eq!(created.status, BookingStatus::Pending);

        Ok(())
    }

    #[tokio::test]
    async fn pending_bookings_do_not_block_each_other() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        for _ in 0..2 {
            ctx.booking_requests
                .create_booking_request(
                    new_booking_request(ad_space, date(2026, 3, 11), date(2026, 3, 18)),
                    TODAY,
                )
                .await?;
        }

        assert_eq!(ctx.booking_requests.list_booking_requests().await?.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn approved_bookings_for_other_spaces_do_not_conflict() -> TestResult {
        let ctx = TestContext::new().await;
        let first = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;
        let second = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        create_approved_booking(&ctx, first, date(2026, 3, 11), date(2026, 3, 18)).await?;

        let created = create_approved_booking(&ctx, second, date(2026, 3, 11), date(2026, 3, 18))
            .await?;

        assert_eq!(created.status, BookingStatus::Approved);

        Ok(())
    }

    #[tokio::test]
    async fn approve_booking_request_transitions_pending() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        let created = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, date(2026, 3, 11), date(2026, 3, 18)),
                TODAY,
            )
            .await?;

        let approved = ctx
            .booking_requests
            .approve_booking_request(created.uuid)
            .await?;

        assert_eq!(approved.status, BookingStatus::Approved);
        assert_eq!(approved.total_cost, created.total_cost);
        assert!(approved.updated_at >= created.updated_at);

        let fetched = ctx.booking_requests.get_booking_request(created.uuid).await?;

        assert_eq!(fetched.status, BookingStatus::Approved);

        Ok(())
    }

    #[tokio::test]
    async fn approve_second_overlapping_pending_is_conflict() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        let first = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, date(2026, 3, 11), date(2026, 3, 18)),
                TODAY,
            )
            .await?;

        let second = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, date(2026, 3, 14), date(2026, 3, 21)),
                TODAY,
            )
            .await?;

        ctx.booking_requests
            .approve_booking_request(first.uuid)
            .await?;

        let result = ctx
            .booking_requests
            .approve_booking_request(second.uuid)
            .await;

        assert!(
            matches!(result, Err(BookingRequestsServiceError::OverlappingBooking)),
            "expected OverlappingBooking, got {result:?}"
        );

        let unchanged = ctx.booking_requests.get_booking_request(second.uuid).await?;

        assert_eq!(unchanged.status, BookingStatus::Pending);

        Ok(())
    }

    #[tokio::test]
    async fn approve_already_approved_is_not_pending() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        let approved =
            create_approved_booking(&ctx, ad_space, date(2026, 3, 11), date(2026, 3, 18)).await?;

        let result = ctx
            .booking_requests
            .approve_booking_request(approved.uuid)
            .await;

        assert!(
            matches!(
                result,
                Err(BookingRequestsServiceError::NotPending(
                    BookingTransition::Approve
                ))
            ),
            "expected NotPending, got {result:?}"
        );

        let unchanged = ctx.booking_requests.get_booking_request(approved.uuid).await?;

        assert_eq!(unchanged.status, BookingStatus::Approved);
        assert_eq!(unchanged.updated_at, approved.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn reject_already_approved_is_not_pending() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        let approved =
            create_approved_booking(&ctx, ad_space, date(2026, 3, 11), date(2026, 3, 18)).await?;

        let result = ctx
            .booking_requests
            .reject_booking_request(approved.uuid)
            .await;

        assert!(
            matches!(
                result,
                Err(BookingRequestsServiceError::NotPending(
                    BookingTransition::Reject
                ))
            ),
            "expected NotPending, got {result:?}"
        );

        let unchanged = ctx.booking_requests.get_booking_request(approved.uuid).await?;

        assert_eq!(unchanged.status, BookingStatus::Approved);

        Ok(())
    }

    #[tokio::test]
    async fn reject_booking_request_transitions_pending() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        let created = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, date(2026, 3, 11), date(2026, 3, 18)),
                TODAY,
            )
            .await?;

        let rejected = ctx
            .booking_requests
            .reject_booking_request(created.uuid)
            .await?;

        assert_eq!(rejected.status, BookingStatus::Rejected);

        Ok(())
    }

    #[tokio::test]
    async fn reject_does_not_check_overlap() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        let pending = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, date(2026, 3, 11), date(2026, 3, 18)),
                TODAY,
            )
            .await?;

        create_approved_booking(&ctx, ad_space, date(2026, 3, 12), date(2026, 3, 19)).await?;

        let rejected = ctx
            .booking_requests
            .reject_booking_request(pending.uuid)
            .await?;

        assert_eq!(rejected.status, BookingStatus::Rejected);

        Ok(())
    }

    #[tokio::test]
    async fn reject_after_reject_is_not_pending() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        let created = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, date(2026, 3, 11), date(2026, 3, 18)),
                TODAY,
            )
            .await?;

        ctx.booking_requests
            .reject_booking_request(created.uuid)
            .await?;

        let reject_again = ctx
            .booking_requests
            .reject_booking_request(created.uuid)
            .await;

        let approve_after = ctx
            .booking_requests
            .approve_booking_request(created.uuid)
            .await;

        assert!(matches!(
            reject_again,
            Err(BookingRequestsServiceError::NotPending(
                BookingTransition::Reject
            ))
        ));
        assert!(matches!(
            approve_after,
            Err(BookingRequestsServiceError::NotPending(
                BookingTransition::Approve
            ))
        ));

        let unchanged = ctx.booking_requests.get_booking_request(created.uuid).await?;

        assert_eq!(unchanged.status, BookingStatus::Rejected);

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_overlapping_approvals_approve_exactly_one() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        let first = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, date(2026, 3, 11), date(2026, 3, 18)),
                TODAY,
            )
            .await?;

        let second = ctx
            .booking_requests
            .create_booking_request(
                new_booking_request(ad_space, date(2026, 3, 14), date(2026, 3, 21)),
                TODAY,
            )
            .await?;

        let (first_result, second_result) = tokio::join!(
            ctx.booking_requests.approve_booking_request(first.uuid),
            ctx.booking_requests.approve_booking_request(second.uuid),
        );

        let results = [first_result, second_result];

        let approved = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(BookingRequestsServiceError::OverlappingBooking)))
            .count();

        assert_eq!(approved, 1, "expected one approval, got {results:?}");
        assert_eq!(conflicts, 1, "expected one conflict, got {results:?}");

        let statuses: Vec<BookingStatus> = ctx
            .booking_requests
            .list_booking_requests()
            .await?
            .into_iter()
            .map(|b| b.status)
            .collect();

        assert_eq!(
            statuses
                .iter()
                .filter(|s| **s == BookingStatus::Approved)
                .count(),
            1
        );
        assert_eq!(
            statuses
                .iter()
                .filter(|s| **s == BookingStatus::Pending)
                .count(),
            1
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_booking_request_returns_not_found() {
        let ctx = TestContext::new().await;
        let uuid = BookingRequestUuid::new();

        let get = ctx.booking_requests.get_booking_request(uuid).await;
        let approve = ctx.booking_requests.approve_booking_request(uuid).await;
        let reject = ctx.booking_requests.reject_booking_request(uuid).await;

        for result in [get, approve, reject] {
            assert!(
                matches!(result, Err(BookingRequestsServiceError::NotFound(u)) if u == uuid),
                "expected NotFound, got {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn list_booking_requests_returns_creation_order() -> TestResult {
        let ctx = TestContext::new().await;
        let ad_space = create_ad_space(&ctx, AdSpaceAvailabilityStatus::Available).await?;

        let mut expected = Vec::new();

        for offset in 0..3 {
            let start = date(2026, 4, 1 + offset);
            let created = ctx
                .booking_requests
                .create_booking_request(
                    new_booking_request(ad_space, start, date(2026, 4, 20)),
                    TODAY,
                )
                .await?;

            expected.push(created.uuid);
        }

        let listed: Vec<BookingRequestUuid> = ctx
            .booking_requests
            .list_booking_requests()
            .await?
            .into_iter()
            .map(|b| b.uuid)
            .collect();

        assert_eq!(listed, expected);

        Ok(())
    }
}
