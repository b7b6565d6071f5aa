//! Booking Requests Repository

use jiff::civil::Date;
use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::{
    database::try_get_parsed,
    domain::{
        ad_spaces::records::AdSpaceUuid,
        booking_requests::{
            data::NewBookingRequest,
            records::{BookingRequestRecord, BookingRequestUuid, BookingStatus},
        },
    },
};

const LIST_BOOKING_REQUESTS_SQL: &str = include_str!("sql/list_booking_requests.sql");
const GET_BOOKING_REQUEST_SQL: &str = include_str!("sql/get_booking_request.sql");
const EXISTS_APPROVED_OVERLAP_SQL: &str = include_str!("sql/exists_approved_overlap.sql");
const CREATE_BOOKING_REQUEST_SQL: &str = include_str!("sql/create_booking_request.sql");
const UPDATE_BOOKING_REQUEST_STATUS_SQL: &str =
    include_str!("sql/update_booking_request_status.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBookingRequestsRepository;

impl PgBookingRequestsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_booking_requests(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<BookingRequestRecord>, sqlx::Error> {
        query_as::<Postgres, BookingRequestRecord>(LIST_BOOKING_REQUESTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_booking_request(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking_request: BookingRequestUuid,
    ) -> Result<Option<BookingRequestRecord>, sqlx::Error> {
        query_as::<Postgres, BookingRequestRecord>(GET_BOOKING_REQUEST_SQL)
            .bind(booking_request.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Whether an `APPROVED` booking for the ad space shares at least one day with the
    /// inclusive `start..=end` range.
    pub(crate) async fn exists_approved_overlap(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ad_space: AdSpaceUuid,
        start: Date,
        end: Date,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(EXISTS_APPROVED_OVERLAP_SQL)
            .bind(ad_space.into_uuid())
            .bind(SqlxDate::from(start))
            .bind(SqlxDate::from(end))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_booking_request(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking_request: NewBookingRequest,
        total_cost: Decimal,
    ) -> Result<BookingRequestRecord, sqlx::Error> {
        query_as::<Postgres, BookingRequestRecord>(CREATE_BOOKING_REQUEST_SQL)
            .bind(booking_request.uuid.into_uuid())
            .bind(booking_request.ad_space_uuid.into_uuid())
            .bind(booking_request.advertiser_name)
            .bind(booking_request.advertiser_email)
            .bind(SqlxDate::from(booking_request.start_date))
            .bind(SqlxDate::from(booking_request.end_date))
            .bind(BookingStatus::Pending.as_str())
            .bind(total_cost)
            .fetch_one(&mut **tx)
            .await
    }

    /// Move a booking from `from` to `to`, returning `None` if it is no longer in `from`.
    pub(crate) async fn update_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking_request: BookingRequestUuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<Option<BookingRequestRecord>, sqlx::Error> {
        query_as::<Postgres, BookingRequestRecord>(UPDATE_BOOKING_REQUEST_STATUS_SQL)
            .bind(booking_request.into_uuid())
            .bind(from.as_str())
            .bind(to.as_str())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for BookingRequestRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: BookingRequestUuid::from_uuid(row.try_get("uuid")?),
            ad_space_uuid: AdSpaceUuid::from_uuid(row.try_get("ad_space_uuid")?),
            ad_space_name: row.try_get("ad_space_name")?,
            advertiser_name: row.try_get("advertiser_name")?,
            advertiser_email: row.try_get("advertiser_email")?,
            start_date: row.try_get::<SqlxDate, _>("start_date")?.to_jiff(),
            end_date: row.try_get::<SqlxDate, _>("end_date")?.to_jiff(),
            status: try_get_parsed(row, "status")?,
            total_cost: row.try_get("total_cost")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
