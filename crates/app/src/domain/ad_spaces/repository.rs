//! Ad Spaces Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    database::try_get_parsed,
    domain::ad_spaces::{
        data::{AdSpaceFilter, NewAdSpace},
        records::{AdSpaceAvailabilityStatus, AdSpaceRecord, AdSpaceType, AdSpaceUuid},
    },
};

const LIST_AD_SPACES_SQL: &str = include_str!("sql/list_ad_spaces.sql");
const GET_AD_SPACE_SQL: &str = include_str!("sql/get_ad_space.sql");
const LOCK_AD_SPACE_SQL: &str = include_str!("sql/lock_ad_space.sql");
const CREATE_AD_SPACE_SQL: &str = include_str!("sql/create_ad_space.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAdSpacesRepository;

impl PgAdSpacesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_ad_spaces(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        status: AdSpaceAvailabilityStatus,
        filter: &AdSpaceFilter,
    ) -> Result<Vec<AdSpaceRecord>, sqlx::Error> {
        query_as::<Postgres, AdSpaceRecord>(LIST_AD_SPACES_SQL)
            .bind(status.as_str())
            .bind(filter.ad_space_type.map(AdSpaceType::as_str))
            .bind(filter.city.as_deref())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_ad_space(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ad_space: AdSpaceUuid,
    ) -> Result<Option<AdSpaceRecord>, sqlx::Error> {
        query_as::<Postgres, AdSpaceRecord>(GET_AD_SPACE_SQL)
            .bind(ad_space.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Fetch an ad space and hold its row lock until the transaction ends.
    pub(crate) async fn lock_ad_space(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ad_space: AdSpaceUuid,
    ) -> Result<Option<AdSpaceRecord>, sqlx::Error> {
        query_as::<Postgres, AdSpaceRecord>(LOCK_AD_SPACE_SQL)
            .bind(ad_space.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_ad_space(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ad_space: NewAdSpace,
    ) -> Result<AdSpaceRecord, sqlx::Error> {
        query_as::<Postgres, AdSpaceRecord>(CREATE_AD_SPACE_SQL)
            .bind(ad_space.uuid.into_uuid())
            .bind(ad_space.name)
            .bind(ad_space.ad_space_type.as_str())
            .bind(ad_space.city)
            .bind(ad_space.address)
            .bind(ad_space.price_per_day)
            .bind(ad_space.availability_status.as_str())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for AdSpaceRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: AdSpaceUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            ad_space_type: try_get_parsed(row, "type")?,
            city: row.try_get("city")?,
            address: row.try_get("address")?,
            price_per_day: row.try_get("price_per_day")?,
            availability_status: try_get_parsed(row, "availability_status")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
