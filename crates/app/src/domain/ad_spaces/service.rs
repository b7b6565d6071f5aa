//! Ad spaces service.

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use tracing::info;

use crate::{
    database::Db,
    domain::ad_spaces::{
        data::{AdSpaceFilter, NewAdSpace},
        errors::AdSpacesServiceError,
        records::{AdSpaceAvailabilityStatus, AdSpaceRecord, AdSpaceUuid},
        repository::PgAdSpacesRepository,
    },
};

/// Largest daily price the `NUMERIC(12, 2)` column holds.
pub const MAXIMUM_PRICE_PER_DAY: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

#[derive(Debug, Clone)]
pub struct PgAdSpacesService {
    db: Db,
    repository: PgAdSpacesRepository,
}

impl PgAdSpacesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAdSpacesRepository::new(),
        }
    }
}

#[async_trait]
impl AdSpacesService for PgAdSpacesService {
    async fn list_available_ad_spaces(
        &self,
        filter: AdSpaceFilter,
    ) -> Result<Vec<AdSpaceRecord>, AdSpacesServiceError> {
        let mut tx = self.db.begin().await?;

        let ad_spaces = self
            .repository
            .list_ad_spaces(&mut tx, AdSpaceAvailabilityStatus::Available, &filter)
            .await?;

        tx.commit().await?;

        Ok(ad_spaces)
    }

    async fn get_ad_space(
        &self,
        ad_space: AdSpaceUuid,
    ) -> Result<AdSpaceRecord, AdSpacesServiceError> {
        let mut tx = self.db.begin().await?;

        let found = self
            .repository
            .find_ad_space(&mut tx, ad_space)
            .await?
            .ok_or(AdSpacesServiceError::NotFound(ad_space))?;

        tx.commit().await?;

        Ok(found)
    }

    async fn create_ad_space(
        &self,
        ad_space: NewAdSpace,
    ) -> Result<AdSpaceRecord, AdSpacesServiceError> {
        validate_new_ad_space(&ad_space)?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_ad_space(&mut tx, ad_space).await?;

        tx.commit().await?;

        info!(ad_space_uuid = %created.uuid, name = %created.name, "created ad space");

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait AdSpacesService: Send + Sync {
    /// Lists ad spaces that are currently `AVAILABLE`, narrowed by the optional filter.
    async fn list_available_ad_spaces(
        &self,
        filter: AdSpaceFilter,
    ) -> Result<Vec<AdSpaceRecord>, AdSpacesServiceError>;

    /// Retrieve a single ad space regardless of its availability.
    async fn get_ad_space(
        &self,
        ad_space: AdSpaceUuid,
    ) -> Result<AdSpaceRecord, AdSpacesServiceError>;

    /// Registers a new ad space.
    async fn create_ad_space(
        &self,
        ad_space: NewAdSpace,
    ) -> Result<AdSpaceRecord, AdSpacesServiceError>;
}

fn validate_new_ad_space(ad_space: &NewAdSpace) -> Result<(), AdSpacesServiceError> {
    if ad_space.name.trim().is_empty() {
        return Err(AdSpacesServiceError::InvalidInput("name cannot be empty."));
    }

    if ad_space.city.trim().is_empty() {
        return Err(AdSpacesServiceError::InvalidInput("city cannot be empty."));
    }

    if ad_space.address.trim().is_empty() {
        return Err(AdSpacesServiceError::InvalidInput("address cannot be empty."));
    }

    if ad_space.price_per_day <= Decimal::ZERO {
        return Err(AdSpacesServiceError::InvalidInput(
            "price_per_day must be greater than 0.",
        ));
    }

    if ad_space.price_per_day.normalize().scale() > 2 {
        return Err(AdSpacesServiceError::InvalidInput(
            "price_per_day must have at most two decimal places.",
        ));
    }

    if ad_space.price_per_day > MAXIMUM_PRICE_PER_DAY {
        return Err(AdSpacesServiceError::InvalidInput(
            "price_per_day is too large.",
        ));
    }

    Ok(())
}
