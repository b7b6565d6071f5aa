//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        ad_spaces::{AdSpacesService, PgAdSpacesService},
        booking_requests::{BookingRequestsService, PgBookingRequestsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// Services shared by every inbound surface.
#[derive(Clone)]
pub struct AppContext {
    pub ad_spaces: Arc<dyn AdSpacesService>,
    pub booking_requests: Arc<dyn BookingRequestsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails, or when
    /// `run_migrations` is set and a migration cannot be applied.
    pub async fn from_database_url(
        url: &str,
        max_connections: u32,
        run_migrations: bool,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect_with(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;

            info!("database migrations applied");
        }

        Ok(Self::from_db(Db::new(pool)))
    }

    /// Wire the `PostgreSQL` services over an existing pool.
    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            ad_spaces: Arc::new(PgAdSpacesService::new(db.clone())),
            booking_requests: Arc::new(PgBookingRequestsService::new(db)),
        }
    }
}
