//! Depot helper extensions.

use std::any::{Any, type_name};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

/// Fetch injected state, answering 500 when it is missing.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_ignored| {
            error!("{} was not injected into the depot", type_name::<T>());

            StatusError::internal_server_error()
        })
    }
}
