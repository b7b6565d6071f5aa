//! Get Ad Space Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    ad_spaces::{errors::into_status_error, handlers::AdSpaceResponse},
    extensions::*,
    state::State,
};

/// Get Ad Space Handler
///
/// Returns an ad space whatever its availability.
#[endpoint(
    tags("ad-spaces"),
    summary = "Get Ad Space",
    responses(
        (status_code = StatusCode::OK, description = "Ad space found"),
        (status_code = StatusCode::NOT_FOUND, description = "Ad space not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    ad_space: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<AdSpaceResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let ad_space = state
        .app
        .ad_spaces
        .get_ad_space(ad_space.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ad_space.into()))
}
