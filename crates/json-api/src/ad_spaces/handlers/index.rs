//! Ad Space Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use adbooking_app::domain::ad_spaces::{data::AdSpaceFilter, records::AdSpaceType};

use crate::{
    ad_spaces::{errors::into_status_error, handlers::AdSpaceResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdSpacesResponse {
    /// Available ad spaces, oldest first
    pub ad_spaces: Vec<AdSpaceResponse>,
}

fn parse_filter(req: &Request) -> Result<AdSpaceFilter, StatusError> {
    let ad_space_type = req
        .query::<String>("type")
        .map(|value| value.parse::<AdSpaceType>())
        .transpose()
        .or_400("type must be one of BILLBOARD, BUS_STOP, MALL_DISPLAY, TRANSIT_AD")?;

    Ok(AdSpaceFilter {
        ad_space_type,
        city: req.query::<String>("city"),
    })
}

/// Ad Space Index Handler
///
/// Lists ad spaces that are open for booking. `type` and `city` narrow the list by exact match.
#[endpoint(
    tags("ad-spaces"),
    summary = "List Available Ad Spaces",
    responses(
        (status_code = StatusCode::OK, description = "Available ad spaces"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown ad space type"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<AdSpacesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let filter = parse_filter(req)?;

    let ad_spaces = state
        .app
        .ad_spaces
        .list_available_ad_spaces(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(AdSpacesResponse {
        ad_spaces: ad_spaces.into_iter().map(Into::into).collect(),
    }))
}
