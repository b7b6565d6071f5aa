//! Ad Space Errors

use salvo::http::StatusError;
use tracing::error;

use adbooking_app::domain::ad_spaces::AdSpacesServiceError;

pub(crate) fn into_status_error(error: AdSpacesServiceError) -> StatusError {
    match error {
        AdSpacesServiceError::NotFound(_) => StatusError::not_found().brief(error.to_string()),
        AdSpacesServiceError::InvalidInput(message) => StatusError::bad_request().brief(message),
        AdSpacesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Ad space already exists")
        }
        AdSpacesServiceError::MissingRequiredData | AdSpacesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid ad space payload")
        }
        AdSpacesServiceError::Sql(source) => {
            error!("ad space storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
