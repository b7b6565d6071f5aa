//! Ad spaces service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::ad_spaces::records::AdSpaceUuid;

#[derive(Debug, Error)]
pub enum AdSpacesServiceError {
    #[error("ad space already exists")]
    AlreadyExists,

    #[error("Ad space with uuid {0} not found")]
    NotFound(AdSpaceUuid),

    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AdSpacesServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_uuid() -> Result<(), uuid::Error> {
        let uuid: AdSpaceUuid = "0195a7a4-4c2e-7c3a-9b1e-2f3d4c5b6a79".parse()?;

        assert_eq!(
            AdSpacesServiceError::NotFound(uuid).to_string(),
            "Ad space with uuid 0195a7a4-4c2e-7c3a-9b1e-2f3d4c5b6a79 not found"
        );

        Ok(())
    }

    #[test]
    fn row_not_found_is_a_storage_error() {
        assert!(matches!(
            AdSpacesServiceError::from(Error::RowNotFound),
            AdSpacesServiceError::Sql(_)
        ));
    }
}
