//! Ad Spaces

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::AdSpacesServiceError;
pub(crate) use repository::PgAdSpacesRepository;
pub use service::*;
