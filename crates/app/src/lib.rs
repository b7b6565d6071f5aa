//! Ad space booking domain, persistence and service wiring.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
