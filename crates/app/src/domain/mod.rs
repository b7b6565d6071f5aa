//! Ad Booking Domain Concerns

use thiserror::Error;

pub mod ad_spaces;
pub mod booking_requests;

/// A stored or submitted value that is not a member of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariantError {
    /// Name of the enumeration being parsed.
    pub kind: &'static str,

    /// The rejected input.
    pub value: String,
}

impl UnknownVariantError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
