//! Ad Space Data

use rust_decimal::Decimal;

use crate::domain::ad_spaces::records::{AdSpaceAvailabilityStatus, AdSpaceType, AdSpaceUuid};

/// New Ad Space Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewAdSpace {
    pub uuid: AdSpaceUuid,
    pub name: String,
    pub ad_space_type: AdSpaceType,
    pub city: String,
    pub address: String,
    pub price_per_day: Decimal,
    pub availability_status: AdSpaceAvailabilityStatus,
}

/// Optional constraints applied when listing available ad spaces.
///
/// `None` places no constraint on that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdSpaceFilter {
    pub ad_space_type: Option<AdSpaceType>,
    pub city: Option<String>,
}
