//! Ad Space Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::UnknownVariantError, uuids::TypedUuid};

/// Ad Space UUID
pub type AdSpaceUuid = TypedUuid<AdSpaceRecord>;

/// Kind of physical advertising location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdSpaceType {
    Billboard,
    BusStop,
    MallDisplay,
    TransitAd,
}

impl AdSpaceType {
    /// Every ad space type, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Billboard,
        Self::BusStop,
        Self::MallDisplay,
        Self::TransitAd,
    ];

    /// Stored and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Billboard => "BILLBOARD",
            Self::BusStop => "BUS_STOP",
            Self::MallDisplay => "MALL_DISPLAY",
            Self::TransitAd => "TRANSIT_AD",
        }
    }
}

impl fmt::Display for AdSpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdSpaceType {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownVariantError::new("ad space type", s))
    }
}

/// Coarse on/off bookability switch for an ad space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdSpaceAvailabilityStatus {
    Available,
    Booked,
    Maintenance,
}

impl AdSpaceAvailabilityStatus {
    /// Every availability status, in declaration order.
    pub const ALL: [Self; 3] = [Self::Available, Self::Booked, Self::Maintenance];

    /// Stored and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Booked => "BOOKED",
            Self::Maintenance => "MAINTENANCE",
        }
    }
}

impl fmt::Display for AdSpaceAvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdSpaceAvailabilityStatus {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariantError::new("ad space availability status", s))
    }
}

/// Ad Space Record
#[derive(Debug, Clone, PartialEq)]
pub struct AdSpaceRecord {
    /// Public identifier.
    pub uuid: AdSpaceUuid,

    /// Display name.
    pub name: String,

    /// Kind of location.
    pub ad_space_type: AdSpaceType,

    /// City the space is located in.
    pub city: String,

    /// Street address.
    pub address: String,

    /// Rental price for one day, always positive.
    pub price_per_day: Decimal,

    /// Whether the space currently accepts bookings.
    pub availability_status: AdSpaceAvailabilityStatus,

    /// Creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}

impl AdSpaceRecord {
    /// Whether new booking requests may target this space.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.availability_status == AdSpaceAvailabilityStatus::Available
    }
}
