//! Ad Space Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use adbooking_app::domain::ad_spaces::records::AdSpaceRecord;

pub(crate) mod get;
pub(crate) mod index;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdSpaceResponse {
    /// The unique identifier of the ad space
    pub uuid: Uuid,

    pub name: String,

    /// BILLBOARD, BUS_STOP, MALL_DISPLAY or TRANSIT_AD
    #[serde(rename = "type")]
    pub ad_space_type: String,

    pub city: String,
    pub address: String,

    /// Daily price as a decimal string, e.g. "100.00"
    pub price_per_day: String,

    /// AVAILABLE, BOOKED or MAINTENANCE
    pub availability_status: String,

    /// The date and time the ad space was created
    pub created_at: String,

    /// The date and time the ad space was last updated
    pub updated_at: String,
}

impl From<AdSpaceRecord> for AdSpaceResponse {
    fn from(ad_space: AdSpaceRecord) -> Self {
        AdSpaceResponse {
            uuid: ad_space.uuid.into(),
            name: ad_space.name,
            ad_space_type: ad_space.ad_space_type.to_string(),
            city: ad_space.city,
            address: ad_space.address,
            price_per_day: format!("{:.2}", ad_space.price_per_day),
            availability_status: ad_space.availability_status.to_string(),
            created_at: ad_space.created_at.to_string(),
            updated_at: ad_space.updated_at.to_string(),
        }
    }
}
