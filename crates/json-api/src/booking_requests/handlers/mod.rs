//! Booking Request Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use adbooking_app::domain::booking_requests::records::BookingRequestRecord;

pub(crate) mod approve;
pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod reject;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingRequestResponse {
    /// The unique identifier of the booking request
    pub uuid: Uuid,

    /// The booked ad space
    pub ad_space_uuid: Uuid,
    pub ad_space_name: String,

    pub advertiser_name: String,
    pub advertiser_email: String,

    /// First booked day (YYYY-MM-DD)
    pub start_date: String,

    /// Last booked day (YYYY-MM-DD)
    pub end_date: String,

    /// PENDING, APPROVED or REJECTED
    pub status: String,

    /// Total price as a decimal string, e.g. "700.00"
    pub total_cost: String,

    pub created_at: String,
    pub updated_at: String,
}

impl From<BookingRequestRecord> for BookingRequestResponse {
    fn from(booking_request: BookingRequestRecord) -> Self {
        BookingRequestResponse {
            uuid: booking_request.uuid.into(),
            ad_space_uuid: booking_request.ad_space_uuid.into(),
            ad_space_name: booking_request.ad_space_name,
            advertiser_name: booking_request.advertiser_name,
            advertiser_email: booking_request.advertiser_email,
            start_date: booking_request.start_date.to_string(),
            end_date: booking_request.end_date.to_string(),
            status: booking_request.status.to_string(),
            total_cost: format!("{:.2}", booking_request.total_cost),
            created_at: booking_request.created_at.to_string(),
            updated_at: booking_request.updated_at.to_string(),
        }
    }
}
