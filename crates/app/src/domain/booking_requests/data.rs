//! Booking Request Data

use jiff::civil::Date;

use crate::domain::{
    ad_spaces::records::AdSpaceUuid, booking_requests::records::BookingRequestUuid,
};

/// New Booking Request Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookingRequest {
    pub uuid: BookingRequestUuid,
    pub ad_space_uuid: AdSpaceUuid,
    pub advertiser_name: String,
    pub advertiser_email: String,
    pub start_date: Date,
    pub end_date: Date,
}
