use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to search the room catalog
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1))]
    pub query: String,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    20
}

/// Request to quote a stay
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "room_id", rename = "roomId")]
    pub room_id: String,
    #[serde(alias = "check_in", rename = "checkIn")]
    pub check_in: NaiveDate,
    #[serde(alias = "check_out", rename = "checkOut")]
    pub check_out: NaiveDate,
    #[validate(range(min = 1))]
    pub guests: u32,
}
