use crate::models::domain::{BookingQuote, RoomMatch};
use serde::{Deserialize, Serialize};

/// Response for a catalog search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub matches: Vec<RoomMatch>,
    pub total_results: usize,
}

/// Response for a stay quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub quote: BookingQuote,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
