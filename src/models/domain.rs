use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Room record from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "roomId")]
    pub room_id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "nightlyPrice")]
    pub nightly_price: f64,
    #[serde(rename = "discountPercent", default)]
    pub discount_percent: u8,
    #[serde(rename = "maxOccupancy")]
    pub max_occupancy: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub rating: f64,
}

impl Room {
    /// Helper to check whether a promotional discount applies
    pub fn discounted(&self) -> bool {
        self.discount_percent > 0
    }
}

/// A requested stay: check-in and check-out, date-only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "checkIn")]
    pub check_in: NaiveDate,
    #[serde(rename = "checkOut")]
    pub check_out: NaiveDate,
}

impl DateRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self { check_in, check_out }
    }

    /// Whole nights between check-in and check-out; inverted ranges clamp to zero
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }
}

/// Outcome of a single validation check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self { valid: true, reason: None }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Card network accepted at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Discover,
}

/// Card details entered on the payment screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCard {
    #[serde(rename = "cardNumber")]
    pub number: String,
    /// MM/YY
    pub expiry: String,
    pub cvv: String,
}

/// Price breakdown for a stay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingQuote {
    #[serde(rename = "roomId")]
    pub room_id: String,
    pub nights: i64,
    #[serde(rename = "nightlyRate")]
    pub nightly_rate: f64,
    #[serde(rename = "effectiveRate")]
    pub effective_rate: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Scored search hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomMatch {
    #[serde(rename = "roomId")]
    pub room_id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "nightlyPrice")]
    pub nightly_price: f64,
    #[serde(rename = "discountPercent")]
    pub discount_percent: u8,
    pub rating: f64,
    pub relevance: f64,
}

/// Per-field relevance weights
#[derive(Debug, Clone, Copy)]
pub struct FieldWeights {
    pub name: f64,
    pub category: f64,
    pub description: f64,
    pub amenities: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: 1.0,
            category: 0.7,
            description: 0.5,
            amenities: 0.6,
        }
    }
}

/// Booking policy limits
#[derive(Debug, Clone, Copy)]
pub struct BookingPolicy {
    pub max_stay_nights: i64,
    pub tax_rate: f64,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            max_stay_nights: 30,
            tax_rate: 0.10,
        }
    }
}
