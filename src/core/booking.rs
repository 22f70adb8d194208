use crate::core::pricing::build_quote;
use crate::core::validators::{
    card_brand, validate_card_number, validate_cvv, validate_date_range, validate_expiry,
    validate_guest_count,
};
use crate::models::{
    BookingPolicy, BookingQuote, CardBrand, DateRange, PaymentCard, Room, ValidationResult,
};
use crate::models::requests::BookingRequest;
use crate::models::responses::QuoteResponse;
use chrono::{Datelike, NaiveDate};
use thiserror::Error;
use tracing::debug;
use validator::Validate;

/// Errors produced by the booking engine
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("invalid stay: {}", .reasons.join("; "))]
    InvalidStay { reasons: Vec<String> },

    #[error("payment rejected: {}", .reasons.join("; "))]
    PaymentRejected { reasons: Vec<String> },

    #[error("invalid request: {0}")]
    InvalidRequest(#[from] validator::ValidationErrors),

    #[error("room {0} not found")]
    RoomNotFound(String),
}

/// Booking orchestrator - validates a requested stay and prices it
///
/// # Pipeline Stages
/// 1. Stay validation (date range, guest count)
/// 2. Quote construction (nights, discount, tax)
/// 3. Payment verification (card number, expiry, CVV)
#[derive(Debug, Clone)]
pub struct BookingEngine {
    policy: BookingPolicy,
}

impl BookingEngine {
    pub fn new(policy: BookingPolicy) -> Self {
        Self { policy }
    }

    pub fn with_default_policy() -> Self {
        Self {
            policy: BookingPolicy::default(),
        }
    }

    /// Validate a stay and build its price breakdown
    ///
    /// Every failing check is collected so the caller can surface all of
    /// them at once rather than one per attempt.
    pub fn quote(
        &self,
        room: &Room,
        stay: &DateRange,
        guests: u32,
        today: NaiveDate,
    ) -> Result<BookingQuote, BookingError> {
        let checks = [
            validate_date_range(
                stay.check_in,
                stay.check_out,
                today,
                self.policy.max_stay_nights,
            ),
            validate_guest_count(guests, room.max_occupancy),
        ];

        let reasons = collect_reasons(checks);
        if !reasons.is_empty() {
            return Err(BookingError::InvalidStay { reasons });
        }

        let quote = build_quote(room, stay, self.policy.tax_rate);

        debug!(
            "quoted room {} for {} nights, total {:.2}",
            quote.room_id, quote.nights, quote.total
        );

        Ok(quote)
    }

    /// Verify the card entered on the payment screen
    ///
    /// Returns the detected brand on success; all failing checks are
    /// collected into the rejection.
    pub fn verify_payment(
        &self,
        card: &PaymentCard,
        today: NaiveDate,
    ) -> Result<CardBrand, BookingError> {
        let mut reasons = Vec::new();

        push_reason(&mut reasons, validate_card_number(&card.number));
        push_reason(
            &mut reasons,
            validate_expiry(&card.expiry, today.month(), today.year()),
        );

        let brand = card_brand(&card.number);
        if let Some(brand) = brand {
            push_reason(&mut reasons, validate_cvv(&card.cvv, brand));
        }

        match brand {
            Some(brand) if reasons.is_empty() => Ok(brand),
            _ => Err(BookingError::PaymentRejected { reasons }),
        }
    }

    /// Request entry point used by the app layer
    ///
    /// Shape checks run through the request's `Validate` derive before the
    /// domain checks above.
    pub fn quote_request(
        &self,
        request: &BookingRequest,
        room: &Room,
        today: NaiveDate,
    ) -> Result<QuoteResponse, BookingError> {
        request.validate()?;

        if request.room_id != room.room_id {
            return Err(BookingError::RoomNotFound(request.room_id.clone()));
        }

        let stay = DateRange::new(request.check_in, request.check_out);
        let quote = self.quote(room, &stay, request.guests, today)?;

        Ok(QuoteResponse { quote })
    }
}

impl Default for BookingEngine {
    fn default() -> Self {
        Self::with_default_policy()
    }
}

fn collect_reasons<I: IntoIterator<Item = ValidationResult>>(checks: I) -> Vec<String> {
    let mut reasons = Vec::new();
    for check in checks {
        push_reason(&mut reasons, check);
    }
    reasons
}

fn push_reason(reasons: &mut Vec<String>, check: ValidationResult) {
    if !check.valid {
        reasons.push(check.reason.unwrap_or_else(|| "validation failed".to_string()));
    }
}
