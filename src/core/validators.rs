use crate::models::{CardBrand, ValidationResult};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref VISA: Regex = Regex::new(r"^4[0-9]{12}(?:[0-9]{3})?$").unwrap();
    static ref MASTERCARD: Regex = Regex::new(r"^5[1-5][0-9]{14}$").unwrap();
    static ref AMEX: Regex = Regex::new(r"^3[47][0-9]{13}$").unwrap();
    static ref DISCOVER: Regex = Regex::new(r"^6(?:011|5[0-9]{2})[0-9]{12}$").unwrap();
}

/// Validate a requested stay against today's date and the stay policy
///
/// Check-in must not be in the past, check-out must be strictly after
/// check-in, and the span must not exceed `max_nights`.
pub fn validate_date_range(
    check_in: NaiveDate,
    check_out: NaiveDate,
    today: NaiveDate,
    max_nights: i64,
) -> ValidationResult {
    if check_in < today {
        return ValidationResult::fail("check-in date is in the past");
    }

    if check_out <= check_in {
        return ValidationResult::fail("check-out must be after check-in");
    }

    if (check_out - check_in).num_days() > max_nights {
        return ValidationResult::fail(format!(
            "stay exceeds the maximum of {} nights",
            max_nights
        ));
    }

    ValidationResult::pass()
}

/// Validate the guest count against the room's capacity
#[inline]
pub fn validate_guest_count(guests: u32, capacity: u32) -> ValidationResult {
    if guests == 0 {
        return ValidationResult::fail("at least one guest is required");
    }

    if guests > capacity {
        return ValidationResult::fail(format!("room sleeps at most {} guests", capacity));
    }

    ValidationResult::pass()
}

/// Detect the card brand from the number's prefix
///
/// Spaces and dashes are stripped before matching.
pub fn card_brand(raw: &str) -> Option<CardBrand> {
    let cleaned = sanitize_card(raw);

    if VISA.is_match(&cleaned) {
        Some(CardBrand::Visa)
    } else if MASTERCARD.is_match(&cleaned) {
        Some(CardBrand::Mastercard)
    } else if AMEX.is_match(&cleaned) {
        Some(CardBrand::Amex)
    } else if DISCOVER.is_match(&cleaned) {
        Some(CardBrand::Discover)
    } else {
        None
    }
}

/// Validate a card number: recognized brand prefix and Luhn checksum
pub fn validate_card_number(raw: &str) -> ValidationResult {
    let cleaned = sanitize_card(raw);

    if card_brand(&cleaned).is_none() {
        return ValidationResult::fail("card number is not a recognized Visa, Mastercard, Amex, or Discover number");
    }

    if !luhn_check(&cleaned) {
        return ValidationResult::fail("card number fails checksum");
    }

    ValidationResult::pass()
}

/// Validate an MM/YY expiry against the current month
///
/// Two-digit years are interpreted as 2000-2099.
pub fn validate_expiry(raw: &str, now_month: u32, now_year: i32) -> ValidationResult {
    let Some((month_str, year_str)) = raw.split_once('/') else {
        return ValidationResult::fail("expiry must be in MM/YY format");
    };

    if month_str.len() != 2 || year_str.len() != 2 {
        return ValidationResult::fail("expiry must be in MM/YY format");
    }

    let (Ok(month), Ok(year)) = (month_str.parse::<u32>(), year_str.parse::<i32>()) else {
        return ValidationResult::fail("expiry must be in MM/YY format");
    };

    if !(1..=12).contains(&month) {
        return ValidationResult::fail("expiry month must be between 01 and 12");
    }

    if (2000 + year) * 12 + (month as i32) < now_year * 12 + (now_month as i32) {
        return ValidationResult::fail("card is expired");
    }

    ValidationResult::pass()
}

/// Validate a CVV for the given brand: 4 digits for Amex, 3 otherwise
pub fn validate_cvv(cvv: &str, brand: CardBrand) -> ValidationResult {
    let expected = match brand {
        CardBrand::Amex => 4,
        _ => 3,
    };

    if cvv.len() != expected || !cvv.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::fail(format!("CVV must be {} digits", expected));
    }

    ValidationResult::pass()
}

/// Strip the separators users type into card numbers
#[inline]
fn sanitize_card(raw: &str) -> String {
    raw.chars().filter(|c| *c != ' ' && *c != '-').collect()
}

/// Luhn checksum: double every second digit from the right, subtracting 9
/// when the doubled digit exceeds 9; the sum must be divisible by 10
fn luhn_check(number: &str) -> bool {
    let digits: Vec<u32> = match number
        .chars()
        .map(|c| c.to_digit(10).ok_or(()))
        .collect::<Result<_, _>>()
    {
        Ok(d) => d,
        Err(()) => return false,
    };

    if digits.is_empty() {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}
