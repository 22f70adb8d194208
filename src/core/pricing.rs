use crate::models::{BookingQuote, DateRange, Room};
use chrono::NaiveDate;

/// Whole nights between two dates
///
/// Floor of the day difference; inverted ranges clamp to zero so a
/// malformed request can never produce a negative quote.
#[inline]
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days().max(0)
}

/// Nightly rate after the promotional discount
///
/// `rate * (1 - discount/100)` when a discount applies, else the rate
/// unchanged.
#[inline]
pub fn effective_rate(nightly_price: f64, discount_percent: u8) -> f64 {
    if discount_percent > 0 {
        nightly_price * (1.0 - discount_percent as f64 / 100.0)
    } else {
        nightly_price
    }
}

/// Pre-tax total for a stay: effective nightly rate times nights
///
/// No rounding is performed; display formatting is the caller's concern.
pub fn calculate_total(
    check_in: NaiveDate,
    check_out: NaiveDate,
    nightly_price: f64,
    discount_percent: u8,
) -> f64 {
    let nights = nights_between(check_in, check_out);
    effective_rate(nightly_price, discount_percent) * nights as f64
}

/// Total with the flat tax applied on top
#[inline]
pub fn total_with_tax(total: f64, tax_rate: f64) -> f64 {
    total + total * tax_rate
}

/// Build the full price breakdown for a stay
pub fn build_quote(room: &Room, stay: &DateRange, tax_rate: f64) -> BookingQuote {
    let nights = stay.nights();
    let rate = effective_rate(room.nightly_price, room.discount_percent);
    let subtotal = rate * nights as f64;
    let tax = subtotal * tax_rate;

    BookingQuote {
        room_id: room.room_id.clone(),
        nights,
        nightly_rate: room.nightly_price,
        effective_rate: rate,
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_room(nightly_price: f64, discount_percent: u8) -> Room {
        Room {
            room_id: "room_1".to_string(),
            name: "Deluxe King".to_string(),
            category: "Deluxe".to_string(),
            nightly_price,
            discount_percent,
            max_occupancy: 2,
            description: None,
            amenities: vec![],
            rating: 4.5,
        }
    }

    #[test]
    fn test_nights_between() {
        assert_eq!(nights_between(date(2025, 6, 1), date(2025, 6, 4)), 3);
        assert_eq!(nights_between(date(2025, 6, 1), date(2025, 6, 1)), 0);
        // Inverted range clamps instead of going negative
        assert_eq!(nights_between(date(2025, 6, 4), date(2025, 6, 1)), 0);
    }

    #[test]
    fn test_effective_rate_with_discount() {
        assert_eq!(effective_rate(100.0, 10), 90.0);
        assert_eq!(effective_rate(100.0, 0), 100.0);
        assert_eq!(effective_rate(80.0, 25), 60.0);
    }

    #[test]
    fn test_calculate_total_three_nights_discounted() {
        // 3 nights at 100/night with 10% off = 270
        let total = calculate_total(date(2025, 6, 1), date(2025, 6, 4), 100.0, 10);
        assert_eq!(total, 270.0);
    }

    #[test]
    fn test_calculate_total_zero_nights() {
        let total = calculate_total(date(2025, 6, 1), date(2025, 6, 1), 100.0, 10);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_total_with_tax() {
        assert_eq!(total_with_tax(270.0, 0.10), 297.0);
        assert_eq!(total_with_tax(0.0, 0.10), 0.0);
    }

    #[test]
    fn test_build_quote_breakdown() {
        let room = create_test_room(100.0, 10);
        let stay = DateRange::new(date(2025, 6, 1), date(2025, 6, 4));

        let quote = build_quote(&room, &stay, 0.10);

        assert_eq!(quote.nights, 3);
        assert_eq!(quote.nightly_rate, 100.0);
        assert_eq!(quote.effective_rate, 90.0);
        assert_eq!(quote.subtotal, 270.0);
        assert_eq!(quote.tax, 27.0);
        assert_eq!(quote.total, 297.0);
    }

    #[test]
    fn test_build_quote_no_discount() {
        let room = create_test_room(150.0, 0);
        let stay = DateRange::new(date(2025, 6, 1), date(2025, 6, 3));

        let quote = build_quote(&room, &stay, 0.10);

        assert_eq!(quote.effective_rate, 150.0);
        assert_eq!(quote.subtotal, 300.0);
        assert_eq!(quote.total, 330.0);
    }
}
