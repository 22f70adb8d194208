// Unit tests for Roomly Core

use chrono::NaiveDate;
use roomly_core::core::{
    distance::{levenshtein, similarity},
    pricing::{calculate_total, total_with_tax},
    search::score_field,
    validators::{validate_card_number, validate_date_range, validate_guest_count},
};
use roomly_core::models::{FieldWeights, Room};
use roomly_core::SearchEngine;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn create_room(id: &str, name: &str, category: &str) -> Room {
    Room {
        room_id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        nightly_price: 150.0,
        discount_percent: 0,
        max_occupancy: 2,
        description: Some("Bright room overlooking the garden".to_string()),
        amenities: vec!["Wifi".to_string(), "Minibar".to_string()],
        rating: 4.3,
    }
}

#[test]
fn test_levenshtein_known_distances() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(levenshtein("suite", "suite"), 0);
    assert_eq!(levenshtein("", "room"), 4);
}

#[test]
fn test_similarity_is_normalized() {
    let s = similarity("kitten", "sitting");
    assert!((s - (1.0 - 3.0 / 7.0)).abs() < 1e-9);
}

#[test]
fn test_date_range_valid_window_passes() {
    let result = validate_date_range(date(2025, 7, 1), date(2025, 7, 8), date(2025, 6, 20), 30);
    assert!(result.is_valid());
}

#[test]
fn test_date_range_same_day_fails() {
    let today = date(2025, 7, 1);
    assert!(!validate_date_range(today, today, today, 30).is_valid());
}

#[test]
fn test_date_range_past_checkin_fails() {
    let result = validate_date_range(date(2025, 6, 10), date(2025, 6, 12), date(2025, 6, 20), 30);
    assert!(!result.is_valid());
}

#[test]
fn test_date_range_long_stay_fails() {
    let result = validate_date_range(date(2025, 7, 1), date(2025, 8, 15), date(2025, 6, 20), 30);
    assert!(!result.is_valid());
}

#[test]
fn test_guest_count_capacity_message() {
    let result = validate_guest_count(3, 2);
    assert!(!result.is_valid());
    assert!(result.reason.unwrap().contains('2'));
}

#[test]
fn test_card_number_luhn() {
    // Known test Visa number
    assert!(validate_card_number("4111111111111111").is_valid());
    // Same number with the last digit bumped fails the checksum
    assert!(!validate_card_number("4111111111111112").is_valid());
}

#[test]
fn test_calculate_total_discounted() {
    // 3 nights at 100/night with 10% off
    let total = calculate_total(date(2025, 7, 1), date(2025, 7, 4), 100.0, 10);
    assert_eq!(total, 270.0);
    assert_eq!(total_with_tax(total, 0.10), 297.0);
}

#[test]
fn test_calculate_total_zero_nights_is_zero() {
    let total = calculate_total(date(2025, 7, 1), date(2025, 7, 1), 100.0, 10);
    assert_eq!(total, 0.0);
}

#[test]
fn test_score_field_prefers_exact_over_fuzzy() {
    let exact = score_field("garden", "Garden Suite");
    let fuzzy = score_field("gardon", "Garden Suite");
    assert_eq!(exact, 1.0);
    assert!(fuzzy < exact);
}

#[test]
fn test_search_exact_name_ranks_first() {
    let engine = SearchEngine::with_default_weights();
    let rooms = vec![
        create_room("1", "Garden Suite", "Suite"),
        create_room("2", "Presidential Suite", "Suite"),
        create_room("3", "Standard Twin", "Standard"),
    ];

    let result = engine.search("Presidential Suite", rooms, 10);

    assert_eq!(result.matches[0].room_id, "2");
    assert_eq!(result.matches[0].relevance, 1.0);
}

#[test]
fn test_search_unrelated_query_is_empty() {
    let engine = SearchEngine::with_default_weights();
    let rooms = vec![
        create_room("1", "Garden Suite", "Suite"),
        create_room("2", "Standard Twin", "Standard"),
    ];

    let result = engine.search("qqqqwwwweeeerrrrtttt", rooms, 10);

    assert!(result.matches.is_empty());
}

#[test]
fn test_search_twice_is_identical() {
    let engine = SearchEngine::with_default_weights();
    let rooms: Vec<Room> = (0..10)
        .map(|i| create_room(&i.to_string(), "Garden Suite", "Suite"))
        .collect();

    let first = engine.search("garden", rooms.clone(), 10);
    let second = engine.search("garden", rooms, 10);

    let first_ids: Vec<_> = first.matches.iter().map(|m| m.room_id.clone()).collect();
    let second_ids: Vec<_> = second.matches.iter().map(|m| m.room_id.clone()).collect();
    assert_eq!(first_ids, second_ids);
}

#[test]
fn test_custom_weights_change_ranking() {
    // Name-only weights ignore a category hit entirely
    let weights = FieldWeights {
        name: 1.0,
        category: 0.0,
        description: 0.0,
        amenities: 0.0,
    };
    let engine = SearchEngine::new(weights, SearchEngine::DEFAULT_THRESHOLD);

    let mut by_category = create_room("1", "Standard Twin", "Suite");
    by_category.amenities = vec![];
    by_category.description = None;

    let result = engine.search("suite", vec![by_category], 10);

    assert!(result.matches.is_empty());
}
