//! Roomly Core - booking quote and room search engine for the Roomly hotel app
//!
//! This library provides the domain core behind the Roomly booking app:
//! stay and payment validation, price quoting, and fuzzy room search.
//! Everything here is pure and synchronous; the app layer owns all I/O.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    distance::{levenshtein, similarity},
    BookingEngine, BookingError, SearchEngine, SearchResult,
};
pub use crate::models::{
    BookingPolicy, BookingQuote, CardBrand, DateRange, FieldWeights, PaymentCard, Room, RoomMatch,
    SearchRequest, SearchResponse, ValidationResult,
};
