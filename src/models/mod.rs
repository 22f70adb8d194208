// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BookingPolicy, BookingQuote, CardBrand, DateRange, FieldWeights, PaymentCard, Room, RoomMatch,
    ValidationResult,
};
pub use requests::{BookingRequest, SearchRequest};
pub use responses::{ErrorResponse, QuoteResponse, SearchResponse};
