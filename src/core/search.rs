use crate::core::distance::similarity;
use crate::models::requests::SearchRequest;
use crate::models::responses::SearchResponse;
use crate::models::{FieldWeights, Room, RoomMatch};
use tracing::debug;
use validator::Validate;

/// Separators that delimit words inside a field
const WORD_SEPARATORS: &[char] = &[' ', '-', ',', '.', ':', ';'];

/// Queries this short are compared against the whole field instead of
/// word by word
const SHORT_QUERY_CHARS: usize = 3;

/// Result of a catalog search
#[derive(Debug)]
pub struct SearchResult {
    pub matches: Vec<RoomMatch>,
    pub total_candidates: usize,
}

/// Fuzzy room search - scores every room against a free-text query
///
/// # Pipeline Stages
/// 1. Per-field match scoring (exact / word / prefix / Levenshtein)
/// 2. Weighted aggregation over the fields that cleared the threshold
/// 3. Relevance threshold cut
/// 4. Ranking and limit
#[derive(Debug, Clone)]
pub struct SearchEngine {
    weights: FieldWeights,
    threshold: f64,
}

impl SearchEngine {
    /// Rooms scoring below this relevance are dropped entirely
    pub const DEFAULT_THRESHOLD: f64 = 0.7;

    pub fn new(weights: FieldWeights, threshold: f64) -> Self {
        Self { weights, threshold }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: FieldWeights::default(),
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }

    /// Score and rank rooms against a free-text query
    ///
    /// # Arguments
    /// * `query` - Free-text search input
    /// * `rooms` - Candidate rooms from the catalog
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// SearchResult with matches sorted by descending relevance; ties keep
    /// their input order
    pub fn search(&self, query: &str, rooms: Vec<Room>, limit: usize) -> SearchResult {
        let total_candidates = rooms.len();
        let query = query.trim().to_lowercase();

        if query.is_empty() {
            return SearchResult {
                matches: Vec::new(),
                total_candidates,
            };
        }

        let mut matches: Vec<RoomMatch> = rooms
            .into_iter()
            .filter_map(|room| {
                let relevance = self.score_room(&query, &room);

                if relevance >= self.threshold {
                    Some(RoomMatch {
                        room_id: room.room_id,
                        name: room.name,
                        category: room.category,
                        nightly_price: room.nightly_price,
                        discount_percent: room.discount_percent,
                        rating: room.rating,
                        relevance,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Vec::sort_by is stable, so equal scores keep catalog order
        matches.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        matches.truncate(limit);

        debug!(
            "search for {:?} matched {} of {} rooms",
            query,
            matches.len(),
            total_candidates
        );

        SearchResult {
            matches,
            total_candidates,
        }
    }

    /// Request entry point used by the app layer
    ///
    /// Shape checks run through the request's `Validate` derive before the
    /// search itself.
    pub fn search_request(
        &self,
        request: &SearchRequest,
        rooms: Vec<Room>,
    ) -> Result<SearchResponse, validator::ValidationErrors> {
        request.validate()?;

        let result = self.search(&request.query, rooms, request.limit as usize);

        Ok(SearchResponse {
            total_results: result.matches.len(),
            matches: result.matches,
        })
    }

    /// Weighted average of per-field scores over the fields that contribute
    ///
    /// A field contributes when its weight is positive, the room has a
    /// value for it, and its own score clears the relevance threshold.
    /// Weakly-matching fields are left out rather than diluting a strong
    /// hit; a room where no field contributes scores 0.
    fn score_room(&self, query: &str, room: &Room) -> f64 {
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;

        if self.weights.name > 0.0 && !room.name.is_empty() {
            let score = score_field(query, &room.name);
            if score >= self.threshold {
                weighted_sum += score * self.weights.name;
                weight_total += self.weights.name;
            }
        }

        if self.weights.category > 0.0 && !room.category.is_empty() {
            let score = score_field(query, &room.category);
            if score >= self.threshold {
                weighted_sum += score * self.weights.category;
                weight_total += self.weights.category;
            }
        }

        if self.weights.description > 0.0 {
            if let Some(description) = room.description.as_deref() {
                if !description.is_empty() {
                    let score = score_field(query, description);
                    if score >= self.threshold {
                        weighted_sum += score * self.weights.description;
                        weight_total += self.weights.description;
                    }
                }
            }
        }

        if self.weights.amenities > 0.0 && !room.amenities.is_empty() {
            let score = score_amenities(query, &room.amenities);
            if score >= self.threshold {
                weighted_sum += score * self.weights.amenities;
                weight_total += self.weights.amenities;
            }
        }

        if weight_total > 0.0 {
            weighted_sum / weight_total
        } else {
            0.0
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Score a single field against the query (0-1)
///
/// The first rule that fires wins:
/// 1. Query is a substring of the field: 1.0
/// 2. Query equals a whole word: 1.0
/// 3. Query is a substring of some word: 0.9
/// 4. Some word starts with the query: 0.8
/// 5. Normalized Levenshtein similarity, whole-field for short queries,
///    else the best per-word score with an early exit above 0.8
pub fn score_field(query: &str, field: &str) -> f64 {
    let field = field.to_lowercase();
    let query = query.to_lowercase();

    if field.contains(&query) {
        return 1.0;
    }

    let words: Vec<&str> = field
        .split(WORD_SEPARATORS)
        .filter(|w| !w.is_empty())
        .collect();

    if words.iter().any(|w| *w == query) {
        return 1.0;
    }

    if words.iter().any(|w| w.contains(&query)) {
        return 0.9;
    }

    if words.iter().any(|w| w.starts_with(&query)) {
        return 0.8;
    }

    if query.chars().count() <= SHORT_QUERY_CHARS {
        return similarity(&query, &field);
    }

    let mut best = 0.0;
    for word in words {
        let score = similarity(&query, word);
        if score > best {
            best = score;
        }
        if best > 0.8 {
            break;
        }
    }

    best
}

/// Best score over the amenity list, short-circuiting on a perfect match
pub fn score_amenities(query: &str, amenities: &[String]) -> f64 {
    let mut best = 0.0;
    for amenity in amenities {
        let score = score_field(query, amenity);
        if score > best {
            best = score;
        }
        if best >= 1.0 {
            break;
        }
    }

    best
}
