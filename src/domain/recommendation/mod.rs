//! Recommendation Module - Candidate scoring and per-line ranking.
//!
//! Pure domain services: given one order line, the shipping coordinate,
//! the candidate vendors able to supply the line's menu item, and the
//! current scoring configuration snapshot, produce the ranked candidate
//! list and the chosen vendor. Candidate retrieval and configuration
//! loading live behind ports; nothing here performs I/O.

mod candidate;
mod rank;
mod result;
mod scorer;

pub use candidate::{OrderLine, VendorCandidate};
pub use rank::rank_line;
pub use result::{LineRecommendation, OrderRecommendation, ScoredVendor};
pub use scorer::composite_score;
