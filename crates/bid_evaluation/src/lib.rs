//! MOORA-based procurement bid evaluation engine.
//!
//! Converts heterogeneous bid attributes (numeric fields and free-text
//! qualitative descriptions) into a single comparable ranking per bidder:
//! free text is keyword-scored against static lexicons, timestamps become
//! project durations, each valid bid becomes a 7-dimensional feature row,
//! and the MOORA ranker nets weighted beneficial columns against
//! non-beneficial ones.

pub mod duration;
pub mod error;
pub mod evaluator;
pub mod keyword_scorer;
pub mod moora;
pub mod normalizer;
pub mod types;

pub use error::{BidError, EvaluationError};
pub use evaluator::evaluate;
pub use keyword_scorer::{Category, KeywordScorer, NEUTRAL_SCORE};
pub use moora::MooraRanker;
pub use normalizer::BidNormalizer;
pub use types::{
    Criterion, CriterionKind, EvaluationResponse, RankedBid, RawBid, TenderSpec, ValidBid,
    CRITERIA, CRITERIA_COUNT,
};
