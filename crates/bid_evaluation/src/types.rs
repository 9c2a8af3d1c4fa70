use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of evaluation criteria. Every feature row has exactly this
/// many entries, in the order of [`CRITERIA`].
pub const CRITERIA_COUNT: usize = 7;

/// Whether a criterion's raw value comes from a numeric bid field or
/// from keyword-scored free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionKind {
    Quantitative,
    Qualitative,
}

/// A single evaluation criterion in the fixed seven-criterion set.
#[derive(Debug, Clone, Copy)]
pub struct Criterion {
    pub name: &'static str,
    pub kind: CriterionKind,
    /// Relative importance. The seven weights sum to 1.0 by convention;
    /// scores are only comparable while that holds.
    pub weight: f64,
    /// True when a higher raw value is more favourable.
    pub beneficial: bool,
}

/// Fixed criterion table shared by the normalizer and the ranker.
///
/// Column order in every feature row follows this table, so the two
/// components never depend on map iteration order to agree.
pub static CRITERIA: [Criterion; CRITERIA_COUNT] = [
    Criterion { name: "cost", kind: CriterionKind::Quantitative, weight: 0.25, beneficial: false },
    Criterion { name: "experience", kind: CriterionKind::Quantitative, weight: 0.15, beneficial: true },
    Criterion { name: "workforce", kind: CriterionKind::Quantitative, weight: 0.10, beneficial: true },
    Criterion { name: "timeline", kind: CriterionKind::Quantitative, weight: 0.15, beneficial: false },
    Criterion { name: "safety", kind: CriterionKind::Qualitative, weight: 0.15, beneficial: true },
    Criterion { name: "material", kind: CriterionKind::Qualitative, weight: 0.10, beneficial: true },
    Criterion { name: "environment", kind: CriterionKind::Qualitative, weight: 0.10, beneficial: true },
];

/// Tender specification supplied alongside the bid list.
///
/// The free-text fields are the fallback inputs for qualitative scoring
/// when a bid omits its own description.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TenderSpec {
    pub budget: Option<Value>,
    pub required_experience: Option<Value>,
    pub workforce_size: Option<Value>,
    pub completion_deadline: Option<String>,
    pub safety_standards: Option<String>,
    pub material_quality: Option<String>,
    pub environmental_impact: Option<String>,
}

/// Raw bid record as submitted by a bidder.
///
/// Every field is optional at the wire level so that one malformed bid
/// deserializes leniently and fails inside the normalizer, where the
/// failure is scoped to that bid alone. Numeric fields stay as JSON
/// values because bid forms submit them either as numbers or as
/// `parseFloat`-able strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawBid {
    pub bidder: Option<String>,
    pub company_name: Option<String>,
    pub budget: Option<Value>,
    pub required_experience: Option<Value>,
    pub workforce_size: Option<Value>,
    pub project_start_time: Option<String>,
    pub project_end_time: Option<String>,
    pub safety_standards: Option<Value>,
    pub material_quality: Option<Value>,
    pub environmental_impact: Option<Value>,
}

/// A bid that survived normalization: identifiers, the 7-element feature
/// row in [`CRITERIA`] order, and a human-readable per-criterion details
/// map for reporting.
#[derive(Debug, Clone)]
pub struct ValidBid {
    pub bidder: String,
    pub company_name: String,
    pub features: [f64; CRITERIA_COUNT],
    pub details: serde_json::Map<String, Value>,
}

/// One entry of the final ranking.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedBid {
    /// 1-based dense rank; rank 1 is the winner.
    pub rank: usize,
    pub bidder: String,
    pub company_name: String,
    /// Net MOORA score, rounded to 4 decimal places for reporting.
    pub score: f64,
    pub details: serde_json::Map<String, Value>,
}

/// One row of the criteria weight table echoed back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct CriterionWeight {
    pub name: &'static str,
    pub weight: f64,
    pub beneficial: bool,
}

/// Structured evaluation result returned to the transport boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResponse {
    pub method: &'static str,
    pub weights: Vec<CriterionWeight>,
    /// The rank-1 bid, or explicit null when no winner exists.
    pub winner: Option<RankedBid>,
    pub ranking: Vec<RankedBid>,
    /// How many submitted bids failed validation and were excluded.
    pub skipped: usize,
}
