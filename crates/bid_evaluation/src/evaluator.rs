use serde_json::Value;
use tracing::info;

use crate::error::EvaluationError;
use crate::moora::MooraRanker;
use crate::normalizer::BidNormalizer;
use crate::types::{CriterionWeight, EvaluationResponse, TenderSpec, CRITERIA};

/// Run a full evaluation for one request.
///
/// Shape checks happen before any bid is touched: the request must be an
/// object with a `tender` object and a non-empty `bids` array. Per-bid
/// failures are absorbed by the normalizer; only request-shape problems
/// and an empty surviving batch escalate.
pub fn evaluate(request: &Value) -> Result<EvaluationResponse, EvaluationError> {
    let object = request
        .as_object()
        .ok_or_else(|| shape("request body must be a JSON object"))?;

    let tender_value = object
        .get("tender")
        .ok_or_else(|| shape("missing 'tender' section"))?;
    let bids = object
        .get("bids")
        .ok_or_else(|| shape("missing 'bids' section"))?
        .as_array()
        .ok_or_else(|| shape("'bids' must be an array"))?;
    if bids.is_empty() {
        return Err(shape("'bids' must be a non-empty list"));
    }

    let tender: TenderSpec = serde_json::from_value(tender_value.clone())
        .map_err(|e| shape(&format!("invalid 'tender' section: {}", e)))?;

    info!("Evaluating {} bids with MOORA", bids.len());

    let normalizer = BidNormalizer::new();
    let (valid_bids, skipped) = normalizer.normalize_batch(bids, &tender)?;

    let ranker = MooraRanker::new();
    let ranking = ranker.rank(valid_bids)?;

    Ok(EvaluationResponse {
        method: "MOORA",
        weights: CRITERIA
            .iter()
            .map(|c| CriterionWeight {
                name: c.name,
                weight: c.weight,
                beneficial: c.beneficial,
            })
            .collect(),
        winner: ranking.first().cloned(),
        ranking,
        skipped,
    })
}

fn shape(message: &str) -> EvaluationError {
    EvaluationError::RequestShape(message.to_string())
}
