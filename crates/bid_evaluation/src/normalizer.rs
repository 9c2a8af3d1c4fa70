use serde_json::{json, Map, Value};
use tracing::warn;

use crate::duration::duration_days;
use crate::error::{BidError, EvaluationError};
use crate::keyword_scorer::{Category, KeywordScorer};
use crate::types::{RawBid, TenderSpec, ValidBid};

/// Validates raw bid records and extracts the fixed 7-dimensional
/// feature vector from each, in [`crate::types::CRITERIA`] order:
/// [cost, experience, workforce, timeline, safety, material, environment].
pub struct BidNormalizer {
    scorer: KeywordScorer,
}

impl BidNormalizer {
    pub fn new() -> Self {
        Self {
            scorer: KeywordScorer::new(),
        }
    }

    /// Normalize a whole batch. Malformed bids are logged and excluded;
    /// the batch fails only when zero bids survive.
    ///
    /// Returns the valid bids plus the count of skipped ones.
    pub fn normalize_batch(
        &self,
        bids: &[Value],
        tender: &TenderSpec,
    ) -> Result<(Vec<ValidBid>, usize), EvaluationError> {
        let mut valid = Vec::with_capacity(bids.len());
        let mut skipped = 0;

        for (index, bid) in bids.iter().enumerate() {
            match self.normalize(bid, tender) {
                Ok(valid_bid) => valid.push(valid_bid),
                Err(e) => {
                    skipped += 1;
                    warn!("⚠️ Skipping bid {}: {}", index, e);
                }
            }
        }

        if valid.is_empty() {
            return Err(EvaluationError::NoValidBids);
        }
        Ok((valid, skipped))
    }

    /// Normalize a single bid against the tender's defaults.
    pub fn normalize(&self, bid: &Value, tender: &TenderSpec) -> Result<ValidBid, BidError> {
        let raw: RawBid = serde_json::from_value(bid.clone()).map_err(|e| BidError::Validation {
            field: "bid",
            reason: format!("is not a valid bid record: {}", e),
        })?;

        let bidder = required_string(&raw.bidder, "bidder")?;
        let company_name = required_string(&raw.company_name, "companyName")?;
        let budget = required_number(&raw.budget, "budget")?;
        let experience = required_number(&raw.required_experience, "requiredExperience")?;
        let workforce = required_number(&raw.workforce_size, "workforceSize")?;

        let start = required_string(&raw.project_start_time, "projectStartTime")?;
        let end = required_string(&raw.project_end_time, "projectEndTime")?;
        let duration = duration_days(&start, &end)?;

        let safety_text = qualitative_text(&raw.safety_standards, &tender.safety_standards);
        let material_text = qualitative_text(&raw.material_quality, &tender.material_quality);
        let environment_text =
            qualitative_text(&raw.environmental_impact, &tender.environmental_impact);

        let safety = self.scorer.score(safety_text, Category::Safety);
        let material = self.scorer.score(material_text, Category::Material);
        let environment = self.scorer.score(environment_text, Category::Environment);

        let mut details = Map::new();
        details.insert("cost".to_string(), json!(budget));
        details.insert("experience".to_string(), json!(experience));
        details.insert("workforce".to_string(), json!(workforce));
        details.insert("timeline".to_string(), json!(format!("{} days", duration)));
        details.insert("safety".to_string(), qualitative_detail(safety_text, safety));
        details.insert("material".to_string(), qualitative_detail(material_text, material));
        details.insert(
            "environment".to_string(),
            qualitative_detail(environment_text, environment),
        );

        Ok(ValidBid {
            bidder,
            company_name,
            features: [
                budget,
                experience,
                workforce,
                duration as f64,
                safety as f64,
                material as f64,
                environment as f64,
            ],
            details,
        })
    }
}

impl Default for BidNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Bid free text when the field is present (non-string values score as
/// absent text), tender default otherwise.
fn qualitative_text<'a>(bid_field: &'a Option<Value>, tender_field: &'a Option<String>) -> Option<&'a str> {
    match bid_field {
        Some(value) => value.as_str(),
        None => tender_field.as_deref(),
    }
}

fn qualitative_detail(text: Option<&str>, score: i32) -> Value {
    json!({
        "description": text.unwrap_or("not provided"),
        "score": score,
    })
}

fn required_string(field: &Option<String>, name: &'static str) -> Result<String, BidError> {
    field.clone().ok_or(BidError::Validation {
        field: name,
        reason: "is missing".to_string(),
    })
}

fn required_number(field: &Option<Value>, name: &'static str) -> Result<f64, BidError> {
    let value = field.as_ref().ok_or(BidError::Validation {
        field: name,
        reason: "is missing".to_string(),
    })?;
    match value {
        Value::Number(n) => n.as_f64().ok_or(BidError::Validation {
            field: name,
            reason: "is not representable as a real number".to_string(),
        }),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| BidError::Validation {
            field: name,
            reason: format!("is not numeric: '{}'", s),
        }),
        other => Err(BidError::Validation {
            field: name,
            reason: format!("has unexpected type: {}", other),
        }),
    }
}
