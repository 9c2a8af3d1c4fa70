use std::cmp::Ordering;

use tracing::info;

use crate::error::EvaluationError;
use crate::types::{Criterion, RankedBid, ValidBid, CRITERIA, CRITERIA_COUNT};

/// Multi-Objective Optimization by Ratio Analysis over the fixed
/// seven-criterion decision matrix.
///
/// Per column: ratio normalization (entry/max for beneficial columns,
/// min/entry for non-beneficial), weighting, then a net score of
/// weighted beneficial sums minus weighted non-beneficial sums.
pub struct MooraRanker {
    criteria: &'static [Criterion; CRITERIA_COUNT],
}

impl MooraRanker {
    pub fn new() -> Self {
        Self { criteria: &CRITERIA }
    }

    /// Rank the valid bids. The returned list is ordered by final score
    /// descending with dense 1-based ranks; ties keep the original
    /// matrix order (stable sort).
    pub fn rank(&self, bids: Vec<ValidBid>) -> Result<Vec<RankedBid>, EvaluationError> {
        if bids.is_empty() {
            return Err(EvaluationError::NoValidBids);
        }

        let weighted = self.weighted_matrix(&bids);

        let mut scored: Vec<(ValidBid, f64)> = bids
            .into_iter()
            .zip(weighted)
            .map(|(bid, row)| {
                let mut beneficial = 0.0;
                let mut non_beneficial = 0.0;
                for (value, criterion) in row.iter().zip(self.criteria.iter()) {
                    if criterion.beneficial {
                        beneficial += value;
                    } else {
                        non_beneficial += value;
                    }
                }
                (bid, beneficial - non_beneficial)
            })
            .collect();

        // Stable sort: tied scores stay in matrix order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let ranking: Vec<RankedBid> = scored
            .into_iter()
            .enumerate()
            .map(|(index, (bid, score))| RankedBid {
                rank: index + 1,
                bidder: bid.bidder,
                company_name: bid.company_name,
                score: round4(score),
                details: bid.details,
            })
            .collect();

        info!(
            "🏆 MOORA ranking complete: {} ({}) wins with score {:.4}",
            ranking[0].company_name, ranking[0].bidder, ranking[0].score
        );
        Ok(ranking)
    }

    /// Normalize and weight the decision matrix, column by column.
    fn weighted_matrix(&self, bids: &[ValidBid]) -> Vec<[f64; CRITERIA_COUNT]> {
        let mut weighted = vec![[0.0; CRITERIA_COUNT]; bids.len()];

        for (col, criterion) in self.criteria.iter().enumerate() {
            let column: Vec<f64> = bids.iter().map(|b| b.features[col]).collect();
            let normalized = normalize_column(&column, criterion.beneficial);
            for (row, value) in normalized.into_iter().enumerate() {
                weighted[row][col] = value * criterion.weight;
            }
        }
        weighted
    }
}

impl Default for MooraRanker {
    fn default() -> Self {
        Self::new()
    }
}

/// Ratio-normalize one column so a larger normalized value is always
/// "better" regardless of the criterion's direction.
///
/// Zero denominators are guarded rather than propagated: a beneficial
/// column whose maximum is 0 contributes nothing, and a non-beneficial
/// entry of 0 normalizes to 1.0 when it equals the column minimum (it
/// is the best value in the column) and to 0.0 otherwise. No NaN or
/// infinity ever reaches aggregation.
fn normalize_column(values: &[f64], beneficial: bool) -> Vec<f64> {
    if beneficial {
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        if max == 0.0 {
            return vec![0.0; values.len()];
        }
        values.iter().map(|v| v / max).collect()
    } else {
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        values
            .iter()
            .map(|&v| {
                if v == 0.0 {
                    if min == 0.0 {
                        1.0
                    } else {
                        0.0
                    }
                } else {
                    min / v
                }
            })
            .collect()
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
