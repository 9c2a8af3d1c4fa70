use thiserror::Error;

/// Failures scoped to a single bid. The normalizer logs these and skips
/// the bid; they never abort the batch.
#[derive(Debug, Error)]
pub enum BidError {
    #[error("timestamp '{value}' does not match format YYYY-MM-DDTHH:MM")]
    Format { value: String },

    #[error("field '{field}' {reason}")]
    Validation { field: &'static str, reason: String },
}

/// Failures fatal to the whole evaluation request. These surface to the
/// caller as structured values, never as panics.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("malformed request: {0}")]
    RequestShape(String),

    #[error("no bids survived validation")]
    NoValidBids,
}

impl EvaluationError {
    /// Stable machine-readable tag for the transport boundary.
    pub fn kind(&self) -> &'static str {
        match self {
            EvaluationError::RequestShape(_) => "request_shape",
            EvaluationError::NoValidBids => "no_valid_bids",
        }
    }
}
