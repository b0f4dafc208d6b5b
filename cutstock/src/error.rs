use thiserror::Error;

/// Reasons a job is rejected before any packing takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidJob {
    #[error("the job contains no parts")]
    NoParts,

    #[error("unknown stock kind {0:?}, expected \"panel\" or \"bar\"")]
    UnknownStockKind(String),

    #[error("stock kind {kind:?} does not match the provided stock dimensions")]
    StockMismatch { kind: String },

    #[error("stock {axis} must be positive, got {value}")]
    NonPositiveStock { axis: &'static str, value: i64 },

    #[error("bar length must be positive, got {0}")]
    NonPositiveBarLength(i64),

    #[error("kerf must not be negative, got {0}")]
    NegativeKerf(i64),

    #[error("part {id}: {axis} must be positive, got {value}")]
    NonPositivePart {
        id: u64,
        axis: &'static str,
        value: i64,
    },

    #[error("part {id}: height is required for panel jobs")]
    MissingPartHeight { id: u64 },

    #[error("part {id}: quantity must be at least 1")]
    ZeroQuantity { id: u64 },

    #[error("{what} of {value} mm exceeds the supported range")]
    OutOfRange { what: String, value: i64 },

    #[error("unknown heuristic {0:?}, expected one of bssf, blsf, baf, bl, contact")]
    UnknownHeuristic(String),
}
