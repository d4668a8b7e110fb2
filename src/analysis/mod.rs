pub mod classify;
pub mod levels;
pub mod momentum;

pub use classify::classify_levels;
pub use levels::detect_levels;
pub use momentum::compute_momentum;

use thiserror::Error;

/// Failures of the analysis functions. All are deterministic functions of the
/// input and are raised before any computation happens.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("level {0} is not classifiable: relative tolerance requires a positive level")]
    DegenerateLevel(f64),
}
