use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("sample is empty")]
    EmptySample,

    #[error("at least 2 paired values are required, got {0}")]
    InsufficientSamples(usize),

    #[error("sample has zero variance")]
    ZeroVariance,

    #[error("paired samples differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
}
