use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    #[error("step must be a finite number of minutes greater than zero, got {0}")]
    InvalidStep(f64),

    #[error("duration must be a finite, non-negative number of minutes, got {0}")]
    InvalidDuration(f64),

    #[error("request would produce {requested} samples, limit is {limit}")]
    TooManySamples { requested: f64, limit: usize },

    #[error("UTC offset of {0} minutes is not a valid fixed offset")]
    InvalidOffset(i32),

    #[error("sample {index} falls outside the representable date range")]
    OutOfRange { index: usize },
}

pub type Result<T> = std::result::Result<T, SamplingError>;
