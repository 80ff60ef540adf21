#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TallyScaleError {
    #[error("Degenerate value range: min ({min}) equals max ({max})")]
    DegenerateRange { min: f64, max: f64 },

    #[error("Invalid value range: max ({max}) is less than min ({min})")]
    InvalidRange { min: f64, max: f64 },

    #[error("Non-finite value: {0}")]
    NonFiniteValue(f64),

    #[error("Tick increment must be positive, got {0}")]
    NonPositiveIncrement(f64),
}
