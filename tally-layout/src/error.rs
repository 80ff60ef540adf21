use tally_scales::error::TallyScaleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyLayoutError {
    #[error("Unsupported tooltip anchor: `{0}`")]
    UnsupportedAnchor(String),

    #[error("Invalid series configuration: {0}")]
    InvalidConfig(String),

    #[error("Scale error: `{0}`")]
    ScaleError(#[from] TallyScaleError),

    #[error("JSON error: `{0}`")]
    JsonError(#[from] serde_json::Error),
}
