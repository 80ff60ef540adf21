use serde::{Deserialize, Serialize};

use crate::error::TallyLayoutError;

/// Per-series column styling read by every layout pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SeriesStyleConfig {
    /// Data value columns grow from
    pub pivot: f64,
    /// Upper bound, in pixels, of a column's width
    pub max_width: f32,
    /// Use the whole category slot even when other column series share it
    pub ignore_group_position: bool,
    /// Stroke width used when the series has no stroke paint
    pub stroke_width: f32,
}

impl Default for SeriesStyleConfig {
    fn default() -> Self {
        Self {
            pivot: 0.0,
            max_width: 30.0,
            ignore_group_position: false,
            stroke_width: 0.0,
        }
    }
}

impl SeriesStyleConfig {
    pub fn from_json(json: &str) -> Result<Self, TallyLayoutError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TallyLayoutError> {
        if !self.pivot.is_finite() {
            return Err(TallyLayoutError::InvalidConfig(format!(
                "pivot must be finite, got {}",
                self.pivot
            )));
        }
        for (name, value) in [
            ("max-width", self.max_width),
            ("stroke-width", self.stroke_width),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TallyLayoutError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn with_pivot(mut self, pivot: f64) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_ignore_group_position(mut self, ignore: bool) -> Self {
        self.ignore_group_position = ignore;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}
