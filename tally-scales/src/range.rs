use serde::{Deserialize, Serialize};

use crate::error::TallyScaleError;

/// Closed interval of data values along one axis.
///
/// `max >= min` holds for every range built through [`ValueRange::try_new`] or
/// [`ValueRange::from_values`]. A range with `min == max` is degenerate: it is a
/// valid extent, but it cannot be mapped onto pixels or divided into ticks
/// until it is widened (see [`ValueRange::widened_if_degenerate`]).
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn try_new(min: f64, max: f64) -> Result<Self, TallyScaleError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Extent of the finite values, or `None` when there are none
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<ValueRange>, v| match acc {
                None => Some(ValueRange { min: v, max: v }),
                Some(range) => Some(range.including(v)),
            })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    pub fn including(self, value: f64) -> Self {
        Self {
            min: f64::min(self.min, value),
            max: f64::max(self.max, value),
        }
    }

    pub fn union(self, other: &ValueRange) -> Self {
        Self {
            min: f64::min(self.min, other.min),
            max: f64::max(self.max, other.max),
        }
    }

    /// Returns the range unchanged unless it is degenerate, in which case it is
    /// expanded symmetrically around its single value by `max(1, |v| / 2)`.
    pub fn widened_if_degenerate(self) -> Self {
        if !self.is_degenerate() {
            return self;
        }
        let half_span = f64::max(1.0, self.min.abs() * 0.5);
        Self {
            min: self.min - half_span,
            max: self.max + half_span,
        }
    }

    /// Checks that both ends are finite and `max >= min`.
    ///
    /// The fields are public, so a range built as a struct literal is not
    /// checked until this runs.
    pub fn validate(&self) -> Result<(), TallyScaleError> {
        if !self.min.is_finite() {
            return Err(TallyScaleError::NonFiniteValue(self.min));
        }
        if !self.max.is_finite() {
            return Err(TallyScaleError::NonFiniteValue(self.max));
        }
        if self.max < self.min {
            return Err(TallyScaleError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// [`ValueRange::validate`], then errors with
    /// [`TallyScaleError::DegenerateRange`] when `min == max`
    pub fn ensure_span(&self) -> Result<(), TallyScaleError> {
        self.validate()?;
        if self.is_degenerate() {
            return Err(TallyScaleError::DegenerateRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_try_new_rejects_inverted() {
        assert_eq!(
            ValueRange::try_new(3.0, 1.0),
            Err(TallyScaleError::InvalidRange { min: 3.0, max: 1.0 })
        );
        assert!(matches!(
            ValueRange::try_new(f64::NAN, 1.0),
            Err(TallyScaleError::NonFiniteValue(_))
        ));
        assert!(ValueRange::try_new(2.0, 2.0).is_ok());
    }

    #[test]
    fn test_ensure_span_checks_struct_literals() {
        assert_eq!(
            ValueRange { min: 10.0, max: 0.0 }.ensure_span(),
            Err(TallyScaleError::InvalidRange {
                min: 10.0,
                max: 0.0
            })
        );
        assert!(matches!(
            ValueRange {
                min: f64::NAN,
                max: 1.0
            }
            .ensure_span(),
            Err(TallyScaleError::NonFiniteValue(v)) if v.is_nan()
        ));
        assert_eq!(
            ValueRange {
                min: 0.0,
                max: f64::INFINITY
            }
            .ensure_span(),
            Err(TallyScaleError::NonFiniteValue(f64::INFINITY))
        );
        assert_eq!(
            ValueRange { min: 2.0, max: 2.0 }.ensure_span(),
            Err(TallyScaleError::DegenerateRange { min: 2.0, max: 2.0 })
        );
        assert_eq!(ValueRange { min: 0.0, max: 1.0 }.ensure_span(), Ok(()));
    }

    #[test]
    fn test_from_values() {
        let range = ValueRange::from_values(vec![3.0, -1.0, f64::NAN, 7.5]).unwrap();
        assert_eq!(range, ValueRange { min: -1.0, max: 7.5 });
        assert!(ValueRange::from_values(Vec::<f64>::new()).is_none());
    }

    #[test]
    fn test_widened_if_degenerate() {
        let range = ValueRange { min: 0.0, max: 0.0 }.widened_if_degenerate();
        assert_approx_eq!(f64, range.min, -1.0);
        assert_approx_eq!(f64, range.max, 1.0);

        let range = ValueRange { min: 100.0, max: 100.0 }.widened_if_degenerate();
        assert_approx_eq!(f64, range.min, 50.0);
        assert_approx_eq!(f64, range.max, 150.0);

        // Non-degenerate ranges are untouched
        let range = ValueRange { min: 1.0, max: 2.0 };
        assert_eq!(range.widened_if_degenerate(), range);
    }
}
