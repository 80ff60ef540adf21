use float_cmp::assert_approx_eq;
use tally_scales::bounds::{pad, AxisKind};
use tally_scales::range::ValueRange;
use tally_scales::ticks::AxisTick;

#[test]
fn test_pad_categorical_axis() {
    let raw = ValueRange { min: 0.0, max: 10.0 };
    let tick = AxisTick {
        value: 2.0,
        magnitude: 1.0,
    };
    let padded = pad(&raw, AxisKind::Categorical, &tick);
    assert_approx_eq!(f64, padded.min, -0.5);
    assert_approx_eq!(f64, padded.max, 10.5);
}

#[test]
fn test_pad_value_axis() {
    let raw = ValueRange { min: 0.0, max: 10.0 };
    let tick = AxisTick {
        value: 2.0,
        magnitude: 1.0,
    };
    let padded = pad(&raw, AxisKind::Value, &tick);
    assert_approx_eq!(f64, padded.min, -2.0);
    assert_approx_eq!(f64, padded.max, 12.0);
}

#[test]
fn test_pad_single_category_is_not_degenerate() {
    let raw = ValueRange { min: 3.0, max: 3.0 };
    let tick = AxisTick {
        value: 1.0,
        magnitude: 1.0,
    };
    let padded = pad(&raw, AxisKind::Categorical, &tick);
    assert!(!padded.is_degenerate());
    assert_approx_eq!(f64, padded.span(), 1.0);
}
