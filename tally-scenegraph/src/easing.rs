use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// Easing curve used by a paint backend to interpolate a property transition.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    VariantNames,
    EnumString,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EasingFunction {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    #[default]
    CubicOut,
    CubicInOut,
    BounceOut,
    ElasticOut,
}

impl EasingFunction {
    /// Evaluates the curve at `t`, clamped to `[0, 1]`.
    ///
    /// Every curve maps 0 to 0 and 1 to 1. `BounceOut` and `ElasticOut` may
    /// overshoot in between.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadIn => t * t,
            EasingFunction::QuadOut => t * (2.0 - t),
            EasingFunction::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            EasingFunction::CubicIn => t * t * t,
            EasingFunction::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 * t - 2.0;
                    0.5 * u * u * u + 1.0
                }
            }
            EasingFunction::BounceOut => bounce_out(t),
            EasingFunction::ElasticOut => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let period = 0.3;
                2f32.powf(-10.0 * t)
                    * ((t - period / 4.0) * std::f32::consts::TAU / period).sin()
                    + 1.0
            }
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use std::str::FromStr;

    const ALL: [EasingFunction; 9] = [
        EasingFunction::Linear,
        EasingFunction::QuadIn,
        EasingFunction::QuadOut,
        EasingFunction::QuadInOut,
        EasingFunction::CubicIn,
        EasingFunction::CubicOut,
        EasingFunction::CubicInOut,
        EasingFunction::BounceOut,
        EasingFunction::ElasticOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert_approx_eq!(f32, easing.apply(0.0), 0.0, epsilon = 1e-6);
            assert_approx_eq!(f32, easing.apply(1.0), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_approx_eq!(f32, EasingFunction::Linear.apply(-3.0), 0.0);
        assert_approx_eq!(f32, EasingFunction::Linear.apply(7.0), 1.0);
    }

    #[test]
    fn test_names() {
        assert_eq!(
            EasingFunction::from_str("bounce_out").unwrap(),
            EasingFunction::BounceOut
        );
        assert_eq!(EasingFunction::CubicInOut.to_string(), "cubic_in_out");
        assert_eq!(EasingFunction::VARIANTS.len(), ALL.len());
    }
}
