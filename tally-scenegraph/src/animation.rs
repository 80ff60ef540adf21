use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum::{Display, EnumString, VariantNames};

use crate::easing::EasingFunction;

/// Curve, duration and repetition of a property transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Animation {
    pub easing: EasingFunction,
    #[serde(with = "duration_ms")]
    pub duration: Duration,
    pub repeat_times: u32,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            easing: EasingFunction::default(),
            duration: Duration::from_millis(800),
            repeat_times: 1,
        }
    }
}

impl Animation {
    pub fn new(easing: EasingFunction, duration: Duration, repeat_times: u32) -> Self {
        Self {
            easing,
            duration,
            repeat_times,
        }
    }

    /// Same repetition with another curve and the duration scaled by `factor`,
    /// truncated to whole milliseconds.
    pub fn derived(&self, easing: EasingFunction, factor: f64) -> Self {
        let millis = (self.duration.as_millis() as f64 * factor) as u64;
        Self {
            easing,
            duration: Duration::from_millis(millis),
            repeat_times: self.repeat_times,
        }
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(deserializer)?))
    }
}

/// Animatable properties of a sized shape
#[derive(
    Debug,
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
pub enum ShapeProperty {
    X,
    Y,
    Width,
    Height,
}

/// Transition a paint backend should run for one property
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyTransition {
    pub from: f32,
    pub to: f32,
    pub animation: Animation,
}

/// A shape property value together with its transition state.
///
/// Without an animation every assignment is committed immediately. With one,
/// assigning a new value keeps the last committed value as the start of a
/// pending transition until [`AnimatedProperty::complete`] is called.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedProperty {
    value: f32,
    from: f32,
    animation: Option<Animation>,
    pending: bool,
}

impl AnimatedProperty {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            from: value,
            animation: None,
            pending: false,
        }
    }

    /// Target value
    pub fn get(&self) -> f32 {
        self.value
    }

    pub fn set(&mut self, value: f32) {
        if value == self.value {
            return;
        }
        match self.animation {
            Some(_) => {
                if !self.pending {
                    self.from = self.value;
                }
                self.value = value;
                self.pending = true;
            }
            None => {
                self.value = value;
                self.from = value;
            }
        }
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn set_animation(&mut self, animation: Option<Animation>) {
        self.animation = animation;
    }

    /// Commits the target value as the new start state; nothing stays pending
    pub fn complete(&mut self) {
        self.from = self.value;
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn transition(&self) -> Option<PropertyTransition> {
        if !self.pending {
            return None;
        }
        let animation = self.animation?;
        Some(PropertyTransition {
            from: self.from,
            to: self.value,
            animation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_without_animation_commits() {
        let mut prop = AnimatedProperty::new(1.0);
        prop.set(5.0);
        assert_eq!(prop.get(), 5.0);
        assert!(!prop.is_pending());
        assert_eq!(prop.transition(), None);
    }

    #[test]
    fn test_set_with_animation_is_pending_until_complete() {
        let animation = Animation::default();
        let mut prop = AnimatedProperty::new(0.0);
        prop.set_animation(Some(animation));
        prop.set(10.0);

        assert_eq!(
            prop.transition(),
            Some(PropertyTransition {
                from: 0.0,
                to: 10.0,
                animation
            })
        );

        // Retargeting a pending transition keeps its start
        prop.set(20.0);
        assert_eq!(prop.transition().map(|t| (t.from, t.to)), Some((0.0, 20.0)));

        prop.complete();
        assert!(!prop.is_pending());
        prop.set(15.0);
        assert_eq!(prop.transition().map(|t| (t.from, t.to)), Some((20.0, 15.0)));
    }

    #[test]
    fn test_set_same_value_is_noop() {
        let mut prop = AnimatedProperty::new(3.0);
        prop.set_animation(Some(Animation::default()));
        prop.set(3.0);
        assert!(!prop.is_pending());
    }

    #[test]
    fn test_derived_animation() {
        let base = Animation::new(EasingFunction::Linear, Duration::from_millis(333), 2);
        let derived = base.derived(EasingFunction::BounceOut, 1.5);
        assert_eq!(derived.easing, EasingFunction::BounceOut);
        // 499.5 truncates
        assert_eq!(derived.duration, Duration::from_millis(499));
        assert_eq!(derived.repeat_times, 2);
    }

    #[test]
    fn test_animation_from_json() {
        let animation: Animation =
            serde_json::from_str(r#"{"easing": "bounce_out", "duration": 250}"#).unwrap();
        assert_eq!(animation.easing, EasingFunction::BounceOut);
        assert_eq!(animation.duration, Duration::from_millis(250));
        assert_eq!(animation.repeat_times, 1);
    }
}
