//! Opacity interpolation for the consent banner.
//!
//! A [`Fade`] describes a transition from one opacity to another over a fixed
//! duration, sampled once per frame. The UI drives it from a cancellable task;
//! this module only produces the values.

use std::time::Duration;

use crate::config::FadeConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub frame: Duration,
}

impl Fade {
    pub fn new(from: f32, to: f32, duration: Duration, frame: Duration) -> Self {
        Self {
            from: from.clamp(0.0, 1.0),
            to: to.clamp(0.0, 1.0),
            duration,
            frame,
        }
    }

    pub fn fade_in(config: &FadeConfig) -> Self {
        Self::new(0.0, 1.0, config.duration(), config.frame())
    }

    pub fn fade_out(config: &FadeConfig) -> Self {
        Self::new(1.0, 0.0, config.duration(), config.frame())
    }

    /// Number of frames, at least one.
    pub fn steps(&self) -> u32 {
        let frame = self.frame.as_millis().max(1);
        let steps = self.duration.as_millis().div_ceil(frame);
        u32::try_from(steps).unwrap_or(u32::MAX).max(1)
    }

    /// Opacity after `step` frames. Step 0 is `from`, the last step is exactly `to`.
    pub fn opacity_at(&self, step: u32) -> f32 {
        let steps = self.steps();
        if step >= steps {
            return self.to;
        }
        let t = step as f32 / steps as f32;
        (self.from + (self.to - self.from) * t).clamp(0.0, 1.0)
    }

    /// Opacity of every frame after the first paint, ending at `to`.
    pub fn frames(&self) -> impl Iterator<Item = f32> + '_ {
        (1..=self.steps()).map(move |step| self.opacity_at(step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_in_is_monotonic_and_ends_at_one() {
        let fade = Fade::fade_in(&FadeConfig::default());
        assert_eq!(fade.steps(), 50);

        let frames: Vec<f32> = fade.frames().collect();
        assert_eq!(frames.len(), 50);
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(frames.last().copied(), Some(1.0));
        assert!(frames.iter().all(|o| (0.0..=1.0).contains(o)));
    }

    #[test]
    fn test_fade_out_ends_at_zero() {
        let fade = Fade::fade_out(&FadeConfig::default());
        assert_eq!(fade.opacity_at(0), 1.0);
        assert_eq!(fade.frames().last(), Some(0.0));
    }

    #[test]
    fn test_zero_duration_is_one_frame() {
        let fade = Fade::new(0.0, 1.0, Duration::ZERO, Duration::from_millis(16));
        assert_eq!(fade.frames().collect::<Vec<_>>(), vec![1.0]);
    }

    #[test]
    fn test_out_of_range_endpoints_are_clamped() {
        let fade = Fade::new(-1.0, 2.0, Duration::from_millis(32), Duration::from_millis(16));
        assert_eq!(fade.opacity_at(0), 0.0);
        assert_eq!(fade.frames().last(), Some(1.0));
    }
}
