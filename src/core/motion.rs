//! Animation parameter tables
//!
//! Motion is data: each entry names a CSS keyframe set and its timing. The
//! UI renders entries to `animation` values after scaling them to the
//! current [`PerformanceProfile`].

use std::fmt;
use std::time::Duration;

use crate::core::performance::PerformanceProfile;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => f.write_str("linear"),
            Easing::EaseOut => f.write_str("ease-out"),
            Easing::EaseInOut => f.write_str("ease-in-out"),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Infinite,
}

impl Repeat {
    fn iteration_count(&self) -> &'static str {
        match self {
            Repeat::Once => "1",
            Repeat::Infinite => "infinite",
        }
    }
}

/// Timing of one animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Transition {
    pub const fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            delay: Duration::ZERO,
            easing,
            repeat: Repeat::Once,
        }
    }

    pub const fn looping(self) -> Self {
        Self {
            repeat: Repeat::Infinite,
            ..self
        }
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// Scale durations to the device budget
    ///
    /// One-shot reveals shrink with the profile. Returns `None` when the
    /// animation should not run at all: always under reduced motion, and for
    /// looping ambient motion on low-performance devices.
    pub fn scaled(&self, profile: &PerformanceProfile) -> Option<Self> {
        if profile.reduce_motion {
            return None;
        }
        match self.repeat {
            Repeat::Infinite if profile.is_low() => None,
            Repeat::Infinite => Some(*self),
            Repeat::Once => {
                let factor = profile.duration_factor();
                Some(Self {
                    duration: scale_millis(self.duration, factor),
                    delay: scale_millis(self.delay, factor),
                    ..*self
                })
            }
        }
    }
}

/// Delay step applied to consecutive siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub initial: Duration,
    pub step: Duration,
}

impl Stagger {
    pub const fn new(initial_ms: u64, step_ms: u64) -> Self {
        Self {
            initial: Duration::from_millis(initial_ms),
            step: Duration::from_millis(step_ms),
        }
    }

    pub fn delay_for(&self, index: usize) -> Duration {
        self.initial + self.step * index as u32
    }
}

/// A keyframe set from the stylesheet plus its timing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub keyframes: &'static str,
    pub transition: Transition,
}

impl Motion {
    pub const fn new(keyframes: &'static str, transition: Transition) -> Self {
        Self {
            keyframes,
            transition,
        }
    }

    /// CSS `animation` shorthand, or `none`
    pub fn css(&self, profile: &PerformanceProfile) -> String {
        self.css_delayed(profile, Duration::ZERO)
    }

    /// Like [`Motion::css`] with an extra delay, e.g. from a [`Stagger`]
    pub fn css_delayed(&self, profile: &PerformanceProfile, extra: Duration) -> String {
        let base = self.transition.with_delay(self.transition.delay + extra);
        match base.scaled(profile) {
            Some(t) => format!(
                "{} {} {} {} {} both",
                self.keyframes,
                millis(t.duration),
                t.easing,
                millis(t.delay),
                t.repeat.iteration_count()
            ),
            None => "none".to_string(),
        }
    }
}

fn scale_millis(duration: Duration, factor: f32) -> Duration {
    Duration::from_millis((duration.as_millis() as f32 * factor).round() as u64)
}

fn millis(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}

const HERO_EASE: Easing = Easing::CubicBezier(0.25, 0.46, 0.45, 0.94);

pub const FADE_IN: Motion = Motion::new("fadeIn", Transition::new(800, Easing::EaseOut));
pub const SLIDE_UP: Motion = Motion::new("slideUp", Transition::new(1000, Easing::EaseOut));
pub const SCALE_IN: Motion = Motion::new("scaleIn", Transition::new(600, Easing::EaseOut));
pub const HERO_ITEM: Motion = Motion::new("heroRise", Transition::new(900, HERO_EASE));
pub const BORDER_GLOW: Motion =
    Motion::new("borderGlow", Transition::new(2000, Easing::EaseInOut).looping());
pub const SUBTLE_FLOAT: Motion =
    Motion::new("subtleFloat", Transition::new(6000, Easing::EaseInOut).looping());
pub const ELEGANT_ROTATE: Motion =
    Motion::new("elegantRotate", Transition::new(20000, Easing::Linear).looping());
pub const SPARKLE: Motion =
    Motion::new("sparkle", Transition::new(3000, Easing::EaseInOut).looping());
pub const RIPPLE: Motion = Motion::new("ripple", Transition::new(4000, Easing::EaseOut).looping());

pub const HERO_STAGGER: Stagger = Stagger::new(100, 120);
pub const CARD_STAGGER: Stagger = Stagger::new(0, 150);
