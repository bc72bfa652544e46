//! Coarse device performance heuristic
//!
//! Browser signals are optional; a missing one simply adds nothing to the
//! score. The resulting profile scales decorative particle counts and
//! animation durations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scores below this are treated as a low-performance device
pub const LOW_PERFORMANCE_THRESHOLD: u32 = 3;

const ONE_GB: f64 = 1_000_000_000.0;
const HALF_GB: f64 = 500_000_000.0;

/// Rendering budget tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceMode {
    Low,
    #[default]
    High,
}

impl PerformanceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceMode::Low => "low",
            PerformanceMode::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown performance mode {0:?}, expected low or high")]
pub struct UnknownPerformanceMode(pub String);

impl FromStr for PerformanceMode {
    type Err = UnknownPerformanceMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(PerformanceMode::Low),
            "high" => Ok(PerformanceMode::High),
            _ => Err(UnknownPerformanceMode(s.to_string())),
        }
    }
}

/// Best-effort readings from the browser
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceSignals {
    /// `navigator.connection.effectiveType`, e.g. "4g"
    pub effective_type: Option<String>,
    /// `navigator.connection.downlink` in Mbps
    pub downlink_mbps: Option<f64>,
    /// `performance.memory.jsHeapSizeLimit` in bytes
    pub heap_limit_bytes: Option<f64>,
    /// `navigator.hardwareConcurrency`
    pub hardware_concurrency: Option<u32>,
}

impl DeviceSignals {
    pub fn score(&self) -> u32 {
        let mut score = 0;

        match self.effective_type.as_deref() {
            Some("4g") => score += 2,
            Some("3g") => score += 1,
            _ => {}
        }
        if self.downlink_mbps.is_some_and(|mbps| mbps > 10.0) {
            score += 1;
        }

        match self.heap_limit_bytes {
            Some(bytes) if bytes > ONE_GB => score += 2,
            Some(bytes) if bytes > HALF_GB => score += 1,
            _ => {}
        }

        if self.hardware_concurrency.is_some_and(|cores| cores >= 4) {
            score += 1;
        }

        score
    }

    pub fn mode(&self) -> PerformanceMode {
        if self.score() < LOW_PERFORMANCE_THRESHOLD {
            PerformanceMode::Low
        } else {
            PerformanceMode::High
        }
    }
}

/// Animation budget derived from the device tier and motion preference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceProfile {
    pub mode: PerformanceMode,
    pub reduce_motion: bool,
    /// Base reveal duration in seconds
    pub animation_duration: f32,
    /// Number of floating flowers
    pub particle_count: usize,
}

impl PerformanceProfile {
    pub const FULL_PARTICLES: usize = 25;
    pub const LOW_PARTICLES: usize = 5;

    pub fn new(mode: PerformanceMode, reduce_motion: bool) -> Self {
        let (animation_duration, particle_count) = match mode {
            PerformanceMode::Low => (0.3, Self::LOW_PARTICLES),
            PerformanceMode::High => (0.8, Self::FULL_PARTICLES),
        };
        Self {
            mode,
            reduce_motion,
            animation_duration,
            particle_count,
        }
    }

    pub fn is_low(&self) -> bool {
        self.mode == PerformanceMode::Low
    }

    pub fn enable_complex_animations(&self) -> bool {
        !self.is_low() && !self.reduce_motion
    }

    /// Scale a decorative element count designed for full quality
    pub fn scale_count(&self, full: usize) -> usize {
        if full == 0 {
            return 0;
        }
        let scaled = full * self.particle_count / Self::FULL_PARTICLES;
        scaled.max(1)
    }

    /// The leading share of a full-quality set this profile can afford
    ///
    /// Changing tier only grows or shrinks the prefix, so items already shown
    /// keep their place.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let count = self.scale_count(items.len()).min(items.len());
        &items[..count]
    }

    /// Multiplier applied to animation durations designed for full quality
    pub fn duration_factor(&self) -> f32 {
        self.animation_duration / 0.8
    }
}

impl Default for PerformanceProfile {
    fn default() -> Self {
        Self::new(PerformanceMode::High, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_signals_is_low() {
        let signals = DeviceSignals::default();
        assert_eq!(signals.score(), 0);
        assert_eq!(signals.mode(), PerformanceMode::Low);
    }

    #[test]
    fn test_fast_device_scores_high() {
        let signals = DeviceSignals {
            effective_type: Some("4g".to_string()),
            downlink_mbps: Some(25.0),
            heap_limit_bytes: Some(4.0 * ONE_GB),
            hardware_concurrency: Some(8),
        };
        assert_eq!(signals.score(), 6);
        assert_eq!(signals.mode(), PerformanceMode::High);
    }

    #[test]
    fn test_threshold_boundary() {
        // 3g (+1) and 4 cores (+1) = 2 -> low
        let signals = DeviceSignals {
            effective_type: Some("3g".to_string()),
            hardware_concurrency: Some(4),
            ..Default::default()
        };
        assert_eq!(signals.mode(), PerformanceMode::Low);

        // plus a mid-size heap (+1) = 3 -> high
        let signals = DeviceSignals {
            heap_limit_bytes: Some(600_000_000.0),
            ..signals
        };
        assert_eq!(signals.score(), 3);
        assert_eq!(signals.mode(), PerformanceMode::High);
    }

    #[test]
    fn test_downlink_must_exceed_ten() {
        let signals = DeviceSignals {
            downlink_mbps: Some(10.0),
            ..Default::default()
        };
        assert_eq!(signals.score(), 0);
    }

    #[test]
    fn test_profile_budgets() {
        let low = PerformanceProfile::new(PerformanceMode::Low, false);
        assert_eq!(low.particle_count, 5);
        assert!((low.animation_duration - 0.3).abs() < f32::EPSILON);
        assert!(!low.enable_complex_animations());

        let high = PerformanceProfile::new(PerformanceMode::High, false);
        assert_eq!(high.particle_count, 25);
        assert!(high.enable_complex_animations());

        let reduced = PerformanceProfile::new(PerformanceMode::High, true);
        assert!(!reduced.enable_complex_animations());
    }

    #[test]
    fn test_scale_count() {
        let low = PerformanceProfile::new(PerformanceMode::Low, false);
        assert_eq!(low.scale_count(15), 3);
        assert_eq!(low.scale_count(2), 1);
        assert_eq!(low.scale_count(0), 0);
        assert_eq!(PerformanceProfile::default().scale_count(15), 15);
    }

    #[test]
    fn test_visible_is_a_stable_prefix() {
        let items: Vec<u32> = (0..25).collect();
        let low = PerformanceProfile::new(PerformanceMode::Low, false);
        let high = PerformanceProfile::default();

        assert_eq!(high.visible(&items).len(), 25);
        assert_eq!(low.visible(&items), &items[..5]);
        let none: [u32; 0] = [];
        assert!(low.visible(&none).is_empty());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(" LOW ".parse::<PerformanceMode>(), Ok(PerformanceMode::Low));
        assert_eq!("high".parse::<PerformanceMode>(), Ok(PerformanceMode::High));
        assert_eq!(
            "medium".parse::<PerformanceMode>(),
            Err(UnknownPerformanceMode("medium".to_string()))
        );
    }
}
