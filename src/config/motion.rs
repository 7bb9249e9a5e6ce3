//! Motion tuning configuration
//!
//! The swipe feel in one place: settle durations and the release threshold.
//! Defaults reproduce the reference behavior exactly - a released drag
//! settles in 250 ms, a tab tap in 300 ms, and a page flips once the drag
//! travels a third of the viewport width. The threshold is positional only;
//! there is deliberately no velocity term to configure.

use crate::swipe::SwipeTuning;
use serde::Deserialize;
use std::time::Duration;

/// Swipe feel tuning
#[derive(Debug, Clone, Copy)]
pub struct MotionConfig {
    /// Settle duration after a released drag, in milliseconds
    pub swipe_settle_ms: u64,

    /// Settle duration after a tab selection, in milliseconds
    pub tab_settle_ms: u64,

    /// Release threshold as a fraction of page width: width / divisor
    pub threshold_divisor: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            swipe_settle_ms: 250,
            tab_settle_ms: 300,
            threshold_divisor: 3.0,
        }
    }
}

/// Motion tuning as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileMotion {
    pub swipe_settle_ms: Option<u64>,
    pub tab_settle_ms: Option<u64>,
    pub threshold_divisor: Option<f32>,
}

impl MotionConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileMotion>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            swipe_settle_ms: file.swipe_settle_ms.unwrap_or(defaults.swipe_settle_ms),
            tab_settle_ms: file.tab_settle_ms.unwrap_or(defaults.tab_settle_ms),
            // A divisor at or below zero would make every touch flip a page
            threshold_divisor: file
                .threshold_divisor
                .filter(|d| *d > 0.0)
                .unwrap_or(defaults.threshold_divisor),
        }
    }

    /// Convert into the controller's tuning type
    pub fn to_tuning(self) -> SwipeTuning {
        SwipeTuning {
            swipe_settle: Duration::from_millis(self.swipe_settle_ms),
            tab_settle: Duration::from_millis(self.tab_settle_ms),
            threshold_divisor: self.threshold_divisor,
        }
    }
}
