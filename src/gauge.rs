//! Needle gauge geometry and color classification
//!
//! Maps a measured value against the gauge full-scale to a needle
//! rotation angle and a color tier. Pure computation; the terminal
//! presentation layer applies the result to the rendered gauge.

use colored::Color;
use serde::{Deserialize, Serialize};

/// Color tier classification for a gauge reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTier {
    /// Below 30% of full scale
    Low,
    /// 30% up to (but excluding) 70% of full scale
    Mid,
    /// 70% of full scale and above
    High,
}

impl ColorTier {
    /// Classify a percentage of full scale into a tier
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 30.0 {
            Self::Low
        } else if percentage < 70.0 {
            Self::Mid
        } else {
            Self::High
        }
    }

    /// Get terminal color for this tier
    pub fn color(&self) -> Color {
        match self {
            Self::Low => Color::Red,
            Self::Mid => Color::Yellow,
            Self::High => Color::Green,
        }
    }

    /// Get descriptive text
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Mid => "Mid",
            Self::High => "High",
        }
    }
}

/// Computed gauge presentation for one value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeReading {
    /// Needle rotation in degrees; -90 at zero, +90 at full scale.
    /// Deliberately unclamped: values past full scale rotate past +90.
    pub angle_degrees: f64,

    /// Color tier for the current value
    pub color_tier: ColorTier,
}

/// Map a value and full-scale maximum to a needle angle and color tier
pub fn render(value: f64, max: f64) -> GaugeReading {
    let angle_degrees = (value / max) * 180.0 - 90.0;
    let percentage = (value / max) * 100.0;

    GaugeReading {
        angle_degrees,
        color_tier: ColorTier::from_percentage(percentage),
    }
}
