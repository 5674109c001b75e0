use log::Level;

use crate::motion::spring::SpringConfig;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Timing of the testimonial carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Period of the auto-advance timer.
    pub auto_advance_ms: u32,
    /// Duration of both the enter and the exit slide.
    pub transition_ms: u32,
    /// Horizontal distance a slide travels while entering or exiting.
    pub slide_offset_px: f64,
    /// Scale of a slide at the start of its entrance and the end of its exit.
    pub exit_scale: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: 5000,
            transition_ms: 500,
            slide_offset_px: 300.0,
            exit_scale: 0.9,
        }
    }
}

/// Pointer tilt on hoverable cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    /// Pointer distance from the center at which the tilt saturates.
    pub input_range_px: f64,
    pub max_angle_deg: f64,
    pub perspective_px: f64,
    pub spring: SpringConfig,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            input_range_px: 100.0,
            max_angle_deg: 15.0,
            perspective_px: 1000.0,
            spring: SpringConfig::new(300.0, 30.0),
        }
    }
}

impl TiltConfig {
    pub fn with_max_angle(self, max_angle_deg: f64) -> Self {
        Self {
            max_angle_deg,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderConfig {
    /// Scroll offset after which the header gets its solid background.
    pub scrolled_threshold_px: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: 50.0,
        }
    }
}

/// Root margins handed to the viewport observer.
pub const SECTION_VIEW_MARGIN: &str = "-100px";
pub const WIDGET_VIEW_MARGIN: &str = "-50px";
