//! Pointer-driven 3D tilt for hoverable cards.
//!
//! The pointer's offset from the card center maps linearly (and clamped) to
//! a pair of target angles; two springs chase those targets frame by frame
//! so the card eases toward the pointer instead of snapping.

use crate::config::TiltConfig;
use crate::motion::spring::Spring;

/// Element rectangle in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Not laid out yet.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl From<&web_sys::DomRect> for Bounds {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

/// Rotation in degrees about the horizontal (`x`) and vertical (`y`) axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x_deg: f64,
    pub y_deg: f64,
}

#[cfg(test)]
impl Rotation {
    pub const NEUTRAL: Rotation = Rotation {
        x_deg: 0.0,
        y_deg: 0.0,
    };
}

/// Clamped linear map from `[-input_range, input_range]` pixels onto
/// `[-max_angle, max_angle]` degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltMapping {
    pub input_range_px: f64,
    pub max_angle_deg: f64,
}

impl TiltMapping {
    fn map(&self, offset_px: f64) -> f64 {
        if self.input_range_px <= 0.0 || !offset_px.is_finite() {
            return 0.0;
        }
        let t = (offset_px / self.input_range_px).clamp(-1.0, 1.0);
        t * self.max_angle_deg
    }

    /// Pointer right of center turns the card's right edge away
    /// (positive `rotateY`); pointer above center tips the top away
    /// (positive `rotateX`).
    pub fn target(&self, dx: f64, dy: f64) -> Rotation {
        Rotation {
            x_deg: -self.map(dy),
            y_deg: self.map(dx),
        }
    }
}

pub struct PointerTiltTracker {
    mapping: TiltMapping,
    offset: (f64, f64),
    rotate_x: Spring,
    rotate_y: Spring,
}

impl PointerTiltTracker {
    pub fn new(config: &TiltConfig) -> Self {
        Self {
            mapping: TiltMapping {
                input_range_px: config.input_range_px,
                max_angle_deg: config.max_angle_deg,
            },
            offset: (0.0, 0.0),
            rotate_x: Spring::new(config.spring, 0.0),
            rotate_y: Spring::new(config.spring, 0.0),
        }
    }

    #[cfg(test)]
    pub fn pointer_offset(&self) -> (f64, f64) {
        self.offset
    }

    pub fn on_pointer_move(&mut self, pointer_x: f64, pointer_y: f64, bounds: Bounds) {
        self.offset = if bounds.is_degenerate() {
            (0.0, 0.0)
        } else {
            let (cx, cy) = bounds.center();
            (pointer_x - cx, pointer_y - cy)
        };
        self.retarget();
    }

    pub fn on_pointer_leave(&mut self) {
        self.offset = (0.0, 0.0);
        self.retarget();
    }

    fn retarget(&mut self) {
        let target = self.target();
        self.rotate_x.set_target(target.x_deg);
        self.rotate_y.set_target(target.y_deg);
    }

    /// Angles the springs are heading for.
    pub fn target(&self) -> Rotation {
        self.mapping.target(self.offset.0, self.offset.1)
    }

    /// Angles currently on screen.
    pub fn rotation(&self) -> Rotation {
        Rotation {
            x_deg: self.rotate_x.value(),
            y_deg: self.rotate_y.value(),
        }
    }

    /// Advance both springs by one frame.
    pub fn step(&mut self, dt_ms: f64) -> Rotation {
        self.rotate_x.step(dt_ms);
        self.rotate_y.step(dt_ms);
        self.rotation()
    }

    pub fn is_settled(&self) -> bool {
        self.rotate_x.is_at_rest() && self.rotate_y.is_at_rest()
    }
}

pub fn tilt_transform(rotation: Rotation, perspective_px: f64, scale: f64) -> String {
    format!(
        "perspective({}px) rotateX({:.3}deg) rotateY({:.3}deg) scale({})",
        perspective_px, rotation.x_deg, rotation.y_deg, scale
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CARD: Bounds = Bounds {
        left: 100.0,
        top: 50.0,
        width: 300.0,
        height: 400.0,
    };

    fn tracker() -> PointerTiltTracker {
        PointerTiltTracker::new(&TiltConfig::default())
    }

    fn settle(t: &mut PointerTiltTracker) {
        for _ in 0..240 {
            t.step(16.0);
        }
    }

    #[test]
    fn pointer_at_center_is_neutral() {
        let mut t = tracker();
        t.on_pointer_move(250.0, 250.0, CARD);
        assert_eq!(t.pointer_offset(), (0.0, 0.0));
        assert_eq!(t.target(), Rotation::NEUTRAL);
        settle(&mut t);
        assert_eq!(t.rotation(), Rotation::NEUTRAL);
    }

    #[test]
    fn horizontal_offset_saturates() {
        let mut t = tracker();
        t.on_pointer_move(350.0, 250.0, CARD);
        assert_eq!(t.target().y_deg, 15.0);

        t.on_pointer_move(500.0, 250.0, CARD);
        assert_eq!(t.pointer_offset(), (250.0, 0.0));
        assert_eq!(t.target().y_deg, 15.0);

        t.on_pointer_move(200.0, 250.0, CARD);
        assert_eq!(t.target().y_deg, -7.5);
    }

    #[test]
    fn pointer_above_center_tips_top_away() {
        let mut t = tracker();
        t.on_pointer_move(250.0, 150.0, CARD);
        assert_eq!(t.target().x_deg, 15.0);
        t.on_pointer_move(250.0, 300.0, CARD);
        assert_eq!(t.target().x_deg, -7.5);
    }

    #[test]
    fn rotation_lags_behind_target() {
        let mut t = tracker();
        t.on_pointer_move(350.0, 250.0, CARD);
        let first = t.step(16.0);
        assert!(first.y_deg > 0.0 && first.y_deg < 15.0);
        settle(&mut t);
        assert!((t.rotation().y_deg - 15.0).abs() < 1e-6);
    }

    #[test]
    fn leave_eases_back_to_neutral() {
        let mut t = tracker();
        t.on_pointer_move(0.0, 0.0, CARD);
        settle(&mut t);
        assert!(t.rotation().x_deg > 14.9 && t.rotation().y_deg < -14.9);

        t.on_pointer_leave();
        assert_eq!(t.target(), Rotation::NEUTRAL);
        let eased = t.step(16.0);
        assert!(eased.y_deg < 0.0, "snapped back instantly");

        settle(&mut t);
        assert!(t.rotation().x_deg.abs() < 1e-3);
        assert!(t.rotation().y_deg.abs() < 1e-3);
        assert!(t.is_settled());
    }

    #[test]
    fn unlaid_out_element_is_neutral() {
        let mut t = tracker();
        t.on_pointer_move(500.0, 500.0, Bounds::new(10.0, 10.0, 0.0, 0.0));
        assert_eq!(t.target(), Rotation::NEUTRAL);
        t.on_pointer_move(500.0, 500.0, Bounds::new(10.0, 10.0, 200.0, 0.0));
        assert_eq!(t.target(), Rotation::NEUTRAL);
        let r = t.step(16.0);
        assert!(r.x_deg.is_finite() && r.y_deg.is_finite());
    }

    #[test]
    fn card_strength_override() {
        let mut t = PointerTiltTracker::new(&TiltConfig::default().with_max_angle(10.0));
        t.on_pointer_move(1000.0, 250.0, CARD);
        assert_eq!(t.target().y_deg, 10.0);
    }

    #[test]
    fn transform_string() {
        let r = Rotation {
            x_deg: 1.5,
            y_deg: -2.25,
        };
        assert_eq!(
            tilt_transform(r, 1000.0, 1.02),
            "perspective(1000px) rotateX(1.500deg) rotateY(-2.250deg) scale(1.02)"
        );
    }

    proptest! {
        #[test]
        fn targets_stay_within_bounds(x in -5000.0f64..5000.0, y in -5000.0f64..5000.0) {
            let mut t = tracker();
            t.on_pointer_move(x, y, CARD);
            let target = t.target();
            prop_assert!(target.x_deg.abs() <= 15.0);
            prop_assert!(target.y_deg.abs() <= 15.0);
        }
    }
}
