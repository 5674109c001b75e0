//! Named animation states as plain configuration.
//!
//! A [`Variants`] pairs a `hidden` and a `visible` [`Pose`] with the
//! transition between them. Components never interpolate these themselves;
//! `motion::css` turns them into keyframes for the browser to run.

use crate::carousel::Direction;
use crate::config::CarouselConfig;

use super::easing::{self, Easing};
use super::spring::SpringConfig;

/// Visual state of an element. Translations are in pixels, rotation in
/// degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub const fn hidden() -> Pose {
        Pose {
            opacity: 0.0,
            ..Pose::REST
        }
    }

    pub const fn opacity(self, opacity: f64) -> Pose {
        Pose { opacity, ..self }
    }

    pub const fn x(self, x: f64) -> Pose {
        Pose { x, ..self }
    }

    pub const fn y(self, y: f64) -> Pose {
        Pose { y, ..self }
    }

    pub const fn scale(self, scale: f64) -> Pose {
        Pose { scale, ..self }
    }

    pub const fn rotate(self, rotate: f64) -> Pose {
        Pose { rotate, ..self }
    }

    /// Linear blend; `t` outside [0, 1] extrapolates, which is how spring
    /// overshoot reaches the keyframes.
    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            rotate: mix(self.rotate, to.rotate),
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            round3(self.x),
            round3(self.y),
            round3(self.scale),
            round3(self.rotate)
        )
    }

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: {};",
            round3(self.opacity),
            self.transform()
        )
    }
}

fn round3(v: f64) -> f64 {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        0.0 // no "-0" in the stylesheet
    } else {
        r
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    Tween { duration_ms: u32, easing: Easing },
    Spring(SpringConfig),
}

impl Transition {
    pub const fn tween(duration_ms: u32, easing: Easing) -> Self {
        Transition::Tween {
            duration_ms,
            easing,
        }
    }

    pub const fn spring(stiffness: f64, damping: f64) -> Self {
        Transition::Spring(SpringConfig::new(stiffness, damping))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variants {
    pub name: &'static str,
    pub hidden: Pose,
    pub visible: Pose,
    pub transition: Transition,
}

const FADE: Transition = Transition::tween(600, Easing::EaseOut);

pub const FADE_IN_UP: Variants = Variants {
    name: "fade-in-up",
    hidden: Pose::hidden().y(40.0),
    visible: Pose::REST,
    transition: FADE,
};

pub const FADE_IN_LEFT: Variants = Variants {
    name: "fade-in-left",
    hidden: Pose::hidden().x(-40.0),
    visible: Pose::REST,
    transition: FADE,
};

pub const SCALE_IN: Variants = Variants {
    name: "scale-in",
    hidden: Pose::hidden().scale(0.8),
    visible: Pose::REST,
    transition: Transition::tween(500, Easing::EaseOut),
};

pub const POP_IN: Variants = Variants {
    name: "pop-in",
    hidden: Pose::hidden().scale(0.5),
    visible: Pose::REST,
    transition: Transition::spring(400.0, 15.0),
};

pub const BADGE_UNLOCK: Variants = Variants {
    name: "badge-unlock",
    hidden: Pose::hidden().scale(0.0).rotate(-180.0),
    visible: Pose::REST,
    transition: Transition::spring(500.0, 15.0),
};

/// Header drop-in on first paint.
pub const HEADER_DROP: Variants = Variants {
    name: "header-drop",
    hidden: Pose::REST.y(-100.0),
    visible: Pose::REST,
    transition: Transition::tween(500, Easing::EaseOut),
};

/// Delays handed to the children of a staggered container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children_ms: u32,
    pub stagger_ms: u32,
}

impl Stagger {
    pub const fn delay_for(&self, index: usize) -> u32 {
        self.delay_children_ms + self.stagger_ms * index as u32
    }
}

pub const STAGGER: Stagger = Stagger {
    delay_children_ms: 200,
    stagger_ms: 150,
};

pub const STAGGER_FAST: Stagger = Stagger {
    delay_children_ms: 100,
    stagger_ms: 80,
};

/// A repeating keyframe animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopAnimation {
    pub name: &'static str,
    /// (percent, pose) stops, first at 0 and last at 100.
    pub frames: &'static [(u8, Pose)],
    pub duration_ms: u32,
    pub easing: Easing,
}

pub const FLOATING_SLOW: LoopAnimation = LoopAnimation {
    name: "floating-slow",
    frames: &[
        (0, Pose::REST.y(-10.0).rotate(-5.0)),
        (50, Pose::REST.y(10.0).rotate(5.0)),
        (100, Pose::REST.y(-10.0).rotate(-5.0)),
    ],
    duration_ms: 4000,
    easing: Easing::EaseInOut,
};

pub const HOVER_BOB: LoopAnimation = LoopAnimation {
    name: "hover-bob",
    frames: &[
        (0, Pose::REST),
        (50, Pose::REST.y(-10.0)),
        (100, Pose::REST),
    ],
    duration_ms: 3000,
    easing: Easing::EaseInOut,
};

pub const PULSE: LoopAnimation = LoopAnimation {
    name: "pulse",
    frames: &[
        (0, Pose::REST),
        (50, Pose::REST.scale(1.05)),
        (100, Pose::REST),
    ],
    duration_ms: 2000,
    easing: Easing::EaseInOut,
};

pub const NUDGE_RIGHT: LoopAnimation = LoopAnimation {
    name: "nudge-right",
    frames: &[
        (0, Pose::REST),
        (50, Pose::REST.x(5.0)),
        (100, Pose::REST),
    ],
    duration_ms: 1500,
    easing: Easing::EaseInOut,
};

pub const TWINKLE: LoopAnimation = LoopAnimation {
    name: "twinkle",
    frames: &[
        (0, Pose::REST.opacity(0.2)),
        (50, Pose::REST.y(-20.0).opacity(0.5)),
        (100, Pose::REST.opacity(0.2)),
    ],
    duration_ms: 4000,
    easing: Easing::EaseInOut,
};

/// Enter, center and exit poses of the testimonial slides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideVariants {
    pub offset_px: f64,
    pub edge_scale: f64,
    pub enter: Transition,
    pub exit: Transition,
}

impl SlideVariants {
    pub fn from_config(config: &CarouselConfig) -> Self {
        Self {
            offset_px: config.slide_offset_px,
            edge_scale: config.exit_scale,
            enter: Transition::tween(config.transition_ms, easing::STANDARD),
            exit: Transition::tween(config.transition_ms, easing::ACCELERATE),
        }
    }

    /// Where an incoming slide starts: right of center when moving forward.
    pub fn enter(&self, direction: Direction) -> Pose {
        let x = if direction.sign() > 0 {
            self.offset_px
        } else {
            -self.offset_px
        };
        Pose::hidden().x(x).scale(self.edge_scale)
    }

    pub fn center(&self) -> Pose {
        Pose::REST
    }

    /// Where an outgoing slide ends: left of center when moving forward.
    pub fn exit(&self, direction: Direction) -> Pose {
        let x = if direction.sign() > 0 {
            -self.offset_px
        } else {
            self.offset_px
        };
        Pose::hidden().x(x).scale(self.edge_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stagger_delays() {
        assert_eq!(
            (0..4).map(|i| STAGGER.delay_for(i)).collect::<Vec<_>>(),
            vec![200, 350, 500, 650]
        );
        assert_eq!(STAGGER_FAST.delay_for(2), 260);
    }

    #[test]
    fn slide_offsets_follow_direction() {
        let slides = SlideVariants::from_config(&CarouselConfig::default());

        assert_eq!(slides.enter(Direction::Forward).x, 300.0);
        assert_eq!(slides.exit(Direction::Forward).x, -300.0);
        assert_eq!(slides.enter(Direction::Backward).x, -300.0);
        assert_eq!(slides.exit(Direction::Backward).x, 300.0);

        let enter = slides.enter(Direction::Forward);
        assert_eq!(enter.opacity, 0.0);
        assert_eq!(enter.scale, 0.9);
        assert_eq!(slides.center(), Pose::REST);
    }

    #[test]
    fn initial_direction_enters_from_the_left() {
        // direction 0 is "not greater than zero"
        let slides = SlideVariants::from_config(&CarouselConfig::default());
        assert_eq!(slides.enter(Direction::Still).x, -300.0);
    }

    #[test]
    fn pose_css_has_no_negative_zero() {
        let pose = Pose::hidden().x(-0.0).y(40.0);
        assert_eq!(
            pose.css(),
            "opacity: 0; transform: translate(0px, 40px) scale(1) rotate(0deg);"
        );
    }

    #[test]
    fn lerp_keeps_opacity_in_range() {
        let from = Pose::hidden().scale(0.5);
        let over = from.lerp(&Pose::REST, 1.2);
        assert_eq!(over.opacity, 1.0);
        assert!((over.scale - 1.1).abs() < 1e-9);
    }
}
