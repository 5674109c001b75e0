use std::fmt;

/// CSS timing functions. The browser evaluates these itself; only the
/// counters sample a curve in Rust (see [`ease_out_cubic`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
    CubicBezier(f64, f64, f64, f64),
}

/// Material "standard" curve used by the carousel entrance.
pub const STANDARD: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);
/// Accelerating curve used by the carousel exit.
pub const ACCELERATE: Easing = Easing::CubicBezier(0.4, 0.0, 1.0, 1.0);

impl Easing {
    pub fn css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::EaseOut => write!(f, "ease-out"),
            Easing::EaseInOut => write!(f, "ease-in-out"),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

/// Ease-out cubic, the curve the count-up widgets use.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_names() {
        assert_eq!(Easing::EaseOut.css(), "ease-out");
        assert_eq!(Easing::EaseInOut.css(), "ease-in-out");
        assert_eq!(STANDARD.css(), "cubic-bezier(0.4, 0, 0.2, 1)");
        assert_eq!(ACCELERATE.css(), "cubic-bezier(0.4, 0, 1, 1)");
    }

    #[test]
    fn count_up_curve() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn count_up_curve_is_monotonic_and_clamped() {
        let mut last = 0.0;
        for i in 1..=100 {
            let v = ease_out_cubic(i as f64 / 100.0);
            assert!(v >= last, "dipped at {i}");
            last = v;
        }
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }
}
