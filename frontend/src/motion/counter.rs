use super::easing::ease_out_cubic;

pub const COUNT_UP_MS: f64 = 1500.0;

/// A number counting up from zero with an ease-out curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    pub target: u64,
    pub duration_ms: f64,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration_ms: COUNT_UP_MS,
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        (self.target as f64 * ease_out_cubic(self.progress(elapsed_ms))).round() as u64
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

/// `9750` -> `"9,750"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_to_target() {
        let counter = CountUp::new(9750);
        assert_eq!(counter.value_at(0.0), 0);
        assert_eq!(counter.value_at(750.0), 8531); // 9750 * 0.875
        assert_eq!(counter.value_at(1500.0), 9750);
        assert_eq!(counter.value_at(10_000.0), 9750);
        assert!(counter.is_done(1500.0));
        assert!(!counter.is_done(1499.0));
    }

    #[test]
    fn zero_duration_is_immediately_done() {
        let counter = CountUp {
            target: 42,
            duration_ms: 0.0,
        };
        assert_eq!(counter.value_at(0.0), 42);
    }

    #[test]
    fn thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(9750), "9,750");
        assert_eq!(format_thousands(12450), "12,450");
        assert_eq!(format_thousands(1_000_000), "1,000,000");
    }
}
