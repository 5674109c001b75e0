/// Physical parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Damping ratio; 1.0 is critical damping.
    #[cfg(test)]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(100.0, 10.0)
    }
}

/// Below these the spring snaps onto its target and stops.
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;

/// Integration step, seconds.
const SUBSTEP_S: f64 = 1.0 / 240.0;

/// Longest frame gap integrated at once. A tab coming back from the
/// background must not release a huge jump.
const MAX_FRAME_MS: f64 = 64.0;

/// A single animated value pulled toward a target by a spring.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity.abs() < REST_SPEED && (self.target - self.value).abs() < REST_DELTA
    }

    /// Advance the simulation by `dt_ms` and return the new value.
    pub fn step(&mut self, dt_ms: f64) -> f64 {
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }

        let mut remaining = (dt_ms.max(0.0).min(MAX_FRAME_MS)) / 1000.0;
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_S);
            let displacement = self.value - self.target;
            let force =
                -self.config.stiffness * displacement - self.config.damping * self.velocity;
            let accel = force / self.config.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }

    /// Sample the normalized 0 -> 1 response of `config` every `interval_ms`
    /// until it settles or `max_ms` elapses. Used to bake springs into CSS
    /// keyframes.
    pub fn sample_response(config: SpringConfig, interval_ms: f64, max_ms: f64) -> Vec<(f64, f64)> {
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(1.0);

        let mut samples = vec![(0.0, 0.0)];
        let mut t = 0.0;
        while t < max_ms {
            t += interval_ms;
            let v = spring.step(interval_ms);
            samples.push((t, v));
            if spring.is_at_rest() {
                break;
            }
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.step(16.0);
        }
    }

    #[test]
    fn settles_on_target() {
        let mut spring = Spring::new(SpringConfig::new(300.0, 30.0), 0.0);
        spring.set_target(15.0);
        run(&mut spring, 120);
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 15.0);
    }

    #[test]
    fn eases_instead_of_snapping() {
        let mut spring = Spring::new(SpringConfig::new(300.0, 30.0), 0.0);
        spring.set_target(15.0);
        let first = spring.step(16.0);
        assert!(first > 0.0 && first < 15.0, "first frame moved to {first}");
    }

    #[test]
    fn huge_frame_gap_is_capped() {
        let mut a = Spring::new(SpringConfig::new(300.0, 30.0), 0.0);
        let mut b = a.clone();
        a.set_target(10.0);
        b.set_target(10.0);
        a.step(5_000.0);
        b.step(MAX_FRAME_MS);
        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn ignores_non_finite_targets() {
        let mut spring = Spring::new(SpringConfig::default(), 3.0);
        spring.set_target(f64::NAN);
        assert_eq!(spring.target(), 3.0);
        assert!(spring.step(16.0).is_finite());
    }

    #[test]
    fn damping_ratio_of_tilt_spring() {
        let ratio = SpringConfig::new(300.0, 30.0).damping_ratio();
        assert!((ratio - 0.866).abs() < 1e-3);
    }

    #[test]
    fn response_ends_at_one() {
        let samples = Spring::sample_response(SpringConfig::new(400.0, 15.0), 16.0, 2000.0);
        assert_eq!(samples.first(), Some(&(0.0, 0.0)));
        let (t, v) = *samples.last().unwrap();
        assert!(t <= 2000.0 + 16.0);
        assert!((v - 1.0).abs() < 0.02);
        // underdamped pop overshoots
        assert!(samples.iter().any(|&(_, v)| v > 1.0));
    }
}
