//! Turns animation configs into stylesheets registered through stylist.

use log::warn;
use stylist::{GlobalStyle, Style};
use yew::Classes;

use crate::error::DomError;

use super::spring::Spring;
use super::variants::{LoopAnimation, Pose, Transition, Variants};

/// Sampling interval and upper bound when baking a spring into keyframes.
const SPRING_SAMPLE_MS: f64 = 16.0;
const SPRING_MAX_MS: f64 = 2000.0;

/// Keyframes moving `from` -> `to`, plus the duration and timing function
/// the `animation` shorthand needs.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes {
    pub name: String,
    pub body: String,
    pub duration_ms: u32,
    pub timing: String,
}

impl Keyframes {
    pub fn between(name: &str, from: &Pose, to: &Pose, transition: Transition) -> Self {
        let name = format!("lq-{}", name);
        match transition {
            Transition::Tween {
                duration_ms,
                easing,
            } => Self {
                body: format!(
                    "@keyframes {} {{ 0% {{ {} }} 100% {{ {} }} }}",
                    name,
                    from.css(),
                    to.css()
                ),
                name,
                duration_ms,
                timing: easing.css(),
            },
            Transition::Spring(config) => {
                let samples = Spring::sample_response(config, SPRING_SAMPLE_MS, SPRING_MAX_MS);
                let total = samples.last().map(|&(t, _)| t).unwrap_or(SPRING_SAMPLE_MS);
                let stops: Vec<String> = samples
                    .iter()
                    .map(|&(t, progress)| {
                        let pct = (t / total * 100.0 * 100.0).round() / 100.0;
                        format!("{}% {{ {} }}", pct, from.lerp(to, progress).css())
                    })
                    .collect();
                Self {
                    body: format!("@keyframes {} {{ {} }}", name, stops.join(" ")),
                    name,
                    duration_ms: total.round() as u32,
                    // The spring curve is in the stops already.
                    timing: "linear".to_string(),
                }
            }
        }
    }

    pub fn looping(anim: &LoopAnimation) -> Self {
        let name = format!("lq-{}", anim.name);
        let stops: Vec<String> = anim
            .frames
            .iter()
            .map(|(pct, pose)| format!("{}% {{ {} }}", pct, pose.css()))
            .collect();
        Self {
            body: format!("@keyframes {} {{ {} }}", name, stops.join(" ")),
            name,
            duration_ms: anim.duration_ms,
            timing: anim.easing.css(),
        }
    }

    /// `animation` declaration playing once and holding both end states.
    pub fn once(&self, delay_ms: u32) -> String {
        format!(
            "animation: {} {}ms {} {}ms both;",
            self.name, self.duration_ms, self.timing, delay_ms
        )
    }

    pub fn infinite(&self, delay_ms: u32) -> String {
        format!(
            "animation: {} {}ms {} {}ms infinite;",
            self.name, self.duration_ms, self.timing, delay_ms
        )
    }
}

/// Declarations for an element entering with `variants`. Until `active`
/// the element sits in its hidden pose.
pub fn entrance_css(
    variants: &Variants,
    delay_ms: u32,
    active: bool,
) -> (Option<Keyframes>, String) {
    if !active {
        return (None, variants.hidden.css());
    }
    let frames = Keyframes::between(
        variants.name,
        &variants.hidden,
        &variants.visible,
        variants.transition,
    );
    let decl = frames.once(delay_ms);
    (Some(frames), decl)
}

fn register(keyframes: Option<&Keyframes>, declarations: &str) -> Result<Classes, DomError> {
    if let Some(frames) = keyframes {
        GlobalStyle::new(frames.body.clone())?;
    }
    let style = Style::new(declarations.to_string())?;
    Ok(Classes::from(style.get_class_name().to_string()))
}

fn register_or_warn(keyframes: Option<&Keyframes>, declarations: &str) -> Classes {
    match register(keyframes, declarations) {
        Ok(classes) => classes,
        Err(err) => {
            warn!("animation style dropped: {}", err);
            Classes::new()
        }
    }
}

/// Class playing `variants` once `active` turns true.
pub fn entrance_class(variants: &Variants, delay_ms: u32, active: bool) -> Classes {
    let (frames, decl) = entrance_css(variants, delay_ms, active);
    register_or_warn(frames.as_ref(), &decl)
}

pub fn loop_class(anim: &LoopAnimation, delay_ms: u32) -> Classes {
    let frames = Keyframes::looping(anim);
    register_or_warn(Some(&frames), &frames.infinite(delay_ms))
}

/// Class running a one-off transition between two arbitrary poses.
pub fn transition_class(name: &str, from: &Pose, to: &Pose, transition: Transition) -> Classes {
    let frames = Keyframes::between(name, from, to, transition);
    register_or_warn(Some(&frames), &frames.once(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::easing::Easing;
    use crate::motion::variants::{BADGE_UNLOCK, FADE_IN_UP, PULSE};
    use pretty_assertions::assert_eq;

    #[test]
    fn tween_keyframes() {
        let frames = Keyframes::between(
            FADE_IN_UP.name,
            &FADE_IN_UP.hidden,
            &FADE_IN_UP.visible,
            FADE_IN_UP.transition,
        );
        assert_eq!(frames.name, "lq-fade-in-up");
        assert_eq!(
            frames.body,
            "@keyframes lq-fade-in-up { \
             0% { opacity: 0; transform: translate(0px, 40px) scale(1) rotate(0deg); } \
             100% { opacity: 1; transform: translate(0px, 0px) scale(1) rotate(0deg); } }"
        );
        assert_eq!(
            frames.once(350),
            "animation: lq-fade-in-up 600ms ease-out 350ms both;"
        );
    }

    #[test]
    fn spring_keyframes_end_at_visible_pose() {
        let frames = Keyframes::between(
            BADGE_UNLOCK.name,
            &BADGE_UNLOCK.hidden,
            &BADGE_UNLOCK.visible,
            BADGE_UNLOCK.transition,
        );
        assert_eq!(frames.timing, "linear");
        assert!(frames.duration_ms > 0 && frames.duration_ms <= 2016);
        assert!(frames.body.starts_with("@keyframes lq-badge-unlock { 0% {"));
        let rest = "100% { opacity: 1; transform: translate(0px, 0px) scale(1) rotate(0deg); } }";
        assert!(frames.body.ends_with(rest));
    }

    #[test]
    fn inactive_entrance_holds_hidden_pose() {
        let (frames, decl) = entrance_css(&FADE_IN_UP, 0, false);
        assert!(frames.is_none());
        assert_eq!(decl, FADE_IN_UP.hidden.css());
    }

    #[test]
    fn looping_keyframes() {
        let frames = Keyframes::looping(&PULSE);
        assert_eq!(frames.timing, Easing::EaseInOut.css());
        let peak = "50% { opacity: 1; transform: translate(0px, 0px) scale(1.05) rotate(0deg); }";
        assert!(frames.body.contains(peak));
        assert_eq!(
            frames.infinite(500),
            "animation: lq-pulse 2000ms ease-in-out 500ms infinite;"
        );
    }
}
