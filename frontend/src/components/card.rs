use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config::TiltConfig;
use crate::motion::frame::FrameLoop;
use crate::tilt::{tilt_transform, Bounds, PointerTiltTracker};

/// Scale applied while the pointer is over a tilting card.
const HOVER_SCALE: f64 = 1.02;
/// Tilt range of the generic card.
pub const CARD_TILT_DEG: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverEffect {
    #[default]
    Lift,
    Tilt,
}

impl HoverEffect {
    fn class(self) -> &'static str {
        match self {
            HoverEffect::Lift => "lq-card--lift",
            HoverEffect::Tilt => "lq-card--tilt",
        }
    }
}

struct TiltState {
    config: TiltConfig,
    tracker: PointerTiltTracker,
    hovering: bool,
    frames: Option<FrameLoop>,
}

impl TiltState {
    fn new(config: TiltConfig) -> Self {
        Self {
            config,
            tracker: PointerTiltTracker::new(&config),
            hovering: false,
            frames: None,
        }
    }

    /// Swap in a fresh tracker when the props asked for a different tilt.
    /// Returns whether anything changed.
    fn reconfigure(&mut self, config: TiltConfig) -> bool {
        if self.config == config {
            return false;
        }
        self.config = config;
        self.tracker = PointerTiltTracker::new(&config);
        true
    }
}

pub struct TiltHandlers {
    pub onmousemove: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

fn write_transform(node: &NodeRef, transform: &str) {
    if let Some(element) = node.cast::<Element>() {
        let _ = element.set_attribute("style", &format!("transform: {};", transform));
    }
}

/// Keep a frame loop stepping the springs until they settle. The loop only
/// holds a weak handle so it never outlives the component.
fn animate(state: &Rc<RefCell<TiltState>>, node: &NodeRef, perspective_px: f64) {
    if state.borrow().frames.as_ref().map_or(false, FrameLoop::is_running) {
        return;
    }

    let weak = Rc::downgrade(state);
    let node_for_frames = node.clone();
    let started = FrameLoop::start(move |dt| {
        let Some(state) = weak.upgrade() else {
            return false;
        };
        let mut s = state.borrow_mut();
        let rotation = s.tracker.step(dt);
        let scale = if s.hovering { HOVER_SCALE } else { 1.0 };
        write_transform(&node_for_frames, &tilt_transform(rotation, perspective_px, scale));
        !s.tracker.is_settled()
    });

    match started {
        Ok(frames) => state.borrow_mut().frames = Some(frames),
        Err(err) => {
            warn!("tilt frames unavailable: {}", err);
            let s = state.borrow();
            let scale = if s.hovering { HOVER_SCALE } else { 1.0 };
            write_transform(node, &tilt_transform(s.tracker.target(), perspective_px, scale));
        }
    }
}

/// Pointer handlers tilting the element behind `node` toward the pointer.
#[hook]
pub fn use_tilt(node: NodeRef, config: TiltConfig) -> TiltHandlers {
    let state = use_mut_ref(|| TiltState::new(config));
    if state.borrow_mut().reconfigure(config) {
        write_transform(&node, "none");
    }

    let onmousemove = {
        let state = state.clone();
        let node = node.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let bounds = Bounds::from(&element.get_bounding_client_rect());
            {
                let mut s = state.borrow_mut();
                s.hovering = true;
                s.tracker
                    .on_pointer_move(e.client_x() as f64, e.client_y() as f64, bounds);
            }
            animate(&state, &node, config.perspective_px);
        })
    };

    let onmouseleave = Callback::from(move |_: MouseEvent| {
        {
            let mut s = state.borrow_mut();
            s.hovering = false;
            s.tracker.on_pointer_leave();
        }
        animate(&state, &node, config.perspective_px);
    });

    TiltHandlers {
        onmousemove,
        onmouseleave,
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// CSS background of a faint overlay.
    #[prop_or_default]
    pub gradient: Option<AttrValue>,
    #[prop_or_default]
    pub icon: Option<Html>,
    #[prop_or_default]
    pub hover: HoverEffect,
    /// Tilt range when `hover` is [`HoverEffect::Tilt`].
    #[prop_or(CARD_TILT_DEG)]
    pub tilt_deg: f64,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let node = use_node_ref();
    let tilt = use_tilt(
        node.clone(),
        TiltConfig::default().with_max_angle(props.tilt_deg),
    );

    let (onmousemove, onmouseleave) = if props.hover == HoverEffect::Tilt {
        (Some(tilt.onmousemove), Some(tilt.onmouseleave))
    } else {
        (None, None)
    };
    let class = classes!(
        "lq-card",
        props.hover.class(),
        props.onclick.is_some().then_some("lq-card--clickable"),
        props.class.clone()
    );

    html! {
        <div ref={node} {class} onclick={props.onclick.clone()} {onmousemove} {onmouseleave}>
            if let Some(gradient) = &props.gradient {
                <div class="lq-card__overlay" style={format!("background: {};", gradient)}></div>
            }
            if let Some(icon) = &props.icon {
                <div class="lq-card__icon">{ icon.clone() }</div>
            }
            <div class="lq-card__content">{ for props.children.iter() }</div>
            <div class="lq-card__shine"></div>
        </div>
    }
}

pub const CSS: &str = r#"
.lq-card {
    position: relative;
    overflow: hidden;
    border-radius: 1rem;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(24px);
    border: 1px solid rgba(255, 255, 255, 0.2);
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
    transform-style: preserve-3d;
    transition: box-shadow 0.3s, transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1), background-color 0.3s;
}
.lq-card--clickable { cursor: pointer; }
.lq-card--tilt { transition: box-shadow 0.3s; }
.lq-card--lift:hover { transform: translateY(-8px); box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.15); }
.lq-card__overlay { position: absolute; inset: 0; opacity: 0.05; pointer-events: none; }
.lq-card__icon {
    position: absolute;
    top: -0.75rem;
    right: -0.75rem;
    width: 4rem;
    height: 4rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.875rem;
}
.lq-card__content { position: relative; z-index: 1; }
.lq-card__shine {
    position: absolute;
    inset: 0;
    opacity: 0;
    pointer-events: none;
    background: linear-gradient(105deg, transparent 40%, rgba(255, 255, 255, 0.3) 45%, rgba(255, 255, 255, 0.1) 50%, transparent 55%);
    transition: opacity 0.5s;
}
.lq-card:hover .lq-card__shine { opacity: 1; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(0.0, 0.0, 200.0, 200.0)
    }

    #[test]
    fn same_config_keeps_the_tracker() {
        let mut state = TiltState::new(TiltConfig::default().with_max_angle(CARD_TILT_DEG));
        state.tracker.on_pointer_move(200.0, 100.0, bounds());

        assert!(!state.reconfigure(TiltConfig::default().with_max_angle(CARD_TILT_DEG)));
        assert_eq!(state.tracker.target().y_deg, CARD_TILT_DEG);
    }

    #[test]
    fn new_tilt_range_applies_to_later_moves() {
        let mut state = TiltState::new(TiltConfig::default().with_max_angle(CARD_TILT_DEG));
        state.tracker.on_pointer_move(200.0, 100.0, bounds());
        assert_eq!(state.tracker.target().y_deg, 10.0);

        assert!(state.reconfigure(TiltConfig::default().with_max_angle(15.0)));
        assert_eq!(state.tracker.rotation().y_deg, 0.0);

        state.tracker.on_pointer_move(200.0, 100.0, bounds());
        assert_eq!(state.tracker.target().y_deg, 15.0);
    }
}
