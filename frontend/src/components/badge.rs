use yew::prelude::*;

use crate::color::{shade_or_base, with_alpha};
use crate::motion::counter::format_thousands;
use crate::motion::entrance_class;
use crate::motion::variants::BADGE_UNLOCK;

pub const DEFAULT_BADGE_COLOR: &str = "#FBBF24";
const LOCKED_FILL: &str = "#CBD5E1";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
}

impl BadgeSize {
    fn class(self) -> &'static str {
        match self {
            BadgeSize::Sm => "lq-badge--sm",
            BadgeSize::Md => "lq-badge--md",
        }
    }
}

/// Fill of the badge disc: a diagonal gradient into a darker shade of
/// `color`, or flat grey while locked.
pub fn badge_fill(color: &str, unlocked: bool) -> String {
    if unlocked {
        format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            color,
            shade_or_base(color, -20)
        )
    } else {
        LOCKED_FILL.to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    #[prop_or(true)]
    pub unlocked: bool,
    #[prop_or_default]
    pub size: BadgeSize,
    #[prop_or(AttrValue::Static(DEFAULT_BADGE_COLOR))]
    pub color: AttrValue,
    /// Hold the hidden pose until this turns true.
    #[prop_or(true)]
    pub revealed: bool,
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    let entrance = entrance_class(&BADGE_UNLOCK, props.delay_ms, props.revealed);
    let disc_style = format!(
        "background: {}; --lq-badge-glow: {};",
        badge_fill(&props.color, props.unlocked),
        with_alpha(&props.color, "66")
    );

    html! {
        <div class={classes!("lq-badge", props.size.class(), entrance)}>
            <div
                class={classes!("lq-badge__disc", (!props.unlocked).then_some("lq-badge__disc--locked"))}
                style={disc_style}
            >
                <div class="lq-badge__glow"></div>
                <span class="lq-badge__icon">{ props.icon.clone() }</span>
                if !props.unlocked {
                    <div class="lq-badge__lock">{"🔒"}</div>
                }
            </div>
            <span class="lq-badge__title">{ props.title.clone() }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct XpBadgeProps {
    pub xp: u64,
    pub level: u32,
}

#[function_component(XpBadge)]
pub fn xp_badge(props: &XpBadgeProps) -> Html {
    html! {
        <div class="lq-xp-badge">
            <div class="lq-xp-badge__part">
                <span class="lq-xp-badge__icon">{"⭐"}</span>
                <span class="lq-xp-badge__xp">{ format!("{} XP", format_thousands(props.xp)) }</span>
            </div>
            <div class="lq-xp-badge__divider"></div>
            <div class="lq-xp-badge__part">
                <span>{"🎖️"}</span>
                <span class="lq-xp-badge__level">{ format!("Level {}", props.level) }</span>
            </div>
        </div>
    }
}

pub const CSS: &str = r#"
.lq-badge {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
}
.lq-badge__disc {
    position: relative;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    transition: transform 0.2s ease-out, box-shadow 0.3s;
}
.lq-badge:hover .lq-badge__disc { transform: translateY(-5px) scale(1.1); }
.lq-badge:hover .lq-badge__disc:not(.lq-badge__disc--locked) { box-shadow: 0 0 30px var(--lq-badge-glow); }
.lq-badge__disc--locked { filter: grayscale(1); opacity: 0.5; }
.lq-badge__glow {
    position: absolute;
    inset: 0.25rem;
    border-radius: 9999px;
    opacity: 0.3;
    background: radial-gradient(circle at 30% 30%, white 0%, transparent 70%);
}
.lq-badge__icon { position: relative; z-index: 1; }
.lq-badge__lock {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 9999px;
    background: rgba(0, 0, 0, 0.3);
    color: white;
}
.lq-badge__title {
    font-family: var(--font-nunito);
    font-weight: 600;
    color: #374151;
    text-align: center;
    max-width: 80px;
}
.lq-badge--sm .lq-badge__disc { width: 3rem; height: 3rem; }
.lq-badge--sm .lq-badge__icon { font-size: 1.25rem; }
.lq-badge--sm .lq-badge__title { font-size: 0.75rem; }
.lq-badge--md .lq-badge__disc { width: 4rem; height: 4rem; }
.lq-badge--md .lq-badge__icon { font-size: 1.5rem; }
.lq-badge--md .lq-badge__title { font-size: 0.875rem; }
.lq-xp-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    color: white;
    background: linear-gradient(90deg, #A855F7, #4F46E5);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    transition: transform 0.2s;
}
.lq-xp-badge:hover { transform: scale(1.05); }
.lq-xp-badge__part { display: flex; align-items: center; gap: 0.25rem; }
.lq-xp-badge__xp { font-weight: 700; }
.lq-xp-badge__level { font-weight: 600; }
.lq-xp-badge__divider { width: 1px; height: 1rem; background: rgba(255, 255, 255, 0.3); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlocked_fill_darkens_toward_the_corner() {
        assert_eq!(
            badge_fill(DEFAULT_BADGE_COLOR, true),
            "linear-gradient(135deg, #FBBF24 0%, #e7ab10 100%)"
        );
    }

    #[test]
    fn locked_badges_are_grey() {
        assert_eq!(badge_fill("#EC4899", false), LOCKED_FILL);
    }

    #[test]
    fn malformed_color_keeps_a_flat_gradient() {
        assert_eq!(
            badge_fill("gold", true),
            "linear-gradient(135deg, gold 0%, gold 100%)"
        );
    }
}
