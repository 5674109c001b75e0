use yew::prelude::*;

use crate::config::SECTION_VIEW_MARGIN;
use crate::content::{Floater, CTA_FLOATERS};
use crate::motion::variants::{FADE_IN_UP, STAGGER};
use crate::motion::{entrance_class, use_in_view};

use super::hero::wave;

const TRUST_CHECKS: [&str; 3] = ["Free 7-Day Trial", "No Credit Card", "Cancel Anytime"];

#[derive(Clone, Copy, PartialEq)]
enum Store {
    Apple,
    Google,
}

impl Store {
    fn parts(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Store::Apple => ("🍎", "Download on the", "App Store"),
            Store::Google => ("▶️", "GET IT ON", "Google Play"),
        }
    }
}

/// Inline style of a floating icon. Even floaters drift right, odd ones
/// left, each on its own period.
fn floater_style(floater: &Floater, index: usize) -> String {
    let drift = if index % 2 == 0 { "lq-cta-drift-right" } else { "lq-cta-drift-left" };
    format!(
        "left: {}%; top: {}%; font-size: {}px; animation: {} {}ms cubic-bezier(0.4, 0, 0.2, 1) {}ms infinite;",
        floater.left, floater.top, floater.size_px, drift, floater.duration_ms, floater.delay_ms
    )
}

fn store_badge(store: Store) -> Html {
    let (icon, caption, name) = store.parts();
    html! {
        <a href="#" class="lq-store">
            <span class="lq-store__icon">{ icon }</span>
            <span class="lq-store__text">
                <span class="lq-store__caption">{ caption }</span>
                <span class="lq-store__name">{ name }</span>
            </span>
        </a>
    }
}

#[function_component(FinalCta)]
pub fn final_cta() -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), SECTION_VIEW_MARGIN);
    let rise = |i| entrance_class(&FADE_IN_UP, STAGGER.delay_for(i), visible);

    html! {
        <section ref={node} class="lq-section lq-cta">
            <style>{ CSS }</style>
            <div class="lq-cta__sky">
                { for CTA_FLOATERS.iter().enumerate().map(|(i, floater)| html! {
                    <div key={i} class="lq-cta__floater" style={floater_style(floater, i)}>
                        { floater.icon }
                    </div>
                }) }
                <div class="lq-blob" style="top: 25%; left: 25%; width: 16rem; height: 16rem; background: #C084FC; opacity: 0.2;"></div>
                <div class="lq-blob" style="bottom: 25%; right: 25%; width: 20rem; height: 20rem; background: #F472B6; opacity: 0.2;"></div>
            </div>

            <div class="lq-container lq-container--narrow lq-cta__content">
                <div class={classes!("lq-cta__badge", rise(0))}>
                    <span>{"🎉"}</span>
                    <span>{"Start Your Adventure Today!"}</span>
                </div>

                <h2 class={classes!("lq-cta__title", rise(1))}>
                    {"Ready to Make Learning"}
                    <br />
                    <span class="lq-cta__accent">{"Unforgettable?"}</span>
                </h2>

                <p class={classes!("lq-cta__lead", rise(2))}>
                    {"Join 50,000+ students who transformed homework into epic adventures. \
                      No credit card required. Start learning for free today!"}
                </p>

                <div class={classes!("lq-cta__buttons", rise(3))}>
                    <button class="lq-cta__primary">
                        <span>{"🚀"}</span>
                        <span>{"Start Free Trial"}</span>
                    </button>
                    <button class="lq-cta__secondary">
                        <span>{"Watch Demo"}</span>
                        <span>{"▶️"}</span>
                    </button>
                </div>

                <div class={classes!("lq-cta__checks", rise(4))}>
                    { for TRUST_CHECKS.iter().map(|check| html! {
                        <div key={*check} class="lq-cta__check">
                            <span class="lq-cta__tick">{"✓"}</span>
                            <span>{ *check }</span>
                        </div>
                    }) }
                </div>

                <div class={classes!("lq-cta__stores", rise(5))}>
                    { store_badge(Store::Apple) }
                    { store_badge(Store::Google) }
                </div>
            </div>

            { wave("#0F172A") }
        </section>
    }
}

const CSS: &str = r#"
.lq-cta { padding-bottom: 8rem; background: linear-gradient(180deg, #4F46E5 0%, #7C3AED 50%, #9333EA 100%); }
.lq-cta__sky { position: absolute; inset: 0; overflow: hidden; pointer-events: none; }
.lq-cta__floater { position: absolute; opacity: 0.2; }
@keyframes lq-cta-drift-right {
    0% { transform: translate(0, 0) rotate(0deg); opacity: 0.2; }
    50% { transform: translate(15px, -30px) rotate(180deg); opacity: 0.4; }
    100% { transform: translate(0, 0) rotate(360deg); opacity: 0.2; }
}
@keyframes lq-cta-drift-left {
    0% { transform: translate(0, 0) rotate(0deg); opacity: 0.2; }
    50% { transform: translate(-15px, -30px) rotate(180deg); opacity: 0.4; }
    100% { transform: translate(0, 0) rotate(360deg); opacity: 0.2; }
}
.lq-cta__content { text-align: center; }
.lq-cta__badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    margin-bottom: 1.5rem;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.2);
    backdrop-filter: blur(4px);
    color: white;
    font-weight: 500;
}
.lq-cta__title {
    font-family: var(--font-nunito);
    font-size: clamp(1.875rem, 5vw, 3.75rem);
    font-weight: 700;
    line-height: 1.25;
    color: white;
    margin: 0 0 1.5rem;
}
.lq-cta__accent { color: #FDE047; }
.lq-cta__lead { font-size: 1.125rem; line-height: 1.625; color: #F3E8FF; max-width: 42rem; margin: 0 auto 2.5rem; }
.lq-cta__buttons { display: flex; flex-wrap: wrap; gap: 1rem; align-items: center; justify-content: center; margin-bottom: 2.5rem; }
.lq-cta__primary {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1rem 2rem;
    border: none;
    border-radius: 9999px;
    background: white;
    color: #9333EA;
    font-size: 1.125rem;
    font-weight: 700;
    cursor: pointer;
    animation: lq-cta-glow 2s ease-in-out infinite;
    transition: transform 0.2s;
}
@keyframes lq-cta-glow {
    0%, 100% { box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2); }
    50% { box-shadow: 0 20px 50px rgba(255, 255, 255, 0.3); }
}
.lq-cta__primary:hover { transform: scale(1.05); }
.lq-cta__primary:active, .lq-cta__secondary:active, .lq-store:active { transform: scale(0.98); }
.lq-cta__secondary {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem 1.5rem;
    border: 2px solid rgba(255, 255, 255, 0.3);
    border-radius: 9999px;
    background: transparent;
    color: white;
    font-weight: 600;
    cursor: pointer;
    transition: background 0.2s, transform 0.2s;
}
.lq-cta__secondary:hover { background: rgba(255, 255, 255, 0.1); transform: scale(1.05); }
.lq-cta__checks { display: flex; flex-wrap: wrap; align-items: center; justify-content: center; gap: 1.5rem; color: #F3E8FF; }
.lq-cta__check { display: flex; align-items: center; gap: 0.5rem; }
.lq-cta__tick { color: #86EFAC; }
.lq-cta__stores { margin-top: 3rem; display: flex; flex-wrap: wrap; align-items: center; justify-content: center; gap: 1rem; }
.lq-store {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.75rem 1.25rem;
    border-radius: 0.75rem;
    background: black;
    color: white;
    text-decoration: none;
    transition: transform 0.2s;
}
.lq-store:hover { transform: translateY(-3px) scale(1.05); }
.lq-store__icon { font-size: 1.5rem; }
.lq-store__text { display: flex; flex-direction: column; text-align: left; }
.lq-store__caption { font-size: 10px; color: #9CA3AF; }
.lq-store__name { font-size: 0.875rem; font-weight: 600; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floaters_alternate_drift_direction() {
        let even = floater_style(&CTA_FLOATERS[0], 0);
        let odd = floater_style(&CTA_FLOATERS[1], 1);
        assert!(even.contains("lq-cta-drift-right 6000ms"));
        assert!(odd.contains("lq-cta-drift-left 7000ms"));
        assert!(odd.contains("500ms infinite"));
        assert!(even.starts_with("left: 5%; top: 15%; font-size: 30px;"));
    }

    #[test]
    fn store_badges_name_their_store() {
        assert_eq!(Store::Apple.parts().2, "App Store");
        assert_eq!(Store::Google.parts().2, "Google Play");
    }
}
