use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::motion::scroll::{section_progress, ScrollParallax};
use crate::motion::variants::{FADE_IN_UP, FLOATING_SLOW, HOVER_BOB, STAGGER};
use crate::motion::{entrance_class, loop_class, use_scroll_y};

/// Background layers drift down at three rates as the hero scrolls away.
const NEAR: ScrollParallax = ScrollParallax::new(150.0);
const MID: ScrollParallax = ScrollParallax::new(100.0);
const FAR: ScrollParallax = ScrollParallax::new(200.0);

struct FloatingItem {
    emoji: &'static str,
    size_px: u32,
    delay_ms: u32,
    position: &'static str,
}

const FLOATING: [FloatingItem; 5] = [
    FloatingItem {
        emoji: "⭐",
        size_px: 50,
        delay_ms: 0,
        position: "top: 20%; right: 20%;",
    },
    FloatingItem {
        emoji: "🎮",
        size_px: 60,
        delay_ms: 1000,
        position: "top: 30%; left: 15%;",
    },
    FloatingItem {
        emoji: "🏆",
        size_px: 55,
        delay_ms: 2000,
        position: "bottom: 30%; right: 10%;",
    },
    FloatingItem {
        emoji: "📚",
        size_px: 45,
        delay_ms: 500,
        position: "bottom: 25%; left: 8%;",
    },
    FloatingItem {
        emoji: "🎯",
        size_px: 40,
        delay_ms: 1500,
        position: "top: 50%; right: 5%;",
    },
];

fn cloud(size: u32, opacity: f64) -> Html {
    html! {
        <div class="lq-cloud" style={format!("opacity: {};", opacity)}>
            <svg
                width={size.to_string()}
                height={(size as f64 * 0.6).to_string()}
                viewBox="0 0 100 60"
                fill="white"
            >
                <ellipse cx="25" cy="40" rx="20" ry="15" />
                <ellipse cx="50" cy="30" rx="25" ry="20" />
                <ellipse cx="75" cy="40" rx="20" ry="15" />
                <ellipse cx="40" cy="45" rx="15" ry="10" />
                <ellipse cx="60" cy="45" rx="15" ry="10" />
            </svg>
        </div>
    }
}

pub fn wave(fill: &'static str) -> Html {
    html! {
        <div class="lq-wave">
            <svg viewBox="0 0 1440 120" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path
                    d="M0 120L60 105C120 90 240 60 360 45C480 30 600 30 720 37.5C840 45 960 60 1080 67.5C1200 75 1320 75 1380 75L1440 75V120H1380C1320 120 1200 120 1080 120C960 120 840 120 720 120C600 120 480 120 360 120C240 120 120 120 60 120H0Z"
                    fill={fill}
                />
            </svg>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    let scroll_y = use_scroll_y();

    let progress = node
        .cast::<HtmlElement>()
        .map(|el| section_progress(scroll_y, el.offset_top() as f64, el.offset_height() as f64))
        .unwrap_or(0.0);
    let drift = |layer: ScrollParallax, position: &str| {
        format!("{} transform: translateY({}px);", position, layer.offset(progress))
    };
    let rise = |i| entrance_class(&FADE_IN_UP, STAGGER.delay_for(i), true);

    html! {
        <section ref={node} class="lq-hero">
            <style>{ CSS }</style>
            <div class="lq-hero__backdrop">
                <div class="lq-layer" style={drift(NEAR, "top: 5rem; left: 10%;")}>{ cloud(120, 0.6) }</div>
                <div class="lq-layer" style={drift(MID, "top: 10rem; right: 15%;")}>{ cloud(100, 0.4) }</div>
                <div class="lq-layer" style={drift(NEAR, "top: 15rem; left: 60%;")}>{ cloud(80, 0.5) }</div>

                { for FLOATING.iter().map(|item| html! {
                    <div key={item.emoji} class="lq-layer" style={item.position}>
                        <div
                            class={classes!("lq-floater", loop_class(&FLOATING_SLOW, item.delay_ms))}
                            style={format!("width: {0}px; height: {0}px; font-size: {1}px;", item.size_px, item.size_px / 2)}
                        >
                            { item.emoji }
                        </div>
                    </div>
                }) }

                <div class="lq-layer" style={drift(FAR, "bottom: 5rem; left: 5%;")}>
                    <div class="lq-shape" style="width: 80px; height: 80px; background: #FBBF24;"></div>
                </div>
                <div class="lq-layer" style={drift(MID, "top: 10rem; right: 5%;")}>
                    <div class="lq-shape" style="width: 60px; height: 60px; background: #10B981;"></div>
                </div>
            </div>

            <div class="lq-hero__content">
                <div class={classes!("lq-mascot", rise(0))}>
                    <div class={classes!("lq-mascot__body", loop_class(&HOVER_BOB, 0))}>
                        <div class="lq-mascot__face">{"🦉"}</div>
                        <div class="lq-mascot__book">{"📖"}</div>
                        <div class="lq-mascot__sparkle" style="left: -0.75rem; top: 0;">{"✨"}</div>
                        <div class="lq-mascot__sparkle" style="right: -0.5rem; bottom: 1rem; animation-delay: 0.5s;">{"✨"}</div>
                    </div>
                </div>

                <div class={classes!("lq-hero__badge", rise(1))}>
                    <span>{"🎉"}</span>
                    <span>{"Trusted by Students Everywhere"}</span>
                </div>

                <h1 class={classes!("lq-hero__title", rise(2))}>
                    <span class="lq-hero__plain">{"Learn, Play & "}</span>
                    <span class="lq-gradient-text">{"Level Up!"}</span>
                    <span class="lq-hero__emoji">{"🎮"}</span>
                </h1>

                <p class={classes!("lq-hero__lead", rise(3))}>
                    {"Transform homework into epic quests! Master Math, Science, English & more \
                      through exciting games, earn XP, unlock badges, and compete on leaderboards."}
                </p>

                <div class={classes!("lq-hero__ctas", rise(4))}>
                    <Button variant={ButtonVariant::Primary} size={ButtonSize::Lg} pulse={true}>
                        {"🚀 Start Learning Free"}
                    </Button>
                    <Button variant={ButtonVariant::Secondary} size={ButtonSize::Lg} href="#parents">
                        {"👨‍👩‍👧 For Parents"}
                    </Button>
                </div>
            </div>

            { wave("white") }
        </section>
    }
}

const CSS: &str = r#"
.lq-hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    background: linear-gradient(180deg, #EFF6FF 0%, #DBEAFE 50%, #C7D2FE 100%);
}
.lq-hero__backdrop { position: absolute; inset: 0; pointer-events: none; overflow: hidden; }
.lq-layer { position: absolute; will-change: transform; }
.lq-cloud { animation: lq-cloud-drift 8s ease-in-out infinite; }
@keyframes lq-cloud-drift {
    0%, 100% { transform: translateX(0); }
    50% { transform: translateX(20px); }
}
.lq-floater {
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 1rem;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(4px);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    pointer-events: auto;
}
.lq-shape { border-radius: 9999px; animation: lq-shape-breathe 4s ease-in-out infinite; }
@keyframes lq-shape-breathe {
    0%, 100% { transform: scale(1); opacity: 0.2; }
    50% { transform: scale(1.2); opacity: 0.3; }
}
.lq-hero__content {
    position: relative;
    z-index: 10;
    max-width: 72rem;
    margin: 0 auto;
    padding: 0 1rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
}
.lq-mascot { margin-bottom: 2rem; }
.lq-mascot__body { position: relative; width: 8rem; height: 8rem; }
@media (min-width: 640px) { .lq-mascot__body { width: 10rem; height: 10rem; } }
.lq-mascot__face {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 4rem;
    border-radius: 1.5rem;
    background: linear-gradient(135deg, #C084FC, #4F46E5);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    transform: rotate(3deg);
}
.lq-mascot__book { position: absolute; right: -1rem; top: -1rem; font-size: 1.875rem; animation: lq-rock 2s ease-in-out infinite; }
@keyframes lq-rock {
    0%, 100% { transform: rotate(-5deg); }
    50% { transform: rotate(5deg); }
}
.lq-mascot__sparkle { position: absolute; font-size: 1.25rem; animation: lq-sparkle 1.5s infinite; }
@keyframes lq-sparkle {
    0%, 100% { transform: scale(1); opacity: 0.7; }
    50% { transform: scale(1.3); opacity: 1; }
}
.lq-hero__badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    margin-bottom: 1.5rem;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.8);
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
    font-size: 0.875rem;
    font-weight: 600;
    color: #374151;
}
.lq-hero__title {
    font-family: var(--font-nunito);
    font-size: clamp(2.25rem, 6vw, 4.5rem);
    font-weight: 800;
    line-height: 1.25;
    margin: 0 0 1.5rem;
}
.lq-hero__plain { color: #1F2937; }
.lq-hero__emoji { margin-left: 0.5rem; }
.lq-hero__lead { font-size: 1.25rem; line-height: 1.625; color: #4B5563; max-width: 42rem; margin: 0 auto 2.5rem; }
.lq-hero__ctas { display: flex; flex-wrap: wrap; gap: 1rem; align-items: center; justify-content: center; }
.lq-wave { position: absolute; bottom: 0; left: 0; right: 0; line-height: 0; }
.lq-wave svg { width: 100%; }
"#;
