use yew::prelude::*;

use crate::color::with_alpha;
use crate::config::SECTION_VIEW_MARGIN;
use crate::content::{Step, STEPS};
use crate::motion::variants::{FADE_IN_UP, NUDGE_RIGHT, STAGGER};
use crate::motion::{entrance_class, loop_class, use_in_view};

fn step_card(step: &Step, index: usize, last: usize) -> Html {
    let icon_style = format!(
        "background: linear-gradient(135deg, {} 0%, {} 100%);",
        with_alpha(step.color, "20"),
        with_alpha(step.color, "10")
    );
    html! {
        <div class="lq-step">
            <div class="lq-step__number" style={format!("background: {};", step.color)}>
                { format!("Step {}", step.number) }
            </div>
            <div class="lq-step__icon" style={icon_style}>{ step.icon }</div>
            <h3 class="lq-step__title">{ step.title }</h3>
            <p class="lq-step__text">{ step.description }</p>
            <div class="lq-step__sparkle">{"✨"}</div>
            if index < last {
                <div class="lq-step__next">
                    <div class={classes!("lq-step__arrow", loop_class(&NUDGE_RIGHT, 0))}>{"→"}</div>
                </div>
            }
        </div>
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), SECTION_VIEW_MARGIN);
    let last = STEPS.len() - 1;

    html! {
        <section ref={node} id="how-it-works" class="lq-section lq-how">
            <style>{ CSS }</style>
            <div class="lq-blob" style="top: -8rem; left: -8rem; width: 16rem; height: 16rem; background: #F3E8FF; opacity: 0.5;"></div>
            <div class="lq-blob" style="bottom: -10rem; right: -10rem; width: 20rem; height: 20rem; background: #DCFCE7; opacity: 0.5;"></div>

            <div class="lq-container">
                <super::SectionHeading
                    eyebrow="✨ Simple & Fun"
                    eyebrow_class="lq-pill--purple"
                    title="How It Works"
                    subtitle="Start your learning adventure in just 3 easy steps!"
                    {visible}
                />

                <div class="lq-steps">
                    <div class="lq-steps__line"></div>
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div key={step.number} class={entrance_class(&FADE_IN_UP, STAGGER.delay_for(i), visible)}>
                            { step_card(step, i, last) }
                        </div>
                    }) }
                </div>

                <div class={classes!("lq-how__cta", entrance_class(&FADE_IN_UP, 800, visible))}>
                    <p>{"Ready to start your adventure?"}</p>
                    <a href="#subjects" class="lq-how__go">
                        <span>{"Get Started Now"}</span>
                        <span>{"🚀"}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

const CSS: &str = r#"
.lq-how { background: white; }
.lq-steps { position: relative; display: grid; grid-template-columns: 1fr; gap: 2rem; }
@media (min-width: 768px) { .lq-steps { grid-template-columns: repeat(3, 1fr); } }
.lq-steps__line {
    display: none;
    position: absolute;
    top: 6rem;
    left: 20%;
    right: 20%;
    height: 4px;
    border-radius: 9999px;
    opacity: 0.3;
    background: linear-gradient(90deg, #A855F7, #22C55E, #F97316);
}
@media (min-width: 768px) { .lq-steps__line { display: block; } }
.lq-step {
    position: relative;
    background: white;
    border-radius: 1.5rem;
    padding: 2rem;
    border: 1px solid #F3F4F6;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    transition: transform 0.4s cubic-bezier(0.34, 1.56, 0.64, 1), box-shadow 0.4s;
}
.lq-step:hover { transform: translateY(-10px); box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.15); }
.lq-step__number {
    position: absolute;
    top: -1rem;
    left: 2rem;
    padding: 0.25rem 1rem;
    border-radius: 9999px;
    color: white;
    font-size: 0.875rem;
    font-weight: 700;
}
.lq-step__icon {
    width: 5rem;
    height: 5rem;
    margin: 0 auto 1.5rem;
    border-radius: 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 2.25rem;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}
.lq-step__icon:hover { animation: lq-wiggle 0.5s; }
@keyframes lq-wiggle {
    0%, 100% { transform: rotate(0); }
    25% { transform: rotate(-10deg); }
    50% { transform: rotate(10deg); }
    75% { transform: rotate(-10deg); }
}
.lq-step__title { font-family: var(--font-nunito); font-size: 1.25rem; font-weight: 700; color: #1F2937; text-align: center; margin: 0 0 0.75rem; }
.lq-step__text { color: #4B5563; text-align: center; line-height: 1.625; margin: 0; }
.lq-step__sparkle {
    position: absolute;
    top: 1rem;
    right: 1rem;
    font-size: 1.25rem;
    opacity: 0;
    transform: scale(0) rotate(-180deg);
    transition: opacity 0.3s, transform 0.4s cubic-bezier(0.34, 1.56, 0.64, 1);
}
.lq-step:hover .lq-step__sparkle { opacity: 1; transform: scale(1) rotate(0); }
.lq-step__next { display: none; position: absolute; right: -1rem; top: 50%; transform: translateY(-50%); z-index: 10; }
@media (min-width: 768px) { .lq-step__next { display: block; } }
.lq-step__arrow {
    width: 2rem;
    height: 2rem;
    border-radius: 9999px;
    background: white;
    color: #9CA3AF;
    display: flex;
    align-items: center;
    justify-content: center;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}
.lq-how__cta { text-align: center; margin-top: 4rem; color: #4B5563; }
.lq-how__go {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem 2rem;
    border-radius: 9999px;
    font-weight: 600;
    color: white;
    text-decoration: none;
    background: linear-gradient(90deg, #A855F7, #4F46E5);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    transition: transform 0.2s, box-shadow 0.2s;
}
.lq-how__go:hover { transform: scale(1.05); box-shadow: 0 20px 40px rgba(79, 70, 229, 0.3); }
"#;
