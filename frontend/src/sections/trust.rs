use yew::prelude::*;

use crate::color::with_alpha;
use crate::config::SECTION_VIEW_MARGIN;
use crate::content::{TRUST_BADGES, TRUST_FEATURES, TRUST_STATS};
use crate::motion::variants::{FADE_IN_UP, SCALE_IN, STAGGER_FAST};
use crate::motion::{entrance_class, use_in_view};

use super::SectionHeading;

#[function_component(TrustSection)]
pub fn trust_section() -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), SECTION_VIEW_MARGIN);

    html! {
        <section ref={node} id="parents" class="lq-section lq-trust">
            <style>{ CSS }</style>
            <div class="lq-container">
                <SectionHeading
                    eyebrow="👨‍👩‍👧 For Parents & Teachers"
                    eyebrow_class="lq-pill--green"
                    title="Learning You Can Trust"
                    subtitle="We take education seriously while making it fun. Here's why parents and teachers choose us."
                    {visible}
                />

                <div class="lq-features">
                    { for TRUST_FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <div
                            key={feature.title}
                            class={classes!("lq-feature", entrance_class(&FADE_IN_UP, STAGGER_FAST.delay_for(i), visible))}
                        >
                            <div class="lq-feature__icon" style={format!("background: {};", with_alpha(feature.color, "15"))}>
                                { feature.icon }
                            </div>
                            <h3 class="lq-feature__title">{ feature.title }</h3>
                            <p class="lq-feature__text">{ feature.description }</p>
                        </div>
                    }) }
                </div>

                <div class={classes!("lq-trust__stats", entrance_class(&FADE_IN_UP, 600, visible))}>
                    { for TRUST_STATS.iter().enumerate().map(|(i, stat)| html! {
                        <div
                            key={stat.label}
                            class={classes!("lq-trust__stat", entrance_class(&SCALE_IN, 800 + i as u32 * 100, visible))}
                        >
                            <div class="lq-trust__value">{ stat.value }</div>
                            <div class="lq-trust__label">{ stat.label }</div>
                        </div>
                    }) }
                </div>

                <div class={classes!("lq-trust__badges", entrance_class(&FADE_IN_UP, 1000, visible))}>
                    { for TRUST_BADGES.iter().map(|(icon, text)| html! {
                        <div key={*text} class="lq-trust__badge">
                            <span class="lq-trust__badge-icon">{ *icon }</span>
                            <span>{ *text }</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

const CSS: &str = r#"
.lq-trust { background: white; }
.lq-features { display: grid; grid-template-columns: 1fr; gap: 1.5rem; margin-bottom: 4rem; }
@media (min-width: 768px) { .lq-features { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .lq-features { grid-template-columns: repeat(3, 1fr); } }
.lq-feature {
    background: #F9FAFB;
    border: 1px solid #F3F4F6;
    border-radius: 1rem;
    padding: 1.5rem;
    transition: box-shadow 0.3s;
}
.lq-feature:hover { box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); }
.lq-feature__icon {
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 0.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    margin-bottom: 1rem;
}
.lq-feature__title { font-family: var(--font-nunito); font-size: 1.125rem; font-weight: 700; color: #1F2937; margin: 0 0 0.5rem; }
.lq-feature__text { font-size: 0.875rem; line-height: 1.625; color: #4B5563; margin: 0; }
.lq-trust__stats {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 2rem;
    padding: 2rem;
    border-radius: 1.5rem;
    background: linear-gradient(90deg, #9333EA, #4F46E5);
}
@media (min-width: 768px) { .lq-trust__stats { grid-template-columns: repeat(4, 1fr); padding: 3rem; } }
.lq-trust__stat { text-align: center; }
.lq-trust__value { font-family: var(--font-nunito); font-size: clamp(1.875rem, 4vw, 2.25rem); font-weight: 700; color: white; margin-bottom: 0.5rem; }
.lq-trust__label { font-size: 0.875rem; color: #E9D5FF; }
.lq-trust__badges { margin-top: 3rem; display: flex; flex-wrap: wrap; align-items: center; justify-content: center; gap: 2rem; }
.lq-trust__badge {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    background: #F3F4F6;
    font-size: 0.875rem;
    font-weight: 500;
    color: #374151;
}
.lq-trust__badge-icon { font-size: 1.125rem; }
"#;
