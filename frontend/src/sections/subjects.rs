use yew::prelude::*;

use crate::components::{Card, HoverEffect};
use crate::config::SECTION_VIEW_MARGIN;
use crate::content::{Stat, Subject, CATALOGUE_STATS, SUBJECTS};
use crate::motion::variants::{FADE_IN_UP, SCALE_IN, STAGGER};
use crate::motion::{entrance_class, use_in_view};

use super::SectionHeading;

/// Subject cards tilt further than the kit default.
const SUBJECT_TILT_DEG: f64 = 15.0;

fn subject_card(subject: &Subject) -> Html {
    let fill = format!("background: {};", subject.gradient);
    html! {
        <Card hover={HoverEffect::Tilt} tilt_deg={SUBJECT_TILT_DEG} class="lq-subject">
            <div class="lq-subject__tint" style={fill.clone()}></div>
            <div class="lq-subject__icon" style={fill.clone()}>
                <span>{ subject.icon }</span>
            </div>
            <h3 class="lq-subject__title">{ subject.title }</h3>
            <p class="lq-subject__text">{ subject.description }</p>
            <div class="lq-subject__skills">
                { for subject.skills.iter().map(|skill| html! {
                    <span key={*skill} class="lq-subject__skill">{ *skill }</span>
                }) }
            </div>
            <div class="lq-subject__games" style={fill}>
                <span>{"🎮"}</span>
                <span>{ format!("{}+ Games", subject.games) }</span>
            </div>
            <div class="lq-subject__star">{"⭐"}</div>
        </Card>
    }
}

fn stat_card(stat: &Stat, visible: bool) -> Html {
    html! {
        <div class={classes!("lq-stat", entrance_class(&SCALE_IN, 0, visible))}>
            <div class="lq-stat__icon">{ stat.icon }</div>
            <div class="lq-stat__value lq-gradient-text">{ stat.value }</div>
            <div class="lq-stat__label">{ stat.label }</div>
        </div>
    }
}

#[function_component(SubjectsGames)]
pub fn subjects_games() -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), SECTION_VIEW_MARGIN);

    html! {
        <section ref={node} id="subjects" class="lq-section lq-subjects">
            <style>{ CSS }</style>
            <div class="lq-blob" style="top: 5rem; right: 2.5rem; width: 18rem; height: 18rem; background: #E9D5FF; opacity: 0.3;"></div>
            <div class="lq-blob" style="bottom: 5rem; left: 2.5rem; width: 20rem; height: 20rem; background: #BFDBFE; opacity: 0.3;"></div>

            <div class="lq-container">
                <SectionHeading
                    eyebrow="📖 Choose Your Adventure"
                    eyebrow_class="lq-pill--indigo"
                    title="Subjects & Games"
                    subtitle="Pick a subject and dive into hundreds of exciting games designed just for you!"
                    {visible}
                />

                <div class="lq-subjects__grid">
                    { for SUBJECTS.iter().enumerate().map(|(i, subject)| html! {
                        <div key={subject.id} class={entrance_class(&FADE_IN_UP, STAGGER.delay_for(i), visible)}>
                            { subject_card(subject) }
                        </div>
                    }) }
                </div>

                <div class={classes!("lq-stats", entrance_class(&FADE_IN_UP, 800, visible))}>
                    { for CATALOGUE_STATS.iter().map(|stat| html! {
                        <div key={stat.label}>{ stat_card(stat, visible) }</div>
                    }) }
                </div>
            </div>
        </section>
    }
}

const CSS: &str = r#"
.lq-subjects { background: linear-gradient(180deg, #F8FAFC 0%, #EFF6FF 100%); }
.lq-subjects__grid { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }
@media (min-width: 640px) { .lq-subjects__grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .lq-subjects__grid { grid-template-columns: repeat(4, 1fr); } }
.lq-subject { background: white; border-radius: 1.5rem; padding: 1.5rem; cursor: pointer; box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); }
.lq-subject__tint { position: absolute; inset: 0; opacity: 0; transition: opacity 0.3s; pointer-events: none; }
.lq-subject:hover .lq-subject__tint { opacity: 0.1; }
.lq-subject__icon {
    width: 4rem;
    height: 4rem;
    margin: 0 auto 1rem;
    border-radius: 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.875rem;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}
.lq-subject__icon:hover { animation: lq-subject-wiggle 0.4s; }
@keyframes lq-subject-wiggle {
    0%, 100% { transform: rotate(0); }
    33% { transform: rotate(-10deg); }
    66% { transform: rotate(10deg); }
}
.lq-subject__icon span { transition: transform 0.2s; }
.lq-subject:hover .lq-subject__icon span { transform: scale(1.1); }
.lq-subject__title { font-family: var(--font-nunito); font-size: 1.125rem; font-weight: 700; color: #1F2937; text-align: center; margin: 0 0 0.5rem; }
.lq-subject__text { font-size: 0.875rem; color: #4B5563; text-align: center; line-height: 1.625; margin: 0 0 1rem; }
.lq-subject__skills { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.5rem; margin-bottom: 1rem; }
.lq-subject__skill { padding: 0.25rem 0.5rem; border-radius: 9999px; background: #F3F4F6; color: #4B5563; font-size: 0.75rem; font-weight: 500; }
.lq-subject__games {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    color: white;
    font-size: 0.875rem;
    font-weight: 700;
}
.lq-subject__star {
    position: absolute;
    top: 0.5rem;
    right: 0.5rem;
    font-size: 1.125rem;
    opacity: 0;
    transition: opacity 0.3s;
    animation: lq-spin 4s linear infinite;
}
.lq-subject:hover .lq-subject__star { opacity: 1; }
@keyframes lq-spin { to { transform: rotate(360deg); } }
.lq-stats { margin-top: 4rem; display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
@media (min-width: 768px) { .lq-stats { grid-template-columns: repeat(4, 1fr); } }
.lq-stat {
    background: white;
    border-radius: 1rem;
    padding: 1.5rem;
    text-align: center;
    border: 1px solid #F3F4F6;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    transition: transform 0.3s, box-shadow 0.3s;
}
.lq-stat:hover { transform: translateY(-5px); box-shadow: 0 15px 30px rgba(0, 0, 0, 0.1); }
.lq-stat__icon { font-size: 1.875rem; margin-bottom: 0.5rem; }
.lq-stat__value { font-family: var(--font-nunito); font-size: clamp(1.5rem, 3vw, 1.875rem); font-weight: 700; margin-bottom: 0.25rem; }
.lq-stat__label { font-size: 0.875rem; color: #4B5563; }
"#;
