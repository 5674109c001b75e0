use std::rc::Rc;

use yew::prelude::*;

use crate::carousel::{
    AutoAdvance, CarouselAction, CarouselState, Direction, GlooIntervals, SlideChange,
};
use crate::color::with_alpha;
use crate::config::{CarouselConfig, SECTION_VIEW_MARGIN};
use crate::content::{Testimonial, AUDIENCE_PILLS, TESTIMONIALS};
use crate::motion::css::transition_class;
use crate::motion::variants::{Pose, SlideVariants, Transition, FADE_IN_UP};
use crate::motion::{entrance_class, use_in_view};

use super::SectionHeading;

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "forward",
        Direction::Backward => "backward",
        Direction::Still => "still",
    }
}

/// Keyframe name, start pose, end pose and timing of one half of a slide
/// change.
pub fn slide_motion(
    slides: &SlideVariants,
    change: &SlideChange,
    incoming: bool,
) -> (String, Pose, Pose, Transition) {
    let dir = direction_name(change.direction);
    if incoming {
        (
            format!("slide-enter-{}", dir),
            slides.enter(change.direction),
            slides.center(),
            slides.enter,
        )
    } else {
        (
            format!("slide-exit-{}", dir),
            slides.center(),
            slides.exit(change.direction),
            slides.exit,
        )
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = &props.testimonial;
    html! {
        <div class="lq-quote">
            <div class="lq-quote__mark">{"\u{201C}"}</div>
            <p class="lq-quote__text">{ t.content }</p>
            <div class="lq-quote__author">
                <div class="lq-quote__avatar" style={format!("background: {};", with_alpha(t.color, "20"))}>
                    { t.avatar }
                </div>
                <div class="lq-quote__who">
                    <div class="lq-quote__name">{ t.name }</div>
                    <div class="lq-quote__role">{ t.role }</div>
                </div>
                <div class="lq-quote__stars">
                    { for (0..t.rating).map(|i| html! { <span key={i}>{"★"}</span> }) }
                </div>
            </div>
            <div class="lq-quote__type" style={format!("background: {};", t.color)}>
                { t.audience.label() }
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let config = CarouselConfig::default();
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), SECTION_VIEW_MARGIN);
    let carousel = use_reducer(|| {
        let items: Rc<[Testimonial]> = TESTIMONIALS.to_vec().into();
        CarouselState::new(items)
    });

    // One timer for the lifetime of the section.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |period_ms: &u32| {
                let mut auto = AutoAdvance::start(&GlooIntervals, *period_ms, move || {
                    dispatcher.dispatch(CarouselAction::Tick)
                });
                move || auto.stop()
            },
            config.auto_advance_ms,
        );
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Previous))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    let slides = SlideVariants::from_config(&config);
    let render_slide = |index: usize, key: String, class: Classes| -> Html {
        match carousel.items().get(index) {
            Some(t) => html! {
                <div {key} class={classes!("lq-slide", class)}>
                    <TestimonialCard testimonial={t.clone()} />
                </div>
            },
            None => html! {},
        }
    };

    let stage = match carousel.last_change() {
        None => render_slide(carousel.current_index(), "slide-initial".to_string(), Classes::new()),
        Some(change) => {
            let (out_name, out_from, out_to, out_t) = slide_motion(&slides, &change, false);
            let (in_name, in_from, in_to, in_t) = slide_motion(&slides, &change, true);
            html! {
                <>
                    { render_slide(
                        change.outgoing,
                        format!("out-{}", change.seq),
                        transition_class(&out_name, &out_from, &out_to, out_t),
                    ) }
                    { render_slide(
                        change.incoming,
                        format!("in-{}", change.seq),
                        transition_class(&in_name, &in_from, &in_to, in_t),
                    ) }
                </>
            }
        }
    };

    let current = carousel.current_index();
    let dots = (0..carousel.len()).map(|index| {
        let carousel = carousel.clone();
        let onclick =
            Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::JumpTo(index)));
        html! {
            <button
                key={index}
                class={classes!("lq-dot", (index == current).then_some("lq-dot--active"))}
                {onclick}
                aria-label={format!("Go to testimonial {}", index + 1)}
            />
        }
    });

    html! {
        <section ref={node} id="testimonials" class="lq-section lq-testimonials">
            <style>{ CSS }</style>
            <div class="lq-blob" style="top: 5rem; left: 2.5rem; width: 16rem; height: 16rem; background: #E9D5FF; opacity: 0.3;"></div>
            <div class="lq-blob" style="bottom: 5rem; right: 2.5rem; width: 20rem; height: 20rem; background: #BFDBFE; opacity: 0.3;"></div>

            <div class="lq-container lq-container--narrow">
                <SectionHeading
                    eyebrow="💬 What People Say"
                    eyebrow_class="lq-pill--pink"
                    title="Loved by Students & Parents"
                    subtitle="Join thousands of happy learners!"
                    {visible}
                />

                <div class={classes!("lq-carousel", entrance_class(&FADE_IN_UP, 300, visible))}>
                    <div class="lq-carousel__stage">{ stage }</div>
                    <div class="lq-carousel__nav">
                        <button class="lq-carousel__arrow" onclick={on_prev} aria-label="Previous testimonial">{"←"}</button>
                        <div class="lq-carousel__dots">{ for dots }</div>
                        <button class="lq-carousel__arrow" onclick={on_next} aria-label="Next testimonial">{"→"}</button>
                    </div>
                </div>

                <div class={classes!("lq-type-pills", entrance_class(&FADE_IN_UP, 600, visible))}>
                    { for AUDIENCE_PILLS.iter().enumerate().map(|(i, (emoji, label))| html! {
                        <button key={*label} class={classes!("lq-type-pill", (i == 0).then_some("lq-type-pill--active"))}>
                            <span>{ *emoji }</span>
                            <span>{ *label }</span>
                        </button>
                    }) }
                </div>
            </div>
        </section>
    }
}

const CSS: &str = r#"
.lq-testimonials { background: linear-gradient(180deg, #F8FAFC 0%, #EEF2FF 100%); }
.lq-carousel { position: relative; }
.lq-carousel__stage { position: relative; height: 320px; overflow: hidden; }
@media (min-width: 640px) { .lq-carousel__stage { height: 280px; } }
.lq-slide { position: absolute; inset: 0; }
.lq-quote {
    position: relative;
    height: 100%;
    box-sizing: border-box;
    background: white;
    border-radius: 1.5rem;
    padding: 2rem;
    border: 1px solid #F3F4F6;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}
.lq-quote__mark { font-size: 2.25rem; color: #E9D5FF; margin-bottom: 1rem; }
.lq-quote__text { font-size: 1.125rem; line-height: 1.625; color: #374151; margin: 0 0 1.5rem; }
.lq-quote__author { display: flex; align-items: center; gap: 1rem; }
.lq-quote__avatar {
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.875rem;
}
.lq-quote__who { flex: 1; }
.lq-quote__name { font-family: var(--font-nunito); font-weight: 700; color: #1F2937; }
.lq-quote__role { font-size: 0.875rem; color: #6B7280; }
.lq-quote__stars { display: flex; gap: 0.25rem; color: #FACC15; font-size: 1.125rem; }
.lq-quote__type {
    position: absolute;
    top: 1.5rem;
    right: 1.5rem;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 600;
    color: white;
}
.lq-carousel__nav { display: flex; align-items: center; justify-content: center; gap: 1rem; margin-top: 2rem; }
.lq-carousel__arrow {
    width: 3rem;
    height: 3rem;
    border: none;
    border-radius: 9999px;
    background: white;
    color: #4B5563;
    cursor: pointer;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    transition: transform 0.2s, color 0.2s;
}
.lq-carousel__arrow:hover { transform: scale(1.1); color: #9333EA; }
.lq-carousel__arrow:active { transform: scale(0.95); }
.lq-carousel__dots { display: flex; gap: 0.5rem; }
.lq-dot {
    width: 0.75rem;
    height: 0.75rem;
    border: none;
    padding: 0;
    border-radius: 9999px;
    background: #D1D5DB;
    cursor: pointer;
    transition: all 0.3s;
}
.lq-dot:hover { background: #9CA3AF; }
.lq-dot--active, .lq-dot--active:hover { width: 2rem; background: #9333EA; }
.lq-type-pills { display: flex; justify-content: center; gap: 1rem; margin-top: 2rem; }
.lq-type-pill {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 9999px;
    font-size: 0.875rem;
    font-weight: 500;
    background: #F3F4F6;
    color: #4B5563;
    cursor: pointer;
    transition: transform 0.2s, background 0.2s;
}
.lq-type-pill:hover { transform: scale(1.05); background: #E5E7EB; }
.lq-type-pill--active, .lq-type-pill--active:hover { background: #F3E8FF; color: #7E22CE; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn change(direction: Direction) -> SlideChange {
        SlideChange {
            seq: 0,
            incoming: 1,
            outgoing: 0,
            direction,
        }
    }

    #[test]
    fn forward_change_enters_right_and_exits_left() {
        let slides = SlideVariants::from_config(&CarouselConfig::default());
        let (name, from, to, _) = slide_motion(&slides, &change(Direction::Forward), true);
        assert_eq!(name, "slide-enter-forward");
        assert_eq!(from.x, 300.0);
        assert_eq!(to, Pose::REST);

        let (name, from, to, _) = slide_motion(&slides, &change(Direction::Forward), false);
        assert_eq!(name, "slide-exit-forward");
        assert_eq!(from, Pose::REST);
        assert_eq!(to.x, -300.0);
        assert_eq!(to.scale, 0.9);
        assert_eq!(to.opacity, 0.0);
    }

    #[test]
    fn backward_change_is_mirrored() {
        let slides = SlideVariants::from_config(&CarouselConfig::default());
        let (_, enter_from, _, _) = slide_motion(&slides, &change(Direction::Backward), true);
        let (_, _, exit_to, _) = slide_motion(&slides, &change(Direction::Backward), false);
        assert_eq!(enter_from.x, -300.0);
        assert_eq!(exit_to.x, 300.0);
    }

    #[test]
    fn halves_run_for_the_same_duration() {
        let slides = SlideVariants::from_config(&CarouselConfig::default());
        let (_, _, _, enter) = slide_motion(&slides, &change(Direction::Forward), true);
        let (_, _, _, exit) = slide_motion(&slides, &change(Direction::Forward), false);
        match (enter, exit) {
            (
                Transition::Tween { duration_ms: a, .. },
                Transition::Tween { duration_ms: b, .. },
            ) => assert_eq!((a, b), (500, 500)),
            other => panic!("expected tweens, got {:?}", other),
        }
    }
}
