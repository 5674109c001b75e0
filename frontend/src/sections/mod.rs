//! The landing page, one component per section, top to bottom.

pub mod final_cta;
pub mod footer;
pub mod gamification;
pub mod header;
pub mod hero;
pub mod how_it_works;
pub mod subjects;
pub mod testimonials;
pub mod trust;

pub use final_cta::FinalCta;
pub use footer::Footer;
pub use gamification::Gamification;
pub use header::Header;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use subjects::SubjectsGames;
pub use testimonials::Testimonials;
pub use trust::TrustSection;

use yew::prelude::*;

use crate::motion::entrance_class;
use crate::motion::variants::{FADE_IN_UP, STAGGER};

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub eyebrow: AttrValue,
    /// Colors of the eyebrow pill.
    pub eyebrow_class: &'static str,
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub visible: bool,
    #[prop_or_default]
    pub dark: bool,
}

/// Eyebrow pill, heading and lead paragraph rising in one after another.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let rise = |i| entrance_class(&FADE_IN_UP, STAGGER.delay_for(i), props.visible);

    html! {
        <div class={classes!("lq-heading", props.dark.then_some("lq-heading--dark"))}>
            <span class={classes!("lq-heading__eyebrow", props.eyebrow_class, rise(0))}>
                { props.eyebrow.clone() }
            </span>
            <h2 class={classes!("lq-heading__title", rise(1))}>{ props.title.clone() }</h2>
            <p class={classes!("lq-heading__subtitle", rise(2))}>{ props.subtitle.clone() }</p>
        </div>
    }
}

pub const CSS: &str = r#"
.lq-section { position: relative; overflow: hidden; padding: 5rem 1rem; }
.lq-container { position: relative; z-index: 1; max-width: 72rem; margin: 0 auto; }
.lq-container--narrow { max-width: 56rem; }
.lq-blob { position: absolute; border-radius: 9999px; filter: blur(64px); pointer-events: none; }
.lq-heading { text-align: center; margin-bottom: 4rem; }
.lq-heading__eyebrow {
    display: inline-block;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    font-size: 0.875rem;
    font-weight: 600;
    margin-bottom: 1rem;
}
.lq-heading__title {
    font-family: var(--font-nunito);
    font-size: clamp(1.875rem, 4vw, 3rem);
    font-weight: 700;
    color: #1F2937;
    margin: 0 0 1rem;
}
.lq-heading__subtitle { font-size: 1.125rem; color: #4B5563; max-width: 42rem; margin: 0 auto; }
.lq-heading--dark .lq-heading__title { color: white; }
.lq-heading--dark .lq-heading__subtitle { color: #E9D5FF; }
.lq-pill--purple { background: #F3E8FF; color: #7E22CE; }
.lq-pill--indigo { background: #E0E7FF; color: #4338CA; }
.lq-pill--green { background: #DCFCE7; color: #15803D; }
.lq-pill--pink { background: #FCE7F3; color: #BE185D; }
.lq-pill--gold { background: rgba(250, 204, 21, 0.2); color: #FDE047; }
"#;
