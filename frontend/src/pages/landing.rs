use yew::prelude::*;

use crate::components::kit_css;
use crate::sections::{
    self, FinalCta, Footer, Gamification, Header, Hero, HowItWorks, SubjectsGames, Testimonials,
    TrustSection,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Start at the top on first mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <style>{ GLOBAL_CSS }</style>
            <style>{ sections::CSS }</style>
            <style>{ kit_css() }</style>
            <Header />
            <main class="lq-page">
                <Hero />
                <HowItWorks />
                <SubjectsGames />
                <Gamification />
                <TrustSection />
                <Testimonials />
                <FinalCta />
            </main>
            <Footer />
        </>
    }
}

pub const GLOBAL_CSS: &str = r#"
:root {
    --font-nunito: 'Nunito', 'Segoe UI', system-ui, sans-serif;
    --font-inter: 'Inter', 'Segoe UI', system-ui, sans-serif;
}
html { scroll-behavior: smooth; }
body {
    margin: 0;
    font-family: var(--font-inter);
    color: #1F2937;
    background: white;
    -webkit-font-smoothing: antialiased;
}
*, *::before, *::after { box-sizing: border-box; }
.lq-page { overflow-x: hidden; }
.lq-gradient-text {
    background: linear-gradient(135deg, #A855F7 0%, #4F46E5 50%, #EC4899 100%);
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
}
::selection { background: #E9D5FF; color: #581C87; }
"#;
