use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Button, ButtonSize};
use crate::motion::variants::{HOVER_BOB, POP_IN};
use crate::motion::{entrance_class, loop_class};
use crate::pages::landing::GLOBAL_CSS;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator();
    let go_home = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <>
            <style>{ GLOBAL_CSS }</style>
            <style>{ crate::components::kit_css() }</style>
            <style>{ CSS }</style>
            <div class="lq-lost">
                <div class={classes!("lq-lost__card", entrance_class(&POP_IN, 0, true))}>
                    <div class={classes!("lq-lost__owl", loop_class(&HOVER_BOB, 0))}>{"🦉"}</div>
                    <h1 class="lq-lost__title">{"This quest doesn't exist"}</h1>
                    <p class="lq-lost__text">{"The page you were looking for wandered off the map."}</p>
                    <Button size={ButtonSize::Md} onclick={go_home}>{"🏠 Back to LearnQuest"}</Button>
                </div>
            </div>
        </>
    }
}

const CSS: &str = r#"
.lq-lost {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    background: linear-gradient(180deg, #EFF6FF 0%, #DBEAFE 50%, #C7D2FE 100%);
}
.lq-lost__card {
    max-width: 28rem;
    text-align: center;
    padding: 3rem 2rem;
    border-radius: 1.5rem;
    background: rgba(255, 255, 255, 0.8);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}
.lq-lost__owl { font-size: 4rem; margin-bottom: 1rem; }
.lq-lost__title { font-family: var(--font-nunito); font-size: 1.875rem; font-weight: 800; margin: 0 0 0.75rem; }
.lq-lost__text { color: #4B5563; margin: 0 0 2rem; }
"#;
