use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod color;
mod components;
mod config;
mod content;
mod error;
mod motion;
mod pages;
mod sections;
mod tilt;

use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting LearnQuest");
    yew::Renderer::<App>::new().render();
}
