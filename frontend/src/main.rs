use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod styles;
mod intake {
    pub mod controller;
    pub mod flow;
    pub mod form;
    pub mod modal;
    pub mod submit;
}
mod pages {
    pub mod content;
    pub mod home;
}
mod components {
    pub mod nav;
    pub mod reveal;
}

use pages::home::Home;

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
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1 class="font-display text-white">{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>{"Back to Eccentric Systems"}</Link<Route>>
        </div>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{styles::GLOBAL_CSS}</style>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
