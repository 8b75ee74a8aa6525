use yew::prelude::*;
use yew_hooks::prelude::*;

const SCROLLED_OFFSET: f64 = 40.0;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_request_audit: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > SCROLLED_OFFSET;

    html! {
        <nav class={classes!("nav-container", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-island">
                <div class="nav-left">
                    <img src="/logo.svg" alt="Eccentric Systems Logo" class="nav-logo-img" />
                    <span class="nav-brand font-display">
                        {"Eccentric "}<span class="text-gold">{"Systems"}</span>
                    </span>
                    <span class="nav-pill-tag font-mono text-green">{"Operational Intelligence"}</span>
                </div>
                <div class="nav-right">
                    <button class="btn-nav" onclick={props.on_request_audit.clone()}>
                        {"Get Analysis"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
