use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const REVEAL_SELECTOR: &str = ".reveal";
const REVEAL_THRESHOLD: f64 = 0.08;
const STAGGER_MS: u32 = 100;

pub fn transition_delay(index: u32) -> String {
    format!("{}ms", index * STAGGER_MS)
}

/// Fades in every `.reveal` element already in the page the first time it
/// scrolls into view. Mount it after the content it should observe.
#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll() -> Html {
    use_effect_with_deps(
        move |_| {
            let on_intersect = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        if let Err(e) = entry.target().class_list().add_1("visible") {
                            log::warn!("Failed to reveal element: {:?}", e);
                        }
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>);

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

            let observer = match IntersectionObserver::new_with_options(
                on_intersect.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => Some(observer),
                Err(e) => {
                    log::warn!("Scroll reveal unavailable: {:?}", e);
                    None
                }
            };

            if let Some(observer) = observer.as_ref() {
                observe_reveal_targets(observer);
            }

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(on_intersect);
            }
        },
        (),
    );

    html! {}
}

fn observe_reveal_targets(observer: &IntersectionObserver) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(targets) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };

    for index in 0..targets.length() {
        let Some(node) = targets.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        if let Err(e) = element
            .style()
            .set_property("transition-delay", &transition_delay(index))
        {
            log::warn!("Failed to stagger reveal element {}: {:?}", index, e);
        }
        observer.observe(&element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_are_staggered_in_document_order() {
        assert_eq!(transition_delay(0), "0ms");
        assert_eq!(transition_delay(1), "100ms");
        assert_eq!(transition_delay(7), "700ms");
    }
}
