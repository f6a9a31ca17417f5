use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config;

pub fn past_scroll_threshold(scroll_y: f64) -> bool {
    scroll_y > config::FLOATING_BUTTON_SCROLL_Y
}

#[function_component(FloatingOrderButton)]
pub fn floating_order_button() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scroll_window = window.clone();
                let callback = Closure::wrap(Box::new(move || {
                    let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                    visible.set(past_scroll_threshold(scroll_y));
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                (window, callback)
            });

            move || {
                if let Some((window, callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    html! {
        <a
            id="floating-order-btn"
            href="#order"
            class={classes!("floating-order-btn", (*visible).then(|| "visible"))}
        >
            {"Order Now"}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_only_past_threshold() {
        assert!(!past_scroll_threshold(0.0));
        assert!(!past_scroll_threshold(300.0));
        assert!(past_scroll_threshold(300.5));
        assert!(past_scroll_threshold(1200.0));
    }
}
