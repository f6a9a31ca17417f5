use yew::prelude::*;
use yew_hooks::use_event_with_window;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, Node};

use crate::scroll_lock;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#menu", "Menu"),
    ("#gallery", "Gallery"),
    ("#order", "Order"),
    ("#contact", "Contact"),
];

fn contains_target(node_ref: &NodeRef, e: &MouseEvent) -> bool {
    let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
    match (node_ref.get(), target) {
        (Some(node), Some(target)) => node.contains(Some(&target)),
        _ => false,
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let menu_ref = use_node_ref();
    let hamburger_ref = use_node_ref();

    {
        use_effect_with_deps(
            move |open| {
                scroll_lock::set_scroll_locked(*open);
                || ()
            },
            *menu_open,
        );
    }

    // Click anywhere outside the menu closes it
    {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let hamburger_ref = hamburger_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            if *menu_open && !contains_target(&menu_ref, &e) && !contains_target(&hamburger_ref, &e) {
                menu_open.set(false);
            }
        });
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && *menu_open {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let active = (*menu_open).then(|| "active");

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#top" class="nav-logo">{"Wolfpack Provisions"}</a>

                <button
                    id="hamburger"
                    ref={hamburger_ref}
                    class={classes!("hamburger", active)}
                    aria-label="Toggle navigation"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul id="nav-menu" ref={menu_ref} class={classes!("nav-menu", active)}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li>
                            <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                        </li>
                    }) }
                </ul>
            </div>
        </nav>
    }
}
