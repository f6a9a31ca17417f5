use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod scroll_lock;
mod gallery {
    pub mod media;
    pub mod lightbox;
    pub mod swipe;
    pub mod dom;
    pub mod component;
}
mod components {
    pub mod nav;
    pub mod signup_popup;
    pub mod floating_order;
}
mod pages {
    pub mod home;
}

use components::nav::Nav;
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
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Nothing smoking here"}</h1>
                    <Link<Route> to={Route::Home} classes="forward-link">
                        {"Back to the pit"}
                    </Link<Route>>
                </div>
            }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
