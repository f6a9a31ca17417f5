use yew::prelude::*;

use crate::components::floating_order::FloatingOrderButton;
use crate::components::signup_popup::SignupPopup;
use crate::gallery::component::Gallery;

const MENU: &[(&str, &str, &str)] = &[
    ("Brisket", "Prime brisket, 14 hours over post oak.", "$28 / lb"),
    ("Pulled Pork", "Shoulder smoked low and slow, hand pulled.", "$18 / lb"),
    ("St. Louis Ribs", "Dry rub, cherry glaze on request.", "$32 / rack"),
    ("Smoked Sausage", "Jalapeño cheddar links made in house.", "$14 / lb"),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page" id="top">
            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <h1>{"Wolfpack Provisions"}</h1>
                    <p class="hero-subtitle">
                        {"Small-batch smoked meats for the whole pack. Pick up on weekends or have us cater your next gathering."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#order"><button class="hero-cta">{"Order Now"}</button></a>
                        <a href="#menu" class="faq-link">{"See the menu"}</a>
                    </div>
                </div>
            </header>

            <section id="about" class="feature-block">
                <div class="feature-content">
                    <h2>{"Fire, Smoke, Patience"}</h2>
                    <p>{"Every cut is trimmed by hand, rubbed the night before and cooked on an offset smoker until it's ready, not until the clock says so."}</p>
                </div>
            </section>

            <section id="menu" class="menu-section">
                <h2>{"This Week's Smoke"}</h2>
                <ul class="menu-list">
                    { for MENU.iter().map(|(name, description, price)| html! {
                        <li class="menu-item">
                            <div>
                                <h3>{*name}</h3>
                                <p>{*description}</p>
                            </div>
                            <span class="menu-price">{*price}</span>
                        </li>
                    }) }
                </ul>
            </section>

            <Gallery />

            <section id="order" class="order-section">
                <h2>{"Order for Pickup"}</h2>
                <p>{"Orders close Thursday at 8pm for weekend pickup. Catering for 20+ guests needs a week's notice."}</p>
                <a href="mailto:orders@wolfpackprovisions.com" class="hero-cta">{"Email Your Order"}</a>
            </section>

            <footer id="contact" class="footer">
                <p>{"Wolfpack Provisions · orders@wolfpackprovisions.com"}</p>
            </footer>

            <SignupPopup />
            <FloatingOrderButton />
        </div>
    }
}
