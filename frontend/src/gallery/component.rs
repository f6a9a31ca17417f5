use log::warn;
use yew::prelude::*;

use crate::gallery::dom;
use crate::gallery::media::{gallery_entries, GalleryEntry, MediaKind};

fn render_thumbnail(entry: &GalleryEntry) -> Html {
    html! {
        <div
            class={classes!("gallery-item", (entry.kind == MediaKind::Video).then(|| "is-video"))}
            data-type={entry.kind.as_data_type()}
            data-src={entry.src.clone()}
        >
            <img src={entry.thumbnail().to_string()} loading="lazy" alt={entry.alt_text().to_string()} />
            {
                if entry.kind == MediaKind::Video {
                    html! { <span class="play-badge">{"▶"}</span> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let entries = use_memo(|_| gallery_entries(), ());

    // The overlay is driven directly through the DOM once the markup exists.
    {
        use_effect_with_deps(
            move |_| {
                let bindings = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|document| match dom::mount(&document) {
                        Ok(bindings) => Some(bindings),
                        Err(e) => {
                            warn!("Gallery disabled: {}", e);
                            None
                        }
                    });

                move || drop(bindings)
            },
            (),
        );
    }

    html! {
        <section id="gallery" class="gallery-section">
            <h2>{"From the Pit"}</h2>
            <p class="section-subtitle">{"Tap any photo or clip to take a closer look."}</p>
            <div class="gallery-grid">
                { for entries.iter().map(render_thumbnail) }
            </div>

            <div id="lightbox" class="lightbox">
                <button id="lightbox-close" class="lightbox-close" aria-label="Close">{"×"}</button>
                <button id="lightbox-prev" class="lightbox-nav lightbox-prev" aria-label="Previous">{"‹"}</button>
                <div id="lightbox-content" class="lightbox-content"></div>
                <button id="lightbox-next" class="lightbox-nav lightbox-next" aria-label="Next">{"›"}</button>
                <div id="lightbox-counter" class="lightbox-counter"></div>
            </div>
        </section>
    }
}
