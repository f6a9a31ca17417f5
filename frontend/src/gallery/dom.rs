use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, EventTarget, HtmlMediaElement, KeyboardEvent,
    TouchEvent,
};

use crate::gallery::lightbox::{Direction, Lightbox, LightboxView};
use crate::gallery::media::{GalleryError, MediaItem, MediaKind};
use crate::scroll_lock;

/// Lightbox view backed by the `#lightbox` overlay markup.
pub struct DomLightboxView {
    document: Document,
    overlay: Element,
    content: Element,
    counter: Option<Element>,
}

impl DomLightboxView {
    pub fn from_document(document: &Document) -> Result<Self, GalleryError> {
        let overlay = document
            .get_element_by_id("lightbox")
            .ok_or(GalleryError::MissingElement("lightbox"))?;
        let content = document
            .get_element_by_id("lightbox-content")
            .ok_or(GalleryError::MissingElement("lightbox-content"))?;

        Ok(Self {
            document: document.clone(),
            overlay,
            content,
            counter: document.get_element_by_id("lightbox-counter"),
        })
    }

    fn append_media(&self, element: &Element) {
        if let Err(e) = self.content.append_child(element) {
            warn!("Failed to insert lightbox media: {:?}", e);
        }
    }
}

impl LightboxView for DomLightboxView {
    fn set_visible(&mut self, visible: bool) {
        let _ = self.overlay.class_list().toggle_with_force("active", visible);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        scroll_lock::set_scroll_locked(locked);
    }

    fn halt_playback(&mut self) {
        let video = self
            .content
            .query_selector("video")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok());

        if let Some(video) = video {
            let _ = video.pause();
        }
    }

    fn clear_content(&mut self) {
        self.content.set_inner_html("");
    }

    fn show_image(&mut self, src: &str) {
        if let Ok(img) = self.document.create_element("img") {
            let _ = img.set_attribute("src", src);
            let _ = img.set_attribute("alt", "Gallery Image");
            self.append_media(&img);
        }
    }

    fn show_video(&mut self, src: &str) {
        let video = self
            .document
            .create_element("video")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok());

        if let Some(video) = video {
            video.set_src(src);
            video.set_controls(true);
            video.set_autoplay(true);
            let style = video.style();
            let _ = style.set_property("max-width", "100%");
            let _ = style.set_property("max-height", "85vh");
            self.append_media(&video);
        }
    }

    fn set_counter(&mut self, text: &str) {
        if let Some(counter) = &self.counter {
            counter.set_text_content(Some(text));
        }
    }
}

type SharedLightbox = Rc<RefCell<Lightbox<DomLightboxView>>>;

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

/// Event listeners wiring the page to a lightbox. Dropping it unregisters them.
pub struct LightboxBindings {
    lightbox: SharedLightbox,
    listeners: Vec<Listener>,
}

impl LightboxBindings {
    fn listen<F>(&mut self, target: &EventTarget, event: &'static str, passive: bool, handler: F)
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);

        let result = if passive {
            let mut options = AddEventListenerOptions::new();
            options.passive(true);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
        } else {
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        };

        if let Err(e) = result {
            warn!("Failed to listen for {}: {:?}", event, e);
            return;
        }
        self.listeners.push(Listener {
            target: target.clone(),
            event,
            callback,
        });
    }

    fn on_click_navigate(&mut self, document: &Document, id: &str, direction: Direction) {
        // prev/next controls are optional
        if let Some(control) = document.get_element_by_id(id) {
            let lightbox = self.lightbox.clone();
            self.listen(&control, "click", false, move |_| {
                lightbox.borrow_mut().navigate(direction);
            });
        }
    }
}

impl Drop for LightboxBindings {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Collects the `.gallery-item` thumbnails in document order.
fn collect_items(document: &Document) -> Vec<(Element, MediaItem)> {
    let Ok(nodes) = document.query_selector_all(".gallery-item") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|el| {
            let src = el.get_attribute("data-src")?;
            let kind = MediaKind::from_data_type(&el.get_attribute("data-type").unwrap_or_default());
            Some((el, MediaItem::new(kind, src)))
        })
        .collect()
}

/// Builds the lightbox from the page markup and wires click, keyboard and
/// touch input to it.
pub fn mount(document: &Document) -> Result<LightboxBindings, GalleryError> {
    let view = DomLightboxView::from_document(document)?;
    let overlay = view.overlay.clone();

    let thumbnails = collect_items(document);
    let items = thumbnails.iter().map(|(_, item)| item.clone()).collect();
    let lightbox = Rc::new(RefCell::new(Lightbox::new(items, view)));

    let mut bindings = LightboxBindings {
        lightbox: lightbox.clone(),
        listeners: Vec::new(),
    };

    for (index, (thumbnail, _)) in thumbnails.iter().enumerate() {
        let lightbox = lightbox.clone();
        bindings.listen(thumbnail, "click", false, move |_| {
            lightbox.borrow_mut().open(index);
        });
    }

    if let Some(close) = document.get_element_by_id("lightbox-close") {
        let lightbox = lightbox.clone();
        bindings.listen(&close, "click", false, move |_| {
            lightbox.borrow_mut().close();
        });
    }

    bindings.on_click_navigate(document, "lightbox-prev", Direction::Prev);
    bindings.on_click_navigate(document, "lightbox-next", Direction::Next);

    {
        let lightbox = lightbox.clone();
        let backdrop: EventTarget = overlay.clone().into();
        bindings.listen(&overlay, "click", false, move |e| {
            // only clicks on the backdrop itself, not on the media inside it
            if e.target().as_ref() == Some(&backdrop) {
                lightbox.borrow_mut().close();
            }
        });
    }

    {
        let lightbox = lightbox.clone();
        bindings.listen(document, "keydown", false, move |e| {
            if let Some(event) = e.dyn_ref::<KeyboardEvent>() {
                lightbox.borrow_mut().handle_key(&event.key());
            }
        });
    }

    {
        let lightbox = lightbox.clone();
        bindings.listen(&overlay, "touchstart", true, move |e| {
            if let Some(x) = first_changed_touch_x(&e) {
                lightbox.borrow_mut().touch_start(x);
            }
        });
    }

    {
        let lightbox = lightbox.clone();
        bindings.listen(&overlay, "touchend", true, move |e| {
            if let Some(x) = first_changed_touch_x(&e) {
                lightbox.borrow_mut().touch_end(x);
            }
        });
    }

    info!(
        "Lightbox ready with {} items",
        lightbox.borrow().state().items().len()
    );
    Ok(bindings)
}

fn first_changed_touch_x(e: &web_sys::Event) -> Option<f64> {
    let touch = e.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(touch.screen_x() as f64)
}
