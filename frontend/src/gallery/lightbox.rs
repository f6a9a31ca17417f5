use crate::config;
use crate::gallery::media::{MediaItem, MediaKind};
use crate::gallery::swipe::SwipeTracker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// Side effects the lightbox needs from whatever is displaying it.
pub trait LightboxView {
    fn set_visible(&mut self, visible: bool);
    fn set_scroll_locked(&mut self, locked: bool);
    /// Pauses the video currently in the content slot, if there is one.
    fn halt_playback(&mut self);
    fn clear_content(&mut self);
    fn show_image(&mut self, src: &str);
    fn show_video(&mut self, src: &str);
    fn set_counter(&mut self, text: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    items: Vec<MediaItem>,
    current_index: usize,
    is_open: bool,
}

impl GalleryState {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            items,
            current_index: 0,
            is_open: false,
        }
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current(&self) -> Option<&MediaItem> {
        self.items.get(self.current_index)
    }

    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.items.len())
    }
}

pub struct Lightbox<V: LightboxView> {
    state: GalleryState,
    view: V,
    swipe: SwipeTracker,
}

impl<V: LightboxView> Lightbox<V> {
    pub fn new(items: Vec<MediaItem>, view: V) -> Self {
        Self {
            state: GalleryState::new(items),
            view,
            swipe: SwipeTracker::new(config::SWIPE_THRESHOLD_PX),
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Shows the item at `index`. Returns false (and changes nothing) when
    /// the index is out of range, which also covers an empty gallery.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.state.items.len() {
            return false;
        }

        self.state.current_index = index;
        self.state.is_open = true;
        self.view.set_visible(true);
        self.view.set_scroll_locked(true);
        self.render();
        true
    }

    /// Hides the overlay. Closing twice only clears the content again, so
    /// a scroll lock held by something else is left alone.
    pub fn close(&mut self) {
        if self.state.is_open {
            self.state.is_open = false;
            self.view.set_visible(false);
            self.view.set_scroll_locked(false);
        }
        self.view.halt_playback();
        self.view.clear_content();
    }

    pub fn navigate(&mut self, direction: Direction) {
        let len = self.state.items.len();
        if len == 0 || !self.state.is_open {
            return;
        }

        self.view.halt_playback();

        let next = (self.state.current_index as isize + direction.offset()).rem_euclid(len as isize);
        self.state.current_index = next as usize;
        self.render();
    }

    /// Keyboard shortcuts, only while open. Returns whether the key was used.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.state.is_open {
            return false;
        }

        match key {
            "Escape" => self.close(),
            "ArrowLeft" => self.navigate(Direction::Prev),
            "ArrowRight" => self.navigate(Direction::Next),
            _ => return false,
        }
        true
    }

    pub fn touch_start(&mut self, screen_x: f64) {
        self.swipe.touch_start(screen_x);
    }

    pub fn touch_end(&mut self, screen_x: f64) {
        if let Some(direction) = self.swipe.touch_end(screen_x) {
            self.navigate(direction);
        }
    }

    fn render(&mut self) {
        self.view.clear_content();

        let Some(item) = self.state.current() else {
            return;
        };
        match item.kind() {
            MediaKind::Video => self.view.show_video(item.source_url()),
            MediaKind::Image => self.view.show_image(item.source_url()),
        }

        let counter = self.state.counter_text();
        self.view.set_counter(&counter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Visible(bool),
        ScrollLocked(bool),
        Halt,
        Clear,
        Image(String),
        Video(String),
        Counter(String),
    }

    #[derive(Default)]
    struct RecordingView {
        events: Vec<Event>,
    }

    impl RecordingView {
        fn count(&self, f: impl Fn(&Event) -> bool) -> usize {
            self.events.iter().filter(|e| f(*e)).count()
        }

        fn last_counter(&self) -> Option<&str> {
            self.events.iter().rev().find_map(|e| match e {
                Event::Counter(text) => Some(text.as_str()),
                _ => None,
            })
        }

        fn last_media(&self) -> Option<&Event> {
            self.events
                .iter()
                .rev()
                .find(|e| matches!(e, Event::Image(_) | Event::Video(_)))
        }
    }

    impl LightboxView for RecordingView {
        fn set_visible(&mut self, visible: bool) {
            self.events.push(Event::Visible(visible));
        }
        fn set_scroll_locked(&mut self, locked: bool) {
            self.events.push(Event::ScrollLocked(locked));
        }
        fn halt_playback(&mut self) {
            self.events.push(Event::Halt);
        }
        fn clear_content(&mut self) {
            self.events.push(Event::Clear);
        }
        fn show_image(&mut self, src: &str) {
            self.events.push(Event::Image(src.to_string()));
        }
        fn show_video(&mut self, src: &str) {
            self.events.push(Event::Video(src.to_string()));
        }
        fn set_counter(&mut self, text: &str) {
            self.events.push(Event::Counter(text.to_string()));
        }
    }

    fn three_items() -> Lightbox<RecordingView> {
        Lightbox::new(
            vec![
                MediaItem::image("img1.jpg"),
                MediaItem::video("vid1.mp4"),
                MediaItem::image("img2.jpg"),
            ],
            RecordingView::default(),
        )
    }

    #[test]
    fn open_sets_index_and_shows_overlay() {
        for i in 0..3 {
            let mut lightbox = three_items();
            assert!(lightbox.open(i));
            assert_eq!(lightbox.state().current_index(), i);
            assert!(lightbox.state().is_open());
            assert!(lightbox.view().events.contains(&Event::Visible(true)));
            assert!(lightbox.view().events.contains(&Event::ScrollLocked(true)));
        }
    }

    #[test]
    fn open_out_of_range_is_rejected() {
        let mut lightbox = three_items();
        assert!(!lightbox.open(3));
        assert!(!lightbox.state().is_open());
        assert!(lightbox.view().events.is_empty());
    }

    #[test]
    fn empty_gallery_never_opens() {
        let mut lightbox = Lightbox::new(Vec::new(), RecordingView::default());
        assert!(!lightbox.open(0));
        lightbox.navigate(Direction::Next);
        assert!(!lightbox.state().is_open());
        assert!(lightbox.view().events.is_empty());
    }

    #[test]
    fn next_then_prev_is_identity() {
        for start in 0..3 {
            let mut lightbox = three_items();
            lightbox.open(start);
            lightbox.navigate(Direction::Next);
            lightbox.navigate(Direction::Prev);
            assert_eq!(lightbox.state().current_index(), start);
        }
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut lightbox = three_items();
        lightbox.open(2);
        lightbox.navigate(Direction::Next);
        assert_eq!(lightbox.state().current_index(), 0);

        lightbox.navigate(Direction::Prev);
        assert_eq!(lightbox.state().current_index(), 2);
        assert_eq!(lightbox.view().last_counter(), Some("3 / 3"));
    }

    #[test]
    fn close_always_ends_closed() {
        let mut lightbox = three_items();
        lightbox.close();
        assert!(!lightbox.state().is_open());
        assert_eq!(lightbox.view().events, vec![Event::Halt, Event::Clear]);

        lightbox.open(1);
        lightbox.close();
        assert!(!lightbox.state().is_open());
        assert_eq!(
            &lightbox.view().events[lightbox.view().events.len() - 4..],
            &[
                Event::Visible(false),
                Event::ScrollLocked(false),
                Event::Halt,
                Event::Clear,
            ]
        );
    }

    #[test]
    fn counter_tracks_every_render() {
        let mut lightbox = three_items();
        lightbox.open(0);
        assert_eq!(lightbox.view().last_counter(), Some("1 / 3"));
        lightbox.navigate(Direction::Next);
        assert_eq!(lightbox.view().last_counter(), Some("2 / 3"));
        lightbox.navigate(Direction::Prev);
        lightbox.navigate(Direction::Prev);
        assert_eq!(lightbox.view().last_counter(), Some("3 / 3"));
    }

    #[test]
    fn swipe_distance_decides_navigation() {
        let mut lightbox = three_items();
        lightbox.open(0);
        let halts = lightbox.view().count(|e| *e == Event::Halt);

        lightbox.touch_start(300.0);
        lightbox.touch_end(240.0);
        assert_eq!(lightbox.state().current_index(), 1);
        assert_eq!(lightbox.view().count(|e| *e == Event::Halt), halts + 1);

        lightbox.touch_start(300.0);
        lightbox.touch_end(270.0);
        assert_eq!(lightbox.state().current_index(), 1);
        assert_eq!(lightbox.view().count(|e| *e == Event::Halt), halts + 1);
    }

    #[test]
    fn keys_only_apply_while_open() {
        let mut lightbox = three_items();
        assert!(!lightbox.handle_key("ArrowRight"));

        lightbox.open(0);
        assert!(lightbox.handle_key("ArrowRight"));
        assert_eq!(lightbox.state().current_index(), 1);
        assert!(lightbox.handle_key("ArrowLeft"));
        assert_eq!(lightbox.state().current_index(), 0);
        assert!(!lightbox.handle_key("Enter"));
        assert!(lightbox.handle_key("Escape"));
        assert!(!lightbox.state().is_open());
    }

    #[test]
    fn mixed_gallery_walkthrough() {
        let mut lightbox = three_items();

        lightbox.open(1);
        assert_eq!(lightbox.view().last_media(), Some(&Event::Video("vid1.mp4".into())));
        assert_eq!(lightbox.view().last_counter(), Some("2 / 3"));

        let before = lightbox.view().events.len();
        lightbox.navigate(Direction::Next);
        let step = &lightbox.view().events[before..];
        assert_eq!(step[0], Event::Halt);
        assert_eq!(step[1], Event::Clear);
        assert_eq!(lightbox.view().last_media(), Some(&Event::Image("img2.jpg".into())));
        assert_eq!(lightbox.view().last_counter(), Some("3 / 3"));

        lightbox.navigate(Direction::Next);
        assert_eq!(lightbox.view().last_media(), Some(&Event::Image("img1.jpg".into())));
        assert_eq!(lightbox.view().last_counter(), Some("1 / 3"));
    }
}
