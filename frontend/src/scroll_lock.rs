use web_sys::window;

/// Suppresses or restores page scrolling by toggling `overflow` on `<body>`.
pub fn set_scroll_locked(locked: bool) {
    let body = window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());

    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}
