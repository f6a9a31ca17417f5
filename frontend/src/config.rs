#[cfg(debug_assertions)]
pub fn get_signup_form_url() -> &'static str {
    "http://localhost:3001/formResponse"  // Local echo server while developing
}

#[cfg(not(debug_assertions))]
pub fn get_signup_form_url() -> &'static str {
    "https://docs.google.com/forms/d/e/1FAIpQLSfE9IH7XTbAzSO3vDvcAClwBsQtLGC53ARr3RdY4VgVDjaQng/formResponse"
}

pub const FORM_NAME_FIELD: &str = "entry.1570413012";
pub const FORM_EMAIL_FIELD: &str = "emailAddress";

/// Hidden form field that real visitors never fill in.
pub const HONEYPOT_FIELD: &str = "entry.646170703";

/// sessionStorage key set once the popup was dismissed or the form submitted.
pub const POPUP_CLOSED_KEY: &str = "wolfpack_popup_closed";

pub const POPUP_DELAY_MS: u32 = 5_000;
pub const POPUP_SUCCESS_CLOSE_MS: u32 = 10_000;
pub const COPY_FEEDBACK_MS: u32 = 2_000;

pub const FLOATING_BUTTON_SCROLL_Y: f64 = 300.0;

/// Minimum horizontal touch travel (logical px) that counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

pub const PROMO_CODE: &str = "WOLFPACK10";
