use yew::prelude::*;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{error, info, warn};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{js_sys, window, FormData, HtmlFormElement, RequestMode};

use crate::config;
use crate::scroll_lock;

#[derive(Debug, Error)]
pub enum SignupError {
    #[error("signup request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("could not read the signup form: {0}")]
    Form(String),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// A filled-in honeypot means a bot submitted the form.
pub fn is_spam(honeypot: Option<String>) -> bool {
    honeypot.map_or(false, |value| !value.is_empty())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupStage {
    Form,
    Submitting,
    Succeeded,
}

impl SignupStage {
    pub fn button_label(&self) -> &'static str {
        match self {
            SignupStage::Submitting => "Submitting...",
            _ => "Get My 10% Off",
        }
    }
}

fn popup_dismissed() -> bool {
    window()
        .and_then(|w| w.session_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(config::POPUP_CLOSED_KEY).ok())
        .flatten()
        .is_some()
}

fn remember_dismissed() {
    if let Some(storage) = window().and_then(|w| w.session_storage().ok()).flatten() {
        let _ = storage.set_item(config::POPUP_CLOSED_KEY, "true");
    }
}

async fn submit_form(form_data: FormData) -> Result<(), SignupError> {
    // no-cors: the response is opaque, reaching the server is all we can know
    Request::post(config::get_signup_form_url())
        .mode(RequestMode::NoCors)
        .body(form_data)
        .send()
        .await?;
    Ok(())
}

async fn copy_to_clipboard(text: &str) -> Result<(), SignupError> {
    let navigator = window()
        .ok_or_else(|| SignupError::Clipboard("no window".to_string()))?
        .navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| SignupError::Clipboard(js_error(e)))?;
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| SignupError::Clipboard(js_error(e)))?
        .dyn_into::<js_sys::Function>()
        .map_err(|e| SignupError::Clipboard(js_error(e)))?;

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| SignupError::Clipboard(js_error(e)))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|e| SignupError::Clipboard(js_error(e)))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| SignupError::Clipboard(js_error(e)))?;
    Ok(())
}

pub enum SignupPopupMsg {
    Show,
    Close,
    BackdropClick(MouseEvent),
    Submit(SubmitEvent),
    Submitted,
    Failed(SignupError),
    CopyCode,
    Copied,
    CopyFailed(SignupError),
    CopyReset,
}

pub struct SignupPopup {
    visible: bool,
    stage: SignupStage,
    copied: bool,
    popup_ref: NodeRef,
    form_ref: NodeRef,
    // Pending timers are cancelled when dropped, so they live as long as the popup.
    _show_timer: Timeout,
    _close_timer: Option<Timeout>,
    _copy_timer: Option<Timeout>,
}

impl SignupPopup {
    fn hide(&mut self) {
        self.visible = false;
        scroll_lock::set_scroll_locked(false);
        remember_dismissed();
    }

    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(SignupPopupMsg::Submit);
        let submitting = self.stage == SignupStage::Submitting;

        html! {
            <form id="signup-form" class="signup-form" ref={self.form_ref.clone()} {onsubmit}>
                <input type="text" name={config::FORM_NAME_FIELD} placeholder="Your name" required=true />
                <input type="email" name={config::FORM_EMAIL_FIELD} placeholder="you@example.com" required=true />
                <input
                    type="text"
                    name={config::HONEYPOT_FIELD}
                    class="hp-field"
                    tabindex="-1"
                    autocomplete="off"
                    aria-hidden="true"
                />
                <button type="submit" class="popup-submit" disabled={submitting}>
                    {self.stage.button_label()}
                </button>
            </form>
        }
    }

    fn render_success(&self, ctx: &Context<Self>) -> Html {
        let oncopy = ctx.link().callback(|_| SignupPopupMsg::CopyCode);

        html! {
            <div id="popup-success" class="popup-success">
                <h3>{"You're in the pack!"}</h3>
                <p>{"Use this code on your first order:"}</p>
                <div class="promo-row">
                    <span id="promo-code" class="promo-code">{config::PROMO_CODE}</span>
                    <button id="copy-btn" class={classes!("copy-btn", self.copied.then(|| "copied"))} onclick={oncopy}>
                        {
                            if self.copied {
                                html! {
                                    <>
                                        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                            <polyline points="20 6 9 17 4 12"></polyline>
                                        </svg>
                                        {"Copied!"}
                                    </>
                                }
                            } else {
                                html! { {"Copy"} }
                            }
                        }
                    </button>
                </div>
            </div>
        }
    }
}

impl Component for SignupPopup {
    type Message = SignupPopupMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let show_timer = Timeout::new(config::POPUP_DELAY_MS, move || {
            link.send_message(SignupPopupMsg::Show);
        });

        Self {
            visible: false,
            stage: SignupStage::Form,
            copied: false,
            popup_ref: NodeRef::default(),
            form_ref: NodeRef::default(),
            _show_timer: show_timer,
            _close_timer: None,
            _copy_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SignupPopupMsg::Show => {
                // only once per session
                if popup_dismissed() {
                    return false;
                }
                self.visible = true;
                scroll_lock::set_scroll_locked(true);
                true
            }
            SignupPopupMsg::Close => {
                self.hide();
                true
            }
            SignupPopupMsg::BackdropClick(e) => {
                let on_backdrop = match (e.target(), self.popup_ref.get()) {
                    (Some(target), Some(popup)) => JsValue::from(target) == JsValue::from(popup),
                    _ => false,
                };
                if on_backdrop {
                    ctx.link().send_message(SignupPopupMsg::Close);
                }
                false
            }
            SignupPopupMsg::Submit(e) => {
                e.prevent_default();

                let Some(form) = self.form_ref.cast::<HtmlFormElement>() else {
                    return false;
                };
                let form_data = match FormData::new_with_form(&form) {
                    Ok(data) => data,
                    Err(e) => {
                        error!("{}", SignupError::Form(js_error(e)));
                        return false;
                    }
                };

                if is_spam(form_data.get(config::HONEYPOT_FIELD).as_string()) {
                    warn!("Spam detected");
                    return false;
                }

                self.stage = SignupStage::Submitting;
                ctx.link().send_future(async move {
                    match submit_form(form_data).await {
                        Ok(()) => SignupPopupMsg::Submitted,
                        Err(e) => SignupPopupMsg::Failed(e),
                    }
                });
                true
            }
            SignupPopupMsg::Submitted => {
                info!("Signup submitted");
                self.stage = SignupStage::Succeeded;
                remember_dismissed();

                let link = ctx.link().clone();
                self._close_timer = Some(Timeout::new(config::POPUP_SUCCESS_CLOSE_MS, move || {
                    link.send_message(SignupPopupMsg::Close);
                }));
                true
            }
            SignupPopupMsg::Failed(e) => {
                error!("Submission error: {}", e);
                self.stage = SignupStage::Form;
                if let Some(window) = window() {
                    let _ = window.alert_with_message("There was an error. Please try again or contact us directly.");
                }
                true
            }
            SignupPopupMsg::CopyCode => {
                ctx.link().send_future(async {
                    match copy_to_clipboard(config::PROMO_CODE).await {
                        Ok(()) => SignupPopupMsg::Copied,
                        Err(e) => SignupPopupMsg::CopyFailed(e),
                    }
                });
                false
            }
            SignupPopupMsg::Copied => {
                self.copied = true;
                let link = ctx.link().clone();
                self._copy_timer = Some(Timeout::new(config::COPY_FEEDBACK_MS, move || {
                    link.send_message(SignupPopupMsg::CopyReset);
                }));
                true
            }
            SignupPopupMsg::CopyFailed(e) => {
                warn!("{}", e);
                false
            }
            SignupPopupMsg::CopyReset => {
                self.copied = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclose = ctx.link().callback(|_| SignupPopupMsg::Close);
        let onbackdrop = ctx.link().callback(SignupPopupMsg::BackdropClick);

        html! {
            <div
                id="signup-popup"
                ref={self.popup_ref.clone()}
                class={classes!("signup-popup", self.visible.then(|| "active"))}
                onclick={onbackdrop}
            >
                <div class="popup-content">
                    <button id="popup-close" class="popup-close" aria-label="Close" onclick={onclose}>{"×"}</button>
                    <h2>{"Join the Pack"}</h2>
                    <p>{"Sign up for news on pop-ups and new smokes, and get 10% off your first order."}</p>
                    {
                        if self.stage == SignupStage::Succeeded {
                            self.render_success(ctx)
                        } else {
                            self.render_form(ctx)
                        }
                    }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn honeypot_must_be_empty() {
        assert!(!is_spam(None));
        assert!(!is_spam(Some(String::new())));
        assert!(is_spam(Some("http://spam.example".to_string())));
    }

    #[test]
    fn submit_label_follows_stage() {
        assert_eq!(SignupStage::Form.button_label(), "Get My 10% Off");
        assert_eq!(SignupStage::Submitting.button_label(), "Submitting...");
    }
}
