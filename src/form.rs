//! Contact form submission.
//!
//! The form posts to its `action` (a hosted script endpoint) in `no-cors`
//! mode, so the response is opaque: status and body are never visible.
//!
//! TRUST BOUNDARY
//! ==============
//! A request that completes at the transport level is treated as delivered.
//! Only a network-layer failure is observable and reported as an error; an
//! HTTP error status from the endpoint looks exactly like success.
//!
//! Flow: disable the button and show the sending label, post, show the
//! outcome, wait `reset_ms`, then restore the button and clear the message.
//! Fields are cleared only after a success so a failed message can be resent.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::cell::Cell;
use std::future::Future;

use crate::config::FormCopy;

/// Base class of the status message region.
pub const MESSAGE_CLASS: &str = "form-message";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmitStatus {
    /// Class list for the message region in this state.
    pub fn message_class(self) -> &'static str {
        match self {
            Self::Idle | Self::Sending => MESSAGE_CLASS,
            Self::Success => "form-message success",
            Self::Error => "form-message error",
        }
    }
}

/// The request never completed (offline, DNS, blocked, aborted).
#[derive(Debug, thiserror::Error)]
#[error("form transport failed: {0}")]
pub struct TransportError(pub String);

/// DOM side of the form: submit button, message region, fields.
pub trait FormSurface {
    fn button_label(&self) -> String;
    fn set_button_label(&self, html: &str);
    fn set_button_disabled(&self, disabled: bool);
    fn set_message(&self, text: &str, class: &str);
    fn reset_fields(&self);
}

/// Sends the serialized form. Resolves `Ok` whenever the request completes.
pub trait FormTransport {
    fn post(&self) -> impl Future<Output = Result<(), TransportError>>;
}

pub trait Sleep {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;
}

/// Run one submission to completion and return its outcome
/// ([`SubmitStatus::Success`] or [`SubmitStatus::Error`]). By the time this
/// returns the surface is back in its idle presentation.
pub async fn submit<S, T, D>(surface: &S, transport: &T, sleeper: &D, copy: &FormCopy, reset_ms: u32) -> SubmitStatus
where
    S: FormSurface,
    T: FormTransport,
    D: Sleep,
{
    let original_label = surface.button_label();
    surface.set_button_label(&copy.sending_label);
    surface.set_button_disabled(true);
    surface.set_message("", SubmitStatus::Sending.message_class());

    let outcome = match transport.post().await {
        Ok(()) => {
            surface.set_button_label(&copy.success_label);
            surface.set_message(&copy.success_message, SubmitStatus::Success.message_class());
            SubmitStatus::Success
        }
        Err(err) => {
            log::error!("Error: {err}");
            surface.set_button_label(&copy.error_label);
            surface.set_message(&copy.error_message, SubmitStatus::Error.message_class());
            SubmitStatus::Error
        }
    };

    sleeper.sleep(reset_ms).await;

    surface.set_button_label(&original_label);
    surface.set_button_disabled(false);
    if outcome == SubmitStatus::Success {
        surface.reset_fields();
    }
    surface.set_message("", SubmitStatus::Idle.message_class());
    outcome
}

/// Single-flight flag for the submit handler.
#[derive(Debug, Default)]
pub struct SubmitGuard {
    busy: Cell<bool>,
}

impl SubmitGuard {
    /// Claim the form. Returns `false` while another submission is running.
    pub fn try_begin(&self) -> bool {
        !self.busy.replace(true)
    }

    pub fn finish(&self) {
        self.busy.set(false);
    }
}

#[cfg(feature = "browser")]
#[derive(Clone)]
pub struct PageForm {
    pub form: web_sys::HtmlFormElement,
    pub button: web_sys::HtmlButtonElement,
    pub message: web_sys::Element,
}

#[cfg(feature = "browser")]
impl FormSurface for PageForm {
    fn button_label(&self) -> String {
        self.button.inner_html()
    }

    fn set_button_label(&self, html: &str) {
        self.button.set_inner_html(html);
    }

    fn set_button_disabled(&self, disabled: bool) {
        self.button.set_disabled(disabled);
    }

    fn set_message(&self, text: &str, class: &str) {
        self.message.set_text_content(Some(text));
        self.message.set_class_name(class);
    }

    fn reset_fields(&self) {
        self.form.reset();
    }
}

/// `FormData` POST to the form's `action` with `mode: no-cors`.
#[cfg(feature = "browser")]
#[derive(Clone)]
pub struct NoCorsPost {
    pub form: web_sys::HtmlFormElement,
}

#[cfg(feature = "browser")]
impl FormTransport for NoCorsPost {
    async fn post(&self) -> Result<(), TransportError> {
        let data = web_sys::FormData::new_with_form(&self.form).map_err(|err| TransportError(format!("{err:?}")))?;
        let request = gloo_net::http::Request::post(&self.form.action())
            .mode(web_sys::RequestMode::NoCors)
            .body(data)
            .map_err(|err| TransportError(err.to_string()))?;
        request
            .send()
            .await
            .map_err(|err| TransportError(err.to_string()))?;
        Ok(())
    }
}

#[cfg(feature = "browser")]
pub struct TimerSleep;

#[cfg(feature = "browser")]
impl Sleep for TimerSleep {
    async fn sleep(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}
