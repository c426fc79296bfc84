//! Contact form submission.
//!
//! The submit flow is written against two small traits, [`FormSurface`] (the
//! form and its submit control) and [`ContactTransport`] (the network call),
//! so the guarantees are testable without a browser:
//!
//! - the control is disabled and shows a busy label while the request runs
//! - success resets the form; every other outcome keeps the user's input
//! - the control is re-enabled with its original label on every exit path,
//!   enforced by [`BusyGuard`]'s `Drop`
//!
//! ERROR HANDLING
//! ==============
//! Only an explicit `{ "success": true }` counts as sent. A `false` flag,
//! non-2xx status, malformed JSON and transport errors all end with a notice
//! pointing at the fallback address.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Deserialize;

use crate::consts::BUSY_LABEL;
use crate::error::FxError;

/// Reply body from the contact endpoint.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct ContactResponse {
    pub success: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    /// The endpoint answered `{ "success": false }`.
    Rejected,
    Failed(FxError),
}

impl SubmitOutcome {
    #[must_use]
    pub fn from_result(result: Result<ContactResponse, FxError>) -> Self {
        match result {
            Ok(ContactResponse { success: true }) => Self::Sent,
            Ok(ContactResponse { success: false }) => Self::Rejected,
            Err(err) => Self::Failed(err),
        }
    }

    /// Notice shown to the user for this outcome.
    #[must_use]
    pub fn notice(&self, fallback_email: &str) -> String {
        match self {
            Self::Sent => "Thank you! Your message has been sent successfully.".to_owned(),
            Self::Rejected | Self::Failed(_) => {
                format!("Oops! Something went wrong. Please try again or email me directly at {fallback_email}")
            }
        }
    }
}

/// Parse a reply body, mapping anything but the expected shape to
/// [`FxError::BadResponse`].
///
/// # Errors
///
/// Returns [`FxError::BadResponse`] for malformed or mis-shaped JSON.
pub fn parse_response(body: &str) -> Result<ContactResponse, FxError> {
    serde_json::from_str(body).map_err(|e| FxError::BadResponse(e.to_string()))
}

/// The form and its submit control.
pub trait FormSurface {
    /// Field name/value pairs in document order.
    fn fields(&self) -> Vec<(String, String)>;
    fn submit_label(&self) -> String;
    /// Disable or re-enable the submit control and set its label.
    fn set_busy(&self, busy: bool, label: &str);
    fn reset(&self);
    fn notify(&self, message: &str);
}

/// Delivers the form fields to the contact endpoint.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    /// # Errors
    ///
    /// Returns [`FxError::Network`] when the request cannot complete, or
    /// [`FxError::BadResponse`] for a non-2xx status or unreadable body.
    async fn send(&self, fields: &[(String, String)]) -> Result<ContactResponse, FxError>;
}

/// Holds the submit control busy; restores it when dropped.
pub struct BusyGuard<'a, F: FormSurface> {
    form: &'a F,
    original_label: String,
}

impl<'a, F: FormSurface> BusyGuard<'a, F> {
    pub fn engage(form: &'a F) -> Self {
        let original_label = form.submit_label();
        form.set_busy(true, BUSY_LABEL);
        Self { form, original_label }
    }
}

impl<F: FormSurface> Drop for BusyGuard<'_, F> {
    fn drop(&mut self) {
        self.form.set_busy(false, &self.original_label);
    }
}

/// Run one submission end to end.
pub async fn submit<F: FormSurface, T: ContactTransport>(form: &F, transport: &T, fallback_email: &str) -> SubmitOutcome {
    let fields = form.fields();
    let _busy = BusyGuard::engage(form);
    let outcome = SubmitOutcome::from_result(transport.send(&fields).await);
    match &outcome {
        SubmitOutcome::Sent => {
            form.reset();
            log::info!("contact form sent");
        }
        SubmitOutcome::Rejected => log::warn!("contact endpoint rejected the message"),
        SubmitOutcome::Failed(err) => log::error!("contact form failed: {err}"),
    }
    form.notify(&outcome.notice(fallback_email));
    outcome
}

#[cfg(feature = "hydrate")]
pub use browser::ContactBinding;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, FormData, HtmlButtonElement, HtmlFormElement, UrlSearchParams};

    use super::{ContactResponse, ContactTransport, FormSurface, parse_response, submit};
    use crate::config::FxConfig;
    use crate::consts::{CONTACT_FORM_ID, LOADING_CLASS, SUBMIT_SELECTOR};
    use crate::dom::{Listener, set_class, settle};
    use crate::error::FxError;

    struct BrowserForm {
        form: HtmlFormElement,
        button: HtmlButtonElement,
    }

    impl FormSurface for BrowserForm {
        fn fields(&self) -> Vec<(String, String)> {
            let Some(data) = settle(FormData::new_with_form(&self.form), "FormData") else {
                return Vec::new();
            };
            let Some(entries) = settle(js_sys::try_iter(&data), "FormData entries").flatten() else {
                return Vec::new();
            };
            entries
                .filter_map(|entry| settle(entry, "FormData entry"))
                .filter_map(|pair| {
                    // File inputs yield non-string values and are skipped.
                    let pair = pair.dyn_ref::<js_sys::Array>()?;
                    Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
                })
                .collect()
        }

        fn submit_label(&self) -> String {
            self.button.text_content().unwrap_or_default()
        }

        fn set_busy(&self, busy: bool, label: &str) {
            self.button.set_disabled(busy);
            self.button.set_text_content(Some(label));
            set_class(&self.button, LOADING_CLASS, busy);
        }

        fn reset(&self) {
            self.form.reset();
        }

        fn notify(&self, message: &str) {
            if let Some(window) = web_sys::window() {
                settle(window.alert_with_message(message), "alert");
            }
        }
    }

    struct HttpTransport {
        endpoint: String,
    }

    impl ContactTransport for HttpTransport {
        async fn send(&self, fields: &[(String, String)]) -> Result<ContactResponse, FxError> {
            let params = UrlSearchParams::new()?;
            for (name, value) in fields {
                params.append(name, value);
            }
            // A URLSearchParams body is sent as application/x-www-form-urlencoded.
            let resp = gloo_net::http::Request::post(&self.endpoint).body(params)?.send().await?;
            let status = resp.status();
            if !(200..300).contains(&status) {
                return Err(FxError::BadResponse(format!("status {status}")));
            }
            parse_response(&resp.text().await?)
        }
    }

    pub struct ContactBinding {
        _submit: Listener,
    }

    impl ContactBinding {
        pub fn attach(document: &Document, config: &FxConfig) -> Result<Self, FxError> {
            let form = document
                .get_element_by_id(CONTACT_FORM_ID)
                .and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned())
                .ok_or(FxError::MissingElement("#contactForm"))?;
            let button = settle(form.query_selector(SUBMIT_SELECTOR), SUBMIT_SELECTOR)
                .flatten()
                .and_then(|el| el.dyn_ref::<HtmlButtonElement>().cloned())
                .ok_or(FxError::MissingElement("#contactForm button[type=submit]"))?;

            let surface = Rc::new(BrowserForm { form: form.clone(), button });
            let transport = Rc::new(HttpTransport { endpoint: config.contact_endpoint.clone() });
            let fallback = Rc::new(config.fallback_email.clone());
            let listener = Listener::new(&form, "submit", move |event| {
                event.prevent_default();
                let (surface, transport, fallback) = (Rc::clone(&surface), Rc::clone(&transport), Rc::clone(&fallback));
                wasm_bindgen_futures::spawn_local(async move {
                    submit(surface.as_ref(), transport.as_ref(), &fallback).await;
                });
            });
            Ok(Self { _submit: listener })
        }
    }
}
