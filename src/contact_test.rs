use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

const FALLBACK: &str = "owner@example.com";

struct FakeForm {
    fields: RefCell<Vec<(String, String)>>,
    label: RefCell<String>,
    disabled: RefCell<bool>,
    /// Every (disabled, label) pair the control passed through.
    history: RefCell<Vec<(bool, String)>>,
    notices: RefCell<Vec<String>>,
}

impl FakeForm {
    fn filled() -> Self {
        Self {
            fields: RefCell::new(vec![
                ("name".to_owned(), "Ada".to_owned()),
                ("email".to_owned(), "ada@example.com".to_owned()),
                ("message".to_owned(), "Hello there".to_owned()),
            ]),
            label: RefCell::new("Send Message".to_owned()),
            disabled: RefCell::new(false),
            history: RefCell::new(Vec::new()),
            notices: RefCell::new(Vec::new()),
        }
    }
}

impl FormSurface for FakeForm {
    fn fields(&self) -> Vec<(String, String)> {
        self.fields.borrow().clone()
    }

    fn submit_label(&self) -> String {
        self.label.borrow().clone()
    }

    fn set_busy(&self, busy: bool, label: &str) {
        *self.disabled.borrow_mut() = busy;
        *self.label.borrow_mut() = label.to_owned();
        self.history.borrow_mut().push((busy, label.to_owned()));
    }

    fn reset(&self) {
        for (_, value) in self.fields.borrow_mut().iter_mut() {
            value.clear();
        }
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_owned());
    }
}

struct FakeTransport {
    reply: Result<ContactResponse, FxError>,
    seen: RefCell<Vec<(String, String)>>,
}

impl FakeTransport {
    fn replying(reply: Result<ContactResponse, FxError>) -> Self {
        Self { reply, seen: RefCell::new(Vec::new()) }
    }
}

impl ContactTransport for FakeTransport {
    async fn send(&self, fields: &[(String, String)]) -> Result<ContactResponse, FxError> {
        *self.seen.borrow_mut() = fields.to_vec();
        self.reply.clone()
    }
}

fn assert_restored(form: &FakeForm) {
    assert!(!*form.disabled.borrow());
    assert_eq!(*form.label.borrow(), "Send Message");
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn success_clears_fields_and_restores_control() {
    let form = FakeForm::filled();
    let transport = FakeTransport::replying(Ok(ContactResponse { success: true }));
    let outcome = block_on(submit(&form, &transport, FALLBACK));

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert!(form.fields.borrow().iter().all(|(_, v)| v.is_empty()));
    assert_restored(&form);
    assert_eq!(form.notices.borrow().as_slice(), ["Thank you! Your message has been sent successfully."]);
}

#[test]
fn explicit_failure_keeps_input_and_restores_control() {
    let form = FakeForm::filled();
    let transport = FakeTransport::replying(Ok(ContactResponse { success: false }));
    let outcome = block_on(submit(&form, &transport, FALLBACK));

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(form.fields.borrow()[0].1, "Ada");
    assert_restored(&form);
    assert!(form.notices.borrow()[0].ends_with(FALLBACK));
}

#[test]
fn transport_error_surfaces_fallback_contact() {
    let form = FakeForm::filled();
    let transport = FakeTransport::replying(Err(FxError::Network("offline".to_owned())));
    let outcome = block_on(submit(&form, &transport, FALLBACK));

    assert!(matches!(outcome, SubmitOutcome::Failed(FxError::Network(_))));
    assert_restored(&form);
    assert!(form.notices.borrow()[0].ends_with(FALLBACK));
    assert_eq!(form.fields.borrow()[2].1, "Hello there");
}

#[test]
fn control_is_busy_during_request() {
    let form = FakeForm::filled();
    let transport = FakeTransport::replying(Ok(ContactResponse { success: true }));
    block_on(submit(&form, &transport, FALLBACK));

    let history = form.history.borrow();
    assert_eq!(history[0], (true, "Sending...".to_owned()));
    assert_eq!(history.last(), Some(&(false, "Send Message".to_owned())));
    assert_eq!(history.len(), 2);
}

#[test]
fn transport_receives_all_fields() {
    let form = FakeForm::filled();
    let transport = FakeTransport::replying(Ok(ContactResponse { success: true }));
    block_on(submit(&form, &transport, FALLBACK));

    let seen = transport.seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[1], ("email".to_owned(), "ada@example.com".to_owned()));
}

#[test]
fn guard_restores_when_dropped_early() {
    let form = FakeForm::filled();
    {
        let _busy = BusyGuard::engage(&form);
        assert!(*form.disabled.borrow());
        assert_eq!(*form.label.borrow(), "Sending...");
    }
    assert_restored(&form);
}

// =============================================================
// Response parsing
// =============================================================

#[test]
fn parse_response_reads_success_flag() {
    assert_eq!(parse_response(r#"{"success":true}"#), Ok(ContactResponse { success: true }));
    assert_eq!(
        parse_response(r#"{"success":false,"message":"spam"}"#),
        Ok(ContactResponse { success: false })
    );
}

#[test]
fn malformed_or_misshaped_body_is_bad_response() {
    assert!(matches!(parse_response("<html>500</html>"), Err(FxError::BadResponse(_))));
    assert!(matches!(parse_response(r#"{"ok":true}"#), Err(FxError::BadResponse(_))));
    assert!(matches!(parse_response(r#"{"success":"yes"}"#), Err(FxError::BadResponse(_))));
}

#[test]
fn every_unsuccessful_outcome_offers_fallback_address() {
    assert!(!SubmitOutcome::Sent.notice(FALLBACK).contains(FALLBACK));
    let expected = "Oops! Something went wrong. Please try again or email me directly at owner@example.com";
    assert_eq!(SubmitOutcome::Rejected.notice(FALLBACK), expected);
    let failed = SubmitOutcome::Failed(FxError::BadResponse("status 502".to_owned()));
    assert_eq!(failed.notice(FALLBACK), expected);
}
