use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

#[derive(Clone, Debug, PartialEq)]
enum Step {
    Label(String),
    Disabled(bool),
    Message(String, String),
    ResetFields,
    Slept(u32),
}

type Log = Rc<RefCell<Vec<Step>>>;

struct FakeForm {
    label: RefCell<String>,
    log: Log,
}

impl FakeForm {
    fn new(log: &Log) -> Self {
        Self { label: RefCell::new("Send Message".to_owned()), log: Rc::clone(log) }
    }
}

impl FormSurface for FakeForm {
    fn button_label(&self) -> String {
        self.label.borrow().clone()
    }

    fn set_button_label(&self, html: &str) {
        *self.label.borrow_mut() = html.to_owned();
        self.log.borrow_mut().push(Step::Label(html.to_owned()));
    }

    fn set_button_disabled(&self, disabled: bool) {
        self.log.borrow_mut().push(Step::Disabled(disabled));
    }

    fn set_message(&self, text: &str, class: &str) {
        self.log.borrow_mut().push(Step::Message(text.to_owned(), class.to_owned()));
    }

    fn reset_fields(&self) {
        self.log.borrow_mut().push(Step::ResetFields);
    }
}

struct FakeTransport {
    fail: bool,
}

impl FormTransport for FakeTransport {
    async fn post(&self) -> Result<(), TransportError> {
        if self.fail { Err(TransportError("offline".to_owned())) } else { Ok(()) }
    }
}

struct FakeSleep {
    log: Log,
}

impl Sleep for FakeSleep {
    async fn sleep(&self, ms: u32) {
        self.log.borrow_mut().push(Step::Slept(ms));
    }
}

fn run(fail: bool) -> (SubmitStatus, Vec<Step>) {
    let log: Log = Rc::default();
    let surface = FakeForm::new(&log);
    let sleeper = FakeSleep { log: Rc::clone(&log) };
    let copy = FormCopy::default();
    let outcome = block_on(submit(&surface, &FakeTransport { fail }, &sleeper, &copy, 3000));
    let steps = log.borrow().clone();
    (outcome, steps)
}

fn labels(steps: &[Step]) -> Vec<String> {
    steps
        .iter()
        .filter_map(|s| match s {
            Step::Label(l) => Some(l.clone()),
            _ => None,
        })
        .collect()
}

// =============================================================
// Success path
// =============================================================

#[test]
fn success_runs_label_sequence_and_clears_form() {
    let copy = FormCopy::default();
    let (outcome, steps) = run(false);

    assert_eq!(outcome, SubmitStatus::Success);
    assert_eq!(
        labels(&steps),
        vec![copy.sending_label.clone(), copy.success_label.clone(), "Send Message".to_owned()]
    );
    assert!(steps.contains(&Step::ResetFields));
    assert_eq!(steps.last(), Some(&Step::Message(String::new(), MESSAGE_CLASS.to_owned())));
}

#[test]
fn success_disables_then_reenables_after_single_wait() {
    let (_, steps) = run(false);
    let disabled_at = steps.iter().position(|s| *s == Step::Disabled(true)).expect("disabled");
    let slept_at = steps.iter().position(|s| *s == Step::Slept(3000)).expect("slept");
    let enabled_at = steps.iter().position(|s| *s == Step::Disabled(false)).expect("re-enabled");

    assert!(disabled_at < slept_at && slept_at < enabled_at);
    assert_eq!(steps.iter().filter(|s| matches!(s, Step::Slept(_))).count(), 1);
}

#[test]
fn success_message_shown_before_wait() {
    let copy = FormCopy::default();
    let (_, steps) = run(false);
    let shown = Step::Message(copy.success_message, "form-message success".to_owned());
    let shown_at = steps.iter().position(|s| *s == shown).expect("success message");
    let slept_at = steps.iter().position(|s| matches!(s, Step::Slept(_))).expect("slept");
    assert!(shown_at < slept_at);
}

#[test]
fn sending_clears_previous_message() {
    let (_, steps) = run(false);
    assert_eq!(steps.get(2), Some(&Step::Message(String::new(), MESSAGE_CLASS.to_owned())));
}

// =============================================================
// Failure path
// =============================================================

#[test]
fn failure_restores_control_but_keeps_fields() {
    let copy = FormCopy::default();
    let (outcome, steps) = run(true);

    assert_eq!(outcome, SubmitStatus::Error);
    assert_eq!(labels(&steps), vec![copy.sending_label.clone(), copy.error_label.clone(), "Send Message".to_owned()]);
    assert!(!steps.contains(&Step::ResetFields));
    assert!(steps.contains(&Step::Disabled(false)));
}

#[test]
fn failure_shows_error_text_then_clears_it() {
    let copy = FormCopy::default();
    let (_, steps) = run(true);
    let error = Step::Message(copy.error_message, "form-message error".to_owned());
    let error_at = steps.iter().position(|s| *s == error).expect("error message");
    let slept_at = steps.iter().position(|s| matches!(s, Step::Slept(_))).expect("slept");

    assert!(error_at < slept_at);
    assert_eq!(steps.last(), Some(&Step::Message(String::new(), MESSAGE_CLASS.to_owned())));
}

// =============================================================
// SubmitStatus / SubmitGuard
// =============================================================

#[test]
fn message_classes_per_status() {
    assert_eq!(SubmitStatus::Idle.message_class(), "form-message");
    assert_eq!(SubmitStatus::Sending.message_class(), "form-message");
    assert_eq!(SubmitStatus::Success.message_class(), "form-message success");
    assert_eq!(SubmitStatus::Error.message_class(), "form-message error");
}

#[test]
fn transport_error_display() {
    assert_eq!(TransportError("offline".to_owned()).to_string(), "form transport failed: offline");
}

#[test]
fn guard_rejects_second_submission_until_finished() {
    let guard = SubmitGuard::default();
    assert!(guard.try_begin());
    assert!(!guard.try_begin());
    guard.finish();
    assert!(guard.try_begin());
}
