use std::{cell::RefCell, fmt, future::Future, str::FromStr, time::Duration};

#[cfg(any(feature = "ssr", feature = "hydrate"))]
use leptos::prelude::{RwSignal, Update};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long the confirmation stays up before the form clears.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(3);
/// How long the error message stays up. Field values are kept for a retry.
pub const FAILURE_RESET_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Name used for the DOM `name`/`id` attributes and the relay payload keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown form field: {0}")]
pub struct UnknownField(String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Replaces one field, leaving the others untouched.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Required fields that are still empty, in form order.
    ///
    /// Mirrors the browser's `required` check: whitespace counts as a value.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    /// Whether the submit control is enabled.
    pub fn accepts_submit(self) -> bool {
        matches!(self, SubmissionStatus::Idle | SubmissionStatus::Failed)
    }

    pub fn button_label(self) -> &'static str {
        match self {
            SubmissionStatus::Sending => "Sending...",
            SubmissionStatus::Succeeded => "Message Sent!",
            SubmissionStatus::Idle | SubmissionStatus::Failed => "Send Message",
        }
    }
}

/// The one failure the presenter knows about. The reason is only for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to send message: {reason}")]
pub struct SubmitError {
    reason: String,
}

impl SubmitError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Why a submit request did nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a message is already being sent")]
    InFlight,
    #[error("the confirmation is still showing")]
    Confirming,
    #[error("missing required fields: {}", field_list(.0))]
    MissingFields(Vec<Field>),
    #[error("the contact form is no longer mounted")]
    TornDown,
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A deferred return to `Idle`, issued when a submission settles.
///
/// Only the timer most recently issued by a live form has any effect, so a
/// callback that fires late (after a resubmit or a teardown) is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTimer {
    cycle: u64,
    clears_fields: bool,
}

impl ResetTimer {
    pub fn delay(&self) -> Duration {
        if self.clears_fields {
            SUCCESS_RESET_DELAY
        } else {
            FAILURE_RESET_DELAY
        }
    }

    pub fn clears_fields(&self) -> bool {
        self.clears_fields
    }
}

/// Snapshot of the fields taken when a submission starts.
#[derive(Debug)]
pub struct Attempt {
    cycle: u64,
    data: FormData,
}

impl Attempt {
    pub fn data(&self) -> &FormData {
        &self.data
    }
}

/// Field values plus the `Idle → Sending → Succeeded | Failed → Idle` machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    data: FormData,
    status: SubmissionStatus,
    cycle: u64,
    pending: Option<ResetTimer>,
    live: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            data: FormData::default(),
            status: SubmissionStatus::Idle,
            cycle: 0,
            pending: None,
            live: true,
        }
    }

    pub fn with_data(data: FormData) -> Self {
        Self {
            data,
            ..Self::new()
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn pending_reset(&self) -> Option<ResetTimer> {
        self.pending
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.data.set_field(field, value);
    }

    /// `Idle | Failed → Sending`. Resubmitting from `Failed` cancels the error reset.
    pub fn begin_submit(&mut self) -> Result<Attempt, SubmitRejected> {
        if !self.live {
            return Err(SubmitRejected::TornDown);
        }
        match self.status {
            SubmissionStatus::Sending => return Err(SubmitRejected::InFlight),
            SubmissionStatus::Succeeded => return Err(SubmitRejected::Confirming),
            SubmissionStatus::Idle | SubmissionStatus::Failed => {}
        }
        let missing = self.data.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitRejected::MissingFields(missing));
        }

        self.pending = None;
        self.cycle += 1;
        self.status = SubmissionStatus::Sending;
        Ok(Attempt {
            cycle: self.cycle,
            data: self.data.clone(),
        })
    }

    /// `Sending → Succeeded | Failed`, returning the reset the caller must schedule.
    ///
    /// Returns `None` when the attempt no longer matches (the form was torn down).
    pub fn finish(
        &mut self,
        attempt: Attempt,
        outcome: Result<(), SubmitError>,
    ) -> Option<ResetTimer> {
        if !self.live || attempt.cycle != self.cycle || self.status != SubmissionStatus::Sending {
            return None;
        }
        let (status, clears_fields) = match outcome {
            Ok(()) => (SubmissionStatus::Succeeded, true),
            Err(_) => (SubmissionStatus::Failed, false),
        };
        self.status = status;
        let timer = ResetTimer {
            cycle: self.cycle,
            clears_fields,
        };
        self.pending = Some(timer);
        Some(timer)
    }

    /// Applies a reset once its delay has elapsed. Returns whether anything changed.
    pub fn expire(&mut self, timer: ResetTimer) -> bool {
        if !self.live || self.pending != Some(timer) {
            return false;
        }
        self.pending = None;
        if timer.clears_fields {
            self.data = FormData::default();
        }
        self.status = SubmissionStatus::Idle;
        true
    }

    /// Stops the machine. The returned timer, if any, should be cancelled.
    pub fn teardown(&mut self) -> Option<ResetTimer> {
        self.live = false;
        self.pending.take()
    }
}

/// Somewhere a [`ContactForm`] can be mutated from inside an async task.
pub trait FormCell {
    /// Runs `f` against the form, or returns `None` if it is gone.
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

impl FormCell for RefCell<ContactForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl FormCell for RwSignal<ContactForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Delivers a message to the relay.
pub trait SubmissionClient {
    fn submit(&self, data: &FormData) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Runs one submission through `client` and settles the form.
///
/// A rejected request never reaches the client. On success the returned timer
/// must be scheduled by the caller, who then hands it back to
/// [`ContactForm::expire`].
pub async fn submit_form<S, C>(state: &S, client: &C) -> Result<Option<ResetTimer>, SubmitRejected>
where
    S: FormCell,
    C: SubmissionClient,
{
    let attempt = state
        .with_form(ContactForm::begin_submit)
        .unwrap_or(Err(SubmitRejected::TornDown))?;

    let outcome = client.submit(attempt.data()).await;
    match &outcome {
        Ok(()) => log::info!("contact message delivered"),
        Err(e) => log::warn!("{e}"),
    }

    Ok(state
        .with_form(|form| form.finish(attempt, outcome))
        .flatten())
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, pin::pin};

    use futures::{channel::oneshot, executor::block_on, poll};

    use super::*;

    fn ada() -> FormData {
        FormData {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    struct StubClient {
        calls: Cell<usize>,
        outcome: Result<(), SubmitError>,
    }

    impl StubClient {
        fn ok() -> Self {
            Self {
                calls: Cell::new(0),
                outcome: Ok(()),
            }
        }

        fn failing() -> Self {
            Self {
                calls: Cell::new(0),
                outcome: Err(SubmitError::new("relay responded with 500")),
            }
        }
    }

    impl SubmissionClient for StubClient {
        async fn submit(&self, _data: &FormData) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    // Holds the first call open until the test sends an outcome.
    struct GatedClient {
        calls: Cell<usize>,
        gate: RefCell<Option<oneshot::Receiver<Result<(), SubmitError>>>>,
    }

    impl SubmissionClient for GatedClient {
        async fn submit(&self, _data: &FormData) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(SubmitError::new("gate dropped"))),
                None => Ok(()),
            }
        }
    }

    #[derive(Default)]
    struct ManualClock {
        now: Duration,
        queue: Vec<(Duration, ResetTimer)>,
    }

    impl ManualClock {
        fn schedule(&mut self, timer: ResetTimer) {
            self.queue.push((self.now + timer.delay(), timer));
        }

        fn advance(&mut self, by: Duration, form: &RefCell<ContactForm>) {
            self.now += by;
            let now = self.now;
            let (due, later): (Vec<_>, Vec<_>) =
                self.queue.drain(..).partition(|(at, _)| *at <= now);
            self.queue = later;
            for (_, timer) in due {
                form.borrow_mut().expire(timer);
            }
        }
    }

    #[test]
    fn set_field_keeps_siblings() {
        let mut data = FormData::default();
        let edits = [
            (Field::Name, "A"),
            (Field::Email, "a@"),
            (Field::Name, "Ada"),
            (Field::Message, "Hel"),
            (Field::Subject, "Hi"),
            (Field::Email, "ada@example.com"),
            (Field::Message, "Hello"),
        ];
        for (field, value) in edits {
            let before = data.clone();
            data.set_field(field, value);
            for other in Field::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(data.get(other), before.get(other), "{other} changed");
            }
            assert_eq!(data.get(field), value);
        }
        assert_eq!(data, ada());
    }

    #[test]
    fn field_names_parse() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert!("phone".parse::<Field>().is_err());
    }

    #[test]
    fn missing_fields_in_form_order() {
        let mut data = FormData::default();
        data.set_field(Field::Email, "ada@example.com");
        assert_eq!(
            data.missing_fields(),
            vec![Field::Name, Field::Subject, Field::Message]
        );
        data.set_field(Field::Name, " ");
        data.set_field(Field::Subject, "Hi");
        data.set_field(Field::Message, "Hello");
        assert!(data.is_complete());
    }

    #[test]
    fn empty_field_never_reaches_client() {
        let mut data = ada();
        data.set_field(Field::Subject, "");
        let form = RefCell::new(ContactForm::with_data(data));
        let client = StubClient::ok();

        let res = block_on(submit_form(&form, &client));

        assert_eq!(
            res,
            Err(SubmitRejected::MissingFields(vec![Field::Subject]))
        );
        assert_eq!(client.calls.get(), 0);
        assert_eq!(form.borrow().status(), SubmissionStatus::Idle);
    }

    #[test]
    fn second_submit_while_sending_is_noop() {
        block_on(async {
            let (tx, rx) = oneshot::channel();
            let client = GatedClient {
                calls: Cell::new(0),
                gate: RefCell::new(Some(rx)),
            };
            let form = RefCell::new(ContactForm::with_data(ada()));

            let mut first = pin!(submit_form(&form, &client));
            assert!(poll!(first.as_mut()).is_pending());
            assert_eq!(form.borrow().status(), SubmissionStatus::Sending);

            let second = submit_form(&form, &client).await;
            assert_eq!(second, Err(SubmitRejected::InFlight));
            assert_eq!(client.calls.get(), 1);

            tx.send(Ok(())).unwrap();
            let timer = first.await.unwrap();
            assert!(timer.is_some_and(|t| t.clears_fields()));
            assert_eq!(client.calls.get(), 1);
            assert_eq!(form.borrow().status(), SubmissionStatus::Succeeded);
        });
    }

    #[test]
    fn success_clears_fields_after_three_seconds() {
        let form = RefCell::new(ContactForm::with_data(ada()));
        let client = StubClient::ok();
        let mut clock = ManualClock::default();
        assert_eq!(form.borrow().status(), SubmissionStatus::Idle);

        let timer = block_on(submit_form(&form, &client))
            .unwrap()
            .expect("success schedules a reset");
        assert_eq!(timer.delay(), SUCCESS_RESET_DELAY);
        clock.schedule(timer);
        assert_eq!(form.borrow().status(), SubmissionStatus::Succeeded);
        assert_eq!(form.borrow().data(), &ada());

        clock.advance(Duration::from_millis(2999), &form);
        assert_eq!(form.borrow().status(), SubmissionStatus::Succeeded);
        assert_eq!(form.borrow().data(), &ada());

        clock.advance(Duration::from_millis(1), &form);
        assert_eq!(form.borrow().status(), SubmissionStatus::Idle);
        assert_eq!(form.borrow().data(), &FormData::default());
        assert_eq!(client.calls.get(), 1);
    }

    #[test]
    fn failure_keeps_fields_and_returns_to_idle_after_one_second() {
        let form = RefCell::new(ContactForm::with_data(ada()));
        let client = StubClient::failing();
        let mut clock = ManualClock::default();

        let timer = block_on(submit_form(&form, &client))
            .unwrap()
            .expect("failure schedules a reset");
        assert!(!timer.clears_fields());
        clock.schedule(timer);
        assert_eq!(form.borrow().status(), SubmissionStatus::Failed);

        clock.advance(Duration::from_millis(999), &form);
        assert_eq!(form.borrow().status(), SubmissionStatus::Failed);

        clock.advance(Duration::from_millis(1), &form);
        assert_eq!(form.borrow().status(), SubmissionStatus::Idle);
        assert_eq!(form.borrow().data(), &ada());
    }

    #[test]
    fn confirmation_blocks_resubmit() {
        let form = RefCell::new(ContactForm::with_data(ada()));
        let client = StubClient::ok();
        block_on(submit_form(&form, &client)).unwrap();

        let res = block_on(submit_form(&form, &client));
        assert_eq!(res, Err(SubmitRejected::Confirming));
        assert_eq!(client.calls.get(), 1);
        assert!(!form.borrow().status().accepts_submit());
    }

    #[test]
    fn retry_from_failed_cancels_error_reset() {
        let form = RefCell::new(ContactForm::with_data(ada()));
        let stale = block_on(submit_form(&form, &StubClient::failing()))
            .unwrap()
            .unwrap();
        assert!(form.borrow().status().accepts_submit());

        let fresh = block_on(submit_form(&form, &StubClient::ok()))
            .unwrap()
            .unwrap();
        assert_ne!(stale, fresh);

        // the old one-second timer fires while the confirmation is up
        assert!(!form.borrow_mut().expire(stale));
        assert_eq!(form.borrow().status(), SubmissionStatus::Succeeded);
        assert!(form.borrow_mut().expire(fresh));
        assert_eq!(form.borrow().status(), SubmissionStatus::Idle);
    }

    #[test]
    fn teardown_cancels_pending_reset() {
        let mut form = ContactForm::with_data(ada());
        let attempt = form.begin_submit().unwrap();
        let timer = form.finish(attempt, Ok(())).unwrap();

        assert_eq!(form.teardown(), Some(timer));
        assert!(!form.expire(timer));
        assert_eq!(form.status(), SubmissionStatus::Succeeded);
        assert_eq!(form.data(), &ada());
        assert_eq!(form.begin_submit().unwrap_err(), SubmitRejected::TornDown);
    }

    #[test]
    fn result_after_teardown_is_discarded() {
        let mut form = ContactForm::with_data(ada());
        let attempt = form.begin_submit().unwrap();
        assert_eq!(form.teardown(), None);

        assert_eq!(form.finish(attempt, Err(SubmitError::new("late"))), None);
        assert_eq!(form.pending_reset(), None);
    }

    #[test]
    fn typing_while_sending_is_kept() {
        let mut form = ContactForm::with_data(ada());
        let attempt = form.begin_submit().unwrap();
        form.set_field(Field::Message, "Hello again");

        assert_eq!(attempt.data().message, "Hello");
        let timer = form
            .finish(attempt, Err(SubmitError::new("offline")))
            .unwrap();
        assert!(form.expire(timer));
        assert_eq!(form.data().message, "Hello again");
    }

    #[test]
    fn labels_follow_status() {
        assert_eq!(SubmissionStatus::Idle.button_label(), "Send Message");
        assert_eq!(SubmissionStatus::Sending.button_label(), "Sending...");
        assert_eq!(SubmissionStatus::Succeeded.button_label(), "Message Sent!");
        assert!(!SubmissionStatus::Sending.accepts_submit());
    }

    #[test]
    fn rejection_messages() {
        let err = SubmitRejected::MissingFields(vec![Field::Name, Field::Message]);
        assert_eq!(err.to_string(), "missing required fields: name, message");
        assert_eq!(
            SubmitError::new("timed out").to_string(),
            "failed to send message: timed out"
        );
    }
}
