//! Generic form controller: Idle → Submitting → Idle
//!
//! One controller drives every form. What differs between the quote, booking
//! and contact forms lives in a [`FormSpec`]: the fields and which of them are
//! required, the endpoint, how a snapshot becomes a request body, the
//! success/failure messages, and an optional date rule.

use super::calendar::DatePicker;
use super::field::{ChoiceOption, FormField};
use super::field_store::{FieldStore, FormState};
use super::validator::{validate, DateRule, ValidationError, AGGREGATED_NOTICE};
use crate::api::{self, Endpoint, SiteApi, SubmissionRequest, SubmissionResult};
use crate::state::Notice;
use chrono::NaiveDate;
use serde_json::Value;

/// Which form a controller belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Quote,
    Booking,
    Contact,
}

impl FormKind {
    pub fn label(&self) -> &'static str {
        match self {
            FormKind::Quote => "quote",
            FormKind::Booking => "booking",
            FormKind::Contact => "contact",
        }
    }
}

/// Builds the request body from a snapshot and the picked date, if any
pub type RequestMapper = fn(&FormState, Option<NaiveDate>) -> Result<Value, serde_json::Error>;

/// Send the snapshot as a flat JSON object
fn snapshot_body(state: &FormState, _date: Option<NaiveDate>) -> Result<Value, serde_json::Error> {
    let map: serde_json::Map<String, Value> = state
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();
    Ok(Value::Object(map))
}

/// Everything that makes one form different from another
#[derive(Debug, Clone)]
pub struct FormSpec {
    pub kind: FormKind,
    pub endpoint: Endpoint,
    pub fields: Vec<FormField>,
    pub date_rule: Option<DateRule>,
    pub success_message: String,
    pub failure_message: String,
    pub mapper: RequestMapper,
}

impl FormSpec {
    pub fn builder(kind: FormKind, endpoint: Endpoint) -> FormSpecBuilder {
        FormSpecBuilder {
            spec: FormSpec {
                kind,
                endpoint,
                fields: Vec::new(),
                date_rule: None,
                success_message: "Submitted!".to_string(),
                failure_message: "Submission failed. Please try again.".to_string(),
                mapper: snapshot_body,
            },
        }
    }
}

/// Builder for [`FormSpec`]
#[derive(Debug, Clone)]
pub struct FormSpecBuilder {
    spec: FormSpec,
}

impl FormSpecBuilder {
    pub fn field(mut self, field: FormField) -> Self {
        self.spec.fields.push(field);
        self
    }

    pub fn text(self, name: &'static str, label: &'static str) -> Self {
        self.field(FormField::text(name, label))
    }

    pub fn required_text(self, name: &'static str, label: &'static str) -> Self {
        self.field(FormField::text(name, label).required())
    }

    pub fn multiline(self, name: &'static str, label: &'static str) -> Self {
        self.field(FormField::multiline(name, label))
    }

    pub fn choice(
        self,
        name: &'static str,
        label: &'static str,
        options: &'static [ChoiceOption],
    ) -> Self {
        self.field(FormField::choice(name, label, options))
    }

    pub fn required_choice(
        self,
        name: &'static str,
        label: &'static str,
        options: &'static [ChoiceOption],
    ) -> Self {
        self.choice(name, label, options).required()
    }

    /// Mark the most recently added field as required
    pub fn required(mut self) -> Self {
        if let Some(field) = self.spec.fields.pop() {
            self.spec.fields.push(field.required());
        }
        self
    }

    /// Require a calendar date that satisfies `rule`
    pub fn date_rule(mut self, rule: DateRule) -> Self {
        self.spec.date_rule = Some(rule);
        self
    }

    pub fn messages(mut self, success: impl Into<String>, failure: impl Into<String>) -> Self {
        self.spec.success_message = success.into();
        self.spec.failure_message = failure.into();
        self
    }

    pub fn mapper(mut self, mapper: RequestMapper) -> Self {
        self.spec.mapper = mapper;
        self
    }

    pub fn build(self) -> FormSpec {
        self.spec
    }
}

/// Where a form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// What pressing submit did
#[derive(Debug)]
pub enum SubmitStart {
    /// A submission is already in flight; nothing happened
    Ignored,
    /// Validation failed; show this notice, stay Idle
    Rejected(Notice),
    /// Send this request, then call [`FormController::settle`]
    Started(SubmissionRequest),
}

/// A focusable stop inside a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSlot {
    Calendar,
    Field(usize),
    Submit,
}

/// Trait for focus cycling across a form's stops
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Orchestrates one form: store, validation, submission, feedback
#[derive(Debug, Clone)]
pub struct FormController {
    spec: FormSpec,
    store: FieldStore,
    phase: FormPhase,
    calendar: Option<DatePicker>,
    focus: usize,
}

impl FormController {
    pub fn new(spec: FormSpec, today: NaiveDate) -> Self {
        let store = FieldStore::new(spec.fields.clone());
        let calendar = spec.date_rule.map(|_| DatePicker::new(today));
        Self {
            spec,
            store,
            phase: FormPhase::Idle,
            calendar,
            focus: 0,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.spec.kind
    }

    #[cfg(test)]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut FieldStore {
        &mut self.store
    }

    pub fn calendar(&self) -> Option<&DatePicker> {
        self.calendar.as_ref()
    }

    pub fn calendar_mut(&mut self) -> Option<&mut DatePicker> {
        self.calendar.as_mut()
    }

    pub fn date_rule(&self) -> Option<DateRule> {
        self.spec.date_rule
    }

    /// Run every check; the first failure wins
    pub fn validate(
        &self,
        today: NaiveDate,
    ) -> Result<(FormState, Option<NaiveDate>), ValidationError> {
        let state = self.store.snapshot();
        validate(&state, &self.store.required_names())?;

        let date = match self.spec.date_rule {
            Some(rule) => {
                let selected = self.calendar.as_ref().and_then(DatePicker::selected);
                Some(rule.check(selected, today)?)
            }
            None => None,
        };
        Ok((state, date))
    }

    /// Handle a submit trigger.
    ///
    /// Ignored while a submission is in flight. Otherwise validates; on
    /// success the controller moves to Submitting and hands back the request.
    pub fn begin_submit(&mut self, today: NaiveDate) -> SubmitStart {
        if self.is_submitting() {
            tracing::debug!(form = self.kind().label(), "submit ignored, already submitting");
            return SubmitStart::Ignored;
        }

        let (state, date) = match self.validate(today) {
            Ok(valid) => valid,
            Err(err) => {
                tracing::debug!(form = self.kind().label(), %err, "validation failed");
                return SubmitStart::Rejected(Notice::Failure(AGGREGATED_NOTICE.to_string()));
            }
        };

        let body = match (self.spec.mapper)(&state, date) {
            Ok(body) => body,
            Err(err) => {
                tracing::error!(form = self.kind().label(), %err, "could not build request body");
                return SubmitStart::Rejected(Notice::Failure(self.spec.failure_message.clone()));
            }
        };

        self.phase = FormPhase::Submitting;
        SubmitStart::Started(SubmissionRequest::new(self.spec.endpoint, body))
    }

    /// Record the outcome of the in-flight submission.
    ///
    /// Success resets the fields (and the picked date); failure keeps them so
    /// the user can retry. Returns `None` if nothing was in flight.
    pub fn settle(&mut self, result: &SubmissionResult, today: NaiveDate) -> Option<Notice> {
        if !self.is_submitting() {
            tracing::warn!(
                form = self.kind().label(),
                "result arrived with no submission in flight"
            );
            return None;
        }
        self.phase = FormPhase::Idle;

        match result {
            SubmissionResult::Success => {
                self.store.reset();
                if let Some(calendar) = self.calendar.as_mut() {
                    calendar.reset(today);
                }
                Some(Notice::Success(self.spec.success_message.clone()))
            }
            SubmissionResult::Failure(_) => {
                Some(Notice::Failure(self.spec.failure_message.clone()))
            }
        }
    }

    /// Full cycle for callers that can await: validate, send, settle.
    /// The app splits this across a spawned task instead.
    #[allow(dead_code)]
    pub async fn submit(&mut self, client: &dyn SiteApi, today: NaiveDate) -> Option<Notice> {
        match self.begin_submit(today) {
            SubmitStart::Ignored => None,
            SubmitStart::Rejected(notice) => Some(notice),
            SubmitStart::Started(request) => {
                let result = api::submit(client, request).await;
                self.settle(&result, today)
            }
        }
    }

    /// Focus stops in order: calendar (if any), fields, submit button
    fn slots(&self) -> usize {
        usize::from(self.calendar.is_some()) + self.store.len() + 1
    }

    pub fn focus_slot(&self) -> FocusSlot {
        let offset = usize::from(self.calendar.is_some());
        if self.calendar.is_some() && self.focus == 0 {
            FocusSlot::Calendar
        } else if self.focus - offset < self.store.len() {
            FocusSlot::Field(self.focus - offset)
        } else {
            FocusSlot::Submit
        }
    }

    /// Field under focus, if focus is on a field
    pub fn active_form_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus_slot() {
            FocusSlot::Field(i) => self.store.field_at_mut(i),
            FocusSlot::Calendar | FocusSlot::Submit => None,
        }
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_form_field_mut() {
            field.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_form_field_mut() {
            field.pop_char();
        }
    }

    /// Cycle the focused choice field
    pub fn cycle_choice(&mut self, forward: bool) {
        if let Some(field) = self.active_form_field_mut() {
            field.cycle_choice(forward);
        }
    }

    /// Pick the date under the calendar cursor
    pub fn select_date(&mut self, today: NaiveDate) -> bool {
        match (self.spec.date_rule, self.calendar.as_mut()) {
            (Some(rule), Some(calendar)) => calendar.select_cursor(&rule, today),
            _ => false,
        }
    }
}

impl Form for FormController {
    fn field_count(&self) -> usize {
        self.slots()
    }
    fn active_field(&self) -> usize {
        self.focus
    }
    fn set_active_field(&mut self, index: usize) {
        self.focus = index.min(self.slots() - 1);
    }
}
