//! Submit lifecycle shared by every entity form.
//!
//! ```text
//! idle -> validating -> submitting -> idle (success | error)
//!              \-> idle (validation errors, nothing sent)
//! ```
//! Edit mode is tracked separately: it is entered from a row's edit action
//! and left on a successful update or an explicit cancel.

use super::validation::ValidationErrors;
use crate::domain::common::RecordId;
use serde::Serialize;

/// Form values as typed by the user, convertible into a request payload
pub trait FormModel: Clone + Default {
    type Payload: Serialize + Clone;

    /// Check every field and build the payload, or report what is wrong
    fn validate(&self) -> Result<Self::Payload, ValidationErrors>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

/// Which request a submission turns into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitKind {
    /// `POST` to the collection
    Create,
    /// `PUT` to the record
    Update(RecordId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submission<P> {
    pub kind: SubmitKind,
    pub payload: P,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<F: FormModel> {
    pub values: F,
    pub errors: ValidationErrors,
    pub phase: FormPhase,
    pub editing: Option<RecordId>,
}

impl<F: FormModel> Default for FormState<F> {
    fn default() -> Self {
        Self {
            values: F::default(),
            errors: ValidationErrors::new(),
            phase: FormPhase::Idle,
            editing: None,
        }
    }
}

impl<F: FormModel> FormState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.errors.get(field).map(str::to_string)
    }

    /// Load a row into the form for editing
    pub fn start_edit(&mut self, id: RecordId, values: F) {
        self.editing = Some(id);
        self.values = values;
        self.errors = ValidationErrors::new();
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.values = F::default();
        self.errors = ValidationErrors::new();
        self.phase = FormPhase::Idle;
    }

    /// Validate the current values.
    ///
    /// Returns the request to send, or `None` when validation failed (errors
    /// are stored on the form) or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<Submission<F::Payload>> {
        if self.phase == FormPhase::Submitting {
            return None;
        }

        self.phase = FormPhase::Validating;
        match self.values.validate() {
            Ok(payload) => {
                self.errors = ValidationErrors::new();
                self.phase = FormPhase::Submitting;
                let kind = match &self.editing {
                    Some(id) => SubmitKind::Update(id.clone()),
                    None => SubmitKind::Create,
                };
                Some(Submission { kind, payload })
            }
            Err(errors) => {
                self.errors = errors;
                self.phase = FormPhase::Idle;
                None
            }
        }
    }

    /// The gateway accepted the submission
    pub fn complete_success(&mut self) {
        self.phase = FormPhase::Idle;
        self.editing = None;
        self.values = F::default();
        self.errors = ValidationErrors::new();
    }

    /// The gateway rejected the submission; user input stays as typed
    pub fn complete_failure(&mut self) {
        self.phase = FormPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{FieldSchema, ValidationRules, Validator};

    const NAME: FieldSchema = FieldSchema::new("name", "Name", ValidationRules::required());

    #[derive(Debug, Clone, Default, PartialEq)]
    struct NameForm {
        name: String,
    }

    impl FormModel for NameForm {
        type Payload = String;

        fn validate(&self) -> Result<String, ValidationErrors> {
            let mut v = Validator::new();
            let name = v.text(&NAME, &self.name);
            v.finish(name)
        }
    }

    #[test]
    fn invalid_form_sends_nothing() {
        let mut form = FormState::<NameForm>::new();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.phase, FormPhase::Idle);
        assert_eq!(form.field_error("name").as_deref(), Some("Name is required"));
    }

    #[test]
    fn create_success_resets_values() {
        let mut form = FormState::<NameForm>::new();
        form.values.name = " Main ".into();
        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.kind, SubmitKind::Create);
        assert_eq!(submission.payload, "Main");
        assert!(form.is_submitting());

        // second click while in flight is ignored
        assert!(form.begin_submit().is_none());

        form.complete_success();
        assert_eq!(form.values, NameForm::default());
        assert_eq!(form.phase, FormPhase::Idle);
    }

    #[test]
    fn failed_submit_preserves_input() {
        let mut form = FormState::<NameForm>::new();
        form.values.name = "Main".into();
        form.begin_submit().unwrap();
        form.complete_failure();
        assert_eq!(form.values.name, "Main");
        assert_eq!(form.phase, FormPhase::Idle);
    }

    #[test]
    fn edit_mode_submits_update_and_clears_on_success() {
        let mut form = FormState::<NameForm>::new();
        form.start_edit(RecordId::from(7i64), NameForm { name: "Old".into() });
        assert!(form.is_edit_mode());

        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.kind, SubmitKind::Update(RecordId::from(7i64)));
        form.complete_success();
        assert!(!form.is_edit_mode());
    }

    #[test]
    fn cancel_edit_leaves_edit_mode() {
        let mut form = FormState::<NameForm>::new();
        form.start_edit(RecordId::from("3"), NameForm { name: "Old".into() });
        form.cancel_edit();
        assert!(!form.is_edit_mode());
        assert_eq!(form.values, NameForm::default());
    }
}
