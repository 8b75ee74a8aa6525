use chrono::{DateTime, Utc};

use super::form::{Field, IntakeForm, IntakeSubmission, ValidationError};
use super::submit::SubmitError;

pub const SUBMIT_FAILED_MESSAGE: &str =
    "There was an error submitting your request. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    Invalid(ValidationError),
    InProgress,
}

/// One open session of the intake modal. `session` tells it apart from
/// earlier sessions whose requests may still be in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeFlow {
    pub session: u32,
    pub form: IntakeForm,
    pub phase: Phase,
    pub error: Option<String>,
}

impl IntakeFlow {
    pub fn new(session: u32) -> Self {
        Self {
            session,
            form: IntakeForm::default(),
            phase: Phase::Editing,
            error: None,
        }
    }

    pub fn is_editable(&self) -> bool {
        self.phase == Phase::Editing
    }

    pub fn edit(&mut self, field: Field, value: String) {
        if self.is_editable() {
            self.form.set(field, value);
        }
    }

    /// Validates and moves to `Submitting`, handing back the body to post.
    /// State is untouched when the submit is rejected.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<IntakeSubmission, SubmitRejected> {
        match self.phase {
            Phase::Editing => {}
            Phase::Submitting | Phase::Succeeded => return Err(SubmitRejected::InProgress),
        }
        self.form.validate().map_err(SubmitRejected::Invalid)?;

        self.error = None;
        self.phase = Phase::Submitting;
        Ok(self.form.to_submission(now))
    }

    /// Applies the outcome of the request started by `begin_submit`.
    /// Returns false, changing nothing, when no request is in flight.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> bool {
        if self.phase != Phase::Submitting {
            return false;
        }
        match result {
            Ok(()) => {
                self.phase = Phase::Succeeded;
                self.error = None;
            }
            Err(_) => {
                self.phase = Phase::Editing;
                self.error = Some(SUBMIT_FAILED_MESSAGE.to_string());
            }
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalState {
    last_session: u32,
    flow: Option<IntakeFlow>,
}

impl ModalState {
    /// Starts a fresh session unless one is already open.
    pub fn open(&mut self) {
        if self.flow.is_none() {
            self.last_session = self.last_session.wrapping_add(1);
            self.flow = Some(IntakeFlow::new(self.last_session));
        }
    }

    /// Drops the open session along with everything typed into it.
    pub fn close(&mut self) {
        self.flow = None;
    }

    pub fn is_open(&self) -> bool {
        self.flow.is_some()
    }

    pub fn flow(&self) -> Option<&IntakeFlow> {
        self.flow.as_ref()
    }

    pub fn flow_mut(&mut self) -> Option<&mut IntakeFlow> {
        self.flow.as_mut()
    }

    /// The open flow, only if it is the given session.
    pub fn session_mut(&mut self, session: u32) -> Option<&mut IntakeFlow> {
        self.flow.as_mut().filter(|flow| flow.session == session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::form::ContactMethod;

    fn open_with_lead() -> ModalState {
        let mut modal = ModalState::default();
        modal.open();
        let flow = modal.flow_mut().unwrap();
        flow.edit(Field::FullName, "Sam Reyes".to_string());
        flow.edit(Field::Email, "sam@tidewater.io".to_string());
        flow.edit(Field::Company, "Tidewater".to_string());
        modal
    }

    #[test]
    fn starts_closed() {
        let modal = ModalState::default();
        assert!(!modal.is_open());
        assert!(modal.flow().is_none());
    }

    #[test]
    fn missing_required_field_blocks_submission() {
        let mut modal = ModalState::default();
        modal.open();
        let flow = modal.flow_mut().unwrap();
        flow.edit(Field::FullName, "Sam Reyes".to_string());
        flow.edit(Field::Email, "sam@tidewater.io".to_string());

        let result = flow.begin_submit(Utc::now());

        assert_eq!(result, Err(SubmitRejected::Invalid(ValidationError::MissingRequired)));
        assert_eq!(flow.phase, Phase::Editing);
        assert!(flow.error.is_none());
    }

    #[test]
    fn valid_form_moves_to_submitting() {
        let mut modal = open_with_lead();
        let flow = modal.flow_mut().unwrap();

        let submission = flow.begin_submit(Utc::now()).unwrap();

        assert_eq!(submission.company, "Tidewater");
        assert_eq!(flow.phase, Phase::Submitting);
        assert!(!flow.is_editable());
        assert_eq!(flow.begin_submit(Utc::now()), Err(SubmitRejected::InProgress));
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut modal = open_with_lead();
        let flow = modal.flow_mut().unwrap();
        flow.begin_submit(Utc::now()).unwrap();

        flow.edit(Field::Company, "Someone Else".to_string());

        assert_eq!(flow.form.company, "Tidewater");
    }

    #[test]
    fn success_shows_success_phase() {
        let mut modal = open_with_lead();
        let flow = modal.flow_mut().unwrap();
        flow.begin_submit(Utc::now()).unwrap();

        assert!(flow.finish_submit(Ok(())));

        assert_eq!(flow.phase, Phase::Succeeded);
        assert!(flow.error.is_none());
    }

    #[test]
    fn failure_shows_inline_error_and_allows_retry() {
        let mut modal = open_with_lead();
        let flow = modal.flow_mut().unwrap();
        flow.begin_submit(Utc::now()).unwrap();

        assert!(flow.finish_submit(Err(SubmitError::Status(503))));

        assert_eq!(flow.phase, Phase::Editing);
        assert_eq!(flow.error.as_deref(), Some(SUBMIT_FAILED_MESSAGE));
        assert_eq!(flow.form.full_name, "Sam Reyes");

        flow.edit(Field::Phone, "+1 555 0100".to_string());
        assert_eq!(flow.form.phone, "+1 555 0100");

        flow.begin_submit(Utc::now()).unwrap();
        assert!(flow.error.is_none());
        assert_eq!(flow.phase, Phase::Submitting);
    }

    #[test]
    fn outcome_without_request_in_flight_is_ignored() {
        let mut modal = open_with_lead();
        let flow = modal.flow_mut().unwrap();

        assert!(!flow.finish_submit(Err(SubmitError::Status(500))));
        assert!(!flow.finish_submit(Ok(())));

        assert_eq!(flow.phase, Phase::Editing);
        assert!(flow.error.is_none());
    }

    #[test]
    fn closing_discards_entered_data() {
        let mut modal = open_with_lead();
        modal
            .flow_mut()
            .unwrap()
            .edit(Field::ContactMethod, "Video call".to_string());

        modal.close();
        assert!(!modal.is_open());

        modal.open();
        let flow = modal.flow().unwrap();
        assert_eq!(flow, &IntakeFlow::new(flow.session));
        assert!(flow.form.company.is_empty());
        assert_eq!(flow.form.contact_method, ContactMethod::Email);
    }

    #[test]
    fn reopening_while_open_keeps_the_session() {
        let mut modal = open_with_lead();
        let session = modal.flow().unwrap().session;
        modal.open();
        assert_eq!(modal.flow().unwrap().session, session);
        assert_eq!(modal.flow().unwrap().form.company, "Tidewater");
    }

    #[test]
    fn reopened_modal_is_a_new_session() {
        let mut modal = open_with_lead();
        let first = modal.flow().unwrap().session;
        modal.close();
        modal.open();
        let second = modal.flow().unwrap().session;

        assert_ne!(first, second);
        assert!(modal.session_mut(first).is_none());
        assert!(modal.session_mut(second).is_some());
    }
}
