use chrono::{DateTime, Utc};
use log::warn;

use super::flow::{ModalState, SubmitRejected};
use super::form::{Field, IntakeSubmission};
use super::submit::SubmitError;
use crate::config;

pub const PLACEHOLDER_REDIRECT_NOTICE: &str = "Redirect to PAYMENT_URL would happen here.";

pub enum IntakeEvent {
    Open,
    Close,
    Edit(Field, String),
    Submit(DateTime<Utc>),
    Submitted {
        session: u32,
        result: Result<(), SubmitError>,
    },
    Redirect,
}

/// Side effects the page performs after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeEffect {
    Render,
    Alert(String),
    Post {
        session: u32,
        submission: IntakeSubmission,
    },
    ReportFailure(String),
    ScheduleRedirect { delay_ms: u32 },
    Navigate(&'static str),
}

impl ModalState {
    /// Advances the modal for `event`. `payment_url` is `None` while the
    /// checkout link is still the placeholder.
    pub fn apply(&mut self, event: IntakeEvent, payment_url: Option<&'static str>) -> Vec<IntakeEffect> {
        match event {
            IntakeEvent::Open => {
                if self.is_open() {
                    return Vec::new();
                }
                self.open();
                vec![IntakeEffect::Render]
            }
            IntakeEvent::Close => {
                self.close();
                vec![IntakeEffect::Render]
            }
            IntakeEvent::Edit(field, value) => match self.flow_mut() {
                Some(flow) => {
                    flow.edit(field, value);
                    vec![IntakeEffect::Render]
                }
                None => Vec::new(),
            },
            IntakeEvent::Submit(now) => {
                let Some(flow) = self.flow_mut() else {
                    return Vec::new();
                };
                match flow.begin_submit(now) {
                    Ok(submission) => vec![
                        IntakeEffect::Post {
                            session: flow.session,
                            submission,
                        },
                        IntakeEffect::Render,
                    ],
                    Err(SubmitRejected::Invalid(e)) => vec![IntakeEffect::Alert(e.to_string())],
                    Err(SubmitRejected::InProgress) => Vec::new(),
                }
            }
            IntakeEvent::Submitted { session, result } => {
                let mut effects = Vec::new();
                if let Err(e) = &result {
                    effects.push(IntakeEffect::ReportFailure(e.to_string()));
                }
                let succeeded = result.is_ok();

                let applied = self
                    .session_mut(session)
                    .map_or(false, |flow| flow.finish_submit(result));
                if !applied {
                    warn!("Dropping intake response for stale session {}", session);
                    return effects;
                }

                effects.push(IntakeEffect::Render);
                if succeeded {
                    effects.push(IntakeEffect::ScheduleRedirect {
                        delay_ms: config::REDIRECT_DELAY_MS,
                    });
                }
                effects
            }
            IntakeEvent::Redirect => match payment_url {
                Some(url) => vec![IntakeEffect::Navigate(url)],
                None => {
                    self.close();
                    vec![
                        IntakeEffect::Alert(PLACEHOLDER_REDIRECT_NOTICE.to_string()),
                        IntakeEffect::Render,
                    ]
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::flow::{Phase, SUBMIT_FAILED_MESSAGE};

    const CHECKOUT: Option<&'static str> = Some(config::PAYMENT_URL);

    fn fill(modal: &mut ModalState) {
        modal.apply(IntakeEvent::Edit(Field::FullName, "Lena Park".to_string()), CHECKOUT);
        modal.apply(IntakeEvent::Edit(Field::Email, "lena@harborline.com".to_string()), CHECKOUT);
        modal.apply(IntakeEvent::Edit(Field::Company, "Harborline".to_string()), CHECKOUT);
    }

    fn submit(modal: &mut ModalState) -> u32 {
        let effects = modal.apply(IntakeEvent::Submit(Utc::now()), CHECKOUT);
        match effects.first() {
            Some(IntakeEffect::Post { session, .. }) => *session,
            other => panic!("expected a post, got {:?}", other),
        }
    }

    #[test]
    fn invalid_submit_alerts_without_posting() {
        let mut modal = ModalState::default();
        modal.apply(IntakeEvent::Open, CHECKOUT);
        modal.apply(IntakeEvent::Edit(Field::FullName, "Lena Park".to_string()), CHECKOUT);

        let effects = modal.apply(IntakeEvent::Submit(Utc::now()), CHECKOUT);

        assert_eq!(
            effects,
            vec![IntakeEffect::Alert(
                "Full Name, Business Email, and Company Name are required.".to_string()
            )]
        );
        assert_eq!(modal.flow().unwrap().phase, Phase::Editing);
    }

    #[test]
    fn valid_submit_posts_the_form() {
        let mut modal = ModalState::default();
        modal.apply(IntakeEvent::Open, CHECKOUT);
        fill(&mut modal);

        let effects = modal.apply(IntakeEvent::Submit(Utc::now()), CHECKOUT);

        match &effects[..] {
            [IntakeEffect::Post { submission, .. }, IntakeEffect::Render] => {
                assert_eq!(submission.company, "Harborline");
                assert_eq!(submission.contact_method, "Email");
            }
            other => panic!("unexpected effects {:?}", other),
        }
        assert!(modal.apply(IntakeEvent::Submit(Utc::now()), CHECKOUT).is_empty());
    }

    #[test]
    fn success_schedules_redirect_after_fixed_delay() {
        let mut modal = ModalState::default();
        modal.apply(IntakeEvent::Open, CHECKOUT);
        fill(&mut modal);
        let session = submit(&mut modal);

        let effects = modal.apply(IntakeEvent::Submitted { session, result: Ok(()) }, CHECKOUT);

        assert_eq!(
            effects,
            vec![
                IntakeEffect::Render,
                IntakeEffect::ScheduleRedirect { delay_ms: 2_500 },
            ]
        );
        assert_eq!(modal.flow().unwrap().phase, Phase::Succeeded);

        let effects = modal.apply(IntakeEvent::Redirect, CHECKOUT);
        assert_eq!(effects, vec![IntakeEffect::Navigate(config::PAYMENT_URL)]);
    }

    #[test]
    fn failure_reports_and_keeps_form_editable() {
        let mut modal = ModalState::default();
        modal.apply(IntakeEvent::Open, CHECKOUT);
        fill(&mut modal);
        let session = submit(&mut modal);

        let effects = modal.apply(
            IntakeEvent::Submitted {
                session,
                result: Err(SubmitError::Network("connection reset".to_string())),
            },
            CHECKOUT,
        );

        assert_eq!(
            effects,
            vec![
                IntakeEffect::ReportFailure("form endpoint unreachable: connection reset".to_string()),
                IntakeEffect::Render,
            ]
        );
        let flow = modal.flow().unwrap();
        assert!(flow.is_editable());
        assert_eq!(flow.error.as_deref(), Some(SUBMIT_FAILED_MESSAGE));
        assert_eq!(flow.form.company, "Harborline");
    }

    #[test]
    fn placeholder_checkout_alerts_and_closes() {
        let mut modal = ModalState::default();
        modal.apply(IntakeEvent::Open, None);
        fill(&mut modal);

        let effects = modal.apply(IntakeEvent::Redirect, None);

        assert_eq!(
            effects,
            vec![
                IntakeEffect::Alert("Redirect to PAYMENT_URL would happen here.".to_string()),
                IntakeEffect::Render,
            ]
        );
        assert!(!modal.is_open());
    }

    #[test]
    fn late_response_does_not_touch_a_reopened_form() {
        let mut modal = ModalState::default();
        modal.apply(IntakeEvent::Open, CHECKOUT);
        fill(&mut modal);
        let stale = submit(&mut modal);
        modal.apply(IntakeEvent::Close, CHECKOUT);
        modal.apply(IntakeEvent::Open, CHECKOUT);

        let effects = modal.apply(
            IntakeEvent::Submitted {
                session: stale,
                result: Err(SubmitError::Status(500)),
            },
            CHECKOUT,
        );
        assert_eq!(
            effects,
            vec![IntakeEffect::ReportFailure(
                "form endpoint responded with status 500".to_string()
            )]
        );

        let effects = modal.apply(IntakeEvent::Submitted { session: stale, result: Ok(()) }, CHECKOUT);
        assert!(effects.is_empty());

        let flow = modal.flow().unwrap();
        assert_eq!(flow.phase, Phase::Editing);
        assert!(flow.error.is_none());
        assert!(flow.form.full_name.is_empty());
    }

    #[test]
    fn late_response_leaves_new_request_in_flight() {
        let mut modal = ModalState::default();
        modal.apply(IntakeEvent::Open, CHECKOUT);
        fill(&mut modal);
        let stale = submit(&mut modal);
        modal.apply(IntakeEvent::Close, CHECKOUT);
        modal.apply(IntakeEvent::Open, CHECKOUT);
        fill(&mut modal);
        let current = submit(&mut modal);

        modal.apply(
            IntakeEvent::Submitted {
                session: stale,
                result: Err(SubmitError::Status(502)),
            },
            CHECKOUT,
        );

        assert_ne!(stale, current);
        assert_eq!(modal.flow().unwrap().phase, Phase::Submitting);
        assert!(modal.apply(IntakeEvent::Submit(Utc::now()), CHECKOUT).is_empty());
    }

    #[test]
    fn response_after_close_is_dropped() {
        let mut modal = ModalState::default();
        modal.apply(IntakeEvent::Open, CHECKOUT);
        fill(&mut modal);
        let session = submit(&mut modal);
        modal.apply(IntakeEvent::Close, CHECKOUT);

        let effects = modal.apply(IntakeEvent::Submitted { session, result: Ok(()) }, CHECKOUT);

        assert!(effects.is_empty());
        assert!(!modal.is_open());
    }
}
