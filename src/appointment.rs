//! Contact form state: the request a visitor fills in and the status shown
//! under the submit button.

use std::rc::Rc;

use serde::Serialize;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AppointmentRequest {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub address: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Mobile,
    Email,
    Address,
    Message,
}

impl AppointmentRequest {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Mobile => self.mobile = value,
            Field::Email => self.email = value,
            Field::Address => self.address = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Mobile => &self.mobile,
            Field::Email => &self.email,
            Field::Address => &self.address,
            Field::Message => &self.message,
        }
    }

    /// All five fields are required. Same rule as the browser's
    /// `required` check: whitespace counts as a value.
    pub fn is_complete(&self) -> bool {
        [Field::Name, Field::Mobile, Field::Email, Field::Address, Field::Message]
            .iter()
            .all(|f| !self.get(*f).is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    None,
    Success,
    Failure,
}

impl StatusKind {
    pub fn alert_class(&self) -> &'static str {
        match self {
            StatusKind::None => "",
            StatusKind::Success => "alert alert-success",
            StatusKind::Failure => "alert alert-danger",
        }
    }
}

pub const SUCCESS_HEADLINE: &str = "Thank You!";
pub const SUCCESS_MESSAGE: &str =
    "Your appointment request has been received. We will contact you on WhatsApp shortly.";
pub const FAILURE_MESSAGE: &str = "Oops! Something went wrong. Please try again or contact us directly.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub message: String,
}

/// idle -> submitting -> success | failure -> idle
///
/// Every submission carries a generation number. Completions and status
/// clears stamped with an older generation are ignored, so a clear timer
/// left over from an earlier attempt can never reset a newer one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub is_submitting: bool,
    pub status: FormStatus,
    generation: u32,
}

pub enum SubmissionAction {
    Started { generation: u32 },
    Finished { generation: u32, delivered: bool },
    ClearStatus { generation: u32 },
}

impl SubmissionState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn start(&self, generation: u32) -> Self {
        Self {
            is_submitting: true,
            status: FormStatus::default(),
            generation,
        }
    }

    /// State after the remote call settles. The error text never reaches
    /// the visitor.
    pub fn finish(&self, generation: u32, delivered: bool) -> Self {
        if generation != self.generation {
            return self.clone();
        }
        let status = if delivered {
            FormStatus {
                kind: StatusKind::Success,
                message: SUCCESS_MESSAGE.to_string(),
            }
        } else {
            FormStatus {
                kind: StatusKind::Failure,
                message: FAILURE_MESSAGE.to_string(),
            }
        };
        Self {
            is_submitting: false,
            status,
            generation,
        }
    }

    pub fn clear_status(&self, generation: u32) -> Self {
        if generation != self.generation || self.is_submitting {
            return self.clone();
        }
        Self {
            is_submitting: false,
            status: FormStatus::default(),
            generation,
        }
    }

    pub fn submit_disabled(&self) -> bool {
        self.is_submitting
    }
}

impl Reducible for SubmissionState {
    type Action = SubmissionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SubmissionAction::Started { generation } => self.start(generation),
            SubmissionAction::Finished { generation, delivered } => self.finish(generation, delivered),
            SubmissionAction::ClearStatus { generation } => self.clear_status(generation),
        };
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AppointmentRequest {
        AppointmentRequest {
            name: "A".into(),
            mobile: "1".into(),
            email: "a@b.com".into(),
            address: "X".into(),
            message: "Y".into(),
        }
    }

    fn apply(state: Rc<SubmissionState>, action: SubmissionAction) -> Rc<SubmissionState> {
        state.reduce(action)
    }

    #[test]
    fn complete_requires_every_field() {
        assert!(sample().is_complete());
        let mut request = sample();
        request.set(Field::Address, String::new());
        assert!(!request.is_complete());
        assert!(!AppointmentRequest::default().is_complete());
    }

    #[test]
    fn whitespace_only_field_counts_as_filled() {
        let mut request = sample();
        request.set(Field::Name, " ".into());
        assert!(request.is_complete());
    }

    #[test]
    fn submitting_disables_the_button() {
        let state = SubmissionState::idle().start(1);
        assert!(state.submit_disabled());
        assert_eq!(state.status.kind, StatusKind::None);
        assert!(state.status.message.is_empty());
    }

    #[test]
    fn success_reenables_submit() {
        let state = SubmissionState::idle().start(1).finish(1, true);
        assert!(!state.submit_disabled());
        assert_eq!(state.status.kind, StatusKind::Success);
    }

    #[test]
    fn failure_shows_generic_message() {
        let state = SubmissionState::idle().start(1).finish(1, false);
        assert_eq!(state.status.kind, StatusKind::Failure);
        assert_eq!(state.status.message, FAILURE_MESSAGE);
    }

    #[test]
    fn status_clears_after_success() {
        let state = Rc::new(SubmissionState::idle());
        let state = apply(state, SubmissionAction::Started { generation: 1 });
        let state = apply(state, SubmissionAction::Finished { generation: 1, delivered: true });
        assert_eq!(state.status.kind, StatusKind::Success);

        let state = apply(state, SubmissionAction::ClearStatus { generation: 1 });
        assert_eq!(state.status.kind, StatusKind::None);
        assert!(state.status.message.is_empty());
        assert!(!state.is_submitting);
    }

    #[test]
    fn stale_clear_does_not_reset_newer_submission() {
        let state = Rc::new(SubmissionState::idle());
        let state = apply(state, SubmissionAction::Started { generation: 1 });
        let state = apply(state, SubmissionAction::Finished { generation: 1, delivered: false });
        let state = apply(state, SubmissionAction::Started { generation: 2 });

        // First attempt's timer fires while the second is in flight.
        let state = apply(state, SubmissionAction::ClearStatus { generation: 1 });
        assert!(state.is_submitting);
        assert!(state.submit_disabled());
        assert_eq!(state.status.kind, StatusKind::None);

        let state = apply(state, SubmissionAction::Finished { generation: 2, delivered: true });
        let state = apply(state, SubmissionAction::ClearStatus { generation: 1 });
        assert_eq!(state.status.kind, StatusKind::Success);

        let state = apply(state, SubmissionAction::ClearStatus { generation: 2 });
        assert_eq!(state.status.kind, StatusKind::None);
    }

    #[test]
    fn button_stays_disabled_until_call_settles() {
        let state = Rc::new(SubmissionState::idle());
        let state = apply(state, SubmissionAction::Started { generation: 7 });
        let state = apply(state, SubmissionAction::ClearStatus { generation: 7 });
        assert!(state.submit_disabled());
        let state = apply(state, SubmissionAction::Finished { generation: 6, delivered: true });
        assert!(state.submit_disabled());
        let state = apply(state, SubmissionAction::Finished { generation: 7, delivered: true });
        assert!(!state.submit_disabled());
    }

    #[test]
    fn idle_has_no_status() {
        assert_eq!(SubmissionState::idle().status.kind, StatusKind::None);
        assert_eq!(StatusKind::None.alert_class(), "");
        assert_eq!(StatusKind::Failure.alert_class(), "alert alert-danger");
    }
}
