use std::rc::Rc;

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use serde::Serialize;

use crate::appointment::AppointmentRequest;
use crate::config::{self, EmailJsConfig};
use crate::error::SendError;

/// Forwards a filled-in appointment form to the clinic.
pub trait EmailDelivery {
    fn send_appointment_request<'a>(&'a self, request: &'a AppointmentRequest) -> LocalBoxFuture<'a, Result<(), SendError>>;
}

#[derive(Serialize)]
struct EmailJsPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a AppointmentRequest,
}

pub struct EmailJsClient {
    config: &'static EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: &'static EmailJsConfig) -> Self {
        Self { config }
    }

    fn payload<'a>(&'a self, request: &'a AppointmentRequest) -> EmailJsPayload<'a> {
        EmailJsPayload {
            service_id: self.config.service_id,
            template_id: self.config.template_id,
            user_id: self.config.public_key,
            template_params: request,
        }
    }

    async fn send(&self, request: &AppointmentRequest) -> Result<(), SendError> {
        let response = Request::post(self.config.api_url)
            .json(&self.payload(request))?
            .send()
            .await?;

        if response.ok() {
            log::info!("Appointment request delivered");
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(SendError::Rejected { status, body })
        }
    }
}

impl Default for EmailJsClient {
    fn default() -> Self {
        Self::new(&config::EMAILJS)
    }
}

impl EmailDelivery for EmailJsClient {
    fn send_appointment_request<'a>(&'a self, request: &'a AppointmentRequest) -> LocalBoxFuture<'a, Result<(), SendError>> {
        Box::pin(self.send(request))
    }
}

/// Shared delivery capability, passed to the form as a prop.
#[derive(Clone)]
pub struct Mailer(pub Rc<dyn EmailDelivery>);

impl Mailer {
    pub fn emailjs() -> Self {
        Mailer(Rc::new(EmailJsClient::default()))
    }
}

impl PartialEq for Mailer {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Runs one delivery attempt. Failures are logged in full here and handed
/// back so the caller can pick the visitor-facing message.
pub async fn deliver(mailer: &dyn EmailDelivery, request: &AppointmentRequest) -> Result<(), SendError> {
    let result = mailer.send_appointment_request(request).await;
    if let Err(ref e) = result {
        log::error!("EmailJS error: {}", e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::{StatusKind, SubmissionState};
    use futures::executor::block_on;
    use std::cell::Cell;

    struct FakeMailer {
        fail: bool,
        calls: Cell<usize>,
    }

    impl EmailDelivery for FakeMailer {
        fn send_appointment_request<'a>(&'a self, _request: &'a AppointmentRequest) -> LocalBoxFuture<'a, Result<(), SendError>> {
            self.calls.set(self.calls.get() + 1);
            let fail = self.fail;
            Box::pin(async move {
                if fail {
                    Err(SendError::Network("connection reset".into()))
                } else {
                    Ok(())
                }
            })
        }
    }

    fn sample() -> AppointmentRequest {
        AppointmentRequest {
            name: "A".into(),
            mobile: "1".into(),
            email: "a@b.com".into(),
            address: "X".into(),
            message: "Y".into(),
        }
    }

    #[test]
    fn payload_carries_account_ids_and_fields() {
        let client = EmailJsClient::default();
        let request = sample();
        let json = serde_json::to_value(client.payload(&request)).unwrap();

        assert_eq!(json["service_id"], config::EMAILJS.service_id);
        assert_eq!(json["template_id"], config::EMAILJS.template_id);
        assert_eq!(json["user_id"], config::EMAILJS.public_key);
        assert_eq!(json["template_params"]["name"], "A");
        assert_eq!(json["template_params"]["mobile"], "1");
        assert_eq!(json["template_params"]["email"], "a@b.com");
        assert_eq!(json["template_params"]["address"], "X");
        assert_eq!(json["template_params"]["message"], "Y");
    }

    #[test]
    fn successful_delivery_calls_once() {
        let mailer = FakeMailer { fail: false, calls: Cell::new(0) };
        let result = block_on(deliver(&mailer, &sample()));

        assert!(result.is_ok());
        assert_eq!(mailer.calls.get(), 1);
        let state = SubmissionState::idle().start(1).finish(1, result.is_ok());
        assert_eq!(state.status.kind, StatusKind::Success);
        assert!(!state.is_submitting);
    }

    #[test]
    fn failed_delivery_keeps_reason_out_of_status() {
        let mailer = FakeMailer { fail: true, calls: Cell::new(0) };
        let result = block_on(deliver(&mailer, &sample()));

        assert!(matches!(result, Err(SendError::Network(_))));
        assert_eq!(mailer.calls.get(), 1);
        let state = SubmissionState::idle().start(1).finish(1, result.is_ok());
        assert_eq!(state.status.kind, StatusKind::Failure);
        assert!(!state.status.message.contains("connection reset"));
    }

    #[test]
    fn mailer_handles_compare_by_identity() {
        let a = Mailer::emailjs();
        let b = a.clone();
        assert!(a == b);
        assert!(a != Mailer::emailjs());
    }
}
