use thiserror::Error;

/// Why an appointment request did not reach the inbox.
///
/// The details are for the console only; visitors see a generic message.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("failed to encode appointment request: {0}")]
    Encode(String),

    #[error("email service unreachable: {0}")]
    Network(String),

    #[error("email service rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl From<gloo_net::Error> for SendError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => SendError::Encode(e.to_string()),
            other => SendError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_map_to_network() {
        let err: SendError = gloo_net::Error::GlooError("fetch failed".into()).into();
        assert!(matches!(err, SendError::Network(ref m) if m.contains("fetch failed")));
    }

    #[test]
    fn rejection_message_names_status() {
        let err = SendError::Rejected { status: 412, body: "template not found".into() };
        assert_eq!(err.to_string(), "email service rejected request with status 412: template not found");
    }
}
