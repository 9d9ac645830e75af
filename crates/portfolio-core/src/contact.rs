//! Contact form submission: validation plus the opaque remote call.
//!
//! The endpoint is treated as a black box that either accepts the message
//! or not; the only user-visible outcome is success/failure, with
//! diagnostic detail going to the log.

use serde::Serialize;

use crate::error::{PortfolioError, PortfolioResult};

/// The contact form's field values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

impl ContactMessage {
    /// Field-level validation before anything goes over the wire.
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.name.trim().is_empty() {
            return Err(PortfolioError::InvalidContact("name is required".into()));
        }
        let email = self.email.trim();
        let valid_email = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid_email {
            return Err(PortfolioError::InvalidContact(
                "a valid email address is required".into(),
            ));
        }
        if self.body.trim().is_empty() {
            return Err(PortfolioError::InvalidContact("message is required".into()));
        }
        Ok(())
    }
}

/// Client for the contact endpoint.
#[derive(Debug, Clone)]
pub struct ContactClient {
    endpoint: String,
    http: reqwest::Client,
}

impl ContactClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post the message as JSON. A non-success status is a failure outcome
    /// like any transport error.
    pub async fn submit(&self, message: &ContactMessage) -> PortfolioResult<()> {
        message.validate()?;

        let response = self
            .http
            .post(&self.endpoint)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(from = %message.email, "contact message submitted");
            Ok(())
        } else {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                %detail,
                "contact submission rejected"
            );
            Err(PortfolioError::SubmissionRejected(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    use super::*;

    /// One-shot HTTP endpoint answering every request with `status`.
    fn stub_endpoint(status: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            let header_end = loop {
                if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break request.len(),
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            };
            let headers = String::from_utf8_lossy(&request[..header_end]).to_lowercase();
            let body_len = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            while request.len() < header_end + body_len {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
            );
            let _ = stream.write_all(response.as_bytes());
        });
        format!("http://{addr}")
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            body: "I would like a website.".into(),
        }
    }

    #[test]
    fn test_valid_message_passes() {
        assert!(message().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut msg = message();
        msg.name = "   ".into();
        assert!(matches!(
            msg.validate(),
            Err(PortfolioError::InvalidContact(_))
        ));
    }

    #[test]
    fn test_malformed_email_rejected() {
        for email in ["", "plain", "@nodomain.com", "user@nodot"] {
            let mut msg = message();
            msg.email = email.into();
            assert!(msg.validate().is_err(), "accepted {email:?}");
        }
    }

    #[test]
    fn test_empty_body_rejected() {
        let mut msg = message();
        msg.body = "\n".into();
        assert!(msg.validate().is_err());
    }

    #[test]
    fn test_subject_is_optional() {
        let mut msg = message();
        msg.subject = String::new();
        assert!(msg.validate().is_ok());
    }

    #[tokio::test]
    async fn test_submit_success() {
        let client = ContactClient::new(stub_endpoint("200 OK"));
        client.submit(&message()).await.unwrap();
    }

    #[tokio::test]
    async fn test_submit_rejected_status_becomes_error() {
        let client = ContactClient::new(stub_endpoint("422 Unprocessable Entity"));
        let err = client.submit(&message()).await.unwrap_err();
        assert!(matches!(err, PortfolioError::SubmissionRejected(422)));
    }

    #[tokio::test]
    async fn test_invalid_message_never_reaches_the_wire() {
        // Nothing listens on this port; validation must fail first.
        let client = ContactClient::new("http://127.0.0.1:9");
        let mut msg = message();
        msg.email = "not-an-address".into();
        assert!(matches!(
            client.submit(&msg).await,
            Err(PortfolioError::InvalidContact(_))
        ));
    }
}
