use anyhow::Context as _;
use reqwest::Client;
use serde::Serialize;

use crate::domain::repository::Mailer;
use crate::domain::types::OtpEmail;
use crate::error::OtpServiceError;

/// Mailer backed by a Resend-compatible HTTP API (`POST {base}/emails`).
#[derive(Clone)]
pub struct HttpMailer {
    client: Client,
    base_url: String,
    api_key: String,
    from: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

impl HttpMailer {
    pub fn new(base_url: &str, api_key: String, from: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key,
            from,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

impl Mailer for HttpMailer {
    async fn send(&self, message: &OtpEmail) -> Result<(), OtpServiceError> {
        let body = SendEmailRequest {
            from: &self.from,
            to: [&message.to],
            subject: &message.subject,
            html: &message.html,
            text: &message.text,
        };
        self.client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .context("send otp email")
            .map_err(OtpServiceError::MailDelivery)?;
        Ok(())
    }
}
