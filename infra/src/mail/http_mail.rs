//! HTTP mail provider
//!
//! Posts a JSON document naming the provider-side template and its variables.
//! Server errors and throttling are retried with exponential backoff; any
//! other non-2xx answer fails immediately.

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use ve_core::services::verification::{MailDeliveryTrait, MailMessage};

use super::mask_email;
use crate::config::MailConfig;
use crate::InfrastructureError;

/// HTTP mail provider configuration
#[derive(Debug, Clone)]
pub struct HttpMailConfig {
    /// Endpoint receiving the send request
    pub api_url: String,
    /// Bearer token for the provider
    pub api_key: String,
    /// `Name <address>` sender line
    pub from: String,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
    pub request_timeout_secs: u64,
}

impl From<&MailConfig> for HttpMailConfig {
    fn from(config: &MailConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            from: config.sender(),
            max_retries: 3,
            retry_delay_ms: 500,
            request_timeout_secs: config.timeout_seconds,
        }
    }
}

/// Request body understood by the provider
#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct SendMailRequest<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub subject: &'a str,
    pub template: &'static str,
    pub data: TemplateData<'a>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct TemplateData<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub link: &'a str,
}

impl<'a> SendMailRequest<'a> {
    pub(crate) fn new(from: &'a str, message: &'a MailMessage) -> Self {
        Self {
            from,
            to: &message.to,
            subject: &message.subject,
            template: message.template.name(),
            data: TemplateData {
                name: &message.name,
                email: &message.to,
                link: &message.link,
            },
        }
    }
}

/// Mail delivery over a JSON HTTP API
pub struct HttpMailService {
    client: Client,
    config: HttpMailConfig,
}

impl HttpMailService {
    pub fn new(config: HttpMailConfig) -> Result<Self, InfrastructureError> {
        if config.api_url.trim().is_empty() {
            return Err(InfrastructureError::Config("Mail API URL is not set".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(api_url = %config.api_url, "HTTP mail service initialized");
        Ok(Self { client, config })
    }

    async fn send_with_retry(&self, message: &MailMessage) -> anyhow::Result<()> {
        let body = SendMailRequest::new(&self.config.from, message);
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;
            debug!(
                attempt = attempts,
                to = %mask_email(&message.to),
                template = message.template.name(),
                "Sending mail"
            );

            let mut request = self.client.post(&self.config.api_url).json(&body);
            if !self.config.api_key.is_empty() {
                request = request.bearer_auth(&self.config.api_key);
            }

            let retryable = match request.send().await {
                Ok(response) if response.status().is_success() => return Ok(()),
                Ok(response) => {
                    let status = response.status();
                    let detail = response.text().await.unwrap_or_default();
                    if !is_retryable_status(status) {
                        return Err(anyhow!("Mail provider rejected message ({}): {}", status, detail));
                    }
                    anyhow!("Mail provider unavailable ({}): {}", status, detail)
                }
                Err(e) if e.is_builder() => {
                    return Err(e).context("Failed to build mail request");
                }
                Err(e) => anyhow::Error::new(e).context("Mail request failed"),
            };

            if attempts >= self.config.max_retries {
                return Err(retryable.context(format!("Giving up after {} attempts", attempts)));
            }

            warn!(
                attempt = attempts,
                max_retries = self.config.max_retries,
                error = %retryable,
                "Mail delivery failed, retrying in {:?}",
                delay
            );
            tokio::time::sleep(delay).await;
            delay *= 2;
        }
    }
}

#[async_trait]
impl MailDeliveryTrait for HttpMailService {
    async fn send(&self, message: &MailMessage) -> Result<(), String> {
        self.send_with_retry(message).await.map_err(|e| format!("{:#}", e))?;
        info!(
            to = %mask_email(&message.to),
            template = message.template.name(),
            "Mail sent"
        );
        Ok(())
    }
}

/// Throttling and server errors are worth another attempt
pub(crate) fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}
