//! Outbound email delivery
//!
//! Sends plain-text mail over SMTP. When no relay is configured the mailer
//! logs the message instead, so local development never needs real
//! credentials to exercise the password-reset and notification flows.

use std::sync::Arc;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::SmtpConfig;
use crate::error::AppError;

/// An email ready to deliver
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingEmail {
    #[must_use]
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

enum Backend {
    Smtp(Box<SmtpTransport>),
    Console,
}

/// Email sender backed by SMTP or, absent configuration, the log
#[derive(Clone)]
pub struct Mailer {
    backend: Arc<Backend>,
    from: String,
}

impl Mailer {
    /// Build a mailer from SMTP configuration
    ///
    /// # Errors
    /// Returns an error if the configured relay host cannot be resolved
    pub fn from_config(config: &SmtpConfig) -> Result<Self, AppError> {
        let from = format!("{} <{}>", config.from_name, config.from_email);

        let backend = match &config.host {
            Some(host) => {
                let mut builder = SmtpTransport::relay(host)
                    .map_err(|e| {
                        AppError::Internal(anyhow::anyhow!("Invalid SMTP relay {host}: {e}"))
                    })?
                    .port(config.port);

                if let (Some(user), Some(pass)) = (&config.username, &config.password) {
                    builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
                }

                Backend::Smtp(Box::new(builder.build()))
            }
            None => {
                tracing::warn!("SMTP not configured; emails will be logged instead of sent");
                Backend::Console
            }
        };

        Ok(Self {
            backend: Arc::new(backend),
            from,
        })
    }

    /// Mailer that only logs, for tests
    #[must_use]
    pub fn console() -> Self {
        Self {
            backend: Arc::new(Backend::Console),
            from: "CareerNest <no-reply@careernest.com>".to_string(),
        }
    }

    /// Deliver an email and wait for the result
    ///
    /// The SMTP transport is blocking, so delivery runs on the blocking pool.
    ///
    /// # Errors
    /// Returns [`AppError::EmailDelivery`] if the relay rejects the message
    pub async fn send(&self, email: OutgoingEmail) -> Result<(), AppError> {
        let backend = Arc::clone(&self.backend);
        let from = self.from.clone();
        let to = email.to.clone();

        tokio::task::spawn_blocking(move || deliver(&backend, &from, &email))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Email task panicked: {e}")))??;

        tracing::debug!(recipient = %to, "email delivered");
        Ok(())
    }

    /// Deliver an email in the background without awaiting the outcome
    ///
    /// Failures are logged and otherwise swallowed. Used for notifications
    /// that must never block or fail the request that triggered them.
    pub fn send_detached(&self, email: OutgoingEmail) {
        let backend = Arc::clone(&self.backend);
        let from = self.from.clone();

        tokio::spawn(async move {
            let recipient = email.to.clone();
            let result =
                tokio::task::spawn_blocking(move || deliver(&backend, &from, &email)).await;

            match result {
                Ok(Ok(())) => tracing::debug!(recipient = %recipient, "email delivered"),
                Ok(Err(e)) => tracing::error!(recipient = %recipient, error = %e, "email delivery failed"),
                Err(e) => tracing::error!(recipient = %recipient, error = %e, "email task panicked"),
            }
        });
    }
}

fn deliver(backend: &Backend, from: &str, email: &OutgoingEmail) -> Result<(), AppError> {
    match backend {
        Backend::Console => {
            tracing::info!(
                recipient = %email.to,
                subject = %email.subject,
                body = %email.body,
                "email (console backend)"
            );
            Ok(())
        }
        Backend::Smtp(transport) => {
            let message = Message::builder()
                .from(from.parse().map_err(|e| {
                    AppError::EmailDelivery(format!("Invalid sender address: {e}"))
                })?)
                .to(email.to.parse().map_err(|e| {
                    AppError::EmailDelivery(format!("Invalid recipient address: {e}"))
                })?)
                .subject(&email.subject)
                .header(ContentType::TEXT_PLAIN)
                .body(email.body.clone())
                .map_err(|e| AppError::EmailDelivery(format!("Failed to build message: {e}")))?;

            transport
                .send(&message)
                .map(|_| ())
                .map_err(|e| AppError::EmailDelivery(e.to_string()))
        }
    }
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let backend = match *self.backend {
            Backend::Smtp(_) => "smtp",
            Backend::Console => "console",
        };
        f.debug_struct("Mailer")
            .field("backend", &backend)
            .field("from", &self.from)
            .finish()
    }
}
