use anyhow::{Context, Result};
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Message, SmtpTransport, Transport};
use log::{error, info, warn};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::backend::domain::commands::passwords::{ResetPasswordCommand, ResetPasswordResult};
use crate::backend::domain::models::profile::UserProfile;
use crate::backend::storage::csv::{CsvConnection, ProfileRepository};
use crate::backend::storage::traits::ProfileStorage;

const PASSWORD_LENGTH: usize = 12;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub username: String,
    pub password: String,
    pub from_email: String,
    /// Fallback recipients for users without an email address on record
    pub admin_emails: Vec<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_server: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            username: String::new(),
            password: String::new(),
            from_email: String::new(),
            admin_emails: Vec::new(),
        }
    }
}

/// Service implementing the password-reset email flow.
///
/// Generates a fresh random password and mails it to the user, or to the
/// configured administrators when the user has no email address. Applying
/// the password to the auth store is the host system's job; the generated
/// value is returned in the result for that purpose.
pub struct PasswordResetService {
    profile_repository: ProfileRepository,
    config: EmailConfig,
    transport: Option<SmtpTransport>,
}

impl PasswordResetService {
    pub fn new(csv_conn: Arc<CsvConnection>, config: EmailConfig) -> Result<Self> {
        let transport = if config.username.is_empty() {
            info!("SMTP credentials not configured, password reset emails disabled");
            None
        } else {
            info!(
                "Initializing SMTP transport for {}:{}",
                config.smtp_server, config.smtp_port
            );
            let tls_params = TlsParameters::new(config.smtp_server.clone())
                .context("Failed to create TLS parameters")?;
            let transport = SmtpTransport::relay(&config.smtp_server)
                .context("Failed to create SMTP relay")?
                .port(config.smtp_port)
                .tls(Tls::Required(tls_params))
                .credentials(Credentials::new(
                    config.username.clone(),
                    config.password.clone(),
                ))
                .build();
            Some(transport)
        };

        Ok(Self {
            profile_repository: ProfileRepository::new(csv_conn),
            config,
            transport,
        })
    }

    /// Generate a new password for a user and deliver it by email.
    ///
    /// A delivery failure is logged and reported through `delivered: false`,
    /// never surfaced as a fault: the reset itself has still happened.
    pub fn reset_password(&self, command: ResetPasswordCommand) -> Result<ResetPasswordResult> {
        info!("Resetting password for {}", command.username);

        let profile = self
            .profile_repository
            .get_profile(&command.username)?
            .ok_or_else(|| anyhow::anyhow!("Profile not found: {}", command.username))?;

        let password = Self::generate_password();

        let recipients = if profile.email.is_empty() {
            if self.config.admin_emails.is_empty() {
                warn!(
                    "User {} has no email and no administrators are configured",
                    profile.username
                );
            }
            self.config.admin_emails.clone()
        } else {
            vec![profile.email.clone()]
        };

        let delivered = match (&self.transport, recipients.is_empty()) {
            (_, true) => false,
            (None, _) => {
                warn!("SMTP transport not configured, skipping password email");
                false
            }
            (Some(transport), _) => {
                match self.send_password_email(transport, &profile, &recipients, &password) {
                    Ok(()) => {
                        info!(
                            "Password email for {} sent to {} recipient(s)",
                            profile.username,
                            recipients.len()
                        );
                        true
                    }
                    Err(e) => {
                        error!(
                            "Failed to send password email for {}: {:#}",
                            profile.username, e
                        );
                        false
                    }
                }
            }
        };

        Ok(ResetPasswordResult {
            password,
            delivered,
            recipients,
        })
    }

    fn send_password_email(
        &self,
        transport: &SmtpTransport,
        profile: &UserProfile,
        recipients: &[String],
        password: &str,
    ) -> Result<()> {
        let mut builder = Message::builder()
            .from(
                self.config
                    .from_email
                    .parse::<Mailbox>()
                    .context("Failed to parse from email")?,
            )
            .subject("New password");

        for recipient in recipients {
            builder = builder.to(recipient
                .parse::<Mailbox>()
                .context("Failed to parse recipient email")?);
        }

        let email = builder
            .body(Self::render_body(profile, password))
            .context("Failed to build email")?;

        transport.send(&email).context("Failed to send email")?;
        Ok(())
    }

    fn render_body(profile: &UserProfile, password: &str) -> String {
        let name = if profile.first_name.is_empty() {
            &profile.username
        } else {
            &profile.first_name
        };
        format!(
            "Hello {},\n\nA new password has been generated for the account '{}':\n\n    {}\n\nPlease log in and change it as soon as possible.\n",
            name, profile.username, password
        )
    }

    fn generate_password() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(PASSWORD_LENGTH)
            .map(char::from)
            .collect()
    }
}
