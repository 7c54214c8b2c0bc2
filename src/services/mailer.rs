use async_trait::async_trait;

use crate::config::environment::MailConfig;

#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("mail API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("mail API returned status {0}")]
    Status(u16),
}

/// Outbound mail seam. The production implementation talks to a transactional
/// mail relay over HTTP; tests and local development substitute their own.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_login_code(
        &self,
        to: &str,
        first_name: &str,
        code: &str,
    ) -> Result<(), MailerError>;
}

pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from_address: String,
}

impl HttpMailer {
    pub fn new(config: MailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url,
            api_key: config.api_key,
            from_address: config.from_address,
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send_login_code(
        &self,
        to: &str,
        first_name: &str,
        code: &str,
    ) -> Result<(), MailerError> {
        let body = serde_json::json!({
            "from": self.from_address,
            "to": [to],
            "subject": "Votre code de connexion GIRENAD",
            "text": format!(
                "Bonjour {first_name},\n\n\
                 Votre code de connexion est : {code}\n\
                 Il expire dans 5 minutes.\n\n\
                 Si vous n'êtes pas à l'origine de cette demande, ignorez cet e-mail."
            ),
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MailerError::Status(response.status().as_u16()));
        }

        Ok(())
    }
}

/// Logs the code instead of sending it. Used when no mail relay is configured.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_login_code(
        &self,
        to: &str,
        _first_name: &str,
        code: &str,
    ) -> Result<(), MailerError> {
        tracing::info!("mail relay not configured; login code for {}: {}", to, code);
        Ok(())
    }
}
