use chrono::Utc;
use futures::future::join_all;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use rand::{distributions::Alphanumeric, Rng};

use super::{ChannelError, ChannelKind, ChannelOutcome};
use crate::notify::template::{self, TemplateData};

/// Payload for an outgoing email.
#[derive(Debug, Clone)]
pub enum EmailBody {
    Text(String),
    Html(String),
    /// Rendered through the fixed site template (header, greeting, content
    /// block, optional call-to-action button, footer).
    Template(TemplateData),
}

impl EmailBody {
    fn render(&self) -> (ContentType, String) {
        match self {
            EmailBody::Text(text) => (ContentType::TEXT_PLAIN, text.clone()),
            EmailBody::Html(html) => (ContentType::TEXT_HTML, html.clone()),
            EmailBody::Template(data) => (ContentType::TEXT_HTML, template::render(data)),
        }
    }
}

/// SMTP email channel. Sends one message per recipient so a bad address
/// never blocks delivery to the rest of the list.
#[derive(Clone)]
pub struct EmailChannel {
    host: String,
    port: u16,
    credentials: Credentials,
    from_name: String,
    from_address: String,
}

impl EmailChannel {
    pub fn new(
        host: String,
        port: u16,
        username: String,
        password: String,
        from_name: String,
        from_address: String,
    ) -> Self {
        Self {
            host,
            port,
            credentials: Credentials::new(username, password),
            from_name,
            from_address,
        }
    }

    /// Delivers `body` to every recipient, returning one outcome per
    /// attempt. Recipient sends run together, so one slow or dead address
    /// never delays the rest of the list. The subject gets a unique token
    /// prefix so mail clients do not collapse separate submissions into one
    /// thread.
    pub async fn send(
        &self,
        recipients: &[String],
        subject: &str,
        body: &EmailBody,
    ) -> Vec<ChannelOutcome> {
        let unique_subject = format!("[{}] {}", subject_token(), subject);
        let (content_type, rendered) = body.render();

        let sends = recipients.iter().map(|recipient| {
            let subject = unique_subject.clone();
            let content_type = content_type.clone();
            let body = rendered.clone();
            async move {
                let result = self.send_one(recipient, &subject, content_type, body).await;
                ChannelOutcome {
                    channel: ChannelKind::Email,
                    recipient: recipient.clone(),
                    result,
                }
            }
        });
        join_all(sends).await
    }

    async fn send_one(
        &self,
        to: &str,
        subject: &str,
        content_type: ContentType,
        body: String,
    ) -> Result<(), ChannelError> {
        let message = Message::builder()
            .from(
                format!("{} <{}>", self.from_name, self.from_address)
                    .parse()
                    .map_err(|e| ChannelError::Message(format!("invalid from address: {e}")))?,
            )
            .to(to
                .parse()
                .map_err(|e| ChannelError::InvalidRecipient(format!("{to}: {e}")))?)
            .subject(subject)
            .header(content_type)
            .body(body)
            .map_err(|e| ChannelError::Message(e.to_string()))?;

        let mailer = SmtpTransport::relay(&self.host)
            .map_err(|e| ChannelError::Smtp(format!("relay setup failed: {e}")))?
            .port(self.port)
            .credentials(self.credentials.clone())
            .build();

        // lettre's sync transport blocks on the wire, so hand it to the
        // blocking pool.
        tokio::task::spawn_blocking(move || {
            mailer
                .send(&message)
                .map(|_| ())
                .map_err(|e| ChannelError::Smtp(e.to_string()))
        })
        .await
        .map_err(|e| ChannelError::Smtp(format!("send task failed: {e}")))?
    }
}

/// Base36 timestamp plus a short random suffix, matching the token format
/// the frontend already tolerates in subjects.
fn subject_token() -> String {
    let mut millis = Utc::now().timestamp_millis().max(0) as u64;
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut encoded = Vec::new();
    while millis > 0 {
        encoded.push(DIGITS[(millis % 36) as usize]);
        millis /= 36;
    }
    encoded.reverse();

    let mut token = String::from_utf8(encoded).unwrap_or_default();
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(5)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();
    token.push_str(&suffix);
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_tokens_are_lowercase_alphanumeric() {
        let token = subject_token();
        assert!(token.len() > 5);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn subject_tokens_differ_between_sends() {
        assert_ne!(subject_token(), subject_token());
    }

    #[tokio::test]
    async fn sending_to_no_recipients_yields_no_outcomes() {
        let channel = EmailChannel::new(
            "smtp.example.com".to_string(),
            587,
            "user".to_string(),
            "pass".to_string(),
            "Test".to_string(),
            "test@example.com".to_string(),
        );
        let outcomes = channel
            .send(&[], "Subject", &EmailBody::Text("body".to_string()))
            .await;
        assert!(outcomes.is_empty());
    }

    #[test]
    fn text_body_renders_as_plain_text() {
        let (content_type, rendered) = EmailBody::Text("hello".to_string()).render();
        assert_eq!(content_type, ContentType::TEXT_PLAIN);
        assert_eq!(rendered, "hello");
    }

    #[test]
    fn template_body_renders_as_html() {
        let body = EmailBody::Template(TemplateData {
            title: "Welcome".to_string(),
            greeting: "Hi!".to_string(),
            content: "<p>content</p>".to_string(),
            button: None,
        });
        let (content_type, rendered) = body.render();
        assert_eq!(content_type, ContentType::TEXT_HTML);
        assert!(rendered.contains("Welcome"));
    }
}
