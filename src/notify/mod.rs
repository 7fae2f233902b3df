//! Outbound notification channels (email, SMS) and the per-request delivery
//! report. Delivery is best-effort: every attempt is recorded as a value and
//! logged, and no channel failure ever reaches the HTTP response.

pub mod email;
pub mod sms;
pub mod template;

use futures::future::{join_all, BoxFuture};
use thiserror::Error;

use crate::config::Config;
use crate::entities::{booking, contact, feedback};

pub use email::{EmailBody, EmailChannel};
pub use sms::SmsChannel;
pub use template::TemplateData;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("invalid recipient address: {0}")]
    InvalidRecipient(String),
    #[error("failed to build message: {0}")]
    Message(String),
    #[error("smtp error: {0}")]
    Smtp(String),
    #[error("sms gateway request failed: {0}")]
    Gateway(String),
    #[error("sms gateway returned status {0}")]
    GatewayStatus(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Email,
    Sms,
}

/// Result of one delivery attempt on one channel to one recipient.
#[derive(Debug)]
pub struct ChannelOutcome {
    pub channel: ChannelKind,
    pub recipient: String,
    pub result: Result<(), ChannelError>,
}

/// Collected delivery attempts for a single submission.
#[derive(Debug, Default)]
pub struct DeliveryReport {
    outcomes: Vec<ChannelOutcome>,
}

impl DeliveryReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: ChannelOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn extend(&mut self, outcomes: Vec<ChannelOutcome>) {
        self.outcomes.extend(outcomes);
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    pub fn all_delivered(&self) -> bool {
        self.failed() == 0
    }

    /// Logs every attempt. Failures are warnings, never errors: the record
    /// is already persisted and the caller has been answered.
    pub fn log(&self, context: &str) {
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(()) => tracing::info!(
                    context,
                    channel = ?outcome.channel,
                    recipient = %outcome.recipient,
                    "notification delivered"
                ),
                Err(e) => tracing::warn!(
                    context,
                    channel = ?outcome.channel,
                    recipient = %outcome.recipient,
                    error = %e,
                    "notification delivery failed"
                ),
            }
        }
    }
}

/// Runs a set of independent delivery batches to completion together and
/// collects every outcome into one report. Channels have no ordering
/// relationship, so a stalled transport only costs as much as itself.
pub async fn dispatch_all(batches: Vec<BoxFuture<'_, Vec<ChannelOutcome>>>) -> DeliveryReport {
    let mut report = DeliveryReport::new();
    for outcomes in join_all(batches).await {
        report.extend(outcomes);
    }
    report
}

/// Process-wide notification dispatcher. Built once at startup from config
/// and injected through `AppState`; recipient lists and sender identity are
/// configuration, not code paths.
#[derive(Clone)]
pub struct Notifier {
    email: EmailChannel,
    sms: SmsChannel,
    admin_emails: Vec<String>,
    notification_inbox: String,
}

impl Notifier {
    pub fn from_config(config: &Config) -> Self {
        Self {
            email: EmailChannel::new(
                config.smtp_host.clone(),
                config.smtp_port,
                config.smtp_username.clone(),
                config.smtp_password.clone(),
                config.email_from_name.clone(),
                config.email_from_address.clone(),
            ),
            sms: SmsChannel::new(
                config.sms_api_url.clone(),
                config.sms_username.clone(),
                config.sms_password.clone(),
                config.sms_destination.clone(),
            ),
            admin_emails: config.admin_emails.clone(),
            notification_inbox: config.notification_inbox.clone(),
        }
    }

    /// Booking fan-out: admin alert email, customer confirmation email, and
    /// an SMS to the admin number. The three channels are dispatched
    /// together with no ordering between them, so the fan-out takes as long
    /// as its slowest channel.
    pub async fn booking_submitted(&self, booking: &booking::Model) -> DeliveryReport {
        let when = booking.travel_date.format("%d %b %Y %H:%M");

        let admin_html = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #2c3e50; border-bottom: 2px solid #3498db; padding-bottom: 10px;">New Booking Details</h2>
  <div style="background-color: #f8f9fa; padding: 20px; border-radius: 5px; margin: 20px 0;">
    <h3 style="color: #2c3e50; margin-top: 0;">Booking Information</h3>
    <p><strong>From:</strong> {from}</p>
    <p><strong>To:</strong> {to}</p>
    <p><strong>Date:</strong> {when}</p>
    <p><strong>Passengers:</strong> {passengers}</p>
    <p><strong>Car Type:</strong> {car_type}</p>
    <p><strong>Phone Number:</strong> {phone}</p>
  </div>
  <div style="background-color: #e8f4f8; padding: 15px; border-radius: 5px; margin-top: 20px;">
    <p style="margin: 0; color: #2c3e50;">This booking has been automatically saved to our database.</p>
  </div>
</div>"#,
            from = booking.from_location,
            to = booking.to_location,
            when = when,
            passengers = booking.passengers,
            car_type = booking.car_type,
            phone = booking.phone_number,
        );
        let admin_subject = format!("New Booking from {}", booking.from_location);
        let admin_body = EmailBody::Html(admin_html);

        let confirmation = TemplateData {
            title: "Booking Confirmation".to_string(),
            greeting: format!("Hello! Your trip from {} is booked.", booking.from_location),
            content: format!(
                "<p><strong>From:</strong> {}</p>\
                 <p><strong>To:</strong> {}</p>\
                 <p><strong>Date:</strong> {}</p>\
                 <p><strong>Passengers:</strong> {}</p>\
                 <p><strong>Car Type:</strong> {}</p>\
                 <p>Thank you for choosing our service. We will contact you shortly to \
                 confirm your booking.</p>",
                booking.from_location, booking.to_location, when, booking.passengers, booking.car_type,
            ),
            button: None,
        };
        let confirmation_body = EmailBody::Template(confirmation);

        let sms_text = format!(
            "New booking: {} to {} on {}. {} passengers, {}. Phone: {}",
            booking.from_location,
            booking.to_location,
            when,
            booking.passengers,
            booking.car_type,
            booking.phone_number,
        );

        let batches: Vec<BoxFuture<'_, Vec<ChannelOutcome>>> = vec![
            Box::pin(
                self.email
                    .send(&self.admin_emails, &admin_subject, &admin_body),
            ),
            Box::pin(self.email.send(
                std::slice::from_ref(&booking.email),
                "Booking Confirmation - Uttarakhand Travel Services",
                &confirmation_body,
            )),
            Box::pin(async { vec![self.sms.send(&sms_text).await] }),
        ];
        dispatch_all(batches).await
    }

    pub async fn contact_submitted(&self, contact: &contact::Model) -> DeliveryReport {
        let mut report = DeliveryReport::new();

        let text = format!(
            "New contact form submission from {}\nEmail: {}\nPhone: {}\nSubject: {}\nMessage: {}",
            contact.name, contact.email, contact.phone, contact.subject, contact.message,
        );
        report.extend(
            self.email
                .send(
                    std::slice::from_ref(&self.notification_inbox),
                    "New Contact Form Submission",
                    &EmailBody::Text(text),
                )
                .await,
        );

        report
    }

    pub async fn feedback_submitted(&self, feedback: &feedback::Model) -> DeliveryReport {
        let mut report = DeliveryReport::new();

        let text = format!(
            "New feedback received from {}\nEmail: {}\nPhone: {}\nRating: {}/5\nMessage: {}",
            feedback.name, feedback.email, feedback.phone, feedback.rating, feedback.message,
        );
        report.extend(
            self.email
                .send(
                    std::slice::from_ref(&self.notification_inbox),
                    "New Feedback Received",
                    &EmailBody::Text(text),
                )
                .await,
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_outcome() -> ChannelOutcome {
        ChannelOutcome {
            channel: ChannelKind::Email,
            recipient: "admin@example.com".to_string(),
            result: Ok(()),
        }
    }

    fn failed_outcome() -> ChannelOutcome {
        ChannelOutcome {
            channel: ChannelKind::Sms,
            recipient: "+911234567890".to_string(),
            result: Err(ChannelError::GatewayStatus(503)),
        }
    }

    #[test]
    fn report_counts_attempts_and_failures_independently() {
        let mut report = DeliveryReport::new();
        report.record(ok_outcome());
        report.record(failed_outcome());
        report.record(ok_outcome());

        assert_eq!(report.attempted(), 3);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_delivered());
    }

    #[test]
    fn empty_report_is_all_delivered() {
        assert!(DeliveryReport::new().all_delivered());
    }

    #[test]
    fn logging_does_not_consume_the_report() {
        let mut report = DeliveryReport::new();
        report.record(failed_outcome());
        report.log("test");
        assert_eq!(report.failed(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn batches_run_concurrently_not_sequentially() {
        use std::time::Duration;
        use tokio::time::{sleep, Instant};

        let start = Instant::now();
        let batches: Vec<BoxFuture<'_, Vec<ChannelOutcome>>> = vec![
            Box::pin(async {
                sleep(Duration::from_secs(30)).await;
                vec![ok_outcome(), ok_outcome()]
            }),
            Box::pin(async {
                sleep(Duration::from_secs(60)).await;
                vec![ok_outcome()]
            }),
            Box::pin(async {
                sleep(Duration::from_secs(10)).await;
                vec![failed_outcome()]
            }),
        ];
        let report = dispatch_all(batches).await;

        // Wall time is the slowest batch, not the sum of all three.
        assert_eq!(start.elapsed(), Duration::from_secs(60));
        assert_eq!(report.attempted(), 4);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_delivered());
    }
}
