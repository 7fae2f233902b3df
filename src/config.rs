use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub allowed_origins: Vec<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub email_from_name: String,
    pub email_from_address: String,
    /// Recipients of the booking alert email.
    pub admin_emails: Vec<String>,
    /// Inbox for contact/feedback notification emails.
    pub notification_inbox: String,
    /// Customer address used when a booking arrives without an email.
    pub booking_fallback_email: String,
    pub sms_api_url: String,
    pub sms_username: String,
    pub sms_password: String,
    pub sms_destination: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let smtp_username = env::var("SMTP_USERNAME").expect("SMTP_USERNAME must be set");
        let admin_emails = split_csv(
            &env::var("ADMIN_EMAILS").expect("ADMIN_EMAILS must be set"),
        );
        assert!(!admin_emails.is_empty(), "ADMIN_EMAILS must list at least one address");

        let notification_inbox =
            env::var("NOTIFICATION_INBOX").unwrap_or_else(|_| admin_emails[0].clone());

        Self {
            database_url: env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set"),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            allowed_origins: split_csv(&env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| {
                "https://www.uttarakhandroadtrips.com,http://localhost:3000".to_string()
            })),
            smtp_host: env::var("SMTP_HOST")
                .unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse()
                .expect("SMTP_PORT must be a number"),
            email_from_name: env::var("EMAIL_FROM_NAME")
                .unwrap_or_else(|_| "Uttarakhand Road Trips".to_string()),
            email_from_address: env::var("EMAIL_FROM_ADDRESS")
                .unwrap_or_else(|_| smtp_username.clone()),
            smtp_password: env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD must be set"),
            smtp_username,
            booking_fallback_email: env::var("BOOKING_FALLBACK_EMAIL")
                .unwrap_or_else(|_| notification_inbox.clone()),
            notification_inbox,
            admin_emails,
            sms_api_url: env::var("SMS_API_URL")
                .unwrap_or_else(|_| "https://api.sms-gate.app/3rdparty/v1/message".to_string()),
            sms_username: env::var("SMS_USERNAME").expect("SMS_USERNAME must be set"),
            sms_password: env::var("SMS_PASSWORD").expect("SMS_PASSWORD must be set"),
            sms_destination: env::var("SMS_DESTINATION").expect("SMS_DESTINATION must be set"),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_drops_empty_entries() {
        let parsed = split_csv("a@example.com, b@example.com ,,");
        assert_eq!(parsed, vec!["a@example.com", "b@example.com"]);
    }
}
