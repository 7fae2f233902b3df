use std::time::Duration;

use reqwest::StatusCode;

use super::{ChannelError, ChannelKind, ChannelOutcome};

const SMS_TIMEOUT: Duration = Duration::from_secs(10);

/// SMS channel over the gateway's JSON API. Single fixed administrative
/// destination, basic auth, hard 10-second timeout.
#[derive(Clone)]
pub struct SmsChannel {
    client: reqwest::Client,
    api_url: String,
    username: String,
    password: String,
    destination: String,
}

impl SmsChannel {
    pub fn new(api_url: String, username: String, password: String, destination: String) -> Self {
        // Built once at startup; a failure here means the process cannot
        // deliver SMS at all.
        let client = reqwest::Client::builder()
            .timeout(SMS_TIMEOUT)
            .build()
            .expect("failed to build SMS HTTP client");

        Self {
            client,
            api_url,
            username,
            password,
            destination,
        }
    }

    pub async fn send(&self, message: &str) -> ChannelOutcome {
        let result = self.post_message(message).await;
        ChannelOutcome {
            channel: ChannelKind::Sms,
            recipient: self.destination.clone(),
            result,
        }
    }

    async fn post_message(&self, message: &str) -> Result<(), ChannelError> {
        let response = self
            .client
            .post(&self.api_url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&serde_json::json!({
                "message": message,
                "phoneNumbers": [self.destination],
            }))
            .send()
            .await
            .map_err(|e| ChannelError::Gateway(e.to_string()))?;

        if is_gateway_success(response.status()) {
            Ok(())
        } else {
            Err(ChannelError::GatewayStatus(response.status().as_u16()))
        }
    }
}

/// The gateway acknowledges with 200 or 201; anything else counts as a
/// failed delivery.
fn is_gateway_success(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::CREATED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_200_and_201_count_as_delivered() {
        assert!(is_gateway_success(StatusCode::OK));
        assert!(is_gateway_success(StatusCode::CREATED));
        assert!(!is_gateway_success(StatusCode::ACCEPTED));
        assert!(!is_gateway_success(StatusCode::BAD_REQUEST));
        assert!(!is_gateway_success(StatusCode::SERVICE_UNAVAILABLE));
    }
}
