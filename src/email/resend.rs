use async_trait::async_trait;

use crate::config::ResendConfig;

use super::{EmailError, EmailSender, OutgoingEmail};

/// Client for the Resend HTTP API (`POST /emails`).
pub struct ResendClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ResendClient {
    pub fn new(config: &ResendConfig) -> Result<Self, EmailError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EmailError::from(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/emails", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| EmailError::from(format!("Resend request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(512)
                .collect::<String>();
            return Err(EmailError::from(format!(
                "Resend rejected email with {status}: {body}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{any, body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(base_url: String, timeout: Duration) -> ResendClient {
        ResendClient::new(&ResendConfig {
            api_key: "re_test_key".to_string(),
            base_url,
            timeout,
        })
        .unwrap()
    }

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            from: "onboarding@resend.dev".to_string(),
            to: vec!["owner@makemydukaan.com".to_string()],
            subject: "New Quote Request from Test User".to_string(),
            html: "<p>hello</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn posts_email_with_bearer_key() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("authorization", "Bearer re_test_key"))
            .and(body_json(json!({
                "from": "onboarding@resend.dev",
                "to": ["owner@makemydukaan.com"],
                "subject": "New Quote Request from Test User",
                "html": "<p>hello</p>",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "abc" })))
            .expect(1)
            .mount(&server)
            .await;

        client(server.uri(), Duration::from_secs(5))
            .send(&email())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn provider_error_status_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(422).set_body_string("invalid from"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client(server.uri(), Duration::from_secs(5))
            .send(&email())
            .await
            .unwrap_err();
        assert!(err.message.contains("422"));
        assert!(err.message.contains("invalid from"));
    }

    #[tokio::test]
    async fn slow_provider_times_out() {
        let server = MockServer::start().await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
            .mount(&server)
            .await;

        let result = client(server.uri(), Duration::from_millis(200))
            .send(&email())
            .await;
        assert!(result.is_err());
    }
}
