use crate::domain::model::SmsReport;
use crate::domain::ports::{SmsConfigProvider, SmsGateway};
use crate::utils::error::{NotairesError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// OTP message body, identical under both auth schemes.
pub fn otp_message(code: &str) -> String {
    format!("Votre code OTP est : {}", code)
}

/// Response body of the `X-AUTH-TOKEN` endpoint.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct AqilasResponse {
    success: bool,
    cost: Option<f64>,
    currency: Option<String>,
    message: Option<String>,
}

/// Client for the Aqilas SMS gateway.
///
/// Aqilas exposes two auth schemes. The Bearer API-key scheme
/// (`POST /api/v1/sms/send`) is preferred; the direct-token scheme
/// (`POST /api/v1/sms`) is the documented fallback. Which one is used
/// depends on which credentials the config carries.
pub struct AqilasClient<C: SmsConfigProvider> {
    config: C,
    client: Client,
}

impl<C: SmsConfigProvider> AqilasClient<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        Ok(Self { config, client })
    }

    async fn send_via_api_key(&self, api_key: &str, phone: &str, code: &str) -> Result<SmsReport> {
        let url = format!("{}/api/v1/sms/send", self.config.base_url());

        let phone_number = if phone.starts_with('+') {
            phone.to_string()
        } else {
            format!("+{}", phone)
        };

        let payload = serde_json::json!({
            "contacts": phone_number,
            "senderid": self.config.sender(),
            "message": otp_message(code),
        });

        tracing::debug!("POST {} (schéma API key)", url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Aqilas API key status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotairesError::SmsError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(SmsReport {
            status: status.as_u16(),
            cost: None,
            currency: None,
        })
    }

    async fn send_via_token(&self, token: &str, phone: &str, code: &str) -> Result<SmsReport> {
        let url = format!("{}/api/v1/sms", self.config.base_url());

        // "to" must be an array per the Aqilas documentation
        let payload = serde_json::json!({
            "from": self.config.sender(),
            "text": otp_message(code),
            "to": [phone],
        });

        tracing::debug!("POST {} (schéma token)", url);
        let response = self
            .client
            .post(&url)
            .header("X-AUTH-TOKEN", token)
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::debug!("Aqilas token status: {}", status);

        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(NotairesError::SmsError {
                status,
                message: body,
            });
        }

        let body: AqilasResponse = response.json().await?;
        if !body.success {
            return Err(NotairesError::SmsError {
                status: 400,
                message: body
                    .message
                    .unwrap_or_else(|| "erreur Aqilas inconnue".to_string()),
            });
        }

        tracing::info!(
            "SMS envoyé - coût: {} {}",
            body.cost.map_or("N/A".to_string(), |c| c.to_string()),
            body.currency.as_deref().unwrap_or("XOF")
        );

        Ok(SmsReport {
            status,
            cost: body.cost,
            currency: body.currency,
        })
    }
}

#[async_trait::async_trait]
impl<C: SmsConfigProvider> SmsGateway for AqilasClient<C> {
    async fn send_otp(&self, phone: &str, code: &str) -> Result<SmsReport> {
        if let Some(api_key) = self.config.api_key() {
            self.send_via_api_key(api_key, phone, code).await
        } else if let Some(token) = self.config.token() {
            self.send_via_token(token, phone, code).await
        } else {
            Err(NotairesError::ConfigError {
                message: "aucune configuration SMS trouvée (ni API_KEY ni TOKEN)".to_string(),
            })
        }
    }
}
