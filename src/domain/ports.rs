use crate::domain::model::SmsReport;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SmsGateway: Send + Sync {
    async fn send_otp(&self, phone: &str, code: &str) -> Result<SmsReport>;
}

pub trait SmsConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    /// Bearer credentials; preferred over the direct token when both are set.
    fn api_key(&self) -> Option<&str>;
    fn token(&self) -> Option<&str>;
    fn sender(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
