use serde::Serialize;

/// Outcome of one SMS delivery attempt, as reported by the gateway.
#[derive(Debug, Clone, Serialize)]
pub struct SmsReport {
    pub status: u16,
    pub cost: Option<f64>,
    pub currency: Option<String>,
}
