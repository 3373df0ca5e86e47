pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::aqilas::AqilasClient;
pub use config::{sms::SmsConfig, CliConfig};
pub use core::lettres::montant_en_lettres;
pub use domain::model::SmsReport;
pub use domain::ports::{SmsConfigProvider, SmsGateway};
pub use utils::error::{NotairesError, Result};
