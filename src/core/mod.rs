pub mod lettres;
pub mod otp;
pub mod reference;

pub use crate::domain::model::SmsReport;
pub use crate::domain::ports::{SmsConfigProvider, SmsGateway};
pub use crate::utils::error::Result;
pub use lettres::montant_en_lettres;
