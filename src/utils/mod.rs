pub mod error;
pub mod logger;
pub mod phone;
pub mod validation;
