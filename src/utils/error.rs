use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotairesError {
    #[error("SMS gateway request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid amount: {value} (expected 0..=999999999)")]
    InvalidAmountError { value: i64 },

    #[error("Invalid phone number '{value}': {reason}")]
    InvalidPhoneError { value: String, reason: String },

    #[error("SMS gateway rejected the message (status {status}): {message}")]
    SmsError { status: u16, message: String },
}

impl NotairesError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            NotairesError::ApiError(_) => "La passerelle SMS Aqilas est injoignable.".to_string(),
            NotairesError::ConfigError { message } => {
                format!("Configuration invalide: {}", message)
            }
            NotairesError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration invalide ({}): {}", field, reason)
            }
            NotairesError::InvalidAmountError { value } => {
                format!("Montant invalide: {}", value)
            }
            NotairesError::InvalidPhoneError { value, reason } => {
                format!("Numéro de téléphone invalide '{}': {}", value, reason)
            }
            NotairesError::SmsError { message, .. } => {
                format!("Envoi SMS refusé par la passerelle: {}", message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            NotairesError::ApiError(_) => "Vérifiez la connexion réseau et l'URL de la passerelle.",
            NotairesError::ConfigError { .. } | NotairesError::InvalidConfigValueError { .. } => {
                "Renseignez AQILAS_API_KEY ou AQILAS_TOKEN, ou corrigez le fichier TOML."
            }
            NotairesError::InvalidAmountError { .. } => {
                "Le montant doit être un entier entre 0 et 999 999 999 FCFA."
            }
            NotairesError::InvalidPhoneError { .. } => {
                "Format attendu: 8 chiffres locaux ou numéro international +226."
            }
            NotairesError::SmsError { .. } => {
                "Consultez le message de la passerelle; le crédit SMS est peut-être épuisé."
            }
            _ => "Relancez la commande avec --verbose pour plus de détails.",
        }
    }
}

pub type Result<T> = std::result::Result<T, NotairesError>;
