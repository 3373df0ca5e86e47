use crate::utils::error::{NotairesError, Result};
use regex::Regex;
use std::sync::OnceLock;

const COUNTRY_CODE: &str = "226";

fn separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s\-()+.]").expect("valid separator pattern"))
}

fn invalid(raw: &str, reason: &str) -> NotairesError {
    NotairesError::InvalidPhoneError {
        value: raw.to_string(),
        reason: reason.to_string(),
    }
}

/// Canonicalizes a Burkinabè phone number into international `+226XXXXXXXX` form.
///
/// Accepted inputs, after stripping spaces, dots, dashes, parentheses and `+`:
/// - 8 digits (local short form): `66342505` → `+22666342505`
/// - 11 digits starting with the country code: `22666342505` → `+22666342505`
pub fn normalize_phone(raw: &str) -> Result<String> {
    let cleaned = separators().replace_all(raw, "");

    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(raw, "le numéro doit contenir uniquement des chiffres"));
    }

    match cleaned.len() {
        8 => Ok(format!("+{}{}", COUNTRY_CODE, cleaned)),
        11 => {
            if cleaned.starts_with(COUNTRY_CODE) {
                Ok(format!("+{}", cleaned))
            } else {
                Err(invalid(raw, "indicatif pays invalide (226 attendu)"))
            }
        }
        _ => Err(invalid(raw, "longueur invalide (8 chiffres locaux ou 11 avec indicatif)")),
    }
}
