use crate::utils::error::{NotairesError, Result};

/// Largest amount the three-tier decomposition (millions / thousands / units)
/// can spell out. Anything above would need a billions tier.
pub const MAX_MONTANT: i64 = 999_999_999;

const UNITS: [&str; 10] = [
    "", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
];
const TEENS: [&str; 10] = [
    "dix",
    "onze",
    "douze",
    "treize",
    "quatorze",
    "quinze",
    "seize",
    "dix-sept",
    "dix-huit",
    "dix-neuf",
];
const TENS: [&str; 10] = [
    "",
    "",
    "vingt",
    "trente",
    "quarante",
    "cinquante",
    "soixante",
    "soixante-dix",
    "quatre-vingt",
    "quatre-vingt-dix",
];

/// Spells out a CFA-franc amount in French, e.g. `1234` →
/// `"Mille deux cent trente-quatre francs CFA"`.
///
/// Zero is the one singular form: `"zéro franc CFA"`. Amounts outside
/// `0..=MAX_MONTANT` are rejected with `InvalidAmountError`.
///
/// "millions" is always plural for counts above one; invoice wording has
/// used that form from the start, so it stays.
pub fn montant_en_lettres(montant: i64) -> Result<String> {
    if !(0..=MAX_MONTANT).contains(&montant) {
        return Err(NotairesError::InvalidAmountError { value: montant });
    }
    if montant == 0 {
        return Ok("zéro franc CFA".to_string());
    }

    let n = montant as u64;
    let mut parts: Vec<String> = Vec::new();

    let millions = n / 1_000_000;
    if millions > 0 {
        if millions == 1 {
            parts.push("un million".to_string());
        } else {
            parts.push(format!("{} millions", below_1000(millions as u16)));
        }
    }

    let rem = n % 1_000_000;
    let thousands = rem / 1000;
    if thousands > 0 {
        if thousands == 1 {
            // "mille", never "un mille"
            parts.push("mille".to_string());
        } else {
            parts.push(format!("{} mille", below_1000(thousands as u16)));
        }
    }

    let rem = rem % 1000;
    if rem > 0 {
        parts.push(below_1000(rem as u16));
    }

    Ok(format!(
        "{} francs CFA",
        capitalize(parts.join(" ").trim())
    ))
}

/// Word group for a 0..=999 value; empty string for 0.
fn below_1000(n: u16) -> String {
    if n == 0 {
        return String::new();
    }

    let mut res = String::new();
    let hundreds = (n / 100) as usize;
    let d = n % 100;

    if hundreds > 0 {
        if hundreds == 1 {
            res.push_str("cent ");
        } else {
            res.push_str(UNITS[hundreds]);
            res.push_str(" cent ");
        }
    }

    if d > 0 {
        if d < 10 {
            res.push_str(UNITS[d as usize]);
        } else if d < 20 {
            res.push_str(TEENS[(d - 10) as usize]);
        } else {
            let t = (d / 10) as usize;
            let u = (d % 10) as usize;
            if t == 7 || t == 9 {
                // 70-79 and 90-99 continue the previous ten with a teen:
                // 71 = soixante-onze, 95 = quatre-vingt-quinze
                res.push_str(TENS[t - 1]);
                res.push('-');
                res.push_str(TEENS[u]);
            } else if u == 1 {
                res.push_str(TENS[t]);
                res.push_str(" et un");
            } else if u > 1 {
                res.push_str(TENS[t]);
                res.push('-');
                res.push_str(UNITS[u]);
            } else {
                res.push_str(TENS[t]);
            }
        }
    }

    res.trim().to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_1000_groups() {
        assert_eq!(below_1000(0), "");
        assert_eq!(below_1000(5), "cinq");
        assert_eq!(below_1000(10), "dix");
        assert_eq!(below_1000(17), "dix-sept");
        assert_eq!(below_1000(20), "vingt");
        assert_eq!(below_1000(21), "vingt et un");
        assert_eq!(below_1000(23), "vingt-trois");
        assert_eq!(below_1000(70), "soixante-dix");
        assert_eq!(below_1000(71), "soixante-onze");
        assert_eq!(below_1000(80), "quatre-vingt");
        assert_eq!(below_1000(95), "quatre-vingt-quinze");
        assert_eq!(below_1000(99), "quatre-vingt-dix-neuf");
        assert_eq!(below_1000(100), "cent");
        assert_eq!(below_1000(101), "cent un");
        assert_eq!(below_1000(234), "deux cent trente-quatre");
        assert_eq!(below_1000(999), "neuf cent quatre-vingt-dix-neuf");
    }

    #[test]
    fn test_capitalize_first_letter_only() {
        assert_eq!(capitalize("vingt et un"), "Vingt et un");
        assert_eq!(capitalize(""), "");
    }
}
