use chrono::Local;
use rand::Rng;

/// Build a document-request reference like `DEM-20260829-4821`.
///
/// The serial is random, not sequential; collisions within one day are
/// possible and deduplicated by the caller's unique constraint.
pub fn generate_reference(prefix: &str) -> String {
    let date = Local::now().format("%Y%m%d");
    let serial: u32 = rand::thread_rng().gen_range(1000..=9999);
    format!("{}-{}-{}", prefix, date, serial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_shape() {
        let reference = generate_reference("DEM");
        let parts: Vec<&str> = reference.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "DEM");
        assert_eq!(parts[1].len(), 8);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        let serial: u32 = parts[2].parse().unwrap();
        assert!((1000..=9999).contains(&serial));
    }

    #[test]
    fn test_reference_embeds_today() {
        let today = Local::now().format("%Y%m%d").to_string();
        let reference = generate_reference("PAY");
        assert!(reference.starts_with(&format!("PAY-{}", today)));
    }
}
