use rand::{Rng, rng};
use uuid::Uuid;

/// Builds a 22-character Kenyan-format IBAN: country code, two check
/// digits, then an 18-character BBAN drawn from a fresh UUID.
pub fn random_iban() -> String {
    let mut rng = rng();

    let check_digits = rng.random_range(10..100);
    let hex = Uuid::new_v4().simple().to_string();
    let bban = hex[..18].to_uppercase();

    format!("KE{check_digits}{bban}")
}
