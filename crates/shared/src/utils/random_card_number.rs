use rand::{Rng, rng};

/// Issues a 16-digit PAN in the vault's own 400000 BIN range.
pub fn random_pan() -> String {
    let mut rng = rng();

    let random_digits: String = (0..10)
        .map(|_| rng.random_range(0..10).to_string())
        .collect();

    format!("400000{random_digits}")
}

pub fn random_cvv() -> String {
    let mut rng = rng();

    rng.random_range(100..1000).to_string()
}
