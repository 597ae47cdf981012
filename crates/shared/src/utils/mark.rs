/// Masks a PAN down to its last four digits, grouped the way the number
/// would appear on a card.
pub fn mask_pan(pan: &str) -> String {
    if pan.len() < 4 {
        "****".to_string()
    } else {
        let last4 = &pan[pan.len() - 4..];
        format!("**** **** **** {last4}")
    }
}

/// The CVV never leaves the vault, masked or otherwise.
pub fn mask_cvv() -> String {
    "***".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_full_pan_to_last_four() {
        assert_eq!(mask_pan("4000001234567890"), "**** **** **** 7890");
    }

    #[test]
    fn short_pan_is_fully_masked() {
        assert_eq!(mask_pan(""), "****");
        assert_eq!(mask_pan("123"), "****");
    }

    #[test]
    fn four_digit_pan_keeps_all_four() {
        assert_eq!(mask_pan("1234"), "**** **** **** 1234");
    }

    #[test]
    fn cvv_is_always_three_stars() {
        assert_eq!(mask_cvv(), "***");
    }
}
