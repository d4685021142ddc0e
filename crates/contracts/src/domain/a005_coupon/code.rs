//! Coupon code generation

pub const COUPON_CODE_LEN: usize = 8;
const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Map random bytes onto the code alphabet (one byte per character)
pub fn coupon_code_from_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take(COUPON_CODE_LEN)
        .map(|b| ALPHABET[(*b as usize) % ALPHABET.len()] as char)
        .collect()
}

/// UUID v4 bytes that carry no version or variant bits
const RANDOM_UUID_BYTES: [usize; COUPON_CODE_LEN] = [0, 1, 2, 3, 4, 5, 9, 10];

/// Random 8-character code from `A-Z0-9`
pub fn generate_coupon_code() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    let random: Vec<u8> = RANDOM_UUID_BYTES.iter().map(|i| bytes[*i]).collect();
    coupon_code_from_bytes(&random)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_code_from_bytes() {
        assert_eq!(coupon_code_from_bytes(&[0, 1, 25, 26, 35, 36, 45, 255]), "ABZ09AJD");
    }

    #[test]
    fn test_every_position_uses_whole_alphabet() {
        let mut seen = vec![HashSet::new(); COUPON_CODE_LEN];
        for _ in 0..5000 {
            let code = generate_coupon_code();
            assert_eq!(code.len(), COUPON_CODE_LEN);
            for (pos, c) in code.chars().enumerate() {
                assert!(c.is_ascii_uppercase() || c.is_ascii_digit());
                seen[pos].insert(c);
            }
        }
        for (pos, chars) in seen.iter().enumerate() {
            assert_eq!(chars.len(), ALPHABET.len(), "position {}", pos);
        }
    }
}
