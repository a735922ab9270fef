//! Verification code generation.

use rand::Rng;

/// Generates a random numeric verification code of the given length.
///
/// Each digit is drawn independently, so leading zeros are possible and
/// the code is always exactly `length` characters.
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length).map(|_| rng.gen_range(0..=9).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length() {
        assert_eq!(generate_code(6).len(), 6);
        assert_eq!(generate_code(4).len(), 4);
    }

    #[test]
    fn generates_only_digits() {
        let code = generate_code(6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn codes_vary() {
        // 10^6 possibilities; 20 draws colliding entirely is practically
        // impossible and would indicate a broken generator.
        let codes: std::collections::HashSet<String> =
            (0..20).map(|_| generate_code(6)).collect();
        assert!(codes.len() > 1);
    }
}
