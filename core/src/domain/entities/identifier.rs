//! Human-readable identifiers handed out to clients.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Prefix of account identifiers
pub const USER_PREFIX: &str = "USR";

/// Prefix of address identifiers
pub const USER_ADDRESS_PREFIX: &str = "USRADR";

/// Prefix of setting codes
pub const SETTING_PREFIX: &str = "SET-";

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER_ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// `prefix` + `YYYYMMDD` + five random uppercase letters
pub fn generate_prefix_code(prefix: &str) -> String {
    generate_prefix_code_at(prefix, Utc::now())
}

pub fn generate_prefix_code_at(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{}{}{}", prefix, now.format("%Y%m%d"), random_from(UPPERCASE, 5))
}

/// `SET-` followed by 20 random `[a-z0-9]` characters
pub fn generate_setting_code() -> String {
    format!("{}{}", SETTING_PREFIX, random_from(LOWER_ALPHANUMERIC, 20))
}

fn random_from(alphabet: &[u8], length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_prefix_code_format() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        let code = generate_prefix_code_at(USER_PREFIX, now);

        assert!(code.starts_with("USR20240309"));
        assert_eq!(code.len(), 3 + 8 + 5);
        assert!(code[11..].chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_address_prefix() {
        let code = generate_prefix_code(USER_ADDRESS_PREFIX);
        assert!(code.starts_with(USER_ADDRESS_PREFIX));
        assert_eq!(code.len(), 6 + 8 + 5);
    }

    #[test]
    fn test_setting_code_format() {
        let code = generate_setting_code();
        assert!(code.starts_with("SET-"));
        assert_eq!(code.len(), 24);
        assert!(code[4..]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
