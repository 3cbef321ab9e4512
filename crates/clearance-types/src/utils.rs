//! Utility functions

use rand::RngExt;
use regex::Regex;
use std::sync::LazyLock;

pub const ID_SUFFIX_LENGTH: usize = 8;
const HEX: [char; 16] =
	['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f'];

static EMAIL_RE: LazyLock<Option<Regex>> =
	LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());
static PHONE_RE: LazyLock<Option<Regex>> =
	LazyLock::new(|| Regex::new(r"^\+?[0-9 ().\-]{7,20}$").ok());
static IPV4_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
	Regex::new(
		r"^(25[0-5]|2[0-4]\d|[01]?\d\d?)\.(25[0-5]|2[0-4]\d|[01]?\d\d?)\.(25[0-5]|2[0-4]\d|[01]?\d\d?)\.(25[0-5]|2[0-4]\d|[01]?\d\d?)$",
	)
	.ok()
});

/// Generate a record id: the kind prefix followed by 8 random hex digits
///
/// # Examples
/// - `"UD"` → `"UD3fa85f64"`
/// - `"SD"` → `"SD0b1c9e2d"`
pub fn random_record_id(prefix: &str) -> String {
	let mut rng = rand::rng();
	let mut result = String::with_capacity(prefix.len() + ID_SUFFIX_LENGTH);
	result.push_str(prefix);

	for _ in 0..ID_SUFFIX_LENGTH {
		result.push(HEX[rng.random_range(0..HEX.len())]);
	}
	result
}

fn matches(re: &LazyLock<Option<Regex>>, value: &str) -> bool {
	re.as_ref().is_some_and(|re| re.is_match(value))
}

pub fn is_valid_email(value: &str) -> bool {
	matches(&EMAIL_RE, value)
}

/// Digits, spaces and `+ - ( ) .`, with at least 7 digits
pub fn is_valid_phone(value: &str) -> bool {
	matches(&PHONE_RE, value) && value.chars().filter(char::is_ascii_digit).count() >= 7
}

/// Dotted-quad IPv4, leading zeros tolerated
pub fn is_valid_ipv4(value: &str) -> bool {
	matches(&IPV4_RE, value)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_random_record_id() {
		let id = random_record_id("UD");
		assert_eq!(id.len(), 10);
		assert!(id.starts_with("UD"));
		assert!(id[2..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
		assert_ne!(random_record_id("SD"), random_record_id("SD"));
	}

	#[test]
	fn test_email() {
		assert!(is_valid_email("alice@example.com"));
		assert!(is_valid_email("1234@demo.com"));
		assert!(!is_valid_email("alice.example.com"));
		assert!(!is_valid_email("alice@"));
		assert!(!is_valid_email("a b@example.com"));
	}

	#[test]
	fn test_phone() {
		assert!(is_valid_phone("(555) 123-4567"));
		assert!(is_valid_phone("+36 30 123 4567"));
		assert!(!is_valid_phone("12-34"));
		assert!(!is_valid_phone("call me"));
	}

	#[test]
	fn test_ipv4() {
		assert!(is_valid_ipv4("192.168.0.1"));
		assert!(is_valid_ipv4("10.0.0.254"));
		assert!(!is_valid_ipv4("256.1.1.1"));
		assert!(!is_valid_ipv4("10.0.0"));
		assert!(!is_valid_ipv4("example.com"));
	}
}

// vim: ts=4
