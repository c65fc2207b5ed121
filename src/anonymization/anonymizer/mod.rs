//! Address anonymizer
//!
//! Masks the most specific part of a visitor address: the last IPv4 octet or
//! the last IPv6 group. Masking is a textual suffix replacement on the input
//! as written. Compressed IPv6 notation is not expanded first, so
//! `2001:db8::1` becomes `2001:db8::0` rather than a recomputed prefix.
//!
//! Anything that is not a well-formed IP literal maps to the configured
//! fallback address. The anonymizer never fails.
//!
//! # Examples
//!
//! ```
//! use veil::anonymization::anonymizer::{anonymize, IpAnonymizer};
//!
//! assert_eq!(anonymize("203.0.113.45"), "203.0.113.0");
//! assert_eq!(anonymize("2001:db8::1"), "2001:db8::0");
//! assert_eq!(anonymize("garbage"), "0.0.0.0");
//!
//! let anonymizer = IpAnonymizer::new("127.0.0.0");
//! assert_eq!(anonymizer.anonymize(""), "127.0.0.0");
//! ```

use crate::anonymization::config::{AnonymizationConfig, DEFAULT_FALLBACK_ADDRESS};
use crate::domain::AddressKind;

/// Anonymizes visitor addresses with a configurable fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpAnonymizer {
    fallback: String,
}

impl IpAnonymizer {
    /// Create an anonymizer that maps invalid input to `fallback`
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
        }
    }

    /// Create an anonymizer from the anonymization config section
    pub fn from_config(config: &AnonymizationConfig) -> Self {
        Self::new(config.fallback_address.clone())
    }

    /// The address returned for invalid input
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Anonymize a single address
    pub fn anonymize(&self, address: &str) -> String {
        match AddressKind::classify(address) {
            AddressKind::V4(_) => mask_ipv4(address),
            AddressKind::V6(_) => mask_ipv6(address),
            AddressKind::Invalid => self.fallback.clone(),
        }
    }

    /// Returns true if anonymizing `address` leaves it unchanged
    pub fn is_fixed_point(&self, address: &str) -> bool {
        self.anonymize(address) == address
    }
}

impl Default for IpAnonymizer {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_ADDRESS)
    }
}

/// Anonymize an address using the default fallback (`0.0.0.0`)
pub fn anonymize(address: &str) -> String {
    IpAnonymizer::default().anonymize(address)
}

fn mask_ipv4(address: &str) -> String {
    match address.rsplit_once('.') {
        Some((head, _)) => format!("{head}.0"),
        None => address.to_string(),
    }
}

fn mask_ipv6(address: &str) -> String {
    let Some((head, tail)) = address.rsplit_once(':') else {
        return address.to_string();
    };

    if (1..=4).contains(&tail.len()) && tail.bytes().all(|b| b.is_ascii_hexdigit()) {
        return format!("{head}:0");
    }

    // IPv4-embedded tail, e.g. ::ffff:192.0.2.1
    if tail.contains('.') {
        return mask_ipv4(address);
    }

    // Trailing "::" has no final group to mask
    address.to_string()
}
