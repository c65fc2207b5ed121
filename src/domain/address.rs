//! Visitor address classification
//!
//! Addresses arrive as arbitrary strings from the host. Before any masking is
//! applied they are classified into a tagged variant using the standard
//! textual-notation parsers, so the anonymizer never acts on a guess.

use std::net::{Ipv4Addr, Ipv6Addr};

/// Classification of a raw address string
///
/// # Examples
///
/// ```
/// use veil::domain::address::AddressKind;
///
/// assert!(matches!(AddressKind::classify("203.0.113.45"), AddressKind::V4(_)));
/// assert!(matches!(AddressKind::classify("2001:db8::1"), AddressKind::V6(_)));
/// assert_eq!(AddressKind::classify("not an ip"), AddressKind::Invalid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    /// Dotted-quad IPv4 literal
    V4(Ipv4Addr),
    /// IPv6 literal, including compressed and IPv4-embedded forms
    V6(Ipv6Addr),
    /// Empty, malformed, bracketed, zoned or padded input
    Invalid,
}

impl AddressKind {
    /// Classifies a raw address string
    ///
    /// Parsing is strict: leading zeros in IPv4 octets, surrounding
    /// whitespace, `[..]` brackets and `%zone` suffixes are all `Invalid`.
    pub fn classify(raw: &str) -> Self {
        if let Ok(v4) = raw.parse::<Ipv4Addr>() {
            return Self::V4(v4);
        }
        if let Ok(v6) = raw.parse::<Ipv6Addr>() {
            return Self::V6(v6);
        }
        Self::Invalid
    }

    /// Returns true for either IP family
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// Short label used in log fields
    pub fn label(&self) -> &'static str {
        match self {
            Self::V4(_) => "ipv4",
            Self::V6(_) => "ipv6",
            Self::Invalid => "invalid",
        }
    }
}
