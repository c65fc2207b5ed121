//! Property-style tests for the address anonymizer

use fake::faker::internet::en::{IPv4, IPv6};
use fake::Fake;
use std::net::{Ipv4Addr, Ipv6Addr};
use test_case::test_case;
use veil::anonymization::{anonymize, IpAnonymizer};
use veil::domain::AddressKind;

#[test_case("203.0.113.45", "203.0.113.0" ; "documentation range")]
#[test_case("192.168.1.1", "192.168.1.0" ; "private range")]
#[test_case("255.255.255.255", "255.255.255.0" ; "broadcast")]
#[test_case("8.8.8.8", "8.8.8.0" ; "single digit octets")]
#[test_case("10.0.0.0", "10.0.0.0" ; "already anonymized")]
fn ipv4_last_octet_is_zeroed(input: &str, expected: &str) {
    assert_eq!(anonymize(input), expected);
}

#[test_case("2001:db8::1", "2001:db8::0" ; "compressed")]
#[test_case("2001:db8:85a3:0:0:8a2e:370:7334", "2001:db8:85a3:0:0:8a2e:370:0" ; "full form")]
#[test_case("fe80::abcd", "fe80::0" ; "link local")]
#[test_case("::1", "::0" ; "loopback")]
#[test_case("::ffff:192.0.2.1", "::ffff:192.0.2.0" ; "ipv4 mapped")]
#[test_case("2001:db8::", "2001:db8::" ; "trailing double colon")]
fn ipv6_last_group_is_zeroed(input: &str, expected: &str) {
    assert_eq!(anonymize(input), expected);
}

#[test_case("" ; "empty")]
#[test_case("not-an-ip" ; "text")]
#[test_case("256.1.1.1" ; "octet out of range")]
#[test_case("1.2.3" ; "too few octets")]
#[test_case(" 203.0.113.45" ; "leading whitespace")]
#[test_case("[2001:db8::1]" ; "bracketed")]
#[test_case("fe80::1%eth0" ; "zone id")]
#[test_case("2001:db8:::1" ; "triple colon")]
fn invalid_input_yields_fallback(input: &str) {
    assert_eq!(anonymize(input), "0.0.0.0");
}

#[test]
fn configured_fallback_is_used_for_invalid_input() {
    let anonymizer = IpAnonymizer::new("::");
    assert_eq!(anonymizer.anonymize("unknown"), "::");
    assert_eq!(anonymizer.anonymize("198.51.100.7"), "198.51.100.0");
}

#[test]
fn random_ipv4_addresses_lose_last_octet() {
    for _ in 0..500 {
        let address: String = IPv4().fake();
        let original: Ipv4Addr = address.parse().unwrap();
        let masked = anonymize(&address);

        let parsed: Ipv4Addr = masked.parse().unwrap();
        assert_eq!(parsed.octets()[..3], original.octets()[..3], "{address}");
        assert_eq!(parsed.octets()[3], 0, "{address}");
    }
}

#[test]
fn random_ipv6_addresses_lose_last_group() {
    for _ in 0..500 {
        let address: String = IPv6().fake();
        let original: Ipv6Addr = address.parse().unwrap();
        let masked = anonymize(&address);

        let parsed: Ipv6Addr = masked.parse().unwrap();
        assert_eq!(parsed.segments()[..7], original.segments()[..7], "{address}");
        assert_eq!(parsed.segments()[7], 0, "{address}");
    }
}

#[test]
fn anonymization_is_idempotent() {
    let mut inputs: Vec<String> = (0..200).map(|_| IPv4().fake()).collect();
    inputs.extend((0..200).map(|_| IPv6().fake::<String>()));
    inputs.extend(
        ["", "garbage", "::", "2001:db8::", "::ffff:10.1.2.3", "999.0.0.1"]
            .iter()
            .map(|s| s.to_string()),
    );

    for input in &inputs {
        let once = anonymize(input);
        assert_eq!(anonymize(&once), once, "input {input:?}");
    }
}

#[test]
fn output_is_always_a_valid_address() {
    for input in ["", "nonsense", "203.0.113.45", "2001:db8::1", "::ffff:192.0.2.1"] {
        assert!(AddressKind::classify(&anonymize(input)).is_valid(), "{input}");
    }
}
