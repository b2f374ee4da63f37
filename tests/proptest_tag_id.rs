//! Property-based tests for the composite label identifier
//!
//! Verifies the composite-id laws: composing delimiter-free components
//! always produces `scope:ip`, parsing recovers exactly the original pair,
//! and delimiter-bearing input is rejected on both sides.

use proptest::prelude::*;
use secureworkload_provider::resource::{TagId, TAG_ID_DELIMITER};
use secureworkload_provider::Error;

/// Root scope names as they appear in real tenants: no delimiter
fn arb_scope() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_ -]{0,24}"
}

/// IPv4 addresses, optionally with a subnet prefix
fn arb_ip() -> impl Strategy<Value = String> {
    (any::<[u8; 4]>(), proptest::option::of(0u8..=32)).prop_map(|(octets, prefix)| {
        let addr = format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);
        match prefix {
            Some(p) => format!("{addr}/{p}"),
            None => addr,
        }
    })
}

proptest! {
    /// Composing T and I yields exactly `T:I`
    #[test]
    fn compose_joins_with_single_delimiter(scope in arb_scope(), ip in arb_ip()) {
        let id = TagId::new(&scope, &ip).unwrap();
        prop_assert_eq!(id.to_string(), format!("{scope}:{ip}"));
    }

    /// Parsing a composed id recovers exactly the original pair
    #[test]
    fn parse_inverts_compose(scope in arb_scope(), ip in arb_ip()) {
        let composed = TagId::new(&scope, &ip).unwrap().to_string();
        let parsed = TagId::parse(&composed).unwrap();
        prop_assert_eq!(parsed.root_scope_name(), scope.as_str());
        prop_assert_eq!(parsed.ip(), ip.as_str());
    }

    /// A scope containing the delimiter is rejected at composition
    #[test]
    fn compose_rejects_delimiter_in_scope(
        prefix in "[a-z]{0,8}",
        suffix in "[a-z]{0,8}",
        ip in arb_ip()
    ) {
        let scope = format!("{prefix}{TAG_ID_DELIMITER}{suffix}");
        let result = TagId::new(&scope, &ip);
        let rejected = matches!(
            result,
            Err(Error::DelimiterInComponent { field: "root_scope_name", .. })
        );
        prop_assert!(rejected, "expected scope rejection, got {:?}", result);
    }

    /// An ip containing the delimiter (IPv6) is rejected at composition
    #[test]
    fn compose_rejects_delimiter_in_ip(scope in arb_scope(), segments in "[0-9a-f:]{2,20}") {
        prop_assume!(segments.contains(TAG_ID_DELIMITER));
        let result = TagId::new(&scope, &segments);
        let rejected = matches!(result, Err(Error::DelimiterInComponent { field: "ip", .. }));
        prop_assert!(rejected, "expected ip rejection, got {:?}", result);
    }

    /// Parsing never panics; it succeeds exactly on strings with a single
    /// well-placed delimiter
    #[test]
    fn parse_is_total(input in ".{0,40}") {
        let delimiters = input.matches(TAG_ID_DELIMITER).count();
        match TagId::parse(&input) {
            Ok(id) => {
                prop_assert_eq!(delimiters, 1);
                prop_assert_eq!(id.to_string(), input);
            }
            Err(Error::InvalidTagId(_)) => prop_assert_ne!(delimiters, 1),
            Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }
}
