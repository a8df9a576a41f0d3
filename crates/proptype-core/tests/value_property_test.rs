//! Property-based tests for raw string conversion.
//!
//! Writing a value and parsing it back must be lossless for every finite
//! number and every boolean.

use proptest::prelude::*;

use proptype_core::types::value::{format_number, parse_number};
use proptype_core::{DomainObject, IntoRawValue, ObjectKind, TypedValue};

proptest! {
    #[test]
    fn finite_numbers_survive_formatting(n in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let raw = format_number(n);
        let back = parse_number(&raw);
        // -0 formats as "0".
        prop_assert_eq!(back, if n == 0.0 { 0.0 } else { n });
    }

    #[test]
    fn integers_format_without_fraction(n in -1_000_000_000i64..1_000_000_000i64) {
        prop_assert_eq!(format_number(n as f64), n.to_string());
        prop_assert_eq!((n as f64).into_raw_value(), n.into_raw_value());
    }

    #[test]
    fn alphabetic_garbage_is_nan(s in "[g-zG-Z][a-zA-Z]{0,8}") {
        prop_assume!(s != "Infinity");
        prop_assert!(parse_number(&s).is_nan());
    }

    #[test]
    fn typed_value_display_matches_raw_value(b in any::<bool>(), s in "[a-z ]{0,12}") {
        prop_assert_eq!(TypedValue::from(b).to_string(), b.into_raw_value());
        prop_assert_eq!(TypedValue::from(s.as_str()).to_string(), s.clone().into_raw_value());
    }
}

#[test]
fn domain_objects_serialize_with_lowercase_kind() {
    let obj = DomainObject::new(ObjectKind::Monster, 3, "fluffy bunny");
    let json = serde_json::to_string(&obj).unwrap();
    assert_eq!(json, r#"{"kind":"monster","id":3,"name":"fluffy bunny"}"#);
}
