//! Property tests: values written through `set` read back unchanged through
//! `get` on names outside the schema table, and unlisted names classify by
//! the shape of their raw value.

use proptest::prelude::*;

use proptype_access::{is_boolean_shaped, is_numeric_shaped, PropertyAccessor};
use proptype_core::{MemoryRegistry, MemoryStore, PropertyCategory, TypedValue};

const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

fn accessor() -> PropertyAccessor<MemoryStore, MemoryRegistry> {
    PropertyAccessor::new(MemoryStore::new(), MemoryRegistry::new())
}

fn unlisted_name() -> impl Strategy<Value = String> {
    "[a-z]{1,12}".prop_map(|s| format!("test.{s}"))
}

proptest! {
    #[test]
    fn booleans_round_trip(name in unlisted_name(), value in any::<bool>()) {
        let props = accessor();
        props.set(&name, value).unwrap();
        prop_assert_eq!(props.get(&name, None).unwrap(), Some(TypedValue::Boolean(value)));
        prop_assert_eq!(props.get_boolean(&name, None).unwrap(), value);
    }

    #[test]
    fn integers_round_trip(
        name in unlisted_name(),
        value in -MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER,
    ) {
        let props = accessor();
        props.set(&name, value).unwrap();
        prop_assert_eq!(props.get(&name, None).unwrap(), Some(TypedValue::Number(value as f64)));
    }

    #[test]
    fn plain_strings_round_trip(name in unlisted_name(), value in "[A-Za-z][A-Za-z .'-]{0,24}") {
        prop_assume!(!is_boolean_shaped(&value) && !is_numeric_shaped(&value));
        let props = accessor();
        props.set(&name, value.as_str()).unwrap();
        prop_assert_eq!(props.get(&name, None).unwrap(), Some(TypedValue::String(value.clone())));
        prop_assert_eq!(props.get_string(&name, None).unwrap(), value);
    }

    #[test]
    fn base_ten_numbers_classify_as_numeric(name in unlisted_name(), n in -1.0e9f64..1.0e9) {
        let props = PropertyAccessor::new(
            MemoryStore::with_values([(name.as_str(), n.to_string().as_str())]),
            MemoryRegistry::new(),
        );
        prop_assert_eq!(props.category_of(&name).unwrap(), Some(PropertyCategory::Numeric));
        prop_assert_eq!(props.get_number(&name, None).unwrap(), n);
    }

    #[test]
    fn empty_values_yield_the_default(name in unlisted_name(), d in any::<bool>()) {
        let props = accessor();
        prop_assert_eq!(props.get(&name, None).unwrap(), None);
        prop_assert_eq!(
            props.get(&name, Some(TypedValue::Boolean(d))).unwrap(),
            Some(TypedValue::Boolean(d))
        );
    }
}

#[test]
fn boolean_literals_classify_as_boolean() {
    let props = PropertyAccessor::new(
        MemoryStore::with_values([("test.yes", "true"), ("test.no", "false")]),
        MemoryRegistry::new(),
    );
    assert_eq!(props.get("test.yes", None).unwrap(), Some(TypedValue::Boolean(true)));
    assert_eq!(props.get("test.no", None).unwrap(), Some(TypedValue::Boolean(false)));
}
