//! Black-box tests for the runtime normalizer.

use serde_json::json;

use value_id::serializer::IdNormalizer;
use value_id::{define_id, GenericId, Identifier};

define_id!(CustomId: CustomKind = "custom_id");

const RAW_IDS: &[&str] = &[
    "8b9e2852-b6b1-4182-ac92-61fe4a3678b5",
    "fc02435e-0e4d-11ee-be56-0242ac120002",
    "foo",
    "bar-01",
];

fn normalizer() -> IdNormalizer {
    IdNormalizer::default().with_type::<CustomId>()
}

#[test]
fn normalize_returns_the_payload() {
    let normalizer = normalizer();
    for raw in RAW_IDS {
        let generic = GenericId::from_string(*raw).unwrap();
        let custom = CustomId::from_string(*raw).unwrap();
        assert_eq!(normalizer.normalize(&generic).unwrap(), *raw);
        assert_eq!(normalizer.normalize(&custom).unwrap(), *raw);
    }
}

#[test]
fn denormalize_then_normalize_is_identity() {
    let normalizer = normalizer();
    for raw in RAW_IDS {
        for type_name in ["xthiago_id", "custom_id"] {
            assert!(normalizer.supports_denormalization(&json!(raw), type_name));
            let id = normalizer.denormalize(&json!(raw), type_name).unwrap();
            assert_eq!(id.kind_name(), type_name);
            assert!(normalizer.supports_normalization(&id));
            assert_eq!(normalizer.normalize(&*id).unwrap(), *raw);
        }
    }
}

#[test]
fn typed_denormalize_matches_from_string() {
    let normalizer = normalizer();
    let id: CustomId = normalizer.denormalize_as(&json!("bar-01")).unwrap();
    assert_eq!(id, CustomId::from_string("bar-01").unwrap());
}

#[test]
fn unsupported_values_and_types_are_refused() {
    let normalizer = normalizer();
    assert!(!normalizer.supports_normalization(&json!("foo")));
    assert!(!normalizer.supports_denormalization(&json!("foo"), "std_class"));
}
