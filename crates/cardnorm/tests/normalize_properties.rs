use cardnorm::{card_without_values, strip_translatable, TranslatorSettings};
use proptest::prelude::*;
use serde_json::{Map, Value};

const KEYS: &[&str] = &[
    "type", "text", "value", "title", "facts", "inlines", "body", "placeholder", "id", "data",
];
const KINDS: &[&str] = &["Input.Text", "Input.Toggle", "imBack", "TextBlock", "FactSet"];

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-z ]{0,6}".prop_map(Value::String),
        prop::sample::select(KINDS).prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((prop::sample::select(KEYS), inner), 0..5).prop_map(|entries| {
                let mut m = Map::new();
                for (k, v) in entries {
                    m.insert(k.to_string(), v);
                }
                Value::Object(m)
            }),
        ]
    })
}

/// Same tree with every string replaced by a placeholder.
fn skeleton(v: &Value) -> Value {
    match v {
        Value::String(_) => Value::String(String::new()),
        Value::Array(a) => Value::Array(a.iter().map(skeleton).collect()),
        Value::Object(m) => Value::Object(m.iter().map(|(k, v)| (k.clone(), skeleton(v))).collect()),
        other => other.clone(),
    }
}

/// Every string in `after` is either unchanged or blanked.
fn only_blanked(before: &Value, after: &Value) -> bool {
    match (before, after) {
        (Value::String(a), Value::String(b)) => b.is_empty() || a == b,
        (Value::Array(a), Value::Array(b)) => a.iter().zip(b).all(|(x, y)| only_blanked(x, y)),
        (Value::Object(a), Value::Object(b)) => a.iter().zip(b).all(|((ka, x), (kb, y))| ka == kb && only_blanked(x, y)),
        (a, b) => a == b,
    }
}

proptest! {
    #[test]
    fn normalization_is_idempotent(v in arb_json()) {
        let settings = TranslatorSettings::default();
        let once = card_without_values(v, &settings).unwrap();
        let parsed: Value = serde_json::from_str(&once).unwrap();
        let twice = card_without_values(parsed, &settings).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn shape_is_preserved(v in arb_json()) {
        let mut out = v.clone();
        strip_translatable(&mut out, &TranslatorSettings::default());
        prop_assert_eq!(skeleton(&out), skeleton(&v));
        prop_assert!(only_blanked(&v, &out));
    }

    #[test]
    fn empty_configuration_is_identity(v in arb_json()) {
        let settings = TranslatorSettings::default().with_properties(Vec::<String>::new());
        let mut out = v.clone();
        prop_assert_eq!(strip_translatable(&mut out, &settings), 0);
        prop_assert_eq!(out, v);
    }
}
