#![no_main]
use arbitrary::Arbitrary;
use cardnorm::{strip_translatable, TranslatorSettings};
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value};

const KEYS: [&str; 8] = ["type", "value", "text", "title", "facts", "inlines", "body", "id"];
const KINDS: [&str; 4] = ["Input.Text", "Input.Toggle", "imBack", "TextBlock"];

#[derive(Debug, Arbitrary)]
enum Node {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    Kind(u8),
    Array(Vec<Node>),
    Object(Vec<(u8, Node)>),
}

impl Node {
    fn to_json(&self, depth: usize) -> Value {
        if depth > 16 {
            return Value::Null;
        }
        match self {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Int(i) => Value::from(*i),
            Node::Str(s) => Value::String(s.clone()),
            Node::Kind(k) => Value::from(KINDS[*k as usize % KINDS.len()]),
            Node::Array(items) => Value::Array(items.iter().map(|n| n.to_json(depth + 1)).collect()),
            Node::Object(entries) => {
                let mut m = Map::new();
                for (k, n) in entries {
                    m.insert(KEYS[*k as usize % KEYS.len()].to_string(), n.to_json(depth + 1));
                }
                Value::Object(m)
            }
        }
    }
}

fn same_shape(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::String(x), Value::String(y)) => y.is_empty() || x == y,
        (Value::Array(x), Value::Array(y)) => x.len() == y.len() && x.iter().zip(y).all(|(p, q)| same_shape(p, q)),
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|((kx, p), (ky, q))| kx == ky && same_shape(p, q))
        }
        (x, y) => x == y,
    }
}

fuzz_target!(|node: Node| {
    let input = node.to_json(0);
    let mut out = input.clone();
    strip_translatable(&mut out, &TranslatorSettings::default());
    assert!(same_shape(&input, &out), "shape changed");
});
