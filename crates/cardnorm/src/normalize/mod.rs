//! Blanking of translatable strings in Adaptive Card JSON.
//!
//! The walk visits every string leaf once and decides from local context only:
//! - object property: stripped when the property is configured, except that
//!   `value` additionally has to pass [`rules::is_value_replaceable`]
//! - array element: stripped when the array is stored under `inlines`
//! - anything else is left alone
//!
//! Exception predicates read the sibling fields as they were in the input, so
//! the result does not depend on visiting order. Tree shape, key order and all
//! non-string scalars are preserved.

pub(crate) mod rules;

use std::io::Read;

use serde_json::Value;

use crate::options::{OutputStyle, TranslatorSettings};
use crate::schema::props;
use crate::Result;

use rules::Slot;

/// Blank translatable strings in place. Returns how many strings were replaced.
pub fn strip_translatable(root: &mut Value, settings: &TranslatorSettings) -> usize {
    if settings.is_empty() {
        return 0;
    }
    let mut walker = Walker { settings, stripped: 0 };
    walker.visit(root, Slot::Unnamed, false);
    tracing::trace!(stripped = walker.stripped, "stripped translatable strings");
    walker.stripped
}

/// Normalize a parsed card and serialize it using the configured style.
pub fn card_without_values(mut card: Value, settings: &TranslatorSettings) -> Result<String> {
    strip_translatable(&mut card, settings);
    let out = match settings.output {
        OutputStyle::Pretty => serde_json::to_string_pretty(&card)?,
        OutputStyle::Compact => serde_json::to_string(&card)?,
    };
    Ok(out)
}

pub fn normalize_str(s: &str, settings: &TranslatorSettings) -> Result<String> {
    let card: Value = serde_json::from_str(s)?;
    card_without_values(card, settings)
}

pub fn normalize_reader<R: Read>(mut reader: R, settings: &TranslatorSettings) -> Result<String> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    normalize_str(&s, settings)
}

/// True when both cards normalize to identical text.
pub fn cards_equivalent(a: &Value, b: &Value, settings: &TranslatorSettings) -> bool {
    let mut a = a.clone();
    let mut b = b.clone();
    strip_translatable(&mut a, settings);
    strip_translatable(&mut b, settings);
    a == b
}

struct Walker<'s> {
    settings: &'s TranslatorSettings,
    stripped: usize,
}

impl Walker<'_> {
    /// `value_replaceable` is the verdict for a `value` property of the
    /// enclosing object; it is only consulted when `slot` is `Property("value")`.
    fn visit(&mut self, node: &mut Value, slot: Slot<'_>, value_replaceable: bool) {
        match node {
            Value::String(s) => {
                if self.should_strip(slot, value_replaceable) && !s.is_empty() {
                    s.clear();
                    self.stripped += 1;
                }
            }
            Value::Array(items) => {
                let array_key = match slot {
                    Slot::Property(key) => Some(key),
                    _ => None,
                };
                for item in items.iter_mut() {
                    self.visit(item, Slot::Element { array_key }, false);
                }
            }
            Value::Object(map) => {
                let replaceable = map.contains_key(props::VALUE) && rules::is_value_replaceable(map, slot);
                for (key, child) in map.iter_mut() {
                    self.visit(child, Slot::Property(key), replaceable);
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
    }

    fn should_strip(&self, slot: Slot<'_>, value_replaceable: bool) -> bool {
        match slot {
            Slot::Property(key) => {
                self.settings.translates(key) && (key != props::VALUE || value_replaceable)
            }
            Slot::Element { array_key } => rules::is_array_element_replaceable(array_key),
            Slot::Unnamed => false,
        }
    }
}
