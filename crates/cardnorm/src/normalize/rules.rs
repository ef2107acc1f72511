//! Context predicates deciding which occurrences of overloaded properties are
//! safe to blank.

use serde_json::{Map, Value};

use crate::schema::{props, FREE_TEXT_VALUE_KINDS};

/// Where a node sits relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot<'a> {
    /// The document root, or an element of an array nested directly in
    /// another array (nothing names it).
    Unnamed,
    /// Value of the named property of an object.
    Property(&'a str),
    /// Element of an array; carries the property the array is stored under.
    Element { array_key: Option<&'a str> },
}

/// A bare string inside an array is only text when the array holds inline runs.
pub(crate) fn is_array_element_replaceable(array_key: Option<&str>) -> bool {
    array_key == Some(props::INLINES)
}

/// Decide whether `container`'s own `value` property holds translatable text.
///
/// A string `type` must name a free-text kind; any other `type` keeps the
/// value. Without a `type`, only fact entries (objects inside the `facts`
/// array) qualify.
pub(crate) fn is_value_replaceable(container: &Map<String, Value>, position: Slot<'_>) -> bool {
    match container.get(props::TYPE) {
        Some(Value::String(kind)) => FREE_TEXT_VALUE_KINDS.contains(&kind.as_str()),
        Some(_) => false,
        None => position == Slot::Element { array_key: Some(props::FACTS) },
    }
}
