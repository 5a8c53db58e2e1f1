use serde_json::{Map, Value};

/// Raw input payload: field name to untyped value, in insertion order.
pub type Fields = Map<String, Value>;
