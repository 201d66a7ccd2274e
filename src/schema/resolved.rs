use crate::foundation::error::{CardError, CardResult};
use crate::props::person::Person;
use crate::schema::validate::PropsSchema;
use serde_json::{Map, Value};

/// Placeholder rendered for a prop that is absent.
pub const UNDEFINED: &str = "undefined";

/// Loose props after the shape check: the caller's object with omitted defaults filled in.
///
/// Nothing is coerced; a prop of the wrong kind is kept as given and stringified when rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProps {
    map: Map<String, Value>,
}

impl ResolvedProps {
    pub(crate) fn new(map: Map<String, Value>) -> Self {
        Self { map }
    }

    /// Raw value of a prop, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    /// Borrow the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.map
    }

    /// Convert into a typed [`Person`], keeping only the props the schema declares.
    ///
    /// Unknown props are dropped here; they were already reported by the shape check.
    pub fn into_person(self) -> CardResult<Person> {
        let schema = PropsSchema::person();
        let mut map = self.map;
        map.retain(|k, _| schema.fields().iter().any(|f| f.name == k.as_str()));
        serde_json::from_value(Value::Object(map))
            .map_err(|e| CardError::validation(format!("props are not a valid person: {e}")))
    }
}

/// Stringify a prop the way a template literal would: absent is [`UNDEFINED`], strings are
/// verbatim and arrays are comma-joined.
pub(crate) fn stringify(v: Option<&Value>) -> String {
    match v {
        None => UNDEFINED.to_string(),
        Some(v) => stringify_value(v),
    }
}

fn stringify_value(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => join_items(items, ","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Join array elements; `null` elements become empty strings.
pub(crate) fn join_items(items: &[Value], sep: &str) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            other => stringify_value(other),
        })
        .collect::<Vec<_>>()
        .join(sep)
}
