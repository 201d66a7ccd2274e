use crate::foundation::error::{CardError, CardResult};
use crate::props::person::{DEFAULT_HOBBY, DEFAULT_PRONOUN};
use crate::schema::resolved::ResolvedProps;
use serde_json::{Map, Value};
use std::fmt;

/// Primitive kind a declared prop must have.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// JSON string.
    String,
    /// JSON number without a fractional part.
    Integer,
    /// JSON array whose elements all have the inner kind.
    ArrayOf(Box<FieldKind>),
    /// JSON object with its own declared fields.
    Shape(Vec<FieldSpec>),
}

impl FieldKind {
    fn describe(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::ArrayOf(_) => "array",
            FieldKind::Shape(_) => "object",
        }
    }
}

/// One declared prop.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Prop name as it appears in the props object.
    pub name: &'static str,
    /// Expected kind.
    pub kind: FieldKind,
    /// Whether absence is reported.
    pub required: bool,
    /// Value substituted when the prop is absent.
    pub default: Option<Value>,
}

impl FieldSpec {
    /// A prop that must be present.
    pub fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
        }
    }

    /// A prop that may be omitted, resolving to `default` when it is.
    pub fn optional(name: &'static str, kind: FieldKind, default: Value) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: Some(default),
        }
    }
}

/// One step of a [`SchemaWarning`] location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaPathElem {
    /// Object member.
    Field(String),
    /// Array element.
    Index(usize),
}

/// A non-fatal mismatch between a props object and its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaWarning {
    /// Location from the props root.
    pub path: Vec<SchemaPathElem>,
    /// What was wrong there.
    pub message: String,
}

impl SchemaWarning {
    fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }

    /// JSONPath-like location, e.g. `$.address.city` or `$.hobbies[2]`.
    pub fn path_string(&self) -> String {
        format_path(&self.path)
    }
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[SchemaPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match p {
            SchemaPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SchemaPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

/// Outcome of [`PropsSchema::check`]: the props with defaults applied, plus every warning found.
#[derive(Debug, Clone)]
pub struct PropsReport {
    /// Input props with defaults substituted.
    pub props: ResolvedProps,
    /// Mismatches in the order they were found.
    pub warnings: Vec<SchemaWarning>,
}

impl PropsReport {
    /// `true` when the props matched the schema exactly.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Turn any warning into a [`CardError::Validation`].
    pub fn into_strict(self) -> CardResult<ResolvedProps> {
        if self.warnings.is_empty() {
            return Ok(self.props);
        }
        let joined = self
            .warnings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(CardError::validation(format!(
            "props failed shape check: {joined}"
        )))
    }
}

/// Declared shape of a props object.
#[derive(Debug, Clone, PartialEq)]
pub struct PropsSchema {
    fields: Vec<FieldSpec>,
}

impl PropsSchema {
    /// Build a schema from its top-level fields.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Schema of a person card.
    pub fn person() -> Self {
        Self::new(vec![
            FieldSpec::required("name", FieldKind::String),
            FieldSpec::required("age", FieldKind::Integer),
            FieldSpec::required(
                "address",
                FieldKind::Shape(vec![
                    FieldSpec::required("houseNumber", FieldKind::Integer),
                    FieldSpec::required("street", FieldKind::String),
                    FieldSpec::required("city", FieldKind::String),
                ]),
            ),
            FieldSpec::optional(
                "hobbies",
                FieldKind::ArrayOf(Box::new(FieldKind::String)),
                Value::Array(vec![Value::String(DEFAULT_HOBBY.to_string())]),
            ),
            FieldSpec::optional(
                "pronoun",
                FieldKind::String,
                Value::String(DEFAULT_PRONOUN.to_string()),
            ),
        ])
    }

    /// Declared top-level fields.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Check `props`, substitute defaults for omitted optional fields and log every mismatch.
    ///
    /// Never fails: a non-object input is reported and treated as an empty object.
    #[tracing::instrument(skip_all)]
    pub fn check(&self, props: &Value) -> PropsReport {
        let mut warnings = Vec::new();
        let mut map = match props {
            Value::Object(m) => m.clone(),
            other => {
                warnings.push(SchemaWarning::at(
                    &[],
                    format!("props must be an object, found {}", kind_of(other)),
                ));
                Map::new()
            }
        };

        check_fields(&self.fields, &map, &mut Vec::new(), &mut warnings);

        for spec in &self.fields {
            if let Some(default) = &spec.default
                && !map.contains_key(spec.name)
            {
                tracing::debug!(prop = spec.name, "using default prop value");
                map.insert(spec.name.to_string(), default.clone());
            }
        }

        for w in &warnings {
            tracing::warn!(path = %w.path_string(), "failed prop type: {}", w.message);
        }

        PropsReport {
            props: ResolvedProps::new(map),
            warnings,
        }
    }
}

fn check_fields(
    fields: &[FieldSpec],
    obj: &Map<String, Value>,
    path: &mut Vec<SchemaPathElem>,
    warnings: &mut Vec<SchemaWarning>,
) {
    for spec in fields {
        path.push(SchemaPathElem::Field(spec.name.to_string()));
        match obj.get(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    warnings.push(SchemaWarning::at(path, "required prop is missing"));
                }
            }
            Some(v) => check_kind(&spec.kind, v, path, warnings),
        }
        path.pop();
    }

    // Names outside the schema are kept but never matched against a declared field.
    for key in obj.keys() {
        if !fields.iter().any(|f| f.name == key.as_str()) {
            path.push(SchemaPathElem::Field(key.clone()));
            warnings.push(SchemaWarning::at(path, "unknown prop is ignored"));
            path.pop();
        }
    }
}

fn check_kind(
    kind: &FieldKind,
    v: &Value,
    path: &mut Vec<SchemaPathElem>,
    warnings: &mut Vec<SchemaWarning>,
) {
    match (kind, v) {
        (FieldKind::String, Value::String(_)) => {}
        (FieldKind::Integer, Value::Number(n)) if n.is_i64() || n.is_u64() => {}
        (FieldKind::ArrayOf(inner), Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                path.push(SchemaPathElem::Index(i));
                check_kind(inner, item, path, warnings);
                path.pop();
            }
        }
        (FieldKind::Shape(fields), Value::Object(obj)) => {
            check_fields(fields, obj, path, warnings);
        }
        (expected, found) => {
            warnings.push(SchemaWarning::at(
                path,
                format!("expected {}, found {}", expected.describe(), kind_of(found)),
            ));
        }
    }
}

pub(crate) fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
