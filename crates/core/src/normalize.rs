//! Content normalization.
//!
//! Turns a raw CMS response into fully defaulted [`ViewRecord`]s according to a [`Schema`].
//!
//! Guarantees:
//! - every schema field is present in the output, holding either the source value or the
//!   field's default;
//! - flat and `attributes`-wrapped inputs with the same values produce the same output;
//! - a field whose source value has the wrong shape takes its default and is reported as a
//!   [`MalformedField`]; it never aborts the record;
//! - a response with no usable record yields [`ContentError::EmptyContent`].
//!
//! Normalization is pure. The network read belongs to the caller.

use crate::error::{ContentError, ContentResult};
use crate::schema::{FieldKind, FieldSpec, ListFilter, ListSpec, MediaSpec, Schema};
use crate::shape::{record_values, unwrap_relation, RawRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Output types
// ============================================================================

/// A normalized field value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Number(f64),
    Paragraphs(Vec<String>),
    Record(ViewRecord),
    List(Vec<ViewRecord>),
}

impl FieldValue {
    /// Convert to plain JSON. Integral numbers become JSON integers so typed models can use
    /// integer fields.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(text) => Value::String(text.clone()),
            FieldValue::Flag(flag) => Value::Bool(*flag),
            FieldValue::Number(number) => number_to_json(*number),
            FieldValue::Paragraphs(paragraphs) => Value::Array(
                paragraphs
                    .iter()
                    .map(|p| Value::String(p.clone()))
                    .collect(),
            ),
            FieldValue::Record(record) => record.to_json(),
            FieldValue::List(items) => Value::Array(items.iter().map(ViewRecord::to_json).collect()),
        }
    }
}

fn number_to_json(number: f64) -> Value {
    if number.fract() == 0.0 && number.abs() < 9.0e15 {
        Value::from(number as i64)
    } else {
        serde_json::Number::from_f64(number)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// A fully defaulted record: one value per schema field.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ViewRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl ViewRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used for configuration-provided fallback records.
    pub fn with(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(FieldValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.fields.get(name) {
            Some(FieldValue::Flag(flag)) => Some(*flag),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.fields.get(name) {
            Some(FieldValue::Number(number)) => Some(*number),
            _ => None,
        }
    }

    pub fn record(&self, name: &str) -> Option<&ViewRecord> {
        match self.fields.get(name) {
            Some(FieldValue::Record(record)) => Some(record),
            _ => None,
        }
    }

    pub fn list(&self, name: &str) -> Option<&[ViewRecord]> {
        match self.fields.get(name) {
            Some(FieldValue::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn paragraphs(&self, name: &str) -> Option<&[String]> {
        match self.fields.get(name) {
            Some(FieldValue::Paragraphs(paragraphs)) => Some(paragraphs),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect::<Map<String, Value>>(),
        )
    }

    /// Convert into a typed view model.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::ViewShape`] naming the failing path if the model does not match
    /// the record (a schema/model mismatch).
    pub fn into_typed<T: DeserializeOwned>(&self) -> ContentResult<T> {
        serde_path_to_error::deserialize::<_, T>(self.to_json()).map_err(|err| {
            let path = err.path().to_string();
            let source = err.into_inner();
            ContentError::ViewShape(format!("{path}: {source}"))
        })
    }
}

/// A field whose source value had the wrong shape and was replaced by its default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedField {
    /// Dotted output path, with list indices (`sections[1].items[0].price`).
    pub field: String,
    pub expected: &'static str,
    pub found: &'static str,
}

impl fmt::Display for MalformedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, found {}",
            self.field, self.expected, self.found
        )
    }
}

// ============================================================================
// Public operations
// ============================================================================

/// Normalize the first record of a response.
///
/// # Errors
///
/// Returns [`ContentError::EmptyContent`] if the response carries no usable record.
pub fn normalize(raw: &Value, schema: &Schema) -> ContentResult<ViewRecord> {
    normalize_with_report(raw, schema).map(|(record, _)| record)
}

/// Normalize the first record of a response and return the absorbed field anomalies.
///
/// # Errors
///
/// Returns [`ContentError::EmptyContent`] if the response carries no usable record.
pub fn normalize_with_report(
    raw: &Value,
    schema: &Schema,
) -> ContentResult<(ViewRecord, Vec<MalformedField>)> {
    let mut normalizer = Normalizer::default();
    let mut first = None;
    for (index, value) in record_values(raw).iter().enumerate() {
        match RawRecord::from_value(value) {
            Some(record) => {
                first = Some(record);
                break;
            }
            None => normalizer.not_a_record(&format!("[{index}]"), value),
        }
    }
    let first = first.ok_or(ContentError::EmptyContent)?;

    let record = normalizer.record(first, schema, "");
    normalizer.log();
    Ok((record, normalizer.issues))
}

/// Normalize every record of a collection response.
///
/// # Errors
///
/// Returns [`ContentError::EmptyContent`] if the response carries no usable record.
pub fn normalize_all(raw: &Value, schema: &Schema) -> ContentResult<Vec<ViewRecord>> {
    let mut normalizer = Normalizer::default();
    let mut out = Vec::new();
    for (index, value) in record_values(raw).iter().enumerate() {
        let path = format!("[{index}]");
        match RawRecord::from_value(value) {
            Some(record) => out.push(normalizer.record(record, schema, &path)),
            None => normalizer.not_a_record(&path, value),
        }
    }
    normalizer.log();

    if out.is_empty() {
        return Err(ContentError::EmptyContent);
    }
    Ok(out)
}

/// A record holding only defaults, as produced for an absent nested record.
pub fn defaults_of(schema: &Schema) -> ViewRecord {
    let empty = Map::new();
    Normalizer::default().record(RawRecord::Flat(&empty), schema, "")
}

// ============================================================================
// Internals
// ============================================================================

/// Outcome of reading one candidate source value.
enum Read {
    Value(FieldValue),
    Absent,
    Malformed(&'static str),
}

#[derive(Default)]
struct Normalizer {
    issues: Vec<MalformedField>,
}

impl Normalizer {
    fn record(&mut self, raw: RawRecord<'_>, schema: &Schema, prefix: &str) -> ViewRecord {
        let fields = schema
            .fields()
            .iter()
            .map(|spec| {
                let path = join_path(prefix, spec.name());
                (spec.name().to_string(), self.field(raw, spec, &path))
            })
            .collect();
        ViewRecord { fields }
    }

    fn field(&mut self, raw: RawRecord<'_>, spec: &FieldSpec, path: &str) -> FieldValue {
        if let (true, FieldKind::Record(schema)) = (spec.is_inline(), spec.kind()) {
            return FieldValue::Record(self.record(raw, schema, path));
        }

        let mut malformed = None;

        for source in spec.sources() {
            let Some(value) = raw.lookup(source) else {
                continue;
            };
            match self.read(value, spec.kind(), path) {
                Read::Value(value) => return finish(spec.kind(), value),
                Read::Absent => continue,
                Read::Malformed(found) => {
                    malformed.get_or_insert(found);
                }
            }
        }

        if let Some(found) = malformed {
            self.issues.push(MalformedField {
                field: path.to_string(),
                expected: expected_name(spec.kind()),
                found,
            });
        }
        finish(spec.kind(), self.default_value(spec.kind(), path))
    }

    fn read(&mut self, value: &Value, kind: &FieldKind, path: &str) -> Read {
        match kind {
            FieldKind::Text { .. } => read_text(value),
            FieldKind::Flag { .. } => match value {
                Value::Bool(flag) => Read::Value(FieldValue::Flag(*flag)),
                other => Read::Malformed(json_type(other)),
            },
            FieldKind::Number { .. } => read_number(value),
            FieldKind::Paragraphs { .. } => read_paragraphs(value),
            FieldKind::Media(media) => read_media(value, media),
            FieldKind::Record(schema) => self.read_record(value, schema, path),
            FieldKind::List(spec) => self.read_list(value, spec, path),
        }
    }

    fn read_record(&mut self, value: &Value, schema: &Schema, path: &str) -> Read {
        let value = unwrap_relation(value);
        let target = match value {
            Value::Null => return Read::Absent,
            Value::Array(items) => match items.first() {
                Some(first) => unwrap_relation(first),
                None => return Read::Absent,
            },
            other => other,
        };
        match RawRecord::from_value(target) {
            Some(record) => Read::Value(FieldValue::Record(self.record(record, schema, path))),
            None => Read::Malformed(json_type(target)),
        }
    }

    fn read_list(&mut self, value: &Value, spec: &ListSpec, path: &str) -> Read {
        let items = match unwrap_relation(value) {
            Value::Array(items) => items,
            Value::Null => return Read::Absent,
            other => return Read::Malformed(json_type(other)),
        };

        let mut elements: Vec<&Value> = items.iter().collect();
        if let Some(key) = &spec.order_by {
            // A missing key sorts as the default its output field is filled with.
            let missing = order_default(&spec.item, key);
            elements.sort_by(|a, b| {
                let a = order_key(a, key).unwrap_or(missing);
                let b = order_key(b, key).unwrap_or(missing);
                a.total_cmp(&b)
            });
        }

        let mut out = Vec::with_capacity(elements.len());
        for (position, element) in elements.into_iter().enumerate() {
            let element_path = format!("{path}[{position}]");
            match RawRecord::from_value(element) {
                Some(record) => out.push(self.record(record, &spec.item, &element_path)),
                None => self.not_a_record(&element_path, element),
            }
        }

        out.retain(|record| keep(record, &spec.filters));

        if out.is_empty() && !spec.fallback.is_empty() {
            return Read::Value(FieldValue::List(spec.fallback.clone()));
        }
        Read::Value(FieldValue::List(out))
    }

    fn default_value(&mut self, kind: &FieldKind, path: &str) -> FieldValue {
        match kind {
            FieldKind::Text { default, .. } => FieldValue::Text(default.clone()),
            FieldKind::Flag { default } => FieldValue::Flag(*default),
            FieldKind::Number { default } => FieldValue::Number(*default),
            FieldKind::Paragraphs { default } => FieldValue::Paragraphs(default.clone()),
            FieldKind::Media(media) => FieldValue::Text(media.fallback.clone()),
            FieldKind::Record(schema) => {
                let empty = Map::new();
                FieldValue::Record(self.record(RawRecord::Flat(&empty), schema, path))
            }
            FieldKind::List(spec) => FieldValue::List(spec.fallback.clone()),
        }
    }

    /// Record a collection element that is not an object. The element is dropped.
    fn not_a_record(&mut self, path: &str, value: &Value) {
        self.issues.push(MalformedField {
            field: path.to_string(),
            expected: "object",
            found: json_type(value),
        });
    }

    fn log(&self) {
        for issue in &self.issues {
            tracing::debug!("malformed field replaced by default: {issue}");
        }
    }
}

/// Apply text transforms after a value (or default) is chosen.
fn finish(kind: &FieldKind, value: FieldValue) -> FieldValue {
    match (kind, value) {
        (
            FieldKind::Text {
                transform: Some(transform),
                ..
            },
            FieldValue::Text(text),
        ) => FieldValue::Text(transform(&text)),
        (_, value) => value,
    }
}

fn read_text(value: &Value) -> Read {
    match value {
        Value::String(text) if text.trim().is_empty() => Read::Absent,
        Value::String(text) => Read::Value(FieldValue::Text(text.clone())),
        Value::Number(number) => Read::Value(FieldValue::Text(number.to_string())),
        Value::Bool(flag) => Read::Value(FieldValue::Text(flag.to_string())),
        other => Read::Malformed(json_type(other)),
    }
}

fn read_number(value: &Value) -> Read {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(n) => Read::Value(FieldValue::Number(n)),
            None => Read::Malformed("number"),
        },
        Value::String(text) if text.trim().is_empty() => Read::Absent,
        Value::String(text) => match text.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Read::Value(FieldValue::Number(n)),
            _ => Read::Malformed("string"),
        },
        other => Read::Malformed(json_type(other)),
    }
}

fn read_paragraphs(value: &Value) -> Read {
    let paragraphs: Vec<String> = match value {
        Value::String(text) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Array(blocks) => blocks
            .iter()
            .filter_map(block_text)
            .filter(|p| !p.trim().is_empty())
            .collect(),
        other => return Read::Malformed(json_type(other)),
    };

    if paragraphs.is_empty() {
        Read::Absent
    } else {
        Read::Value(FieldValue::Paragraphs(paragraphs))
    }
}

/// Text of one rich-text block: a plain string or `{ children: [{ text }] }`.
fn block_text(block: &Value) -> Option<String> {
    match block {
        Value::String(text) => Some(text.clone()),
        Value::Object(map) => {
            let children = map.get("children")?.as_array()?;
            Some(
                children
                    .iter()
                    .filter_map(|child| child.get("text").and_then(Value::as_str))
                    .collect::<String>(),
            )
        }
        _ => None,
    }
}

fn read_media(value: &Value, media: &MediaSpec) -> Read {
    match media_path(value, media.prefer_format.as_deref()) {
        Ok(Some(path)) => Read::Value(FieldValue::Text(media.base.join(&path))),
        Ok(None) => Read::Absent,
        Err(found) => Read::Malformed(found),
    }
}

/// Find the upload path inside a media value.
///
/// Accepts a path string, an upload object (`url`, optional `formats`), a relation envelope, or
/// an array of those (first element wins).
fn media_path(value: &Value, prefer: Option<&str>) -> Result<Option<String>, &'static str> {
    match unwrap_relation(value) {
        Value::Null => Ok(None),
        Value::String(path) if path.trim().is_empty() => Ok(None),
        Value::String(path) => Ok(Some(path.trim().to_string())),
        Value::Array(items) => match items.first() {
            Some(first) => media_path(first, prefer),
            None => Ok(None),
        },
        Value::Object(map) => {
            let record = RawRecord::from_map(map);
            let preferred = prefer
                .and_then(|format| record.lookup(&format!("formats.{format}.url")))
                .and_then(Value::as_str)
                .filter(|p| !p.trim().is_empty());
            let url = preferred.or_else(|| {
                record
                    .get("url")
                    .and_then(Value::as_str)
                    .filter(|p| !p.trim().is_empty())
            });
            Ok(url.map(|p| p.trim().to_string()))
        }
        other => Err(json_type(other)),
    }
}

fn order_key(value: &Value, key: &str) -> Option<f64> {
    let record = RawRecord::from_value(value)?;
    match read_number(record.lookup(key)?) {
        Read::Value(FieldValue::Number(number)) => Some(number),
        _ => None,
    }
}

/// Default of the number field that reads `key`, or `0` when no such field exists.
fn order_default(item: &Schema, key: &str) -> f64 {
    item.fields()
        .iter()
        .find_map(|spec| match spec.kind() {
            FieldKind::Number { default } if spec.sources().any(|source| source == key) => {
                Some(*default)
            }
            _ => None,
        })
        .unwrap_or(0.0)
}

fn keep(record: &ViewRecord, filters: &[ListFilter]) -> bool {
    filters.iter().all(|filter| match filter {
        ListFilter::Flag(field) => record.flag(field) == Some(true),
        ListFilter::NonBlank(field) => record
            .text(field)
            .map(|text| !text.trim().is_empty())
            .unwrap_or(false),
    })
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn expected_name(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Text { .. } => "text",
        FieldKind::Flag { .. } => "boolean",
        FieldKind::Number { .. } => "number",
        FieldKind::Paragraphs { .. } => "rich text",
        FieldKind::Media(_) => "media",
        FieldKind::Record(_) => "object",
        FieldKind::List(_) => "array",
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
