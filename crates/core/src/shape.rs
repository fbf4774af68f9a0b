//! Response-shape resolution for CMS payloads.
//!
//! The CMS has served two record layouts over its lifetime:
//!
//! ```json
//! { "id": 1, "Title": "A" }                      // flat
//! { "id": 1, "attributes": { "Title": "A" } }    // wrapped
//! ```
//!
//! Relations and media add a third wrapper, the relation envelope
//! `{ "data": { "attributes": { ... } } }`.
//!
//! Shape is decided once per record by [`RawRecord::from_value`]. Every later lookup goes through
//! [`RawRecord::get`] / [`RawRecord::lookup`], which try the flat key first and the wrapped key
//! second, and unwrap relation envelopes on the way down a dotted path.

use serde_json::{Map, Value};

pub const ATTRIBUTES_KEY: &str = "attributes";
pub const DATA_KEY: &str = "data";
pub const META_KEY: &str = "meta";

/// Which of the two known layouts a record uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Flat,
    Wrapped,
}

/// A CMS record with its shape resolved.
#[derive(Clone, Copy, Debug)]
pub enum RawRecord<'a> {
    /// Fields sit directly on the record object.
    Flat(&'a Map<String, Value>),
    /// Fields sit under `attributes`; `outer` still carries `id` and similar envelope fields.
    Wrapped {
        outer: &'a Map<String, Value>,
        attributes: &'a Map<String, Value>,
    },
}

impl<'a> RawRecord<'a> {
    /// Resolve the shape of a record. Returns `None` for non-objects.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        let outer = value.as_object()?;
        Some(Self::from_map(outer))
    }

    pub fn from_map(outer: &'a Map<String, Value>) -> Self {
        match outer.get(ATTRIBUTES_KEY).and_then(Value::as_object) {
            Some(attributes) => RawRecord::Wrapped { outer, attributes },
            None => RawRecord::Flat(outer),
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            RawRecord::Flat(_) => Shape::Flat,
            RawRecord::Wrapped { .. } => Shape::Wrapped,
        }
    }

    /// Look up a single key: flat position first, then under `attributes`.
    ///
    /// `null` counts as absent so that a null flat key does not hide a wrapped value.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        match self {
            RawRecord::Flat(fields) => present(fields.get(key)),
            RawRecord::Wrapped { outer, attributes } => {
                present(outer.get(key)).or_else(|| present(attributes.get(key)))
            }
        }
    }

    /// Look up a dotted path such as `Image.url` or `formats.medium.url`.
    ///
    /// Each intermediate value has relation envelopes removed and its own shape resolved, so the
    /// same path matches `Image.url` and `Image.data.attributes.url`. Numeric segments index into
    /// arrays.
    pub fn lookup(&self, path: &str) -> Option<&'a Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.get(first)?;

        for segment in segments {
            let value = unwrap_relation(current);
            current = match value {
                Value::Object(map) => RawRecord::from_map(map).get(segment)?,
                Value::Array(items) => {
                    let index: usize = segment.parse().ok()?;
                    present(items.get(index))?
                }
                _ => return None,
            };
        }

        Some(current)
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Strip a relation envelope (`{ "data": ... }`), returning the inner value.
///
/// An object is treated as an envelope only when `data` is its sole key apart from `meta`, so
/// records that happen to own a field called `data` are left alone.
pub fn unwrap_relation(value: &Value) -> &Value {
    match value {
        Value::Object(map) => envelope_body(map).unwrap_or(value),
        other => other,
    }
}

fn envelope_body(map: &Map<String, Value>) -> Option<&Value> {
    let inner = map.get(DATA_KEY)?;
    map.keys()
        .all(|k| k == DATA_KEY || k == META_KEY)
        .then_some(inner)
}

/// The record candidates carried by a response body, before shape resolution.
///
/// Accepted inputs:
/// - `null` → none
/// - `{ "data": [..] }` / `{ "data": {..} }` / `{ "data": null }`
/// - a bare array of records
/// - a bare record object, including one that owns a `data` field
///
/// Array elements are returned as-is; callers decide what to do with non-objects.
pub fn record_values(raw: &Value) -> &[Value] {
    match unwrap_relation(raw) {
        Value::Array(items) => items,
        body @ Value::Object(_) => std::slice::from_ref(body),
        _ => &[],
    }
}
