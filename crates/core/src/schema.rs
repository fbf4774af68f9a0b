//! Declarative field schemas.
//!
//! A [`Schema`] lists the fields a view renders, in order. Each [`FieldSpec`] names the output
//! field, the candidate source paths to read it from, and a [`FieldKind`] carrying the default
//! (and, for media, the URL transform). Schemas are plain data built once per view from
//! [`SiteConfig`](crate::config::SiteConfig); [`normalize`](crate::normalize::normalize) is the
//! only code that interprets them.

use crate::normalize::ViewRecord;
use studio_types::BaseUrl;

/// Ordered list of field descriptors for one record type.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A plain-text transform applied to a resolved text value (including its default).
pub type TextTransform = fn(&str) -> String;

/// How a field is read and what it defaults to.
#[derive(Clone, Debug)]
pub enum FieldKind {
    Text {
        default: String,
        transform: Option<TextTransform>,
    },
    Flag {
        default: bool,
    },
    Number {
        default: f64,
    },
    /// Rich text (CMS blocks or newline-separated text) as a list of paragraphs.
    Paragraphs {
        default: Vec<String>,
    },
    Media(MediaSpec),
    Record(Schema),
    List(ListSpec),
}

/// Media URL resolution for one field.
#[derive(Clone, Debug)]
pub struct MediaSpec {
    /// Origin prepended to relative upload paths.
    pub base: BaseUrl,
    /// Site-local asset used when the field is absent. Not prefixed.
    pub fallback: String,
    /// Responsive format to prefer (`formats.<name>.url`) before the original `url`.
    pub prefer_format: Option<String>,
}

/// A post-normalization filter on list elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListFilter {
    /// Keep elements whose named flag field is `true`.
    Flag(String),
    /// Keep elements whose named text field is not blank.
    NonBlank(String),
}

/// Element schema and collection policies for a list field.
#[derive(Clone, Debug)]
pub struct ListSpec {
    pub item: Schema,
    /// Source key to stable-sort raw elements by before normalizing.
    pub order_by: Option<String>,
    pub filters: Vec<ListFilter>,
    /// Records substituted when the normalized list is empty.
    pub fallback: Vec<ViewRecord>,
}

impl ListSpec {
    pub fn of(item: Schema) -> Self {
        Self {
            item,
            order_by: None,
            filters: Vec::new(),
            fallback: Vec::new(),
        }
    }

    pub fn order_by(mut self, key: impl Into<String>) -> Self {
        self.order_by = Some(key.into());
        self
    }

    pub fn filter_by(mut self, flag_field: impl Into<String>) -> Self {
        self.filters.push(ListFilter::Flag(flag_field.into()));
        self
    }

    pub fn skip_blank(mut self, text_field: impl Into<String>) -> Self {
        self.filters.push(ListFilter::NonBlank(text_field.into()));
        self
    }

    pub fn or_fallback(mut self, records: Vec<ViewRecord>) -> Self {
        self.fallback = records;
        self
    }
}

/// One output field of a schema.
#[derive(Clone, Debug)]
pub struct FieldSpec {
    name: String,
    sources: Vec<String>,
    kind: FieldKind,
    inline: bool,
}

impl FieldSpec {
    fn with_kind(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            sources: Vec::new(),
            kind,
            inline: false,
        }
    }

    pub fn text(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            FieldKind::Text {
                default: default.into(),
                transform: None,
            },
        )
    }

    pub fn flag(name: impl Into<String>, default: bool) -> Self {
        Self::with_kind(name, FieldKind::Flag { default })
    }

    pub fn number(name: impl Into<String>, default: f64) -> Self {
        Self::with_kind(name, FieldKind::Number { default })
    }

    pub fn paragraphs(name: impl Into<String>, default: &[&str]) -> Self {
        Self::with_kind(
            name,
            FieldKind::Paragraphs {
                default: default.iter().map(|p| (*p).to_string()).collect(),
            },
        )
    }

    pub fn media(name: impl Into<String>, base: &BaseUrl, fallback: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            FieldKind::Media(MediaSpec {
                base: base.clone(),
                fallback: fallback.into(),
                prefer_format: None,
            }),
        )
    }

    pub fn record(name: impl Into<String>, schema: Schema) -> Self {
        Self::with_kind(name, FieldKind::Record(schema))
    }

    pub fn list(name: impl Into<String>, spec: ListSpec) -> Self {
        Self::with_kind(name, FieldKind::List(spec))
    }

    /// Add a candidate source path. Candidates are tried in the order added; without any, the
    /// field name itself is the only candidate.
    pub fn from(mut self, source: impl Into<String>) -> Self {
        self.sources.push(source.into());
        self
    }

    /// Prefer a responsive media format. No effect on non-media fields.
    pub fn prefer_format(mut self, format: impl Into<String>) -> Self {
        if let FieldKind::Media(media) = &mut self.kind {
            media.prefer_format = Some(format.into());
        }
        self
    }

    /// Apply `transform` to the resolved text. No effect on non-text fields.
    pub fn map_text(mut self, transform: TextTransform) -> Self {
        if let FieldKind::Text { transform: t, .. } = &mut self.kind {
            *t = Some(transform);
        }
        self
    }

    /// Read a record field's sub-fields from the enclosing record rather than a nested object.
    /// No effect on non-record fields.
    pub fn inline(mut self) -> Self {
        self.inline = matches!(self.kind, FieldKind::Record(_));
        self
    }

    pub fn is_inline(&self) -> bool {
        self.inline
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Source paths to try, in order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        let fallback = if self.sources.is_empty() {
            Some(self.name.as_str())
        } else {
            None
        };
        self.sources.iter().map(String::as_str).chain(fallback)
    }
}
