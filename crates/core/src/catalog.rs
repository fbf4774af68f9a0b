//! View catalog.
//!
//! Every content view of the site is a [`ViewKind`]. A kind knows its CMS collection, populate
//! directive and cardinality; [`Catalog`] pairs each kind with the schema built from the resolved
//! [`SiteConfig`]. [`ContentService`] runs the single-shot load for a view: fetch, then normalize.

use crate::config::SiteConfig;
use crate::error::{ContentError, ContentResult};
use crate::normalize::{normalize, normalize_all, ViewRecord};
use crate::populate::Populate;
use crate::schema::Schema;
use crate::source::{ContentQuery, ContentSource};
use crate::views::{self, View};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use studio_types::CollectionName;

// ============================================================================
// ViewKind
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Footer,
    Cards,
    FirstSection,
    HomeHero,
    Welcome,
    HomeGallery,
    GalleryPage,
    NewsItems,
    NewsPage,
    Faq,
    HairRemoval,
    About,
    PriceList,
    Contact,
    StayUpdated,
    QuickFind,
}

/// Whether a view renders the first record or every record of its collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinality {
    Single,
    Collection,
}

impl ViewKind {
    pub const ALL: [ViewKind; 16] = [
        ViewKind::Footer,
        ViewKind::Cards,
        ViewKind::FirstSection,
        ViewKind::HomeHero,
        ViewKind::Welcome,
        ViewKind::HomeGallery,
        ViewKind::GalleryPage,
        ViewKind::NewsItems,
        ViewKind::NewsPage,
        ViewKind::Faq,
        ViewKind::HairRemoval,
        ViewKind::About,
        ViewKind::PriceList,
        ViewKind::Contact,
        ViewKind::StayUpdated,
        ViewKind::QuickFind,
    ];

    /// Stable kebab-case name used by the REST API and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            ViewKind::Footer => "footer",
            ViewKind::Cards => "cards",
            ViewKind::FirstSection => "first-section",
            ViewKind::HomeHero => "home-hero",
            ViewKind::Welcome => "welcome",
            ViewKind::HomeGallery => "home-gallery",
            ViewKind::GalleryPage => "gallery",
            ViewKind::NewsItems => "news-items",
            ViewKind::NewsPage => "news",
            ViewKind::Faq => "faq",
            ViewKind::HairRemoval => "hair-removal",
            ViewKind::About => "about",
            ViewKind::PriceList => "price-list",
            ViewKind::Contact => "contact",
            ViewKind::StayUpdated => "stay-updated",
            ViewKind::QuickFind => "quick-find",
        }
    }

    /// Look up a view by its [`name`](Self::name).
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::UnknownView`] if no view has that name.
    pub fn from_name(name: &str) -> ContentResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ContentError::UnknownView(name.to_string()))
    }

    /// CMS collection path segment.
    pub fn collection(self) -> &'static str {
        match self {
            ViewKind::Footer => "footers",
            ViewKind::Cards => "cards",
            ViewKind::FirstSection => "first-sections",
            ViewKind::HomeHero => "main-home-sections",
            ViewKind::Welcome => "welcome-section",
            ViewKind::HomeGallery | ViewKind::GalleryPage => "gallery-items",
            ViewKind::NewsItems => "news-items",
            ViewKind::NewsPage => "nieuws-Pages",
            ViewKind::Faq => "faqs",
            ViewKind::HairRemoval => "laserontharing-pages",
            ViewKind::About => "over-mij-pages",
            ViewKind::PriceList => "prijslijst-pages",
            ViewKind::Contact => "contact-us-pages",
            ViewKind::StayUpdated => "bliftops",
            ViewKind::QuickFind => "vindsnel-pages",
        }
    }

    pub fn cardinality(self) -> Cardinality {
        match self {
            ViewKind::Cards | ViewKind::NewsItems => Cardinality::Collection,
            _ => Cardinality::Single,
        }
    }

    /// Relations the view needs expanded, and nothing more.
    pub fn populate(self) -> Populate {
        match self {
            ViewKind::HomeGallery => Populate::relations().with(
                "GalleryItem",
                Populate::relations().with("GalleryImages", Populate::all()),
            ),
            ViewKind::GalleryPage => Populate::relations()
                .with(
                    "GalleryItem",
                    Populate::relations().with("GalleryImages", Populate::all()),
                )
                .with("ContactSection", Populate::all()),
            ViewKind::PriceList => {
                Populate::relations().with("pricing_sections", Populate::only(["items"]))
            }
            ViewKind::StayUpdated => Populate::relations()
                .with("bliftop_main_content", Populate::all())
                .with(
                    "bliftop_main_content",
                    Populate::relations().with(
                        "sectionss",
                        Populate::relations()
                            .with_wildcard("lists")
                            .with("list", Populate::all()),
                    ),
                )
                .with(
                    "ContactSection",
                    Populate::relations().with_wildcard("highlighted_texts"),
                ),
            ViewKind::QuickFind => Populate::relations()
                .with(
                    "mainContent",
                    Populate::relations().with("sections", Populate::all()),
                )
                .with("ContactSection", Populate::only(["links"])),
            _ => Populate::all(),
        }
    }

    fn schema(self, cfg: &SiteConfig) -> Schema {
        match self {
            ViewKind::Footer => views::footer::schema(cfg),
            ViewKind::Cards => views::home::card_schema(cfg),
            ViewKind::FirstSection => views::home::first_section_schema(cfg),
            ViewKind::HomeHero => views::home::home_hero_schema(cfg),
            ViewKind::Welcome => views::home::welcome_schema(cfg),
            ViewKind::HomeGallery => views::gallery::home_schema(cfg),
            ViewKind::GalleryPage => views::gallery::page_schema(cfg),
            ViewKind::NewsItems => views::news::item_schema(cfg),
            ViewKind::NewsPage => views::news::page_schema(cfg),
            ViewKind::Faq => views::faq::schema(cfg),
            ViewKind::HairRemoval => views::info::hair_removal_schema(cfg),
            ViewKind::About => views::info::about_schema(cfg),
            ViewKind::PriceList => views::price_list::schema(cfg),
            ViewKind::Contact => views::contact::schema(cfg),
            ViewKind::StayUpdated => views::guides::stay_updated_schema(cfg),
            ViewKind::QuickFind => views::guides::quick_find_schema(cfg),
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Definitions and payloads
// ============================================================================

/// Normalized content of one view.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ViewPayload {
    Single(ViewRecord),
    Collection(Vec<ViewRecord>),
}

impl ViewPayload {
    pub fn to_json(&self) -> Value {
        match self {
            ViewPayload::Single(record) => record.to_json(),
            ViewPayload::Collection(records) => {
                Value::Array(records.iter().map(ViewRecord::to_json).collect())
            }
        }
    }

    /// Convert into a typed model.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::ViewShape`] naming the failing path on a model mismatch.
    pub fn into_typed<T: DeserializeOwned>(&self) -> ContentResult<T> {
        serde_path_to_error::deserialize::<_, T>(self.to_json()).map_err(|err| {
            let path = err.path().to_string();
            let source = err.into_inner();
            ContentError::ViewShape(format!("{path}: {source}"))
        })
    }
}

/// Everything needed to load one view.
#[derive(Clone, Debug)]
pub struct ViewDef {
    kind: ViewKind,
    query: ContentQuery,
    schema: Schema,
}

impl ViewDef {
    /// Build the definition of `kind` for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidValue`] if the collection name is invalid.
    pub fn new(kind: ViewKind, cfg: &SiteConfig) -> ContentResult<Self> {
        let collection = CollectionName::new(kind.collection())?;
        Ok(Self {
            kind,
            query: ContentQuery::new(collection, kind.populate()),
            schema: kind.schema(cfg),
        })
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn query(&self) -> &ContentQuery {
        &self.query
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Normalize a raw response for this view. Pure; no I/O.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::EmptyContent`] if the response has no usable record.
    pub fn normalize(&self, raw: &Value) -> ContentResult<ViewPayload> {
        match self.kind.cardinality() {
            Cardinality::Single => normalize(raw, &self.schema).map(ViewPayload::Single),
            Cardinality::Collection => {
                normalize_all(raw, &self.schema).map(ViewPayload::Collection)
            }
        }
    }
}

/// Definitions of every view, built once from the startup configuration.
#[derive(Clone, Debug)]
pub struct Catalog {
    defs: Vec<ViewDef>,
}

impl Catalog {
    /// Build every view definition.
    ///
    /// # Errors
    ///
    /// Returns an error if any view definition is invalid.
    pub fn new(cfg: &SiteConfig) -> ContentResult<Self> {
        let defs = ViewKind::ALL
            .into_iter()
            .map(|kind| ViewDef::new(kind, cfg))
            .collect::<ContentResult<Vec<_>>>()?;
        Ok(Self { defs })
    }

    pub fn get(&self, kind: ViewKind) -> &ViewDef {
        // `defs` is built from `ViewKind::ALL` in declaration order.
        &self.defs[kind as usize]
    }

    /// # Errors
    ///
    /// Returns [`ContentError::UnknownView`] if no view has that name.
    pub fn by_name(&self, name: &str) -> ContentResult<&ViewDef> {
        ViewKind::from_name(name).map(|kind| self.get(kind))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.defs.iter().map(|def| def.kind.name()).collect()
    }
}

// ============================================================================
// ContentService
// ============================================================================

/// Single-shot view loading over a [`ContentSource`].
///
/// Stateless per call: every load issues exactly one fetch. Cloning is cheap.
#[derive(Debug)]
pub struct ContentService<S> {
    source: Arc<S>,
    catalog: Arc<Catalog>,
}

impl<S> Clone for ContentService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<S: ContentSource> ContentService<S> {
    pub fn new(source: S, catalog: Catalog) -> Self {
        Self {
            source: Arc::new(source),
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and normalize one view.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::FetchFailed`] from the source, or [`ContentError::EmptyContent`]
    /// if the response has no usable record.
    pub async fn load(&self, kind: ViewKind) -> ContentResult<ViewPayload> {
        let def = self.catalog.get(kind);
        let raw = self.source.fetch(def.query()).await?;
        def.normalize(&raw)
    }

    /// Fetch, normalize and convert one view into its typed model.
    ///
    /// # Errors
    ///
    /// As [`Self::load`], plus [`ContentError::ViewShape`] on a model mismatch.
    pub async fn load_typed<V: View>(&self) -> ContentResult<V> {
        self.load(V::KIND).await?.into_typed()
    }
}
