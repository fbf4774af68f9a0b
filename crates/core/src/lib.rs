//! # Studio Core
//!
//! Content layer for the Laserstudio Marie site.
//!
//! This crate turns loosely-shaped headless-CMS responses into fully-populated view records:
//! - [`populate`]: relation-population directives rendered as CMS query strings
//! - [`source`]: the fetch seam and its HTTP implementation
//! - [`shape`] and [`normalize`]: flat/`attributes` record unwrapping and schema-driven normalization
//! - [`views`] and [`catalog`]: one schema and typed model per page section
//! - [`controller`]: the per-view load state machine
//!
//! **No transport concerns**: REST handlers and the CLI live in `api-rest` and `studio-cli`.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod normalize;
pub mod populate;
pub mod schema;
pub mod shape;
pub mod source;
pub mod views;

pub use catalog::{Cardinality, Catalog, ContentService, ViewDef, ViewKind, ViewPayload};
pub use config::{load_site_defaults, parse_site_defaults, NavItem, SiteConfig, SiteDefaults};
pub use controller::{ErrorNotice, ViewController, ViewState};
pub use error::{ContentError, ContentResult, FetchFailure};
pub use normalize::{normalize, normalize_all, FieldValue, MalformedField, ViewRecord};
pub use populate::Populate;
pub use schema::{FieldSpec, ListSpec, Schema};
pub use source::{read_raw, ContentQuery, ContentSource, HttpContentSource};
pub use views::View;
