//! Typed view models.
//!
//! Each submodule owns the schema of one or more views (built from [`SiteConfig`]) and the typed
//! model those views convert into. The schema is the source of truth for field names and
//! defaults; the model only gives callers named fields.
//!
//! Output field names are snake_case regardless of the CMS attribute names (`Title`, `Anwer`,
//! `linkUrl`, ...), which only appear as schema sources.

pub mod contact;
pub mod faq;
pub mod footer;
pub mod gallery;
pub mod guides;
pub mod home;
pub mod info;
pub mod news;
pub mod price_list;

use crate::catalog::ViewKind;
use crate::config::SiteConfig;
use crate::schema::{FieldSpec, ListSpec, Schema};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A typed model for one catalog view.
pub trait View: DeserializeOwned {
    const KIND: ViewKind;
}

// ============================================================================
// Shared building blocks
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon_color: String,
}

/// A fragment of a title or paragraph that may be emphasised or linked.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HighlightedText {
    pub text: String,
    pub is_highlighted: bool,
    pub color: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LinkItem {
    pub text: String,
    pub url: String,
    pub is_button: bool,
}

/// Call-to-action block with a heading, body text and links.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LinkCard {
    pub heading: String,
    pub content: String,
    pub links: Vec<LinkItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Button {
    pub text: String,
    pub url: String,
}

pub(crate) fn social_link(cfg: &SiteConfig) -> Schema {
    Schema::new()
        .field(FieldSpec::text("platform", ""))
        .field(FieldSpec::text("url", ""))
        .field(FieldSpec::text("icon_color", cfg.defaults().accent_color.clone()))
}

pub(crate) fn social_links(name: &str, source: &str, cfg: &SiteConfig) -> FieldSpec {
    FieldSpec::list(name, ListSpec::of(social_link(cfg))).from(source)
}

pub(crate) fn highlighted_text(cfg: &SiteConfig) -> Schema {
    Schema::new()
        .field(FieldSpec::text("text", ""))
        .field(FieldSpec::flag("is_highlighted", false))
        .field(FieldSpec::text("color", cfg.defaults().accent_color.clone()))
        .field(FieldSpec::text("url", ""))
}

pub(crate) fn link_item() -> Schema {
    Schema::new()
        .field(FieldSpec::text("text", "").from("linktext").from("text"))
        .field(FieldSpec::text("url", "").from("linkUrl").from("url"))
        .field(FieldSpec::flag("is_button", false).from("isButton"))
}

pub(crate) fn link_card() -> Schema {
    Schema::new()
        .field(FieldSpec::text("heading", "").from("heading").from("Title"))
        .field(FieldSpec::text("content", "").from("content").from("description"))
        .field(FieldSpec::list("links", ListSpec::of(link_item())))
}

pub(crate) fn button(text_source: &str, url_source: &str, text: &str, url: &str) -> Schema {
    Schema::new()
        .field(FieldSpec::text("text", text).from(text_source))
        .field(FieldSpec::text("url", url).from(url_source))
}

/// `tel:` URI for a display phone number (`0492 31 87 40` → `tel:0492318740`).
pub(crate) fn tel_link(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::{SiteConfig, SiteDefaults};
    use studio_types::BaseUrl;

    pub(crate) fn cfg() -> SiteConfig {
        SiteConfig::new(
            BaseUrl::parse("https://cms.test").expect("base url"),
            None,
            SiteDefaults::default(),
        )
        .expect("site config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use serde_json::json;

    #[test]
    fn tel_link_keeps_digits_only() {
        assert_eq!(tel_link("0492 31 87 40"), "tel:0492318740");
        assert_eq!(tel_link("+32 492/31.87.40"), "tel:+32492318740");
    }

    #[test]
    fn link_item_reads_cms_attribute_names() {
        let schema = Schema::new().field(FieldSpec::list("links", ListSpec::of(link_item())));
        let raw = json!({"links": [{"linktext": "Bel", "linkUrl": "tel:1", "isButton": true}]});
        let record = normalize(&raw, &schema).expect("normalize");
        let link = &record.list("links").expect("links")[0];
        assert_eq!(link.text("text"), Some("Bel"));
        assert_eq!(link.text("url"), Some("tel:1"));
        assert_eq!(link.flag("is_button"), Some(true));
    }

    #[test]
    fn social_link_colour_defaults_to_accent() {
        let cfg = test_support::cfg();
        let schema = Schema::new().field(social_links("social", "SocialLink", &cfg));
        let raw = json!({"SocialLink": [{"platform": "Instagram", "url": "https://ig", "icon_color": null}]});
        let record = normalize(&raw, &schema).expect("normalize");
        let link = &record.list("social").expect("social")[0];
        assert_eq!(link.text("icon_color"), Some("#8b8455"));
    }
}
