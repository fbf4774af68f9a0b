//! Guide pages with nested section content: "blijf op de hoogte" and "vind snel".

use super::{highlighted_text, link_card, link_item, HighlightedText, LinkCard, LinkItem, View};
use crate::catalog::ViewKind;
use crate::config::SiteConfig;
use crate::schema::{FieldSpec, ListSpec, Schema};
use serde::{Deserialize, Serialize};

// ============================================================================
// Blijf op de hoogte
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GuideListItem {
    pub title: String,
    pub description: String,
    pub is_bold: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GuideSection {
    pub title: String,
    pub description: String,
    pub items: Vec<GuideListItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HighlightedContact {
    pub title: String,
    pub description: String,
    pub highlighted_texts: Vec<HighlightedText>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StayUpdated {
    pub title: String,
    pub sections: Vec<GuideSection>,
    pub contact: HighlightedContact,
}

impl View for StayUpdated {
    const KIND: ViewKind = ViewKind::StayUpdated;
}

pub(crate) fn stay_updated_schema(cfg: &SiteConfig) -> Schema {
    let item = Schema::new()
        .field(FieldSpec::text("title", "").from("Title"))
        .field(FieldSpec::text("description", ""))
        .field(FieldSpec::flag("is_bold", false).from("isBald"));
    let section = Schema::new()
        .field(FieldSpec::text("title", "").from("Title"))
        .field(FieldSpec::text("description", ""))
        .field(FieldSpec::list("items", ListSpec::of(item)).from("list.listsitem"));
    let contact = Schema::new()
        .field(FieldSpec::text("title", "").from("Title"))
        .field(FieldSpec::text("description", ""))
        .field(FieldSpec::list(
            "highlighted_texts",
            ListSpec::of(highlighted_text(cfg)).skip_blank("text"),
        ));

    Schema::new()
        .field(FieldSpec::text("title", "Blijf op de hoogte").from("Title"))
        .field(
            FieldSpec::list("sections", ListSpec::of(section))
                .from("bliftop_main_content.sectionss"),
        )
        .field(FieldSpec::record("contact", contact).from("ContactSection"))
}

// ============================================================================
// Vind snel
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuickFindSection {
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "texts")]
    pub items: Vec<String>,
    pub links: Vec<LinkItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuickFind {
    pub title: String,
    pub heading: String,
    pub sections: Vec<QuickFindSection>,
    pub contact: LinkCard,
}

impl View for QuickFind {
    const KIND: ViewKind = ViewKind::QuickFind;
}

pub(crate) fn quick_find_schema(_cfg: &SiteConfig) -> Schema {
    let section = Schema::new()
        .field(FieldSpec::text("title", ""))
        .field(FieldSpec::text("description", ""))
        .field(
            FieldSpec::list(
                "items",
                ListSpec::of(Schema::new().field(FieldSpec::text("text", "").from("list_Item")))
                    .skip_blank("text"),
            )
            .from("lists"),
        )
        .field(FieldSpec::list("links", ListSpec::of(link_item())));

    Schema::new()
        .field(FieldSpec::text("title", "Vind snel").from("Title"))
        .field(FieldSpec::text("heading", "").from("mainContent.heading"))
        .field(FieldSpec::list("sections", ListSpec::of(section)).from("mainContent.sections"))
        .field(FieldSpec::record("contact", link_card()).from("ContactSection"))
}

/// Reads `[{ "text": .. }]` records as plain strings.
fn texts<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    struct Item {
        text: String,
    }
    let items = Vec::<Item>::deserialize(deserializer)?;
    Ok(items.into_iter().map(|item| item.text).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::views::test_support::cfg;
    use serde_json::json;

    #[test]
    fn stay_updated_walks_main_content_sections() {
        let raw = json!({"data": [{
            "Title": "Blijf op de hoogte",
            "bliftop_main_content": {
                "sectionss": [
                    {"Title": "Voor de behandeling", "description": "<p>Scheren</p>",
                     "list": {"listsitem": [
                         {"Title": "Niet harsen", "isBald": true},
                         {"Title": "Geen zon", "description": "2 weken"}
                     ]}},
                    {"Title": "Na de behandeling"}
                ]
            },
            "ContactSection": {
                "Title": "Vragen?",
                "description": "Contacteer Laserstudio Marie",
                "highlighted_texts": [
                    {"id": 1, "text": "Laserstudio Marie", "url": "/contact", "is_highlighted": true, "color": null},
                    {"id": 2, "text": ""}
                ]
            }
        }]});

        let page: StayUpdated = normalize(&raw, &stay_updated_schema(&cfg()))
            .expect("normalize")
            .into_typed()
            .expect("typed");
        assert_eq!(page.sections.len(), 2);
        assert!(page.sections[0].items[0].is_bold);
        assert_eq!(page.sections[0].items[1].description, "2 weken");
        assert!(page.sections[1].items.is_empty());
        assert_eq!(page.contact.highlighted_texts.len(), 1);
        assert_eq!(page.contact.highlighted_texts[0].color, "#8b8455");
        assert_eq!(page.contact.highlighted_texts[0].url, "/contact");
    }

    #[test]
    fn quick_find_reads_sections_and_first_contact_card() {
        let raw = json!({"data": [{
            "Title": "Vind snel",
            "mainContent": {
                "sections": [{
                    "title": "Prijzen",
                    "lists": [{"list_Item": "Gezicht"}, {"list_Item": null}, {"list_Item": "Benen"}],
                    "links": [{"id": 1, "linktext": "Prijslijst", "linkUrl": "/prijslijst", "isButton": true}]
                }]
            },
            "ContactSection": [{"heading": "Nog vragen?", "content": "Bel mij",
                "links": [{"linktext": "Bel mij", "linkUrl": "tel:0492318740"}]}]
        }]});

        let page: QuickFind = normalize(&raw, &quick_find_schema(&cfg()))
            .expect("normalize")
            .into_typed()
            .expect("typed");
        assert_eq!(page.sections[0].items, vec!["Gezicht", "Benen"]);
        assert_eq!(page.sections[0].links[0].url, "/prijslijst");
        assert_eq!(page.heading, "");
        assert_eq!(page.contact.heading, "Nog vragen?");
        assert!(!page.contact.links[0].is_button);
    }
}
