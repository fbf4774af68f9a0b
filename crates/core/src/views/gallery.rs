use super::{link_card, LinkCard, View};
use crate::catalog::ViewKind;
use crate::config::SiteConfig;
use crate::schema::{FieldSpec, ListSpec, Schema};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GalleryImage {
    pub id: f64,
    pub show_on_home: bool,
    pub url: String,
    pub alternative_text: String,
    pub width: f64,
    pub height: f64,
}

/// Home page gallery strip: only images flagged `show_on_home`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct HomeGallery {
    pub title: String,
    pub images: Vec<GalleryImage>,
}

impl View for HomeGallery {
    const KIND: ViewKind = ViewKind::HomeGallery;
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GalleryPage {
    pub title: String,
    pub description: Vec<String>,
    pub images: Vec<GalleryImage>,
    pub contact: LinkCard,
}

impl View for GalleryPage {
    const KIND: ViewKind = ViewKind::GalleryPage;
}

const GALLERY_TITLE: &str = "Onze Studio in Beeld";

const GALLERY_DESCRIPTION: &[&str] = &[
    "Ontdek via deze fotogalerij de rustgevende sfeer en professionele omgeving van Laserstudio Marie.",
    "Van de behandelruimte tot onze hoogwaardige apparatuur - alles is ingericht voor uw comfort en het beste resultaat.",
];

fn image_schema(cfg: &SiteConfig) -> Schema {
    Schema::new()
        .field(FieldSpec::number("id", 0.0))
        .field(FieldSpec::flag("show_on_home", false))
        .field(
            FieldSpec::media("url", cfg.media_url(), cfg.defaults().fallback_image.clone())
                .from("GalleryImage"),
        )
        .field(
            FieldSpec::text("alternative_text", "Gallery image")
                .from("GalleryImage.alternativeText"),
        )
        .field(FieldSpec::number("width", 0.0).from("GalleryImage.width"))
        .field(FieldSpec::number("height", 0.0).from("GalleryImage.height"))
}

pub(crate) fn home_schema(cfg: &SiteConfig) -> Schema {
    Schema::new()
        .field(FieldSpec::text("title", GALLERY_TITLE).from("GalleryItem.Title"))
        .field(
            FieldSpec::list(
                "images",
                ListSpec::of(image_schema(cfg)).filter_by("show_on_home"),
            )
            .from("GalleryItem.GalleryImages"),
        )
}

pub(crate) fn page_schema(cfg: &SiteConfig) -> Schema {
    Schema::new()
        .field(FieldSpec::text("title", GALLERY_TITLE).from("GalleryItem.Title"))
        .field(
            FieldSpec::paragraphs("description", GALLERY_DESCRIPTION)
                .from("GalleryItem.description"),
        )
        .field(
            FieldSpec::list("images", ListSpec::of(image_schema(cfg)))
                .from("GalleryItem.GalleryImages"),
        )
        .field(FieldSpec::record("contact", link_card()).from("ContactSection"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize, normalize_with_report};
    use crate::views::test_support::cfg;
    use serde_json::{json, Value};

    fn gallery_response() -> Value {
        json!({"data": [{
            "id": 1,
            "GalleryItem": {
                "Title": "Studio",
                "description": "Eerste alinea\nTweede alinea",
                "GalleryImages": [
                    {"id": 10, "show_on_home": true,
                     "GalleryImage": {"url": "/uploads/a.jpg", "alternativeText": "Ruimte", "width": 800, "height": 600}},
                    {"id": 11, "show_on_home": null, "GalleryImage": {"url": "/uploads/b.jpg"}},
                    {"id": 12, "show_on_home": false, "GalleryImage": {"url": "/uploads/c.jpg"}}
                ]
            },
            "ContactSection": [{
                "heading": "Langskomen?",
                "content": "Maak een afspraak",
                "links": [{"id": 1, "linktext": "Boek", "linkUrl": "/contact", "isButton": true}]
            }]
        }]})
    }

    #[test]
    fn home_gallery_only_keeps_show_on_home_images() {
        let gallery: HomeGallery = normalize(&gallery_response(), &home_schema(&cfg()))
            .expect("normalize")
            .into_typed()
            .expect("typed");
        assert_eq!(gallery.images.len(), 1);
        assert_eq!(gallery.images[0].id, 10.0);
        assert_eq!(gallery.images[0].url, "https://cms.test/uploads/a.jpg");
        assert_eq!(gallery.images[0].width, 800.0);
    }

    #[test]
    fn gallery_page_keeps_all_images_and_contact_card() {
        let page: GalleryPage = normalize(&gallery_response(), &page_schema(&cfg()))
            .expect("normalize")
            .into_typed()
            .expect("typed");
        assert_eq!(page.images.len(), 3);
        assert_eq!(page.images[1].alternative_text, "Gallery image");
        assert_eq!(page.description, vec!["Eerste alinea", "Tweede alinea"]);
        assert_eq!(page.contact.heading, "Langskomen?");
        assert!(page.contact.links[0].is_button);
    }

    #[test]
    fn fractional_dimensions_do_not_fail_the_view() {
        let raw = json!({"data": [{"GalleryItem": {"GalleryImages": [
            {"id": 10, "show_on_home": true,
             "GalleryImage": {"url": "/uploads/a.jpg", "width": 800.5, "height": "600.25"}},
            {"id": "12.5", "show_on_home": true,
             "GalleryImage": {"url": "/uploads/b.jpg", "width": "wide"}}
        ]}}]});
        let (record, issues) =
            normalize_with_report(&raw, &home_schema(&cfg())).expect("normalize");
        let gallery: HomeGallery = record.into_typed().expect("typed");

        assert_eq!(gallery.images[0].width, 800.5);
        assert_eq!(gallery.images[0].height, 600.25);
        assert_eq!(gallery.images[1].id, 12.5);
        assert_eq!(gallery.images[1].width, 0.0);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "images[1].width");
    }

    #[test]
    fn empty_gallery_item_takes_page_defaults() {
        let page: GalleryPage = normalize(&json!({"data": [{"id": 2}]}), &page_schema(&cfg()))
            .expect("normalize")
            .into_typed()
            .expect("typed");
        assert_eq!(page.title, GALLERY_TITLE);
        assert_eq!(page.description.len(), 2);
        assert!(page.images.is_empty());
        assert_eq!(page.contact.heading, "");
    }
}
