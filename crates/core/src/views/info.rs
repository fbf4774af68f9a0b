//! Long-form information pages: laser hair removal and "over mij".

use super::{social_links, tel_link, SocialLink, View};
use crate::catalog::ViewKind;
use crate::config::SiteConfig;
use crate::schema::{FieldSpec, Schema};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Picture {
    pub url: String,
    pub alternative_text: String,
}

// ============================================================================
// Laserontharing
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HairRemoval {
    pub header_title: String,
    pub first_section_description: String,
    pub first_section_image: Picture,
    pub benefits_title: String,
    pub benefits_description: String,
    pub when_title: String,
    pub when_description: String,
    pub limitation_title: String,
    pub limitations_description: String,
    pub contact_title: String,
    pub contact_description: String,
    pub contact_button_url: String,
    pub contact_button_text: String,
    pub appointment_button_url: String,
    pub appointment_button_text: String,
    pub social_links: Vec<SocialLink>,
}

impl View for HairRemoval {
    const KIND: ViewKind = ViewKind::HairRemoval;
}

/// `(field, default)` for the plain text fields of the laser page.
const HAIR_REMOVAL_TEXT: &[(&str, &str)] = &[
    ("header_title", "Laserontharing voor een stralende en gladde huid"),
    (
        "first_section_description",
        "Laserontharing is de toekomst van haarverwijdering. Bij Laserstudio Marie werk ik hiervoor \
         uitsluitend met DIODE LAS ICE 4-WAVE MASTER (QUATTRO-PRO)...",
    ),
    ("benefits_title", "Voordelen van mijn laserontharingstechniek"),
    (
        "benefits_description",
        "Mijn behandelingen zijn vrijwel pijnloos dankzij een uniek koelsysteem...",
    ),
    ("when_title", "Wanneer is laserontharing mogelijk?"),
    (
        "when_description",
        "Laserontharing werkt alleen op haren die zich in de groeifase bevinden...",
    ),
    ("limitation_title", "Beperkingen en contra-indicaties"),
    (
        "limitations_description",
        "Helaas kan ik geen resultaten garanderen voor grijs of rood haar...",
    ),
    ("contact_title", "Contacteer mij"),
    (
        "contact_description",
        "Aarzel niet om contact op te nemen met Laserstudio Marie mocht je nog vragen hebben...",
    ),
    ("contact_button_text", "Contacteer mij"),
    ("appointment_button_text", "Online afspraak"),
];

fn text_fields(mut schema: Schema, fields: &[(&str, &str)]) -> Schema {
    for (name, default) in fields {
        schema = schema.field(FieldSpec::text(*name, *default));
    }
    schema
}

pub(crate) fn hair_removal_schema(cfg: &SiteConfig) -> Schema {
    let defaults = cfg.defaults();
    let image = Schema::new()
        .field(
            FieldSpec::media("url", cfg.media_url(), defaults.fallback_image.clone())
                .from("first_section_image"),
        )
        .field(
            FieldSpec::text("alternative_text", "Laserontharing")
                .from("first_section_image_alt")
                .from("first_section_image.alternativeText"),
        );

    text_fields(Schema::new(), HAIR_REMOVAL_TEXT)
        // The CMS stores the image and its alt text as two sibling attributes.
        .field(FieldSpec::record("first_section_image", image).inline())
        .field(FieldSpec::text("contact_button_url", defaults.contact_path.clone()))
        .field(FieldSpec::text(
            "appointment_button_url",
            defaults.booking_url.clone(),
        ))
        .field(social_links("social_links", "social_links", cfg))
}

// ============================================================================
// Over mij
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct About {
    pub intro_badge: String,
    pub intro_title: String,
    pub intro_highlighted_text: String,
    pub intro_description: String,
    pub story_title: String,
    pub story_description: String,
    pub benefits_title: String,
    pub benefits_description: String,
    pub experience_title: String,
    pub experience_description: String,
    pub content_image: Picture,
    pub cta_badge: String,
    pub cta_title: String,
    pub cta_description: String,
    pub cta_booking_url: String,
    pub cta_booking_text: String,
    pub cta_info_url: String,
    pub cta_info_text: String,
    pub cta_phone: String,
    pub cta_phone_link: String,
}

impl View for About {
    const KIND: ViewKind = ViewKind::About;
}

const ABOUT_TEXT: &[(&str, &str)] = &[
    ("intro_badge", "PERSOONLIJKE AANDACHT"),
    ("intro_title", "Marie, jouw laserontharingsspecialist"),
    ("intro_highlighted_text", "laserontharingsspecialist"),
    (
        "intro_description",
        "Met jarenlange ervaring en een persoonlijke aanpak help ik je naar een blijvend haarvrij resultaat.",
    ),
    ("story_title", "Mijn verhaal"),
    (
        "story_description",
        "Als moeder en ondernemer weet ik hoe belangrijk zelfvertrouwen is...",
    ),
    ("benefits_title", "De voordelen"),
    (
        "benefits_description",
        "Laserontharing biedt meer dan alleen een gladde huid...",
    ),
    ("experience_title", "De ervaring"),
    (
        "experience_description",
        "Mijn studio is ontworpen voor ultiem comfort...",
    ),
    ("cta_badge", "START NU"),
    ("cta_title", "Klaar voor een transformatie?"),
    (
        "cta_description",
        "Boek een gratis consult of start direct met je eerste behandeling.",
    ),
    ("cta_booking_text", "Laserstudio Marie"),
    ("cta_info_text", "Meer informatie"),
];

pub(crate) fn about_schema(cfg: &SiteConfig) -> Schema {
    let defaults = cfg.defaults();
    text_fields(Schema::new(), ABOUT_TEXT)
        .field(
            FieldSpec::record(
                "content_image",
                Schema::new()
                    .field(FieldSpec::media(
                        "url",
                        cfg.media_url(),
                        defaults.fallback_image.clone(),
                    ))
                    .field(
                        FieldSpec::text("alternative_text", "Marie van Laserstudio Marie")
                            .from("alternativeText"),
                    ),
            ),
        )
        .field(FieldSpec::text("cta_booking_url", defaults.booking_url.clone()))
        .field(FieldSpec::text("cta_info_url", defaults.contact_path.clone()))
        .field(FieldSpec::text("cta_phone", defaults.phone.clone()))
        .field(
            FieldSpec::text("cta_phone_link", defaults.phone.clone())
                .from("cta_phone")
                .map_text(tel_link),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{defaults_of, normalize};
    use crate::views::test_support::cfg;
    use serde_json::json;

    #[test]
    fn hair_removal_image_is_built_from_sibling_fields() {
        let raw = json!({"data": [{
            "header_title": "Laser",
            "first_section_image": {"url": "/uploads/laser.jpg", "alternativeText": "ignored"},
            "first_section_image_alt": "Toestel",
            "social_links": [{"platform": "WhatsApp", "url": "https://wa.me/1"}]
        }]});
        let page: HairRemoval = normalize(&raw, &hair_removal_schema(&cfg()))
            .expect("normalize")
            .into_typed()
            .expect("typed");
        assert_eq!(page.header_title, "Laser");
        assert_eq!(page.first_section_image.url, "https://cms.test/uploads/laser.jpg");
        assert_eq!(page.first_section_image.alternative_text, "Toestel");
        assert_eq!(page.when_title, "Wanneer is laserontharing mogelijk?");
        assert_eq!(page.social_links[0].icon_color, "#8b8455");
    }

    #[test]
    fn hair_removal_defaults_convert() {
        let page: HairRemoval = defaults_of(&hair_removal_schema(&cfg()))
            .into_typed()
            .expect("typed");
        assert_eq!(page.first_section_image.url, "/fallback-image.jpg");
        assert_eq!(page.contact_button_url, "/contact");
    }

    #[test]
    fn about_reads_single_object_and_defaults_phone() {
        let raw = json!({"data": {
            "intro_title": "Hallo",
            "content_image": {"url": "/uploads/marie.jpg"}
        }});
        let about: About = normalize(&raw, &about_schema(&cfg()))
            .expect("normalize")
            .into_typed()
            .expect("typed");
        assert_eq!(about.intro_title, "Hallo");
        assert_eq!(about.intro_badge, "PERSOONLIJKE AANDACHT");
        assert_eq!(about.content_image.url, "https://cms.test/uploads/marie.jpg");
        assert_eq!(about.content_image.alternative_text, "Marie van Laserstudio Marie");
        assert_eq!(about.cta_phone, "0492 31 87 40");
        assert_eq!(about.cta_phone_link, "tel:0492318740");
    }
}
