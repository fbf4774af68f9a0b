//! Home page sections: service cards, the two hero variants and the welcome block.

use super::{highlighted_text, social_links, tel_link, HighlightedText, SocialLink, View};
use crate::catalog::ViewKind;
use crate::config::SiteConfig;
use crate::normalize::{FieldValue, ViewRecord};
use crate::schema::{FieldSpec, ListSpec, Schema};
use serde::{Deserialize, Serialize};

// ============================================================================
// Cards
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CardHighlight {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Card {
    pub id: f64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub highlights: Vec<CardHighlight>,
}

/// Every card of the `cards` collection, in CMS order.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CardDeck(pub Vec<Card>);

impl View for CardDeck {
    const KIND: ViewKind = ViewKind::Cards;
}

pub(crate) fn card_schema(cfg: &SiteConfig) -> Schema {
    Schema::new()
        .field(FieldSpec::number("id", 0.0))
        .field(FieldSpec::text("title", "Untitled").from("Title"))
        .field(FieldSpec::text("description", "").from("Description"))
        .field(
            FieldSpec::media("image", cfg.media_url(), cfg.defaults().fallback_image.clone())
                .from("Image"),
        )
        .field(FieldSpec::text("link", "#").from("Link"))
        .field(
            FieldSpec::list(
                "highlights",
                ListSpec::of(Schema::new().field(FieldSpec::text("text", ""))).skip_blank("text"),
            )
            .from("CardHighlight"),
        )
}

// ============================================================================
// First section (hero with slider)
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SliderImage {
    pub url: String,
    pub alternative_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FirstSection {
    pub title: String,
    pub highlighted_texts: Vec<HighlightedText>,
    pub description: String,
    pub cta_text: String,
    pub show_arrow_icon: bool,
    pub show_phone_button: bool,
    pub variant: String,
    pub slider_images: Vec<SliderImage>,
    pub social_links: Vec<SocialLink>,
    pub phone: String,
    pub phone_link: String,
}

impl View for FirstSection {
    const KIND: ViewKind = ViewKind::FirstSection;
}

const FIRST_SECTION_TITLE: &str = "Zijdezachte huid met permanente laserontharing";

/// Title fragments shown when the CMS has none; the first and last are emphasised.
const FIRST_SECTION_FRAGMENTS: &[(&str, bool)] = &[
    ("Zijdezachte", true),
    (" huid met permanente ", false),
    ("laserontharing", true),
];

fn fragment(text: &str, is_highlighted: bool, color: &str) -> ViewRecord {
    ViewRecord::new()
        .with("text", FieldValue::Text(text.into()))
        .with("is_highlighted", FieldValue::Flag(is_highlighted))
        .with("color", FieldValue::Text(color.into()))
        .with("url", FieldValue::Text(String::new()))
}

pub(crate) fn first_section_schema(cfg: &SiteConfig) -> Schema {
    let defaults = cfg.defaults();
    let fragments = FIRST_SECTION_FRAGMENTS
        .iter()
        .map(|(text, highlighted)| fragment(text, *highlighted, &defaults.accent_color))
        .collect();
    let slides = defaults
        .slider_fallbacks
        .iter()
        .map(|image| {
            ViewRecord::new()
                .with("url", FieldValue::Text(image.url.clone()))
                .with(
                    "alternative_text",
                    FieldValue::Text(image.alternative_text.clone()),
                )
        })
        .collect();

    Schema::new()
        .field(FieldSpec::text("title", FIRST_SECTION_TITLE).from("Title"))
        .field(FieldSpec::list(
            "highlighted_texts",
            ListSpec::of(highlighted_text(cfg)).or_fallback(fragments),
        ))
        .field(FieldSpec::text(
            "description",
            "Professionele behandelingen voor een blijvend glad resultaat zonder irritatie.",
        ))
        .field(FieldSpec::text("cta_text", "Maak een afspraak"))
        .field(FieldSpec::flag("show_arrow_icon", false))
        .field(FieldSpec::flag("show_phone_button", false))
        .field(FieldSpec::text("variant", "default"))
        .field(FieldSpec::list(
            "slider_images",
            ListSpec::of(
                Schema::new()
                    .field(
                        FieldSpec::media("url", cfg.media_url(), defaults.fallback_image.clone())
                            .from("formats.medium.url")
                            .from("url"),
                    )
                    .field(
                        FieldSpec::text("alternative_text", "Treatment example")
                            .from("alternativeText"),
                    ),
            )
            .or_fallback(slides),
        ))
        .field(social_links("social_links", "social_links", cfg))
        .field(FieldSpec::text("phone", defaults.phone.clone()))
        .field(
            FieldSpec::text("phone_link", defaults.phone.clone())
                .from("phone")
                .map_text(tel_link),
        )
}

// ============================================================================
// Home hero
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HomeHero {
    pub main_title: String,
    pub highlighted_texts: Vec<HighlightedText>,
    pub hero_image: String,
    pub social_links: Vec<SocialLink>,
    pub primary_button_text: String,
    pub primary_button_link: String,
}

impl View for HomeHero {
    const KIND: ViewKind = ViewKind::HomeHero;
}

pub(crate) fn home_hero_schema(cfg: &SiteConfig) -> Schema {
    let defaults = cfg.defaults();
    Schema::new()
        .field(FieldSpec::text("main_title", ""))
        .field(FieldSpec::list(
            "highlighted_texts",
            ListSpec::of(highlighted_text(cfg)),
        ))
        .field(FieldSpec::media(
            "hero_image",
            cfg.media_url(),
            defaults.fallback_image.clone(),
        ))
        .field(social_links("social_links", "social_links", cfg))
        .field(FieldSpec::text("primary_button_text", "Online afspraak"))
        .field(FieldSpec::text(
            "primary_button_link",
            defaults.booking_url.clone(),
        ))
}

// ============================================================================
// Welcome
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubSection {
    pub subtitle: String,
    pub description: String,
    pub link: String,
    pub link_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Welcome {
    pub main_title: String,
    pub main_description: String,
    pub main_link: String,
    pub sub_sections: Vec<SubSection>,
}

impl View for Welcome {
    const KIND: ViewKind = ViewKind::Welcome;
}

pub(crate) fn welcome_schema(_cfg: &SiteConfig) -> Schema {
    Schema::new()
        .field(FieldSpec::text("main_title", "").from("MainTitle"))
        .field(FieldSpec::text("main_description", "").from("MainDescription"))
        .field(FieldSpec::text("main_link", "#").from("MainLink"))
        .field(
            FieldSpec::list(
                "sub_sections",
                ListSpec::of(
                    Schema::new()
                        .field(FieldSpec::text("subtitle", "").from("Subtitle"))
                        .field(FieldSpec::text("description", "").from("Description"))
                        .field(FieldSpec::text("link", "#").from("Link"))
                        .field(FieldSpec::text("link_text", "").from("LinkText")),
                ),
            )
            .from("SubSection"),
        )
}
