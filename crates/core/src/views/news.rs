use super::View;
use crate::catalog::ViewKind;
use crate::config::SiteConfig;
use crate::schema::{FieldSpec, ListSpec, Schema};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
}

/// The `news-items` collection shown in the home page slider.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NewsFeed(pub Vec<NewsItem>);

impl View for NewsFeed {
    const KIND: ViewKind = ViewKind::NewsItems;
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsContact {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsCard {
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsPage {
    pub title: String,
    pub description: String,
    pub news_title: String,
    pub contact: NewsContact,
    pub cards: Vec<NewsCard>,
}

impl View for NewsPage {
    const KIND: ViewKind = ViewKind::NewsPage;
}

pub(crate) fn item_schema(cfg: &SiteConfig) -> Schema {
    Schema::new()
        .field(FieldSpec::text("title", "").from("Title"))
        .field(FieldSpec::text("description", "").from("Description"))
        .field(
            FieldSpec::media("image", cfg.media_url(), cfg.defaults().fallback_image.clone())
                .from("Image")
                .prefer_format("medium"),
        )
        .field(FieldSpec::text("link", "#").from("Link"))
}

pub(crate) fn page_schema(cfg: &SiteConfig) -> Schema {
    Schema::new()
        .field(FieldSpec::text("title", "Nieuws").from("Title"))
        .field(FieldSpec::text("description", "").from("Description"))
        .field(FieldSpec::text("news_title", "").from("News_title"))
        .field(
            FieldSpec::record(
                "contact",
                Schema::new()
                    .field(FieldSpec::text("title", "Contacteer mij").from("Title"))
                    .field(FieldSpec::text("description", "")),
            )
            .from("contact"),
        )
        .field(
            FieldSpec::list(
                "cards",
                ListSpec::of(
                    Schema::new()
                        .field(FieldSpec::text("title", "").from("Title"))
                        .field(FieldSpec::text("description", "").from("Description"))
                        .field(
                            FieldSpec::text("button_text", "").from("highlighted_texts_button"),
                        )
                        .field(
                            FieldSpec::text("button_url", cfg.defaults().contact_path.clone())
                                .from("highlighted_texts_button_url"),
                        ),
                ),
            )
            .from("NewsCardItem"),
        )
}
