use super::footer::{self, Footer};
use super::{button, Button, View};
use crate::catalog::ViewKind;
use crate::config::SiteConfig;
use crate::schema::{FieldSpec, ListSpec, Schema};
use serde::{Deserialize, Serialize};

/// Contact page: rich-text introduction, action buttons and the embedded footer record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Contact {
    pub title: String,
    /// Non-blank paragraphs; inline `[text](url)` links are left for the renderer.
    pub description: Vec<String>,
    pub buttons: Vec<Button>,
    pub footer: Footer,
}

impl View for Contact {
    const KIND: ViewKind = ViewKind::Contact;
}

pub(crate) fn schema(cfg: &SiteConfig) -> Schema {
    Schema::new()
        .field(FieldSpec::text("title", "Contact").from("Title"))
        .field(FieldSpec::paragraphs("description", &[]).from("Description"))
        .field(FieldSpec::list(
            "buttons",
            ListSpec::of(button("text", "url", "", "#")).skip_blank("text"),
        ))
        .field(FieldSpec::record("footer", footer::schema(cfg)))
}
