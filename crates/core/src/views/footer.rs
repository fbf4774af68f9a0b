use super::{social_links, tel_link, SocialLink, View};
use crate::catalog::ViewKind;
use crate::config::SiteConfig;
use crate::schema::{FieldSpec, ListSpec, Schema};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct OpeningHour {
    pub day: String,
    pub hour: String,
}

/// Site footer: opening hours, address card and social links.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Footer {
    pub open_hours: Vec<OpeningHour>,
    pub address_line_1: String,
    pub address_line_2: String,
    pub map_embed_url: String,
    pub location_link: String,
    pub phone: String,
    pub phone_link: String,
    pub email: String,
    pub vat: String,
    pub social_links: Vec<SocialLink>,
}

impl View for Footer {
    const KIND: ViewKind = ViewKind::Footer;
}

pub(crate) fn schema(cfg: &SiteConfig) -> Schema {
    let phone = cfg.defaults().phone.clone();
    Schema::new()
        .field(FieldSpec::list(
            "open_hours",
            ListSpec::of(
                Schema::new()
                    .field(FieldSpec::text("day", ""))
                    .field(FieldSpec::text("hour", "")),
            ),
        ))
        .field(FieldSpec::text("address_line_1", ""))
        .field(FieldSpec::text("address_line_2", ""))
        .field(FieldSpec::text("map_embed_url", ""))
        .field(FieldSpec::text("location_link", ""))
        .field(FieldSpec::text("phone", phone.clone()))
        .field(
            FieldSpec::text("phone_link", phone)
                .from("phone")
                .map_text(tel_link),
        )
        .field(FieldSpec::text("email", ""))
        .field(FieldSpec::text("vat", ""))
        .field(social_links("social_links", "SocialLink", cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{defaults_of, normalize};
    use crate::views::test_support::cfg;
    use serde_json::json;

    #[test]
    fn missing_footer_fields_take_site_defaults() {
        let footer: Footer = defaults_of(&schema(&cfg())).into_typed().expect("typed footer");
        assert_eq!(footer.phone, "0492 31 87 40");
        assert_eq!(footer.phone_link, "tel:0492318740");
        assert!(footer.open_hours.is_empty());
        assert!(footer.social_links.is_empty());
    }

    #[test]
    fn wrapped_footer_is_read_through_attributes() {
        let raw = json!({"data": [{"id": 1, "attributes": {
            "open_hours": [{"day": "Maandag", "hour": "Gesloten"}],
            "address_line_1": "Kerkstraat 1",
            "location_link": "https://maps.example.com",
            "phone": "0470 00 00 00",
            "SocialLink": [{"platform": "Facebook", "url": "https://fb", "icon_color": "#fff"}]
        }}]});

        let footer: Footer = normalize(&raw, &schema(&cfg()))
            .expect("normalize")
            .into_typed()
            .expect("typed footer");
        assert_eq!(footer.open_hours[0].hour, "Gesloten");
        assert_eq!(footer.address_line_1, "Kerkstraat 1");
        assert_eq!(footer.location_link, "https://maps.example.com");
        assert_eq!(footer.phone_link, "tel:0470000000");
        assert_eq!(footer.social_links[0].icon_color, "#fff");
        assert_eq!(footer.email, "");
    }
}
