use super::View;
use crate::catalog::ViewKind;
use crate::config::SiteConfig;
use crate::schema::{FieldSpec, ListSpec, Schema};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PriceItem {
    pub name: String,
    pub price: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PriceSection {
    pub category: String,
    pub icon: String,
    pub items: Vec<PriceItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PriceList {
    pub sections: Vec<PriceSection>,
    pub contact_title: String,
    pub contact_description: String,
    pub contact_button_url: String,
    pub contact_button_text: String,
    pub appointment_button_url: String,
    pub appointment_button_text: String,
}

impl View for PriceList {
    const KIND: ViewKind = ViewKind::PriceList;
}

const CONTACT_DESCRIPTION: &str = "Heb je vragen over een behandeling of wil je meerdere zones \
    combineren? Ik denk graag met jou mee. Aarzel niet om even contact op te nemen met \
    Laserstudio Marie. Wil je meteen een afspraak maken? Dat kan eenvoudig online!";

pub(crate) fn schema(cfg: &SiteConfig) -> Schema {
    let defaults = cfg.defaults();
    let item = Schema::new()
        .field(FieldSpec::text("name", ""))
        .field(FieldSpec::text("price", ""));
    let section = Schema::new()
        .field(FieldSpec::text("category", ""))
        .field(FieldSpec::text("icon", ""))
        .field(FieldSpec::list("items", ListSpec::of(item)));

    Schema::new()
        .field(FieldSpec::list("sections", ListSpec::of(section)).from("pricing_sections"))
        .field(FieldSpec::text("contact_title", "Maak een afspraak"))
        .field(FieldSpec::text("contact_description", CONTACT_DESCRIPTION))
        .field(FieldSpec::text("contact_button_url", defaults.contact_path.clone()))
        .field(FieldSpec::text("contact_button_text", "Contacteer mij"))
        .field(FieldSpec::text(
            "appointment_button_url",
            defaults.booking_url.clone(),
        ))
        .field(FieldSpec::text("appointment_button_text", "Online afspraak"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::views::test_support::cfg;
    use serde_json::json;

    #[test]
    fn three_level_sections_are_normalized() {
        let raw = json!({"data": [{
            "pricing_sections": [
                {"category": "Gezicht", "icon": "face", "items": [
                    {"name": "Bovenlip", "price": "€ 35"},
                    {"name": "Kin", "price": 40}
                ]},
                {"category": "Lichaam"}
            ],
            "contact_description": "   "
        }]});
        let list: PriceList = normalize(&raw, &schema(&cfg()))
            .expect("normalize")
            .into_typed()
            .expect("typed");

        assert_eq!(list.sections.len(), 2);
        assert_eq!(list.sections[0].items[1].price, "40");
        assert!(list.sections[1].items.is_empty());
        assert_eq!(list.contact_description, CONTACT_DESCRIPTION);
        assert_eq!(list.contact_button_url, "/contact");
    }
}
