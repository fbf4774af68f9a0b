use super::{button, Button, View};
use crate::catalog::ViewKind;
use crate::config::SiteConfig;
use crate::schema::{FieldSpec, ListSpec, Schema};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FaqEntry {
    pub order: f64,
    pub question: String,
    pub answer: String,
}

/// Frequently asked questions, in ascending `Order`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Faq {
    pub entries: Vec<FaqEntry>,
    pub contact_title: String,
    pub contact_description: String,
    pub primary_cta: Button,
    pub secondary_cta: Button,
}

impl View for Faq {
    const KIND: ViewKind = ViewKind::Faq;
}

const CONTACT_DESCRIPTION: &str = "Zit je nog met een vraag die niet wordt beantwoord op deze pagina? \
    Contacteer Laserstudio Marie dan vandaag nog. Wil je meteen een afspraak maken? \
    Dat kan eenvoudig online!";

pub(crate) fn schema(cfg: &SiteConfig) -> Schema {
    let defaults = cfg.defaults();
    Schema::new()
        .field(
            FieldSpec::list(
                "entries",
                ListSpec::of(
                    Schema::new()
                        .field(FieldSpec::number("order", 0.0).from("Order"))
                        .field(FieldSpec::text("question", "").from("Question"))
                        // The CMS attribute is spelled `Anwer`.
                        .field(FieldSpec::text("answer", "").from("Anwer").from("Answer")),
                )
                .order_by("Order"),
            )
            .from("FAQ"),
        )
        .field(FieldSpec::text("contact_title", "Contacteer mij"))
        .field(FieldSpec::text("contact_description", CONTACT_DESCRIPTION))
        .field(
            FieldSpec::record(
                "primary_cta",
                button("Text", "URL", "Contacteer mij", &defaults.contact_path),
            )
            .from("PrimaryCTA"),
        )
        .field(
            FieldSpec::record(
                "secondary_cta",
                button("Text", "URL", "Online afspraak", &defaults.booking_url),
            )
            .from("SecondaryCTA"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::views::test_support::cfg;
    use serde_json::json;

    #[test]
    fn entries_are_sorted_by_order() {
        let raw = json!({"data": [{
            "FAQ": [
                {"Order": 2, "Question": "Doet het pijn?", "Anwer": "Nauwelijks."},
                {"Order": 1, "Question": "Hoeveel sessies?", "Anwer": "Zes tot acht."},
                {"Question": "Zonder volgorde"}
            ],
            "PrimaryCTA": {"Text": "Bel mij", "URL": "tel:0492318740"}
        }]});
        let faq: Faq = normalize(&raw, &schema(&cfg()))
            .expect("normalize")
            .into_typed()
            .expect("typed");

        let questions: Vec<&str> = faq.entries.iter().map(|e| e.question.as_str()).collect();
        assert_eq!(
            questions,
            vec!["Zonder volgorde", "Hoeveel sessies?", "Doet het pijn?"]
        );
        let orders: Vec<f64> = faq.entries.iter().map(|e| e.order).collect();
        assert_eq!(orders, vec![0.0, 1.0, 2.0]);
        assert_eq!(faq.entries[1].answer, "Zes tot acht.");
        assert_eq!(faq.primary_cta.text, "Bel mij");
        assert_eq!(faq.secondary_cta.url, "https://salonkee.be/salon/laserstudio-marie?lang=nl");
    }
}
