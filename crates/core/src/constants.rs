//! Constants used throughout the studio core crate.
//!
//! Site-wide fallback values live here once. Views read them through
//! [`SiteDefaults`](crate::config::SiteDefaults) rather than hardcoding their own copies.

/// Default CMS origin when no `STUDIO_CONTENT_URL` is configured.
pub const DEFAULT_CONTENT_URL: &str = "https://my-strapi-backend.fly.dev";

/// Path prefix under which the CMS serves its REST collections.
pub const API_PATH_PREFIX: &str = "api";

/// Studio phone number shown when the CMS does not provide one.
pub const DEFAULT_PHONE: &str = "0492 31 87 40";

/// Online booking page.
pub const DEFAULT_BOOKING_URL: &str = "https://salonkee.be/salon/laserstudio-marie?lang=nl";

/// In-site contact route.
pub const DEFAULT_CONTACT_PATH: &str = "/contact";

/// Brand colour used for icons and highlighted text without an explicit colour.
pub const DEFAULT_ACCENT_COLOR: &str = "#8b8455";

/// Site-local image shown when a media field is absent.
pub const DEFAULT_FALLBACK_IMAGE: &str = "/fallback-image.jpg";

/// Site-local slider images used when the hero section has no slider images.
pub const DEFAULT_SLIDER_FALLBACKS: &[(&str, &str)] = &[
    ("/assets/cardphotos/21.jpg", "Fallback Image 1"),
    ("/assets/cardphotos/67.jpg", "Fallback Image 2"),
    ("/assets/cardphotos/68.jpg", "Fallback Image 3"),
];

/// Navigation target that resolves to the configured booking URL.
pub const BOOKING_NAV_TARGET: &str = "@booking";

/// Navigation entries as `(label, target)`.
pub const DEFAULT_NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Over mij", "/over-mij"),
    ("Laserontharing", "/laserontharing"),
    ("Prijslijst", "/prijslijst"),
    ("FAQ", "/faq"),
    ("Nieuws", "/nieuws"),
    ("Galerij", "/galerij"),
    ("Afspraak", BOOKING_NAV_TARGET),
    ("Contact", DEFAULT_CONTACT_PATH),
];
