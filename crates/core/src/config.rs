//! Site configuration.
//!
//! Configuration is resolved once at process startup and then passed into the catalog and
//! services. Nothing in this crate reads environment variables while serving a view; the binary
//! collects the raw values and hands them to [`SiteConfig::from_env_values`].
//!
//! Site-wide fallbacks (phone number, booking link, fallback images, navigation) are held in
//! [`SiteDefaults`]. They can be overridden with a YAML file whose keys mirror the struct fields;
//! any key left out keeps its built-in value.

use crate::constants::{
    BOOKING_NAV_TARGET, DEFAULT_ACCENT_COLOR, DEFAULT_BOOKING_URL, DEFAULT_CONTACT_PATH,
    DEFAULT_CONTENT_URL, DEFAULT_FALLBACK_IMAGE, DEFAULT_NAV_ITEMS, DEFAULT_PHONE,
    DEFAULT_SLIDER_FALLBACKS,
};
use crate::error::{ContentError, ContentResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use studio_types::BaseUrl;

/// One navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    pub label: String,
    pub target: String,
}

/// An image bundled with the site, used where the CMS provides none.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LocalImage {
    pub url: String,
    pub alternative_text: String,
}

/// Fallback values shared by every view.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteDefaults {
    pub phone: String,
    pub booking_url: String,
    pub contact_path: String,
    pub accent_color: String,
    pub fallback_image: String,
    pub slider_fallbacks: Vec<LocalImage>,
    pub nav_items: Vec<NavItem>,
}

impl Default for SiteDefaults {
    fn default() -> Self {
        Self {
            phone: DEFAULT_PHONE.into(),
            booking_url: DEFAULT_BOOKING_URL.into(),
            contact_path: DEFAULT_CONTACT_PATH.into(),
            accent_color: DEFAULT_ACCENT_COLOR.into(),
            fallback_image: DEFAULT_FALLBACK_IMAGE.into(),
            slider_fallbacks: DEFAULT_SLIDER_FALLBACKS
                .iter()
                .map(|(url, alt)| LocalImage {
                    url: (*url).into(),
                    alternative_text: (*alt).into(),
                })
                .collect(),
            nav_items: DEFAULT_NAV_ITEMS
                .iter()
                .map(|(label, target)| NavItem {
                    label: (*label).into(),
                    target: (*target).into(),
                })
                .collect(),
        }
    }
}

impl SiteDefaults {
    /// Navigation entries with the booking placeholder resolved to [`Self::booking_url`].
    pub fn navigation(&self) -> Vec<NavItem> {
        self.nav_items
            .iter()
            .map(|item| NavItem {
                label: item.label.clone(),
                target: if item.target == BOOKING_NAV_TARGET {
                    self.booking_url.clone()
                } else {
                    item.target.clone()
                },
            })
            .collect()
    }

    /// Validate the values that views rely on being non-empty.
    fn validate(&self) -> ContentResult<()> {
        let required = [
            ("phone", &self.phone),
            ("booking_url", &self.booking_url),
            ("contact_path", &self.contact_path),
            ("accent_color", &self.accent_color),
            ("fallback_image", &self.fallback_image),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ContentError::Config(format!("{name} cannot be empty")));
            }
        }
        Ok(())
    }
}

/// Configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    content_url: BaseUrl,
    media_url: BaseUrl,
    request_timeout: Option<Duration>,
    defaults: SiteDefaults,
}

impl SiteConfig {
    /// Create a new `SiteConfig`.
    ///
    /// `media_url` defaults to `content_url` when `None`; the CMS normally serves uploads from
    /// its own origin.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Config`] if a required default is blank.
    pub fn new(
        content_url: BaseUrl,
        media_url: Option<BaseUrl>,
        defaults: SiteDefaults,
    ) -> ContentResult<Self> {
        defaults.validate()?;
        let media_url = media_url.unwrap_or_else(|| content_url.clone());
        Ok(Self {
            content_url,
            media_url,
            request_timeout: None,
            defaults,
        })
    }

    /// Set an explicit per-request timeout. Without one the transport default applies.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build configuration from raw environment values.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Arguments
    ///
    /// * `content_url` - value of `STUDIO_CONTENT_URL`
    /// * `media_url` - value of `STUDIO_MEDIA_URL`
    /// * `site_config_path` - value of `STUDIO_SITE_CONFIG`, a YAML file of [`SiteDefaults`]
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either URL is not an absolute `http(s)` URL,
    /// - the site config file cannot be read or does not match [`SiteDefaults`],
    /// - a required default is blank.
    pub fn from_env_values(
        content_url: Option<String>,
        media_url: Option<String>,
        site_config_path: Option<String>,
    ) -> ContentResult<Self> {
        let content_url = match non_blank(content_url) {
            Some(url) => BaseUrl::parse(url)?,
            None => BaseUrl::parse(DEFAULT_CONTENT_URL)?,
        };
        let media_url = non_blank(media_url).map(BaseUrl::parse).transpose()?;
        let defaults = match non_blank(site_config_path) {
            Some(path) => load_site_defaults(Path::new(&path))?,
            None => SiteDefaults::default(),
        };

        Self::new(content_url, media_url, defaults)
    }

    pub fn content_url(&self) -> &BaseUrl {
        &self.content_url
    }

    pub fn media_url(&self) -> &BaseUrl {
        &self.media_url
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    pub fn defaults(&self) -> &SiteDefaults {
        &self.defaults
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse site defaults from YAML text.
///
/// Uses `serde_path_to_error` so a mismatch reports the failing key (for example
/// `slider_fallbacks[0].url`).
///
/// # Errors
///
/// Returns [`ContentError::Config`] if the YAML does not match [`SiteDefaults`], including
/// unknown keys.
pub fn parse_site_defaults(yaml_text: &str) -> ContentResult<SiteDefaults> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
    match serde_path_to_error::deserialize::<_, SiteDefaults>(deserializer) {
        Ok(defaults) => Ok(defaults),
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() || path == "." {
                "<root>"
            } else {
                path.as_str()
            };
            Err(ContentError::Config(format!(
                "site config mismatch at {path}: {source}"
            )))
        }
    }
}

/// Read and parse a site defaults YAML file.
///
/// # Errors
///
/// Returns [`ContentError::ConfigRead`] if the file cannot be read, otherwise the errors of
/// [`parse_site_defaults`].
pub fn load_site_defaults(path: &Path) -> ContentResult<SiteDefaults> {
    let text = std::fs::read_to_string(path).map_err(ContentError::ConfigRead)?;
    parse_site_defaults(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_consolidate_contact_details() {
        let defaults = SiteDefaults::default();
        assert_eq!(defaults.phone, "0492 31 87 40");
        assert_eq!(defaults.accent_color, "#8b8455");
        assert_eq!(defaults.slider_fallbacks.len(), 3);
    }

    #[test]
    fn navigation_resolves_booking_target() {
        let mut defaults = SiteDefaults::default();
        defaults.booking_url = "https://book.example.com".into();

        let nav = defaults.navigation();
        let booking = nav
            .iter()
            .find(|item| item.label == "Afspraak")
            .expect("booking entry");
        assert_eq!(booking.target, "https://book.example.com");
        assert!(nav.iter().all(|item| item.target != BOOKING_NAV_TARGET));
    }

    #[test]
    fn from_env_values_uses_defaults_when_unset() {
        let cfg = SiteConfig::from_env_values(None, Some("  ".into()), None)
            .expect("default config should resolve");
        assert_eq!(cfg.content_url().as_str(), DEFAULT_CONTENT_URL);
        assert_eq!(cfg.media_url().as_str(), DEFAULT_CONTENT_URL);
        assert!(cfg.request_timeout().is_none());
    }

    #[test]
    fn from_env_values_accepts_separate_media_origin() {
        let cfg = SiteConfig::from_env_values(
            Some("http://localhost:1337/".into()),
            Some("https://cdn.example.com".into()),
            None,
        )
        .expect("config should resolve");
        assert_eq!(cfg.content_url().as_str(), "http://localhost:1337");
        assert_eq!(cfg.media_url().as_str(), "https://cdn.example.com");
    }

    #[test]
    fn from_env_values_rejects_relative_content_url() {
        let err = SiteConfig::from_env_values(Some("localhost:1337".into()), None, None)
            .expect_err("relative URL should be rejected");
        assert!(matches!(err, ContentError::InvalidValue(_)));
    }

    #[test]
    fn partial_yaml_keeps_builtin_values() {
        let defaults = parse_site_defaults("phone: \"09 123 45 67\"\n").expect("parse yaml");
        assert_eq!(defaults.phone, "09 123 45 67");
        assert_eq!(defaults.booking_url, DEFAULT_BOOKING_URL);
        assert_eq!(defaults.nav_items.len(), DEFAULT_NAV_ITEMS.len());
    }

    #[test]
    fn yaml_rejects_unknown_keys() {
        let err = parse_site_defaults("telephone: \"1\"\n").expect_err("unknown key");
        match err {
            ContentError::Config(msg) => assert!(msg.contains("telephone")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn yaml_reports_nested_path() {
        let yaml = "slider_fallbacks:\n  - url: /a.jpg\n";
        let err = parse_site_defaults(yaml).expect_err("missing alternative_text");
        match err {
            ContentError::Config(msg) => assert!(msg.contains("slider_fallbacks")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn blank_required_default_is_rejected() {
        let mut defaults = SiteDefaults::default();
        defaults.phone = " ".into();
        let err = SiteConfig::new(BaseUrl::parse("https://host").unwrap(), None, defaults)
            .expect_err("blank phone");
        assert!(matches!(err, ContentError::Config(_)));
    }

    #[test]
    fn loads_site_config_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "booking_url: https://book.example.com").expect("write yaml");
        writeln!(file, "nav_items:").expect("write yaml");
        writeln!(file, "  - label: Home").expect("write yaml");
        writeln!(file, "    target: /").expect("write yaml");

        let cfg = SiteConfig::from_env_values(
            None,
            None,
            Some(file.path().to_string_lossy().into_owned()),
        )
        .expect("config should load");
        assert_eq!(cfg.defaults().booking_url, "https://book.example.com");
        assert_eq!(cfg.defaults().nav_items.len(), 1);
    }

    #[test]
    fn missing_site_config_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("site.yaml");
        let err = load_site_defaults(&missing).expect_err("missing file");
        assert!(matches!(err, ContentError::ConfigRead(_)));
    }
}
