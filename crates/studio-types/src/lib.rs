//! Validated primitive types shared across the studio crates.
//!
//! These newtypes guarantee their invariants once constructed, so configuration and catalog code
//! can pass them around without re-checking:
//! - [`BaseUrl`]: an absolute `http(s)` origin used to build CMS request URLs and to turn relative
//!   media paths into fetchable URLs.
//! - [`CollectionName`]: the path segment that names a CMS collection (`faqs`, `footers`, ...).

/// Errors that can occur when constructing validated types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TypeError {
    /// The input was empty or whitespace only.
    #[error("value cannot be empty")]
    Empty,

    /// The URL did not start with `http://` or `https://`.
    #[error("URL must be absolute (http:// or https://): {0}")]
    NotAbsolute(String),

    /// The collection name contained characters that cannot appear in a path segment.
    #[error("invalid collection name: {0}")]
    InvalidCollection(String),
}

// ============================================================================
// BaseUrl
// ============================================================================

/// An absolute `http`/`https` base URL without a trailing slash.
///
/// The input is trimmed and any trailing `/` characters are removed during construction, so
/// `https://host/` and `https://host` produce the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new `BaseUrl` from the given input.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::Empty`] for blank input and [`TypeError::NotAbsolute`] when the
    /// scheme is not `http` or `https`.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, TypeError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TypeError::Empty);
        }
        if !is_absolute_http(trimmed) {
            return Err(TypeError::NotAbsolute(trimmed.to_owned()));
        }

        let normalised = trimmed.trim_end_matches('/');
        let host = normalised
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or_default();
        if host.is_empty() {
            return Err(TypeError::NotAbsolute(trimmed.to_owned()));
        }

        Ok(Self(normalised.to_owned()))
    }

    /// Returns the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves `path` against this base.
    ///
    /// Absolute `http(s)` URLs are returned unchanged. Relative paths are joined with exactly one
    /// `/` between base and path, whether or not the path already starts with one.
    ///
    /// ```
    /// use studio_types::BaseUrl;
    ///
    /// let base = BaseUrl::parse("https://host").unwrap();
    /// assert_eq!(base.join("/uploads/x.png"), "https://host/uploads/x.png");
    /// assert_eq!(base.join("uploads/x.png"), "https://host/uploads/x.png");
    /// assert_eq!(base.join("https://cdn/x.png"), "https://cdn/x.png");
    /// ```
    pub fn join(&self, path: &str) -> String {
        let path = path.trim();
        if is_absolute_http(path) {
            return path.to_owned();
        }
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

fn is_absolute_http(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BaseUrl::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// CollectionName
// ============================================================================

/// The name of a CMS collection as it appears in `/api/<collection>`.
///
/// Only ASCII letters, digits, `-` and `_` are accepted. Case is preserved because the CMS
/// routes are case-sensitive for some collections (`nieuws-Pages`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionName(String);

impl CollectionName {
    /// Creates a new `CollectionName`.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::Empty`] for blank input and [`TypeError::InvalidCollection`] if any
    /// character falls outside `[A-Za-z0-9_-]`.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TypeError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TypeError::Empty);
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(TypeError::InvalidCollection(trimmed.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CollectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CollectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for CollectionName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
