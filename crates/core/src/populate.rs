//! Populate directives.
//!
//! The CMS only returns relations (media, components, nested lists) that a request asks for with a
//! `populate` query parameter in bracket syntax:
//!
//! ```text
//! populate=*
//! populate[GalleryItem][populate][GalleryImages][populate]=*
//! populate[pricing_sections][populate]=items
//! ```
//!
//! [`Populate`] is the structured form of that parameter. It renders to key/value pairs for the
//! HTTP client (which percent-encodes them) and to a readable query string for logs and the CLI.

use std::fmt;

/// Which relations of a collection to expand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Populate {
    /// Every first-level relation: `populate=*`.
    All,
    /// Only the named first-level relations: `populate=a,b`.
    Only(Vec<String>),
    /// Per-relation directives, rendered in order. A relation may appear more than once.
    Relations(Vec<Relation>),
}

/// How one named relation is expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nested {
    /// `[name]=true`
    Leaf,
    /// `[name]=*`
    Wildcard,
    /// `[name][populate]...` followed by the nested directive.
    Populate(Populate),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relation {
    pub name: String,
    pub nested: Nested,
}

impl Populate {
    pub fn all() -> Self {
        Populate::All
    }

    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Populate::Only(names.into_iter().map(Into::into).collect())
    }

    /// Start an empty relation list; add entries with [`Self::with`] and friends.
    pub fn relations() -> Self {
        Populate::Relations(Vec::new())
    }

    /// Append a relation expanded by `nested`.
    pub fn with(self, name: impl Into<String>, nested: Populate) -> Self {
        self.push(name.into(), Nested::Populate(nested))
    }

    /// Append a relation populated with no nested directive.
    pub fn with_leaf(self, name: impl Into<String>) -> Self {
        self.push(name.into(), Nested::Leaf)
    }

    /// Append a relation whose fields are all returned (`[name]=*`).
    pub fn with_wildcard(self, name: impl Into<String>) -> Self {
        self.push(name.into(), Nested::Wildcard)
    }

    fn push(self, name: String, nested: Nested) -> Self {
        let mut relations = match self {
            Populate::Relations(relations) => relations,
            // Adding a relation to `All`/`Only` narrows it to an explicit list.
            Populate::All | Populate::Only(_) => Vec::new(),
        };
        relations.push(Relation { name, nested });
        Populate::Relations(relations)
    }

    /// Render as query key/value pairs, keys unescaped.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        render(self, "populate", &mut pairs);
        pairs
    }

    /// Render as a readable (unencoded) query string.
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for Populate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

fn render(populate: &Populate, prefix: &str, out: &mut Vec<(String, String)>) {
    match populate {
        Populate::All => out.push((prefix.to_string(), "*".to_string())),
        Populate::Only(names) => out.push((prefix.to_string(), names.join(","))),
        Populate::Relations(relations) => {
            for relation in relations {
                let key = format!("{prefix}[{}]", relation.name);
                match &relation.nested {
                    Nested::Leaf => out.push((key, "true".to_string())),
                    Nested::Wildcard => out.push((key, "*".to_string())),
                    Nested::Populate(nested) => render(nested, &format!("{key}[populate]"), out),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_renders_wildcard() {
        assert_eq!(Populate::all().to_query_string(), "populate=*");
        assert_eq!(
            Populate::all().to_pairs(),
            vec![("populate".to_string(), "*".to_string())]
        );
    }

    #[test]
    fn gallery_page_directive_matches_cms_query() {
        let populate = Populate::relations()
            .with(
                "GalleryItem",
                Populate::relations().with("GalleryImages", Populate::all()),
            )
            .with("ContactSection", Populate::all());

        assert_eq!(
            populate.to_query_string(),
            "populate[GalleryItem][populate][GalleryImages][populate]=*&populate[ContactSection][populate]=*"
        );
    }

    #[test]
    fn named_field_list_renders_comma_separated() {
        let populate = Populate::relations().with("pricing_sections", Populate::only(["items"]));
        assert_eq!(
            populate.to_query_string(),
            "populate[pricing_sections][populate]=items"
        );
        assert_eq!(Populate::only(["a", "b"]).to_query_string(), "populate=a,b");
    }

    #[test]
    fn repeated_relation_and_wildcard_entries_render_in_order() {
        let populate = Populate::relations()
            .with("bliftop_main_content", Populate::all())
            .with(
                "bliftop_main_content",
                Populate::relations().with(
                    "sectionss",
                    Populate::relations()
                        .with_wildcard("lists")
                        .with("list", Populate::all()),
                ),
            )
            .with(
                "ContactSection",
                Populate::relations().with_wildcard("highlighted_texts"),
            );

        assert_eq!(
            populate.to_query_string(),
            "populate[bliftop_main_content][populate]=*\
             &populate[bliftop_main_content][populate][sectionss][populate][lists]=*\
             &populate[bliftop_main_content][populate][sectionss][populate][list][populate]=*\
             &populate[ContactSection][populate][highlighted_texts]=*"
        );
    }

    #[test]
    fn leaf_relation_renders_true() {
        let populate = Populate::relations().with_leaf("Image");
        assert_eq!(populate.to_query_string(), "populate[Image]=true");
        assert_eq!(populate.to_string(), "populate[Image]=true");
    }

    #[test]
    fn adding_a_relation_to_all_narrows_it() {
        let populate = Populate::all().with_leaf("Image");
        assert_eq!(
            populate,
            Populate::Relations(vec![Relation {
                name: "Image".into(),
                nested: Nested::Leaf,
            }])
        );
    }
}
