//! Content sources.
//!
//! A [`ContentSource`] performs the single network read behind a view: one GET of one collection
//! with one populate directive. [`HttpContentSource`] talks to the CMS over HTTP; tests supply
//! in-memory sources.

use crate::config::SiteConfig;
use crate::constants::API_PATH_PREFIX;
use crate::error::{ContentError, ContentResult, FetchFailure};
use crate::populate::Populate;
use serde_json::Value;
use std::future::Future;
use std::path::Path;
use studio_types::{BaseUrl, CollectionName};

/// A request for one CMS collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentQuery {
    pub collection: CollectionName,
    pub populate: Populate,
}

impl ContentQuery {
    pub fn new(collection: CollectionName, populate: Populate) -> Self {
        Self {
            collection,
            populate,
        }
    }

    /// Path and query as sent to the CMS, unencoded. Used for logging and the CLI.
    pub fn display_path(&self) -> String {
        format!(
            "/{API_PATH_PREFIX}/{}?{}",
            self.collection,
            self.populate.to_query_string()
        )
    }

    fn fetch_failed(&self, reason: FetchFailure) -> ContentError {
        ContentError::FetchFailed {
            collection: self.collection.to_string(),
            reason,
        }
    }
}

/// Read-only access to CMS collections.
///
/// Implementations return the raw response body; shape resolution and defaulting happen in
/// [`normalize`](crate::normalize).
pub trait ContentSource: Send + Sync {
    /// Fetch one collection.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::FetchFailed`] for transport errors, non-success statuses and
    /// undecodable bodies.
    fn fetch(&self, query: &ContentQuery) -> impl Future<Output = ContentResult<Value>> + Send;
}

/// [`ContentSource`] backed by the CMS REST API.
#[derive(Clone, Debug)]
pub struct HttpContentSource {
    client: reqwest::Client,
    base_url: BaseUrl,
}

impl HttpContentSource {
    /// Build a source for the configured CMS origin.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Config`] if the HTTP client cannot be initialised.
    pub fn new(cfg: &SiteConfig) -> ContentResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = cfg.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ContentError::Config(format!("failed to initialise HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: cfg.content_url().clone(),
        })
    }

    /// Collection endpoint URL, without query.
    pub fn collection_url(&self, collection: &CollectionName) -> String {
        self.base_url.join(&format!("{API_PATH_PREFIX}/{collection}"))
    }
}

impl ContentSource for HttpContentSource {
    async fn fetch(&self, query: &ContentQuery) -> ContentResult<Value> {
        let url = self.collection_url(&query.collection);
        tracing::debug!("GET {}", query.display_path());

        let response = self
            .client
            .get(&url)
            .query(&query.populate.to_pairs())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| query.fetch_failed(FetchFailure::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(query.fetch_failed(FetchFailure::Status(status.as_u16())));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| query.fetch_failed(FetchFailure::Transport(e.to_string())))?;

        serde_json::from_slice(&body)
            .map_err(|e| query.fetch_failed(FetchFailure::MalformedJson(e.to_string())))
    }
}

/// Read a saved CMS response body for offline normalization.
///
/// # Errors
///
/// Returns [`ContentError::RawRead`] if the file cannot be read, or [`ContentError::RawParse`]
/// if it is not JSON.
pub fn read_raw(path: &Path) -> ContentResult<Value> {
    let text = std::fs::read_to_string(path).map_err(ContentError::RawRead)?;
    serde_json::from_str(&text).map_err(ContentError::RawParse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteDefaults;

    fn cfg(url: &str) -> SiteConfig {
        SiteConfig::new(BaseUrl::parse(url).unwrap(), None, SiteDefaults::default()).unwrap()
    }

    #[test]
    fn collection_url_joins_api_prefix() {
        let source = HttpContentSource::new(&cfg("https://cms.example.com/")).unwrap();
        let collection = CollectionName::new("nieuws-Pages").unwrap();
        assert_eq!(
            source.collection_url(&collection),
            "https://cms.example.com/api/nieuws-Pages"
        );
    }

    #[test]
    fn display_path_shows_unencoded_populate() {
        let query = ContentQuery::new(
            CollectionName::new("prijslijst-pages").unwrap(),
            Populate::relations().with("pricing_sections", Populate::only(["items"])),
        );
        assert_eq!(
            query.display_path(),
            "/api/prijslijst-pages?populate[pricing_sections][populate]=items"
        );
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_failure() {
        // Port 9 on loopback (discard) is closed in test environments.
        let source = HttpContentSource::new(
            &cfg("http://127.0.0.1:9").with_request_timeout(std::time::Duration::from_secs(2)),
        )
        .unwrap();
        let query = ContentQuery::new(CollectionName::new("faqs").unwrap(), Populate::all());

        let err = source.fetch(&query).await.expect_err("no server");
        match err {
            ContentError::FetchFailed {
                collection,
                reason: FetchFailure::Transport(_),
            } => assert_eq!(collection, "faqs"),
            other => panic!("expected transport failure, got {other:?}"),
        }
        assert!(
            ContentError::FetchFailed {
                collection: "faqs".into(),
                reason: FetchFailure::Status(500)
            }
            .is_retryable()
        );
    }

    /// Serve a stand-in CMS on an ephemeral loopback port and return its origin.
    async fn serve_cms() -> String {
        use axum::extract::RawQuery;
        use axum::http::StatusCode;
        use axum::routing::get;
        use axum::{Json, Router};

        let app = Router::new()
            .route(
                "/api/faqs",
                get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
            )
            .route("/api/footers", get(|| async { "<html>not json</html>" }))
            .route(
                "/api/cards",
                get(|RawQuery(query): RawQuery| async move {
                    Json(serde_json::json!({"data": [], "query": query}))
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });
        format!("http://{addr}")
    }

    fn query(collection: &str) -> ContentQuery {
        ContentQuery::new(CollectionName::new(collection).unwrap(), Populate::all())
    }

    #[tokio::test]
    async fn non_success_status_is_a_retryable_status_failure() {
        let source = HttpContentSource::new(&cfg(&serve_cms().await)).unwrap();

        let err = source.fetch(&query("faqs")).await.expect_err("503");
        assert!(err.is_retryable());
        match err {
            ContentError::FetchFailed {
                collection,
                reason: FetchFailure::Status(503),
            } => assert_eq!(collection, "faqs"),
            other => panic!("expected status failure, got {other:?}"),
        }

        let err = source.fetch(&query("unknown")).await.expect_err("404");
        assert!(matches!(
            err,
            ContentError::FetchFailed {
                reason: FetchFailure::Status(404),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn non_json_body_is_a_retryable_malformed_json_failure() {
        let source = HttpContentSource::new(&cfg(&serve_cms().await)).unwrap();

        let err = source.fetch(&query("footers")).await.expect_err("html body");
        assert!(err.is_retryable());
        match err {
            ContentError::FetchFailed {
                collection,
                reason: FetchFailure::MalformedJson(_),
            } => assert_eq!(collection, "footers"),
            other => panic!("expected malformed json failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_body_is_returned_with_populate_query() {
        let source = HttpContentSource::new(&cfg(&serve_cms().await)).unwrap();

        let body = source.fetch(&query("cards")).await.expect("cards");
        assert_eq!(body["data"], serde_json::json!([]));
        let sent = body["query"].as_str().expect("query string sent");
        assert!(sent.starts_with("populate="), "{sent}");
    }

    #[test]
    fn read_raw_distinguishes_missing_and_malformed_files() {
        let dir = tempfile::tempdir().expect("temp dir");

        let err = read_raw(&dir.path().join("missing.json")).expect_err("missing");
        assert!(matches!(err, ContentError::RawRead(_)));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{\"data\": [").expect("write");
        assert!(matches!(read_raw(&bad), Err(ContentError::RawParse(_))));

        let good = dir.path().join("faqs.json");
        std::fs::write(&good, r#"{"data": []}"#).expect("write");
        assert_eq!(read_raw(&good).expect("parse")["data"], serde_json::json!([]));
    }
}
