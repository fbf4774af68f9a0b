//! Per-view load state.
//!
//! A [`ViewController`] drives one view through
//! `Idle -> Loading -> {Ready | Empty | Error}`:
//!
//! - [`mount`](ViewController::mount) enters `Loading` and issues exactly one fetch;
//! - [`retry`](ViewController::retry) is accepted only from `Error` and behaves like a fresh mount;
//! - [`unmount`](ViewController::unmount) returns to `Idle` and invalidates any fetch in flight.
//!
//! Each mount takes a new generation number. A fetch result is applied only if its generation is
//! still current and the view is still mounted, so a superseded fetch never overwrites newer state.
//! The state lock is never held across the fetch.

use crate::catalog::{ContentService, ViewKind, ViewPayload};
use crate::error::{ContentError, ContentResult};
use crate::source::ContentSource;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// User-visible failure of a view load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorNotice {
    pub message: String,
    pub retryable: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Ready(ViewPayload),
    /// The CMS answered but had nothing to show. Not an error.
    Empty,
    Error(ErrorNotice),
}

impl ViewState {
    /// Lower-case state name as exposed over REST.
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Ready(_) => "ready",
            ViewState::Empty => "empty",
            ViewState::Error(_) => "error",
        }
    }

    /// Terminal state for a finished load.
    pub fn from_result(kind: ViewKind, result: ContentResult<ViewPayload>) -> Self {
        match result {
            Ok(payload) => ViewState::Ready(payload),
            Err(ContentError::EmptyContent) => {
                tracing::info!("view {kind}: no content available");
                ViewState::Empty
            }
            Err(err) => {
                let retryable = err.is_retryable();
                if retryable {
                    tracing::warn!("view {kind}: {err}");
                } else {
                    tracing::error!("view {kind}: {err}");
                }
                ViewState::Error(ErrorNotice {
                    message: err.to_string(),
                    retryable,
                })
            }
        }
    }
}

struct Inner {
    state: ViewState,
    generation: u64,
    mounted: bool,
}

/// Load state of one view.
pub struct ViewController<S> {
    kind: ViewKind,
    service: ContentService<S>,
    inner: Mutex<Inner>,
}

impl<S: ContentSource> ViewController<S> {
    pub fn new(service: ContentService<S>, kind: ViewKind) -> Self {
        Self {
            kind,
            service,
            inner: Mutex::new(Inner {
                state: ViewState::Idle,
                generation: 0,
                mounted: false,
            }),
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.lock().state.clone()
    }

    /// Mount the view and load it. Resolves once the fetch has finished (or been superseded).
    pub async fn mount(&self) {
        let generation = {
            let mut inner = self.lock();
            inner.mounted = true;
            self.begin(&mut inner)
        };
        self.run(generation).await;
    }

    /// Retry a failed load.
    ///
    /// Returns `false` without fetching unless the view is mounted and in `Error`.
    pub async fn retry(&self) -> bool {
        let generation = {
            let mut inner = self.lock();
            if !inner.mounted || !matches!(inner.state, ViewState::Error(_)) {
                return false;
            }
            self.begin(&mut inner)
        };
        self.run(generation).await;
        true
    }

    /// Discard state and invalidate any fetch in flight.
    pub fn unmount(&self) {
        let mut inner = self.lock();
        inner.mounted = false;
        inner.generation += 1;
        inner.state = ViewState::Idle;
    }

    fn begin(&self, inner: &mut Inner) -> u64 {
        inner.generation += 1;
        inner.state = ViewState::Loading;
        inner.generation
    }

    async fn run(&self, generation: u64) {
        let result = self.service.load(self.kind).await;
        let next = ViewState::from_result(self.kind, result);

        let mut inner = self.lock();
        if inner.mounted && inner.generation == generation {
            inner.state = next;
        } else {
            tracing::debug!("view {}: discarding superseded load", self.kind);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // State is replaced wholesale under the lock, so a poisoned guard is still consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::FetchFailure;
    use crate::source::ContentQuery;
    use crate::views::test_support::cfg;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    /// Answers call `n` with `responses[n]`; the first call can be held until a gate opens.
    struct ScriptedSource {
        calls: AtomicUsize,
        responses: Vec<ContentResult<Value>>,
        gate: Mutex<Option<oneshot::Receiver<()>>>,
    }

    impl ScriptedSource {
        fn new(responses: Vec<ContentResult<Value>>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                responses,
                gate: Mutex::new(None),
            }
        }

        fn take_gate(&self) -> Option<oneshot::Receiver<()>> {
            self.gate.lock().unwrap().take()
        }

        fn gated(responses: Vec<ContentResult<Value>>) -> (Self, oneshot::Sender<()>) {
            let (tx, rx) = oneshot::channel();
            let source = Self::new(responses);
            *source.gate.lock().unwrap() = Some(rx);
            (source, tx)
        }
    }

    impl ContentSource for ScriptedSource {
        async fn fetch(&self, query: &ContentQuery) -> ContentResult<Value> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let gate = if call == 0 { self.take_gate() } else { None };
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            match &self.responses[call] {
                Ok(value) => Ok(value.clone()),
                Err(_) => Err(ContentError::FetchFailed {
                    collection: query.collection.to_string(),
                    reason: FetchFailure::Status(503),
                }),
            }
        }
    }

    fn unavailable() -> ContentResult<Value> {
        Err(ContentError::FetchFailed {
            collection: "faqs".into(),
            reason: FetchFailure::Status(503),
        })
    }

    fn faq(question: &str) -> ContentResult<Value> {
        Ok(json!({"data": [{"FAQ": [{"Order": 1, "Question": question}]}]}))
    }

    fn controller(source: ScriptedSource) -> ViewController<ScriptedSource> {
        let service = ContentService::new(source, Catalog::new(&cfg()).unwrap());
        ViewController::new(service, ViewKind::Faq)
    }

    fn question(state: &ViewState) -> String {
        match state {
            ViewState::Ready(ViewPayload::Single(record)) => record.list("entries").unwrap()[0]
                .text("question")
                .unwrap()
                .to_string(),
            other => panic!("expected ready single payload, got {other:?}"),
        }
    }

    fn calls(controller: &ViewController<ScriptedSource>) -> usize {
        controller.service.source().calls.load(Ordering::SeqCst)
    }

    #[tokio::test]
    async fn mount_reaches_ready() {
        let controller = controller(ScriptedSource::new(vec![faq("Q1")]));
        assert_eq!(controller.state(), ViewState::Idle);

        controller.mount().await;
        assert_eq!(question(&controller.state()), "Q1");
        assert_eq!(calls(&controller), 1);
    }

    #[tokio::test]
    async fn empty_collection_is_neutral_empty_state() {
        let controller = controller(ScriptedSource::new(vec![Ok(json!({"data": []}))]));
        controller.mount().await;
        assert_eq!(controller.state(), ViewState::Empty);
        assert!(!controller.retry().await);
        assert_eq!(calls(&controller), 1);
    }

    #[tokio::test]
    async fn retry_after_failure_issues_exactly_one_request() {
        let controller = controller(ScriptedSource::new(vec![unavailable(), faq("Q2")]));

        controller.mount().await;
        match controller.state() {
            ViewState::Error(notice) => {
                assert!(notice.retryable);
                assert!(notice.message.contains("503"));
            }
            other => panic!("expected error state, got {other:?}"),
        }
        assert_eq!(calls(&controller), 1);

        assert!(controller.retry().await);
        assert_eq!(question(&controller.state()), "Q2");
        assert_eq!(calls(&controller), 2);

        // Retry is only accepted from Error.
        assert!(!controller.retry().await);
        assert_eq!(calls(&controller), 2);
    }

    #[tokio::test]
    async fn result_after_unmount_is_discarded() {
        let (source, release) = ScriptedSource::gated(vec![faq("late")]);
        let controller = controller(source);

        let load = controller.mount();
        let interrupt = async {
            tokio::task::yield_now().await;
            assert_eq!(controller.state(), ViewState::Loading);
            controller.unmount();
            release.send(()).unwrap();
        };
        tokio::join!(load, interrupt);

        assert_eq!(controller.state(), ViewState::Idle);
        assert_eq!(calls(&controller), 1);
    }

    #[tokio::test]
    async fn superseded_fetch_does_not_overwrite_newer_state() {
        let (source, release) = ScriptedSource::gated(vec![faq("stale"), faq("fresh")]);
        let controller = controller(source);

        let first = controller.mount();
        let second = async {
            tokio::task::yield_now().await;
            controller.unmount();
            controller.mount().await;
            assert_eq!(question(&controller.state()), "fresh");
            release.send(()).unwrap();
        };
        tokio::join!(first, second);

        assert_eq!(question(&controller.state()), "fresh");
        assert_eq!(calls(&controller), 2);
    }
}
