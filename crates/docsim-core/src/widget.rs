//! The upload-and-search widget: owned state plus its transitions.
//!
//! A search runs in two halves so event-loop front ends can keep drawing
//! while the request is out: [`SearchWidget::begin_search`] hands out a
//! [`SearchTicket`] and raises the loading flag, and
//! [`SearchWidget::complete_search`] applies the outcome and always lowers it.
//! [`SearchWidget::submit_search`] chains the two around a backend call.
//!
//! Every selection and submission bumps a generation counter. A completion
//! carrying an older generation only releases the loading flag; its results
//! or error are dropped, so a slow response can never overwrite the state of
//! a newer selection.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;

use crate::backend::SearchBackend;
use crate::locale::{Locale, Strings};
use crate::view::{self, LinkSet, WidgetView};
use crate::{ResultItem, SearchError, SelectedFile};

/// Proof that a search was started, tied to the generation it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub file: SelectedFile,
}

#[derive(Debug, Clone)]
pub struct SearchWidget {
    selected_file: Option<SelectedFile>,
    results: Vec<ResultItem>,
    error: String,
    loading: bool,
    generation: u64,
    locale: Locale,
    link_set: LinkSet,
}

impl Default for SearchWidget {
    fn default() -> Self {
        Self::new(Locale::default(), LinkSet::default())
    }
}

impl SearchWidget {
    pub fn new(locale: Locale, link_set: LinkSet) -> Self {
        Self {
            selected_file: None,
            results: Vec::new(),
            error: String::new(),
            loading: false,
            generation: 0,
            locale,
            link_set,
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    /// Current error line; empty when there is nothing to show.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn link_set(&self) -> LinkSet {
        self.link_set
    }

    pub fn strings(&self) -> &'static Strings {
        self.locale.strings()
    }

    /// Replace the selection (or clear it) and reset results and error.
    ///
    /// An in-flight request is not aborted, but its completion will be
    /// treated as stale.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.generation = self.generation.wrapping_add(1);
        tracing::debug!(
            file = file.as_ref().map(|f| f.name.as_str()),
            generation = self.generation,
            in_flight = self.loading,
            "file selected"
        );
        self.selected_file = file;
        self.results.clear();
        self.error.clear();
    }

    /// Start a search for the selected file.
    ///
    /// Returns `None` without touching the loading flag when no file is
    /// selected (the error line then prompts for one) or when a request is
    /// already outstanding.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        let Some(file) = self.selected_file.clone() else {
            self.error = SearchError::NoFileSelected
                .user_message(self.strings())
                .to_string();
            return None;
        };
        if self.loading {
            tracing::debug!(generation = self.generation, "search already in flight");
            return None;
        }

        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        self.error.clear();
        tracing::info!(file = %file.name, generation = self.generation, "search started");

        Some(SearchTicket {
            generation: self.generation,
            file,
        })
    }

    /// Apply the outcome of the search started with `generation`.
    ///
    /// Always clears the loading flag. Returns `false` if the outcome was
    /// stale and therefore discarded.
    pub fn complete_search(
        &mut self,
        generation: u64,
        outcome: Result<Vec<ResultItem>, SearchError>,
    ) -> bool {
        self.loading = false;

        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "discarding stale search outcome"
            );
            return false;
        }

        match outcome {
            Ok(results) => {
                tracing::info!(generation, count = results.len(), "search complete");
                self.results = results;
                self.error.clear();
            }
            Err(e) => {
                tracing::warn!(generation, error = %e, "search failed");
                self.error = e.user_message(self.strings()).to_string();
            }
        }
        true
    }

    /// Run a whole search against `backend`: begin, await, complete.
    ///
    /// The loading flag is lowered on every path, including a backend future
    /// that panics.
    pub async fn submit_search<B>(&mut self, backend: &B)
    where
        B: SearchBackend + ?Sized,
    {
        let Some(ticket) = self.begin_search() else {
            return;
        };

        let outcome = AssertUnwindSafe(backend.search(&ticket.file))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(SearchError::Aborted(panic_message(panic.as_ref()))));

        self.complete_search(ticket.generation, outcome);
    }

    pub fn view(&self) -> WidgetView {
        view::render(self)
    }
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockBackend, MockResponse};

    fn item(doc: &str, score: f64) -> ResultItem {
        ResultItem {
            document: doc.to_string(),
            score,
            download_url: format!("http://host/files/{doc}"),
        }
    }

    fn brief() -> SelectedFile {
        SelectedFile::from_path("brief.pdf")
    }

    /// Widget with one result and an error line, neither of which a fresh
    /// selection should survive.
    fn dirty_widget() -> SearchWidget {
        let mut widget = SearchWidget::default();
        widget.select_file(Some(brief()));
        let t = widget.begin_search().unwrap();
        widget.complete_search(t.generation, Ok(vec![item("case_1.pdf", 0.3)]));
        let t = widget.begin_search().unwrap();
        widget.complete_search(t.generation, Err(SearchError::RequestFailed { status: 500 }));
        assert!(!widget.results().is_empty());
        assert!(!widget.error().is_empty());
        widget
    }

    // ── select_file ─────────────────────────────────────────────────

    #[test]
    fn select_resets_results_and_error() {
        let mut widget = dirty_widget();
        widget.select_file(Some(SelectedFile::from_path("other.pdf")));
        assert!(widget.results().is_empty());
        assert_eq!(widget.error(), "");
        assert_eq!(widget.selected_file().unwrap().name, "other.pdf");
    }

    #[test]
    fn cancelled_picker_clears_selection_and_still_resets() {
        let mut widget = dirty_widget();
        widget.select_file(None);
        assert!(widget.selected_file().is_none());
        assert!(widget.results().is_empty());
        assert_eq!(widget.error(), "");
    }

    #[test]
    fn select_does_not_touch_loading() {
        let mut widget = SearchWidget::default();
        widget.select_file(Some(brief()));
        widget.begin_search().unwrap();
        widget.select_file(Some(SelectedFile::from_path("next.pdf")));
        assert!(widget.is_loading());
    }

    // ── begin_search ────────────────────────────────────────────────

    #[test]
    fn begin_without_file_prompts_and_stays_idle() {
        let mut widget = SearchWidget::default();
        assert!(widget.begin_search().is_none());
        assert_eq!(widget.error(), "Please select a PDF file.");
        assert!(!widget.is_loading());
    }

    #[test]
    fn begin_raises_loading_and_clears_error() {
        let mut widget = SearchWidget::default();
        widget.select_file(Some(brief()));
        widget.error = "old".to_string();
        let ticket = widget.begin_search().unwrap();
        assert!(widget.is_loading());
        assert_eq!(widget.error(), "");
        assert_eq!(ticket.file, brief());
        assert_eq!(ticket.generation, widget.generation());
    }

    #[test]
    fn begin_while_loading_is_refused() {
        let mut widget = SearchWidget::default();
        widget.select_file(Some(brief()));
        let first = widget.begin_search().unwrap();
        assert!(widget.begin_search().is_none());
        assert_eq!(widget.generation(), first.generation);
        assert!(widget.is_loading());
    }

    // ── complete_search ─────────────────────────────────────────────

    #[test]
    fn success_assigns_results_wholesale() {
        let mut widget = SearchWidget::default();
        widget.select_file(Some(brief()));
        let ticket = widget.begin_search().unwrap();
        let expected = vec![item("case_12.pdf", 0.91)];
        assert!(widget.complete_search(ticket.generation, Ok(expected.clone())));
        assert_eq!(widget.results(), expected.as_slice());
        assert_eq!(widget.error(), "");
        assert!(!widget.is_loading());
    }

    #[test]
    fn failure_keeps_previous_results() {
        let mut widget = SearchWidget::default();
        widget.select_file(Some(brief()));
        let t = widget.begin_search().unwrap();
        widget.complete_search(t.generation, Ok(vec![item("a.pdf", 0.5)]));

        let t = widget.begin_search().unwrap();
        widget.complete_search(t.generation, Err(SearchError::RequestFailed { status: 500 }));

        assert_eq!(widget.results(), [item("a.pdf", 0.5)].as_slice());
        assert_eq!(widget.error(), "Error searching for similar documents.");
        assert!(!widget.is_loading());
    }

    #[test]
    fn stale_completion_only_releases_loading() {
        let mut widget = SearchWidget::default();
        widget.select_file(Some(brief()));
        let stale = widget.begin_search().unwrap();
        widget.select_file(Some(SelectedFile::from_path("newer.pdf")));

        let applied = widget.complete_search(stale.generation, Ok(vec![item("old.pdf", 0.9)]));

        assert!(!applied);
        assert!(!widget.is_loading());
        assert!(widget.results().is_empty());
        assert_eq!(widget.error(), "");
        assert_eq!(widget.selected_file().unwrap().name, "newer.pdf");
    }

    #[test]
    fn stale_failure_does_not_set_error() {
        let mut widget = SearchWidget::default();
        widget.select_file(Some(brief()));
        let stale = widget.begin_search().unwrap();
        widget.select_file(None);
        widget.complete_search(stale.generation, Err(SearchError::Aborted("x".into())));
        assert_eq!(widget.error(), "");
    }

    // ── submit_search ───────────────────────────────────────────────

    #[tokio::test]
    async fn submit_without_file_never_calls_backend() {
        let backend = MockBackend::new(MockResponse::Results(vec![]));
        let mut widget = SearchWidget::default();
        widget.submit_search(&backend).await;
        assert_eq!(backend.call_count(), 0);
        assert!(!widget.error().is_empty());
        assert!(!widget.is_loading());
    }

    #[tokio::test]
    async fn submit_success_round_trip() {
        let expected = vec![item("case_12.pdf", 0.91)];
        let backend = MockBackend::new(MockResponse::Results(expected.clone()));
        let mut widget = SearchWidget::default();
        widget.select_file(Some(brief()));

        widget.submit_search(&backend).await;

        assert_eq!(backend.call_count(), 1);
        assert_eq!(backend.last_file(), Some(brief()));
        assert_eq!(widget.results(), expected.as_slice());
        assert_eq!(widget.error(), "");
        assert!(!widget.is_loading());
    }

    #[tokio::test]
    async fn submit_http_error_sets_generic_message() {
        let backend = MockBackend::new(MockResponse::Status(503));
        let mut widget = SearchWidget::default();
        widget.select_file(Some(brief()));

        widget.submit_search(&backend).await;

        assert_eq!(widget.error(), "Error searching for similar documents.");
        assert!(widget.results().is_empty());
        assert!(!widget.is_loading());
    }

    #[tokio::test]
    async fn submit_malformed_body_reads_like_any_failure() {
        let backend = MockBackend::new(MockResponse::Malformed);
        let mut widget = SearchWidget::new(Locale::Bulgarian, LinkSet::DownloadOnly);
        widget.select_file(Some(brief()));

        widget.submit_search(&backend).await;

        assert_eq!(widget.error(), "Грешка при търсенето.");
        assert!(!widget.is_loading());
    }

    #[tokio::test]
    async fn retry_failure_keeps_earlier_results_under_new_error() {
        let backend = MockBackend::with_sequence(vec![
            MockResponse::Results(vec![item("case_3.pdf", 0.7)]),
            MockResponse::Status(500),
        ]);
        let mut widget = SearchWidget::default();
        widget.select_file(Some(brief()));

        widget.submit_search(&backend).await;
        assert_eq!(widget.error(), "");

        widget.submit_search(&backend).await;

        assert_eq!(backend.call_count(), 2);
        assert_eq!(widget.results(), [item("case_3.pdf", 0.7)].as_slice());
        assert_eq!(widget.error(), "Error searching for similar documents.");
        assert_eq!(widget.view().results.unwrap().rows.len(), 1);
        assert!(!widget.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_backend_holds_loading_until_it_answers() {
        let backend = MockBackend::new(MockResponse::Results(vec![item("case_1.pdf", 0.2)]))
            .with_delay(std::time::Duration::from_secs(30));
        let mut widget = SearchWidget::default();
        widget.select_file(Some(brief()));

        let started = tokio::time::Instant::now();
        widget.submit_search(&backend).await;

        assert!(started.elapsed() >= std::time::Duration::from_secs(30));
        assert_eq!(widget.results().len(), 1);
        assert!(!widget.is_loading());
    }

    #[tokio::test]
    async fn panicking_backend_still_releases_loading() {
        let backend = MockBackend::new(MockResponse::Panic);
        let mut widget = SearchWidget::default();
        widget.select_file(Some(brief()));

        widget.submit_search(&backend).await;

        assert!(!widget.is_loading());
        assert_eq!(widget.error(), "Error searching for similar documents.");
    }

    #[test]
    fn panic_message_reads_str_and_string_payloads() {
        let a: Box<dyn Any + Send> = Box::new("static");
        let b: Box<dyn Any + Send> = Box::new(String::from("owned"));
        let c: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(a.as_ref()), "static");
        assert_eq!(panic_message(b.as_ref()), "owned");
        assert_eq!(panic_message(c.as_ref()), "panic");
    }
}
