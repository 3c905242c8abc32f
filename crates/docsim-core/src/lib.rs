use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod backend;
pub mod config_file;
pub mod locale;
pub mod mock;
pub mod view;
pub mod widget;

// Re-export for convenience
pub use backend::{DEFAULT_BASE_URL, FILE_FIELD, HttpBackend, SEARCH_PATH, SearchBackend};
pub use locale::{Locale, Strings, UiStrings};
pub use view::{Link, LinkKind, LinkSet, ResultRow, ResultsBlock, SubmitButton, WidgetView};
pub use widget::{SearchTicket, SearchWidget};

/// A file the user picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    /// Display name, also sent as the multipart file name.
    pub name: String,
}

impl SelectedFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    /// Content type for the upload part. The search service only accepts
    /// `application/pdf`, so anything else goes out as an opaque blob.
    pub fn content_type(&self) -> &'static str {
        let is_pdf = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            "application/pdf"
        } else {
            "application/octet-stream"
        }
    }
}

/// One similar document returned by the search service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub document: String,
    pub score: f64,
    pub download_url: String,
}

/// Body of a successful `POST /search/pdf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ResultItem>,
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("no file selected")]
    NoFileSelected,
    #[error("search request failed with HTTP {status}")]
    RequestFailed { status: u16 },
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid search response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read upload: {0}")]
    ReadFile(#[source] std::io::Error),
    #[error("search task aborted: {0}")]
    Aborted(String),
}

impl SearchError {
    /// The single line shown to the user. Only a missing file gets its own
    /// prompt; every other failure reads the same.
    pub fn user_message(&self, strings: &Strings) -> &'static str {
        match self {
            SearchError::NoFileSelected => strings.select_file_prompt,
            _ => strings.search_failed,
        }
    }
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the search service, without the `/search/pdf` path.
    pub base_url: String,
    pub locale: Locale,
    pub link_set: LinkSet,
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: Locale::default(),
            link_set: LinkSet::default(),
            theme: "hacker".to_string(),
        }
    }
}
