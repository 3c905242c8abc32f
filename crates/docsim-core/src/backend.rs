//! Search backend trait and the HTTP implementation.

use std::future::Future;
use std::pin::Pin;

use reqwest::multipart::{Form, Part};

use crate::{ResultItem, SearchError, SearchResponse, SelectedFile};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const SEARCH_PATH: &str = "/search/pdf";
/// Multipart field carrying the uploaded document.
pub const FILE_FIELD: &str = "file";

/// Boxed future returned by [`SearchBackend::search`].
pub type SearchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<ResultItem>, SearchError>> + Send + 'a>>;

/// Something that can turn an uploaded document into a list of similar ones.
pub trait SearchBackend: Send + Sync {
    /// Submit `file` and return the matches in the order the service gave them.
    fn search<'a>(&'a self, file: &'a SelectedFile) -> SearchFuture<'a>;
}

/// Posts the file as `multipart/form-data` to `<base_url>/search/pdf`.
///
/// No timeout, retries or extra headers are applied; reqwest sets the
/// multipart content type and boundary.
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: search_endpoint(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, file: &SelectedFile) -> Result<Vec<ResultItem>, SearchError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(SearchError::ReadFile)?;
        let size = bytes.len();

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(file.content_type())?;
        let form = Form::new().part(FILE_FIELD, part);

        tracing::debug!(endpoint = %self.endpoint, file = %file.name, size, "posting search");

        let resp = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SearchError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;
        Ok(parsed.results)
    }
}

impl SearchBackend for HttpBackend {
    fn search<'a>(&'a self, file: &'a SelectedFile) -> SearchFuture<'a> {
        Box::pin(self.post(file))
    }
}

/// Join a base URL and the search path, tolerating a trailing slash.
pub fn search_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim().trim_end_matches('/'), SEARCH_PATH)
}
