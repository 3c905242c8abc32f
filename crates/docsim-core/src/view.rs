//! Front-end agnostic render model for [`SearchWidget`].
//!
//! [`render`] is a pure function of widget state. The terminal UI and the CLI
//! both draw from the [`WidgetView`] it returns, so the show/hide rules for
//! the error line and the results block live in exactly one place.

use std::str::FromStr;

use crate::widget::SearchWidget;

/// Which links each result row offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkSet {
    /// "Open" (new tab) and "Download" (forced download).
    #[default]
    OpenAndDownload,
    /// Only "Download".
    DownloadOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Open,
    Download,
}

impl LinkSet {
    pub fn kinds(self) -> &'static [LinkKind] {
        match self {
            LinkSet::OpenAndDownload => &[LinkKind::Open, LinkKind::Download],
            LinkSet::DownloadOnly => &[LinkKind::Download],
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            LinkSet::OpenAndDownload => "open-and-download",
            LinkSet::DownloadOnly => "download-only",
        }
    }
}

impl FromStr for LinkSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open-and-download" | "both" => Ok(LinkSet::OpenAndDownload),
            "download-only" | "download" => Ok(LinkSet::DownloadOnly),
            other => Err(format!(
                "unknown link set '{}' (expected open-and-download or download-only)",
                other
            )),
        }
    }
}

/// A hyperlink to a result document. The widget never fetches it; front ends
/// hand `href` to whatever opens URLs on the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub kind: LinkKind,
    pub label: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub document: String,
    /// Localized score text, e.g. `score: 0.91`.
    pub score: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsBlock {
    pub heading: &'static str,
    pub rows: Vec<ResultRow>,
}

/// Everything a front end needs to draw the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub title: &'static str,
    /// Selected file name, or the localized "no file chosen" placeholder.
    pub file_label: String,
    pub file_selected: bool,
    pub submit: SubmitButton,
    /// Present iff the error message is non-empty.
    pub error: Option<String>,
    /// Present iff there is at least one result.
    pub results: Option<ResultsBlock>,
}

pub fn render(widget: &SearchWidget) -> WidgetView {
    let strings = widget.strings();
    let loading = widget.is_loading();

    let (file_label, file_selected) = match widget.selected_file() {
        Some(file) => (file.name.clone(), true),
        None => (strings.no_file_chosen.to_string(), false),
    };

    let error = if widget.error().is_empty() {
        None
    } else {
        Some(widget.error().to_string())
    };

    let results = if widget.results().is_empty() {
        None
    } else {
        let rows = widget
            .results()
            .iter()
            .map(|item| ResultRow {
                document: item.document.clone(),
                score: format!("{}{}", strings.score_prefix, item.score),
                links: widget
                    .link_set()
                    .kinds()
                    .iter()
                    .map(|&kind| Link {
                        kind,
                        label: match kind {
                            LinkKind::Open => strings.open_link,
                            LinkKind::Download => strings.download_link,
                        },
                        href: item.download_url.clone(),
                    })
                    .collect(),
            })
            .collect();
        Some(ResultsBlock {
            heading: strings.results_heading,
            rows,
        })
    };

    WidgetView {
        title: strings.title,
        file_label,
        file_selected,
        submit: SubmitButton {
            label: if loading {
                strings.submit_busy
            } else {
                strings.submit_idle
            },
            disabled: loading,
        },
        error,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Locale, ResultItem, SearchError, SelectedFile};

    fn item(doc: &str, score: f64) -> ResultItem {
        ResultItem {
            document: doc.to_string(),
            score,
            download_url: format!("http://host/documents/{doc}"),
        }
    }

    #[test]
    fn idle_view_shows_only_picker_and_button() {
        let widget = SearchWidget::default();
        let view = render(&widget);
        assert_eq!(view.title, "Legal Document Similarity Search");
        assert_eq!(view.file_label, "No file chosen");
        assert!(!view.file_selected);
        assert_eq!(view.submit.label, "Upload & Search");
        assert!(!view.submit.disabled);
        assert!(view.error.is_none());
        assert!(view.results.is_none());
    }

    #[test]
    fn loading_disables_button_and_swaps_label() {
        let mut widget = SearchWidget::default();
        widget.select_file(Some(SelectedFile::from_path("brief.pdf")));
        let ticket = widget.begin_search().unwrap();

        let view = render(&widget);
        assert!(view.submit.disabled);
        assert_eq!(view.submit.label, "Searching...");
        assert_eq!(view.file_label, "brief.pdf");

        widget.complete_search(ticket.generation, Ok(vec![]));
        let view = render(&widget);
        assert!(!view.submit.disabled);
        assert_eq!(view.submit.label, "Upload & Search");
    }

    #[test]
    fn rows_carry_both_links_in_server_order() {
        let mut widget = SearchWidget::default();
        widget.select_file(Some(SelectedFile::from_path("brief.pdf")));
        let ticket = widget.begin_search().unwrap();
        widget.complete_search(
            ticket.generation,
            Ok(vec![item("case_12.pdf", 0.91), item("case_3.pdf", 0.5)]),
        );

        let block = render(&widget).results.unwrap();
        assert_eq!(block.heading, "Similar Documents");
        assert_eq!(block.rows.len(), 2);
        assert_eq!(block.rows[0].document, "case_12.pdf");
        assert_eq!(block.rows[0].score, "score: 0.91");
        assert_eq!(block.rows[1].document, "case_3.pdf");

        let links = &block.rows[0].links;
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].kind, LinkKind::Open);
        assert_eq!(links[0].label, "Open");
        assert_eq!(links[1].kind, LinkKind::Download);
        assert_eq!(links[1].href, "http://host/documents/case_12.pdf");
    }

    #[test]
    fn bulgarian_download_only_variant() {
        let mut widget = SearchWidget::new(Locale::Bulgarian, LinkSet::DownloadOnly);
        widget.select_file(Some(SelectedFile::from_path("дело.pdf")));
        let ticket = widget.begin_search().unwrap();
        widget.complete_search(ticket.generation, Ok(vec![item("case_1.pdf", 1.0)]));

        let view = render(&widget);
        assert_eq!(view.title, "Търсачка на подобни съдебни дела");
        let row = &view.results.unwrap().rows[0];
        assert_eq!(row.score, "близост: 1");
        assert_eq!(row.links.len(), 1);
        assert_eq!(row.links[0].kind, LinkKind::Download);
        assert_eq!(row.links[0].label, "Изтегли");
    }

    #[test]
    fn error_paragraph_tracks_error_message() {
        let mut widget = SearchWidget::default();
        assert!(widget.begin_search().is_none());
        let view = render(&widget);
        assert_eq!(view.error.as_deref(), Some("Please select a PDF file."));
        assert!(view.results.is_none());

        widget.select_file(None);
        assert!(render(&widget).error.is_none());
    }

    #[test]
    fn stale_results_and_new_error_render_together() {
        let mut widget = SearchWidget::default();
        widget.select_file(Some(SelectedFile::from_path("brief.pdf")));
        let first = widget.begin_search().unwrap();
        widget.complete_search(first.generation, Ok(vec![item("case_1.pdf", 0.7)]));

        // Retry without reselecting: old results stay under the new error.
        let retry = widget.begin_search().unwrap();
        widget.complete_search(
            retry.generation,
            Err(SearchError::RequestFailed { status: 500 }),
        );

        let view = render(&widget);
        assert!(view.error.is_some());
        assert_eq!(view.results.unwrap().rows.len(), 1);
    }

    #[test]
    fn link_set_parses_codes_and_aliases() {
        assert_eq!(
            "download-only".parse::<LinkSet>().unwrap(),
            LinkSet::DownloadOnly
        );
        assert_eq!("both".parse::<LinkSet>().unwrap(), LinkSet::OpenAndDownload);
        assert_eq!(
            LinkSet::OpenAndDownload.code().parse::<LinkSet>().unwrap(),
            LinkSet::OpenAndDownload
        );
        assert!("none".parse::<LinkSet>().is_err());
    }
}
