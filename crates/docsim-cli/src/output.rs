use std::io::Write;

use docsim_core::WidgetView;
use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print a rendered widget: title, uploaded file, then the error line or the
/// numbered results with their links.
pub fn print_view(w: &mut dyn Write, view: &WidgetView, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", view.title.bold())?;
    } else {
        writeln!(w, "{}", view.title)?;
    }
    writeln!(w, "{}", view.file_label)?;
    writeln!(w)?;

    if let Some(error) = &view.error {
        if color.enabled() {
            writeln!(w, "{}", error.red().bold())?;
        } else {
            writeln!(w, "{}", error)?;
        }
    }

    if let Some(block) = &view.results {
        if color.enabled() {
            writeln!(w, "{}", block.heading.bold().underline())?;
        } else {
            writeln!(w, "{}", block.heading)?;
        }

        for (i, row) in block.rows.iter().enumerate() {
            if color.enabled() {
                writeln!(
                    w,
                    "{:>3}. {}  {}",
                    i + 1,
                    row.document.bold(),
                    row.score.dimmed()
                )?;
            } else {
                writeln!(w, "{:>3}. {}  {}", i + 1, row.document, row.score)?;
            }
            for link in &row.links {
                if color.enabled() {
                    writeln!(w, "       {}: {}", link.label, link.href.cyan())?;
                } else {
                    writeln!(w, "       {}: {}", link.label, link.href)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsim_core::{LinkSet, Locale, ResultItem, SearchError, SearchWidget, SelectedFile};

    fn plain(view: &WidgetView) -> String {
        let mut buf = Vec::new();
        print_view(&mut buf, view, ColorMode(false)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn prints_numbered_results_with_links() {
        let mut widget = SearchWidget::default();
        widget.select_file(Some(SelectedFile::from_path("brief.pdf")));
        let t = widget.begin_search().unwrap();
        widget.complete_search(
            t.generation,
            Ok(vec![ResultItem {
                document: "case_12.pdf".into(),
                score: 0.91,
                download_url: "http://host/documents/case_12.pdf".into(),
            }]),
        );

        let out = plain(&widget.view());
        assert!(out.starts_with("Legal Document Similarity Search\nbrief.pdf\n"));
        assert!(out.contains("Similar Documents"));
        assert!(out.contains("  1. case_12.pdf  score: 0.91"));
        assert!(out.contains("Open: http://host/documents/case_12.pdf"));
        assert!(out.contains("Download: http://host/documents/case_12.pdf"));
    }

    #[test]
    fn prints_error_without_results_block() {
        let mut widget = SearchWidget::new(Locale::Bulgarian, LinkSet::DownloadOnly);
        widget.select_file(Some(SelectedFile::from_path("brief.pdf")));
        let t = widget.begin_search().unwrap();
        widget.complete_search(t.generation, Err(SearchError::RequestFailed { status: 503 }));

        let out = plain(&widget.view());
        assert!(out.contains("Грешка при търсенето."));
        assert!(!out.contains("Подобни документи"));
    }
}
