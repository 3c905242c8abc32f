use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use docsim_core::LinkKind;

use crate::app::App;
use crate::view::{spinner_char, truncate};

/// Render the search screen: file, button, error line, results.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let view = app.widget.view();
    let ui = &app.widget.strings().ui;

    let error_height = if view.error.is_some() { 1 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(1),            // header
        Constraint::Length(3),            // file box
        Constraint::Length(1),            // submit button
        Constraint::Length(error_height), // error line
        Constraint::Min(3),               // results
        Constraint::Length(1),            // footer
    ])
    .split(area);

    // Header: title left, server right
    let header = Line::from(vec![
        Span::styled(" docsim ", theme.header_style()),
        Span::styled(
            format!(" {}", view.title),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);
    let server = Line::from(Span::styled(
        format!("{} ", app.server_url),
        Style::default().fg(theme.dim),
    ))
    .alignment(Alignment::Right);
    f.render_widget(Paragraph::new(server), chunks[0]);

    // File box
    let file_style = if view.file_selected {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim)
    };
    let file_width = chunks[1].width.saturating_sub(4) as usize;
    let file_line = Line::from(vec![
        Span::styled(" \u{1F4C4} ", Style::default().fg(theme.active)),
        Span::styled(truncate(&view.file_label, file_width), file_style),
    ]);
    let file_box = Paragraph::new(file_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(format!(" {} ", ui.file_box_title)),
    );
    f.render_widget(file_box, chunks[1]);

    // Submit button
    let mut button = vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", view.submit.label),
            theme.button_style(view.submit.disabled),
        ),
    ];
    if view.submit.disabled {
        button.push(Span::styled(
            format!(" {}", spinner_char(app.tick)),
            Style::default().fg(theme.spinner),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(button)), chunks[2]);

    // Error line
    if let Some(error) = &view.error {
        let line = Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ));
        f.render_widget(Paragraph::new(line), chunks[3]);
    }

    // Results
    match &view.results {
        Some(block) => {
            let width = chunks[4].width.saturating_sub(4) as usize;
            let items: Vec<ListItem> = block
                .rows
                .iter()
                .map(|row| {
                    let doc = truncate(&row.document, width.saturating_sub(row.score.len() + 2));
                    let mut link_spans = vec![Span::raw("    ")];
                    for link in &row.links {
                        let key = match link.kind {
                            LinkKind::Open => "O",
                            LinkKind::Download => "d",
                        };
                        link_spans.push(Span::styled(
                            format!("[{}] ", key),
                            Style::default().fg(theme.dim),
                        ));
                        link_spans.push(Span::styled(
                            format!("{}  ", link.label),
                            Style::default()
                                .fg(theme.active)
                                .add_modifier(Modifier::UNDERLINED),
                        ));
                    }
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(
                                doc,
                                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                            ),
                            Span::raw("  "),
                            Span::styled(row.score.clone(), Style::default().fg(theme.score)),
                        ]),
                        Line::from(link_spans),
                    ])
                })
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.border_style())
                        .title(format!(" {} ({}) ", block.heading, block.rows.len())),
                )
                .highlight_style(theme.highlight_style());

            let mut state = ListState::default();
            state.select(Some(app.result_cursor.min(block.rows.len().saturating_sub(1))));
            f.render_stateful_widget(list, chunks[4], &mut state);
        }
        None => {
            let hint = if view.submit.disabled {
                format!("  {} {}", spinner_char(app.tick), view.submit.label)
            } else if view.file_selected {
                format!("  {}", ui.hint_search)
            } else {
                format!("  {}", ui.hint_choose_file)
            };
            let empty = Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(theme.dim),
            )))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style()),
            );
            f.render_widget(empty, chunks[4]);
        }
    }

    // Footer: transient status wins over key hints
    let footer_text = match &app.status_message {
        Some(msg) => format!(" {}", msg),
        None => {
            let open = if app.widget.link_set().kinds().contains(&LinkKind::Open) {
                format!("O:{}  ", ui.key_open)
            } else {
                String::new()
            };
            format!(
                " o:{}  Enter:{}  j/k:{}  {}d:{}  y:{}  ?:{}  q:{}",
                ui.key_choose_file,
                ui.key_search,
                ui.key_move,
                open,
                ui.key_download,
                ui.key_copy,
                ui.key_help,
                ui.key_quit
            )
        }
    };
    let footer = Line::from(Span::styled(footer_text, theme.footer_style()));
    f.render_widget(Paragraph::new(footer), chunks[5]);
}
