use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use docsim_core::UiStrings;

use crate::theme::Theme;
use crate::view::centered_rect;

/// Render the help overlay as a centered popup.
pub fn render(f: &mut Frame, theme: &Theme, ui: &UiStrings) {
    let popup = centered_rect(64, 27, f.area());

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", ui.help_title),
            theme.header_style(),
        )),
        Line::from(""),
        section_header(ui.help_section_search, theme),
        key_line("o / a", ui.help_choose_pdf, theme),
        key_line("x", ui.help_clear_file, theme),
        key_line("Enter / s", ui.help_submit, theme),
        Line::from(""),
        section_header(ui.help_section_results, theme),
        key_line("j / \u{2193}", ui.help_move_down, theme),
        key_line("k / \u{2191}", ui.help_move_up, theme),
        key_line("g / G", ui.help_top_bottom, theme),
        key_line("O", ui.help_open, theme),
        key_line("d", ui.help_download, theme),
        key_line("y", ui.help_copy, theme),
        Line::from(""),
        section_header(ui.help_section_picker, theme),
        key_line("Enter", ui.help_pick, theme),
        key_line("h / Backspace", ui.help_parent, theme),
        key_line("Esc", ui.help_back, theme),
        Line::from(""),
        section_header(ui.help_section_global, theme),
        key_line("?", ui.help_toggle, theme),
        key_line("q", ui.help_quit, theme),
        key_line("Ctrl+c", ui.help_force_quit, theme),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.active))
                .title(format!(" {} ", ui.key_help)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn section_header<'a>(title: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.active)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {key:<16}"), Style::default().fg(theme.text)),
        Span::styled(desc, Style::default().fg(theme.dim)),
    ])
}
