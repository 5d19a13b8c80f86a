use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::View;
use crate::config::ThemeConfig;

pub fn render_help(
    f: &mut Frame,
    area: Rect,
    view: View,
    status: Option<&str>,
    search_query: Option<&str>,
    theme: &ThemeConfig,
) {
    let key_style = Style::default().fg(theme.primary());
    let text_style = Style::default().fg(theme.fg_subtle());
    let search_style = Style::default().fg(theme.fg());
    let cursor_style = Style::default().fg(theme.primary());

    let help_text = match view {
        View::Search => vec![
            Span::styled("/", key_style),
            Span::raw(" "),
            Span::styled(search_query.unwrap_or(""), search_style),
            Span::styled("_", cursor_style),
            Span::styled("  ", text_style),
            Span::styled("Enter", key_style),
            Span::styled(" confirm  ", text_style),
            Span::styled("Esc", key_style),
            Span::styled(" cancel", text_style),
        ],
        View::List => vec![
            Span::styled("j/k", key_style),
            Span::styled(" nav  ", text_style),
            Span::styled("Tab/1-5", key_style),
            Span::styled(" folder  ", text_style),
            Span::styled("Enter", key_style),
            Span::styled(" open  ", text_style),
            Span::styled("s", key_style),
            Span::styled(" star  ", text_style),
            Span::styled("d", key_style),
            Span::styled(" delete  ", text_style),
            Span::styled("c", key_style),
            Span::styled(" compose  ", text_style),
            Span::styled("/", key_style),
            Span::styled(" search  ", text_style),
            Span::styled("q", key_style),
            Span::styled(" quit", text_style),
        ],
        View::Reader => vec![
            Span::styled("j/k", key_style),
            Span::styled(" scroll  ", text_style),
            Span::styled("s", key_style),
            Span::styled(" star  ", text_style),
            Span::styled("d", key_style),
            Span::styled(" delete  ", text_style),
            Span::styled("q/Esc", key_style),
            Span::styled(" back", text_style),
        ],
        View::Compose => vec![
            Span::styled("Tab", key_style),
            Span::styled(" field  ", text_style),
            Span::styled("Ctrl-s", key_style),
            Span::styled(" send  ", text_style),
            Span::styled("Ctrl-d", key_style),
            Span::styled(" save draft  ", text_style),
            Span::styled("Esc", key_style),
            Span::styled(" discard", text_style),
        ],
    };

    let mut line = Line::from(help_text);

    if let Some(msg) = status {
        line.spans
            .push(Span::styled("  │  ", Style::default().fg(theme.border())));
        line.spans
            .push(Span::styled(msg, Style::default().fg(theme.success())));
    }

    let paragraph = Paragraph::new(line).style(Style::default().bg(theme.bg_panel()));

    f.render_widget(paragraph, area);
}
