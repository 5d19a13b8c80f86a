use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{ComposeField, ComposeState};
use crate::config::ThemeConfig;

pub fn render_compose(f: &mut Frame, area: Rect, compose: &ComposeState, theme: &ThemeConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // To/Subject
            Constraint::Min(5),    // Body
        ])
        .split(area);

    let title = if compose.draft_id.is_some() {
        "Edit Draft"
    } else {
        "Compose"
    };

    let header_text = vec![
        header_line("To: ", &compose.to, compose.field == ComposeField::To, theme),
        header_line(
            "Subject: ",
            &compose.subject,
            compose.field == ComposeField::Subject,
            theme,
        ),
    ];
    let header = Paragraph::new(header_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .title(title),
    );
    f.render_widget(header, chunks[0]);

    let body_active = compose.field == ComposeField::Body;
    let mut body_lines: Vec<Line> = compose
        .body
        .lines()
        .map(|l| Line::raw(l.to_string()))
        .collect();
    if body_lines.is_empty() {
        body_lines.push(Line::raw(""));
    }
    if body_active {
        // Cursor on the last line.
        if compose.body.ends_with('\n') {
            body_lines.push(Line::raw(""));
        }
        if let Some(last) = body_lines.last_mut() {
            last.spans
                .push(Span::styled("_", Style::default().fg(theme.primary())));
        }
    }
    let body_border = if body_active {
        Style::default().fg(theme.border_active())
    } else {
        Style::default().fg(theme.border())
    };
    let body = Paragraph::new(body_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(body_border)
                .title("Body"),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(body, chunks[1]);
}

fn header_line<'a>(
    label: &'a str,
    value: &'a str,
    active: bool,
    theme: &ThemeConfig,
) -> Line<'a> {
    let label_style = if active {
        Style::default()
            .fg(theme.primary())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_muted())
    };
    let mut spans = vec![
        Span::styled(label, label_style),
        Span::styled(value, Style::default().fg(theme.fg())),
    ];
    if active {
        spans.push(Span::styled("_", Style::default().fg(theme.primary())));
    }
    Line::from(spans)
}
