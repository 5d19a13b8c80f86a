use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use bmail::mail::{relative_label, Message};

use crate::config::ThemeConfig;

/// Full message view: headers followed by the body with its embedded line
/// breaks preserved. Doubles as the preview pane next to the list.
pub fn render_reader(
    f: &mut Frame,
    area: Rect,
    message: Option<&Message>,
    scroll: u16,
    now: DateTime<Utc>,
    focused: bool,
    theme: &ThemeConfig,
) {
    let border_style = if focused {
        Style::default().fg(theme.border_active())
    } else {
        Style::default().fg(theme.border())
    };

    let Some(msg) = message else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No message selected",
            Style::default().fg(theme.fg_muted()),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Message"),
        );
        f.render_widget(empty, area);
        return;
    };

    let header_style = Style::default().fg(theme.fg_muted());
    let mut lines = vec![
        Line::from(Span::styled(
            msg.subject.clone(),
            Style::default().fg(theme.fg()).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("From: ", header_style),
            Span::styled(msg.from.clone(), Style::default().fg(theme.fg_subtle())),
        ]),
        Line::from(vec![
            Span::styled("To: ", header_style),
            Span::styled(msg.to.clone(), Style::default().fg(theme.fg_subtle())),
        ]),
        Line::from(Span::styled(relative_label(msg.timestamp, now), header_style)),
        Line::raw(""),
    ];
    lines.extend(msg.body.lines().map(|l| Line::raw(l.to_string())));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Message"),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    f.render_widget(paragraph, area);
}
