// src/ui/widgets/status_bar.rs
//! Bottom status line.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Everything the status line shows.
pub struct StatusContext<'a> {
    pub mode: &'a str,
    pub shown: usize,
    pub marked: usize,
    pub columns: usize,
    pub dest: Option<&'a str>,
    pub alert: Option<&'a str>,
}

/// Render mode, counters, destination and the latest alert on one line.
pub fn render_status_bar(f: &mut Frame<'_>, area: Rect, ctx: &StatusContext<'_>) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", ctx.mode),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw(format!(
            " {} images  {} marked  {} cols ",
            ctx.shown, ctx.marked, ctx.columns
        )),
    ];
    if let Some(dest) = ctx.dest {
        spans.push(Span::styled(
            format!(" dst: {} ", dest),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(alert) = ctx.alert {
        spans.push(Span::styled(
            format!(" {} ", alert),
            Style::default().fg(Color::Red),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
