// src/ui/widgets/gallery.rs
//! Gallery grid widget.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use crate::fs::ImageEntry;

/// Render the image grid: `columns` cells per row, markers on marked
/// entries, the highlighted cell reversed. `state` tracks the cursor row
/// so the table scrolls with it.
pub fn render_gallery(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    entries: &[ImageEntry],
    marked: &[bool],
    columns: usize,
    highlighted: usize,
    state: &mut TableState,
) {
    let columns = columns.max(1);

    let rows: Vec<Row> = entries
        .chunks(columns)
        .enumerate()
        .map(|(row_idx, chunk)| {
            let cells: Vec<Cell> = chunk
                .iter()
                .enumerate()
                .map(|(col_idx, entry)| {
                    let index = row_idx * columns + col_idx;
                    let flagged = marked.get(index).copied().unwrap_or(false);
                    let symbol = if flagged { "▣" } else { " " };
                    let text = format!("{} {} [{}]", symbol, entry.rel_path, entry.kind);

                    let mut style = Style::default();
                    if flagged {
                        style = style.fg(Color::Green);
                    }
                    if index == highlighted {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Cell::from(Span::styled(text, style))
                })
                .collect();
            Row::new(cells)
        })
        .collect();

    let widths = vec![Constraint::Ratio(1, columns as u32); columns];
    let table = Table::new(rows, widths)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string()),
        )
        .column_spacing(1);

    f.render_stateful_widget(table, area, state);
}
