// src/ui/widgets/names_panel.rs
//! Selected file names side panel.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListItem},
};

/// Render the names list; the running count lives in the title.
pub fn render_names_panel(f: &mut Frame<'_>, area: Rect, title: &str, rows: &[String]) {
    let items: Vec<ListItem> = rows.iter().map(|row| ListItem::new(row.as_str())).collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string()),
    );

    f.render_widget(list, area);
}
