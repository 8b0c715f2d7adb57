// src/ui/layout.rs
//! Layout computation for the UI panels.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Visibility state for UI panels.
#[derive(Debug, Clone, Copy)]
pub struct PanelVisibility {
    pub gallery: bool,
    pub preview: bool,
    /// The names list starts hidden; Shift+3 brings it up.
    pub names: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            gallery: true,
            preview: true,
            names: false,
        }
    }
}

impl PanelVisibility {
    /// Toggle a panel by number (1-3).
    pub fn toggle(&mut self, panel: usize) {
        match panel {
            1 => self.gallery = !self.gallery,
            2 => self.preview = !self.preview,
            3 => self.names = !self.names,
            _ => {}
        }
    }
}

/// Computed layout areas for rendering.
pub struct ComputedLayout {
    /// Bottom status line, always present
    pub status_area: Rect,
    /// Column areas within the main area
    pub columns: Vec<Rect>,
    /// Order of panels in columns
    pub panel_order: Vec<&'static str>,
}

/// Compute the layout based on total area and panel visibility.
pub fn compute_layout(area: Rect, visibility: &PanelVisibility) -> ComputedLayout {
    // The status line keeps the bottom row; the panels share the rest.
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    let (main_area, status_area) = (vertical_chunks[0], vertical_chunks[1]);

    // Build column weights dynamically based on visible panels
    let mut panel_order = Vec::new();
    let mut weights = Vec::new();

    if visibility.gallery {
        panel_order.push("gallery");
        weights.push(46u16);
    }
    if visibility.preview {
        panel_order.push("preview");
        weights.push(32u16);
    }
    if visibility.names {
        panel_order.push("names");
        weights.push(22u16);
    }

    let columns: Vec<Rect> = if !weights.is_empty() {
        let sum: u16 = weights.iter().copied().sum();
        let constraints: Vec<Constraint> = weights
            .into_iter()
            .map(|w| Constraint::Percentage((w as u32 * 100 / sum as u32) as u16))
            .collect();
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(main_area)
            .iter()
            .cloned()
            .collect()
    } else {
        // If no panels visible, keep a single full-width column
        vec![main_area]
    };

    ComputedLayout {
        status_area,
        columns,
        panel_order,
    }
}
