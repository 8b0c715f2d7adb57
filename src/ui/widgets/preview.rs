// src/ui/widgets/preview.rs
//! Preview panel: the highlighted image rendered in the terminal.

use image::DynamicImage;
use ratatui::{
    Frame,
    layout::{Margin, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use ratatui_image::{Image, Resize, picker::Picker};

/// Render the preview pane. `image` is absent while the background decode
/// is still running or when decoding failed.
pub fn render_preview(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    picker: &mut Picker,
    image: Option<&DynamicImage>,
) {
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string()),
        area,
    );

    let inner = area.inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    match image {
        Some(dyn_img) => {
            // protocol size uses 0,0 origin but same width/height in cells
            let proto_size = Rect::new(0, 0, inner.width, inner.height);
            if let Ok(proto) = picker.new_protocol(dyn_img.clone(), proto_size, Resize::Fit(None)) {
                f.render_widget(Image::new(&proto), inner);
            }
        }
        None => {
            f.render_widget(Paragraph::new("No preview").wrap(Wrap { trim: true }), inner);
        }
    }
}
