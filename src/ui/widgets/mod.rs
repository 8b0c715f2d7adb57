// src/ui/widgets/mod.rs
//! Custom widgets for the imgsift UI.

pub mod gallery;
pub mod names_panel;
pub mod preview;
pub mod status_bar;

// Re-export widget rendering functions
pub use gallery::render_gallery;
pub use names_panel::render_names_panel;
pub use preview::render_preview;
pub use status_bar::{StatusContext, render_status_bar};
