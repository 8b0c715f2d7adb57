// src/app/state.rs
//! Application state management.

use std::{
    path::PathBuf,
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::{Context, Result};
use image::DynamicImage;
use ratatui::{Frame, widgets::TableState};
use ratatui_image::picker::Picker;
use tracing::{info, warn};

use crate::{
    app::selection::{SelectionList, Toggle},
    config::Config,
    fs::{ImageEntry, MoveDirection, Relocator, collect_images, tail_path},
    ui::{
        keybindings::{NavigationAction, key_to_action},
        layout::{PanelVisibility, compute_layout},
        widgets::{
            StatusContext, render_gallery, render_names_panel, render_preview, render_status_bar,
        },
    },
};

use crossterm::event::KeyEvent;

/// What a toggle on the highlighted image does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Keep an in-memory list of selected names.
    Select,
    /// Relocate the file between source and destination.
    Move,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Select => "select",
            Mode::Move => "move",
        }
    }
}

/// A decoded preview delivered by the background loader.
pub struct PreviewFrame {
    pub index: usize,
    pub image: DynamicImage,
}

/// Main application state. All session state is an explicit field here;
/// nothing lives in module-level globals.
pub struct App {
    /// Root of the tree being triaged.
    pub source_root: PathBuf,
    /// Images retained by the walk, sorted by relative path.
    pub entries: Vec<ImageEntry>,
    /// Grid cursor.
    pub highlighted: usize,
    /// Gallery widget state (drives scrolling).
    pub table_state: TableState,
    /// Cells per gallery row.
    pub columns: usize,

    pub mode: Mode,
    pub selection: SelectionList,
    pub relocator: Relocator,
    /// Files currently sitting in the destination.
    pub moved_count: usize,

    /// Where `export_names` writes.
    pub report_path: PathBuf,
    /// Panel visibility state.
    pub visibility: PanelVisibility,
    /// Latest user-facing message; cleared by the next key press.
    pub alert: Option<String>,

    /// Terminal graphics picker for the preview pane.
    picker: Picker,
    /// Most recent decoded preview, tagged with its entry index.
    preview: Option<PreviewFrame>,
    /// Preview channel sender (background decoder -> UI)
    preview_tx: Sender<PreviewFrame>,
    /// Preview channel receiver
    preview_rx: Receiver<PreviewFrame>,
}

impl App {
    /// Scan the source tree and build the session.
    pub fn new(
        source_root: PathBuf,
        dest_root: Option<PathBuf>,
        mode: Mode,
        config: &Config,
        report_path: PathBuf,
    ) -> Result<Self> {
        let outcome = collect_images(&source_root)
            .with_context(|| format!("scanning {}", source_root.display()))?;
        info!(
            shown = outcome.images.len(),
            seen = outcome.files_seen,
            excluded = outcome.excluded,
            root = %source_root.display(),
            "scan finished"
        );

        let mut table_state = TableState::default();
        table_state.select(Some(0));

        // Probe the terminal, fall back to a fixed font size if the query
        // fails (dumb terminals, tests).
        let picker = Picker::from_query_stdio().unwrap_or_else(|_| Picker::from_fontsize((8, 12)));

        let (preview_tx, preview_rx) = std::sync::mpsc::channel::<PreviewFrame>();

        let visibility = PanelVisibility {
            preview: config.preview,
            ..PanelVisibility::default()
        };

        let app = Self {
            source_root,
            entries: outcome.images,
            highlighted: 0,
            table_state,
            columns: config.columns.clamp(1, 8) as usize,
            mode,
            selection: SelectionList::new(),
            relocator: Relocator::new(dest_root),
            moved_count: 0,
            report_path,
            visibility,
            alert: None,
            picker,
            preview: None,
            preview_tx,
            preview_rx,
        };
        app.request_preview();
        Ok(app)
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        self.alert = None;

        match key_to_action(&key) {
            NavigationAction::TogglePanel(d) => {
                self.visibility.toggle(d);
            }
            NavigationAction::Down => self.move_cursor(self.columns as isize),
            NavigationAction::Up => self.move_cursor(-(self.columns as isize)),
            NavigationAction::Right => self.move_cursor(1),
            NavigationAction::Left => self.move_cursor(-1),
            NavigationAction::Activate => self.activate(),
            NavigationAction::ClearSelections => self.clear_selections(),
            NavigationAction::ExportNames => self.export_names(),
            NavigationAction::Rescan => self.rescan(),
            NavigationAction::AddColumn => self.set_columns(self.columns + 1),
            NavigationAction::RemoveColumn => self.set_columns(self.columns.saturating_sub(1)),
            NavigationAction::Quit => return true,
            NavigationAction::None => {}
        }

        self.table_state.select(Some(self.cursor_row()));
        false
    }

    fn cursor_row(&self) -> usize {
        self.highlighted / self.columns.max(1)
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.entries.is_empty() {
            return;
        }
        let next = self.highlighted as isize + delta;
        if next >= 0 && (next as usize) < self.entries.len() {
            self.highlighted = next as usize;
            self.request_preview();
        }
    }

    fn set_columns(&mut self, columns: usize) {
        self.columns = columns.clamp(1, 8);
    }

    /// The toggle: selection-list flip or an actual move, per mode.
    fn activate(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        match self.mode {
            Mode::Select => {
                let rel = self.entries[self.highlighted].rel_path.clone();
                match self.selection.toggle(&rel) {
                    Toggle::Added => info!(path = %rel, "selected"),
                    Toggle::Removed => info!(path = %rel, "unselected"),
                }
            }
            Mode::Move => {
                let entry = &mut self.entries[self.highlighted];
                match self.relocator.toggle(entry) {
                    Ok(MoveDirection::ToDest) => self.moved_count += 1,
                    Ok(MoveDirection::BackToSource) => {
                        self.moved_count = self.moved_count.saturating_sub(1);
                    }
                    Err(err) => {
                        warn!(%err, "move aborted");
                        self.alert = Some(err.to_string());
                    }
                }
            }
        }
    }

    fn clear_selections(&mut self) {
        match self.mode {
            Mode::Select => {
                self.selection.clear();
                info!("selections cleared");
            }
            Mode::Move => {
                self.alert = Some("clear does not move files back; toggle them instead".into());
            }
        }
    }

    /// Write the names panel contents to the report file, one per line.
    fn export_names(&mut self) {
        let rows = self.panel_rows();
        if rows.is_empty() {
            self.alert = Some("nothing to export".into());
            return;
        }
        let mut body = rows.join("\n");
        body.push('\n');
        match std::fs::write(&self.report_path, body) {
            Ok(()) => {
                info!(
                    report = %self.report_path.display(),
                    count = rows.len(),
                    "names exported; run `rsync -R <files> <dst>` to copy them over"
                );
                self.alert = Some(format!(
                    "exported {} names to {}",
                    rows.len(),
                    self.report_path.display()
                ));
            }
            Err(err) => {
                warn!(%err, "export failed");
                self.alert = Some(format!("export failed: {err}"));
            }
        }
    }

    /// Walk the source tree again and reset per-session counters.
    fn rescan(&mut self) {
        match collect_images(&self.source_root) {
            Ok(outcome) => {
                info!(
                    shown = outcome.images.len(),
                    excluded = outcome.excluded,
                    "rescanned"
                );
                self.entries = outcome.images;
                self.highlighted = 0;
                self.selection.clear();
                self.moved_count = 0;
                self.preview = None;
                self.request_preview();
            }
            Err(err) => {
                warn!(%err, "rescan failed");
                self.alert = Some(format!("rescan failed: {err}"));
            }
        }
    }

    fn is_marked(&self, entry: &ImageEntry) -> bool {
        match self.mode {
            Mode::Select => self.selection.contains(&entry.rel_path),
            Mode::Move => entry.is_moved(),
        }
    }

    pub fn marked_count(&self) -> usize {
        match self.mode {
            Mode::Select => self.selection.count(),
            Mode::Move => self.moved_count,
        }
    }

    /// Rows for the names panel: the selection in select mode, the files
    /// currently moved in move mode.
    fn panel_rows(&self) -> Vec<String> {
        match self.mode {
            Mode::Select => self.selection.rows().to_vec(),
            Mode::Move => self
                .entries
                .iter()
                .filter(|entry| entry.is_moved())
                .map(|entry| entry.rel_path.clone())
                .collect(),
        }
    }

    /// Ask the background loader for the highlighted image. Decoding can
    /// be slow on large files, so it never runs on the UI thread.
    fn request_preview(&self) {
        let Some(entry) = self.entries.get(self.highlighted) else {
            return;
        };
        let tx = self.preview_tx.clone();
        let index = self.highlighted;
        let path = entry.path();
        thread::spawn(move || {
            if let Ok(image) = image::open(&path) {
                let _ = tx.send(PreviewFrame { index, image });
            }
        });
    }

    /// Drain the preview channel, keeping only a frame for the entry still
    /// highlighted.
    pub fn process_preview(&mut self) {
        while let Ok(frame) = self.preview_rx.try_recv() {
            if frame.index == self.highlighted {
                self.preview = Some(frame);
            }
        }
    }

    /// Draw the application UI.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let area = f.area();
        let layout = compute_layout(area, &self.visibility);
        let marked: Vec<bool> = self.entries.iter().map(|e| self.is_marked(e)).collect();

        for (column, panel) in layout.columns.iter().zip(layout.panel_order.iter()) {
            match *panel {
                "gallery" => {
                    let title = format!("1: {}", tail_path(&self.source_root, 3));
                    render_gallery(
                        f,
                        *column,
                        &title,
                        &self.entries,
                        &marked,
                        self.columns,
                        self.highlighted,
                        &mut self.table_state,
                    );
                }
                "preview" => {
                    let title = match self.entries.get(self.highlighted) {
                        Some(entry) => format!("2: {} [{}]", entry.rel_path, entry.kind),
                        None => "2: Preview".to_string(),
                    };
                    let image = self
                        .preview
                        .as_ref()
                        .filter(|frame| frame.index == self.highlighted)
                        .map(|frame| &frame.image);
                    render_preview(f, *column, &title, &mut self.picker, image);
                }
                "names" => {
                    let rows = self.panel_rows();
                    let title = format!("3: Selected ({})", rows.len());
                    render_names_panel(f, *column, &title, &rows);
                }
                _ => {}
            }
        }

        let dest = self
            .relocator
            .dest_root()
            .map(|path| path.display().to_string());
        render_status_bar(
            f,
            layout.status_area,
            &StatusContext {
                mode: self.mode.label(),
                shown: self.entries.len(),
                marked: self.marked_count(),
                columns: self.columns,
                dest: dest.as_deref(),
                alert: self.alert.as_deref(),
            },
        );
    }
}
