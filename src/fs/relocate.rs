// src/fs/relocate.rs
//! Moving entries between the source tree and the destination root.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;

use super::scan::ImageEntry;

/// Failures surfaced to the user when a move is attempted.
#[derive(Debug, Error)]
pub enum RelocateError {
    #[error("destination directory is not set")]
    NoDestination,
    #[error("`{0}` is tracked in neither its source nor its destination directory")]
    LocationMismatch(String),
    #[error("refusing to overwrite `{0}`")]
    TargetExists(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Which way a toggle moved the file; drives the moved counter.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MoveDirection {
    ToDest,
    BackToSource,
}

/// Moves files between their source directory and a mirrored path under
/// the destination root, creating nested directories on demand.
#[derive(Debug, Default)]
pub struct Relocator {
    dest_root: Option<PathBuf>,
    /// Joined parent segments -> destination directory already created.
    dir_cache: HashMap<String, PathBuf>,
}

impl Relocator {
    pub fn new(dest_root: Option<PathBuf>) -> Self {
        let mut relocator = Relocator::default();
        if let Some(root) = dest_root {
            relocator.set_dest_root(root);
        }
        relocator
    }

    pub fn dest_root(&self) -> Option<&Path> {
        self.dest_root.as_deref()
    }

    pub fn set_dest_root(&mut self, root: PathBuf) {
        self.dir_cache.clear();
        self.dir_cache.insert(String::new(), root.clone());
        self.dest_root = Some(root);
    }

    /// Destination directory mirroring `segments`, created if missing.
    fn dest_dir_for(&mut self, segments: &[String]) -> Result<PathBuf, RelocateError> {
        let root = self.dest_root.clone().ok_or(RelocateError::NoDestination)?;
        let key = segments.join("/");
        if let Some(dir) = self.dir_cache.get(&key) {
            return Ok(dir.clone());
        }
        let mut dir = root;
        for segment in segments {
            dir.push(segment);
        }
        fs::create_dir_all(&dir)?;
        self.dir_cache.insert(key, dir.clone());
        Ok(dir)
    }

    /// Move `entry` to the destination if it still sits in its source
    /// directory, or back to the source if it sits in the destination.
    /// Any other tracked location means the bookkeeping went wrong.
    pub fn toggle(&mut self, entry: &mut ImageEntry) -> Result<MoveDirection, RelocateError> {
        let dest_dir = self.dest_dir_for(&entry.parent_segments)?;
        let (target, direction) = if entry.cur_dir == entry.src_dir {
            (dest_dir, MoveDirection::ToDest)
        } else if entry.cur_dir == dest_dir {
            (entry.src_dir.clone(), MoveDirection::BackToSource)
        } else {
            return Err(RelocateError::LocationMismatch(entry.rel_path.clone()));
        };

        let from = entry.path();
        let to = target.join(&entry.file_name);
        move_file(&from, &to)?;
        info!(from = %from.display(), to = %to.display(), "moved");
        entry.cur_dir = target;
        Ok(direction)
    }
}

/// Rename, or copy and remove when the rename fails (e.g. across
/// filesystems). The target must not already exist.
fn move_file(from: &Path, to: &Path) -> Result<(), RelocateError> {
    if to.exists() {
        return Err(RelocateError::TargetExists(to.to_path_buf()));
    }
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    fs::copy(from, to)?;
    fs::remove_file(from)?;
    Ok(())
}
