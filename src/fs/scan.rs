// src/fs/scan.rs
//! Recursive source-tree walk producing classified image entries.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use super::sniff::{Classification, MimeType, classify};

/// One image retained by the walk, with the bookkeeping needed to move it
/// and to show where it came from.
#[derive(Debug, Clone)]
pub struct ImageEntry {
    /// Final path component.
    pub file_name: String,
    /// Directory names between the scan root and the file. The root itself
    /// is not included; it is the same for every entry.
    pub parent_segments: Vec<String>,
    /// `parent_segments` joined with '/' plus the file name. Sort key and
    /// display name.
    pub rel_path: String,
    /// Directory that owned the file when it was scanned.
    pub src_dir: PathBuf,
    /// Directory that holds the file right now. The only field a move
    /// updates.
    pub cur_dir: PathBuf,
    /// Sniffed or reported image type.
    pub kind: MimeType,
}

impl ImageEntry {
    /// Current on-disk location.
    pub fn path(&self) -> PathBuf {
        self.cur_dir.join(&self.file_name)
    }

    /// True once the file sits outside its source directory.
    pub fn is_moved(&self) -> bool {
        self.cur_dir != self.src_dir
    }
}

/// Walk summary: retained entries plus what was looked at.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub images: Vec<ImageEntry>,
    pub files_seen: usize,
    pub excluded: usize,
}

/// Recursively classify every regular file under `dir`. `parents` carries
/// the directory names accumulated from the scan root; recursion extends
/// it by one name per subdirectory. Entries that are neither regular files
/// nor directories are skipped. Traversal order is whatever the filesystem
/// gives back; `collect_images` sorts.
pub fn walk_dir(dir: &Path, parents: &[String], out: &mut ScanOutcome) -> io::Result<()> {
    for item in fs::read_dir(dir)? {
        let item = item?;
        let file_type = match item.file_type() {
            Ok(t) => t,
            Err(err) => {
                warn!(path = %item.path().display(), %err, "skipping unreadable entry");
                continue;
            }
        };
        let name = item.file_name().to_string_lossy().into_owned();

        if file_type.is_dir() {
            let mut nested = parents.to_vec();
            nested.push(name);
            walk_dir(&item.path(), &nested, out)?;
        } else if file_type.is_file() {
            out.files_seen += 1;
            let path = item.path();
            match classify(&path) {
                Classification::Image(kind) => {
                    let mut rel = parents.join("/");
                    if !rel.is_empty() {
                        rel.push('/');
                    }
                    rel.push_str(&name);
                    out.images.push(ImageEntry {
                        file_name: name,
                        parent_segments: parents.to_vec(),
                        rel_path: rel,
                        src_dir: dir.to_path_buf(),
                        cur_dir: dir.to_path_buf(),
                        kind,
                    });
                }
                Classification::Excluded => {
                    out.excluded += 1;
                    debug!(path = %path.display(), "not an image, dropped");
                }
            }
        }
        // Sockets, symlinks and friends fall through.
    }
    Ok(())
}

/// Walk `root` and return its images sorted by relative path.
pub fn collect_images(root: &Path) -> io::Result<ScanOutcome> {
    let mut out = ScanOutcome::default();
    walk_dir(root, &[], &mut out)?;
    out.images.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
    Ok(out)
}

/// Last `n` components of `path`, for pane titles.
pub fn tail_path(path: &Path, n: usize) -> String {
    let comps: Vec<String> = path
        .iter()
        .map(|c| c.to_string_lossy().into_owned())
        .collect();
    let start = comps.len().saturating_sub(n);
    comps[start..].join("/")
}
