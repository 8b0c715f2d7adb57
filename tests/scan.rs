use std::fs;

use imgsift::fs::{Classification, MimeType, classify, collect_images};
use tempfile::tempdir;

const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

#[test]
fn walker_sees_every_file_and_joins_relative_paths() -> anyhow::Result<()> {
    let root = tempdir()?;
    fs::create_dir_all(root.path().join("a/b"))?;
    fs::write(root.path().join("top.png"), PNG_MAGIC)?;
    fs::write(root.path().join("a/one.png"), PNG_MAGIC)?;
    fs::write(root.path().join("a/b/two.png"), PNG_MAGIC)?;
    fs::write(root.path().join("a/notes.txt"), b"plain text")?;

    let outcome = collect_images(root.path())?;
    assert_eq!(outcome.files_seen, 4);
    assert_eq!(outcome.excluded, 1);

    let rels: Vec<&str> = outcome
        .images
        .iter()
        .map(|entry| entry.rel_path.as_str())
        .collect();
    assert_eq!(rels, ["a/b/two.png", "a/one.png", "top.png"]);
    Ok(())
}

#[test]
fn entries_track_their_owning_directory() -> anyhow::Result<()> {
    let root = tempdir()?;
    fs::create_dir_all(root.path().join("sub"))?;
    fs::write(root.path().join("sub/pic.png"), PNG_MAGIC)?;

    let outcome = collect_images(root.path())?;
    let entry = &outcome.images[0];
    assert_eq!(entry.file_name, "pic.png");
    assert_eq!(entry.parent_segments, ["sub"]);
    assert_eq!(entry.src_dir, root.path().join("sub"));
    assert_eq!(entry.cur_dir, entry.src_dir);
    assert!(!entry.is_moved());
    assert!(entry.path().exists());
    Ok(())
}

#[test]
fn extension_fast_path_trusts_the_reported_type() {
    let root = tempdir().unwrap();
    // Not an image at all, but the reported type wins without a read.
    let path = root.path().join("fake.png");
    fs::write(&path, b"definitely not a png").unwrap();
    assert_eq!(classify(&path), Classification::Image(MimeType::Png));
}

#[test]
fn extensionless_files_fall_back_to_the_magic_sniff() {
    let root = tempdir().unwrap();

    let png = root.path().join("photo");
    fs::write(&png, PNG_MAGIC).unwrap();
    assert_eq!(classify(&png), Classification::Image(MimeType::Png));

    let junk = root.path().join("data");
    fs::write(&junk, [0u8; 16]).unwrap();
    assert_eq!(classify(&junk), Classification::Excluded);
}

#[test]
fn two_byte_bmp_prefix_is_enough() {
    let root = tempdir().unwrap();
    let bmp = root.path().join("tiny");
    fs::write(&bmp, [0x42, 0x4d]).unwrap();
    assert_eq!(classify(&bmp), Classification::Image(MimeType::Bmp));
}

#[test]
fn empty_files_are_excluded() {
    let root = tempdir().unwrap();
    let empty = root.path().join("empty.bin");
    fs::write(&empty, b"").unwrap();
    assert_eq!(classify(&empty), Classification::Excluded);
}

#[cfg(unix)]
#[test]
fn symlinks_are_silently_skipped() -> anyhow::Result<()> {
    let root = tempdir()?;
    fs::write(root.path().join("real.png"), PNG_MAGIC)?;
    std::os::unix::fs::symlink(root.path().join("real.png"), root.path().join("link.png"))?;

    let outcome = collect_images(root.path())?;
    assert_eq!(outcome.files_seen, 1);
    assert_eq!(outcome.images.len(), 1);
    assert_eq!(outcome.images[0].rel_path, "real.png");
    Ok(())
}
