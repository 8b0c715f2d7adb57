use std::fs;

use imgsift::fs::{MoveDirection, RelocateError, Relocator, collect_images};
use tempfile::tempdir;

const GIF_MAGIC: &[u8] = b"GIF89a";

#[test]
fn toggle_moves_into_the_mirrored_tree_and_back() -> anyhow::Result<()> {
    let src = tempdir()?;
    let dst = tempdir()?;
    fs::create_dir_all(src.path().join("nested/deep"))?;
    fs::write(src.path().join("nested/deep/pic.gif"), GIF_MAGIC)?;

    let mut outcome = collect_images(src.path())?;
    let entry = &mut outcome.images[0];
    let mut relocator = Relocator::new(Some(dst.path().to_path_buf()));

    assert_eq!(relocator.toggle(entry)?, MoveDirection::ToDest);
    let moved_to = dst.path().join("nested/deep/pic.gif");
    assert!(moved_to.exists());
    assert!(!src.path().join("nested/deep/pic.gif").exists());
    assert!(entry.is_moved());
    assert_eq!(entry.path(), moved_to);

    assert_eq!(relocator.toggle(entry)?, MoveDirection::BackToSource);
    assert!(src.path().join("nested/deep/pic.gif").exists());
    assert!(!moved_to.exists());
    assert!(!entry.is_moved());
    Ok(())
}

#[test]
fn missing_destination_aborts_the_move() -> anyhow::Result<()> {
    let src = tempdir()?;
    fs::write(src.path().join("pic.gif"), GIF_MAGIC)?;

    let mut outcome = collect_images(src.path())?;
    let entry = &mut outcome.images[0];
    let mut relocator = Relocator::new(None);

    let err = relocator.toggle(entry).unwrap_err();
    assert!(matches!(err, RelocateError::NoDestination));
    // Nothing was mutated.
    assert!(!entry.is_moved());
    assert!(src.path().join("pic.gif").exists());
    Ok(())
}

#[test]
fn inconsistent_location_is_rejected() -> anyhow::Result<()> {
    let src = tempdir()?;
    let dst = tempdir()?;
    let elsewhere = tempdir()?;
    fs::write(src.path().join("pic.gif"), GIF_MAGIC)?;

    let mut outcome = collect_images(src.path())?;
    let entry = &mut outcome.images[0];
    let mut relocator = Relocator::new(Some(dst.path().to_path_buf()));

    // Corrupt the bookkeeping: the tracked directory is neither source nor
    // destination.
    entry.cur_dir = elsewhere.path().to_path_buf();

    let err = relocator.toggle(entry).unwrap_err();
    assert!(matches!(err, RelocateError::LocationMismatch(_)));
    assert!(src.path().join("pic.gif").exists());
    Ok(())
}

#[test]
fn refuses_to_overwrite_an_existing_target() -> anyhow::Result<()> {
    let src = tempdir()?;
    let dst = tempdir()?;
    fs::write(src.path().join("pic.gif"), GIF_MAGIC)?;
    fs::write(dst.path().join("pic.gif"), b"already here")?;

    let mut outcome = collect_images(src.path())?;
    let entry = &mut outcome.images[0];
    let mut relocator = Relocator::new(Some(dst.path().to_path_buf()));

    let err = relocator.toggle(entry).unwrap_err();
    assert!(matches!(err, RelocateError::TargetExists(_)));
    assert!(src.path().join("pic.gif").exists());
    assert_eq!(fs::read(dst.path().join("pic.gif"))?, b"already here");
    Ok(())
}

#[test]
fn nested_destination_directories_are_created_once() -> anyhow::Result<()> {
    let src = tempdir()?;
    let dst = tempdir()?;
    fs::create_dir_all(src.path().join("x/y"))?;
    fs::write(src.path().join("x/y/a.gif"), GIF_MAGIC)?;
    fs::write(src.path().join("x/y/b.gif"), GIF_MAGIC)?;

    let mut outcome = collect_images(src.path())?;
    let mut relocator = Relocator::new(Some(dst.path().to_path_buf()));

    for entry in outcome.images.iter_mut() {
        assert_eq!(relocator.toggle(entry)?, MoveDirection::ToDest);
    }
    assert!(dst.path().join("x/y/a.gif").exists());
    assert!(dst.path().join("x/y/b.gif").exists());
    Ok(())
}
