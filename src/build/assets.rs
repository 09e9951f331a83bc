//! Output-directory preparation and static-asset copying.

use std::io;
use std::path::Path;

/// Remove the output directory and everything under it, then recreate it
/// empty. The wipe guarantees stale files from earlier runs never survive.
pub fn prepare_output(output_dir: &Path) -> io::Result<()> {
    if output_dir.exists() {
        std::fs::remove_dir_all(output_dir)?;
    }
    std::fs::create_dir_all(output_dir)
}

/// Recursively copy a directory tree, returning the number of files copied.
pub fn copy_dir_all(src: &Path, dst: &Path) -> io::Result<usize> {
    std::fs::create_dir_all(dst)?;

    let mut copied = 0;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copied += copy_dir_all(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}
