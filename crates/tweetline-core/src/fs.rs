//! Filesystem helpers for relocating report files.

use std::fs;
use std::io;
use std::path::Path;

/// Move a file, falling back to copy-and-remove when rename fails.
///
/// `fs::rename` cannot cross filesystem boundaries (and on some platforms
/// fails when the destination exists). When it fails, the file is copied to
/// the destination and the source removed; a partially written destination is
/// cleaned up if the copy itself fails.
///
/// # Errors
///
/// Returns an error if the source cannot be read or the destination cannot be
/// written.
pub fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    if let Err(rename_err) = fs::rename(source, destination) {
        fs::copy(source, destination).map_err(|copy_err| {
            let _ = fs::remove_file(destination);
            io::Error::new(
                copy_err.kind(),
                format!(
                    "Move failed (rename: {}, copy: {})",
                    rename_err, copy_err
                ),
            )
        })?;
        fs::remove_file(source)?;
    }
    Ok(())
}
