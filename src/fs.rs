//! File system utilities.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Derives the path a translated file is written to.
///
/// `notes.txt` translated to Ukrainian becomes `notes_uk.txt`; inputs
/// without an extension get `.txt`.
pub fn translated_path(input: &Path, lang_code: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let ext = input.extension().map_or_else(
        || ".txt".to_string(),
        |ext| format!(".{}", ext.to_string_lossy()),
    );
    input.with_file_name(format!("{stem}_{lang_code}{ext}"))
}

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file is created in the same directory as the target so the
/// rename stays on one filesystem and cannot leave a half-written result
/// behind on interruption.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
