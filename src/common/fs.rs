use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Create the directory if it doesn’t exist; error if a non-directory exists there.
pub(crate) fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            bail!("Path exists but is not a directory: {}", path.display());
        }
    } else {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }
    Ok(())
}

/// Write `contents` to `path`. Rejects stdout ("-") and refuses to replace an
/// existing file unless `force` is set.
pub(crate) fn write_output(path: &Path, contents: &[u8], force: bool) -> Result<()> {
    if path == Path::new("-") { bail!("stdout is not supported.") }
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }

    fs::write(path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))
}
