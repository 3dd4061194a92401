//! Declaration file writer
//!
//! Renders a declaration set and writes it to disk. Each resource gets one
//! file named after it, with the extension decided by the dialect.

use crate::error::{Error, Result};
use crate::typegen::Declarations;
use std::fs;
use std::path::{Path, PathBuf};

/// Build the output path for a resource's declaration file
///
/// Format: `{out_dir}/{resource}{extension}`, e.g. `types/users.d.ts`.
#[must_use]
pub fn declaration_path(out_dir: &Path, resource: &str, extension: &str) -> PathBuf {
    out_dir.join(format!("{resource}{extension}"))
}

/// Render a declaration set and write it to the output directory
///
/// Creates the output directory if it does not exist. An existing file for
/// the same resource is overwritten. Returns the path of the written file.
pub fn write_declarations(
    out_dir: impl AsRef<Path>,
    resource: &str,
    declarations: &Declarations,
) -> Result<PathBuf> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir).map_err(|e| Error::Output {
        message: format!(
            "Failed to create output directory '{}': {e}",
            out_dir.display()
        ),
    })?;

    let path = declaration_path(out_dir, resource, declarations.extension());
    fs::write(&path, declarations.render()).map_err(|e| Error::Output {
        message: format!("Failed to write '{}': {e}", path.display()),
    })?;

    Ok(path)
}
