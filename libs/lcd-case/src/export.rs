//! # Exporter
//!
//! Writes a rendered scene to disk. The only I/O in the crate.

use std::fs;
use std::path::{Path, PathBuf};

use config::constants::SCAD_EXTENSION;
use tracing::info;

use crate::error::{CaseError, CaseResult};
use crate::scene::Scene;

/// Output file for a program called `program`: `<program>.scad` in the
/// working directory.
///
/// ```rust
/// use lcd_case::export::output_path;
///
/// assert_eq!(output_path("lcd-display-case").to_str(), Some("lcd-display-case.scad"));
/// ```
pub fn output_path(program: &str) -> PathBuf {
    Path::new(program).with_extension(SCAD_EXTENSION)
}

/// Render `scene` and write it to `path`, replacing any existing file.
pub fn write_scene(scene: &Scene, path: &Path) -> CaseResult<()> {
    let text = scene.render();
    fs::write(path, &text).map_err(|source| CaseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        variant = scene.variant.name(),
        facets = scene.facets,
        bytes = text.len(),
        "Exported scene"
    );
    Ok(())
}
