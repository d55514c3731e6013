//! Local target path derivation.
//!
//! A URL maps to `<output_root>/<source_id>/<url path>`, mirroring the URL's
//! directory hierarchy under a per-source subdirectory.

use std::path::{Path, PathBuf};

use url::Url;

use super::error::PathError;

/// Derives the local target path for `url` and creates its directory chain.
///
/// All path segments except the last become directories under
/// `output_root/source_id` (created if missing; existing directories are
/// fine). The last segment is the file name. Segments are used as they
/// appear in the URL, without percent-decoding.
///
/// # Errors
///
/// Returns [`PathError`] if the URL cannot be parsed, has an empty path,
/// contains a `.` or `..` segment, or the directory chain cannot be created.
pub fn to_local_path(url: &str, output_root: &Path, source_id: &str) -> Result<PathBuf, PathError> {
    let parsed = Url::parse(url).map_err(|_| PathError::invalid_url(url))?;

    let trimmed = parsed.path().trim_matches('/');
    let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
    let Some((file_name, dirs)) = segments.split_last() else {
        return Err(PathError::empty_path(url));
    };
    // Hierarchical URLs are normalized by the parser; opaque ones are not.
    if let Some(segment) = segments.iter().find(|s| matches!(**s, "." | "..")) {
        return Err(PathError::unsafe_segment(url, *segment));
    }

    let dir_path = dirs
        .iter()
        .fold(output_root.join(source_id), |path, segment| path.join(segment));
    std::fs::create_dir_all(&dir_path).map_err(|e| PathError::create_dir(&dir_path, e))?;

    Ok(dir_path.join(file_name))
}
