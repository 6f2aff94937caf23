//! Output path policy.
//!
//! Every conversion writes `<output_dir>/<stem>.png`. The stem is taken from
//! the input file name unchanged, so a given input always maps to the same
//! output within a run. Nothing guards against two distinct inputs sharing a
//! stem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Directory name appended to the platform download directory when the caller
/// does not pick an output directory.
const DEFAULT_OUTPUT_SUBDIR: &str = "getpng";

pub fn derive_output_path(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| {
        ConversionError::InputReadError(format!("{}: no file name", input.display()))
    })?;
    let mut file_name = stem.to_os_string();
    file_name.push(".png");
    Ok(output_dir.join(file_name))
}

/// Creates the output directory (and parents) if absent. Idempotent; called
/// once per process before any conversion is attempted.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .map_err(|e| ConversionError::CreateDirError(format!("{}: {}", dir.display(), e)))
}

/// The well-known output location: the platform download directory (falling
/// back to `<home>/Downloads`) joined with `getpng`.
pub fn default_output_dir() -> Option<PathBuf> {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .map(|downloads| downloads.join(DEFAULT_OUTPUT_SUBDIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_replaces_extension_with_png() {
        let out = derive_output_path(Path::new("/photos/IMG_0042.CR2"), Path::new("/tmp/out"))
            .unwrap();
        assert_eq!(out, PathBuf::from("/tmp/out/IMG_0042.png"));
    }

    #[test]
    fn output_path_for_extensionless_input() {
        let out = derive_output_path(Path::new("/photos/scan"), Path::new("/tmp/out")).unwrap();
        assert_eq!(out, PathBuf::from("/tmp/out/scan.png"));
    }

    #[test]
    fn output_path_keeps_exotic_stem_characters() {
        let out = derive_output_path(Path::new("/photos/día #1 (final).jpeg"), Path::new("/tmp/out"))
            .unwrap();
        assert_eq!(out, PathBuf::from("/tmp/out/día #1 (final).png"));
    }

    #[test]
    fn output_path_is_stable_for_the_same_input() {
        let a = derive_output_path(Path::new("a/b/c.nef"), Path::new("out")).unwrap();
        let b = derive_output_path(Path::new("a/b/c.nef"), Path::new("out")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn input_without_file_name_is_rejected() {
        let result = derive_output_path(Path::new("/"), Path::new("/tmp/out"));
        assert!(matches!(result, Err(ConversionError::InputReadError(_))));
    }

    #[test]
    fn ensure_output_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("getpng");
        ensure_output_dir(&dir).unwrap();
        ensure_output_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }
}
