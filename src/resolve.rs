//! Resolution and validation of the source and destination paths.

use std::path::{Path, PathBuf};

use crate::error::VotterError;

/// Images are read from the current directory unless a source is given.
pub const DEFAULT_IMAGES_PATH: &str = ".";

/// Annotations file name used when no destination is given.
pub const DEFAULT_ANNOTATIONS_FILENAME: &str = "vott-coco-annotations.json";

/// The validated input and output locations for a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory holding one subdirectory per label.
    pub source: PathBuf,
    /// File the VoTT document is written to.
    pub destination: PathBuf,
}

impl ResolvedPaths {
    /// Apply defaults to the optional positional arguments and validate them.
    ///
    /// The source must be an existing directory. The destination's parent
    /// directory must exist; the file itself may or may not.
    ///
    /// # Errors
    /// Returns [`VotterError::ImagesFolderNotFound`] or
    /// [`VotterError::AnnotationsFolderNotFound`].
    pub fn resolve(
        source: Option<PathBuf>,
        destination: Option<PathBuf>,
    ) -> Result<Self, VotterError> {
        let source = source.unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_PATH));
        let destination =
            destination.unwrap_or_else(|| PathBuf::from(DEFAULT_ANNOTATIONS_FILENAME));

        if !source.is_dir() {
            return Err(VotterError::ImagesFolderNotFound { path: source });
        }

        let dir = parent_dir(&destination);
        if !dir.is_dir() {
            return Err(VotterError::AnnotationsFolderNotFound {
                path: destination,
                dir,
            });
        }

        Ok(Self {
            source,
            destination,
        })
    }
}

/// Directory a file path lives in; a bare file name lives in `.`.
pub(crate) fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
