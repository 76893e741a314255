use std::path::PathBuf;
use thiserror::Error;

/// Process exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// The images folder is missing, or the final write failed.
pub const EXIT_IMAGES_FOLDER_NOT_FOUND: i32 = 1;
/// No labelled images were found, or an image could not be read.
pub const EXIT_IMAGES_FOLDER_EMPTY: i32 = 2;
/// The directory that should hold the annotations file does not exist.
pub const EXIT_ANNOTATIONS_FOLDER_NOT_FOUND: i32 = 3;

/// The main error type for votter operations.
#[derive(Debug, Error)]
pub enum VotterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{path}' is not an existing directory (images folder not found)")]
    ImagesFolderNotFound { path: PathBuf },

    #[error("Cannot write annotations to '{path}': directory '{dir}' not found (annotations folder not found)")]
    AnnotationsFolderNotFound { path: PathBuf, dir: PathBuf },

    #[error("No images found in subdirectories of '{path}' (images folder empty)")]
    NoImagesFound { path: PathBuf },

    #[error("Failed while traversing '{path}': {message}")]
    Walk { path: PathBuf, message: String },

    #[error("Failed to read image dimensions from {path}: {source}")]
    ImageDimensionRead {
        path: PathBuf,
        #[source]
        source: imagesize::ImageError,
    },

    #[error("Image {path} has a {axis} of {value} pixels, which does not fit in u32")]
    DimensionOutOfRange {
        path: PathBuf,
        axis: &'static str,
        value: usize,
    },

    #[error("Failed to write VoTT JSON to {path}: {source}")]
    VottJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse VoTT JSON from {path}: {source}")]
    VottJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl VotterError {
    /// The process exit code `main` should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            VotterError::ImagesFolderNotFound { .. }
            | VotterError::Io(_)
            | VotterError::VottJsonWrite { .. }
            | VotterError::VottJsonParse { .. } => EXIT_IMAGES_FOLDER_NOT_FOUND,
            VotterError::NoImagesFound { .. }
            | VotterError::Walk { .. }
            | VotterError::ImageDimensionRead { .. }
            | VotterError::DimensionOutOfRange { .. } => EXIT_IMAGES_FOLDER_EMPTY,
            VotterError::AnnotationsFolderNotFound { .. } => EXIT_ANNOTATIONS_FOLDER_NOT_FOUND,
        }
    }
}
