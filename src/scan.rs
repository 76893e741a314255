//! Discovery of labelled images in a directory tree.
//!
//! Every directory below the source root that directly contains image files
//! becomes a label named after the directory. Images are recognised by
//! extension only; the header is not inspected until assets are built.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::VotterError;

/// Extensions (without the dot, compared case-insensitively) that mark a file as an image.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

/// Label name to the images carrying it, as paths relative to the source root.
pub type LabelMap = BTreeMap<String, Vec<PathBuf>>;

/// Returns true when the file name ends in one of [`IMAGE_EXTENSIONS`].
pub fn is_image(file_name: &str) -> bool {
    let Some(ext) = Path::new(file_name).extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    IMAGE_EXTENSIONS
        .iter()
        .any(|allowed| ext.eq_ignore_ascii_case(allowed))
}

/// List the image file names directly inside `dir`, sorted.
///
/// # Errors
/// Returns an error if the directory cannot be read.
pub fn list_images(dir: &Path) -> Result<Vec<String>, VotterError> {
    let entries = fs::read_dir(dir).map_err(|source| VotterError::Walk {
        path: dir.to_path_buf(),
        message: source.to_string(),
    })?;

    let mut images = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| VotterError::Walk {
            path: dir.to_path_buf(),
            message: source.to_string(),
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) if is_image(name) => images.push(name.to_string()),
            Some(_) => {}
            None => debug!("Skipping non UTF-8 file name {}", path.display()),
        }
    }

    images.sort();
    Ok(images)
}

/// Walk `root` and group image files by the name of the directory holding them.
///
/// The root itself is never a label. Directories without images are left out,
/// and directories sharing a name at different depths share one label.
///
/// # Errors
/// Returns [`VotterError::NoImagesFound`] when no directory holds an image,
/// or [`VotterError::Walk`] when traversal fails.
pub fn scan_labels(root: &Path) -> Result<LabelMap, VotterError> {
    let mut labels = LabelMap::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| VotterError::Walk {
            path: root.to_path_buf(),
            message: format!("failed while traversing directory: {source}"),
        })?;

        if !entry.file_type().is_dir() {
            continue;
        }

        let images = list_images(entry.path())?;
        if images.is_empty() {
            debug!("No images in {}, skipping", entry.path().display());
            continue;
        }

        let rel_dir = entry
            .path()
            .strip_prefix(root)
            .map_err(|_| VotterError::Walk {
                path: entry.path().to_path_buf(),
                message: format!("directory is outside '{}'", root.display()),
            })?
            .to_path_buf();
        let label = entry.file_name().to_string_lossy().into_owned();

        labels
            .entry(label)
            .or_default()
            .extend(images.into_iter().map(|name| rel_dir.join(name)));
    }

    if labels.is_empty() {
        return Err(VotterError::NoImagesFound {
            path: root.to_path_buf(),
        });
    }

    Ok(labels)
}
