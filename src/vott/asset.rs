//! Construction of VoTT assets from scanned image files.

use std::path::{Path, PathBuf};

use log::{debug, info};
use uuid::Uuid;

use super::model::{Asset, Size};
use crate::error::VotterError;
use crate::scan::LabelMap;

/// Build one asset per scanned image, in label order then image order.
///
/// Each image header is read to obtain its pixel dimensions. The first
/// unreadable or undecodable image aborts the build.
///
/// # Errors
/// Returns [`VotterError::ImageDimensionRead`] for unreadable images, or an
/// IO error if an absolute path cannot be formed.
pub fn build_assets(root: &Path, labels: &LabelMap) -> Result<Vec<Asset>, VotterError> {
    let mut assets = Vec::with_capacity(labels.values().map(Vec::len).sum());

    for (label, images) in labels {
        for rel_path in images {
            let asset = build_asset(root, rel_path, label)?;
            info!("Label '{}' for image '{}'.", label, asset.name);
            assets.push(asset);
        }
    }

    Ok(assets)
}

fn build_asset(root: &Path, rel_path: &Path, label: &str) -> Result<Asset, VotterError> {
    let image_path = root.join(rel_path);
    let absolute = std::path::absolute(&image_path)?;
    let (width, height) = read_image_dimensions(&image_path)?;
    debug!("{} is {}x{}", image_path.display(), width, height);

    let name = rel_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Asset {
        format: image_format(rel_path),
        id: Uuid::new_v4().to_string(),
        name,
        path: to_file_uri(&absolute),
        size: Size { width, height },
        state: 0,
        asset_type: 0,
        label: label.to_string(),
    })
}

/// Lowercased extension without the leading dot, or empty if there is none.
pub fn image_format(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default()
}

/// Render a path as a `file:` URI using forward slashes on every platform.
///
/// `/home/me/cat/a.jpg` becomes `file:/home/me/cat/a.jpg` and
/// `C:\data\cat\a.jpg` becomes `file:C:/data/cat/a.jpg`.
pub fn to_file_uri(path: &Path) -> String {
    let text = path.to_string_lossy();
    format!("file:{}", text.replace(std::path::MAIN_SEPARATOR, "/"))
}

/// Read the pixel dimensions from an image header.
///
/// # Errors
/// Returns an error if the file cannot be opened, the format is not
/// recognised, or a dimension does not fit in `u32`.
pub fn read_image_dimensions(path: &Path) -> Result<(u32, u32), VotterError> {
    let size = imagesize::size(path).map_err(|source| VotterError::ImageDimensionRead {
        path: path.to_path_buf(),
        source,
    })?;

    let width = to_u32(path, "width", size.width)?;
    let height = to_u32(path, "height", size.height)?;
    Ok((width, height))
}

fn to_u32(path: &Path, axis: &'static str, value: usize) -> Result<u32, VotterError> {
    value
        .try_into()
        .map_err(|_| VotterError::DimensionOutOfRange {
            path: PathBuf::from(path),
            axis,
            value,
        })
}
