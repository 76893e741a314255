//! Assembly and serialization of VoTT JSON documents.
//!
//! The document is built entirely in memory and then written through a
//! temporary sibling file that is renamed over the destination, so a failed
//! run never leaves a truncated annotations file behind.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::warn;
use uuid::Uuid;

use super::model::{
    ActiveLearningSettings, Asset, AssetDetail, Document, Region, Tag, VideoSettings, VOTT_VERSION,
};
use crate::error::VotterError;
use crate::resolve::parent_dir;

/// Assemble a document with one full-image region per asset and one tag per label.
///
/// All tags share `tag_color`.
pub fn build_document<S: AsRef<str>>(assets: &[Asset], labels: &[S], tag_color: &str) -> Document {
    let tags = labels
        .iter()
        .map(|label| Tag::new(label.as_ref(), tag_color))
        .collect();

    let assets = assets
        .iter()
        .map(|asset| {
            let region = Region::full_image(Uuid::new_v4().to_string(), asset);
            let detail = AssetDetail {
                asset: asset.clone(),
                regions: vec![region],
                version: VOTT_VERSION.to_string(),
            };
            (asset.id.clone(), detail)
        })
        .collect();

    Document {
        name: String::new(),
        security_token: String::new(),
        video_settings: VideoSettings::default(),
        tags,
        id: String::new(),
        active_learning_settings: ActiveLearningSettings::default(),
        version: VOTT_VERSION.to_string(),
        last_visited_asset_id: String::new(),
        assets,
    }
}

/// Writes a document as indented JSON, replacing any existing file at `path`.
///
/// # Errors
/// Returns an error if the file cannot be written; the destination is left
/// untouched in that case.
pub fn write_vott_json(path: &Path, document: &Document) -> Result<(), VotterError> {
    let tmp_path = temp_path_for(path)?;

    if let Err(err) = write_to(&tmp_path, document) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    if path.exists() {
        warn!("Overwriting existing annotations file {}", path.display());
    }

    fs::rename(&tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        VotterError::Io(source)
    })
}

fn write_to(tmp_path: &Path, document: &Document) -> Result<(), VotterError> {
    let file = File::create(tmp_path).map_err(VotterError::Io)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, document).map_err(|source| {
        VotterError::VottJsonWrite {
            path: tmp_path.to_path_buf(),
            source,
        }
    })?;
    writeln!(writer).map_err(VotterError::Io)?;

    let file = writer
        .into_inner()
        .map_err(|err| VotterError::Io(err.into_error()))?;
    file.sync_all().map_err(VotterError::Io)?;
    Ok(())
}

fn temp_path_for(path: &Path) -> Result<PathBuf, VotterError> {
    let file_name = path.file_name().ok_or_else(|| {
        VotterError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' does not name a file", path.display()),
        ))
    })?;

    Ok(parent_dir(path).join(format!(".{}.tmp", file_name.to_string_lossy())))
}

/// Reads a document from a VoTT JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_vott_json(path: &Path) -> Result<Document, VotterError> {
    let file = File::open(path).map_err(VotterError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| VotterError::VottJsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a document from a JSON string.
pub fn from_json_str(json: &str) -> Result<Document, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serializes a document to an indented JSON string.
pub fn to_json_string(document: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(document)
}
