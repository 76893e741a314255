//! Serde model of a VoTT project document.
//!
//! Field names and order follow the VoTT 2.x project file, so the output can
//! be opened by VoTT and by tools that consume its `coco` export settings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// VoTT schema version written to the document and to every asset entry.
pub const VOTT_VERSION: &str = "2.2.0";

/// Color given to every tag unless overridden.
pub const DEFAULT_TAG_COLOR: &str = "#ff0000";

/// Model path type recorded in the active learning settings.
pub const MODEL_PATH_TYPE: &str = "coco";

/// Region type for full-image rectangles.
pub const REGION_TYPE_RECTANGLE: &str = "RECTANGLE";

/// A complete VoTT project document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub name: String,
    pub security_token: String,
    pub video_settings: VideoSettings,
    pub tags: Vec<Tag>,
    pub id: String,
    pub active_learning_settings: ActiveLearningSettings,
    pub version: String,
    pub last_visited_asset_id: String,
    /// Asset entries keyed by asset id.
    pub assets: BTreeMap<String, AssetDetail>,
}

/// Video frame extraction settings; unused for still images.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSettings {
    pub frame_extraction_rate: u32,
}

/// A named, colored label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub color: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveLearningSettings {
    pub auto_detect: bool,
    pub predict_tag: bool,
    pub model_path_type: String,
}

impl Default for ActiveLearningSettings {
    fn default() -> Self {
        Self {
            auto_detect: false,
            predict_tag: true,
            model_path_type: MODEL_PATH_TYPE.to_string(),
        }
    }
}

/// One entry of the `assets` map: the asset plus its regions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetDetail {
    pub asset: Asset,
    pub regions: Vec<Region>,
    pub version: String,
}

/// An image file with its pixel dimensions.
///
/// `label` is carried in memory for region construction and is not part of
/// the VoTT schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Lowercased file extension without the dot.
    pub format: String,
    pub id: String,
    /// File name without directories.
    pub name: String,
    /// Absolute `file:` URI with forward slashes.
    pub path: String,
    pub size: Size,
    pub state: u8,
    #[serde(rename = "type")]
    pub asset_type: u8,
    #[serde(skip)]
    pub label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// An annotated area of an asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: String,
    #[serde(rename = "type")]
    pub region_type: String,
    pub tags: Vec<String>,
    pub bounding_box: BoundingBox,
    pub points: Vec<Point>,
}

impl Region {
    /// A rectangle covering the whole asset, tagged with the asset's label.
    pub fn full_image(id: impl Into<String>, asset: &Asset) -> Self {
        let Size { width, height } = asset.size;
        Self {
            id: id.into(),
            region_type: REGION_TYPE_RECTANGLE.to_string(),
            tags: vec![asset.label.clone()],
            bounding_box: BoundingBox {
                height,
                width,
                left: 0,
                top: 0,
            },
            points: vec![
                Point { x: 0, y: 0 },
                Point {
                    x: width,
                    y: height,
                },
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub height: u32,
    pub width: u32,
    pub left: u32,
    pub top: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
