//! VoTT project documents.
//!
//! [`model`] holds the serde types of the document, [`asset`] turns scanned
//! images into assets, and [`io_vott_json`] assembles and writes the file.
//!
//! # Example
//!
//! ```
//! use votter::vott::{build_document, Asset, Size};
//!
//! let asset = Asset {
//!     format: "jpg".into(),
//!     id: "a1".into(),
//!     name: "a.jpg".into(),
//!     path: "file:/data/cat/a.jpg".into(),
//!     size: Size { width: 640, height: 480 },
//!     state: 0,
//!     asset_type: 0,
//!     label: "cat".into(),
//! };
//! let document = build_document(&[asset], &["cat"], "#ff0000");
//! assert_eq!(document.assets["a1"].regions[0].bounding_box.width, 640);
//! ```

pub mod asset;
pub mod io_vott_json;
mod model;

pub use asset::{build_assets, read_image_dimensions, to_file_uri};
pub use io_vott_json::{build_document, read_vott_json, write_vott_json};
pub use model::{
    ActiveLearningSettings, Asset, AssetDetail, BoundingBox, Document, Point, Region, Size, Tag,
    VideoSettings, DEFAULT_TAG_COLOR, MODEL_PATH_TYPE, REGION_TYPE_RECTANGLE, VOTT_VERSION,
};
