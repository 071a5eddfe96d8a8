//! Contents.json data model for an Xcode app icon set
//!
//! Describes the single-size iOS app icon with its light, dark and tinted
//! appearances, mirroring the asset catalog schema Xcode writes for
//! `AppIcon.appiconset`.

use crate::{
    error::{IconError, Result},
    icon_spec::{Variant, DEFAULT_SIZE},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Root structure of a Contents.json file
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    /// One entry per rendered appearance
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// Individual image entry within an app icon set
#[derive(Serialize, Debug, Clone)]
pub struct ImageEntry {
    /// Appearance the image is used for; absent for the default (light) icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearances: Option<Vec<Appearance>>,

    /// The filename of the PNG, relative to the icon set directory
    pub filename: String,

    /// The device type for the image ("universal" for single-size icons)
    pub idiom: String,

    /// Target platform (e.g., "ios", "macos", "watchos")
    pub platform: String,

    /// The size of the image in points (e.g., "1024x1024")
    pub size: String,
}

/// A trait/value pair selecting when an image is used
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    /// The appearance trait, e.g. "luminosity"
    pub appearance: String,

    /// The trait value, e.g. "dark" or "tinted"
    pub value: String,
}

/// Versioning and authorship information for the asset catalog
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    /// The format version of the asset catalog (always 1)
    pub version: u8,

    /// The tool that authored the asset catalog
    pub author: String,
}

impl ContentsFile {
    pub fn new(author: String) -> Self {
        Self {
            images: Vec::new(),
            info: Info { version: 1, author },
        }
    }

    pub fn add_image(&mut self, image: ImageEntry) {
        self.images.push(image);
    }
}

impl ImageEntry {
    /// Creates a universal iOS app icon entry
    ///
    /// # Arguments
    /// * `filename` - The PNG file name inside the icon set
    /// * `size` - Edge length in pixels (rendered at 1x)
    pub fn new_app_icon(filename: String, size: u32) -> Self {
        Self {
            appearances: None,
            filename,
            idiom: "universal".to_string(),
            platform: "ios".to_string(),
            size: format!("{size}x{size}"),
        }
    }

    /// Restricts the entry to a luminosity appearance ("dark", "tinted")
    pub fn with_luminosity(mut self, value: &str) -> Self {
        self.appearances
            .get_or_insert_with(Vec::new)
            .push(Appearance {
                appearance: "luminosity".to_string(),
                value: value.to_string(),
            });
        self
    }
}

impl Default for Info {
    fn default() -> Self {
        Self {
            version: 1,
            author: "anchor-icon".to_string(),
        }
    }
}

/// Build the icon set entry for one variant
pub fn entry_for(variant: Variant) -> ImageEntry {
    let entry = ImageEntry::new_app_icon(variant.file_name(), DEFAULT_SIZE);
    match variant {
        Variant::Default => entry,
        Variant::Dark => entry.with_luminosity("dark"),
        Variant::Tinted => entry.with_luminosity("tinted"),
    }
}

/// Writes a Contents.json file to the specified directory
///
/// # Errors
/// Returns an error if JSON serialization fails or the file can't be written
pub fn write_contents_json(dir: &Path, images: Vec<ImageEntry>) -> Result<PathBuf> {
    let mut contents = ContentsFile::new(Info::default().author);
    for image in images {
        contents.add_image(image);
    }
    let json = serde_json::to_string_pretty(&contents)?;
    let path = dir.join("Contents.json");
    std::fs::write(&path, json).map_err(|source| IconError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
