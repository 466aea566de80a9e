pub mod layer;
pub mod walker;

use std::collections::HashMap;

use serde::Deserialize;

/// One non-directory member of a layer listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path within the layer
    pub name: String,

    /// File size in bytes
    pub size: u64,
}

/// File listing for a single layer, in archive order.
#[derive(Debug, Default)]
pub struct Layer {
    pub files: Vec<FileEntry>,

    /// Sum of member sizes, directories excluded
    pub total_size: u64,
}

// ---- docker-save metadata structs (manifest.json + image config) ----

#[derive(Debug, Deserialize)]
pub struct ManifestEntry {
    #[serde(rename = "Config")]
    #[allow(dead_code)]
    pub config: String,
    #[serde(rename = "RepoTags", default)]
    pub repo_tags: Vec<String>,
    #[serde(rename = "Layers")]
    pub layers: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImageConfig {
    #[serde(default)]
    pub history: Vec<HistoryStep>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryStep {
    #[serde(default)]
    pub empty_layer: bool,
    #[serde(default)]
    pub created_by: String,
}

/// Everything one pass over a `docker save` archive yields.
///
/// Layers are keyed by the archive entry name that produced them, which is
/// the same string the manifest's `Layers` paths refer to.
#[derive(Debug)]
pub struct ArchiveContents {
    pub manifest: Option<Vec<ManifestEntry>>,
    pub image: ImageConfig,
    pub layers: HashMap<String, Layer>,
}
