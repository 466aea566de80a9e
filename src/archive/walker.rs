use std::collections::HashMap;
use std::io::Read;

use anyhow::{Context, Result};

use super::{layer, ArchiveContents, ImageConfig, ManifestEntry};

const MANIFEST_NAME: &str = "manifest.json";
const LAYER_SUFFIX: &str = "/layer.tar";

/// Single forward pass over a `docker save` archive.
///
/// Each entry is classified by name: layer listings are drained into the
/// layer map, `manifest.json` becomes the manifest, and any other `.json`
/// entry is taken as the image config (the last one wins). Everything else
/// is skipped. Any malformed header or undecodable JSON aborts the walk.
pub fn scan<R: Read>(reader: R) -> Result<ArchiveContents> {
    let mut outer = tar::Archive::new(reader);

    let mut manifest: Option<Vec<ManifestEntry>> = None;
    let mut image = ImageConfig::default();
    let mut layers = HashMap::new();

    for entry in outer.entries().context("failed to read archive")? {
        let mut entry = entry.context("failed to read archive entry")?;
        let name = entry.path()?.to_string_lossy().into_owned();

        if name.ends_with(LAYER_SUFFIX) {
            let listing = layer::read_listing(&mut entry)
                .with_context(|| format!("failed to read layer {name}"))?;
            layers.insert(name, listing);
        } else if name == MANIFEST_NAME {
            manifest = Some(
                serde_json::from_reader(&mut entry).context("failed to parse manifest.json")?,
            );
        } else if name.ends_with(".json") {
            image = serde_json::from_reader(&mut entry)
                .with_context(|| format!("failed to parse image config {name}"))?;
        }
    }

    Ok(ArchiveContents {
        manifest,
        image,
        layers,
    })
}
