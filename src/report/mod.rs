pub mod render;

use anyhow::{bail, Context, Result};

use crate::archive::{ArchiveContents, FileEntry, HistoryStep};

/// Shell wrapper docker puts in front of RUN instructions; stripped for display.
const SHELL_MARKER: &str = "/bin/sh -c ";

/// Width of the humanized size column.
pub const SIZE_WIDTH: usize = 7;

/// Characters the summary line spends around the command (` \t $ `).
const DECORATION_WIDTH: usize = 4;

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub max_files: usize,
    pub line_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            max_files: 10,
            line_width: 100,
        }
    }
}

/// One block of the final report: a build command plus its ranked files.
#[derive(Debug)]
pub struct LayerReport {
    pub command: String,
    pub total_size: u64,
    pub files: Vec<FileEntry>,
}

/// Pair non-empty history steps with manifest layers, in order, and rank
/// each layer's files.
///
/// The pairing is purely positional: the surviving step count must equal the
/// manifest's layer count, and every manifest path must have been observed
/// during the walk.
pub fn build(contents: &ArchiveContents, opts: &ReportOptions) -> Result<Vec<LayerReport>> {
    let manifest = contents
        .manifest
        .as_deref()
        .context("manifest.json not found in archive")?;
    let manifest = manifest.first().context("manifest.json has no entries")?;

    let steps: Vec<&HistoryStep> = contents
        .image
        .history
        .iter()
        .filter(|step| !step.empty_layer)
        .collect();

    if steps.len() != manifest.layers.len() {
        bail!(
            "history lists {} non-empty steps but the manifest declares {} layers",
            steps.len(),
            manifest.layers.len()
        );
    }

    let cmd_width = opts.line_width.saturating_sub(SIZE_WIDTH + DECORATION_WIDTH);
    let mut reports = Vec::with_capacity(steps.len());

    for (step, path) in steps.iter().zip(&manifest.layers) {
        let layer = contents.layers.get(path).with_context(|| {
            format!("layer {path} is declared in the manifest but missing from the archive")
        })?;

        reports.push(LayerReport {
            command: display_command(&step.created_by, cmd_width),
            total_size: layer.total_size,
            files: rank(&layer.files, opts.max_files),
        });
    }

    Ok(reports)
}

/// Strip the shell wrapper and hard-cut to `width` characters.
fn display_command(created_by: &str, width: usize) -> String {
    let cmd = match created_by.split_once(SHELL_MARKER) {
        Some((_, rest)) => rest,
        None => created_by,
    };
    cmd.chars().take(width).collect()
}

/// Size descending, name ascending on ties; the first `max_files` survive.
fn rank(files: &[FileEntry], max_files: usize) -> Vec<FileEntry> {
    let mut ranked = files.to_vec();
    ranked.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(max_files);
    ranked
}
