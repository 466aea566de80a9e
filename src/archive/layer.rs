use std::io::Read;

use anyhow::{Context, Result};

use super::{FileEntry, Layer};

/// Build a layer's file listing from its nested tar stream.
///
/// Only headers are consulted. Member bodies are skipped by the tar reader,
/// never materialized.
pub fn read_listing<R: Read>(reader: R) -> Result<Layer> {
    let mut archive = tar::Archive::new(reader);
    let mut layer = Layer::default();

    for entry in archive.entries().context("failed to read layer listing")? {
        let entry = entry.context("failed to read layer member")?;

        if entry.header().entry_type().is_dir() {
            continue;
        }

        let size = entry.size();
        layer.files.push(FileEntry {
            name: entry.path()?.to_string_lossy().into_owned(),
            size,
        });
        layer.total_size += size;
    }

    Ok(layer)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn append_file(builder: &mut tar::Builder<Vec<u8>>, path: &str, data: &[u8]) {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, path, data).unwrap();
    }

    fn append_dir(builder: &mut tar::Builder<Vec<u8>>, path: &str) {
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::Directory);
        header.set_size(0);
        header.set_mode(0o755);
        header.set_cksum();
        builder.append_data(&mut header, path, std::io::empty()).unwrap();
    }

    #[test]
    fn lists_files_in_archive_order() {
        let mut builder = tar::Builder::new(Vec::new());
        append_file(&mut builder, "usr/bin/curl", &[0u8; 64]);
        append_file(&mut builder, "etc/ssl/cert.pem", &[0u8; 16]);
        let tar = builder.into_inner().unwrap();

        let layer = read_listing(Cursor::new(tar)).unwrap();

        let names: Vec<&str> = layer.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["usr/bin/curl", "etc/ssl/cert.pem"]);
        assert_eq!(layer.files[0].size, 64);
        assert_eq!(layer.total_size, 80);
    }

    #[test]
    fn directories_are_excluded_from_listing_and_total() {
        let mut builder = tar::Builder::new(Vec::new());
        append_dir(&mut builder, "usr/");
        append_dir(&mut builder, "usr/bin/");
        append_file(&mut builder, "usr/bin/tool", &[0u8; 100]);
        let tar = builder.into_inner().unwrap();

        let layer = read_listing(Cursor::new(tar)).unwrap();

        assert_eq!(layer.files.len(), 1);
        assert_eq!(layer.files[0].name, "usr/bin/tool");
        assert_eq!(layer.total_size, 100);
    }

    #[test]
    fn empty_listing_yields_empty_layer() {
        let builder = tar::Builder::new(Vec::new());
        let tar = builder.into_inner().unwrap();

        let layer = read_listing(Cursor::new(tar)).unwrap();

        assert!(layer.files.is_empty());
        assert_eq!(layer.total_size, 0);
    }

    #[test]
    fn truncated_listing_is_an_error() {
        let mut builder = tar::Builder::new(Vec::new());
        append_file(&mut builder, "a", &[0u8; 10]);
        let mut tar = builder.into_inner().unwrap();
        // Chop mid-header so the reader hits a malformed archive.
        tar.truncate(200);

        assert!(read_listing(Cursor::new(tar)).is_err());
    }
}
