//! Bundles rendered documents into a flat zip archive.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use log::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Error, Result};

fn entry_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::ArchiveInput {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        })
}

/// Writes every file in `files` into a new zip archive at `archive_path`.
///
/// Entries are stored under their base names in input order. An existing archive is replaced,
/// so the result never carries entries from an earlier run.
pub fn package<P: AsRef<Path>>(files: &[P], archive_path: &Path) -> Result<PathBuf> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = ZipWriter::new(BufWriter::new(File::create(archive_path)?));

    for file in files {
        let path = file.as_ref();
        let name = entry_name(path)?;
        let mut input = File::open(path).map_err(|source| Error::ArchiveInput {
            path: path.to_path_buf(),
            source,
        })?;

        writer.start_file(name.as_str(), options)?;
        let written = io::copy(&mut input, &mut writer).map_err(|source| Error::ArchiveInput {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("added {} ({} bytes)", name, written);
    }

    let mut inner = writer.finish()?;
    io::Write::flush(&mut inner)?;

    info!(
        "Packaged {} files into {}",
        files.len(),
        archive_path.display()
    );
    Ok(archive_path.to_path_buf())
}
