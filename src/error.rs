//! Error types for the mockdocs crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a generation run.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while creating directories or writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No usable font family could be loaded for layout.
    #[error("Failed to load fonts")]
    FontLoad(#[source] genpdf::error::Error),

    /// genpdf failed to lay out or write a document.
    #[error("Failed to render {}", .path.display())]
    Render {
        /// Destination of the document that failed to render.
        path: PathBuf,
        /// Underlying layout error.
        #[source]
        source: genpdf::error::Error,
    },

    /// A file handed to the packager could not be read.
    #[error("Cannot add {} to archive", .path.display())]
    ArchiveInput {
        /// Path of the unreadable input file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The zip writer reported an error.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}
