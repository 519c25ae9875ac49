//! Generator for a fixed set of mock SBA 7(a) loan documents.
//!
//! A run builds the 23-entry [`catalog`], renders each entry to a PDF with [`render::Renderer`]
//! and bundles the files with [`package::package`]. [`generator::Generator`] drives the three
//! steps.

pub mod builder;
pub mod catalog;
pub mod elements;
pub mod error;
pub mod fonts;
pub mod generator;
pub mod model;
pub mod money;
pub mod package;
pub mod render;

pub use error::{Error, Result};
pub use generator::{GenerationReport, Generator, GeneratorConfig};
pub use model::{DocumentCategory, DocumentSpec, TableSpec};
