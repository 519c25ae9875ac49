use std::collections::BTreeSet;
use std::fs::{self, File};
use std::path::Path;

use mockdocs::catalog::{build_catalog, DOCUMENT_COUNT};
use mockdocs::{fonts, Generator, GeneratorConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use zip::ZipArchive;

const SEED: u64 = 2025;

fn generator_in(root: &Path) -> Option<Generator> {
    if !fonts::default_fonts_available() {
        eprintln!(
            "Skipping generation test: no font family found. Set MOCKDOCS_FONTS_DIR or install Liberation Sans."
        );
        return None;
    }

    let config = GeneratorConfig::new()
        .with_output_dir(root.join("docs"))
        .with_archive_path(root.join("docs.zip"))
        .with_seed(SEED);
    Some(Generator::with_default_fonts(config).expect("load default fonts"))
}

fn catalog_names() -> BTreeSet<String> {
    build_catalog(&mut StdRng::seed_from_u64(SEED))
        .iter()
        .map(|spec| spec.filename().to_owned())
        .collect()
}

fn archive_names(path: &Path) -> Vec<String> {
    let archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    archive.file_names().map(str::to_owned).collect()
}

#[test]
fn run_renders_every_document_and_zips_them() {
    let dir = tempfile::tempdir().unwrap();
    let Some(generator) = generator_in(dir.path()) else {
        return;
    };

    let report = generator.run().expect("generation succeeds");

    assert_eq!(report.documents.len(), DOCUMENT_COUNT);
    for path in &report.documents {
        assert!(path.is_file(), "{} missing", path.display());
        assert_eq!(path.parent(), Some(dir.path().join("docs").as_path()));
    }

    let names = archive_names(&report.archive);
    assert_eq!(names.len(), DOCUMENT_COUNT);
    assert!(names.iter().all(|name| !name.contains('/')));
    assert_eq!(names.into_iter().collect::<BTreeSet<_>>(), catalog_names());
}

#[test]
fn rerun_overwrites_without_stale_entries() {
    let dir = tempfile::tempdir().unwrap();
    let Some(generator) = generator_in(dir.path()) else {
        return;
    };

    let first = generator.run().expect("first run");
    fs::write(dir.path().join("docs").join("00_Stale.pdf"), b"stale").unwrap();
    let second = generator.run().expect("second run");

    assert_eq!(first.documents, second.documents);
    let names = archive_names(&second.archive);
    assert_eq!(names.len(), DOCUMENT_COUNT);
    assert!(!names.iter().any(|name| name == "00_Stale.pdf"));
}
