//! Font discovery for document layout.
//!
//! genpdf needs a TrueType family for glyph metrics, so a run cannot start without one. The
//! bundled Liberation Sans directory is searched first, followed by the font families commonly
//! installed on Linux and Windows.
//!
//! Every face is loaded as a stand-in for the matching core Helvetica face. The TrueType file only
//! supplies metrics; the PDF references the built-in font and embeds nothing.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{self, Builtin, FontData, FontFamily};
use log::{debug, warn};
use printpdf::BuiltinFont;

/// Name of the bundled font family.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "LiberationSans";

/// Environment variable overriding the bundled font directory.
pub const FONTS_DIR_ENV: &str = "MOCKDOCS_FONTS_DIR";

/// Environment variable overriding the Windows font directory.
pub const WINDOWS_FONTS_DIR_ENV: &str = "MOCKDOCS_WINDOWS_FONTS_DIR";

const FONT_FILES: &[&str] = &[
    "LiberationSans-Regular.ttf",
    "LiberationSans-Bold.ttf",
    "LiberationSans-Italic.ttf",
    "LiberationSans-BoldItalic.ttf",
];

/// File names of the four faces of a family that does not follow genpdf's naming scheme.
struct FontFiles {
    regular: &'static str,
    bold: &'static str,
    italic: &'static str,
    bold_italic: &'static str,
}

impl FontFiles {
    fn all(&self) -> [&'static str; 4] {
        [self.regular, self.bold, self.italic, self.bold_italic]
    }
}

/// A system-installed family tried when the bundled fonts are missing.
struct FallbackFamily {
    name: &'static str,
    directories: fn() -> Vec<PathBuf>,
    files: FontFiles,
}

const FALLBACK_FAMILIES: &[FallbackFamily] = &[
    FallbackFamily {
        name: "Liberation Sans",
        directories: liberation_directories,
        files: FontFiles {
            regular: "LiberationSans-Regular.ttf",
            bold: "LiberationSans-Bold.ttf",
            italic: "LiberationSans-Italic.ttf",
            bold_italic: "LiberationSans-BoldItalic.ttf",
        },
    },
    FallbackFamily {
        name: "DejaVu Sans",
        directories: dejavu_directories,
        files: FontFiles {
            regular: "DejaVuSans.ttf",
            bold: "DejaVuSans-Bold.ttf",
            italic: "DejaVuSans-Oblique.ttf",
            bold_italic: "DejaVuSans-BoldOblique.ttf",
        },
    },
    FallbackFamily {
        name: "Arial",
        directories: windows_directories,
        files: FontFiles {
            regular: "arial.ttf",
            bold: "arialbd.ttf",
            italic: "ariali.ttf",
            bold_italic: "arialbi.ttf",
        },
    },
];

fn liberation_directories() -> Vec<PathBuf> {
    [
        "/usr/share/fonts/truetype/liberation",
        "/usr/share/fonts/truetype/liberation2",
        "/usr/share/fonts/liberation-sans",
        "/usr/share/fonts/liberation",
        "/usr/share/fonts/TTF",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

fn dejavu_directories() -> Vec<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu",
        "/usr/share/fonts/dejavu-sans-fonts",
        "/usr/share/fonts/dejavu",
        "/usr/share/fonts/TTF",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).and_then(|value| {
        let path = PathBuf::from(value);
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        }
    })
}

fn windows_directories() -> Vec<PathBuf> {
    if let Some(path) = env_path(WINDOWS_FONTS_DIR_ENV) {
        return vec![path];
    }

    ["WINDIR", "SystemRoot"]
        .iter()
        .filter_map(|var| env_path(var))
        .map(|root| root.join("Fonts"))
        .collect()
}

fn font_directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env_path(FONTS_DIR_ENV) {
        candidates.push(path);
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            let candidate = bin_dir.join("assets/fonts");
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
    }

    let manifest_candidate = bundled_fonts_source_dir();
    if !candidates.contains(&manifest_candidate) {
        candidates.push(manifest_candidate);
    }

    candidates
}

/// Directory inside the crate where the bundled fonts are expected.
pub fn bundled_fonts_source_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
}

fn missing_font_files<'a>(path: &Path, files: impl IntoIterator<Item = &'a str>) -> Vec<PathBuf> {
    files
        .into_iter()
        .map(|name| path.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

fn resolve_font_directory() -> Result<PathBuf, Error> {
    let mut attempts = Vec::new();

    for candidate in font_directory_candidates() {
        let exists = candidate.is_dir();
        let missing = missing_font_files(&candidate, FONT_FILES.iter().copied());

        if exists && missing.is_empty() {
            return Ok(candidate);
        }

        let reason = if !exists {
            "directory missing".to_owned()
        } else {
            let names = missing
                .iter()
                .map(|path| path.file_name().unwrap_or_default().to_string_lossy())
                .collect::<Vec<_>>()
                .join(", ");
            format!("missing files [{}]", names)
        };
        debug!("font candidate {} rejected: {}", candidate.display(), reason);
        attempts.push(format!("{} ({})", candidate.display(), reason));
    }

    Err(Error::new(
        format!(
            "Unable to locate bundled font directory. Checked: {}. See assets/fonts/README.md or set {}.",
            attempts.join(", "),
            FONTS_DIR_ENV
        ),
        io::Error::new(io::ErrorKind::NotFound, "bundled fonts directory not found"),
    ))
}

fn load_bundled_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = resolve_font_directory()?;

    fonts::from_files(&directory, DEFAULT_FONT_FAMILY_NAME, Some(Builtin::Helvetica)).map_err(
        |err| {
            Error::new(
                format!(
                    "Failed to load font family '{}' from {}: {}",
                    DEFAULT_FONT_FAMILY_NAME,
                    directory.display(),
                    err
                ),
                io::Error::new(io::ErrorKind::Other, err.to_string()),
            )
        },
    )
}

fn load_font(directory: &Path, file: &str, builtin: BuiltinFont) -> Result<FontData, Error> {
    let path = directory.join(file);
    FontData::load(&path, Some(builtin)).map_err(|err| {
        Error::new(
            format!("Failed to load font at {}: {}", path.display(), err),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })
}

impl FallbackFamily {
    /// First directory holding all four faces of this family.
    fn locate(&self) -> Option<PathBuf> {
        (self.directories)().into_iter().find(|directory| {
            directory.is_dir() && missing_font_files(directory, self.files.all()).is_empty()
        })
    }

    fn load(&self, directory: &Path) -> Result<FontFamily<FontData>, Error> {
        Ok(FontFamily {
            regular: load_font(directory, self.files.regular, BuiltinFont::Helvetica)?,
            bold: load_font(directory, self.files.bold, BuiltinFont::HelveticaBold)?,
            italic: load_font(directory, self.files.italic, BuiltinFont::HelveticaOblique)?,
            bold_italic: load_font(
                directory,
                self.files.bold_italic,
                BuiltinFont::HelveticaBoldOblique,
            )?,
        })
    }
}

fn fallback_font_family() -> Result<FontFamily<FontData>, Error> {
    for family in FALLBACK_FAMILIES {
        let Some(directory) = family.locate() else {
            debug!("fallback family '{}' not installed", family.name);
            continue;
        };

        match family.load(&directory) {
            Ok(loaded) => {
                warn!(
                    "Bundled fonts unavailable; using system '{}' family from {}.",
                    family.name,
                    directory.display()
                );
                return Ok(loaded);
            }
            Err(err) => warn!("Skipping fallback family '{}': {}", family.name, err),
        }
    }

    let names = FALLBACK_FAMILIES
        .iter()
        .map(|family| family.name)
        .collect::<Vec<_>>()
        .join(", ");
    Err(Error::new(
        format!("No fallback font family found (tried {})", names),
        io::Error::new(io::ErrorKind::NotFound, "system fonts not found"),
    ))
}

fn fonts_missing(err: &Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::IoError(io_err)
            if io_err.kind() == io::ErrorKind::NotFound
                || io_err.kind() == io::ErrorKind::PermissionDenied
    )
}

/// Returns the bundled Liberation Sans family, falling back to a system family when the bundled
/// files are missing.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    match load_bundled_font_family() {
        Ok(family) => Ok(family),
        Err(err) if fonts_missing(&err) => fallback_font_family().map_err(|fallback_err| {
            Error::new(
                format!("{}; {}", err, fallback_err),
                io::Error::new(io::ErrorKind::NotFound, "no usable fonts available"),
            )
        }),
        Err(err) => Err(err),
    }
}

/// Indicates whether [`default_font_family`] can find a complete family on disk.
pub fn default_fonts_available() -> bool {
    resolve_font_directory().is_ok() || FALLBACK_FAMILIES.iter().any(|f| f.locate().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("LiberationSans-Regular.ttf"), b"").unwrap();

        let missing = missing_font_files(dir.path(), FONT_FILES.iter().copied());
        assert_eq!(missing.len(), 3);
        assert!(missing
            .iter()
            .all(|path| !path.ends_with("LiberationSans-Regular.ttf")));
    }

    #[test]
    fn not_found_errors_count_as_missing_fonts() {
        let err = Error::new(
            "gone",
            io::Error::new(io::ErrorKind::NotFound, "bundled fonts missing"),
        );
        assert!(fonts_missing(&err));

        let err = Error::new("broken", ErrorKind::InvalidData);
        assert!(!fonts_missing(&err));
    }

    #[test]
    fn windows_override_wins() {
        // Only this test touches the Windows override variable.
        env::set_var(WINDOWS_FONTS_DIR_ENV, "/custom/fonts");
        let dirs = windows_directories();
        env::remove_var(WINDOWS_FONTS_DIR_ENV);
        assert_eq!(dirs, vec![PathBuf::from("/custom/fonts")]);
    }
}
