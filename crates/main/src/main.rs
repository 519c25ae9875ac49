use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use mockdocs::catalog::{build_catalog, DOCUMENT_COUNT};
use mockdocs::generator::{DEFAULT_ARCHIVE_PATH, DEFAULT_OUTPUT_DIR};
use mockdocs::{Generator, GeneratorConfig};

/// Generates the mock SBA 7(a) document set and zips it.
///
/// Fonts are looked up under `assets/fonts` (or `MOCKDOCS_FONTS_DIR`) before falling back to
/// system-installed families.
#[derive(Parser)]
#[command(author, version, about = "Mock SBA 7(a) loan document generator")]
struct Cli {
    /// Directory receiving the rendered PDFs.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Path of the zip archive.
    #[arg(long, default_value = DEFAULT_ARCHIVE_PATH)]
    archive: PathBuf,

    /// Seed for the placeholder values; omit for a fresh set every run.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the catalog instead of rendering it.
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::new()
            .with_output_dir(&self.output_dir)
            .with_archive_path(&self.archive);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn list_catalog(config: &GeneratorConfig) {
    for (index, spec) in build_catalog(&mut config.rng()).iter().enumerate() {
        let category = spec.category().map_or("-", |category| category.label());
        println!(
            "{:>2}  {:<20} {:<40} {}",
            index + 1,
            category,
            spec.filename(),
            spec.title()
        );
    }
}

fn generate(config: GeneratorConfig) -> Result<(), Box<dyn Error>> {
    let generator = Generator::with_default_fonts(config)?;
    let report = generator.run()?;
    println!(
        "All {} SBA 7(a) PDFs generated with tables, totals, and signatures. Zipped at {}",
        DOCUMENT_COUNT,
        report.archive.display()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config();

    if cli.list {
        list_catalog(&config);
        return;
    }

    if let Err(err) = generate(config) {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_run_uses_fixed_names() {
        // Only this test sets the variable; flags are the sole override.
        std::env::set_var("MOCKDOCS_OUTPUT_DIR", "elsewhere");
        let cli = Cli::try_parse_from(["mockdocs-cli"]).unwrap();
        std::env::remove_var("MOCKDOCS_OUTPUT_DIR");

        assert_eq!(cli.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(cli.archive, PathBuf::from(DEFAULT_ARCHIVE_PATH));
        assert_eq!(cli.seed, None);
        assert!(!cli.list);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "mockdocs-cli",
            "--output-dir",
            "out",
            "--archive",
            "out.zip",
            "--seed",
            "7",
        ])
        .unwrap();

        let config = cli.config();
        assert_eq!(config.output_dir(), PathBuf::from("out").as_path());
        assert_eq!(config.archive_path(), PathBuf::from("out.zip").as_path());
        assert_eq!(cli.seed, Some(7));
    }
}
