//! Votter: VoTT annotations from folders of labelled images.
//!
//! Votter turns a directory tree where each subdirectory name is a class
//! label into a VoTT project file. Every image gets one rectangular region
//! covering the whole picture, tagged with its label, so the dataset can be
//! opened in VoTT or exported from there to COCO.
//!
//! # Modules
//!
//! - [`resolve`]: Source and destination path defaults and checks
//! - [`scan`]: Label discovery from the directory tree
//! - [`vott`]: VoTT document model, asset building, and JSON output
//! - [`report`]: Summary printed after a run
//! - [`error`]: Error types and process exit codes

pub mod error;
pub mod report;
pub mod resolve;
pub mod scan;
pub mod vott;

use std::path::PathBuf;

use clap::Parser;
use log::info;

pub use error::VotterError;
pub use report::RunReport;
pub use resolve::ResolvedPaths;

/// The votter CLI application.
#[derive(Parser, Debug)]
#[command(name = "votter")]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version.
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Only log warnings and errors, and skip the summary.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Color given to every tag, as '#rrggbb'.
    #[arg(
        long = "tag-color",
        env = "VOTTER_TAG_COLOR",
        default_value = vott::DEFAULT_TAG_COLOR,
        value_parser = validate_color
    )]
    pub tag_color: String,

    /// Folder with one subdirectory of images per label [default: .]
    pub source: Option<PathBuf>,

    /// Annotations file to write [default: vott-coco-annotations.json]
    pub destination: Option<PathBuf>,
}

/// Run the votter CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), VotterError> {
    let cli = Cli::parse();

    if cli.version {
        println!("votter {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(cli.quiet);

    let paths = ResolvedPaths::resolve(cli.source, cli.destination)?;
    let report = convert(&paths, &cli.tag_color)?;

    if !cli.quiet {
        print!("{}", report);
    }
    Ok(())
}

/// Scan, build, and write a VoTT document for already resolved paths.
///
/// Nothing is written unless every image was read successfully.
///
/// # Errors
/// Returns the first scanning, image reading, or writing error.
pub fn convert(paths: &ResolvedPaths, tag_color: &str) -> Result<RunReport, VotterError> {
    let labels = scan::scan_labels(&paths.source)?;
    info!("Found {} labels in {}", labels.len(), paths.source.display());

    let assets = vott::build_assets(&paths.source, &labels)?;
    let label_names: Vec<&str> = labels.keys().map(String::as_str).collect();
    let document = vott::build_document(&assets, &label_names, tag_color);

    vott::write_vott_json(&paths.destination, &document)?;

    Ok(RunReport::new(paths.destination.clone(), &labels))
}

fn init_logging(quiet: bool) {
    let default_filter = if quiet { "warn" } else { "info" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}

// Validate that the color is a '#rrggbb' hex string
fn validate_color(s: &str) -> Result<String, String> {
    match s.strip_prefix('#') {
        Some(hex) if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) => {
            Ok(s.to_ascii_lowercase())
        }
        _ => Err("COLOR must look like '#rrggbb'".to_string()),
    }
}
