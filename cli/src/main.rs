//! pagefit CLI - PDF page geometry and preview sizing tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use pagefit::uri::resolve_locator;
use pagefit::{
    extract_first_page_size, probe_file, ExtractionResult, FitOptions, PageGeometry,
    ViewportFitter, WindowSize, WindowSizeMemory,
};

#[derive(Parser)]
#[command(name = "pagefit")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Inspect PDF page geometry and preview window sizing", long_about = None)]
struct Cli {
    /// JSON file with fit option overrides
    #[arg(long, global = true, value_name = "JSON", env = "PAGEFIT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the first page's geometry, or why it is unavailable
    Probe {
        /// Input PDF file or file: URI
        #[arg(value_name = "FILE|URI")]
        input: String,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the preferred preview window size
    Size {
        /// Input PDF file or file: URI
        #[arg(value_name = "FILE|URI")]
        input: String,

        /// Size used when the document has no usable geometry (e.g. "1000x1200")
        #[arg(long, value_name = "WxH")]
        fallback: Option<WindowSize>,
    },

    /// Print the fit-to-width zoom for a viewport
    Zoom {
        /// Input PDF file or file: URI
        #[arg(value_name = "FILE|URI")]
        input: String,

        /// Viewer viewport size (e.g. "1000x800")
        #[arg(long, value_name = "WxH")]
        viewport: WindowSize,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Probe { input, json }) => cmd_probe(&input, json),
        Some(Commands::Size { input, fallback }) => {
            cmd_size(&input, fallback, cli.config.as_deref())
        }
        Some(Commands::Zoom { input, viewport }) => {
            cmd_zoom(&input, viewport, cli.config.as_deref())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: pagefit <COMMAND> <FILE|URI>".yellow());
            println!("       pagefit --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_fitter(config: Option<&Path>) -> Result<ViewportFitter, Box<dyn std::error::Error>> {
    let options = match config {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            FitOptions::from_json(&json)?
        }
        None => FitOptions::default(),
    };
    log::debug!("fit options: {:?}", options);
    Ok(ViewportFitter::with_options(options))
}

fn geometry_for(input: &str) -> Result<ExtractionResult, Box<dyn std::error::Error>> {
    let path = resolve_locator(input)?;
    Ok(extract_first_page_size(path))
}

fn cmd_probe(input: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let path = resolve_locator(input)?;

    match probe_file(&path) {
        Ok(geometry) if json => {
            println!("{}", serde_json::to_string_pretty(&geometry)?);
        }
        Ok(geometry) => print_geometry(&path, &geometry),
        Err(e) if json => {
            let report = serde_json::json!({
                "status": "not_found",
                "reason": e.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Err(e) => {
            println!("{}: {}", "File".bold(), path.display());
            println!("{}: {}", "Geometry".bold(), "not found".yellow());
            println!("{}: {}", "Reason".bold(), e);
        }
    }

    Ok(())
}

fn print_geometry(path: &Path, geometry: &PageGeometry) {
    let media_box = &geometry.media_box;

    println!("{}", "Page Geometry".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), path.display());
    if let Some(ref version) = geometry.pdf_version {
        println!("{}: PDF {}", "Format".bold(), version);
    }
    println!(
        "{}: [{} {} {} {}] at byte {}",
        "MediaBox".bold(),
        media_box.x0,
        media_box.y0,
        media_box.x1,
        media_box.y1,
        geometry.offset
    );
    println!("{}: {}°", "Rotation".bold(), geometry.rotation.degrees());
    println!(
        "{}: {} x {} pt{}",
        "Page Size".bold(),
        geometry.page_size.width,
        geometry.page_size.height,
        if geometry.page_size.is_landscape() {
            " (landscape)"
        } else {
            ""
        }
    );
}

fn cmd_size(
    input: &str,
    fallback: Option<WindowSize>,
    config: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let fitter = load_fitter(config)?;
    let geometry = geometry_for(input)?;
    let fallback = fallback.unwrap_or(WindowSizeMemory::DEFAULT_SIZE);

    let size = fitter.preferred_size(&geometry, fallback);
    if !geometry.is_found() {
        log::info!("no usable geometry; using fallback {}", fallback);
    }

    println!("{}x{}", size.width.round(), size.height.round());
    Ok(())
}

fn cmd_zoom(
    input: &str,
    viewport: WindowSize,
    config: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let fitter = load_fitter(config)?;
    let geometry = geometry_for(input)?;

    match fitter.zoom_for(&geometry, viewport) {
        Some(zoom) => println!("{:.2}", zoom),
        None => {
            return Err(format!("No fit-to-width zoom applies to {} in {}", input, viewport).into())
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagefit".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF page geometry and preview sizing tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/pagefit".dimmed());
    println!("License: MIT");
}
