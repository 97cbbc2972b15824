// IconSmith - main.rs
//
// CLI entry point. Handles:
// 1. Argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Configuration loading (defaults, optional iconsmith.toml, CLI overrides)
// 4. Pipeline invocation and manifest reporting

use clap::Parser;
use iconsmith::core::config::PipelineConfig;
use iconsmith::core::pipeline::{self, AssetKind};
use iconsmith::util;
use iconsmith::util::constants;
use iconsmith::util::error::IconSmithError;
use std::path::PathBuf;
use std::process::ExitCode;

/// IconSmith - renders the application's vector icon into the PNG and ICO
/// assets required by the desktop packaging targets.
///
/// A no-argument invocation reads src-tauri/icons/icon.svg and regenerates
/// the canonical asset set in src-tauri/icons/.
#[derive(Parser, Debug)]
#[command(name = "IconSmith", version, about)]
struct Cli {
    /// Vector icon source (defaults to src-tauri/icons/icon.svg).
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Output directory for generated assets.
    #[arg(short, long = "out-dir")]
    out_dir: Option<PathBuf>,

    /// Configuration override file (defaults to ./iconsmith.toml when present).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also generate the Linux icon-theme PNG set.
    #[arg(long)]
    linux: bool,

    /// Print the final manifest as JSON on stdout instead of text.
    #[arg(long)]
    json: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "IconSmith starting"
    );

    match generate(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Icon generation failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn generate(cli: &Cli) -> iconsmith::util::error::Result<()> {
    let mut config = PipelineConfig::load(cli.config.as_deref())?;

    // CLI overrides take precedence over the config file.
    if let Some(ref source) = cli.source {
        config.source = source.clone();
    }
    if let Some(ref out_dir) = cli.out_dir {
        config.out_dir = out_dir.clone();
    }
    if cli.linux {
        config.linux_icons = true;
    }
    config.validate()?;

    // Progress lines go to stdout, one per completed output, unless stdout is
    // reserved for the JSON manifest.
    let quiet = cli.json;
    let manifest = pipeline::run(&config, |asset| {
        if quiet {
            return;
        }
        match asset.kind {
            AssetKind::Png => {
                println!(
                    "Generated {} ({}x{})",
                    asset.file_name, asset.width, asset.height
                );
            }
            AssetKind::Ico => {
                println!("Generated {} (multi-size container)", asset.file_name);
            }
        }
    })?;

    if cli.json {
        let json = serde_json::to_string_pretty(&manifest)
            .map_err(|e| IconSmithError::Json { source: e })?;
        println!("{json}");
    } else {
        println!();
        println!("Generated assets:");
        for asset in &manifest.outputs {
            println!("  - {}", asset.path.display());
        }
        println!();
        println!("{}", constants::ICNS_NOTE);
    }

    Ok(())
}
