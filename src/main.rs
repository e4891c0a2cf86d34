use anyhow::{Context, Result};
use clap::Parser;
use figdrift::specs::{extract_design_specs, DesignNode};
use figdrift::{codec, CompareConfig, DesignSpecs, LiveSpecs};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Compare a design frame against its live implementation.
#[derive(Parser, Debug)]
#[command(name = "figdrift", version, about)]
struct Cli {
    /// PNG render of the design frame
    #[arg(long)]
    design: PathBuf,

    /// PNG screenshot of the live page
    #[arg(long)]
    live: PathBuf,

    /// Design node tree (JSON) to extract colors, fonts and spacing from
    #[arg(long)]
    design_node: Option<PathBuf>,

    /// Live specs captured from the page (JSON)
    #[arg(long)]
    live_specs: Option<PathBuf>,

    /// Per-pixel sensitivity in (0, 1); lower is stricter
    #[arg(long, default_value_t = figdrift::DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Write the design | live | diff composite PNG here
    #[arg(long)]
    composite: Option<PathBuf>,

    /// Skip rendering the composite
    #[arg(long, conflicts_with_all = ["composite", "embed_composite"])]
    no_composite: bool,

    /// Embed the composite as base64 PNG in the JSON report
    #[arg(long)]
    embed_composite: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn read_png(path: &Path) -> Result<figdrift::Bitmap> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    codec::decode_png(&bytes).with_context(|| format!("Failed to decode {}", path.display()))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

async fn run(cli: Cli) -> Result<bool> {
    let design = read_png(&cli.design)?;
    let live = read_png(&cli.live)?;

    let design_specs = match &cli.design_node {
        Some(path) => extract_design_specs(&read_json::<DesignNode>(path)?),
        None => DesignSpecs::default(),
    };
    let live_specs = match &cli.live_specs {
        Some(path) => read_json::<LiveSpecs>(path)?.normalized(),
        None => LiveSpecs::default(),
    };

    let config = CompareConfig {
        threshold: cli.threshold,
        render_composite: !cli.no_composite,
    };

    let outcome = figdrift::run_drift_check(design, live, design_specs, live_specs, config).await?;
    let mut report = outcome.report;

    if let Some(composite) = &outcome.pixels.composite {
        if let Some(path) = &cli.composite {
            let png = codec::encode_png(composite)?;
            fs::write(path, png).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Composite written to {}", path.display());
        }
        if cli.embed_composite {
            report.visual.composite_png_base64 = Some(codec::encode_png_base64(composite)?);
        }
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(report.passed)
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("figdrift: {:#}", e);
            ExitCode::from(2)
        }
    }
}
