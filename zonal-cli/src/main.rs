//! Offline ingestion: GeoJSON feature collection in, hierarchical zones
//! model out. The output artifact is what the toggle-panel UI binds to.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use zonal_core::source::ZoneSource;
use zonal_core::{CoordinateTable, GeoJsonFile, build_model};

#[derive(Parser)]
#[command(
    name = "zonal",
    version,
    about = "Build the hierarchical zones model from a GeoJSON feature collection"
)]
struct Cli {
    /// Input GeoJSON feature collection.
    #[arg(long, default_value = "zones.geojson")]
    input: PathBuf,

    /// Output path for the zones model artifact.
    #[arg(long, default_value = "zones.json")]
    output: PathBuf,

    /// JSON coordinate table replacing the built-in reference data.
    #[arg(long)]
    coords: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let source = GeoJsonFile::new(&cli.input);
    let collection = source
        .fetch()
        .with_context(|| format!("loading {}", cli.input.display()))?;
    info!(features = collection.len(), "loaded feature collection");

    let coords = match &cli.coords {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<CoordinateTable>(&raw)
                .with_context(|| format!("decoding {}", path.display()))?
        }
        None => CoordinateTable::builtin(),
    };

    let model = build_model(&collection, &coords);

    let json = if cli.compact {
        serde_json::to_string(&model)?
    } else {
        serde_json::to_string_pretty(&model)?
    };
    fs::write(&cli.output, json).with_context(|| format!("writing {}", cli.output.display()))?;

    let zones: usize = model.companies.iter().map(|c| c.zones.len()).sum();
    info!(
        companies = model.companies.len(),
        zones,
        output = %cli.output.display(),
        "wrote zones model"
    );
    Ok(())
}
