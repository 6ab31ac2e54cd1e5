mod cli;

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use cli::{Cli, Commands, OutputFormat};
use riskmap::app::markdown::{MarkdownRegisterExporter, MarkdownReport};
use riskmap::app::{
    CommandExecutor, ControlMapError, ExportError, ExportFormat, QueryExecutor, RegisterExporter,
    RiskSourceError,
};
use riskmap::domain::riskregister::heat_map::HeatMap;
use riskmap::infra::{
    CsvRegisterExporter, JsonFileRiskSource, JsonRegisterExporter, KeywordControlMapper,
};

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    RiskSource(#[from] RiskSourceError),

    #[error(transparent)]
    ControlMap(#[from] ControlMapError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("error serializing the output: {0}")]
    OutputSerialization(#[from] serde_json::Error),

    #[error("error writing the output file: {0}")]
    OutputWrite(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::List { risks } => {
            let register = queries(&risks).fetch_register().await?;
            println!("{}", MarkdownReport::from(&register).register_section());
        }

        Commands::Stats { risks, output } => {
            let register = queries(&risks).fetch_register().await?;
            match output {
                OutputFormat::Text => {
                    let report = MarkdownReport::from(&register);
                    println!(
                        "{}\n{}\n{}",
                        report.summary_section(),
                        report.status_section(),
                        report.top_risks_section()
                    );
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&register.stats())?);
                }
            }
        }

        Commands::Heatmap { risks, output } => {
            let register = queries(&risks).fetch_register().await?;
            match output {
                OutputFormat::Text => {
                    println!("{}", MarkdownReport::from(&register).heat_map_section());
                }
                OutputFormat::Json => {
                    let cells = heat_map_cells(&register.heat_map());
                    println!("{}", serde_json::to_string_pretty(&cells)?);
                }
            }
        }

        Commands::Export {
            risks,
            format,
            output,
        } => {
            let register = queries(&risks).fetch_register().await?;
            let exporter = exporter_for(format.into());
            let exported = exporter.export(&register)?;
            write_output(exported, output, exporter.file_extension()).await?;
        }

        Commands::MapControls {
            risks,
            catalog,
            output,
        } => {
            let register = queries(&risks).fetch_register().await?;
            let mapper = KeywordControlMapper::new(resolve_catalog_dir(catalog));
            let mapped = CommandExecutor::new(mapper)
                .map_register_controls(&register)
                .await?;
            let exported = JsonRegisterExporter.export(&mapped)?;
            write_output(exported, output, "json").await?;
        }
    }

    Ok(())
}

fn queries(risks: &Path) -> QueryExecutor<JsonFileRiskSource> {
    QueryExecutor::new(JsonFileRiskSource::new(risks))
}

fn exporter_for(format: ExportFormat) -> Box<dyn RegisterExporter> {
    match format {
        ExportFormat::Csv => Box::new(CsvRegisterExporter),
        ExportFormat::Json => Box::new(JsonRegisterExporter),
        ExportFormat::Markdown => Box::new(MarkdownRegisterExporter),
    }
}

/// Catalog lookup order: the explicit flag, a local `data/` directory, then
/// the per-user data directory.
fn resolve_catalog_dir(catalog: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = catalog {
        return dir;
    }

    let local = PathBuf::from("data");
    if local.is_dir() {
        return local;
    }

    dirs::data_dir()
        .map(|dir| dir.join("riskmap").join("controls"))
        .unwrap_or(local)
}

async fn write_output(
    contents: String,
    output: Option<PathBuf>,
    extension: &str,
) -> Result<(), CliError> {
    match output {
        Some(path) => {
            tokio::fs::write(&path, contents).await?;
            info!("risk register written to {} ({extension})", path.display());
        }
        None => println!("{contents}"),
    }
    Ok(())
}

#[derive(Serialize)]
struct HeatMapCellView {
    likelihood: u32,
    impact: u32,
    score: u32,
    severity: String,
    count: usize,
    risk_ids: Vec<String>,
}

fn heat_map_cells(heat_map: &HeatMap) -> Vec<HeatMapCellView> {
    heat_map
        .cells_in_display_order()
        .map(|cell| HeatMapCellView {
            likelihood: cell.likelihood(),
            impact: cell.impact(),
            score: cell.score(),
            severity: cell.severity().to_string(),
            count: cell.count(),
            risk_ids: cell.risks().iter().map(|r| r.id().to_string()).collect(),
        })
        .collect()
}
