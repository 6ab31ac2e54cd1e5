use clap::{Parser, Subcommand, ValueEnum};
use riskmap::app::ExportFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(name = "riskmap")]
#[clap(about = "Multi-framework GRC risk register analysis", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the register as a Markdown table.
    List {
        /// Path to the risk register JSON document.
        #[clap(short, long)]
        risks: PathBuf,
    },
    /// Summarize the register: severity counts, breakdowns, top risks,
    /// coverage.
    Stats {
        #[clap(short, long)]
        risks: PathBuf,
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
    /// Render the 5x5 likelihood/impact heat map.
    Heatmap {
        #[clap(short, long)]
        risks: PathBuf,
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
    /// Export the register in the selected format.
    Export {
        #[clap(short, long)]
        risks: PathBuf,
        #[clap(short, long, value_enum, default_value_t = ExportFormatArg::Csv)]
        format: ExportFormatArg,
        /// Destination file; stdout when omitted.
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Map every risk to its framework's controls and emit the updated
    /// register as JSON.
    MapControls {
        #[clap(short, long)]
        risks: PathBuf,
        /// Directory holding <framework>_controls.json catalogs.
        #[clap(short, long)]
        catalog: Option<PathBuf>,
        /// Destination file; stdout when omitted.
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ExportFormatArg {
    Csv,
    Json,
    Markdown,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(value: ExportFormatArg) -> Self {
        match value {
            ExportFormatArg::Csv => ExportFormat::Csv,
            ExportFormatArg::Json => ExportFormat::Json,
            ExportFormatArg::Markdown => ExportFormat::Markdown,
        }
    }
}
