use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

use crate::server::ServerConfig;

/// Seoul startup location recommender (top-5 neighborhoods per category)
#[derive(Parser, Debug)]
#[command(name = "startup-atlas", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the interactive dashboard over HTTP
    Serve(ServeArgs),

    /// Render the dashboard for one category to a file
    Render(RenderArgs),

    /// List the categories found in the metric table
    Categories(CategoriesArgs),
}

/// Input files shared by `serve` and `render`.
#[derive(Args, Debug)]
pub struct DataArgs {
    /// Metric table (CSV, one row per category and neighborhood)
    #[arg(long, env = "ATLAS_CSV", value_hint = ValueHint::FilePath)]
    pub csv: PathBuf,

    /// Neighborhood boundaries (GeoJSON FeatureCollection with `adm_nm`)
    #[arg(long, env = "ATLAS_GEOJSON", value_hint = ValueHint::FilePath)]
    pub geojson: PathBuf,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Address to bind
    #[arg(long, env = "ATLAS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "ATLAS_PORT", default_value_t = 8501)]
    pub port: u16,
}

impl ServeArgs {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig { host: self.host.clone(), port: self.port }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum OutputFormat { Html, Svg, Geojson }

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Category to render (defaults to the first one in the table)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output file (must be a file path; "-" is rejected)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// What to write: the full page, the map alone, or annotated GeoJSON
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Metric table (CSV)
    #[arg(long, env = "ATLAS_CSV", value_hint = ValueHint::FilePath)]
    pub csv: PathBuf,
}
