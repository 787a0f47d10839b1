use anyhow::{Context, Result};

use crate::cli::{Cli, OutputFormat, RenderArgs};
use crate::common::write_output;
use crate::dashboard::{render_dashboard, DashboardView};
use crate::dataset::Dataset;
use crate::io::svg::XML_DECLARATION;

pub fn run(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let dataset = Dataset::load(&args.data.csv, &args.data.geojson)
        .context("[render] Failed to load dataset")?;

    let category = args.category.as_deref();
    let contents = match args.format {
        OutputFormat::Html => render_dashboard(&dataset, category)?,
        OutputFormat::Svg => {
            let svg = DashboardView::new(&dataset, category).map_svg()?;
            format!("{XML_DECLARATION}\n{svg}")
        }
        OutputFormat::Geojson => {
            let geojson = DashboardView::new(&dataset, category).to_geojson();
            serde_json::to_string_pretty(&geojson).context("[render] Failed to serialize GeoJSON")?
        }
    };

    if cli.verbose > 0 {
        eprintln!("[render] format={:?} -> {}", args.format, args.output.display());
    }

    write_output(&args.output, contents.as_bytes(), args.force)?;
    println!("Wrote {}", args.output.display());
    Ok(())
}
