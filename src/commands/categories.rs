use anyhow::{Context, Result};

use crate::cli::{CategoriesArgs, Cli};
use crate::io::csv::read_metric_rows;
use crate::rank::categories;

pub fn run(cli: &Cli, args: &CategoriesArgs) -> Result<()> {
    let rows = read_metric_rows(&args.csv)
        .with_context(|| format!("[categories] Failed to read {}", args.csv.display()))?;

    if cli.verbose > 0 {
        eprintln!("[categories] {} rows in {}", rows.len(), args.csv.display());
    }

    for category in categories(&rows) {
        println!("{category}");
    }
    Ok(())
}
