use anyhow::{Context, Result};

use crate::cli::{Cli, ServeArgs};
use crate::dataset::Dataset;
use crate::server;

pub fn run(cli: &Cli, args: &ServeArgs) -> Result<()> {
    let dataset = Dataset::init(&args.data.csv, &args.data.geojson)
        .context("[serve] Failed to load dataset")?;

    let config = args.server_config();
    if cli.verbose > 0 {
        eprintln!("[serve] {} categories, {} regions", dataset.categories().len(), dataset.regions.len());
    }
    println!("Serving dashboard on http://{}", config.addr());

    // Requests are handled one at a time on a single thread.
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("[serve] Failed to start runtime")?
        .block_on(server::serve(dataset, &config))
}
