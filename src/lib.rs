pub mod cli;
pub mod join;
pub mod landcover;
pub mod stats;
pub mod table;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, info};

use crate::cli::Cli;

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("landcover_carbon", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let landcover_name = cli.landcover_name();
    let types = landcover::resolve_types(landcover_name.as_deref())?;
    info!("Resolved {} land-cover type(s)", types.len());

    let joined = join::join_carbon(&types);
    let report = stats::aggregate(&joined, cli.stddev);
    let headers = stats::report_headers(cli.stddev);
    table::print_table(&headers, &stats::render_rows(&report));
    info!(
        "Reported carbon statistics for {} land-cover group(s) across {} cell(s)",
        report.len(),
        joined.len()
    );
    Ok(())
}
