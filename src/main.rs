//! # exact-tsp CLI
//!
//! Loads cities from a JSON file, enumerates every closed route and prints
//! the shortest one.

use clap::Parser;
use exact_tsp::io::load_cities;
use exact_tsp::optimizer::{format_partials, RouteOptimizer};
use exact_tsp::Result;
use log::{debug, error};

mod cli;

use cli::{init_logger, Cli, OutputFormat};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_logger(cli.level_filter()) {
        eprintln!("logger init failed: {e}");
    }

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cities = load_cities(&cli.json)?;
    debug!("loaded {} cities from {}", cities.len(), cli.json.display());

    let optimizer = RouteOptimizer::new(cities, cli.precision())?;
    let best = optimizer.minimize()?;

    match cli.output {
        OutputFormat::Text => {
            println!(
                "Best route: {}",
                best.route().describe(optimizer.cities())
            );
            println!("Total distance: {} km", best.total());
            println!("Partial distances: {} km", format_partials(best.partials()));
        }
        OutputFormat::Json => {
            let report = best.report(optimizer.cities());
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
