use std::env;
use std::path::PathBuf;

use crewdb_core::catalog::Catalog;
use crewdb_core::config::Config;
use crewdb_query::QueryEngine;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let catalog_path = args.get(1).map(PathBuf::from).unwrap_or_else(|| {
        let config = Config::load().unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        });
        config.catalog_path()
    });

    let catalog = Catalog::open(&catalog_path).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    println!("📊 crewdb facets");
    println!("================");
    println!("Catalog: {} ({} workers)", catalog_path.display(), catalog.len());
    println!();
    let facets = QueryEngine::new(catalog.records()).facets();
    for (service, count) in &facets.service_counts {
        println!("  {}: {} workers", service, count);
    }
    Ok(())
}
