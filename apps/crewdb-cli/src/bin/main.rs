use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crewdb_core::catalog::Catalog;
use crewdb_core::config::Config;
use crewdb_core::error::Error;
use crewdb_core::types::ErrorResponse;
use crewdb_query::{QueryEngine, QueryParams, SortKey, DEFAULT_MAX_RATE};

fn usage(prog: &str) -> ! {
    eprintln!(
        "Usage: {} [--search <text>] [--service <name>] [--min-rate <n>] [--max-rate <n>] [--page <n>] [--page-size <n>] [--sort <key>] [--data <path>] [--json]",
        prog
    );
    eprintln!("Sort keys: relevance | price-low | price-high | rating | newest");
    std::process::exit(1);
}

fn parse_num<T: FromStr>(flag: &str, value: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        eprintln!(
            "{}",
            Error::InvalidParameter(format!("{} expects a number, got '{}'", flag, value))
        );
        std::process::exit(1);
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;

    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);

    let mut params = QueryParams::default();
    if let Some(size) = config.page_size() {
        params.page_size = size;
    }
    let mut service = None;
    let mut min_rate = None;
    let mut max_rate = None;
    let mut data_path = None;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--search" | "-q" => {
                i += 1;
                params.search = args.get(i).cloned().unwrap_or_else(|| usage(&prog));
            }
            "--service" => {
                i += 1;
                service = Some(args.get(i).cloned().unwrap_or_else(|| usage(&prog)));
            }
            "--min-rate" => {
                i += 1;
                let v = args.get(i).cloned().unwrap_or_else(|| usage(&prog));
                min_rate = Some(parse_num::<u32>("--min-rate", &v));
            }
            "--max-rate" => {
                i += 1;
                let v = args.get(i).cloned().unwrap_or_else(|| usage(&prog));
                max_rate = Some(parse_num::<u32>("--max-rate", &v));
            }
            "--page" => {
                i += 1;
                let v = args.get(i).cloned().unwrap_or_else(|| usage(&prog));
                params.page = parse_num("--page", &v);
            }
            "--page-size" => {
                i += 1;
                let v = args.get(i).cloned().unwrap_or_else(|| usage(&prog));
                params.page_size = parse_num("--page-size", &v);
            }
            "--sort" => {
                i += 1;
                let v = args.get(i).cloned().unwrap_or_else(|| usage(&prog));
                params.sort = SortKey::from_str(&v).unwrap_or_else(|e| {
                    eprintln!("{}", e);
                    std::process::exit(1);
                });
            }
            "--data" => {
                i += 1;
                data_path = Some(PathBuf::from(
                    args.get(i).cloned().unwrap_or_else(|| usage(&prog)),
                ));
            }
            "--json" => json = true,
            _ => usage(&prog),
        }
        i += 1;
    }

    if let Some(s) = service {
        params = params.with_service(&s);
    }
    if min_rate.is_some() || max_rate.is_some() {
        params = params.with_rate_bounds(
            min_rate.unwrap_or(0),
            max_rate.unwrap_or(DEFAULT_MAX_RATE),
        );
    }

    let catalog_path = data_path.unwrap_or_else(|| config.catalog_path());
    let catalog = match Catalog::shared(&catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            if json {
                let body = ErrorResponse { error: e.to_string() };
                println!("{}", serde_json::to_string(&body)?);
            } else {
                eprintln!("{}", e);
            }
            std::process::exit(1);
        }
    };

    let engine = QueryEngine::new(catalog.records());
    let page = engine.query(&params);

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!("🔍 crewdb query");
    println!("===============");
    println!("Catalog: {} ({} workers)", catalog_path.display(), catalog.len());
    if page.workers.is_empty() {
        println!("\nNo workers match the current filters.");
    }
    let offset = (page.pagination.page - 1) * page.pagination.page_size;
    for (i, w) in page.workers.iter().enumerate() {
        println!(
            "\n  {}. {} ({})  ⭐{:.1}  {}/hr ({}/day)  {}, {}",
            offset + i + 1,
            w.name,
            w.service,
            w.rating,
            w.hourly_rate,
            w.price_per_day,
            w.location,
            w.availability
        );
    }
    println!(
        "\nPage {}/{} · {} matching",
        page.pagination.page, page.pagination.total_pages, page.pagination.total
    );
    let summary: Vec<String> = page
        .facets
        .service_counts
        .iter()
        .map(|(service, count)| format!("{} ({})", service, count))
        .collect();
    println!("Services: {}", summary.join(", "));
    Ok(())
}
