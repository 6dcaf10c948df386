use catalog_rs::client::{AsyncResult, DEFAULT_SEARCH_LIMIT, DataClient};
use catalog_rs::telemetry;
use serde::Serialize;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const USAGE: &str = "usage: catalog_probe <recommendations <product-id>|search <query> [--limit <n>]|stats> [--base-url <url>]";

#[derive(Debug, Clone, PartialEq, Eq)]
enum CommandKind {
    Recommendations { product_id: String },
    Search { query: String, limit: u32 },
    Stats,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    base_url: String,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Returns whether the endpoint reported success.
fn run() -> Result<bool, String> {
    let args = parse_args()?;
    let client = DataClient::with_default_transport(&args.base_url)
        .map_err(|err| format!("failed to create client: {err}"))?;
    match &args.command {
        CommandKind::Recommendations { product_id } => {
            print_result(&client.fetch_recommendations(product_id))
        }
        CommandKind::Search { query, limit } => print_result(&client.search_products(query, *limit)),
        CommandKind::Stats => print_result(&client.fetch_stats()),
    }
}

fn print_result<T: Serialize>(result: &AsyncResult<T>) -> Result<bool, String> {
    let payload = serde_json::to_string_pretty(result)
        .map_err(|err| format!("failed to serialize json: {err}"))?;
    println!("{payload}");
    Ok(result.is_success())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut command = match args.next().as_deref() {
        Some("recommendations") => CommandKind::Recommendations {
            product_id: args
                .next()
                .ok_or_else(|| "missing product id for recommendations".to_owned())?,
        },
        Some("search") => CommandKind::Search {
            query: args
                .next()
                .ok_or_else(|| "missing query for search".to_owned())?,
            limit: DEFAULT_SEARCH_LIMIT,
        },
        Some("stats") => CommandKind::Stats,
        _ => return Err(USAGE.to_owned()),
    };

    let mut base_url = DEFAULT_BASE_URL.to_owned();
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--base-url" => {
                base_url = args
                    .next()
                    .ok_or_else(|| "missing value for --base-url".to_owned())?;
            }
            "--limit" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --limit".to_owned())?;
                let parsed = value
                    .parse::<u32>()
                    .map_err(|err| format!("invalid --limit `{value}`: {err}"))?;
                match &mut command {
                    CommandKind::Search { limit, .. } => *limit = parsed,
                    _ => return Err("--limit only applies to search".to_owned()),
                }
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n\n{USAGE}")),
        }
    }

    Ok(CliArgs { command, base_url })
}
