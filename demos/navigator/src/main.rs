//! navigator — inter-city route finder.
//!
//! Without `--from`/`--to` it runs the interactive loop: show the city
//! menu, ask for source, destination and speed, print the receipt, offer
//! another trip.  With them it answers one query and exits.
//!
//! Logs go to stderr; set `RUST_LOG=debug` (or `trace` for every
//! relaxation) to see the search.

mod network;
mod prompt;
mod receipt;


use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use nav_core::{CityId, PlannerConfig, Speed};
use nav_spatial::{DijkstraRouter, RoadNetwork, RouteQuery, Router};

use prompt::Prompter;

/// Fastest route, distance, and fuel cost between two cities
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Start city, by id or name (one-shot mode)
    #[arg(long, requires_all = ["to", "speed"])]
    from: Option<String>,

    /// Destination city, by id or name (one-shot mode)
    #[arg(long, requires = "from")]
    to: Option<String>,

    /// Average speed in km/h (one-shot mode)
    #[arg(long, requires = "from")]
    speed: Option<f64>,

    /// Cities CSV (`id,name`) replacing the built-in network
    #[arg(long, requires = "roads")]
    cities: Option<PathBuf>,

    /// Roads CSV (`from,to,distance_km,traffic,class,name`)
    #[arg(long, requires = "cities")]
    roads: Option<PathBuf>,

    /// JSON planner configuration (fuel price, speed bounds, capacity)
    #[arg(long)]
    config: Option<PathBuf>,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let network = network::load(args.cities.as_deref(), args.roads.as_deref(), config.city_capacity)
        .context("loading road network")?;
    let router = DijkstraRouter::new(&config);

    match (&args.from, &args.to, args.speed) {
        (Some(from), Some(to), Some(kmh)) => {
            let found = one_shot(&mut io::stdout().lock(), &network, &router, &config, from, to, kmh)?;
            Ok(if found { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        _ => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout().lock());
            session(&mut prompter, &network, &router, &config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ── Modes ─────────────────────────────────────────────────────────────────────

/// Answer a single query.  Returns `Ok(false)` when the query was well
/// formed but routing failed (the failure is already written to `out`).
fn one_shot<W: Write>(
    out: &mut W,
    network: &RoadNetwork,
    router: &impl Router,
    config: &PlannerConfig,
    from: &str,
    to: &str,
    kmh: f64,
) -> Result<bool> {
    if !config.accepts_speed(kmh) {
        bail!(
            "speed {kmh} km/h outside {}-{} km/h",
            config.min_speed_kmh,
            config.max_speed_kmh
        );
    }
    let query = RouteQuery::new(
        resolve_city(network, from)?,
        resolve_city(network, to)?,
        Speed::new(kmh)?,
    );

    match router.route(network, &query) {
        Ok(route) => {
            receipt::write_receipt(out, &route)?;
            Ok(true)
        }
        Err(err) => {
            receipt::write_failure(out, &err)?;
            Ok(false)
        }
    }
}

/// Interactive loop.  Returns when the user declines another trip or input
/// ends.
fn session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    network: &RoadNetwork,
    router: &impl Router,
    config: &PlannerConfig,
) -> io::Result<()> {
    loop {
        receipt::write_banner(prompter.output())?;
        receipt::write_menu(prompter.output(), network)?;

        let Some(query) = prompter.query(network, config)? else {
            break;
        };
        match router.route(network, &query) {
            Ok(route) => receipt::write_receipt(prompter.output(), &route)?,
            Err(err) => receipt::write_failure(prompter.output(), &err)?,
        }

        if !prompter.ask_again()? {
            break;
        }
    }
    receipt::write_farewell(prompter.output())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn resolve_city(network: &RoadNetwork, arg: &str) -> Result<CityId> {
    if let Ok(n) = arg.trim().parse::<u32>() {
        return Ok(CityId(n));
    }
    match network.find_city(arg) {
        Some(id) => Ok(id),
        None => bail!("unknown city {arg:?}"),
    }
}

fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<PlannerConfig>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => PlannerConfig::default(),
    };
    config.validate()?;
    debug!(?config, "planner configuration");
    Ok(config)
}
