use anyhow::Context;
use clap::Parser;
use indicatif::ProgressBar;
use lol_matchup::analysis::keys::required_keys_for;
use lol_matchup::api::models::Catalog;
use lol_matchup::display::output::{
    display_error, display_idle, display_info, display_pending, display_progress,
    display_rankings, display_warning,
};
use lol_matchup::prefs::Preferences;
use lol_matchup::{ApiClient, Config, FetchOutcome, Lane, MatchupEngine, RefreshOutcome, Tier};
use std::env;

#[derive(Parser, Debug)]
#[command(name = "lol_matchup")]
#[command(about = "Rank your champion pool against a lane opponent", long_about = None)]
struct Args {
    /// Opponent champion (id or name)
    #[arg(short, long)]
    opponent: String,

    /// Your champions, replaces the saved pool (repeat or comma-separate)
    #[arg(short = 'c', long = "own", value_delimiter = ',')]
    own: Vec<String>,

    /// Lane: top, jungle, middle, bottom, support (saved)
    #[arg(short, long)]
    lane: Option<String>,

    /// Rank bracket, e.g. diamond_plus, emerald, all (saved)
    #[arg(short, long)]
    tier: Option<String>,

    /// Forget the saved champion pool before applying --own
    #[arg(long)]
    clear_own: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    if args.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env().context("loading configuration")?;

    let mut prefs = Preferences::load().unwrap_or_else(|e| {
        log::warn!("{}; starting from defaults", e);
        Preferences::default()
    });

    let client = ApiClient::new(config.clone());

    display_info("Loading champion catalog...");
    let catalog = match client.get_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            display_warning(&format!("{}. No matchups derived.", e));
            return Ok(());
        }
    };

    let mut selection = prefs.to_selection();
    if args.clear_own {
        selection.own_champion_ids.clear();
    }
    if !args.own.is_empty() {
        selection.own_champion_ids.clear();
        for query in &args.own {
            let id = resolve(&catalog, query)?;
            selection.add_own(&id);
        }
    }
    if let Some(lane) = &args.lane {
        selection.lane = Some(lane.parse::<Lane>()?);
    }
    if let Some(tier) = &args.tier {
        selection.tier = tier.parse::<Tier>()?;
    }
    let opponent = resolve(&catalog, &args.opponent)?;
    selection.set_opponent(Some(&opponent));

    prefs.update_from(&selection);
    if let Err(e) = prefs.save() {
        log::warn!("{}", e);
    }

    let keys = required_keys_for(&selection);
    if keys.is_empty() {
        display_idle();
        return Ok(());
    }

    let engine = MatchupEngine::new(client, config).context("building matchup engine")?;

    let pb = ProgressBar::new(keys.len() as u64);
    pb.set_message("Fetching matchups");
    pb.set_position(engine.fetcher().progress(&keys).fetched as u64);

    let (outcome, report) = engine.refresh_with(&selection, |key, outcome| {
        pb.inc(1);
        if let FetchOutcome::Failed(e) = outcome {
            pb.println(format!("  {} failed: {}", key, e));
        }
    });
    pb.finish_and_clear();
    log::debug!(
        "{} fetched, {} cached, {} failed",
        report.inserted,
        report.skipped,
        report.failed.len()
    );

    display_progress(&engine.fetcher().progress(&keys));

    match outcome {
        RefreshOutcome::Idle => display_idle(),
        RefreshOutcome::Pending { progress, missing } => display_pending(&progress, &missing),
        RefreshOutcome::Ready(rankings) => display_rankings(&rankings, &selection, Some(&catalog)),
    }

    Ok(())
}

fn resolve(catalog: &Catalog, query: &str) -> anyhow::Result<String> {
    catalog
        .resolve(query)
        .map(|c| c.id.clone())
        .with_context(|| format!("looking up '{}' in Data Dragon {}", query, catalog.version))
}
