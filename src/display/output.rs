use crate::analysis::keys::MatchupKey;
use crate::analysis::ranking::{MatchupEntry, Rankings};
use crate::api::models::Catalog;
use crate::fetcher::Progress;
use crate::selection::Selection;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct PickRow {
    rank: String,
    champion: String,
    metric: String,
    games: String,
    link: String,
}

/// Advantage view label: normalized diff when known, vs-average diff otherwise.
pub fn advantage_label(entry: &MatchupEntry) -> String {
    let m = &entry.metrics;
    match (m.normalized_diff, m.vs_average_diff) {
        (Some(norm), _) => format!("Norm {:.2}%", norm),
        (None, Some(avg)) => format!("Vs-avg {:.2}%", avg),
        (None, None) => String::new(),
    }
}

pub fn win_rate_label(entry: &MatchupEntry) -> String {
    entry
        .metrics
        .win_rate
        .map(|wr| format!("WR {:.2}%", wr))
        .unwrap_or_default()
}

fn games_label(games: Option<u64>) -> String {
    games.map(|g| format!("{} games", g)).unwrap_or_default()
}

fn render_picks(
    title: &str,
    entries: &[MatchupEntry],
    catalog: Option<&Catalog>,
    label: fn(&MatchupEntry) -> String,
) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<PickRow> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| PickRow {
            rank: format!("#{}", idx + 1),
            champion: catalog
                .map(|c| c.display_name(&entry.champion_id).to_string())
                .unwrap_or_else(|| entry.champion_id.clone()),
            metric: label(entry),
            games: games_label(entry.games),
            link: entry.page_url.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_rankings(rankings: &Rankings, selection: &Selection, catalog: Option<&Catalog>) {
    let opponent = selection.opponent_champion_id.as_deref().unwrap_or("?");
    let opponent = catalog.map(|c| c.display_name(opponent)).unwrap_or(opponent);
    let lane = selection.lane.map(|l| l.to_string()).unwrap_or_default();

    println!(
        "\n{}",
        format!("🎮 Matchup snapshot vs {} ({}, {})", opponent, lane, selection.tier)
            .bold()
            .cyan()
    );

    if rankings.is_empty() {
        println!(
            "{}",
            "No usable statistics in the fetched pages".yellow()
        );
        return;
    }

    render_picks(
        "All picks · Normalized advantage",
        &rankings.by_advantage,
        catalog,
        advantage_label,
    );
    render_picks(
        "All picks · Win rate",
        &rankings.by_win_rate,
        catalog,
        win_rate_label,
    );

    if let Some(best) = rankings.by_advantage.first() {
        let name = catalog
            .map(|c| c.display_name(&best.champion_id))
            .unwrap_or(best.champion_id.as_str());
        println!("\n{}", "Best Pick".bold().green());
        println!("  {} ({})", name, advantage_label(best));
    }

    println!();
}

pub fn display_progress(progress: &Progress) {
    let line = format!("{}/{} fetched", progress.fetched, progress.total);
    if progress.is_ready() {
        display_success(&line);
    } else {
        display_info(&line);
    }
}

pub fn display_pending(progress: &Progress, missing: &[MatchupKey]) {
    display_warning(&format!(
        "Only {}/{} matchups fetched; rankings need all of them. Run again to retry:",
        progress.fetched, progress.total
    ));
    for key in missing {
        println!("  {} {}", "•".yellow(), key);
    }
}

pub fn display_idle() {
    display_info("Select your champions, an opponent and a lane to fetch matchups.");
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extract::ParsedMetrics;
    use crate::selection::{Lane, Tier};

    fn entry(metrics: ParsedMetrics) -> MatchupEntry {
        MatchupEntry {
            champion_id: "Garen".to_string(),
            key: MatchupKey::new("Garen", "Darius", Lane::Top, Tier::All),
            metrics,
            games: Some(1200),
            page_url: String::new(),
        }
    }

    #[test]
    fn advantage_label_prefers_normalized() {
        let e = entry(ParsedMetrics {
            win_rate: Some(51.0),
            vs_average_diff: Some(1.5),
            normalized_diff: Some(-0.456),
        });
        assert_eq!(advantage_label(&e), "Norm -0.46%");
        assert_eq!(win_rate_label(&e), "WR 51.00%");
    }

    #[test]
    fn advantage_label_falls_back_to_vs_average() {
        let e = entry(ParsedMetrics {
            win_rate: None,
            vs_average_diff: Some(2.0),
            normalized_diff: None,
        });
        assert_eq!(advantage_label(&e), "Vs-avg 2.00%");
        assert_eq!(win_rate_label(&e), "");
        assert_eq!(games_label(e.games), "1200 games");
    }
}
