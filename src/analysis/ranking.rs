use super::extract::ParsedMetrics;
use super::keys::MatchupKey;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchupEntry {
    /// Own champion id as selected (not the slug).
    pub champion_id: String,
    pub key: MatchupKey,
    pub metrics: ParsedMetrics,
    pub games: Option<u64>,
    /// Direct link to the matchup page on the statistics site.
    pub page_url: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rankings {
    pub by_advantage: Vec<MatchupEntry>,
    pub by_win_rate: Vec<MatchupEntry>,
}

impl Rankings {
    pub fn is_empty(&self) -> bool {
        self.by_advantage.is_empty()
    }
}

fn or_neg_inf(value: Option<f64>) -> f64 {
    value.unwrap_or(f64::NEG_INFINITY)
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Normalized diff, then vs-average diff, then distance of win rate from 50.
pub fn compare_by_advantage(a: &ParsedMetrics, b: &ParsedMetrics) -> Ordering {
    descending(or_neg_inf(a.normalized_diff), or_neg_inf(b.normalized_diff))
        .then_with(|| descending(or_neg_inf(a.vs_average_diff), or_neg_inf(b.vs_average_diff)))
        .then_with(|| {
            descending(
                a.win_rate.unwrap_or(0.0) - 50.0,
                b.win_rate.unwrap_or(0.0) - 50.0,
            )
        })
}

/// Win rate, then normalized diff, then vs-average diff.
pub fn compare_by_win_rate(a: &ParsedMetrics, b: &ParsedMetrics) -> Ordering {
    descending(or_neg_inf(a.win_rate), or_neg_inf(b.win_rate))
        .then_with(|| descending(or_neg_inf(a.normalized_diff), or_neg_inf(b.normalized_diff)))
        .then_with(|| descending(or_neg_inf(a.vs_average_diff), or_neg_inf(b.vs_average_diff)))
}

/// Sorts entries into both views. Entries without any metric are dropped; ties keep
/// input order.
pub fn rank(entries: Vec<MatchupEntry>) -> Rankings {
    let valid: Vec<MatchupEntry> = entries
        .into_iter()
        .filter(|e| !e.metrics.is_empty())
        .collect();

    let mut by_advantage = valid.clone();
    by_advantage.sort_by(|a, b| compare_by_advantage(&a.metrics, &b.metrics));

    let mut by_win_rate = valid;
    by_win_rate.sort_by(|a, b| compare_by_win_rate(&a.metrics, &b.metrics));

    Rankings {
        by_advantage,
        by_win_rate,
    }
}
