use crate::analysis::extract::parse_metrics;
use crate::analysis::keys::{required_keys_for, MatchupKey};
use crate::analysis::ranking::{rank, MatchupEntry, Rankings};
use crate::api::client::PageSource;
use crate::api::endpoints;
use crate::config::Config;
use crate::error::AppError;
use crate::fetcher::{FetchOutcome, FetchReport, MatchupFetcher, Progress};
use crate::selection::Selection;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// Lane, opponent or own champions missing, or every own champion is the opponent.
    Idle,
    /// Some required matchups are still absent; nothing is ranked.
    Pending {
        progress: Progress,
        missing: Vec<MatchupKey>,
    },
    Ready(Rankings),
}

/// Selection in, rankings out: derive keys, fetch what is missing, rank once complete.
pub struct MatchupEngine<S: PageSource> {
    fetcher: MatchupFetcher<S>,
}

impl<S: PageSource> MatchupEngine<S> {
    pub fn new(source: S, config: Config) -> Result<Self, AppError> {
        Ok(MatchupEngine {
            fetcher: MatchupFetcher::new(source, config)?,
        })
    }

    pub fn from_fetcher(fetcher: MatchupFetcher<S>) -> Self {
        MatchupEngine { fetcher }
    }

    pub fn fetcher(&self) -> &MatchupFetcher<S> {
        &self.fetcher
    }

    pub fn refresh(&self, selection: &Selection) -> (RefreshOutcome, FetchReport) {
        self.refresh_with(selection, |_, _| {})
    }

    pub fn refresh_with<F>(&self, selection: &Selection, on_settled: F) -> (RefreshOutcome, FetchReport)
    where
        F: Fn(&MatchupKey, &FetchOutcome) + Sync,
    {
        let keys = required_keys_for(selection);
        if keys.is_empty() {
            return (RefreshOutcome::Idle, FetchReport::default());
        }
        let report = self.fetcher.ensure_fetched_with(&keys, on_settled);
        (self.snapshot(selection), report)
    }

    /// Current state for `selection` from the cache alone, without fetching.
    pub fn snapshot(&self, selection: &Selection) -> RefreshOutcome {
        let keys = required_keys_for(selection);
        if keys.is_empty() {
            return RefreshOutcome::Idle;
        }

        let progress = self.fetcher.progress(&keys);
        if !progress.is_ready() {
            return RefreshOutcome::Pending {
                progress,
                missing: self.fetcher.cache().missing(&keys),
            };
        }

        RefreshOutcome::Ready(rank(self.entries(selection)))
    }

    // Own champions in selection order, mirror and repeated slugs skipped, so ties
    // rank in that order.
    fn entries(&self, selection: &Selection) -> Vec<MatchupEntry> {
        let (Some(opponent), Some(lane)) = (selection.opponent_champion_id.as_deref(), selection.lane)
        else {
            return Vec::new();
        };
        let cache = self.fetcher.cache();
        let config = self.fetcher.config();
        let mut seen = HashSet::new();

        selection
            .own_champion_ids
            .iter()
            .filter_map(|own| {
                let key = MatchupKey::new(own, opponent, lane, selection.tier);
                if key.is_mirror() || seen.contains(&key) {
                    return None;
                }
                let record = cache.get(&key)?;
                seen.insert(key.clone());
                Some(MatchupEntry {
                    champion_id: own.clone(),
                    metrics: parse_metrics(&record.summary),
                    games: record.games,
                    page_url: endpoints::matchup_page_url(config, &key),
                    key,
                })
            })
            .collect()
    }
}
