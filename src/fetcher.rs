use crate::analysis::extract::{extract_record, CompiledRecipe, ExtractionRecipe};
use crate::analysis::keys::MatchupKey;
use crate::api::client::PageSource;
use crate::api::endpoints;
use crate::cache::MatchupCache;
use crate::config::Config;
use crate::error::AppError;
use log::{debug, warn};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// How one dispatched key settled.
#[derive(Debug)]
pub enum FetchOutcome {
    Stored,
    /// Another batch stored the key while this fetch was on the wire.
    AlreadyCached,
    Failed(AppError),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, FetchOutcome::Failed(_))
    }
}

#[derive(Debug, Default)]
pub struct FetchReport {
    /// Keys that were already cached and not requested.
    pub skipped: usize,
    pub inserted: usize,
    pub failed: Vec<(MatchupKey, String)>,
}

impl FetchReport {
    pub fn dispatched(&self) -> usize {
        self.inserted + self.failed.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub fetched: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_ready(&self) -> bool {
        self.total > 0 && self.fetched == self.total
    }
}

struct InFlightGuard<'a>(&'a AtomicUsize);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Fills the matchup cache for a set of keys, one concurrent request per missing key.
pub struct MatchupFetcher<S: PageSource> {
    source: S,
    config: Config,
    recipe: CompiledRecipe,
    cache: MatchupCache,
    in_flight: AtomicUsize,
}

impl<S: PageSource> MatchupFetcher<S> {
    pub fn new(source: S, config: Config) -> Result<Self, AppError> {
        Self::with_recipe(source, config, &ExtractionRecipe::default())
    }

    pub fn with_recipe(source: S, config: Config, recipe: &ExtractionRecipe) -> Result<Self, AppError> {
        Ok(MatchupFetcher {
            source,
            config,
            recipe: recipe.compile()?,
            cache: MatchupCache::new(),
            in_flight: AtomicUsize::new(0),
        })
    }

    pub fn cache(&self) -> &MatchupCache {
        &self.cache
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// True while any request dispatched by `ensure_fetched` is outstanding.
    pub fn in_progress(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn progress(&self, keys: &[MatchupKey]) -> Progress {
        Progress {
            fetched: self.cache.count_present(keys),
            total: keys.len(),
        }
    }

    pub fn ensure_fetched(&self, keys: &[MatchupKey]) -> FetchReport {
        self.ensure_fetched_with(keys, |_, _| {})
    }

    /// Requests every key of `keys` that has no cached record and waits until all of
    /// them settle. `on_settled` runs on the fetching thread as each key finishes.
    ///
    /// A failed key stays absent and does not affect its siblings. Nothing guards
    /// against a concurrent call requesting the same key; the first stored record wins.
    pub fn ensure_fetched_with<F>(&self, keys: &[MatchupKey], on_settled: F) -> FetchReport
    where
        F: Fn(&MatchupKey, &FetchOutcome) + Sync,
    {
        let missing = self.cache.missing(keys);
        let mut report = FetchReport {
            skipped: keys.len() - missing.len(),
            ..Default::default()
        };
        if missing.is_empty() {
            debug!("All {} matchups already cached", keys.len());
            return report;
        }

        debug!("Dispatching {} matchup fetches", missing.len());
        self.in_flight.fetch_add(missing.len(), Ordering::SeqCst);
        let on_settled = &on_settled;

        let outcomes: Vec<(MatchupKey, FetchOutcome)> = thread::scope(|scope| {
            let handles: Vec<_> = missing
                .into_iter()
                .map(|key| {
                    scope.spawn(move || {
                        let _guard = InFlightGuard(&self.in_flight);
                        let outcome = self.fetch_one(&key);
                        on_settled(&key, &outcome);
                        (key, outcome)
                    })
                })
                .collect();

            handles
                .into_iter()
                .filter_map(|handle| match handle.join() {
                    Ok(settled) => Some(settled),
                    Err(_) => {
                        warn!("A matchup fetch thread panicked");
                        None
                    }
                })
                .collect()
        });

        for (key, outcome) in outcomes {
            match outcome {
                FetchOutcome::Stored => report.inserted += 1,
                FetchOutcome::AlreadyCached => report.skipped += 1,
                FetchOutcome::Failed(e) => report.failed.push((key, e.to_string())),
            }
        }
        report
    }

    fn fetch_one(&self, key: &MatchupKey) -> FetchOutcome {
        let url = endpoints::matchup_page_url(&self.config, key);
        let record = self
            .source
            .fetch_page(&url)
            .and_then(|body| extract_record(&body, &self.recipe));

        match record {
            Ok(record) => {
                if self.cache.insert_once(key.clone(), record) {
                    debug!("Cached {}", key);
                    FetchOutcome::Stored
                } else {
                    FetchOutcome::AlreadyCached
                }
            }
            Err(e) => {
                warn!("Matchup {} not fetched: {}", key, e);
                FetchOutcome::Failed(e)
            }
        }
    }
}
