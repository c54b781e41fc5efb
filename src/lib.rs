//! Ranks your champion pool against one opponent using matchup statistics scraped
//! from a third-party stats site.
//!
//! The pipeline is [`engine::MatchupEngine::refresh`]: derive the matchup keys for a
//! [`selection::Selection`], fetch the pages that are not cached yet, extract the
//! summary percentages and rank the result two ways.

pub mod analysis;
pub mod api;
pub mod cache;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod fetcher;
pub mod prefs;
pub mod selection;

pub use analysis::extract::{ExtractionRecipe, ParsedMetrics};
pub use analysis::keys::{required_keys, MatchupKey};
pub use analysis::ranking::{MatchupEntry, Rankings};
pub use api::client::{ApiClient, PageSource};
pub use cache::{MatchupCache, MatchupRecord};
pub use config::Config;
pub use engine::{MatchupEngine, RefreshOutcome};
pub use error::AppError;
pub use fetcher::{FetchOutcome, FetchReport, MatchupFetcher, Progress};
pub use selection::{Lane, Selection, Tier};
