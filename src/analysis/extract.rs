//! Pulls the matchup summary sentence and game count out of a stats page, and the
//! three percentages out of the summary sentence.
//!
//! Both lookups are positional CSS paths into the site's markup. They live in an
//! [`ExtractionRecipe`] so a layout change only means swapping the recipe.

use crate::cache::MatchupRecord;
use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static SUMMARY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(-?[0-9]+(?:\.[0-9]+)?)% of the time which is (-?[0-9]+(?:\.[0-9]+)?)% different.*?After normalising.*?(-?[0-9]+(?:\.[0-9]+)?)% different",
    )
    .unwrap()
});

/// Where the two fragments live on a matchup page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRecipe {
    pub summary_selector: String,
    pub games_selector: String,
}

impl Default for ExtractionRecipe {
    fn default() -> Self {
        ExtractionRecipe {
            summary_selector: ".lolx-links > span:nth-child(1)".to_string(),
            games_selector: ".w-44 > div:nth-child(1) > div:nth-child(2) > div:nth-child(1)"
                .to_string(),
        }
    }
}

impl ExtractionRecipe {
    pub fn compile(&self) -> Result<CompiledRecipe, AppError> {
        Ok(CompiledRecipe {
            summary: parse_selector(&self.summary_selector)?,
            games: parse_selector(&self.games_selector)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CompiledRecipe {
    summary: Selector,
    games: Selector,
}

fn parse_selector(raw: &str) -> Result<Selector, AppError> {
    Selector::parse(raw).map_err(|e| AppError::InvalidSelector(format!("{}: {}", raw, e)))
}

/// Win-rate signals read from a summary sentence. Each is absent when the sentence
/// did not match.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParsedMetrics {
    pub win_rate: Option<f64>,
    pub vs_average_diff: Option<f64>,
    pub normalized_diff: Option<f64>,
}

impl ParsedMetrics {
    pub fn is_empty(&self) -> bool {
        self.win_rate.is_none() && self.vs_average_diff.is_none() && self.normalized_diff.is_none()
    }
}

fn collapsed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the summary node, or `None` when the page has no such node.
pub fn extract_summary(document: &Html, recipe: &CompiledRecipe) -> Option<String> {
    document.select(&recipe.summary).next().map(collapsed_text)
}

pub fn extract_game_count(document: &Html, recipe: &CompiledRecipe) -> Option<u64> {
    let raw: String = document
        .select(&recipe.games)
        .next()?
        .text()
        .flat_map(str::chars)
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    raw.parse::<u64>().ok()
}

/// Builds the cache record for one fetched page body.
///
/// A page without a summary node is [`AppError::MalformedPayload`]; a summary whose
/// sentence does not match is still a valid record with no metrics.
pub fn extract_record(body: &str, recipe: &CompiledRecipe) -> Result<MatchupRecord, AppError> {
    let document = Html::parse_document(body);
    let summary = extract_summary(&document, recipe).ok_or_else(|| {
        AppError::MalformedPayload(format!("no summary node in {} byte page", body.len()))
    })?;
    let games = extract_game_count(&document, recipe);
    Ok(MatchupRecord { summary, games })
}

pub fn parse_metrics(summary: &str) -> ParsedMetrics {
    let text = summary.split_whitespace().collect::<Vec<_>>().join(" ");
    let Some(caps) = SUMMARY_REGEX.captures(&text) else {
        return ParsedMetrics::default();
    };
    let number = |idx: usize| caps.get(idx).and_then(|m| m.as_str().parse::<f64>().ok());

    ParsedMetrics {
        win_rate: number(1),
        vs_average_diff: number(2),
        normalized_diff: number(3),
    }
}
