use super::slug::normalize;
use crate::selection::{Lane, Selection, Tier};
use std::collections::HashSet;
use std::fmt;

/// Identifies one (own champion, opponent, lane, tier) statistic.
///
/// Slugs are stored already normalized, so two equal selections always yield
/// equal keys and the same `own|opponent|lane|tier` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchupKey {
    pub own_slug: String,
    pub opponent_slug: String,
    pub lane: Lane,
    pub tier: Tier,
}

impl MatchupKey {
    pub fn new(own_id: &str, opponent_id: &str, lane: Lane, tier: Tier) -> Self {
        MatchupKey {
            own_slug: normalize(own_id),
            opponent_slug: normalize(opponent_id),
            lane,
            tier,
        }
    }

    pub fn is_mirror(&self) -> bool {
        self.own_slug == self.opponent_slug
    }
}

impl fmt::Display for MatchupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.own_slug, self.opponent_slug, self.lane, self.tier
        )
    }
}

/// Every key needed to rank `own_ids` against `opponent_id`, in own-champion order.
///
/// Empty when lane or opponent is unset or no own champion is selected.
/// Mirror matchups are skipped: the site has no page for a champion against itself.
/// Ids sharing a slug (`MonkeyKing`, `Wukong`) yield one key, at the first one's position.
pub fn required_keys(
    own_ids: &[String],
    opponent_id: Option<&str>,
    lane: Option<Lane>,
    tier: Tier,
) -> Vec<MatchupKey> {
    let (Some(opponent_id), Some(lane)) = (opponent_id, lane) else {
        return Vec::new();
    };
    if opponent_id.is_empty() {
        return Vec::new();
    }

    let opponent_slug = normalize(opponent_id);
    let mut seen = HashSet::new();
    own_ids
        .iter()
        .map(|own| normalize(own))
        .filter(|own_slug| *own_slug != opponent_slug)
        .filter(|own_slug| seen.insert(own_slug.clone()))
        .map(|own_slug| MatchupKey {
            own_slug,
            opponent_slug: opponent_slug.clone(),
            lane,
            tier,
        })
        .collect()
}

pub fn required_keys_for(selection: &Selection) -> Vec<MatchupKey> {
    required_keys(
        &selection.own_champion_ids,
        selection.opponent_champion_id.as_deref(),
        selection.lane,
        selection.tier,
    )
}
