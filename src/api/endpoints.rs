// URL builders for the three outbound hosts: the stats site (wrapped by the relay),
// and Data Dragon for the champion catalog.

use crate::analysis::keys::MatchupKey;
use crate::config::Config;

/// Matchup page on the statistics site. The same URL is requested through the relay
/// and shown to the user as a direct link.
pub fn matchup_page_url(config: &Config, key: &MatchupKey) -> String {
    format!(
        "{}/lol/{}/vs/{}/build/?lane={lane}&tier={}&vslane={lane}&patch={}",
        config.stats_url,
        key.own_slug,
        key.opponent_slug,
        key.tier,
        config.patch,
        lane = key.lane,
    )
}

pub fn versions_url(config: &Config) -> String {
    format!("{}/api/versions.json", config.ddragon_url)
}

pub fn champions_url(config: &Config, version: &str) -> String {
    format!(
        "{}/cdn/{}/data/en_US/champion.json",
        config.ddragon_url, version
    )
}

pub fn champion_icon_url(config: &Config, version: &str, image_full: &str) -> String {
    format!(
        "{}/cdn/{}/img/champion/{}",
        config.ddragon_url, version, image_full
    )
}
