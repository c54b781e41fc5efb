use crate::error::AppError;
use std::env;

const DEFAULT_RELAY_URL: &str = "https://corsmirror.com/v1";
const DEFAULT_STATS_URL: &str = "https://lolalytics.com";
const DEFAULT_DDRAGON_URL: &str = "https://ddragon.leagueoflegends.com";
const DEFAULT_PATCH: u32 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub relay_url: String,
    pub stats_url: String,
    pub ddragon_url: String,
    /// Patch window passed as `patch=` on every matchup page.
    pub patch: u32,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            relay_url: DEFAULT_RELAY_URL.to_string(),
            stats_url: DEFAULT_STATS_URL.to_string(),
            ddragon_url: DEFAULT_DDRAGON_URL.to_string(),
            patch: DEFAULT_PATCH,
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let patch = match env::var("LOLMATCHUP_PATCH") {
            Ok(raw) => raw.trim().parse::<u32>().map_err(|_| {
                AppError::ConfigError(format!("LOLMATCHUP_PATCH must be a number, got '{}'", raw))
            })?,
            Err(_) => defaults.patch,
        };

        Ok(Config {
            relay_url: url_var("LOLMATCHUP_RELAY_URL").unwrap_or(defaults.relay_url),
            stats_url: url_var("LOLMATCHUP_STATS_URL").unwrap_or(defaults.stats_url),
            ddragon_url: url_var("LOLMATCHUP_DDRAGON_URL").unwrap_or(defaults.ddragon_url),
            patch,
            user_agent: env::var("LOLMATCHUP_USER_AGENT").unwrap_or(defaults.user_agent),
        })
    }
}

fn default_user_agent() -> String {
    format!("lol_matchup/{}", env!("CARGO_PKG_VERSION"))
}

// Trailing slashes are dropped so endpoint builders can join with '/'.
fn url_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
}
