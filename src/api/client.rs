use crate::config::Config;
use crate::error::AppError;
use log::debug;
use std::time::Duration;

use super::endpoints;
use super::models::*;

const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Fetches the HTML of a statistics page. Implementations must be shareable across
/// the fetch threads.
pub trait PageSource: Send + Sync {
    fn fetch_page(&self, target_url: &str) -> Result<String, AppError>;
}

pub struct ApiClient {
    config: Config,
    agent: ureq::Agent,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(&config.user_agent)
            .build();
        ApiClient { config, agent }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn execute_request(&self, request: ureq::Request, url: &str) -> Result<ureq::Response, AppError> {
        match request.call() {
            Ok(resp) => Ok(resp),
            Err(ureq::Error::Status(status, _)) => Err(AppError::HttpStatus {
                status,
                url: url.to_string(),
            }),
            Err(e) => Err(AppError::HttpError(e.to_string())),
        }
    }

    pub fn get_latest_version(&self) -> Result<String, AppError> {
        let url = endpoints::versions_url(&self.config);
        let versions: Vec<String> = self
            .execute_request(self.agent.get(&url), &url)?
            .into_json()
            .map_err(|e| AppError::JsonError(e.to_string()))?;

        versions
            .into_iter()
            .next()
            .ok_or_else(|| AppError::CatalogUnavailable("no versions returned".to_string()))
    }

    pub fn get_champion_data(&self, version: &str) -> Result<DataDragonChampions, AppError> {
        let url = endpoints::champions_url(&self.config, version);
        self.execute_request(self.agent.get(&url), &url)?
            .into_json()
            .map_err(|e| AppError::JsonError(e.to_string()))
    }

    /// Latest version's champion list. Any failure along the way is reported as
    /// [`AppError::CatalogUnavailable`].
    pub fn get_catalog(&self) -> Result<Catalog, AppError> {
        let load = || -> Result<Catalog, AppError> {
            let version = self.get_latest_version()?;
            debug!("Data Dragon version {}", version);
            let data = self.get_champion_data(&version)?;
            let champions = data
                .data
                .into_values()
                .map(|c| ChampionRef {
                    icon_url: endpoints::champion_icon_url(&self.config, &version, &c.image.full),
                    id: c.id,
                    name: c.name,
                    tags: c.tags,
                })
                .collect();
            Ok(Catalog::new(version, champions))
        };

        load().map_err(|e| match e {
            AppError::CatalogUnavailable(_) => e,
            other => AppError::CatalogUnavailable(other.to_string()),
        })
    }
}

impl PageSource for ApiClient {
    /// Goes through the CORS relay, which takes the target as its `url` query parameter.
    fn fetch_page(&self, target_url: &str) -> Result<String, AppError> {
        let request = self
            .agent
            .get(&self.config.relay_url)
            .query("url", target_url);
        debug!("GET {} via relay", target_url);

        self.execute_request(request, target_url)?
            .into_string()
            .map_err(|e| AppError::HttpError(e.to_string()))
    }
}
