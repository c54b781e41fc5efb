use crate::error::AppError;
use serde::Deserialize;
use std::collections::HashMap;

// Data Dragon champion.json
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    #[serde(default)]
    pub version: String,
    pub data: HashMap<String, ChampionDto>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionDto {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: ChampionImage,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionImage {
    pub full: String,
}

/// What the rest of the app knows about a champion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionRef {
    pub id: String,
    pub name: String,
    pub icon_url: String,
    pub tags: Vec<String>,
}

/// Champion list for one Data Dragon version, sorted by display name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub version: String,
    pub champions: Vec<ChampionRef>,
}

fn fold(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl Catalog {
    pub fn new(version: String, mut champions: Vec<ChampionRef>) -> Self {
        champions.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Catalog { version, champions }
    }

    pub fn by_id(&self, id: &str) -> Option<&ChampionRef> {
        self.champions.iter().find(|c| c.id.eq_ignore_ascii_case(id))
    }

    /// Finds a champion by id or display name, ignoring case, spaces and punctuation
    /// ("kai'sa", "Dr. Mundo", "wukong" all resolve).
    pub fn resolve(&self, query: &str) -> Result<&ChampionRef, AppError> {
        let wanted = fold(query);
        if wanted.is_empty() {
            return Err(AppError::UnknownChampion(query.to_string()));
        }
        self.champions
            .iter()
            .find(|c| fold(&c.id) == wanted)
            .or_else(|| self.champions.iter().find(|c| fold(&c.name) == wanted))
            .ok_or_else(|| AppError::UnknownChampion(query.to_string()))
    }

    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.by_id(id).map(|c| c.name.as_str()).unwrap_or(id)
    }
}
