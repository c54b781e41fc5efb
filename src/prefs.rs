use crate::error::AppError;
use crate::selection::{Lane, Selection, Tier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The persisted part of a selection. The opponent is deliberately not stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub own_champions: Vec<String>,
    #[serde(default)]
    pub lane: Option<Lane>,
    #[serde(default)]
    pub tier: Tier,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            own_champions: Vec::new(),
            lane: None,
            tier: Tier::default(),
            updated_at: Utc::now(),
        }
    }
}

impl Preferences {
    pub fn get_prefs_path() -> PathBuf {
        let prefs_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lol_matchup");

        prefs_dir.join("preferences.json")
    }

    pub fn load() -> Result<Self, AppError> {
        Self::load_from(&Self::get_prefs_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                AppError::PrefsError(format!("Failed to parse preferences: {}", e))
            }),
            // Nothing saved yet
            Err(_) => Ok(Preferences::default()),
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_prefs_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                AppError::PrefsError(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            AppError::PrefsError(format!("Failed to serialize preferences: {}", e))
        })?;

        fs::write(path, json).map_err(|e| {
            AppError::PrefsError(format!("Failed to write preferences: {}", e))
        })?;

        Ok(())
    }

    /// Copies the persisted fields out of `selection`.
    pub fn update_from(&mut self, selection: &Selection) {
        self.own_champions = selection.own_champion_ids.clone();
        self.lane = selection.lane;
        self.tier = selection.tier;
        self.updated_at = Utc::now();
    }

    pub fn to_selection(&self) -> Selection {
        let mut selection = Selection::new(self.tier);
        for id in &self.own_champions {
            selection.add_own(id);
        }
        selection.lane = self.lane;
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load_from(&dir.path().join("nope.json")).unwrap();
        assert!(prefs.own_champions.is_empty());
        assert_eq!(prefs.lane, None);
        assert_eq!(prefs.tier, Tier::DiamondPlus);
    }

    #[test]
    fn saved_selection_comes_back_without_opponent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut selection = Selection::new(Tier::Emerald);
        selection.add_own("Garen");
        selection.add_own("Aatrox");
        selection.set_opponent(Some("Darius"));
        selection.lane = Some(Lane::Top);

        let mut prefs = Preferences::default();
        prefs.update_from(&selection);
        prefs.save_to(&path).unwrap();

        let restored = Preferences::load_from(&path).unwrap().to_selection();
        assert_eq!(restored.own_champion_ids, vec!["Garen", "Aatrox"]);
        assert_eq!(restored.lane, Some(Lane::Top));
        assert_eq!(restored.tier, Tier::Emerald);
        assert_eq!(restored.opponent_champion_id, None);
    }

    #[test]
    fn file_without_timestamp_keeps_saved_choices() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(
            &path,
            r#"{"own_champions":["Garen"],"lane":"top","tier":"emerald"}"#,
        )
        .unwrap();

        let prefs = Preferences::load_from(&path).unwrap();
        assert_eq!(prefs.own_champions, vec!["Garen"]);
        assert_eq!(prefs.lane, Some(Lane::Top));
        assert_eq!(prefs.tier, Tier::Emerald);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(Preferences::load_from(&path), Err(AppError::PrefsError(_))));
    }
}
