use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Top,
    Jungle,
    Middle,
    Bottom,
    Support,
}

impl Lane {
    pub const ALL: [Lane; 5] = [Lane::Top, Lane::Jungle, Lane::Middle, Lane::Bottom, Lane::Support];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lane::Top => "top",
            Lane::Jungle => "jungle",
            Lane::Middle => "middle",
            Lane::Bottom => "bottom",
            Lane::Support => "support",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lane {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(Lane::Top),
            "jungle" | "jg" => Ok(Lane::Jungle),
            "middle" | "mid" => Ok(Lane::Middle),
            "bottom" | "bot" | "adc" => Ok(Lane::Bottom),
            "support" | "sup" => Ok(Lane::Support),
            _ => Err(AppError::InvalidLane(s.to_string())),
        }
    }
}

/// Skill bracket filter used by the statistics site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    All,
    #[serde(rename = "1trick")]
    OneTrick,
    Challenger,
    Grandmaster,
    GrandmasterPlus,
    Master,
    MasterPlus,
    Diamond,
    #[serde(rename = "d2_plus")]
    D2Plus,
    #[default]
    DiamondPlus,
    Emerald,
    EmeraldPlus,
    Platinum,
    PlatinumPlus,
    Gold,
    GoldPlus,
    Silver,
    Bronze,
    Iron,
    Unranked,
}

impl Tier {
    pub const ALL: [Tier; 20] = [
        Tier::All,
        Tier::OneTrick,
        Tier::Challenger,
        Tier::Grandmaster,
        Tier::GrandmasterPlus,
        Tier::Master,
        Tier::MasterPlus,
        Tier::Diamond,
        Tier::D2Plus,
        Tier::DiamondPlus,
        Tier::Emerald,
        Tier::EmeraldPlus,
        Tier::Platinum,
        Tier::PlatinumPlus,
        Tier::Gold,
        Tier::GoldPlus,
        Tier::Silver,
        Tier::Bronze,
        Tier::Iron,
        Tier::Unranked,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::All => "all",
            Tier::OneTrick => "1trick",
            Tier::Challenger => "challenger",
            Tier::Grandmaster => "grandmaster",
            Tier::GrandmasterPlus => "grandmaster_plus",
            Tier::Master => "master",
            Tier::MasterPlus => "master_plus",
            Tier::Diamond => "diamond",
            Tier::D2Plus => "d2_plus",
            Tier::DiamondPlus => "diamond_plus",
            Tier::Emerald => "emerald",
            Tier::EmeraldPlus => "emerald_plus",
            Tier::Platinum => "platinum",
            Tier::PlatinumPlus => "platinum_plus",
            Tier::Gold => "gold",
            Tier::GoldPlus => "gold_plus",
            Tier::Silver => "silver",
            Tier::Bronze => "bronze",
            Tier::Iron => "iron",
            Tier::Unranked => "unranked",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Tier::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Tier::ALL.iter().map(|t| t.as_str()).collect();
                AppError::InvalidTier(format!("'{}' (expected one of: {})", s, names.join(", ")))
            })
    }
}

/// The four user choices the matchup pipeline reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Unique, in display order.
    pub own_champion_ids: Vec<String>,
    pub opponent_champion_id: Option<String>,
    pub lane: Option<Lane>,
    pub tier: Tier,
}

impl Selection {
    pub fn new(tier: Tier) -> Self {
        Selection {
            tier,
            ..Default::default()
        }
    }

    /// Appends `id` unless an id equal to it (ignoring case) is already selected.
    pub fn add_own(&mut self, id: &str) -> bool {
        if self.has_own(id) {
            return false;
        }
        self.own_champion_ids.push(id.to_string());
        true
    }

    pub fn remove_own(&mut self, id: &str) -> bool {
        let before = self.own_champion_ids.len();
        self.own_champion_ids
            .retain(|own| !own.eq_ignore_ascii_case(id));
        self.own_champion_ids.len() != before
    }

    pub fn has_own(&self, id: &str) -> bool {
        self.own_champion_ids
            .iter()
            .any(|own| own.eq_ignore_ascii_case(id))
    }

    pub fn set_opponent(&mut self, id: Option<&str>) {
        self.opponent_champion_id = id
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_accepts_common_aliases() {
        assert_eq!("MID".parse::<Lane>().unwrap(), Lane::Middle);
        assert_eq!("adc".parse::<Lane>().unwrap(), Lane::Bottom);
        assert_eq!("jg".parse::<Lane>().unwrap(), Lane::Jungle);
        assert!("river".parse::<Lane>().is_err());
    }

    #[test]
    fn every_lane_parses_back_from_its_name() {
        for lane in Lane::ALL {
            assert_eq!(lane.to_string().parse::<Lane>().unwrap(), lane);
        }
    }

    #[test]
    fn every_tier_parses_back_from_its_slug() {
        for tier in Tier::ALL {
            assert_eq!(tier.as_str().parse::<Tier>().unwrap(), tier);
        }
        assert_eq!("Diamond-Plus".parse::<Tier>().unwrap(), Tier::DiamondPlus);
        assert!("wood".parse::<Tier>().is_err());
    }

    #[test]
    fn tier_serde_matches_site_slug() {
        let json = serde_json::to_string(&Tier::OneTrick).unwrap();
        assert_eq!(json, "\"1trick\"");
        let tier: Tier = serde_json::from_str("\"grandmaster_plus\"").unwrap();
        assert_eq!(tier, Tier::GrandmasterPlus);
        assert_eq!(Tier::default(), Tier::DiamondPlus);
    }

    #[test]
    fn own_champions_stay_unique_in_insertion_order() {
        let mut selection = Selection::new(Tier::default());
        assert!(selection.add_own("Garen"));
        assert!(selection.add_own("Aatrox"));
        assert!(!selection.add_own("garen"));
        assert_eq!(selection.own_champion_ids, vec!["Garen", "Aatrox"]);

        assert!(selection.remove_own("GAREN"));
        assert_eq!(selection.own_champion_ids, vec!["Aatrox"]);
    }

    #[test]
    fn blank_opponent_is_unset() {
        let mut selection = Selection::default();
        selection.set_opponent(Some("  "));
        assert_eq!(selection.opponent_champion_id, None);
        selection.set_opponent(Some("Darius"));
        assert_eq!(selection.opponent_champion_id.as_deref(), Some("Darius"));
    }
}
