/// Champion ids (lower-cased) whose page on the statistics site lives under a different slug.
/// Targets must never appear as keys, otherwise normalizing would not be idempotent.
const SLUG_ALIASES: &[(&str, &str)] = &[("monkeyking", "wukong")];

/// Maps a champion id to the statistics site's URL slug.
pub fn normalize(champion_id: &str) -> String {
    let lowered = champion_id.to_lowercase();
    SLUG_ALIASES
        .iter()
        .find(|(legacy, _)| *legacy == lowered)
        .map(|(_, slug)| slug.to_string())
        .unwrap_or(lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_plain_ids() {
        assert_eq!(normalize("Aatrox"), "aatrox");
        assert_eq!(normalize("KSante"), "ksante");
    }

    #[test]
    fn maps_legacy_wukong_id() {
        assert_eq!(normalize("MonkeyKing"), "wukong");
        assert_eq!(normalize("monkeyking"), "wukong");
    }

    #[test]
    fn normalize_is_idempotent() {
        for id in ["Aatrox", "MonkeyKing", "wukong", "Nunu", "", "DrMundo", "Kai'Sa"] {
            let once = normalize(id);
            assert_eq!(normalize(&once), once, "not idempotent for {id}");
        }
    }

    #[test]
    fn alias_targets_are_not_aliases_themselves() {
        for (_, target) in SLUG_ALIASES {
            assert!(SLUG_ALIASES.iter().all(|(legacy, _)| legacy != target));
        }
    }
}
