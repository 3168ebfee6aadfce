use std::fs;
use std::path::Path;

use kakera_core::GameRules;

pub(crate) fn load_rules(path: Option<&Path>) -> Result<GameRules, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(GameRules::default());
    };
    let contents = fs::read_to_string(path)
        .map_err(|err| format!("failed to read rules at {}: {err}", path.display()))?;
    parse_rules(&contents)
        .map_err(|err| format!("failed to parse rules at {}: {err}", path.display()).into())
}

pub(crate) fn parse_rules(contents: &str) -> Result<GameRules, toml::de::Error> {
    toml::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_uses_defaults() {
        let rules = load_rules(None).expect("defaults");
        assert_eq!(rules, GameRules::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let rules = parse_rules("seed = 42\n").expect("parse");
        assert_eq!(rules.seed, Some(42));
        assert_eq!(rules.difficulty, GameRules::default().difficulty);
    }

    #[test]
    fn rules_file_round_trips_through_disk() {
        let path = std::env::temp_dir().join(format!("kakera-rules-test-{}.toml", std::process::id()));
        std::fs::write(&path, "difficulty = 4\nseed = 7\n").expect("write rules");
        let rules = load_rules(Some(&path)).expect("load");
        assert_eq!(
            rules,
            GameRules {
                difficulty: 4,
                seed: Some(7)
            }
        );
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn unknown_type_is_an_error() {
        assert!(parse_rules("difficulty = \"hard\"\n").is_err());
    }
}
