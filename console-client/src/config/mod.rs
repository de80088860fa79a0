mod memory_match_config;
mod tictactoe_config;

pub use memory_match_config::MemoryMatchConfig;
pub use tictactoe_config::TicTacToeConfig;

use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "games_console_config.yaml";

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tictactoe: TicTacToeConfig,
    #[serde(default)]
    pub memory_match: MemoryMatchConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        self.memory_match.validate()?;
        Ok(())
    }
}

pub fn load_config(path: Option<&str>) -> Result<Config, String> {
    let file_path = path.unwrap_or(DEFAULT_CONFIG_FILE);

    let content = match std::fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => return Err(format!("Failed to read config file: {}", err)),
    };

    let config: Config = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_games_console_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let default_config = Config::default();

        let serialized = serde_yaml_ng::to_string(&default_config).unwrap();
        let deserialized: Config = serde_yaml_ng::from_str(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_missing_file_yields_default_config() {
        let config = load_config(Some("this_file_does_not_exist.yaml")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let file_path = get_temp_file_path();
        std::fs::write(
            &file_path,
            "tictactoe:\n  player_x_name: Alice\n  player_o_name: Bob\n",
        )
        .unwrap();

        let config = load_config(Some(&file_path)).unwrap();
        std::fs::remove_file(&file_path).unwrap();

        assert_eq!(config.tictactoe.player_x_name, "Alice");
        assert_eq!(config.tictactoe.player_o_name, "Bob");
        assert_eq!(config.memory_match, MemoryMatchConfig::default());
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let file_path = get_temp_file_path();
        std::fs::write(&file_path, "tictactoe: [not, a, mapping]\n").unwrap();

        let result = load_config(Some(&file_path));
        std::fs::remove_file(&file_path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_player_name_fails_validation() {
        let file_path = get_temp_file_path();
        std::fs::write(
            &file_path,
            "tictactoe:\n  player_x_name: \"\"\n  player_o_name: Bob\n",
        )
        .unwrap();

        let result = load_config(Some(&file_path));
        std::fs::remove_file(&file_path).unwrap();

        assert!(result.is_err());
    }
}
