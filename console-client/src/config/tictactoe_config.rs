use serde::{Deserialize, Serialize};

use super::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicTacToeConfig {
    pub player_x_name: String,
    pub player_o_name: String,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            player_x_name: "Player X".to_string(),
            player_o_name: "Player O".to_string(),
        }
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.player_x_name.trim().is_empty() {
            return Err("Player X name must not be empty".to_string());
        }
        if self.player_o_name.trim().is_empty() {
            return Err("Player O name must not be empty".to_string());
        }
        Ok(())
    }
}
