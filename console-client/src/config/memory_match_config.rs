use serde::{Deserialize, Serialize};

use super::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MemoryMatchConfig {
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

impl Validate for MemoryMatchConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
