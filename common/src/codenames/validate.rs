use crate::config::Validate;
use crate::errors::ConfigurationError;

use super::settings::{BoardConfig, GameRules};

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.size == 0 {
            return Err(ConfigurationError::EmptyBoard);
        }
        if self.team_count == 0 {
            return Err(ConfigurationError::NoTeamCards);
        }
        let colored = self.team_count.checked_add(self.forbidden_count);
        if colored.is_none_or(|colored| colored > self.size) {
            return Err(ConfigurationError::CardCountMismatch {
                size: self.size,
                team_count: self.team_count,
                forbidden_count: self.forbidden_count,
            });
        }
        Ok(())
    }
}

impl Validate for GameRules {
    fn validate(&self) -> Result<(), ConfigurationError> {
        self.board.validate()
    }
}
