use serde::{Deserialize, Serialize};

use super::types::{DEFAULT_BOARD_SIZE, DEFAULT_FORBIDDEN_CARDS, DEFAULT_TEAM_CARDS};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub size: usize,
    pub team_count: usize,
    pub forbidden_count: usize,
}

impl BoardConfig {
    pub fn neutral_count(&self) -> usize {
        self.team_count
            .checked_add(self.forbidden_count)
            .map_or(0, |colored| self.size.saturating_sub(colored))
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            team_count: DEFAULT_TEAM_CARDS,
            forbidden_count: DEFAULT_FORBIDDEN_CARDS,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinCounting {
    #[default]
    PerGuess,
    Cumulative,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordMatching {
    #[default]
    Exact,
    CaseInsensitive,
}

impl WordMatching {
    pub fn matches(self, guess: &str, word: &str) -> bool {
        match self {
            WordMatching::Exact => guess == word,
            WordMatching::CaseInsensitive => guess.to_lowercase() == word.to_lowercase(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessPolicy {
    #[default]
    GuessersOnly,
    AnyoneButSpymaster,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub board: BoardConfig,
    pub win_counting: WinCounting,
    pub word_matching: WordMatching,
    pub guess_policy: GuessPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_is_classic_layout() {
        let board = BoardConfig::default();

        assert_eq!(board.size, 25);
        assert_eq!(board.team_count, 9);
        assert_eq!(board.forbidden_count, 1);
        assert_eq!(board.neutral_count(), 15);
    }

    #[test]
    fn test_neutral_count_with_overflowing_counts_is_zero() {
        let board = BoardConfig { size: 3, team_count: usize::MAX, forbidden_count: 1 };

        assert_eq!(board.neutral_count(), 0);
    }

    #[test]
    fn test_word_matching_modes() {
        assert!(WordMatching::Exact.matches("Apple", "Apple"));
        assert!(!WordMatching::Exact.matches("apple", "Apple"));
        assert!(WordMatching::CaseInsensitive.matches("aPPLE", "Apple"));
    }

    #[test]
    fn test_rules_deserialize_snake_case_enums() {
        let rules: GameRules = serde_yaml_ng::from_str(
            "word_matching: case_insensitive\nguess_policy: anyone_but_spymaster\n",
        )
        .unwrap();

        assert_eq!(rules.word_matching, WordMatching::CaseInsensitive);
        assert_eq!(rules.guess_policy, GuessPolicy::AnyoneButSpymaster);
        assert_eq!(rules.win_counting, WinCounting::PerGuess);
    }
}
