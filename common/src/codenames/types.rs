use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PlayerId;

pub const DEFAULT_BOARD_SIZE: usize = 25;
pub const DEFAULT_TEAM_CARDS: usize = 9;
pub const DEFAULT_FORBIDDEN_CARDS: usize = 1;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Color {
    Team,
    Neutral,
    Forbidden,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Team => "Team",
            Color::Neutral => "Neutral",
            Color::Forbidden => "Forbidden",
        };
        f.write_str(name)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Card {
    word: String,
    color: Color,
}

impl Card {
    pub fn new(word: impl Into<String>, color: Color) -> Self {
        Self {
            word: word.into(),
            color,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionStatus {
    Lobby,
    Active,
    Won,
    Lost,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GuessOutcome {
    Ignored,
    TurnContinues,
    TurnEnded,
    GameWon,
    GameLost,
}

impl GuessOutcome {
    pub fn is_terminal(self) -> bool {
        matches!(self, GuessOutcome::GameWon | GuessOutcome::GameLost)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GuessResult {
    pub matched_words: Vec<String>,
    pub outcome: GuessOutcome,
    pub team_card_count: usize,
}

impl GuessResult {
    pub fn ignored() -> Self {
        Self {
            matched_words: Vec::new(),
            outcome: GuessOutcome::Ignored,
            team_card_count: 0,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StartedGame {
    pub spymaster: PlayerId,
    pub guessers: Vec<PlayerId>,
    pub visible_words: Vec<String>,
    // Colored board for the spymaster only.
    pub key: Vec<Card>,
}
