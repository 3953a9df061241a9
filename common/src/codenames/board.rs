use std::collections::HashSet;

use crate::config::Validate;
use crate::errors::ConfigurationError;
use crate::session_rng::RandomSource;

use super::settings::{BoardConfig, WordMatching};
use super::types::{Card, Color};
use super::word_source::WordSource;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn generate<W, R>(
        word_source: &W,
        config: &BoardConfig,
        rng: &mut R,
    ) -> Result<(Self, usize), ConfigurationError>
    where
        W: WordSource + ?Sized,
        R: RandomSource,
    {
        config.validate()?;

        let mut words = word_source.supply(config.size, rng)?;
        if words.len() != config.size {
            return Err(ConfigurationError::WrongWordCount {
                expected: config.size,
                received: words.len(),
            });
        }
        rng.shuffle_in_place(&mut words);

        let mut colors = Vec::with_capacity(config.size);
        colors.extend(std::iter::repeat_n(Color::Team, config.team_count));
        colors.extend(std::iter::repeat_n(Color::Forbidden, config.forbidden_count));
        colors.extend(std::iter::repeat_n(Color::Neutral, config.neutral_count()));
        rng.shuffle_in_place(&mut colors);

        let cards = words
            .into_iter()
            .zip(colors)
            .map(|(word, color)| Card::new(word, color))
            .collect();

        let board = Self::from_cards(cards)?;
        Ok((board, config.team_count))
    }

    pub fn from_cards(cards: Vec<Card>) -> Result<Self, ConfigurationError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.word().to_lowercase()) {
                return Err(ConfigurationError::DuplicateWord(card.word().to_string()));
            }
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn find(&self, guess: &str, matching: WordMatching) -> Option<(usize, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .find(|(_, card)| matching.matches(guess, card.word()))
    }

    pub fn count_of(&self, color: Color) -> usize {
        self.cards.iter().filter(|card| card.color() == color).count()
    }

    pub fn words(&self) -> Vec<String> {
        self.cards.iter().map(|card| card.word().to_string()).collect()
    }
}
