use std::collections::HashSet;
use std::path::Path;

use crate::errors::{ConfigurationError, InsufficientWordsError};
use crate::session_rng::RandomSource;

const BUILTIN_WORDS: &str = include_str!("words.txt");

pub trait WordSource: Send + Sync {
    fn supply<R: RandomSource>(&self, count: usize, rng: &mut R) -> Result<Vec<String>, InsufficientWordsError>;
}

#[derive(Clone, Debug)]
pub struct StaticWordList {
    words: Vec<String>,
}

impl StaticWordList {
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_WORDS.lines())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .filter(|w| seen.insert(w.to_lowercase()))
            .collect();
        Self { words }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigurationError::WordList(format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_words(content.lines()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for StaticWordList {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WordSource for StaticWordList {
    fn supply<R: RandomSource>(&self, count: usize, rng: &mut R) -> Result<Vec<String>, InsufficientWordsError> {
        if count > self.words.len() {
            return Err(InsufficientWordsError {
                requested: count,
                available: self.words.len(),
            });
        }

        let mut indices: Vec<usize> = (0..self.words.len()).collect();
        rng.shuffle_in_place(&mut indices);

        Ok(indices
            .into_iter()
            .take(count)
            .map(|i| self.words[i].clone())
            .collect())
    }
}
