use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("requested {requested} distinct words but only {available} are available")]
pub struct InsufficientWordsError {
    pub requested: usize,
    pub available: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("board size must be at least 1")]
    EmptyBoard,
    #[error("a board needs at least one team card")]
    NoTeamCards,
    #[error("{team_count} team and {forbidden_count} forbidden cards do not fit on a board of {size}")]
    CardCountMismatch {
        size: usize,
        team_count: usize,
        forbidden_count: usize,
    },
    #[error("word source returned {received} words, expected {expected}")]
    WrongWordCount { expected: usize, received: usize },
    #[error("word '{0}' appears on the board more than once")]
    DuplicateWord(String),
    #[error(transparent)]
    InsufficientWords(#[from] InsufficientWordsError),
    #[error("failed to load word list: {0}")]
    WordList(String),
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please provide at least one person participating using '@name'")]
pub struct InsufficientPlayersError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    InsufficientPlayers(#[from] InsufficientPlayersError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write config: {0}")]
    Write(#[source] std::io::Error),
    #[error("config is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    #[error("config validation error: {0}")]
    Invalid(#[from] ConfigurationError),
}
