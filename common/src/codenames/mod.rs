mod board;
mod game_state;
mod roles;
mod settings;
mod types;
mod validate;
mod word_source;

pub use board::Board;
pub use game_state::{CodenamesGameState, SessionSnapshot};
pub use roles::{RoleAssignment, assign_spymaster};
pub use settings::{BoardConfig, GameRules, GuessPolicy, WinCounting, WordMatching};
pub use types::{Card, Color, GuessOutcome, GuessResult, SessionStatus, StartedGame};
pub use word_source::{StaticWordList, WordSource};
