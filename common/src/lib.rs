pub mod codenames;
pub mod config;
pub mod errors;
pub mod identifiers;
pub mod logger;
pub mod registry;
pub mod session_rng;

pub use codenames::{GuessOutcome, GuessResult, StartedGame};
pub use errors::{ConfigError, ConfigurationError, InsufficientPlayersError, InsufficientWordsError, StartError};
pub use identifiers::*;
pub use registry::SessionRegistry;
pub use session_rng::{RandomSource, SessionRng};
