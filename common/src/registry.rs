use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::codenames::{
    Board, CodenamesGameState, GameRules, GuessResult, SessionSnapshot, StartedGame, StaticWordList,
    WordSource, assign_spymaster,
};
use crate::errors::StartError;
use crate::session_rng::{RandomSource, SessionRng};
use crate::{ChannelId, PlayerId, log};

type SharedSession = Arc<Mutex<CodenamesGameState>>;

// Map lock covers insert/lookup/remove only; guesses run under the session lock.
pub struct SessionRegistry<W = StaticWordList, R = SessionRng> {
    sessions: Arc<Mutex<HashMap<ChannelId, SharedSession>>>,
    word_source: Arc<W>,
    rng: Arc<Mutex<R>>,
    rules: GameRules,
}

impl<W, R> Clone for SessionRegistry<W, R> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            word_source: self.word_source.clone(),
            rng: self.rng.clone(),
            rules: self.rules,
        }
    }
}

impl<W, R> std::fmt::Debug for SessionRegistry<W, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl<W, R> SessionRegistry<W, R>
where
    W: WordSource,
    R: RandomSource,
{
    pub fn new(word_source: W, rng: R, rules: GameRules) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            word_source: Arc::new(word_source),
            rng: Arc::new(Mutex::new(rng)),
            rules,
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub async fn start_session(&self, channel_id: ChannelId, players: &[PlayerId]) -> Result<StartedGame, StartError> {
        let rules = self.rules;
        self.start_session_with(channel_id, players, &rules).await
    }

    pub async fn start_session_with(
        &self,
        channel_id: ChannelId,
        players: &[PlayerId],
        rules: &GameRules,
    ) -> Result<StartedGame, StartError> {
        let (board, team_card_count, roles) = {
            let mut rng = self.rng.lock().await;
            let (board, team_card_count) = Board::generate(self.word_source.as_ref(), &rules.board, &mut *rng)?;
            let roles = assign_spymaster(players, &mut *rng)?;
            (board, team_card_count, roles)
        };

        let started = StartedGame {
            spymaster: roles.spymaster.clone(),
            guessers: roles.guessers.clone(),
            visible_words: board.words(),
            key: board.cards().to_vec(),
        };
        let mut state = CodenamesGameState::new(channel_id.clone(), board, team_card_count, *rules);
        state.assign_roles(roles);

        let mut sessions = self.sessions.lock().await;
        let replaced = sessions.insert(channel_id.clone(), Arc::new(Mutex::new(state)));
        drop(sessions);

        if replaced.is_some() {
            log!("Game in {} replaced by a new game", channel_id);
        }
        log!(
            "Game started in {}: spymaster {}, {} guessers, {} cards",
            channel_id,
            started.spymaster,
            started.guessers.len(),
            started.visible_words.len()
        );

        Ok(started)
    }

    pub async fn get_active_session(&self, channel_id: &ChannelId) -> Option<SessionSnapshot> {
        let session = self.session(channel_id).await?;
        let state = session.lock().await;
        Some(state.clone())
    }

    pub async fn submit_guess(&self, channel_id: &ChannelId, guesser: &PlayerId, words: &[String]) -> GuessResult {
        let Some(session) = self.session(channel_id).await else {
            return GuessResult::ignored();
        };

        let result = session.lock().await.resolve_guess(guesser, words);

        if result.outcome.is_terminal() {
            self.retire(channel_id, &session).await;
            log!(
                "Game in {} finished with {:?} after {} matched words",
                channel_id,
                result.outcome,
                result.matched_words.len()
            );
        }

        result
    }

    pub async fn end_session(&self, channel_id: &ChannelId) -> bool {
        let removed = self.sessions.lock().await.remove(channel_id).is_some();
        if removed {
            log!("Game session removed: {}", channel_id);
        }
        removed
    }

    pub async fn active_channels(&self) -> Vec<ChannelId> {
        let mut channels: Vec<ChannelId> = self.sessions.lock().await.keys().cloned().collect();
        channels.sort();
        channels
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    async fn session(&self, channel_id: &ChannelId) -> Option<SharedSession> {
        self.sessions.lock().await.get(channel_id).cloned()
    }

    // A restart may have replaced the session while the guess was resolved;
    // only the finished one is removed.
    async fn retire(&self, channel_id: &ChannelId, finished: &SharedSession) {
        let mut sessions = self.sessions.lock().await;
        if sessions.get(channel_id).is_some_and(|current| Arc::ptr_eq(current, finished)) {
            sessions.remove(channel_id);
        }
    }
}
