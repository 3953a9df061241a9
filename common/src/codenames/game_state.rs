use crate::{ChannelId, PlayerId};

use super::board::Board;
use super::roles::RoleAssignment;
use super::settings::{GameRules, GuessPolicy, WinCounting};
use super::types::{Color, GuessOutcome, GuessResult, SessionStatus};

#[derive(Clone, Debug)]
pub struct CodenamesGameState {
    channel_id: ChannelId,
    spymaster: Option<PlayerId>,
    guessers: Vec<PlayerId>,
    board: Board,
    revealed: Vec<bool>,
    team_card_count: usize,
    correct_guessed_count: usize,
    status: SessionStatus,
    rules: GameRules,
}

pub type SessionSnapshot = CodenamesGameState;

impl CodenamesGameState {
    pub fn new(channel_id: ChannelId, board: Board, team_card_count: usize, rules: GameRules) -> Self {
        let revealed = vec![false; board.len()];
        Self {
            channel_id,
            spymaster: None,
            guessers: Vec::new(),
            board,
            revealed,
            team_card_count,
            correct_guessed_count: 0,
            status: SessionStatus::Lobby,
            rules,
        }
    }

    pub fn assign_roles(&mut self, roles: RoleAssignment) {
        self.spymaster = Some(roles.spymaster);
        self.guessers = roles.guessers;
        self.status = SessionStatus::Active;
    }

    pub fn resolve_guess(&mut self, guesser: &PlayerId, words: &[String]) -> GuessResult {
        if !self.may_guess(guesser) {
            return GuessResult::ignored();
        }

        let mut matched_words = Vec::new();

        for word in words {
            let Some((index, card)) = self.board.find(word, self.rules.word_matching) else {
                continue;
            };

            match card.color() {
                Color::Team => {
                    matched_words.push(card.word().to_string());
                    self.revealed[index] = true;
                    self.correct_guessed_count += 1;
                }
                Color::Neutral => {
                    self.revealed[index] = true;
                    return self.result(matched_words, GuessOutcome::TurnEnded);
                }
                Color::Forbidden => {
                    self.revealed[index] = true;
                    self.status = SessionStatus::Lost;
                    return self.result(matched_words, GuessOutcome::GameLost);
                }
            }
        }

        if self.is_won(matched_words.len()) {
            self.status = SessionStatus::Won;
            return self.result(matched_words, GuessOutcome::GameWon);
        }

        self.result(matched_words, GuessOutcome::TurnContinues)
    }

    fn may_guess(&self, guesser: &PlayerId) -> bool {
        if self.status != SessionStatus::Active || self.spymaster.as_ref() == Some(guesser) {
            return false;
        }
        match self.rules.guess_policy {
            GuessPolicy::GuessersOnly => self.guessers.contains(guesser),
            GuessPolicy::AnyoneButSpymaster => true,
        }
    }

    fn is_won(&self, matched_this_guess: usize) -> bool {
        match self.rules.win_counting {
            WinCounting::PerGuess => matched_this_guess == self.team_card_count,
            WinCounting::Cumulative => self.revealed_team_cards() == self.team_card_count,
        }
    }

    fn result(&self, matched_words: Vec<String>, outcome: GuessOutcome) -> GuessResult {
        GuessResult {
            matched_words,
            outcome,
            team_card_count: self.team_card_count,
        }
    }

    pub fn revealed_team_cards(&self) -> usize {
        self.board
            .cards()
            .iter()
            .zip(&self.revealed)
            .filter(|(card, revealed)| **revealed && card.color() == Color::Team)
            .count()
    }

    pub fn channel_id(&self) -> &ChannelId {
        &self.channel_id
    }

    pub fn spymaster(&self) -> Option<&PlayerId> {
        self.spymaster.as_ref()
    }

    pub fn guessers(&self) -> &[PlayerId] {
        &self.guessers
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn team_card_count(&self) -> usize {
        self.team_card_count
    }

    pub fn correct_guessed_count(&self) -> usize {
        self.correct_guessed_count
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codenames::settings::WordMatching;
    use crate::codenames::types::Card;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn create_test_state(cards: &[(&str, Color)], rules: GameRules) -> CodenamesGameState {
        let cards: Vec<Card> = cards.iter().map(|(w, c)| Card::new(*w, *c)).collect();
        let team_cards = cards.iter().filter(|c| c.color() == Color::Team).count();
        let board = Board::from_cards(cards).unwrap();
        let mut state = CodenamesGameState::new(ChannelId::new("#test"), board, team_cards, rules);
        state.assign_roles(RoleAssignment {
            spymaster: PlayerId::new("spy"),
            guessers: vec![PlayerId::new("alice"), PlayerId::new("bob")],
        });
        state
    }

    fn halting_board(third: Color) -> CodenamesGameState {
        create_test_state(
            &[("a", Color::Team), ("b", Color::Team), ("c", third), ("d", Color::Team)],
            GameRules::default(),
        )
    }

    fn alice() -> PlayerId {
        PlayerId::new("alice")
    }

    #[test]
    fn test_forbidden_halts_and_keeps_prior_matches() {
        let mut state = halting_board(Color::Forbidden);

        let result = state.resolve_guess(&alice(), &words(&["a", "b", "c", "d"]));

        assert_eq!(result.matched_words, words(&["a", "b"]));
        assert_eq!(result.outcome, GuessOutcome::GameLost);
        assert_eq!(state.status(), SessionStatus::Lost);
        assert!(!state.is_revealed(3));
    }

    #[test]
    fn test_neutral_ends_turn_only() {
        let mut state = halting_board(Color::Neutral);

        let result = state.resolve_guess(&alice(), &words(&["a", "b", "c", "d"]));

        assert_eq!(result.matched_words, words(&["a", "b"]));
        assert_eq!(result.outcome, GuessOutcome::TurnEnded);
        assert_eq!(state.status(), SessionStatus::Active);
        assert_eq!(result.team_card_count, 3);
    }

    #[test]
    fn test_all_team_cards_in_one_guess_wins() {
        let mut state = create_test_state(&[("a", Color::Team), ("b", Color::Team), ("x", Color::Neutral)], GameRules::default());

        let result = state.resolve_guess(&alice(), &words(&["a", "b"]));

        assert_eq!(result.matched_words, words(&["a", "b"]));
        assert_eq!(result.outcome, GuessOutcome::GameWon);
        assert_eq!(state.status(), SessionStatus::Won);
    }

    #[test]
    fn test_partial_guess_continues() {
        let mut state = create_test_state(&[("a", Color::Team), ("b", Color::Team), ("x", Color::Neutral)], GameRules::default());

        let result = state.resolve_guess(&alice(), &words(&["hello", "a", "world"]));

        assert_eq!(result.matched_words, words(&["a"]));
        assert_eq!(result.outcome, GuessOutcome::TurnContinues);
        assert_eq!(state.correct_guessed_count(), 1);
    }

    #[test]
    fn test_per_guess_counting_needs_all_matches_in_one_call() {
        let mut state = create_test_state(&[("a", Color::Team), ("b", Color::Team), ("x", Color::Neutral)], GameRules::default());

        state.resolve_guess(&alice(), &words(&["a"]));
        let result = state.resolve_guess(&alice(), &words(&["b"]));

        assert_eq!(result.outcome, GuessOutcome::TurnContinues);
        assert_eq!(state.revealed_team_cards(), 2);
    }

    #[test]
    fn test_cumulative_counting_wins_across_calls() {
        let rules = GameRules {
            win_counting: WinCounting::Cumulative,
            ..GameRules::default()
        };
        let mut state = create_test_state(&[("a", Color::Team), ("b", Color::Team), ("x", Color::Neutral)], rules);

        let first = state.resolve_guess(&alice(), &words(&["a", "a"]));
        let second = state.resolve_guess(&PlayerId::new("bob"), &words(&["b"]));

        assert_eq!(first.outcome, GuessOutcome::TurnContinues);
        assert_eq!(second.outcome, GuessOutcome::GameWon);
        assert_eq!(second.matched_words, words(&["b"]));
    }

    #[test]
    fn test_spymaster_guess_ignored() {
        let mut state = halting_board(Color::Forbidden);

        let result = state.resolve_guess(&PlayerId::new("spy"), &words(&["c"]));

        assert_eq!(result, GuessResult::ignored());
        assert_eq!(state.status(), SessionStatus::Active);
    }

    #[test]
    fn test_outsider_ignored_unless_open_guessing() {
        let mut closed = halting_board(Color::Neutral);
        let mut open = create_test_state(
            &[("a", Color::Team), ("b", Color::Team), ("c", Color::Neutral)],
            GameRules {
                guess_policy: GuessPolicy::AnyoneButSpymaster,
                ..GameRules::default()
            },
        );

        let outsider = PlayerId::new("mallory");

        assert_eq!(closed.resolve_guess(&outsider, &words(&["a"])).outcome, GuessOutcome::Ignored);
        assert_eq!(open.resolve_guess(&outsider, &words(&["a"])).outcome, GuessOutcome::TurnContinues);
    }

    #[test]
    fn test_no_guessers_rejects_everyone() {
        let board = Board::from_cards(vec![Card::new("a", Color::Team)]).unwrap();
        let mut state = CodenamesGameState::new(ChannelId::new("#solo"), board, 1, GameRules::default());
        state.assign_roles(RoleAssignment {
            spymaster: PlayerId::new("solo"),
            guessers: Vec::new(),
        });

        assert_eq!(state.resolve_guess(&PlayerId::new("solo"), &words(&["a"])).outcome, GuessOutcome::Ignored);
        assert_eq!(state.resolve_guess(&PlayerId::new("other"), &words(&["a"])).outcome, GuessOutcome::Ignored);
    }

    #[test]
    fn test_lobby_session_ignores_guesses() {
        let board = Board::from_cards(vec![Card::new("a", Color::Team)]).unwrap();
        let mut state = CodenamesGameState::new(ChannelId::new("#new"), board, 1, GameRules::default());

        assert_eq!(state.resolve_guess(&alice(), &words(&["a"])).outcome, GuessOutcome::Ignored);
        assert!(state.spymaster().is_none());
    }

    #[test]
    fn test_finished_game_ignores_further_guesses() {
        let mut state = halting_board(Color::Forbidden);
        state.resolve_guess(&alice(), &words(&["c"]));

        let result = state.resolve_guess(&alice(), &words(&["a"]));

        assert_eq!(result.outcome, GuessOutcome::Ignored);
        assert!(result.matched_words.is_empty());
    }

    #[test]
    fn test_case_insensitive_reports_board_spelling() {
        let rules = GameRules {
            word_matching: WordMatching::CaseInsensitive,
            ..GameRules::default()
        };
        let mut state = create_test_state(&[("Apple", Color::Team), ("Pear", Color::Team), ("Plum", Color::Neutral)], rules);

        let result = state.resolve_guess(&alice(), &words(&["apple", "PEAR"]));

        assert_eq!(result.matched_words, words(&["Apple", "Pear"]));
        assert_eq!(result.outcome, GuessOutcome::GameWon);
    }

    #[test]
    fn test_exact_matching_ignores_other_case() {
        let mut state = halting_board(Color::Forbidden);

        let result = state.resolve_guess(&alice(), &words(&["A", "C"]));

        assert!(result.matched_words.is_empty());
        assert_eq!(result.outcome, GuessOutcome::TurnContinues);
    }
}
