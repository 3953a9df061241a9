use common::codenames::{Card, StaticWordList, WordSource};
use common::{
    ChannelId, GuessOutcome, GuessResult, PlayerId, RandomSource, SessionRegistry,
    SessionRng, StartError, StartedGame, log,
};

use crate::broadcaster::Broadcaster;

const CLUE_PROMPT: &str = "Please give a clue";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatLine {
    pub channel_id: ChannelId,
    pub sender: PlayerId,
    pub text: String,
}

pub fn parse_line(line: &str) -> Option<ChatLine> {
    let (channel, rest) = line.trim().split_once(char::is_whitespace)?;
    let (nick, text) = rest.trim_start().split_once(':')?;
    let nick = nick.trim();
    if nick.is_empty() || nick.contains(char::is_whitespace) {
        return None;
    }
    Some(ChatLine {
        channel_id: ChannelId::new(channel),
        sender: PlayerId::new(nick),
        text: text.trim().to_string(),
    })
}

pub fn filter_names<'a>(args: impl IntoIterator<Item = &'a str>) -> Vec<PlayerId> {
    args.into_iter()
        .filter_map(|arg| arg.strip_prefix('@'))
        .filter(|name| !name.is_empty())
        .map(PlayerId::new)
        .collect()
}

pub struct MessageHandler<W = StaticWordList, R = SessionRng> {
    registry: SessionRegistry<W, R>,
    broadcaster: Broadcaster,
    command: String,
}

impl<W, R> MessageHandler<W, R>
where
    W: WordSource,
    R: RandomSource,
{
    pub fn new(registry: SessionRegistry<W, R>, broadcaster: Broadcaster, command: String) -> Self {
        Self {
            registry,
            broadcaster,
            command,
        }
    }

    pub async fn handle_line(&self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        let Some(chat_line) = parse_line(line) else {
            log!("Skipping malformed line: {}", line);
            return;
        };

        let mut tokens = chat_line.text.split_whitespace();
        if tokens.next() == Some(self.command.as_str()) {
            self.handle_start(&chat_line, tokens.collect()).await;
        } else {
            self.handle_guess(&chat_line).await;
        }
    }

    async fn handle_start(&self, chat_line: &ChatLine, args: Vec<&str>) {
        let channel_id = &chat_line.channel_id;
        let players = filter_names(args);

        match self.registry.start_session(channel_id.clone(), &players).await {
            Ok(started) => self.announce_start(channel_id, &started).await,
            Err(StartError::InsufficientPlayers(e)) => {
                log!("[channel:{}] {} tried to start a game without players", channel_id, chat_line.sender);
                self.broadcaster.send_to_channel(channel_id, e.to_string()).await;
            }
            Err(StartError::Configuration(e)) => {
                log!("[channel:{}] Could not start a game: {}", channel_id, e);
                self.broadcaster
                    .send_to_channel(channel_id, format!("Could not start a game: {}", e))
                    .await;
            }
        }
    }

    async fn announce_start(&self, channel_id: &ChannelId, started: &StartedGame) {
        let guessers: Vec<&str> = started.guessers.iter().map(PlayerId::as_str).collect();
        let text = format!(
            "spymaster: {}, players: {}\n{}\n{}",
            started.spymaster,
            guessers.join(", "),
            CLUE_PROMPT,
            started.visible_words.join(", ")
        );
        self.broadcaster.send_to_channel(channel_id, text).await;
        self.broadcaster
            .send_to_player(channel_id, &started.spymaster, render_key(&started.key))
            .await;
    }

    async fn handle_guess(&self, chat_line: &ChatLine) {
        let words: Vec<String> = chat_line.text.split_whitespace().map(str::to_string).collect();
        let result = self
            .registry
            .submit_guess(&chat_line.channel_id, &chat_line.sender, &words)
            .await;

        if let Some(reply) = render_guess(&result) {
            self.broadcaster.send_to_channel(&chat_line.channel_id, reply).await;
        }
    }
}

pub fn render_key(cards: &[Card]) -> String {
    let entries: Vec<String> = cards
        .iter()
        .map(|card| format!("{}={}", card.word(), card.color()))
        .collect();
    format!("key: {}", entries.join(", "))
}

pub fn render_guess(result: &GuessResult) -> Option<String> {
    let found = result.matched_words.len();
    let text = match result.outcome {
        GuessOutcome::Ignored => return None,
        GuessOutcome::GameLost => "You lose".to_string(),
        GuessOutcome::GameWon => format!("You win! You have guessed {} words!", found),
        GuessOutcome::TurnContinues => format!("You guessed {} out of {}", found, result.team_card_count),
        GuessOutcome::TurnEnded => {
            format!("You guessed {} out of {}. Turn over.", found, result.team_card_count)
        }
    };
    Some(text)
}
