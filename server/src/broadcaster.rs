use tokio::sync::mpsc;

use common::{ChannelId, PlayerId, log};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub channel_id: ChannelId,
    pub recipient: Option<PlayerId>,
    pub text: String,
}

impl OutgoingMessage {
    pub fn render(&self) -> String {
        match &self.recipient {
            Some(player) => format!("[{}] (to {}) {}", self.channel_id, player, self.text),
            None => format!("[{}] {}", self.channel_id, self.text),
        }
    }
}

#[derive(Clone)]
pub struct Broadcaster {
    sender: mpsc::Sender<OutgoingMessage>,
}

impl std::fmt::Debug for Broadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Broadcaster").finish()
    }
}

impl Broadcaster {
    pub fn new(sender: mpsc::Sender<OutgoingMessage>) -> Self {
        Self { sender }
    }

    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<OutgoingMessage>) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self::new(tx), rx)
    }

    pub async fn send_to_channel(&self, channel_id: &ChannelId, text: impl Into<String>) {
        self.send(OutgoingMessage {
            channel_id: channel_id.clone(),
            recipient: None,
            text: text.into(),
        })
        .await;
    }

    pub async fn send_to_player(&self, channel_id: &ChannelId, player: &PlayerId, text: impl Into<String>) {
        self.send(OutgoingMessage {
            channel_id: channel_id.clone(),
            recipient: Some(player.clone()),
            text: text.into(),
        })
        .await;
    }

    async fn send(&self, message: OutgoingMessage) {
        if let Err(e) = self.sender.send(message).await {
            log!("[channel:{}] Failed to deliver reply: receiver closed", e.0.channel_id);
        }
    }
}

pub async fn print_replies(mut receiver: mpsc::Receiver<OutgoingMessage>) {
    while let Some(message) = receiver.recv().await {
        println!("{}", message.render());
    }
}
