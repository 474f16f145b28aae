//! Chat service. Transcript management around the rule-based responder.
//!
//! The transcript is append-only: a send records the user turn and the bot
//! turn; only `clear` removes anything, and it removes everything.

use crate::domain::responder::{self, BotReply};
use crate::domain::{ChatTurn, DomainError, Sender};
use crate::ports::{ClockPort, StorePort};
use std::sync::Arc;
use tracing::info;

/// Store key for the persisted transcript.
const HISTORY_KEY: &str = "chatbot_history";

/// Greeting appended when the transcript is empty.
pub const WELCOME: &str = "Sannu! Ina taimakon Ciki da Raino. Zan iya amsa tambayoyin ku game da \
ciki, kula da jariri, lafiya, da dai sauransu a cikin Hausa. Me kuke bukata?";

/// Chat service. Selects responses and persists the transcript.
pub struct ChatService {
    store: Arc<dyn StorePort>,
    clock: Arc<dyn ClockPort>,
}

impl ChatService {
    pub fn new(store: Arc<dyn StorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    /// Load the full transcript. Missing or corrupt history reads as empty.
    pub async fn history(&self) -> Result<Vec<ChatTurn>, DomainError> {
        let raw = self.store.get(HISTORY_KEY).await?;
        Ok(raw
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default())
    }

    /// Append the welcome turn when the transcript is empty. Returns the turn
    /// that was added, or None when history already exists.
    pub async fn ensure_welcome(&self) -> Result<Option<ChatTurn>, DomainError> {
        let mut turns = self.history().await?;
        if !turns.is_empty() {
            return Ok(None);
        }
        let turn = ChatTurn {
            sender: Sender::Bot,
            text: WELCOME.to_string(),
            time: self.stamp(),
        };
        turns.push(turn.clone());
        self.persist(&turns).await?;
        Ok(Some(turn))
    }

    /// Record a user message, select the canned reply, record the bot turn.
    /// Returns both turns plus the reply metadata (category for the
    /// confirmation line).
    pub async fn send(&self, text: &str) -> Result<(ChatTurn, ChatTurn, BotReply), DomainError> {
        let mut turns = self.history().await?;

        let user_turn = ChatTurn {
            sender: Sender::User,
            text: text.trim().to_string(),
            time: self.stamp(),
        };
        let reply = responder::select_response(text);
        let bot_turn = ChatTurn {
            sender: Sender::Bot,
            text: reply.answer.to_string(),
            time: self.stamp(),
        };

        turns.push(user_turn.clone());
        turns.push(bot_turn.clone());
        self.persist(&turns).await?;

        info!(category = reply.category, turns = turns.len(), "chat turn recorded");
        Ok((user_turn, bot_turn, reply))
    }

    /// Full clear. Returns false when there was nothing to clear.
    pub async fn clear(&self) -> Result<bool, DomainError> {
        if self.history().await?.is_empty() {
            return Ok(false);
        }
        self.store.remove(HISTORY_KEY).await?;
        info!("chat transcript cleared");
        Ok(true)
    }

    async fn persist(&self, turns: &[ChatTurn]) -> Result<(), DomainError> {
        let json = serde_json::to_string(turns).map_err(|e| DomainError::Store(e.to_string()))?;
        self.store.set(HISTORY_KEY, &json).await
    }

    /// "HH:MM" wall-clock stamp for a turn.
    fn stamp(&self) -> String {
        self.clock.now().format("%H:%M").to_string()
    }
}
