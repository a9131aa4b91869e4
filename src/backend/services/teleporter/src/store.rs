use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{IcmMessage, MessageStatus};

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn store_message(&self, message: IcmMessage) -> Result<()>;
    async fn get_message(&self, id: &str) -> Result<Option<IcmMessage>>;
    async fn update_status(
        &self,
        id: &str,
        status: MessageStatus,
        delivery_time: Option<u64>,
    ) -> Result<()>;
    async fn list_by_wallet(&self, wallet_address: &str) -> Result<Vec<IcmMessage>>;
}

/// Process-lifetime message history.
pub struct InMemoryMessageRepository {
    messages: RwLock<HashMap<String, IcmMessage>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn store_message(&self, message: IcmMessage) -> Result<()> {
        let mut messages = self.messages.write().await;
        messages.insert(message.id.clone(), message);
        Ok(())
    }

    async fn get_message(&self, id: &str) -> Result<Option<IcmMessage>> {
        let messages = self.messages.read().await;
        Ok(messages.get(id).cloned())
    }

    async fn update_status(
        &self,
        id: &str,
        status: MessageStatus,
        delivery_time: Option<u64>,
    ) -> Result<()> {
        let mut messages = self.messages.write().await;
        let Some(message) = messages.get_mut(id) else {
            bail!("Unknown message id: {id}");
        };
        message.status = status;
        message.delivery_time = delivery_time;
        Ok(())
    }

    // Wallet addresses are checksummed hex; history matches them
    // case-insensitively, newest first.
    async fn list_by_wallet(&self, wallet_address: &str) -> Result<Vec<IcmMessage>> {
        let wallet_address = wallet_address.to_lowercase();
        let messages = self.messages.read().await;
        let mut owned: Vec<IcmMessage> = messages
            .values()
            .filter(|message| message.wallet_address.to_lowercase() == wallet_address)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}
