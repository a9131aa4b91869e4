use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use shared_utils::RandomSource;
use tracing::info;

use crate::errors::{Result, ServiceError};
use crate::models::{
    DailyCount, FeeEstimate, IcmMessage, MessageAnalytics, MessageStats, MessageStatus,
    MessageStatusReport, NewMessage, SubnetCount,
};
use crate::store::MessageRepository;

pub const DEFAULT_GAS_LIMIT: u64 = 200_000;

const WEI_PER_AVAX: u128 = 1_000_000_000_000_000_000;
// 0.001 AVAX flat, 0.0001 AVAX per byte, 25 gwei per unit of gas
const BASE_FEE_WEI: u128 = 1_000_000_000_000_000;
const PER_BYTE_FEE_WEI: u128 = 100_000_000_000_000;
const GAS_PRICE_WEI: u128 = 25_000_000_000;

pub struct TeleporterService {
    store: Arc<dyn MessageRepository>,
    random: Arc<dyn RandomSource>,
}

impl TeleporterService {
    pub fn new(store: Arc<dyn MessageRepository>, random: Arc<dyn RandomSource>) -> Self {
        Self { store, random }
    }

    /// Records a simulated cross-chain send and returns the stored message.
    /// No transaction is submitted; the hash and id are mock values.
    pub async fn send_message(&self, new_message: NewMessage) -> Result<IcmMessage> {
        let tx_hash = format!("0x{}", self.random.hex_string(64));
        let message_id = format!("0x{}", self.random.hex_string(64));

        let message = IcmMessage {
            id: message_id,
            source_chain: new_message.source_chain,
            destination_chain_id: new_message.destination_chain_id,
            recipient: new_message.recipient,
            message: new_message.message,
            amount: new_message.amount,
            wallet_address: new_message.wallet_address,
            tx_hash,
            status: MessageStatus::Pending,
            delivery_time: None,
            created_at: Utc::now(),
        };

        self.store.store_message(message.clone()).await?;
        info!(id = %message.id, destination = %message.destination_chain_id, "ICM message recorded");
        Ok(message)
    }

    /// Mock delivery status: one of the three outcomes at random, with a
    /// 2-11 second delivery time when delivered. The polled outcome is
    /// written back so history reflects the latest known state.
    pub async fn message_status(&self, id: &str) -> Result<MessageStatusReport> {
        if self.store.get_message(id).await?.is_none() {
            return Err(ServiceError::NotFound(format!("message {id}")));
        }

        let status = match self.random.range_u64(0, 3) {
            0 => MessageStatus::Pending,
            1 => MessageStatus::Delivered,
            _ => MessageStatus::Failed,
        };
        let delivery_time = match status {
            MessageStatus::Delivered => Some(self.random.range_u64(2, 12)),
            _ => None,
        };

        self.store.update_status(id, status, delivery_time).await?;

        Ok(MessageStatusReport {
            status,
            delivery_time,
        })
    }

    pub async fn message_history(&self, wallet_address: &str) -> Result<Vec<IcmMessage>> {
        Ok(self.store.list_by_wallet(wallet_address).await?)
    }

    pub async fn message_stats(&self, wallet_address: &str) -> Result<MessageStats> {
        let messages = self.store.list_by_wallet(wallet_address).await?;

        let total_sent = messages.len() as u64;
        let delivered = messages
            .iter()
            .filter(|m| m.status == MessageStatus::Delivered)
            .count() as u64;
        let pending = messages
            .iter()
            .filter(|m| m.status == MessageStatus::Pending)
            .count() as u64;
        let success_rate = if total_sent > 0 {
            (delivered * 100 + total_sent / 2) / total_sent
        } else {
            0
        };

        Ok(MessageStats {
            total_sent,
            // Mock received count, proportional to sends
            total_received: total_sent * 8 / 10,
            pending_messages: pending,
            success_rate,
        })
    }

    /// Aggregates the wallet's history into dashboard analytics. Counts
    /// group by destination chain and by calendar day of submission.
    pub async fn message_analytics(&self, wallet_address: &str) -> Result<MessageAnalytics> {
        let messages = self.store.list_by_wallet(wallet_address).await?;

        let mut by_subnet: BTreeMap<String, u64> = BTreeMap::new();
        let mut by_day: BTreeMap<String, u64> = BTreeMap::new();
        let mut delivery_times = Vec::new();
        let mut total_volume = 0.0;

        for message in &messages {
            *by_subnet
                .entry(message.destination_chain_id.clone())
                .or_insert(0) += 1;
            *by_day
                .entry(message.created_at.date_naive().to_string())
                .or_insert(0) += 1;
            if let Some(seconds) = message.delivery_time {
                delivery_times.push(seconds);
            }
            if let Some(amount) = message.amount.as_deref() {
                if let Ok(value) = amount.parse::<f64>() {
                    total_volume += value;
                }
            }
        }

        let average_delivery_time = if delivery_times.is_empty() {
            0.0
        } else {
            delivery_times.iter().sum::<u64>() as f64 / delivery_times.len() as f64
        };

        Ok(MessageAnalytics {
            messages_by_subnet: by_subnet
                .into_iter()
                .map(|(name, count)| SubnetCount { name, count })
                .collect(),
            messages_by_day: by_day
                .into_iter()
                .map(|(date, count)| DailyCount { date, count })
                .collect(),
            average_delivery_time,
            total_volume,
        })
    }

    /// Fee model of the demo: flat base fee plus a per-byte and a per-gas
    /// component, all in integer wei.
    pub fn estimate_fee(&self, message_size: u64, gas_limit: u64) -> FeeEstimate {
        let total = BASE_FEE_WEI
            + u128::from(message_size) * PER_BYTE_FEE_WEI
            + u128::from(gas_limit) * GAS_PRICE_WEI;

        FeeEstimate {
            fee_in_wei: total.to_string(),
            fee_in_avax: format_ether(total),
        }
    }
}

// 18-decimal rendering with trailing zeros trimmed, "x.0" for whole values.
fn format_ether(wei: u128) -> String {
    let whole = wei / WEI_PER_AVAX;
    let fraction = wei % WEI_PER_AVAX;
    if fraction == 0 {
        return format!("{whole}.0");
    }
    let digits = format!("{fraction:018}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}
