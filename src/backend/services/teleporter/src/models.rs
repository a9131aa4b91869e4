use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_models::{Identifiable, Timestamped};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Pending,
    Delivered,
    Failed,
}

/// One cross-chain message submitted through the dashboard. Delivery is
/// simulated; the record only tracks what the caller sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IcmMessage {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_chain: Option<String>,
    pub destination_chain_id: String,
    pub recipient: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    pub wallet_address: String,
    pub tx_hash: String,
    pub status: MessageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for IcmMessage {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Timestamped for IcmMessage {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Caller-supplied fields of a new message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub source_chain: Option<String>,
    pub destination_chain_id: String,
    pub recipient: String,
    pub message: String,
    pub amount: Option<String>,
    pub wallet_address: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStatusReport {
    pub status: MessageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeEstimate {
    pub fee_in_wei: String,
    pub fee_in_avax: String,
}

/// Per-wallet counters for the stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStats {
    pub total_sent: u64,
    pub total_received: u64,
    pub pending_messages: u64,
    pub success_rate: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: String,
    pub count: u64,
}

/// Per-wallet aggregates for the analytics endpoint, derived from the
/// message history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageAnalytics {
    pub messages_by_subnet: Vec<SubnetCount>,
    pub messages_by_day: Vec<DailyCount>,
    pub average_delivery_time: f64,
    pub total_volume: f64,
}
