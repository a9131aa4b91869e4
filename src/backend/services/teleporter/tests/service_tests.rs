use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use mockall::mock;

use chrono::{DateTime, TimeZone, Utc};
use shared_utils::{RandomSource, SeededSource};
use teleporter::errors::ServiceError;
use teleporter::models::{IcmMessage, MessageStatus, NewMessage};
use teleporter::service::{TeleporterService, DEFAULT_GAS_LIMIT};
use teleporter::store::{InMemoryMessageRepository, MessageRepository};

// Mock repositories
mock! {
    pub MessageRepo {}
    #[async_trait]
    impl MessageRepository for MessageRepo {
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
}

// Fixed source so status outcomes are scriptable per test
struct FixedSource {
    pick: u64,
}

impl RandomSource for FixedSource {
    fn hex_string(&self, len: usize) -> String {
        "a".repeat(len)
    }

    fn range_u64(&self, low: u64, _high: u64) -> u64 {
        self.pick.max(low)
    }

    fn range_f64(&self, low: f64, _high: f64) -> f64 {
        low
    }
}

// Test helpers
fn stored_message(
    id: &str,
    wallet: &str,
    destination: &str,
    status: MessageStatus,
    delivery_time: Option<u64>,
    amount: Option<&str>,
    created_at: DateTime<Utc>,
) -> IcmMessage {
    IcmMessage {
        id: id.to_string(),
        source_chain: None,
        destination_chain_id: destination.to_string(),
        recipient: format!("0x{}", "1".repeat(40)),
        message: "hello".to_string(),
        amount: amount.map(str::to_string),
        wallet_address: wallet.to_string(),
        tx_hash: id.to_string(),
        status,
        delivery_time,
        created_at,
    }
}

fn day(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).single().expect("valid date")
}

fn new_message(wallet: &str) -> NewMessage {
    NewMessage {
        source_chain: Some("C-Chain".to_string()),
        destination_chain_id: "43113".to_string(),
        recipient: format!("0x{}", "1".repeat(40)),
        message: "hello subnet".to_string(),
        amount: None,
        wallet_address: wallet.to_string(),
    }
}

#[tokio::test]
async fn send_records_a_pending_message() -> Result<()> {
    let store = Arc::new(InMemoryMessageRepository::new());
    let service = TeleporterService::new(store.clone(), Arc::new(SeededSource::new(9)));

    let message = service.send_message(new_message("0xaaa")).await?;

    assert_eq!(message.status, MessageStatus::Pending);
    assert_eq!(message.id.len(), 66);
    assert!(message.id.starts_with("0x"));
    assert_eq!(message.tx_hash.len(), 66);
    assert_ne!(message.id, message.tx_hash);

    let stored = store.get_message(&message.id).await?.expect("stored");
    assert_eq!(stored.wallet_address, "0xaaa");
    Ok(())
}

#[tokio::test]
async fn same_seed_produces_the_same_identifiers() -> Result<()> {
    let first = TeleporterService::new(
        Arc::new(InMemoryMessageRepository::new()),
        Arc::new(SeededSource::new(7)),
    );
    let second = TeleporterService::new(
        Arc::new(InMemoryMessageRepository::new()),
        Arc::new(SeededSource::new(7)),
    );

    let a = first.send_message(new_message("0xaaa")).await?;
    let b = second.send_message(new_message("0xaaa")).await?;
    assert_eq!(a.id, b.id);
    assert_eq!(a.tx_hash, b.tx_hash);
    Ok(())
}

#[tokio::test]
async fn delivered_status_carries_a_delivery_time() -> Result<()> {
    let store = Arc::new(InMemoryMessageRepository::new());
    // pick=1 selects Delivered; the same source then yields the delivery time
    let service = TeleporterService::new(store.clone(), Arc::new(FixedSource { pick: 1 }));

    let message = service.send_message(new_message("0xaaa")).await?;
    let report = service.message_status(&message.id).await?;

    assert_eq!(report.status, MessageStatus::Delivered);
    let delivery_time = report.delivery_time.expect("delivered sets a time");
    assert!((2..12).contains(&delivery_time));
    Ok(())
}

#[tokio::test]
async fn status_of_unknown_message_is_not_found() {
    let mut mock_repo = MockMessageRepo::new();
    mock_repo
        .expect_get_message()
        .times(1)
        .returning(|_| Ok(None));

    let service = TeleporterService::new(Arc::new(mock_repo), Arc::new(SeededSource::new(1)));

    let err = service
        .message_status("0xmissing")
        .await
        .expect_err("unknown id");
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn polled_status_is_written_back_to_history() -> Result<()> {
    let store = Arc::new(InMemoryMessageRepository::new());
    // pick=1 selects Delivered on every poll
    let service = TeleporterService::new(store, Arc::new(FixedSource { pick: 1 }));

    let message = service.send_message(new_message("0xAaA")).await?;
    assert_eq!(message.status, MessageStatus::Pending);

    let report = service.message_status(&message.id).await?;
    assert_eq!(report.status, MessageStatus::Delivered);

    // History reflects the latest poll, matched case-insensitively
    let history = service.message_history("0xaaa").await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, MessageStatus::Delivered);
    assert_eq!(history[0].delivery_time, report.delivery_time);
    Ok(())
}

#[tokio::test]
async fn history_is_newest_first() -> Result<()> {
    let store = Arc::new(InMemoryMessageRepository::new());
    store
        .store_message(stored_message(
            "0xold", "0xaaa", "43113", MessageStatus::Pending, None, None, day(1, 9),
        ))
        .await?;
    store
        .store_message(stored_message(
            "0xnew", "0xAAA", "43113", MessageStatus::Pending, None, None, day(2, 9),
        ))
        .await?;

    let service = TeleporterService::new(store, Arc::new(SeededSource::new(21)));
    let history = service.message_history("0xaAa").await?;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, "0xnew");
    assert_eq!(history[1].id, "0xold");
    Ok(())
}

#[tokio::test]
async fn stats_aggregate_the_wallet_history() -> Result<()> {
    let store = Arc::new(InMemoryMessageRepository::new());
    store
        .store_message(stored_message(
            "0x1", "0xaaa", "43113", MessageStatus::Delivered, Some(4), None, day(1, 9),
        ))
        .await?;
    store
        .store_message(stored_message(
            "0x2", "0xaaa", "43113", MessageStatus::Pending, None, None, day(2, 9),
        ))
        .await?;
    store
        .store_message(stored_message(
            "0x3", "0xaaa", "dexalot", MessageStatus::Failed, None, None, day(2, 10),
        ))
        .await?;
    store
        .store_message(stored_message(
            "0x4", "0xbbb", "43113", MessageStatus::Pending, None, None, day(2, 11),
        ))
        .await?;

    let service = TeleporterService::new(store, Arc::new(SeededSource::new(2)));
    let stats = service.message_stats("0xaaa").await?;

    assert_eq!(stats.total_sent, 3);
    assert_eq!(stats.pending_messages, 1);
    assert_eq!(stats.success_rate, 33);
    assert_eq!(stats.total_received, 2);

    let empty = service.message_stats("0xccc").await?;
    assert_eq!(empty.total_sent, 0);
    assert_eq!(empty.success_rate, 0);
    Ok(())
}

#[tokio::test]
async fn analytics_group_by_destination_and_day() -> Result<()> {
    let store = Arc::new(InMemoryMessageRepository::new());
    store
        .store_message(stored_message(
            "0x1", "0xaaa", "43113", MessageStatus::Delivered, Some(4), Some("0.5"), day(1, 9),
        ))
        .await?;
    store
        .store_message(stored_message(
            "0x2", "0xaaa", "43113", MessageStatus::Delivered, Some(2), Some("0.75"), day(2, 9),
        ))
        .await?;
    store
        .store_message(stored_message(
            "0x3", "0xaaa", "dexalot", MessageStatus::Pending, None, None, day(2, 10),
        ))
        .await?;

    let service = TeleporterService::new(store, Arc::new(SeededSource::new(3)));
    let analytics = service.message_analytics("0xaaa").await?;

    assert_eq!(analytics.messages_by_subnet.len(), 2);
    let by_43113 = analytics
        .messages_by_subnet
        .iter()
        .find(|entry| entry.name == "43113")
        .expect("43113 counted");
    assert_eq!(by_43113.count, 2);

    assert_eq!(analytics.messages_by_day.len(), 2);
    assert_eq!(analytics.messages_by_day[0].date, "2024-01-01");
    assert_eq!(analytics.messages_by_day[0].count, 1);
    assert_eq!(analytics.messages_by_day[1].date, "2024-01-02");
    assert_eq!(analytics.messages_by_day[1].count, 2);

    assert_eq!(analytics.average_delivery_time, 3.0);
    assert_eq!(analytics.total_volume, 1.25);
    Ok(())
}

#[tokio::test]
async fn history_is_scoped_to_the_wallet() -> Result<()> {
    let store = Arc::new(InMemoryMessageRepository::new());
    let service = TeleporterService::new(store, Arc::new(SeededSource::new(3)));

    service.send_message(new_message("0xaaa")).await?;
    service.send_message(new_message("0xaaa")).await?;
    service.send_message(new_message("0xbbb")).await?;

    assert_eq!(service.message_history("0xaaa").await?.len(), 2);
    assert_eq!(service.message_history("0xbbb").await?.len(), 1);
    assert!(service.message_history("0xccc").await?.is_empty());
    Ok(())
}

#[test]
fn fee_estimate_uses_the_default_gas_limit() {
    let service = TeleporterService::new(
        Arc::new(InMemoryMessageRepository::new()),
        Arc::new(SeededSource::new(1)),
    );

    let small = service.estimate_fee(0, DEFAULT_GAS_LIMIT);
    // 0.001 AVAX base + 200000 * 25 gwei = 0.006 AVAX
    assert_eq!(small.fee_in_wei, "6000000000000000");
    assert_eq!(small.fee_in_avax, "0.006");

    let larger = service.estimate_fee(1000, DEFAULT_GAS_LIMIT);
    assert_eq!(larger.fee_in_wei, "106000000000000000");
    assert_eq!(larger.fee_in_avax, "0.106");
}
