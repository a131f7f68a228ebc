//! End-to-end dispatch scenarios across the core, channels, and CLI crates.

use chrono::TimeDelta;
use relay_channels::{dispatch_all, ChannelError};
use relay_core::{ChannelKind, Message, ValidationError};
use relay_integration_tests::Harness;

#[tokio::test]
async fn test_whatsapp_text_delivery() {
    let harness = Harness::new();
    let channel = harness
        .factory()
        .create(ChannelKind::WhatsApp, "+5511999999999")
        .unwrap();

    channel.send(&Message::text("Hello").unwrap()).await.unwrap();

    let lines = harness.sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("To: +5511999999999"));
    assert!(lines[0].contains("[TEXT] Hello"));
}

#[tokio::test]
async fn test_telegram_not_implemented() {
    let harness = Harness::new();

    let result = harness.factory().create(ChannelKind::Telegram, "+123");

    assert!(matches!(
        result,
        Err(ChannelError::NotImplemented(ChannelKind::Telegram))
    ));
    assert!(harness.sink.is_empty());
}

#[tokio::test]
async fn test_sequential_sends_keep_order() {
    let harness = Harness::new();
    let channel = harness
        .factory()
        .create(ChannelKind::WhatsApp, "+5511999999999")
        .unwrap();
    let messages = vec![
        Message::text("first").unwrap(),
        Message::video("second", "clip", "mp4", TimeDelta::seconds(5)).unwrap(),
    ];

    let results = dispatch_all(channel.as_ref(), &messages).await.unwrap();

    let lines = harness.sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[TEXT] first"));
    assert!(lines[1].ends_with("[VIDEO] second | File: clip.mp4 | Duration: 5s"));
    assert!(results[0].timestamp <= results[1].timestamp);
    assert_eq!(harness.clock.sleeps().len(), 2);
}

#[tokio::test]
async fn test_missing_message_not_delivered() {
    let harness = Harness::new();
    let channel = harness
        .factory()
        .create(ChannelKind::WhatsApp, "+5511999999999")
        .unwrap();

    let result = channel.send_optional(None).await;

    assert!(matches!(result, Err(ChannelError::MissingMessage)));
    assert!(harness.sink.is_empty());
}

#[test]
fn test_recipient_validation() {
    let harness = Harness::new();
    let factory = harness.factory();

    for blank in ["", "   ", "\t\n"] {
        assert!(matches!(
            factory.create(ChannelKind::WhatsApp, blank),
            Err(ChannelError::Validation(ValidationError::BlankRecipient))
        ));
    }
    assert!(matches!(
        factory.create(ChannelKind::WhatsApp, "5511999999999"),
        Err(ChannelError::Validation(ValidationError::MalformedRecipient { .. }))
    ));
}
