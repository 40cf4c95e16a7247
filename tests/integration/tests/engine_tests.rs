//! Engine Integration Tests
//!
//! Drives the reputation engine end to end over the in-memory store and a
//! fake transport. No external services are required.
//!
//! Run with: cargo test -p integration-tests --test engine_tests

use futures::stream;
use integration_tests::{fixtures::*, TestBot, DASHBOARD_URL};
use repbot_core::{ChatEvent, IgnoreReason};
use repbot_service::services::testing::FILE_BASE_URL;
use repbot_service::EventOutcome;

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_thanks_creates_record_and_announces() {
    let bot = TestBot::new().unwrap();
    bot.transport.set_photos(bob().id, &[&["bob-photo"]]);

    let outcome = bot.handle(reply_text(&alice(), &bob(), "спасибо")).await.unwrap();
    assert!(matches!(outcome, EventOutcome::Adjusted(ref r) if r.reputation == 1));

    let record = bot.record(bob().id).await.unwrap().expect("record created");
    assert_eq!(record.reputation, 1);
    assert_eq!(record.telegram_id, "202");
    assert_eq!(record.username, "bob");
    assert_eq!(record.fullname, "Bob Builder");
    assert_eq!(
        record.user_avatar,
        format!("{FILE_BASE_URL}/photos/bob-photo.jpg")
    );

    let sent = bot.transport.sent();
    assert_eq!(sent.len(), 1);
    let (chat_id, message) = &sent[0];
    assert_eq!(*chat_id, GROUP);
    assert!(message.text.contains("Bob"));
    assert!(message.text.contains("Alice"));
    assert!(message.text.ends_with('1'));
    assert_eq!(
        message.link.as_ref().map(|l| l.url.as_str()),
        Some(DASHBOARD_URL)
    );
}

#[tokio::test]
async fn test_thumbs_down_sticker_decrements() {
    let bot = TestBot::new().unwrap();
    for _ in 0..3 {
        bot.handle(reply_text(&carol(), &bob(), "спс")).await.unwrap();
    }
    assert_eq!(bot.score(bob().id).await.unwrap(), Some(3));
    bot.transport.clear_sent();

    bot.handle(reply_sticker(&alice(), &bob(), "👎")).await.unwrap();

    assert_eq!(bot.score(bob().id).await.unwrap(), Some(2));
    let texts = bot.transport.sent_texts();
    assert_eq!(texts.len(), 2, "sticker notice then score notice");
    assert!(texts[1].ends_with('2'));
}

#[tokio::test]
async fn test_departure_purges_and_restarts_at_one() {
    let bot = TestBot::new().unwrap();
    for _ in 0..5 {
        bot.handle(reply_text(&alice(), &bob(), "благодарю")).await.unwrap();
    }
    assert_eq!(bot.score(bob().id).await.unwrap(), Some(5));

    let outcome = bot.handle(left(&bob())).await.unwrap();
    assert_eq!(outcome, EventOutcome::Purged { existed: true });
    assert_eq!(bot.score(bob().id).await.unwrap(), None);

    bot.handle(reply_text(&alice(), &bob(), "спасибо")).await.unwrap();
    assert_eq!(bot.score(bob().id).await.unwrap(), Some(1));
}

#[tokio::test]
async fn test_departure_without_record() {
    let bot = TestBot::new().unwrap();
    let outcome = bot.handle(left(&carol())).await.unwrap();
    assert_eq!(outcome, EventOutcome::Purged { existed: false });
}

#[tokio::test]
async fn test_new_member_is_greeted_without_ledger_change() {
    let bot = TestBot::new().unwrap();
    let outcome = bot.handle(joined(&carol())).await.unwrap();

    assert_eq!(outcome, EventOutcome::Greeted);
    assert_eq!(bot.record_count().await.unwrap(), 0);
    assert_eq!(bot.transport.sent().len(), 1);
}

// ============================================================================
// Ledger properties
// ============================================================================

#[tokio::test]
async fn test_thank_and_unthank_move_existing_score() {
    let bot = TestBot::new().unwrap();
    bot.handle(reply_text(&alice(), &bob(), "спасибо")).await.unwrap();
    bot.handle(reply_sticker(&carol(), &bob(), "👍")).await.unwrap();
    assert_eq!(bot.score(bob().id).await.unwrap(), Some(2));

    bot.handle(reply_sticker(&carol(), &bob(), "👎")).await.unwrap();
    assert_eq!(bot.score(bob().id).await.unwrap(), Some(1));
}

#[tokio::test]
async fn test_replayed_thanks_are_not_deduplicated() {
    let bot = TestBot::new().unwrap();
    let event = reply_text(&alice(), &bob(), "спасибо");

    bot.handle(event.clone()).await.unwrap();
    bot.handle(event).await.unwrap();

    assert_eq!(bot.score(bob().id).await.unwrap(), Some(2));
}

#[tokio::test]
async fn test_unthank_without_record_starts_at_one() {
    let bot = TestBot::new().unwrap();
    bot.handle(reply_sticker(&alice(), &carol(), "👎")).await.unwrap();
    assert_eq!(bot.score(carol().id).await.unwrap(), Some(1));
}

// ============================================================================
// Rejections
// ============================================================================

#[tokio::test]
async fn test_message_without_reply_is_ignored() {
    let bot = TestBot::new().unwrap();
    let outcome = bot.handle(plain_text(&alice(), "спасибо всем")).await.unwrap();

    assert_eq!(outcome, EventOutcome::Ignored(IgnoreReason::NoReplyTarget));
    assert_eq!(bot.record_count().await.unwrap(), 0);
    assert!(bot.transport.sent().is_empty());
}

#[tokio::test]
async fn test_self_reply_is_ignored() {
    let bot = TestBot::new().unwrap();
    let outcome = bot.handle(reply_text(&alice(), &alice(), "спасибо")).await.unwrap();

    assert_eq!(outcome, EventOutcome::Ignored(IgnoreReason::SelfReply));
    assert_eq!(bot.record_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_reply_between_users_without_usernames_is_ignored() {
    let bot = TestBot::new().unwrap();
    let outcome = bot.handle(reply_text(&carol(), &dave(), "спасибо")).await.unwrap();

    assert_eq!(outcome, EventOutcome::Ignored(IgnoreReason::SelfReply));
    assert_eq!(bot.record_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_thanking_the_bot_is_ignored() {
    let bot = TestBot::new().unwrap();
    let outcome = bot.handle(reply_text(&alice(), &repbot(), "спасибо")).await.unwrap();

    assert_eq!(outcome, EventOutcome::Ignored(IgnoreReason::TargetIsBot));
    assert_eq!(bot.record_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_text_without_gratitude_is_ignored() {
    let bot = TestBot::new().unwrap();
    let outcome = bot.handle(reply_text(&alice(), &bob(), "не помогло")).await.unwrap();

    assert_eq!(outcome, EventOutcome::Ignored(IgnoreReason::NoGratitude));
    assert_eq!(bot.record_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_reply_to_departed_member_is_ignored_for_any_content() {
    let bot = TestBot::new().unwrap();
    bot.transport.set_status(bob().id, "left");

    for event in [
        reply_text(&alice(), &bob(), "спасибо"),
        reply_sticker(&alice(), &bob(), "👍"),
        reply_sticker(&alice(), &bob(), "👎"),
    ] {
        let outcome = bot.handle(event).await.unwrap();
        assert_eq!(outcome, EventOutcome::Ignored(IgnoreReason::TargetLeft));
    }

    assert_eq!(bot.record_count().await.unwrap(), 0);
    assert_eq!(bot.transport.sent().len(), 3, "one departure notice each");
}

#[tokio::test]
async fn test_other_sticker_is_ignored() {
    let bot = TestBot::new().unwrap();
    let outcome = bot.handle(reply_sticker(&alice(), &bob(), "🔥")).await.unwrap();

    assert_eq!(outcome, EventOutcome::Ignored(IgnoreReason::UnrecognizedSticker));
    assert!(bot.transport.sent().is_empty());
}

// ============================================================================
// Engine loop
// ============================================================================

#[tokio::test]
async fn test_concurrent_thanks_lose_no_updates() {
    let bot = TestBot::new().unwrap();
    let actors = [alice(), carol()];

    let events: Vec<ChatEvent> = (0..40)
        .map(|i| reply_text(&actors[i % 2], &bob(), "спасибо"))
        .collect();
    bot.engine.run(stream::iter(events)).await;

    assert_eq!(bot.score(bob().id).await.unwrap(), Some(40));
    assert_eq!(bot.transport.sent().len(), 40);
}

#[tokio::test]
async fn test_polling_errors_do_not_stop_the_loop() {
    let bot = TestBot::new().unwrap();
    let events = vec![
        ChatEvent::PollingError {
            cause: "HTTP error: connection reset".to_string(),
        },
        reply_text(&alice(), &bob(), "спасибо"),
        ChatEvent::PollingError {
            cause: "HTTP error: timed out".to_string(),
        },
        reply_text(&carol(), &bob(), "спасибо"),
    ];

    bot.engine.run(stream::iter(events)).await;

    assert_eq!(bot.score(bob().id).await.unwrap(), Some(2));
}

#[tokio::test]
async fn test_failed_lookups_do_not_stop_the_loop() {
    let bot = TestBot::new().unwrap();
    bot.transport.fail_member_lookup(carol().id);
    bot.transport.panic_on_member_lookup(alice().id);

    let events = vec![
        reply_text(&bob(), &carol(), "спасибо"),
        reply_text(&bob(), &alice(), "спасибо"),
        reply_text(&alice(), &bob(), "спасибо"),
    ];
    bot.engine.run(stream::iter(events)).await;

    assert_eq!(bot.score(bob().id).await.unwrap(), Some(1));
    assert_eq!(bot.record_count().await.unwrap(), 1);
}
