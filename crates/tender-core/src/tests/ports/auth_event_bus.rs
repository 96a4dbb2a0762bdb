use crate::{AccessToken, AuthEvent, AuthEventBus, AuthEventKind, Session, UserId};

use tokio::time::{Duration, timeout};

fn session(user: &str) -> Session {
    Session::new(
        AccessToken::new(format!("token-{user}")),
        UserId::from(user),
        format!("{user}@x.com"),
    )
}

#[tokio::test]
async fn given_initial_event_when_subscribed_then_initial_delivered_first() {
    let bus = AuthEventBus::new();
    let mut stream = bus.subscribe_with_initial(AuthEvent::initial(None));

    bus.publish(AuthEvent::signed_in(session("a")));

    let first = stream.next().await.unwrap();
    let second = stream.next().await.unwrap();
    assert_eq!(first.kind, AuthEventKind::InitialSession);
    assert_eq!(second.kind, AuthEventKind::SignedIn);
}

#[tokio::test]
async fn given_bus_dropped_when_next_then_none() {
    let bus = AuthEventBus::new();
    let mut stream = bus.subscribe();

    drop(bus);

    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn given_stream_dropped_when_counted_then_unsubscribed() {
    let bus = AuthEventBus::new();
    let stream = bus.subscribe();
    assert_eq!(bus.subscriber_count(), 1);

    drop(stream);

    assert_eq!(bus.subscriber_count(), 0);
}

#[tokio::test]
async fn given_lagging_subscriber_when_next_then_latest_events_still_delivered() {
    let bus = AuthEventBus::with_capacity(1);
    let mut stream = bus.subscribe();

    bus.publish(AuthEvent::signed_in(session("a")));
    bus.publish(AuthEvent::signed_out());

    let event = timeout(Duration::from_millis(100), stream.next())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(event.kind, AuthEventKind::SignedOut);
}

#[test]
fn given_no_subscribers_when_publish_then_no_panic() {
    let bus = AuthEventBus::new();
    bus.publish(AuthEvent::signed_out());
}
