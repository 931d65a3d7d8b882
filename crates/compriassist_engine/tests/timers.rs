use std::sync::{Arc, Mutex};
use std::time::Duration;

use compriassist_engine::{TimerHandle, TimerRegistry};
use pretty_assertions::assert_eq;
use tokio::runtime::Handle;

fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) + Clone + Send + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |value| sink.lock().unwrap().push(value))
}

#[tokio::test(start_paused = true)]
async fn once_fires_after_delay() {
    let (seen, record) = recorder();
    let handle = TimerHandle::once(&Handle::current(), Duration::from_millis(50), move || {
        record(7)
    });

    tokio::time::sleep(Duration::from_millis(49)).await;
    assert!(seen.lock().unwrap().is_empty());

    handle.wait().await;
    assert_eq!(*seen.lock().unwrap(), vec![7]);
}

#[tokio::test(start_paused = true)]
async fn dropping_a_handle_cancels_the_timer() {
    let (seen, record) = recorder();
    let handle = TimerHandle::once(&Handle::current(), Duration::from_millis(10), move || {
        record(1)
    });
    drop(handle);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn ticker_counts_up_then_finishes() {
    let (seen, record) = recorder();
    let handle = TimerHandle::ticker(&Handle::current(), Duration::from_millis(30), 4, record);

    tokio::time::sleep(Duration::from_millis(65)).await;
    assert_eq!(*seen.lock().unwrap(), vec![1, 2]);

    handle.wait().await;
    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3, 4]);
}

#[tokio::test(start_paused = true)]
async fn cancelled_ticker_stops_early() {
    let (seen, record) = recorder();
    let handle = TimerHandle::ticker(&Handle::current(), Duration::from_millis(20), 10, record);

    tokio::time::sleep(Duration::from_millis(45)).await;
    handle.cancel();
    handle.wait().await;
    assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
}

#[tokio::test(start_paused = true)]
async fn rescheduling_a_key_debounces() {
    let (seen, record) = recorder();
    let mut registry = TimerRegistry::new(Handle::current());

    for value in 1..=3 {
        let record = record.clone();
        registry.schedule(9, Duration::from_millis(10), move || record(value));
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(registry.active(), 1);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(*seen.lock().unwrap(), vec![3]);
    assert_eq!(registry.active(), 0);
}

#[tokio::test(start_paused = true)]
async fn distinct_keys_run_independently_until_cancelled() {
    let (seen, record) = recorder();
    let mut registry = TimerRegistry::new(Handle::current());

    let first = record.clone();
    registry.schedule(1, Duration::from_millis(10), move || first(1));
    let second = record.clone();
    registry.schedule(2, Duration::from_millis(20), move || second(2));
    registry.ticker(3, Duration::from_millis(5), 100, record);

    assert!(registry.cancel(3));
    assert!(!registry.cancel(3));

    tokio::time::sleep(Duration::from_millis(15)).await;
    assert_eq!(registry.cancel_all(), 2);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(*seen.lock().unwrap(), vec![1]);
}
