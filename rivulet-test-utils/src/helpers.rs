use std::fmt::Debug;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

/// Receives one item, giving the runtime up to `timeout_ms` to deliver it.
///
/// Returns `None` on timeout or when the channel has closed.
pub async fn recv_timeout<T>(rx: &mut mpsc::UnboundedReceiver<T>, timeout_ms: u64) -> Option<T> {
    tokio::time::timeout(Duration::from_millis(timeout_ms), rx.recv())
        .await
        .ok()
        .flatten()
}

/// Asserts that nothing arrives on `rx` within `timeout_ms`.
pub async fn assert_no_recv<T: Debug>(rx: &mut mpsc::UnboundedReceiver<T>, timeout_ms: u64) {
    tokio::select! {
        item = rx.recv() => {
            if let Some(item) = item {
                panic!("unexpected delivery: {item:?}");
            }
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Collects everything currently buffered on `rx` without waiting.
pub fn drain<T>(rx: &mut mpsc::UnboundedReceiver<T>) -> Vec<T> {
    let mut items = Vec::new();
    while let Ok(item) = rx.try_recv() {
        items.push(item);
    }
    items
}
