use tokio::time::{sleep, Duration};

/// Pauses between remote requests.
pub async fn rate_limit_delay(delay_ms: u64) {
    if delay_ms == 0 {
        return;
    }
    sleep(Duration::from_millis(delay_ms)).await;
}
