//! Keyed broadcast hub.

use dashmap::DashMap;
use tokio::sync::broadcast;

/// A map of broadcast channels keyed by an entity id (user or team).
///
/// Channels are created lazily on first subscribe. Publishing to a key
/// with no live subscribers drops the message; publishing never blocks.
/// A sender is only removed once its last receiver is gone, so a
/// subscriber-held stream is never closed underneath the subscriber.
#[derive(Debug)]
pub struct BroadcastHub<T> {
    /// Entity id → broadcast sender.
    channels: DashMap<i64, broadcast::Sender<T>>,
    /// Buffer size for newly created channels.
    buffer_size: usize,
}

impl<T: Clone> BroadcastHub<T> {
    /// Create a new hub.
    pub fn new(buffer_size: usize) -> Self {
        Self {
            channels: DashMap::new(),
            buffer_size,
        }
    }

    /// Subscribe to the channel for `key`, creating it if needed.
    ///
    /// The receiver only observes messages published after this call;
    /// there is no backlog replay.
    pub fn subscribe(&self, key: i64) -> broadcast::Receiver<T> {
        self.channels
            .entry(key)
            .or_insert_with(|| broadcast::channel(self.buffer_size).0)
            .subscribe()
    }

    /// Publish a message to the channel for `key`.
    ///
    /// Returns the number of subscribers that received the message.
    /// A missing channel or one without receivers counts as zero; the
    /// empty channel is pruned so idle keys do not accumulate.
    pub fn publish(&self, key: i64, msg: T) -> usize {
        let delivered = match self.channels.get(&key) {
            Some(tx) => tx.send(msg).unwrap_or(0),
            None => 0,
        };

        if delivered == 0 {
            // Prune only when no receiver is attached.
            self.channels
                .remove_if(&key, |_, tx| tx.receiver_count() == 0);
        }

        delivered
    }

    /// Number of active subscribers for `key`.
    pub fn subscriber_count(&self, key: i64) -> usize {
        self.channels
            .get(&key)
            .map(|tx| tx.receiver_count())
            .unwrap_or(0)
    }

    /// Number of live channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_published_message() {
        let hub = BroadcastHub::new(16);
        let mut rx = hub.subscribe(7);

        assert_eq!(hub.publish(7, "hello".to_string()), 1);
        assert_eq!(rx.recv().await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_publish_without_subscriber_is_dropped() {
        let hub: BroadcastHub<String> = BroadcastHub::new(16);
        assert_eq!(hub.publish(7, "lost".to_string()), 0);
        assert_eq!(hub.channel_count(), 0);
    }

    #[tokio::test]
    async fn test_no_backlog_replay() {
        let hub = BroadcastHub::new(16);
        let mut early = hub.subscribe(1);
        hub.publish(1, 1u32);

        // A late subscriber must not see the earlier message.
        let mut late = hub.subscribe(1);
        hub.publish(1, 2u32);

        assert_eq!(early.recv().await.unwrap(), 1);
        assert_eq!(early.recv().await.unwrap(), 2);
        assert_eq!(late.recv().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let hub = BroadcastHub::new(16);
        let mut rx_a = hub.subscribe(1);
        let _rx_b = hub.subscribe(2);

        hub.publish(1, "a".to_string());
        assert_eq!(rx_a.recv().await.unwrap(), "a");
        assert_eq!(hub.subscriber_count(2), 1);
    }
}
