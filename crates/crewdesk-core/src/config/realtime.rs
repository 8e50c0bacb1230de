//! Real-time delivery stream configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the per-user/per-team broadcast streams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Internal buffer size for each broadcast channel.
    ///
    /// A subscriber lagging behind by more than this many messages loses
    /// the oldest ones (standard broadcast semantics).
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer_size: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            channel_buffer_size: default_channel_buffer(),
        }
    }
}

fn default_channel_buffer() -> usize {
    256
}
