//! Real-time delivery channel facade.

use tokio::sync::broadcast;
use tracing::trace;

use crewdesk_core::config::realtime::RealtimeConfig;
use crewdesk_core::events::EventSummary;
use crewdesk_entity::notification::model::Notification;

use crate::hub::BroadcastHub;
use crate::types::UnreadCountUpdate;

/// The three live streams the engine exposes to connected clients.
///
/// All pushes are best-effort and non-blocking: a slow or absent
/// subscriber never stalls the dispatcher.
#[derive(Debug)]
pub struct RealtimePublisher {
    /// Per-user stream of full notification records.
    notifications: BroadcastHub<Notification>,
    /// Per-team stream of lightweight event summaries.
    team_events: BroadcastHub<EventSummary>,
    /// Per-user stream of unread-count snapshots.
    unread_counts: BroadcastHub<UnreadCountUpdate>,
}

impl RealtimePublisher {
    /// Create the publisher from realtime configuration.
    pub fn new(config: &RealtimeConfig) -> Self {
        Self {
            notifications: BroadcastHub::new(config.channel_buffer_size),
            team_events: BroadcastHub::new(config.channel_buffer_size),
            unread_counts: BroadcastHub::new(config.channel_buffer_size),
        }
    }

    /// Subscribe to a user's notification stream.
    pub fn subscribe_user_notifications(&self, user_id: i64) -> broadcast::Receiver<Notification> {
        self.notifications.subscribe(user_id)
    }

    /// Subscribe to a team's event-summary stream.
    pub fn subscribe_team_events(&self, team_id: i64) -> broadcast::Receiver<EventSummary> {
        self.team_events.subscribe(team_id)
    }

    /// Subscribe to a user's unread-count stream.
    pub fn subscribe_unread_count(&self, user_id: i64) -> broadcast::Receiver<UnreadCountUpdate> {
        self.unread_counts.subscribe(user_id)
    }

    /// Push a newly persisted notification to its owner's live stream.
    pub fn push_notification(&self, notification: &Notification) {
        let delivered = self
            .notifications
            .publish(notification.user_id, notification.clone());
        trace!(
            user_id = notification.user_id,
            notification_id = notification.id,
            delivered,
            "Pushed notification"
        );
    }

    /// Push an event summary to a team's live stream.
    pub fn push_team_event(&self, summary: &EventSummary) {
        let delivered = self.team_events.publish(summary.team_id, summary.clone());
        trace!(
            team_id = summary.team_id,
            kind = %summary.kind,
            delivered,
            "Pushed team event"
        );
    }

    /// Push a fresh unread-count snapshot for a user.
    pub fn push_unread_count(&self, user_id: i64, count: i64) {
        let update = UnreadCountUpdate::now(user_id, count);
        self.unread_counts.publish(user_id, update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crewdesk_core::events::{DomainEvent, EventKind};
    use crewdesk_entity::notification::priority::NotificationPriority;

    fn sample_notification(id: i64, user_id: i64) -> Notification {
        Notification {
            id,
            user_id,
            message: "test".to_string(),
            type_tag: "TEAM".to_string(),
            is_read: false,
            created_at: Utc::now(),
            read_at: None,
            team_id: Some(7),
            course_id: None,
            priority: NotificationPriority::Normal,
            link: None,
            metadata: None,
            expires_at: None,
        }
    }

    #[tokio::test]
    async fn test_notification_reaches_only_owner() {
        let publisher = RealtimePublisher::new(&RealtimeConfig::default());
        let mut rx_owner = publisher.subscribe_user_notifications(1);
        let mut rx_other = publisher.subscribe_user_notifications(2);

        publisher.push_notification(&sample_notification(10, 1));

        let received = rx_owner.recv().await.unwrap();
        assert_eq!(received.id, 10);
        assert!(rx_other.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_unread_count_stream() {
        let publisher = RealtimePublisher::new(&RealtimeConfig::default());
        let mut rx = publisher.subscribe_unread_count(5);

        publisher.push_unread_count(5, 3);

        let update = rx.recv().await.unwrap();
        assert_eq!(update.user_id, 5);
        assert_eq!(update.count, 3);
    }

    #[tokio::test]
    async fn test_team_event_stream() {
        let publisher = RealtimePublisher::new(&RealtimeConfig::default());
        let mut rx = publisher.subscribe_team_events(7);

        let event = DomainEvent::new(7, EventKind::MemberJoined, Some(3), None, None);
        publisher.push_team_event(&EventSummary::from_event(&event));

        let summary = rx.recv().await.unwrap();
        assert_eq!(summary.team_id, 7);
        assert_eq!(summary.kind, EventKind::MemberJoined);
    }
}
