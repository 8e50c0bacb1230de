//! Event-to-notification dispatcher.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crewdesk_core::error::AppError;
use crewdesk_core::events::{DomainEvent, EventSummary};
use crewdesk_core::result::AppResult;
use crewdesk_database::repositories::team::TeamRepository;
use crewdesk_database::repositories::user::UserRepository;
use crewdesk_entity::notification::request::NotificationRequest;
use crewdesk_entity::notification::type_tag::NotificationType;
use crewdesk_entity::team::model::Team;
use crewdesk_realtime::publisher::RealtimePublisher;

use crate::bus::EventHandler;
use crate::dispatch::rules;
use crate::notification::NotificationService;

/// Turns each domain event into stored notifications for the resolved
/// recipients, then pushes a summary on the team's live stream.
///
/// Recipient failures are isolated: one recipient's validation or storage
/// error is logged and the remaining recipients still get theirs.
pub struct NotificationDispatcher {
    notifications: Arc<NotificationService>,
    teams: TeamRepository,
    users: UserRepository,
    realtime: Arc<RealtimePublisher>,
}

impl NotificationDispatcher {
    /// Create a new dispatcher.
    pub fn new(
        notifications: Arc<NotificationService>,
        teams: TeamRepository,
        users: UserRepository,
        realtime: Arc<RealtimePublisher>,
    ) -> Self {
        Self {
            notifications,
            teams,
            users,
            realtime,
        }
    }

    /// Build the notification request for one recipient of an event.
    fn build_request(&self, event: &DomainEvent, team: &Team, recipient: i64) -> NotificationRequest {
        NotificationRequest::new(
            recipient,
            NotificationType::for_event(event.kind).as_str(),
            rules::build_message(event, team),
        )
        .with_team(team.id)
        .with_priority(rules::priority_for(event.kind))
        .with_metadata(rules::build_metadata(event, team))
    }

    /// Fan an event out to its recipients.
    async fn dispatch(&self, event: DomainEvent) -> AppResult<()> {
        let team = self
            .teams
            .find_by_id(event.team_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Team {} not found for event", event.team_id))
            })?;

        let members = self.users.find_ids_by_team(team.id).await?;
        let recipients = rules::resolve_recipients(event.kind, event.origin_user_id, &members);

        debug!(
            event_id = %event.id,
            kind = %event.kind,
            team_id = team.id,
            recipients = recipients.len(),
            "Dispatching event"
        );

        let mut created = 0usize;
        for recipient in &recipients {
            let request = self.build_request(&event, &team, *recipient);
            match self.notifications.create_notification(request).await {
                Ok(_) => created += 1,
                Err(e) => {
                    warn!(
                        event_id = %event.id,
                        kind = %event.kind,
                        user_id = recipient,
                        error = %e,
                        "Failed to notify recipient"
                    );
                }
            }
        }

        // The team stream gets the summary even when the recipient set is
        // empty, so live viewers still see the activity.
        self.realtime.push_team_event(&EventSummary::from_event(&event));

        info!(
            event_id = %event.id,
            kind = %event.kind,
            team_id = team.id,
            created,
            recipients = recipients.len(),
            "Dispatched event"
        );

        Ok(())
    }
}

#[async_trait]
impl EventHandler for NotificationDispatcher {
    fn name(&self) -> &'static str {
        "notification-dispatcher"
    }

    async fn handle(&self, event: DomainEvent) -> AppResult<()> {
        self.dispatch(event).await
    }
}

impl std::fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDispatcher").finish()
    }
}
