//! Team event service.
//!
//! Entry point for event production: team operations call
//! [`TeamEventService::publish_team_event`], and the scheduled sweeps call
//! the `sweep_*` methods to synthesize deadline events.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;
use tracing::{info, warn};

use crewdesk_core::config::notifications::NotificationsConfig;
use crewdesk_core::events::{DomainEvent, EventKind};
use crewdesk_core::result::AppResult;
use crewdesk_database::repositories::team::TeamRepository;

use crate::bus::EventBus;

/// Publishes domain events on the bus and runs the deadline sweeps.
pub struct TeamEventService {
    bus: Arc<EventBus>,
    teams: TeamRepository,
    config: NotificationsConfig,
}

impl TeamEventService {
    /// Create a new team event service.
    pub fn new(bus: Arc<EventBus>, teams: TeamRepository, config: NotificationsConfig) -> Self {
        Self { bus, teams, config }
    }

    /// Build and publish a team event.
    ///
    /// Returns the published event so callers can log or echo its id.
    pub fn publish_team_event(
        &self,
        team_id: i64,
        kind: EventKind,
        origin_user_id: Option<i64>,
        details: Option<String>,
        metadata: Option<serde_json::Value>,
    ) -> DomainEvent {
        let event = DomainEvent::new(team_id, kind, origin_user_id, details, metadata);
        info!(
            event_id = %event.id,
            kind = %event.kind,
            team_id,
            "Publishing team event"
        );
        self.bus.publish(event.clone());
        event
    }

    /// Publish a `DeadlineApproaching` event for every team whose deadline
    /// falls within the configured alert window.
    ///
    /// Returns the number of teams alerted. Deliberately stateless: a team
    /// inside the window is alerted on every sweep run until the deadline
    /// passes, which doubles as a reminder escalation.
    pub async fn sweep_approaching_deadlines(&self) -> AppResult<usize> {
        let now = Utc::now();
        let window_end = now + Duration::days(self.config.alert_window_days);
        let teams = self.teams.find_deadline_between(now, window_end).await?;

        let mut alerted = 0usize;
        for team in &teams {
            let Some(deadline) = team.deadline else {
                continue;
            };
            let days_remaining = (deadline - now).num_days();

            self.publish_team_event(
                team.id,
                EventKind::DeadlineApproaching,
                None,
                Some(format!(
                    "Team '{}' deadline is in {} day(s)",
                    team.name, days_remaining
                )),
                Some(json!({ "daysRemaining": days_remaining })),
            );
            alerted += 1;
        }

        if alerted > 0 {
            info!(alerted, "Approaching-deadline sweep complete");
        }
        Ok(alerted)
    }

    /// Publish a `DeadlineReached` event for every team whose deadline has
    /// passed.
    ///
    /// Returns the number of teams alerted. Stateless like the approaching
    /// sweep; recipients keep being reminded each run until the deadline is
    /// moved or cleared.
    pub async fn sweep_reached_deadlines(&self) -> AppResult<usize> {
        let now = Utc::now();
        let teams = self.teams.find_deadline_before(now).await?;

        let mut alerted = 0usize;
        for team in &teams {
            let Some(deadline) = team.deadline else {
                continue;
            };
            if deadline >= now {
                warn!(team_id = team.id, "Deadline query returned a future deadline");
                continue;
            }

            self.publish_team_event(
                team.id,
                EventKind::DeadlineReached,
                None,
                Some(format!("Team '{}' deadline has passed", team.name)),
                None,
            );
            alerted += 1;
        }

        if alerted > 0 {
            info!(alerted, "Reached-deadline sweep complete");
        }
        Ok(alerted)
    }
}

impl std::fmt::Debug for TeamEventService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamEventService")
            .field("bus", &self.bus)
            .finish()
    }
}
