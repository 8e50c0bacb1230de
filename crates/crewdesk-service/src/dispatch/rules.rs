//! Pure mapping rules from a domain event to per-recipient notifications.
//!
//! Everything here is side-effect free so the fan-out behavior can be
//! tested without storage.

use serde_json::json;

use crewdesk_core::events::{DomainEvent, EventKind};
use crewdesk_entity::notification::priority::NotificationPriority;
use crewdesk_entity::team::model::Team;

/// Compute the recipient set for an event.
///
/// Non-fan-out kinds (invitations) target only the user named in the
/// event's origin field. Fan-out kinds target every current team member
/// except the origin user, who does not notify themselves.
pub fn resolve_recipients(
    kind: EventKind,
    origin_user_id: Option<i64>,
    member_ids: &[i64],
) -> Vec<i64> {
    if !kind.notify_all() {
        return origin_user_id.map(|id| vec![id]).unwrap_or_default();
    }

    member_ids
        .iter()
        .copied()
        .filter(|id| Some(*id) != origin_user_id)
        .collect()
}

/// Compute the notification priority for an event kind.
pub fn priority_for(kind: EventKind) -> NotificationPriority {
    if kind.is_critical() {
        return NotificationPriority::High;
    }

    match kind {
        EventKind::InvitationSent | EventKind::TaskAssigned => NotificationPriority::High,
        _ => NotificationPriority::Normal,
    }
}

/// Build the notification message for an event.
///
/// The event's free-text details win when present; otherwise a templated
/// default combining the kind's description and the team name is used.
pub fn build_message(event: &DomainEvent, team: &Team) -> String {
    match &event.details {
        Some(details) if !details.trim().is_empty() => details.clone(),
        _ => format!("{} - Team: {}", event.kind.default_description(), team.name),
    }
}

/// Assemble notification metadata for an event.
///
/// Carries the event kind, team id and name, the origin user when
/// present, and any event metadata object merged on top.
pub fn build_metadata(event: &DomainEvent, team: &Team) -> serde_json::Value {
    let mut metadata = json!({
        "eventKind": event.kind.as_str(),
        "teamId": team.id,
        "teamName": team.name,
    });

    if let Some(origin) = event.origin_user_id {
        metadata["originUserId"] = json!(origin);
    }

    if let (Some(obj), Some(serde_json::Value::Object(extra))) =
        (metadata.as_object_mut(), event.metadata.as_ref())
    {
        for (key, value) in extra {
            obj.insert(key.clone(), value.clone());
        }
    }

    metadata
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: i64, name: &str) -> Team {
        Team {
            id,
            name: name.to_string(),
            description: None,
            deadline: None,
        }
    }

    #[test]
    fn test_fan_out_excludes_origin_user() {
        let recipients = resolve_recipients(EventKind::MemberJoined, Some(2), &[1, 2, 3]);
        assert_eq!(recipients, vec![1, 3]);
    }

    #[test]
    fn test_fan_out_without_origin_targets_all_members() {
        let recipients = resolve_recipients(EventKind::TeamCreated, None, &[1, 2, 3]);
        assert_eq!(recipients, vec![1, 2, 3]);
    }

    #[test]
    fn test_invitation_targets_only_the_invitee() {
        let recipients = resolve_recipients(EventKind::InvitationSent, Some(9), &[1, 2, 3]);
        assert_eq!(recipients, vec![9]);
    }

    #[test]
    fn test_invitation_without_invitee_yields_no_recipients() {
        let recipients = resolve_recipients(EventKind::InvitationSent, None, &[1, 2, 3]);
        assert!(recipients.is_empty());
    }

    #[test]
    fn test_empty_team_yields_no_recipients() {
        let recipients = resolve_recipients(EventKind::TeamUpdated, Some(1), &[]);
        assert!(recipients.is_empty());
    }

    #[test]
    fn test_priority_mapping() {
        assert_eq!(priority_for(EventKind::DeadlineReached), NotificationPriority::High);
        assert_eq!(priority_for(EventKind::TeamDeleted), NotificationPriority::High);
        assert_eq!(priority_for(EventKind::InvitationSent), NotificationPriority::High);
        assert_eq!(priority_for(EventKind::TaskAssigned), NotificationPriority::High);
        assert_eq!(priority_for(EventKind::TeamCreated), NotificationPriority::Normal);
        assert_eq!(priority_for(EventKind::LeaderChanged), NotificationPriority::Normal);
    }

    #[test]
    fn test_message_prefers_event_details() {
        let event = DomainEvent::new(
            7,
            EventKind::MemberJoined,
            Some(2),
            Some("Ana joined the team 'Alpha'".to_string()),
            None,
        );
        assert_eq!(build_message(&event, &team(7, "Alpha")), "Ana joined the team 'Alpha'");
    }

    #[test]
    fn test_message_falls_back_to_template() {
        let event = DomainEvent::new(7, EventKind::TeamCreated, None, None, None);
        let message = build_message(&event, &team(7, "Alpha"));
        assert!(message.contains("Alpha"));
        assert!(message.contains("created"));
    }

    #[test]
    fn test_blank_details_fall_back_to_template() {
        let event = DomainEvent::new(7, EventKind::TeamCreated, None, Some("  ".to_string()), None);
        assert!(build_message(&event, &team(7, "Alpha")).contains("Alpha"));
    }

    #[test]
    fn test_metadata_merges_event_extras() {
        let event = DomainEvent::new(
            7,
            EventKind::DeadlineApproaching,
            None,
            None,
            Some(json!({"daysRemaining": 2})),
        );
        let metadata = build_metadata(&event, &team(7, "Alpha"));

        assert_eq!(metadata["eventKind"], "DEADLINE_APPROACHING");
        assert_eq!(metadata["teamId"], 7);
        assert_eq!(metadata["teamName"], "Alpha");
        assert_eq!(metadata["daysRemaining"], 2);
        assert!(metadata.get("originUserId").is_none());
    }

    #[test]
    fn test_metadata_includes_origin_user() {
        let event = DomainEvent::new(7, EventKind::MemberLeft, Some(4), None, None);
        let metadata = build_metadata(&event, &team(7, "Alpha"));
        assert_eq!(metadata["originUserId"], 4);
    }
}
