use gamify::{EventType, NormalizedEvent};
use serde_json::Value;

use super::api::GitHubActivity;
use crate::error::{ActivityError, Result};
use crate::host::HostCapabilities;

/// GitHub activity types that map to a gamification event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackedActivity {
    Public,
    PullRequest,
    Push,
}

impl TrackedActivity {
    pub const ALL: [TrackedActivity; 3] = [
        TrackedActivity::Public,
        TrackedActivity::PullRequest,
        TrackedActivity::Push,
    ];

    /// Upstream discriminant, e.g. `PushEvent`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackedActivity::Public => "PublicEvent",
            TrackedActivity::PullRequest => "PullRequestEvent",
            TrackedActivity::Push => "PushEvent",
        }
    }

    pub fn from_type(kind: &str) -> Option<Self> {
        TrackedActivity::ALL.into_iter().find(|t| t.as_str() == kind)
    }

    pub fn event_type(&self) -> EventType {
        match self {
            TrackedActivity::Public => EventType::RepositoryOpenSourced,
            TrackedActivity::PullRequest => EventType::PullRequestOpened,
            TrackedActivity::Push => EventType::CommitsPushed,
        }
    }
}

pub fn is_tracked(activity: &GitHubActivity) -> bool {
    TrackedActivity::from_type(&activity.kind).is_some()
}

/// Keep only tracked activities, in feed order.
pub fn filter_tracked(activities: &[GitHubActivity]) -> impl Iterator<Item = &GitHubActivity> {
    activities.iter().filter(|activity| {
        let tracked = is_tracked(activity);
        if !tracked {
            tracing::trace!(id = %activity.id, kind = %activity.kind, "Skipping untracked activity");
        }
        tracked
    })
}

/// Transform one tracked GitHub activity into a normalized event.
///
/// | Activity         | Event                   | Multiplier     |
/// |------------------|-------------------------|----------------|
/// | PublicEvent      | REPOSITORY_OPEN_SOURCED | 1              |
/// | PullRequestEvent | PULL_REQUEST_OPENED     | 1              |
/// | PushEvent        | COMMITS_PUSHED          | distinct_size  |
pub fn activity_to_event<H>(host: &H, activity: &GitHubActivity) -> Result<NormalizedEvent>
where
    H: HostCapabilities + ?Sized,
{
    let tracked = TrackedActivity::from_type(&activity.kind)
        .ok_or_else(|| ActivityError::UntrackedActivity(activity.kind.clone()))?;

    let created_at = activity
        .created_at
        .as_deref()
        .ok_or_else(|| ActivityError::malformed(&activity.id, "missing created_at"))?;
    let timestamp = host.parse_timestamp(created_at)?;

    let multiplier = match tracked {
        TrackedActivity::Public | TrackedActivity::PullRequest => 1,
        TrackedActivity::Push => push_multiplier(activity)?,
    };

    Ok(NormalizedEvent::new(
        activity.id.clone(),
        timestamp,
        tracked.event_type(),
        multiplier,
    ))
}

/// Filter and classify a whole feed. Fails on the first malformed record.
pub fn activities_to_events<H>(host: &H, activities: &[GitHubActivity]) -> Result<Vec<NormalizedEvent>>
where
    H: HostCapabilities + ?Sized,
{
    filter_tracked(activities)
        .map(|activity| activity_to_event(host, activity))
        .collect()
}

fn push_multiplier(activity: &GitHubActivity) -> Result<u64> {
    match activity.push_size() {
        Some(Value::String(s)) => s.trim().parse::<u64>().map_err(|_| {
            ActivityError::malformed(
                &activity.id,
                format!("distinct_size '{}' is not a non-negative integer", s),
            )
        }),
        Some(Value::Number(n)) => n.as_u64().ok_or_else(|| {
            ActivityError::malformed(
                &activity.id,
                format!("distinct_size {} is not a non-negative integer", n),
            )
        }),
        Some(other) => Err(ActivityError::malformed(
            &activity.id,
            format!("distinct_size has unexpected type: {}", other),
        )),
        None => Err(ActivityError::malformed(&activity.id, "missing distinct_size")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostCapabilities;
    use async_trait::async_trait;
    use serde_json::json;

    /// Host with no network; only timestamp parsing is exercised here.
    struct OfflineHost;

    #[async_trait]
    impl HostCapabilities for OfflineHost {
        async fn http_get(&self, url: &str, _: &[(&str, &str)], _: &[(&str, &str)]) -> Result<Value> {
            Err(ActivityError::Status {
                url: url.to_string(),
                status: 503,
            })
        }

        async fn http_post(&self, url: &str, _: &[(&str, &str)], _: &Value) -> Result<Value> {
            Err(ActivityError::Status {
                url: url.to_string(),
                status: 503,
            })
        }
    }

    fn activity(value: Value) -> GitHubActivity {
        serde_json::from_value(value).unwrap()
    }

    fn feed(values: Vec<Value>) -> Vec<GitHubActivity> {
        values.into_iter().map(activity).collect()
    }

    #[test]
    fn test_push_event_uses_distinct_size() {
        let push = activity(json!({
            "id": "1",
            "type": "PushEvent",
            "created_at": "2020-01-01T00:00:00Z",
            "distinct_size": "3"
        }));

        let event = activity_to_event(&OfflineHost, &push).unwrap();
        assert_eq!(
            event,
            NormalizedEvent::new("1", 1577836800000, EventType::CommitsPushed, 3)
        );
    }

    #[test]
    fn test_push_event_reads_payload_distinct_size() {
        let push = activity(json!({
            "id": "9",
            "type": "PushEvent",
            "created_at": "2020-01-01T00:00:00Z",
            "payload": {"size": 5, "distinct_size": 4}
        }));

        assert_eq!(activity_to_event(&OfflineHost, &push).unwrap().multiplier, 4);
    }

    #[test]
    fn test_public_and_pull_request_weigh_one() {
        let public = activity(json!({
            "id": "2",
            "type": "PublicEvent",
            "created_at": "2020-01-01T00:00:00Z"
        }));
        let pull = activity(json!({
            "id": "3",
            "type": "PullRequestEvent",
            "created_at": "2020-01-01T00:00:01Z",
            "distinct_size": "7"
        }));

        let event = activity_to_event(&OfflineHost, &public).unwrap();
        assert_eq!(event.event_type, EventType::RepositoryOpenSourced);
        assert_eq!(event.multiplier, 1);

        let event = activity_to_event(&OfflineHost, &pull).unwrap();
        assert_eq!(event.event_type, EventType::PullRequestOpened);
        assert_eq!(event.multiplier, 1);
        assert_eq!(event.timestamp, 1577836801000);
    }

    #[test]
    fn test_untracked_activity_rejected_by_classifier() {
        let watch = activity(json!({
            "id": "4",
            "type": "WatchEvent",
            "created_at": "2020-01-01T00:00:00Z"
        }));

        let err = activity_to_event(&OfflineHost, &watch).unwrap_err();
        assert!(matches!(err, ActivityError::UntrackedActivity(ref kind) if kind == "WatchEvent"));
    }

    #[test]
    fn test_untracked_activities_filtered_out() {
        let activities = feed(vec![
            json!({"id": "2", "type": "WatchEvent", "created_at": "2020-01-01T00:00:00Z"}),
            json!({"id": "5", "type": "IssuesEvent"}),
            json!({"id": "6", "type": "pushevent", "created_at": "2020-01-01T00:00:00Z"}),
        ]);

        let events = activities_to_events(&OfflineHost, &activities).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_feed_order_preserved() {
        let activities = feed(vec![
            json!({"id": "30", "type": "PublicEvent", "created_at": "2020-01-03T00:00:00Z"}),
            json!({"id": "29", "type": "ForkEvent", "created_at": "2020-01-02T12:00:00Z"}),
            json!({"id": "28", "type": "PushEvent", "created_at": "2020-01-02T00:00:00Z", "distinct_size": "12"}),
            json!({"id": "27", "type": "PullRequestEvent", "created_at": "2020-01-01T00:00:00Z"}),
        ]);

        let events = activities_to_events(&OfflineHost, &activities).unwrap();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["30", "28", "27"]);

        assert_eq!(events[0].event_type, EventType::RepositoryOpenSourced);
        assert_eq!(events[0].multiplier, 1);
        assert_eq!(events[1].event_type, EventType::CommitsPushed);
        assert_eq!(events[1].multiplier, 12);
        assert_eq!(events[2].event_type, EventType::PullRequestOpened);
    }

    #[test]
    fn test_push_without_distinct_size_is_malformed() {
        let activities = feed(vec![
            json!({"id": "1", "type": "PublicEvent", "created_at": "2020-01-01T00:00:00Z"}),
            json!({"id": "2", "type": "PushEvent", "created_at": "2020-01-01T00:00:00Z"}),
        ]);

        let err = activities_to_events(&OfflineHost, &activities).unwrap_err();
        match err {
            ActivityError::MalformedActivity { id, reason } => {
                assert_eq!(id, "2");
                assert_eq!(reason, "missing distinct_size");
            }
            other => panic!("Expected MalformedActivity, got {:?}", other),
        }
    }

    #[test]
    fn test_push_with_invalid_distinct_size_is_malformed() {
        for bad in [json!("three"), json!("-1"), json!(""), json!(2.5), json!(-4), json!(true)] {
            let push = activity(json!({
                "id": "1",
                "type": "PushEvent",
                "created_at": "2020-01-01T00:00:00Z",
                "distinct_size": bad.clone()
            }));
            let err = activity_to_event(&OfflineHost, &push).unwrap_err();
            assert!(
                matches!(err, ActivityError::MalformedActivity { .. }),
                "distinct_size {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_zero_distinct_size_allowed() {
        let push = activity(json!({
            "id": "1",
            "type": "PushEvent",
            "created_at": "2020-01-01T00:00:00Z",
            "distinct_size": "0"
        }));
        assert_eq!(activity_to_event(&OfflineHost, &push).unwrap().multiplier, 0);
    }

    #[test]
    fn test_bad_timestamp_propagates() {
        let public = activity(json!({
            "id": "1",
            "type": "PublicEvent",
            "created_at": "01/01/2020"
        }));
        let err = activity_to_event(&OfflineHost, &public).unwrap_err();
        assert!(matches!(err, ActivityError::InvalidTimestamp { .. }));

        let public = activity(json!({"id": "1", "type": "PublicEvent"}));
        let err = activity_to_event(&OfflineHost, &public).unwrap_err();
        assert!(matches!(err, ActivityError::MalformedActivity { .. }));
    }

    #[test]
    fn test_tracked_activity_table() {
        assert_eq!(TrackedActivity::from_type("PublicEvent"), Some(TrackedActivity::Public));
        assert_eq!(TrackedActivity::from_type("PushEvent"), Some(TrackedActivity::Push));
        assert_eq!(TrackedActivity::from_type("WatchEvent"), None);

        // Every tracked activity maps to a catalog entry
        let catalog = gamify::EventTypeCatalog;
        for tracked in TrackedActivity::ALL {
            assert!(catalog.contains(tracked.event_type().as_str()));
        }
    }
}
