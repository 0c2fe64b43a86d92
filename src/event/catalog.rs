use super::EventType;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Catalog entry for one event type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct EventTypeInfo {
    pub description: &'static str,
}

/// Static registry of every canonical event type and its description.
///
/// Serializes to the shape hosts expect:
/// `{"COMMITS_PUSHED": {"description": "..."}, ...}`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventTypeCatalog;

impl EventTypeCatalog {
    pub fn get(&self, event_type: EventType) -> EventTypeInfo {
        EventTypeInfo {
            description: event_type.description(),
        }
    }

    /// Look up an entry by wire name.
    pub fn lookup(&self, name: &str) -> Option<EventTypeInfo> {
        name.parse::<EventType>().ok().map(|t| self.get(t))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EventType, EventTypeInfo)> + '_ {
        EventType::ALL.into_iter().map(move |t| (t, self.get(t)))
    }

    pub fn len(&self) -> usize {
        EventType::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Serialize for EventTypeCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (event_type, info) in self.iter() {
            map.serialize_entry(event_type.as_str(), &info)?;
        }
        map.end()
    }
}
