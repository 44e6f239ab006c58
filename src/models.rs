//! Frontend Models
//!
//! Data structures matching the `/activities` payload.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Activity details as sent by the server (the name is the map key)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    #[serde(default)]
    pub category: Option<String>,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// A named activity
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub details: ActivityDetails,
}

impl Activity {
    /// Capacity minus current participant count. Not clamped: an overfull
    /// activity reports a negative value.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.details.max_participants) - self.details.participants.len() as i64
    }

    /// Category, treating an empty string as absent
    pub fn category(&self) -> Option<&str> {
        self.details.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// All activities, in the key order of the server's JSON object.
///
/// Replaced wholesale on every fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityStore {
    entries: Vec<Activity>,
}

impl ActivityStore {
    pub fn new(entries: Vec<Activity>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'de> Deserialize<'de> for ActivityStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StoreVisitor;

        impl<'de> Visitor<'de> for StoreVisitor {
            type Value = ActivityStore;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<Activity> = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    // Later duplicate keys overwrite earlier ones, as JSON.parse does
                    match entries.iter_mut().find(|a| a.name == name) {
                        Some(existing) => existing.details = details,
                        None => entries.push(Activity { name, details }),
                    }
                }
                Ok(ActivityStore { entries })
            }
        }

        deserializer.deserialize_map(StoreVisitor)
    }
}

/// Success payload of sign-up / unregister
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActionAck {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "Chess Club": {
            "description": "Weekly strategy",
            "schedule": "Mondays 3pm",
            "category": "Games",
            "max_participants": 10,
            "participants": ["a@school.edu", "b@school.edu", "c@school.edu"]
        },
        "Art Studio": {
            "description": "Painting and drawing",
            "schedule": "Fridays 4pm",
            "max_participants": 8,
            "participants": []
        }
    }"#;

    fn find<'a>(store: &'a ActivityStore, name: &str) -> &'a Activity {
        store.iter().find(|a| a.name == name).unwrap()
    }

    #[test]
    fn test_store_keeps_server_key_order() {
        let store: ActivityStore = serde_json::from_str(PAYLOAD).unwrap();
        let names: Vec<&str> = store.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Chess Club", "Art Studio"]);
    }

    #[test]
    fn test_missing_category_is_none() {
        let store: ActivityStore = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(find(&store, "Art Studio").category(), None);
        assert_eq!(find(&store, "Chess Club").category(), Some("Games"));
    }

    #[test]
    fn test_spots_left() {
        let store: ActivityStore = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(find(&store, "Chess Club").spots_left(), 7);
        assert_eq!(find(&store, "Art Studio").spots_left(), 8);
    }

    #[test]
    fn test_spots_left_goes_negative_when_overfull() {
        let activity = Activity {
            name: "Tiny".to_string(),
            details: ActivityDetails {
                description: String::new(),
                schedule: String::new(),
                category: None,
                max_participants: 1,
                participants: vec!["x@a.b".into(), "y@a.b".into()],
            },
        };
        assert_eq!(activity.spots_left(), -1);
    }

    #[test]
    fn test_duplicate_key_overwrites_in_place() {
        let json = r#"{
            "A": {"description": "first", "schedule": "", "max_participants": 1},
            "B": {"description": "b", "schedule": "", "max_participants": 1},
            "A": {"description": "second", "schedule": "", "max_participants": 1}
        }"#;
        let store: ActivityStore = serde_json::from_str(json).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.iter().next().unwrap().details.description, "second");
    }

    #[test]
    fn test_malformed_payload_is_rejected() {
        assert!(serde_json::from_str::<ActivityStore>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<ActivityStore>(r#"{"A": {"schedule": ""}}"#).is_err());
    }
}
