//! Event Model

use serde::{Deserialize, Serialize};

use super::layout::Layout;
use crate::util::null_as_default;

/// Event metadata as served by `GET /event/{eventId}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// Hero image URL
    #[serde(default, alias = "imageUrl", alias = "heroImage", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, alias = "welcomeText", skip_serializing_if = "Option::is_none")]
    pub host_message: Option<String>,
    /// Menu or agenda entries
    #[serde(default, alias = "agenda", deserialize_with = "null_as_default")]
    pub menu: Vec<MenuItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub layout: Layout,
}

/// Menu/agenda entry: either a plain string or `{name, description?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuItem {
    Plain(String),
    Detailed {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl MenuItem {
    pub fn name(&self) -> &str {
        match self {
            Self::Plain(name) => name,
            Self::Detailed { name, .. } => name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Detailed { description, .. } => description.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_event() {
        let json = r#"{
            "id": "summer",
            "name": "Summer Party",
            "imageUrl": "https://img.example/hero.jpg",
            "welcomeText": "Welcome!",
            "menu": ["Soup", {"name": "Steak", "description": "with fries"}],
            "layout": {"type": "grid", "tables": [{"id": 1, "shape": "round", "x": 0, "y": 0}]}
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.name, "Summer Party");
        assert_eq!(event.image.as_deref(), Some("https://img.example/hero.jpg"));
        assert_eq!(event.host_message.as_deref(), Some("Welcome!"));
        assert_eq!(event.menu.len(), 2);
        assert_eq!(event.menu[0].name(), "Soup");
        assert_eq!(event.menu[1].description(), Some("with fries"));
        assert_eq!(event.layout.tables.len(), 1);
    }

    #[test]
    fn test_minimal_event() {
        let event: Event =
            serde_json::from_str(r#"{"name":"Bare","menu":null,"layout":null}"#).unwrap();
        assert!(event.menu.is_empty());
        assert!(event.layout.tables.is_empty());
    }
}
