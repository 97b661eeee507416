use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Topic {
    pub name: String,
    pub subtopic: String,
    pub focus_areas: Vec<String>,
}

impl Topic {
    pub fn focus_list(&self) -> String {
        self.focus_areas.join(", ")
    }
}

/// Topic id → topic, as stored in the topic file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TopicCatalog {
    topics: HashMap<String, Topic>,
}

impl TopicCatalog {
    pub fn get(&self, id: &str) -> Option<&Topic> {
        self.topics.get(id)
    }
}
