//! Built-in lesson catalogs, one per topic.
//!
//! Seed data is embedded at compile time and decoded on first use. The store
//! treats it as input only; nothing is ever written back here.

use crate::io::clock::Clock;
use crate::io::storage::KeyValueStorage;
use crate::model::LessonTask;
use crate::store::TaskStore;

/// Error type for catalog lookups
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown topic: {0} (try `lb topics`)")]
    UnknownTopic(String),
    #[error("could not decode seed data for {topic}: {source}")]
    BadSeed {
        topic: String,
        source: serde_json::Error,
    },
}

/// A topic shown on the landing list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    /// Category key used by the store (e.g. `python`)
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    seed: &'static str,
}

const TOPICS: &[Topic] = &[
    Topic {
        key: "html",
        name: "HTML",
        description: "Learn the fundamentals of HTML document structure, elements, and semantic markup.",
        seed: include_str!("data/html.json"),
    },
    Topic {
        key: "css",
        name: "CSS",
        description: "Master CSS styling, layouts, animations, and responsive design techniques.",
        seed: include_str!("data/css.json"),
    },
    Topic {
        key: "javascript",
        name: "JavaScript",
        description: "Explore JavaScript programming concepts, DOM manipulation, and modern ES6+ features.",
        seed: include_str!("data/javascript.json"),
    },
    Topic {
        key: "python",
        name: "Python",
        description: "Discover Python programming from basics to advanced topics like data analysis and web development.",
        seed: include_str!("data/python.json"),
    },
    Topic {
        key: "java",
        name: "Java",
        description: "Learn object-oriented programming with Java, including classes, inheritance, and application development.",
        seed: include_str!("data/java.json"),
    },
    Topic {
        key: "ruby",
        name: "Ruby",
        description: "Explore Ruby's elegant syntax, object-oriented features, and web development with Rails.",
        seed: include_str!("data/ruby.json"),
    },
];

/// The set of topics and their seed lessons
#[derive(Debug, Clone)]
pub struct Catalog {
    topics: &'static [Topic],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Catalog { topics: TOPICS }
    }

    /// Topics in display order
    pub fn topics(&self) -> &[Topic] {
        self.topics
    }

    pub fn topic(&self, key: &str) -> Result<&Topic, CatalogError> {
        self.topics
            .iter()
            .find(|t| t.key.eq_ignore_ascii_case(key))
            .ok_or_else(|| CatalogError::UnknownTopic(key.to_string()))
    }

    /// Fresh copy of a topic's seed lessons
    pub fn seed_tasks(&self, key: &str) -> Result<Vec<LessonTask>, CatalogError> {
        let topic = self.topic(key)?;
        serde_json::from_str(topic.seed).map_err(|e| CatalogError::BadSeed {
            topic: topic.key.to_string(),
            source: e,
        })
    }

    /// Give the store a topic's seed lessons unless it already tracks that
    /// topic. Progress restored from storage is never overwritten.
    pub fn ensure_seeded<S: KeyValueStorage, C: Clock>(
        &self,
        store: &mut TaskStore<S, C>,
        key: &str,
    ) -> Result<&Topic, CatalogError> {
        let topic = self.topic(key)?;
        if !store.has_category(topic.key) {
            store.set_tasks(topic.key, self.seed_tasks(topic.key)?);
        }
        Ok(topic)
    }

    /// Topics whose name or description contains `term` (case-insensitive).
    /// A blank term matches every topic.
    pub fn search_topics(&self, term: &str) -> Vec<&Topic> {
        let term = term.trim().to_lowercase();
        self.topics
            .iter()
            .filter(|t| {
                term.is_empty()
                    || t.name.to_lowercase().contains(&term)
                    || t.description.to_lowercase().contains(&term)
            })
            .collect()
    }
}
