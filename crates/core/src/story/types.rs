use serde::{Deserialize, Serialize};

/// Name used when the caller does not say who the story is for.
pub const DEFAULT_CHILD_NAME: &str = "Yorgen";

/// A request for a bedtime story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRequest {
    /// What the story should be about.
    pub topic: String,
    /// The child the story is written for.
    pub child_name: String,
}

impl StoryRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            child_name: DEFAULT_CHILD_NAME.to_string(),
        }
    }

    pub fn with_child_name(mut self, child_name: impl Into<String>) -> Self {
        self.child_name = child_name.into();
        self
    }
}

/// A generated story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub content: String,
}

/// A story paired with the illustration shown above it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IllustratedStory {
    pub title: String,
    pub content: String,
    pub image_url: String,
}

impl IllustratedStory {
    pub fn new(story: Story, image_url: impl Into<String>) -> Self {
        Self {
            title: story.title,
            content: story.content,
            image_url: image_url.into(),
        }
    }
}

/// Ways a model reply can fail to be a story.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoryError {
    #[error("model returned no candidate text")]
    NoCandidates,

    #[error("reply is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("reply is not a JSON object")]
    NotAnObject,

    #[error("reply is missing the `{0}` field")]
    MissingField(&'static str),

    #[error("the `{0}` field is not a string")]
    WrongType(&'static str),

    #[error("the `{0}` field is empty")]
    EmptyField(&'static str),
}
