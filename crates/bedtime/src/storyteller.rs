use std::future::Future;

use bedtime_core::illustration::illustration_url;
use bedtime_core::story::{build_prompt, parse_story, IllustratedStory, Story, StoryRequest};

use crate::error::Error;

/// Anything that can turn a prompt into free-form model text.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Error>> + Send;
}

/// Builds the prompt, asks the model and turns its reply into a [`Story`].
#[derive(Debug, Clone)]
pub struct Storyteller<G> {
    generator: G,
}

impl<G: TextGenerator> Storyteller<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    #[cfg(test)]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub async fn tell(&self, request: &StoryRequest) -> Result<Story, Error> {
        let prompt = build_prompt(request);
        log::debug!(
            "Asking for a story about {:?} for {:?}",
            request.topic,
            request.child_name
        );

        let reply = self.generator.generate(&prompt).await?;
        log::debug!("Model replied with {} chars", reply.len());

        parse_story(&reply).map_err(|e| {
            log::warn!("Model reply is not a story: {e}");
            Error::Story(e)
        })
    }

    /// Tell a story and attach an illustration URL for its topic.
    pub async fn tell_illustrated(
        &self,
        request: &StoryRequest,
        seed: u64,
    ) -> Result<IllustratedStory, Error> {
        let story = self.tell(request).await?;
        Ok(IllustratedStory::new(
            story,
            illustration_url(&request.topic, seed),
        ))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use bedtime_core::story::StoryError;
    use std::sync::Mutex;

    /// Replies with a canned text and remembers the prompts it was given.
    pub(crate) struct CannedGenerator {
        reply: Result<String, String>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl CannedGenerator {
        pub fn replying(reply: impl Into<String>) -> Self {
            Self {
                reply: Ok(reply.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                reply: Err(message.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for CannedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, Error> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(Error::Network)
        }
    }

    const MIA_REPLY: &str =
        r#"{"title":"Mia's Moon Adventure","content":"Once upon a time, Mia..."}"#;

    #[tokio::test]
    async fn test_moon_story_for_mia() {
        let storyteller = Storyteller::new(CannedGenerator::replying(MIA_REPLY));
        let request = StoryRequest::new("Space Journey to the Moon").with_child_name("Mia");

        let story = storyteller.tell(&request).await.unwrap();

        assert_eq!(
            story,
            Story {
                title: "Mia's Moon Adventure".to_string(),
                content: "Once upon a time, Mia...".to_string(),
            }
        );

        let prompts = storyteller.generator().prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Mia"));
        assert!(prompts[0].contains("Space Journey to the Moon"));
    }

    #[tokio::test]
    async fn test_fenced_reply() {
        let fenced = format!("```json\n{MIA_REPLY}\n```");
        let storyteller = Storyteller::new(CannedGenerator::replying(fenced));

        let story = storyteller
            .tell(&StoryRequest::new("Space Journey to the Moon"))
            .await
            .unwrap();
        assert_eq!(story.title, "Mia's Moon Adventure");
    }

    #[tokio::test]
    async fn test_non_json_reply_is_an_error() {
        let storyteller = Storyteller::new(CannedGenerator::replying(
            "I'm sorry, I can only write poems today.",
        ));

        let err = storyteller
            .tell(&StoryRequest::new("Dragons"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Story(StoryError::InvalidJson(_))));
    }

    #[tokio::test]
    async fn test_generator_failure_is_propagated() {
        let storyteller = Storyteller::new(CannedGenerator::failing("connection reset"));

        let err = storyteller
            .tell(&StoryRequest::new("Dragons"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Network(message) if message == "connection reset"));
    }

    #[tokio::test]
    async fn test_illustrated_story() {
        let storyteller = Storyteller::new(CannedGenerator::replying(MIA_REPLY));
        let request = StoryRequest::new("Space Journey to the Moon").with_child_name("Mia");

        let story = storyteller.tell_illustrated(&request, 99).await.unwrap();

        assert_eq!(story.title, "Mia's Moon Adventure");
        assert_eq!(
            story.image_url,
            illustration_url("Space Journey to the Moon", 99)
        );
    }
}
