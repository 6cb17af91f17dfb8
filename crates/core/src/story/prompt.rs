use super::types::StoryRequest;

/// Build the model prompt for a bedtime story.
///
/// The topic and child name are interpolated verbatim. The prompt asks the
/// model for a JSON object with exactly the keys `title` and `content`.
pub fn build_prompt(request: &StoryRequest) -> String {
    let name = &request.child_name;
    let topic = &request.topic;

    format!(
        r#"Write a soothing, magical bedtime story for a child named {name}.
The story should be about: {topic}.

Guidelines:
- Tone: Calming, gentle, dreamy, safe.
- Length: About 300-400 words.
- Structure: Start with "Once upon a time, {name}...", have a gentle adventure, and end with the character falling asleep or saying goodnight.
- Vocabulary: Simple, descriptive, sensory (soft clouds, twinkling stars).
- Avoid: Scary elements, loud noises, high energy.

Format the output as a JSON object with exactly these keys:
{{
  "title": "A short, cute title for the story",
  "content": "The full story text..."
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::types::DEFAULT_CHILD_NAME;

    #[test]
    fn test_prompt_contains_topic_and_name() {
        let request = StoryRequest::new("Space Journey to the Moon").with_child_name("Mia");
        let prompt = build_prompt(&request);

        assert!(prompt.contains("Space Journey to the Moon"));
        assert!(prompt.contains("a child named Mia."));
        assert!(prompt.contains("\"Once upon a time, Mia...\""));
    }

    #[test]
    fn test_default_child_name() {
        let prompt = build_prompt(&StoryRequest::new("Big Trucks"));
        assert!(prompt.contains(&format!("a child named {DEFAULT_CHILD_NAME}.")));
    }

    #[test]
    fn test_prompt_requests_json_shape() {
        let prompt = build_prompt(&StoryRequest::new("Dragons"));
        assert!(prompt.contains("\"title\":"));
        assert!(prompt.contains("\"content\":"));
        assert!(prompt.contains("300-400 words"));
    }

    #[test]
    fn test_special_characters_interpolated_verbatim() {
        let request = StoryRequest::new(r#"Cats & "Dogs" {braces} 🐱"#).with_child_name("Zoë-Ann");
        let prompt = build_prompt(&request);

        assert!(prompt.contains(r#"Cats & "Dogs" {braces} 🐱"#));
        assert!(prompt.contains("Zoë-Ann"));
    }
}
