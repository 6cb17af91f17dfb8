use serde_json::Value;

use super::types::{Story, StoryError};

/// Remove markdown code fences from a model reply.
///
/// Every literal "```json" and "```" is dropped wherever it appears, and the
/// result is trimmed. Applying it twice gives the same result as applying it once.
pub fn strip_fences(reply: &str) -> String {
    reply.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse a model reply into a [`Story`].
///
/// The reply may be wrapped in code fences. After stripping, it must be a JSON
/// object whose `title` and `content` fields are non-empty strings. Other keys
/// are ignored.
pub fn parse_story(reply: &str) -> Result<Story, StoryError> {
    let cleaned = strip_fences(reply);

    let value: Value =
        serde_json::from_str(&cleaned).map_err(|e| StoryError::InvalidJson(e.to_string()))?;

    let object = value.as_object().ok_or(StoryError::NotAnObject)?;

    Ok(Story {
        title: string_field(object, "title")?,
        content: string_field(object, "content")?,
    })
}

fn string_field(
    object: &serde_json::Map<String, Value>,
    name: &'static str,
) -> Result<String, StoryError> {
    let text = object
        .get(name)
        .ok_or(StoryError::MissingField(name))?
        .as_str()
        .ok_or(StoryError::WrongType(name))?;

    if text.is_empty() {
        return Err(StoryError::EmptyField(name));
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str =
        r#"{"title":"Mia's Moon Adventure","content":"Once upon a time, Mia..."}"#;

    fn mia() -> Story {
        Story {
            title: "Mia's Moon Adventure".to_string(),
            content: "Once upon a time, Mia...".to_string(),
        }
    }

    #[test]
    fn test_plain_json_passes_through() {
        assert_eq!(parse_story(PLAIN).unwrap(), mia());
    }

    #[test]
    fn test_json_fence_matches_unwrapped() {
        let fenced = format!("```json\n{PLAIN}\n```");
        assert_eq!(parse_story(&fenced).unwrap(), parse_story(PLAIN).unwrap());
    }

    #[test]
    fn test_plain_fence_and_whitespace() {
        let fenced = format!("  \n```\n{PLAIN}\n```\n\n");
        assert_eq!(parse_story(&fenced).unwrap(), mia());
    }

    #[test]
    fn test_strip_fences_is_idempotent() {
        let fenced = format!("```json\n{PLAIN}\n```");
        let once = strip_fences(&fenced);
        assert_eq!(strip_fences(&once), once);
        assert_eq!(once, PLAIN);
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let reply = r#"{"title":"T","content":"C","moral":"sleep well"}"#;
        let story = parse_story(reply).unwrap();
        assert_eq!(story.title, "T");
        assert_eq!(story.content, "C");
    }

    #[test]
    fn test_not_json() {
        let err = parse_story("Once upon a time there was no JSON.").unwrap_err();
        assert!(matches!(err, StoryError::InvalidJson(_)));
    }

    #[test]
    fn test_empty_reply() {
        assert!(matches!(
            parse_story("```json\n```").unwrap_err(),
            StoryError::InvalidJson(_)
        ));
    }

    #[test]
    fn test_not_an_object() {
        assert_eq!(
            parse_story(r#"["title", "content"]"#).unwrap_err(),
            StoryError::NotAnObject
        );
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(
            parse_story(r#"{"title":"Only a title"}"#).unwrap_err(),
            StoryError::MissingField("content")
        );
    }

    #[test]
    fn test_wrong_type() {
        assert_eq!(
            parse_story(r#"{"title":42,"content":"C"}"#).unwrap_err(),
            StoryError::WrongType("title")
        );
    }

    #[test]
    fn test_empty_field() {
        assert_eq!(
            parse_story(r#"{"title":"T","content":""}"#).unwrap_err(),
            StoryError::EmptyField("content")
        );
    }

    #[test]
    fn test_whitespace_field_is_returned_as_sent() {
        let story = parse_story(r#"{"title":" ","content":"C"}"#).unwrap();
        assert_eq!(story.title, " ");
        assert_eq!(story.content, "C");
    }
}
