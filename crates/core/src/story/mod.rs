pub mod extract;
pub mod prompt;
pub mod types;

pub use extract::{parse_story, strip_fences};
pub use prompt::build_prompt;
pub use types::{IllustratedStory, Story, StoryError, StoryRequest, DEFAULT_CHILD_NAME};
