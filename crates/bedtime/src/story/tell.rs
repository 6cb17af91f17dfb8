use crate::config::GeminiOptions;
use crate::prelude::{eprintln, println, *};
use crate::storyteller::{Storyteller, TextGenerator};
use bedtime_core::story::{IllustratedStory, StoryRequest, DEFAULT_CHILD_NAME};
use bedtime_core::topics::{find_preset, presets};
use colored::Colorize;

#[derive(Debug, clap::Args)]
pub struct TellOptions {
    /// What the story should be about
    #[arg(value_name = "TOPIC", required_unless_present = "preset")]
    pub topic: Option<String>,

    /// Use a preset topic instead (see `bedtime story topics`)
    #[arg(long, conflicts_with = "topic")]
    pub preset: Option<String>,

    /// Name of the child the story is for
    #[arg(short, long, env = "BEDTIME_CHILD_NAME", default_value = DEFAULT_CHILD_NAME)]
    pub name: String,

    /// Seed for the illustration (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[clap(flatten)]
    pub gemini: GeminiOptions,
}

pub async fn run(options: TellOptions, global: crate::Global) -> Result<()> {
    let topic = resolve_topic(options.topic.as_deref(), options.preset.as_deref())?;
    let client = options.gemini.client()?;

    if global.verbose {
        eprintln!("Gemini endpoint: {}", client.endpoint());
        eprintln!("Model: {}", client.model());
        eprintln!("Topic: {}", topic);
        eprintln!("Child: {}", options.name);
    }

    let request = StoryRequest::new(topic).with_child_name(options.name);
    let seed = options.seed.unwrap_or_else(rand::random);

    let story = tell_story_data(&Storyteller::new(client), &request, seed)
        .await
        .map_err(|e| {
            log::error!("Error generating story: {e}");
            eyre!("Oops! The magic wand broke. Try again! ({e})")
        })?;

    if options.json {
        let json = serde_json::to_string_pretty(&story)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_story_text(&story));
    }

    Ok(())
}

/// Write an illustrated story and return it (for reuse by the web server).
pub async fn tell_story_data<G: TextGenerator>(
    storyteller: &Storyteller<G>,
    request: &StoryRequest,
    seed: u64,
) -> Result<IllustratedStory, crate::Error> {
    storyteller.tell_illustrated(request, seed).await
}

/// Pick the topic from either a free-form argument or a preset key.
fn resolve_topic(topic: Option<&str>, preset: Option<&str>) -> Result<String> {
    if let Some(key) = preset {
        let preset = find_preset(key).ok_or_else(|| {
            let keys: Vec<&str> = presets().iter().map(|p| p.key).collect();
            eyre!("Unknown preset: {}. Valid presets: {}", key, keys.join(", "))
        })?;
        return Ok(preset.topic.to_string());
    }

    match topic.map(str::trim) {
        Some(topic) if !topic.is_empty() => Ok(topic.to_string()),
        _ => Err(eyre!("A topic or --preset is required")),
    }
}

fn format_story_text(story: &IllustratedStory) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_blue()));
    result.push_str(&format!("{}\n", story.title.bright_magenta().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_blue()));

    result.push_str(&format!(
        "\n{}: {}\n\n",
        "Illustration".green(),
        story.image_url.cyan().underline()
    ));

    result.push_str(&story.content);
    result.push_str("\n\n");
    result.push_str(&format!("{}\n", "Goodnight!".bright_yellow()));

    result
}
