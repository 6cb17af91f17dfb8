use crate::prelude::{println, *};
use bedtime_core::topics::{presets, Preset};
use colored::Colorize;

#[derive(Debug, clap::Args)]
pub struct TopicsOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: TopicsOptions, _global: crate::Global) -> Result<()> {
    if options.json {
        let json = serde_json::to_string_pretty(presets())
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_topics_text(presets()));
    }

    Ok(())
}

fn format_topics_text(presets: &[Preset]) -> String {
    let mut result = String::new();

    for preset in presets {
        result.push_str(&format!(
            "{:<10} {}\n",
            preset.key.yellow().bold(),
            preset.topic.white()
        ));
    }

    result.push_str(&format!(
        "\n{}: {}\n",
        "Use one".green(),
        "bedtime story tell --preset <KEY>".cyan()
    ));

    result
}
