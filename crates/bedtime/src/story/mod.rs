use crate::prelude::*;

pub mod tell;
pub mod topics;

pub use tell::tell_story_data;

#[derive(Debug, clap::Parser)]
#[command(name = "story")]
#[command(about = "Write bedtime stories")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Write a bedtime story about a topic
    #[clap(name = "tell")]
    Tell(tell::TellOptions),

    /// List the preset story topics
    #[clap(name = "topics")]
    Topics(topics::TopicsOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Tell(options) => tell::run(options, global).await,
        Commands::Topics(options) => topics::run(options, global),
    }
}
